/// One footer control, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
  Downvote(u64),
  Reply,
  Report,
  Upvote(u64),
}

impl Control {
  /// Callback payload for an inline keyboard button acting on the comment
  /// with the given index.
  #[must_use]
  pub fn callback_data(self, index: u64) -> String {
    match self {
      Self::Downvote(_) => format!("dislike_{index}"),
      Self::Reply => format!("reply_{index}"),
      Self::Report => format!("report_{index}"),
      Self::Upvote(_) => format!("like_{index}"),
    }
  }

  #[must_use]
  pub fn footer(upvotes: u64, downvotes: u64) -> [Self; 4] {
    [
      Self::Upvote(upvotes),
      Self::Downvote(downvotes),
      Self::Reply,
      Self::Report,
    ]
  }

  #[must_use]
  pub fn label(self) -> String {
    match self {
      Self::Downvote(count) => format!("👎 {count}"),
      Self::Reply => "💬 Reply".to_string(),
      Self::Report => "🚩 Report".to_string(),
      Self::Upvote(count) => format!("👍 {count}"),
    }
  }
}
