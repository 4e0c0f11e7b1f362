use super::*;

/// A rendered comment ready for a bot `sendMessage` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentMessage {
  pub controls: [Control; 4],
  pub parse_mode: &'static str,
  pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct CommentRenderer {
  config: RenderConfig,
}

impl CommentRenderer {
  const PARSE_MODE: &str = "HTML";

  const QUOTE_MARKER: &str = "&gt; ";

  const REPLY_SEPARATOR: &str = "━━━━━━━━━━";

  const SPARKLE: &str = "✨";

  fn footer(&self, comment: &Comment) -> String {
    Control::footer(comment.upvotes, comment.downvotes)
      .iter()
      .map(|control| control.label())
      .collect::<Vec<_>>()
      .join(&self.config.separator)
  }

  fn header(comment: &Comment) -> String {
    format!("<b>comment# {}</b>", comment.index)
  }

  #[must_use]
  pub fn new(config: RenderConfig) -> Self {
    Self { config }
  }

  fn quote(&self, parent_body: &str) -> Vec<String> {
    escape(&truncate(parent_body, self.config.parent_limit))
      .split('\n')
      .map(|line| line.strip_suffix('\r').unwrap_or(line))
      .map(|line| format!("{}{line}", Self::QUOTE_MARKER))
      .collect()
  }

  /// The italic rank badge, wrapped in sparkles for special ranks.
  #[must_use]
  pub fn rank_segment(rank: &Rank) -> String {
    let badge = format!("{} {}", escape(&rank.icon), escape(&rank.label));

    if rank.special {
      format!("<i>{sparkle} {badge} {sparkle}</i>", sparkle = Self::SPARKLE)
    } else {
      format!("<i>{badge}</i>")
    }
  }

  /// Renders a comment block.
  ///
  /// A top-level comment carries its rank on the timestamp line at the
  /// bottom of the block. A reply quotes its parent and carries the rank on
  /// the header line instead.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidCommentError::ZeroIndex`] when the comment index is 0.
  pub fn render(
    &self,
    comment: &Comment,
  ) -> Result<String, InvalidCommentError> {
    if comment.index == 0 {
      return Err(InvalidCommentError::ZeroIndex);
    }

    let body = escape(&comment.body);
    let footer = self.footer(comment);
    let header = Self::header(comment);
    let pad = self.config.pad();
    let rank = Self::rank_segment(&comment.rank);
    let timestamp = escape(&comment.timestamp);

    let lines = match &comment.kind {
      CommentKind::Reply { parent_body } => {
        let mut lines = self.quote(parent_body);

        lines.extend([
          Self::REPLY_SEPARATOR.to_string(),
          body,
          String::new(),
          format!("{header}{pad}{rank}"),
          timestamp,
          footer,
        ]);

        lines
      }
      CommentKind::TopLevel => vec![
        header,
        String::new(),
        body,
        String::new(),
        format!("{timestamp}{pad}{rank}"),
        footer,
      ],
    };

    log::debug!(
      "rendered comment #{} ({}, rank {})",
      comment.index,
      if comment.is_reply() { "reply" } else { "top-level" },
      comment.rank.label
    );

    Ok(lines.join("\n"))
  }

  /// Renders a comment along with the controls for its inline keyboard.
  ///
  /// # Errors
  ///
  /// Fails under the same conditions as [`CommentRenderer::render`].
  pub fn render_message(
    &self,
    comment: &Comment,
  ) -> Result<CommentMessage, InvalidCommentError> {
    Ok(CommentMessage {
      controls: Control::footer(comment.upvotes, comment.downvotes),
      parse_mode: Self::PARSE_MODE,
      text: self.render(comment)?,
    })
  }
}
