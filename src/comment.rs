use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
  pub body: String,
  pub downvotes: u64,
  pub index: u64,
  pub kind: CommentKind,
  pub rank: Rank,
  pub timestamp: String,
  pub upvotes: u64,
}

impl Comment {
  #[must_use]
  pub fn is_reply(&self) -> bool {
    matches!(self.kind, CommentKind::Reply { .. })
  }

  #[must_use]
  pub fn parent_body(&self) -> Option<&str> {
    match &self.kind {
      CommentKind::Reply { parent_body } => Some(parent_body),
      CommentKind::TopLevel => None,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentKind {
  Reply { parent_body: String },
  TopLevel,
}

/// A comment as handed over by the storage layer, before validation.
///
/// The author's rank may be given resolved (`rank`), as a tier number
/// (`tier`), or as a point total (`points`), checked in that order. With none
/// of them the author gets the entry rank. `timestamp` is shown verbatim,
/// while `created_at` is a stored timestamp that gets formatted first.
#[derive(Clone, Debug, Deserialize)]
pub struct CommentRecord {
  pub body: String,
  pub created_at: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_count")]
  pub downvotes: Option<u64>,
  pub index: u64,
  pub parent_body: Option<String>,
  pub points: Option<u64>,
  pub rank: Option<Rank>,
  pub tier: Option<u8>,
  pub timestamp: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_count")]
  pub upvotes: Option<u64>,
}

impl CommentRecord {
  fn resolve_rank(&self) -> Result<Rank, UnknownTierError> {
    match (&self.rank, self.tier, self.points) {
      (Some(rank), _, _) => Ok(rank.clone().with_checked_icon()),
      (None, Some(tier), _) => classify(tier),
      (None, None, Some(points)) => Ok(classify_points(points)),
      (None, None, None) => Ok(Rank::default()),
    }
  }

  fn resolve_timestamp(&self) -> String {
    match (&self.timestamp, &self.created_at) {
      (Some(timestamp), _) => timestamp.clone(),
      (None, Some(created_at)) => format_timestamp(created_at),
      (None, None) => format_timestamp(""),
    }
  }

  fn resolve_votes(&self) -> Result<(u64, u64), InvalidCommentError> {
    match (self.upvotes, self.downvotes) {
      (None, None) => Err(InvalidCommentError::MissingVotes),
      (Some(upvotes), Some(downvotes)) => Ok((upvotes, downvotes)),
      (upvotes, downvotes) => {
        log::warn!(
          "comment #{} is missing a vote count, defaulting it to 0",
          self.index
        );

        Ok((upvotes.unwrap_or(0), downvotes.unwrap_or(0)))
      }
    }
  }
}

impl TryFrom<CommentRecord> for Comment {
  type Error = InvalidCommentError;

  fn try_from(record: CommentRecord) -> Result<Self, Self::Error> {
    let (upvotes, downvotes) = record.resolve_votes()?;
    let rank = record.resolve_rank()?;
    let timestamp = record.resolve_timestamp();

    let CommentRecord {
      body,
      index,
      parent_body,
      ..
    } = record;

    let kind = match parent_body {
      Some(parent_body) => CommentKind::Reply { parent_body },
      None => CommentKind::TopLevel,
    };

    Ok(Self {
      body,
      downvotes,
      index,
      kind,
      rank,
      timestamp,
      upvotes,
    })
  }
}
