use super::*;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown rank tier {tier}, expected 1..={max}", max = Tier::all().len())]
pub struct UnknownTierError {
  pub tier: u8,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidCommentError {
  #[error("comment supplied neither an upvote nor a downvote count")]
  MissingVotes,
  #[error("comment rank could not be resolved")]
  Rank(#[from] UnknownTierError),
  #[error("comment index must be positive")]
  ZeroIndex,
}
