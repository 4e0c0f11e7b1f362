//! Renders bot comments into HTML message markup with the author's rank
//! badge aligned to the right of the block.

use {
  anyhow::Context,
  chrono::{DateTime, NaiveDate, NaiveDateTime},
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  std::env,
  thiserror::Error,
  utils::{deserialize_optional_count, escape, is_emoji, truncate},
};

pub use {
  comment::{Comment, CommentKind, CommentRecord},
  config::RenderConfig,
  control::Control,
  error::{InvalidCommentError, UnknownTierError},
  rank::{Rank, Tier, classify, classify_points},
  renderer::{CommentMessage, CommentRenderer},
  utils::format_timestamp,
};

mod comment;
mod config;
mod control;
mod error;
mod rank;
mod renderer;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
