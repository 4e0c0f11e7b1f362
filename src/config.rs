use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
  /// Spaces between the left content and the rank badge.
  pub pad_width: usize,
  /// Longest quoted parent excerpt, in characters.
  pub parent_limit: usize,
  /// Placed between footer controls.
  pub separator: String,
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      pad_width: Self::DEFAULT_PAD_WIDTH,
      parent_limit: Self::DEFAULT_PARENT_LIMIT,
      separator: Self::DEFAULT_SEPARATOR.to_string(),
    }
  }
}

impl RenderConfig {
  const DEFAULT_PAD_WIDTH: usize = 20;

  const DEFAULT_PARENT_LIMIT: usize = 100;

  const DEFAULT_SEPARATOR: &str = "  ";

  const PAD_WIDTH_VAR: &str = "COMMENT_CARD_PAD_WIDTH";

  const PARENT_LIMIT_VAR: &str = "COMMENT_CARD_PARENT_LIMIT";

  const SAFE_MODE_VAR: &str = "HOSTING_SAFE_MODE";

  const SAFE_SEPARATOR: &str = " | ";

  /// Builds a configuration from the defaults, overridden by any of
  /// `COMMENT_CARD_PAD_WIDTH`, `COMMENT_CARD_PARENT_LIMIT` and
  /// `HOSTING_SAFE_MODE` that are set.
  ///
  /// # Errors
  ///
  /// Fails when a numeric variable is set but is not a non-negative integer.
  pub fn from_env() -> Result<Self> {
    let mut config = Self::default();

    if let Some(pad_width) = Self::usize_var(Self::PAD_WIDTH_VAR)? {
      config.pad_width = pad_width;
    }

    if let Some(parent_limit) = Self::usize_var(Self::PARENT_LIMIT_VAR)? {
      config.parent_limit = parent_limit;
    }

    if env::var(Self::SAFE_MODE_VAR)
      .is_ok_and(|value| value.trim().eq_ignore_ascii_case("true"))
    {
      log::debug!("hosting safe mode enabled, using ASCII footer separator");
      config.separator = Self::SAFE_SEPARATOR.to_string();
    }

    Ok(config)
  }

  pub(crate) fn pad(&self) -> String {
    " ".repeat(self.pad_width)
  }

  fn usize_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
      Ok(value) => value
        .trim()
        .parse::<usize>()
        .map(Some)
        .with_context(|| format!("invalid value `{value}` for {name}")),
      Err(_) => Ok(None),
    }
  }
}
