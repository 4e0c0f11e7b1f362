use super::*;

/// Vote counts arrive as numbers, numeric strings, or not at all.
pub(crate) fn deserialize_optional_count<'de, D>(
  deserializer: D,
) -> Result<Option<u64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::Number(n)) => n.as_u64().map(Some).ok_or_else(|| {
      de::Error::invalid_value(
        Unexpected::Other("negative or fractional number"),
        &"non-negative integer",
      )
    }),
    Some(Value::String(s)) => s.trim().parse::<u64>().map(Some).map_err(|_| {
      de::Error::invalid_value(Unexpected::Str(&s), &"non-negative integer")
    }),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"integer or numeric string",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"integer or numeric string",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"integer or numeric string",
    )),
  }
}

pub(crate) fn escape(text: &str) -> String {
  html_escape::encode_text(text).into_owned()
}

/// Formats a stored timestamp as `MM/DD HH:MM`.
///
/// Accepts RFC 3339 and `YYYY-MM-DD HH:MM[:SS]` (optionally `T`-separated,
/// with fractional seconds). A bare date is shown as its first ten
/// characters, and anything else as `unknown date`.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
  const DISPLAY_FORMAT: &str = "%m/%d %H:%M";
  const UNKNOWN: &str = "unknown date";

  let raw = raw.trim();

  if raw.is_empty() {
    return UNKNOWN.to_string();
  }

  if !raw.contains('T') && !raw.contains(' ') {
    let date = raw.get(..10).unwrap_or(raw);

    return if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() {
      date.to_string()
    } else {
      UNKNOWN.to_string()
    };
  }

  if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw.replace(' ', "T")) {
    return parsed.format(DISPLAY_FORMAT).to_string();
  }

  [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
  ]
  .iter()
  .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
  .map_or_else(
    || UNKNOWN.to_string(),
    |parsed| parsed.format(DISPLAY_FORMAT).to_string(),
  )
}

/// True when every character belongs to an emoji block, allowing the
/// joiners and selectors that glue multi-codepoint emoji together.
pub(crate) fn is_emoji(text: &str) -> bool {
  !text.is_empty()
    && text.chars().all(|ch| {
      matches!(
        u32::from(ch),
        0x1F300..=0x1FAFF
          | 0x2600..=0x27BF
          | 0x2B00..=0x2BFF
          | 0x1F1E6..=0x1F1FF
          | 0x200D
          | 0xFE0F
      )
    })
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  if max_chars < 3 {
    return text.chars().take(max_chars).collect();
  }

  let mut result = text
    .chars()
    .take(max_chars - 3)
    .collect::<String>()
    .trim_end()
    .to_string();

  result.push_str("...");

  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Deserialize, Debug, PartialEq)]
  struct CountWrapper {
    #[serde(default, deserialize_with = "deserialize_optional_count")]
    value: Option<u64>,
  }

  fn parse_count(input: &str) -> Result<Option<u64>, serde_json::Error> {
    serde_json::from_str::<CountWrapper>(input).map(|wrapper| wrapper.value)
  }

  #[test]
  fn deserialize_optional_count_supports_numbers_strings_and_null() {
    assert_eq!(parse_count(r#"{"value": 5}"#).unwrap(), Some(5));
    assert_eq!(parse_count(r#"{"value": "12"}"#).unwrap(), Some(12));
    assert_eq!(parse_count(r#"{"value": null}"#).unwrap(), None);
    assert_eq!(parse_count("{}").unwrap(), None);
  }

  #[test]
  fn deserialize_optional_count_rejects_negative_and_non_numeric() {
    assert!(parse_count(r#"{"value": -1}"#).is_err());
    assert!(parse_count(r#"{"value": "many"}"#).is_err());
    assert!(
      parse_count(r#"{"value": true}"#).is_err(),
      "bools should fail deserialization"
    );
  }

  #[test]
  fn escape_encodes_markup_characters() {
    assert_eq!(
      escape("<b>bold</b> & \"quoted\""),
      "&lt;b&gt;bold&lt;/b&gt; &amp; \"quoted\""
    );
  }

  #[test]
  fn escape_preserves_visible_characters() {
    assert_eq!(escape("héllo 👋 world"), "héllo 👋 world");
  }

  #[test]
  fn format_timestamp_handles_iso_and_sql_forms() {
    assert_eq!(format_timestamp("2024-09-13T10:30:00"), "09/13 10:30");
    assert_eq!(format_timestamp("2024-09-13T10:30:00.123456"), "09/13 10:30");
    assert_eq!(format_timestamp("2024-09-13 10:30:45"), "09/13 10:30");
    assert_eq!(format_timestamp("2024-09-13T10:30"), "09/13 10:30");
    assert_eq!(format_timestamp("2024-09-13 10:30"), "09/13 10:30");
    assert_eq!(format_timestamp("2024-09-13T10:30:00Z"), "09/13 10:30");
    assert_eq!(format_timestamp("2024-09-13T10:30:00+02:00"), "09/13 10:30");
  }

  #[test]
  fn format_timestamp_keeps_bare_dates() {
    assert_eq!(format_timestamp("2024-09-13"), "2024-09-13");
  }

  #[test]
  fn format_timestamp_reports_unknown_dates() {
    assert_eq!(format_timestamp(""), "unknown date");
    assert_eq!(format_timestamp("yesterday"), "unknown date");
    assert_eq!(format_timestamp("not a date"), "unknown date");
  }

  #[test]
  fn is_emoji_accepts_rank_icons() {
    for tier in Tier::all() {
      assert!(is_emoji(tier.icon), "{} should be an emoji", tier.icon);
    }

    assert!(is_emoji("✨"));
  }

  #[test]
  fn is_emoji_rejects_text() {
    assert!(!is_emoji(""));
    assert!(!is_emoji("遅"));
    assert!(!is_emoji("A"));
    assert!(!is_emoji("👑x"));
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 10), "This is...");
  }

  #[test]
  fn truncate_never_exceeds_limits_too_small_for_ellipsis() {
    assert_eq!(truncate("abcdef", 2), "ab");
    assert_eq!(truncate("abcdef", 0), "");
    assert_eq!(truncate("abcdef", 3), "...");
  }

  #[test]
  fn truncate_preserves_exact_length_strings() {
    assert_eq!(truncate("exact", 5), "exact");
  }
}
