use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

static BREAK_WITH_INDENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s+").expect("bad regex"));
static COMMENT_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s#").expect("bad regex"));

/// Turns a schema comment into a schema description.
///
/// Comments written on one line may carry literal `\n` escapes. Those become
/// real line breaks, and any whitespace following a break is dropped so the
/// continuation lines of a multi-line comment start flush left.
#[must_use]
pub fn normalize_description(input: &str) -> String {
  let expanded = input.replace("\\n", "\n");
  BREAK_WITH_INDENT_RE.replace_all(&expanded, "\n").into_owned()
}

/// Renders a single-line string as a YAML scalar, quoting only when a plain
/// scalar would be misread.
#[must_use]
pub fn yaml_scalar(value: &str) -> Cow<'_, str> {
  if needs_quotes(value) {
    Cow::Owned(format!("'{}'", value.replace('\'', "''")))
  } else {
    Cow::Borrowed(value)
  }
}

fn needs_quotes(value: &str) -> bool {
  const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
  ];

  let Some(first) = value.chars().next() else {
    return true;
  };

  INDICATORS.contains(&first)
    || value.starts_with(char::is_whitespace)
    || value.ends_with(char::is_whitespace)
    || value.ends_with(':')
    || value.contains(": ")
    || COMMENT_START_RE.is_match(value)
    || matches!(
      value.to_ascii_lowercase().as_str(),
      "~" | "null" | "true" | "false" | "yes" | "no" | "on" | "off"
    )
    || value.parse::<f64>().is_ok()
}
