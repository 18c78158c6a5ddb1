//! Input validation primitives.
//!
//! Helpers that turn missing or blank user input into
//! `validation.*` errors instead of ad-hoc checks at every call site.

use crate::error::{Error, Result};

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}

/// Split positional words into a head and at least one trailing word.
///
/// `names` labels the expected positions for the missing-argument error,
/// e.g. `["name", "command"]`.
pub fn require_head_and_rest<'a>(
    words: &'a [String],
    names: [&str; 2],
    usage: &str,
) -> Result<(&'a str, &'a [String])> {
    match words {
        [head, rest @ ..] if !rest.is_empty() => Ok((head.as_str(), rest)),
        [] => Err(missing(&names, usage)),
        [_] => Err(missing(&names[1..], usage)),
        _ => Err(missing(&names, usage)),
    }
}

fn missing(names: &[&str], usage: &str) -> Error {
    Error::validation_missing_argument(names.iter().map(|n| n.to_string()).collect())
        .with_hint(usage.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn require_non_empty_trims_whitespace() {
        assert_eq!(require_non_empty("  greet  ", "name", "msg").unwrap(), "greet");
        assert!(require_non_empty("   ", "name", "Cannot be empty").is_err());
    }

    #[test]
    fn head_and_rest_splits_name_from_command() {
        let args = words(&["build", "cargo", "build"]);
        let (name, rest) = require_head_and_rest(&args, ["name", "command"], "usage").unwrap();
        assert_eq!(name, "build");
        assert_eq!(rest, &args[1..]);
    }

    #[test]
    fn head_without_rest_reports_missing_command() {
        let args = words(&["build"]);
        let err = require_head_and_rest(&args, ["name", "command"], "usage").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.missing_argument");
        assert_eq!(err.details["args"], serde_json::json!(["command"]));
        assert_eq!(err.hints[0].message, "usage");
    }

    #[test]
    fn nothing_reports_both_missing() {
        let err = require_head_and_rest(&[], ["name", "command"], "usage").unwrap_err();
        assert_eq!(err.details["args"], serde_json::json!(["name", "command"]));
    }
}
