//! Search-path membership.
//!
//! Decides whether a directory already appears as a segment of a delimited
//! search-path string such as `PATH`. A candidate with a trailing separator
//! still matches a segment written without it.

use serde::Serialize;
use std::env;
use std::path::Path;

use crate::defaults::SearchPathConfig;
use crate::error::{Error, Result};

/// Segment delimiter of a Windows search path.
pub const SEPARATOR: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    Present,
    Absent,
    /// No separator at all and no match; callers treat it as absent.
    Malformed,
}

/// True when `candidate` is a segment of the `;`-delimited `path`.
pub fn contains(candidate: &str, path: &str) -> bool {
    membership(candidate, path, SEPARATOR) == Membership::Present
}

pub fn membership(candidate: &str, path: &str, separator: char) -> Membership {
    if path
        .split(separator)
        .any(|segment| segment_matches(candidate, segment))
    {
        return Membership::Present;
    }

    if path.contains(separator) {
        Membership::Absent
    } else {
        Membership::Malformed
    }
}

fn segment_matches(candidate: &str, segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    segment == candidate || without_last_char(candidate) == Some(segment)
}

fn without_last_char(value: &str) -> Option<&str> {
    let mut chars = value.chars();
    chars.next_back()?;
    Some(chars.as_str())
}

#[derive(Debug, Clone, Serialize)]
pub struct PathStatus {
    pub variable: String,
    pub directory: String,
    pub membership: Membership,
}

impl PathStatus {
    pub fn on_path(&self) -> bool {
        self.membership == Membership::Present
    }
}

/// Check whether `dir` is on the search path held by the configured variable.
///
/// An unset variable reads as empty and reports `Malformed`.
pub fn check(dir: &Path, config: &SearchPathConfig) -> PathStatus {
    let value = env::var_os(&config.variable)
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_default();

    check_value(dir, &value, config)
}

pub fn check_value(dir: &Path, value: &str, config: &SearchPathConfig) -> PathStatus {
    let directory = dir.display().to_string();
    let membership = membership(&directory, value, config.separator);

    if membership == Membership::Malformed {
        crate::log_status!(
            "path",
            "WARNING: {} not formatted correctly",
            config.variable
        );
    }

    PathStatus {
        variable: config.variable.clone(),
        directory,
        membership,
    }
}

/// Fail with step-by-step instructions when the directory is not on the path.
pub fn require(status: &PathStatus) -> Result<()> {
    if status.on_path() {
        return Ok(());
    }

    let mut err = Error::path_not_configured(&status.variable, &status.directory);
    for step in instructions(&status.variable, &status.directory) {
        err = err.with_hint(step);
    }
    Err(err)
}

/// How to add `directory` to the search path on this platform.
pub fn instructions(variable: &str, directory: &str) -> Vec<String> {
    if cfg!(windows) {
        vec![
            "Open start menu. Search for 'System' (not 'System Information')".to_string(),
            "Navigate to System -> Advanced system settings -> Environment Variables".to_string(),
            format!(
                "Under 'System variables', find '{}'. Click on it and click 'Edit...'",
                variable
            ),
            format!("Click 'New' and input '{}' (without the apostrophes)", directory),
            "Save all changes. Run this program again.".to_string(),
        ]
    } else {
        vec![
            format!(
                "Add 'export {}=\"{}:${}\"' to your shell profile",
                variable, directory, variable
            ),
            "Open a new shell. Run this program again.".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(separator: char) -> SearchPathConfig {
        SearchPathConfig {
            variable: "Path".to_string(),
            separator,
            required: true,
        }
    }

    #[test]
    fn every_segment_is_contained() {
        let path = "C:\\Windows;C:\\Windows\\System32;D:\\Tools;";
        for segment in ["C:\\Windows", "C:\\Windows\\System32", "D:\\Tools"] {
            assert!(contains(segment, path), "{} should be found", segment);
        }
        assert!(!contains("zzz-not-present", path));
    }

    #[test]
    fn exact_match() {
        assert!(contains("C:\\Foo", "C:\\Foo;D:\\Bar;"));
    }

    #[test]
    fn trailing_separator_on_candidate_is_tolerated() {
        assert!(contains("C:\\Foo\\", "C:\\Foo;D:\\Bar;"));
        assert!(contains("C:\\Cmd_Aliases\\", "C:\\Windows;C:\\Cmd_Aliases"));
    }

    #[test]
    fn last_segment_without_trailing_delimiter_matches() {
        assert!(contains("D:\\Bar", "C:\\Foo;D:\\Bar"));
    }

    #[test]
    fn empty_segments_never_match() {
        assert_eq!(membership("", ";;", SEPARATOR), Membership::Absent);
        assert_eq!(membership("x", ";;", SEPARATOR), Membership::Absent);
    }

    #[test]
    fn single_segment_without_separator_is_malformed_unless_it_matches() {
        assert_eq!(membership("C:\\Foo", "C:\\Bar", SEPARATOR), Membership::Malformed);
        assert_eq!(membership("C:\\Foo", "C:\\Foo", SEPARATOR), Membership::Present);
        assert_eq!(membership("C:\\Foo", "", SEPARATOR), Membership::Malformed);
        assert!(!contains("C:\\Foo", "C:\\Bar"));
    }

    #[test]
    fn prefix_is_not_a_match() {
        assert!(!contains("C:\\Foo", "C:\\Foobar;D:\\"));
        assert!(!contains("C:\\Fo", "C:\\Foo;D:\\"));
    }

    #[test]
    fn multibyte_last_char_is_trimmed_safely() {
        assert!(contains("C:\\Données\\é", "C:\\Données\\;X"));
    }

    #[test]
    fn very_long_path_does_not_exhaust_stack() {
        let path = (0..200_000)
            .map(|i| format!("C:\\dir{}", i))
            .collect::<Vec<_>>()
            .join(";");
        assert!(contains("C:\\dir199999", &path));
        assert!(!contains("C:\\missing", &path));
    }

    #[test]
    fn unix_separator_is_configurable() {
        let status = check_value(
            Path::new("/home/me/.local/share/aliasgen/bin"),
            "/usr/bin:/home/me/.local/share/aliasgen/bin",
            &config(':'),
        );
        assert!(status.on_path());
    }

    #[test]
    fn require_attaches_instructions() {
        let status = check_value(Path::new("C:\\Cmd_Aliases\\"), "C:\\Windows;", &config(';'));
        let err = require(&status).unwrap_err();
        assert_eq!(err.code.as_str(), "path.not_configured");
        assert!(!err.hints.is_empty());
        assert!(err.hints.iter().any(|h| h.message.contains("C:\\Cmd_Aliases\\")));
    }
}
