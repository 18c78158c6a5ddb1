//! Command-line token helpers.

/// Program part of a command line: the first whitespace-delimited word, or the
/// text inside a leading pair of double quotes.
pub fn first_token(command_line: &str) -> Option<&str> {
    let trimmed = command_line.trim_start();

    if let Some(rest) = trimmed.strip_prefix('"') {
        let quoted = match rest.find('"') {
            Some(end) => &rest[..end],
            None => rest,
        };
        return (!quoted.is_empty()).then_some(quoted);
    }

    trimmed.split_whitespace().next()
}

/// Join words with single spaces, trimming the result.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Parse a yes/no answer. `None` means the answer was not understood.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_token_takes_first_word() {
        assert_eq!(first_token("git status -s"), Some("git"));
        assert_eq!(first_token("   notepad"), Some("notepad"));
    }

    #[test]
    fn first_token_honours_quotes() {
        assert_eq!(
            first_token("\"C:\\Program Files\\app.exe\" --run"),
            Some("C:\\Program Files\\app.exe")
        );
        assert_eq!(first_token("\"unterminated path"), Some("unterminated path"));
    }

    #[test]
    fn first_token_empty_input() {
        assert_eq!(first_token(""), None);
        assert_eq!(first_token("   "), None);
        assert_eq!(first_token("\"\" x"), None);
    }

    #[test]
    fn join_words_uses_single_spaces() {
        assert_eq!(join_words(&["cargo", "build", "--release"]), "cargo build --release");
        assert_eq!(join_words::<&str>(&[]), "");
    }

    #[test]
    fn parse_yes_no_accepts_short_and_long_forms() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no(" YES "), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("no"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
    }
}
