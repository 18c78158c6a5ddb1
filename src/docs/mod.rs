const HELP: &str = include_str!("help.md");

/// Markdown printed by `aliasgen help`.
pub fn help() -> &'static str {
    HELP
}
