//! Shim artifact format.
//!
//! A shim is a tiny script: one preamble line, then one line per command.
//! The alias name is the file name with the shim extension stripped.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimFormat {
    /// File extension without the dot. Empty means the file name is the alias name.
    pub extension: String,
    /// First line of every shim.
    pub preamble: String,
    /// Token that forwards the shim's own arguments to the wrapped program.
    pub forward_args: String,
}

impl Default for ShimFormat {
    fn default() -> Self {
        Self::native()
    }
}

impl ShimFormat {
    pub fn windows() -> Self {
        Self {
            extension: "cmd".to_string(),
            preamble: "@echo off".to_string(),
            forward_args: "%*".to_string(),
        }
    }

    pub fn posix() -> Self {
        Self {
            extension: String::new(),
            preamble: "#!/bin/sh".to_string(),
            forward_args: "\"$@\"".to_string(),
        }
    }

    /// Format for the platform this binary was built for.
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::posix()
        }
    }

    pub fn file_name(&self, alias: &str) -> String {
        if self.extension.is_empty() {
            alias.to_string()
        } else {
            format!("{}.{}", alias, self.extension)
        }
    }

    /// Alias name for a directory entry, or `None` when the entry is not a shim.
    pub fn alias_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        if self.extension.is_empty() {
            if file_name.starts_with('.') {
                return None;
            }
            return Some(file_name);
        }

        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() || !ext.eq_ignore_ascii_case(&self.extension) {
            return None;
        }
        Some(stem)
    }

    /// Full artifact body. No trailing newline after the last command.
    pub fn render(&self, commands: &[String]) -> String {
        let mut body = self.preamble.clone();
        for command in commands {
            body.push('\n');
            body.push_str(command);
        }
        body
    }

    /// Everything after the preamble line, byte for byte.
    pub fn command_text<'a>(&self, body: &'a str) -> &'a str {
        body.split_once('\n').map_or("", |(_, rest)| rest)
    }

    /// Command line that runs `program` with the shim's arguments forwarded.
    pub fn forwarding_command(&self, program: &Path) -> String {
        format!("\"{}\" {}", program.display(), self.forward_args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_puts_preamble_first_without_trailing_newline() {
        let format = ShimFormat::windows();
        let body = format.render(&["echo a".to_string(), "echo b".to_string()]);
        assert_eq!(body, "@echo off\necho a\necho b");
    }

    #[test]
    fn command_text_is_everything_after_first_line() {
        let format = ShimFormat::windows();
        assert_eq!(format.command_text("@echo off\necho hi"), "echo hi");
        assert_eq!(
            format.command_text("@echo off\r\ncd x\r\ndir\r\n"),
            "cd x\r\ndir\r\n"
        );
    }

    #[test]
    fn command_text_of_preamble_only_is_empty() {
        let format = ShimFormat::windows();
        assert_eq!(format.command_text("@echo off"), "");
        assert_eq!(format.command_text("@echo off\n"), "");
    }

    #[test]
    fn alias_name_strips_extension_case_insensitively() {
        let format = ShimFormat::windows();
        assert_eq!(format.alias_name("build.cmd"), Some("build"));
        assert_eq!(format.alias_name("Build.CMD"), Some("Build"));
        assert_eq!(format.alias_name("notes.txt"), None);
        assert_eq!(format.alias_name(".cmd"), None);
        assert_eq!(format.alias_name("readme"), None);
    }

    #[test]
    fn alias_name_without_extension_skips_hidden_files() {
        let format = ShimFormat::posix();
        assert_eq!(format.alias_name("greet"), Some("greet"));
        assert_eq!(format.alias_name(".DS_Store"), None);
    }

    #[test]
    fn forwarding_command_quotes_program() {
        let format = ShimFormat::windows();
        let command = format.forwarding_command(Path::new("C:\\tools\\aliasgen.exe"));
        assert_eq!(command, "\"C:\\tools\\aliasgen.exe\" %*");
    }
}
