//! Alias name and command validation.
//!
//! Decisions are pure apart from file-existence checks. Anything that would
//! need a human answer goes through an injected [`Confirm`].

use std::path::{Path, PathBuf};

use crate::error::{Error, NameRejection, Result};
use crate::registry;
use crate::token;

/// Answers whether a bare name is already an invocable command.
pub trait CommandLookup {
    fn is_system_command(&self, name: &str) -> bool;
}

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

#[cfg(windows)]
const SHELL_BUILTINS: &[&str] = &[
    "assoc", "break", "call", "cd", "chdir", "cls", "color", "copy", "date", "del", "dir", "echo",
    "endlocal", "erase", "exit", "for", "ftype", "goto", "if", "md", "mkdir", "mklink", "move",
    "path", "pause", "popd", "prompt", "pushd", "rd", "rem", "ren", "rename", "rmdir", "set",
    "setlocal", "shift", "start", "time", "title", "type", "ver", "verify", "vol",
];

#[cfg(not(windows))]
const SHELL_BUILTINS: &[&str] = &[
    "alias", "bg", "cd", "command", "echo", "eval", "exec", "exit", "export", "fg", "jobs",
    "read", "set", "shift", "source", "test", "trap", "type", "ulimit", "umask", "unalias",
    "unset", "wait",
];

/// Shell builtins plus every executable reachable through the search path.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommands;

impl CommandLookup for SystemCommands {
    fn is_system_command(&self, name: &str) -> bool {
        if SHELL_BUILTINS.iter().any(|b| b.eq_ignore_ascii_case(name)) {
            return true;
        }
        which::which(name).is_ok()
    }
}

pub struct NameValidator<'a> {
    lookup: &'a dyn CommandLookup,
    cwd: PathBuf,
}

impl<'a> NameValidator<'a> {
    /// `cwd` anchors relative names when checking for existing files.
    pub fn new(lookup: &'a dyn CommandLookup, cwd: impl Into<PathBuf>) -> Self {
        Self {
            lookup,
            cwd: cwd.into(),
        }
    }

    /// Whether `name` may be registered, given the aliases that exist right now.
    ///
    /// Redefining an existing alias is allowed even when the alias itself
    /// resolves as a system command (its shim is on the search path).
    pub fn check_name(&self, name: &str, current_aliases: &[String]) -> Result<()> {
        if name.is_empty() {
            return Err(Error::alias_invalid_name(name, NameRejection::Empty));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(Error::alias_invalid_name(
                name,
                NameRejection::ContainsSpace,
            ));
        }
        if registry::is_bootstrap(name) {
            return Err(Error::alias_invalid_name(name, NameRejection::Reserved));
        }
        registry::validate_alias_id(name)?;

        if self.resolves_on_disk(name) {
            return Err(Error::alias_invalid_name(
                name,
                NameRejection::ShadowsFilesystemEntry,
            ));
        }

        let is_alias = current_aliases.iter().any(|alias| alias == name);
        if !is_alias && self.lookup.is_system_command(name) {
            return Err(Error::alias_invalid_name(
                name,
                NameRejection::ShadowsSystemCommand,
            ));
        }

        Ok(())
    }

    pub fn is_name_available(&self, name: &str, current_aliases: &[String]) -> bool {
        self.check_name(name, current_aliases).is_ok()
    }

    /// Whether the program at the start of `command_line` can be run.
    ///
    /// Accepts an existing path, a system command, or an existing alias.
    /// Anything else is accepted only if `confirm` says so.
    pub fn check_command(
        &self,
        command_line: &str,
        current_aliases: &[String],
        confirm: &mut dyn Confirm,
    ) -> Result<()> {
        let program = token::first_token(command_line).ok_or_else(|| {
            Error::validation_invalid_argument("command", "Command cannot be empty", None, None)
        })?;

        if self.resolves_on_disk(program)
            || self.lookup.is_system_command(program)
            || current_aliases.iter().any(|alias| alias == program)
        {
            return Ok(());
        }

        let question = format!(
            "The program '{}' does not exist. Create alias anyway?",
            program
        );
        if confirm.confirm(&question) {
            return Ok(());
        }

        Err(Error::alias_invalid_command(command_line.trim(), program))
    }

    pub fn is_command_available(
        &self,
        command_line: &str,
        current_aliases: &[String],
        confirm: &mut dyn Confirm,
    ) -> bool {
        self.check_command(command_line, current_aliases, confirm)
            .is_ok()
    }

    fn resolves_on_disk(&self, name: &str) -> bool {
        self.cwd.join(Path::new(name)).exists()
    }
}
