//! Alias operations: validation plus registry mutation.
//!
//! The current alias set is read once per operation and handed to the
//! validator explicitly.

use serde::Serialize;

use crate::error::Result;
use crate::registry::{AliasRecord, AliasStore};
use crate::validator::{Confirm, NameValidator};

pub const REPLACE_QUESTION: &str = "You already have an alias with that name. Replace it?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Created,
    Replaced,
    /// The alias existed and the user declined to replace it.
    Cancelled,
}

pub struct AliasService<'a> {
    store: &'a dyn AliasStore,
    validator: NameValidator<'a>,
}

impl<'a> AliasService<'a> {
    pub fn new(store: &'a dyn AliasStore, validator: NameValidator<'a>) -> Self {
        Self { store, validator }
    }

    /// Validate and write `name`. Asks `confirm` before replacing an existing
    /// alias and before accepting a program that cannot be found.
    pub fn add(
        &self,
        name: &str,
        commands: &[String],
        confirm: &mut dyn Confirm,
    ) -> Result<AddOutcome> {
        let current = self.store.list()?;

        self.validator.check_name(name, &current)?;
        for command in commands {
            self.validator.check_command(command, &current, confirm)?;
        }

        let replacing = current.iter().any(|alias| alias == name);
        if replacing && !confirm.confirm(REPLACE_QUESTION) {
            return Ok(AddOutcome::Cancelled);
        }

        self.store.create(name, commands)?;

        Ok(if replacing {
            AddOutcome::Replaced
        } else {
            AddOutcome::Created
        })
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        self.store.delete(name)
    }

    pub fn show(&self, name: &str) -> Result<AliasRecord> {
        self.store.record(name)
    }

    pub fn list(&self) -> Result<Vec<AliasRecord>> {
        self.store.records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ShimRegistry;
    use crate::shim::ShimFormat;
    use crate::validator::CommandLookup;
    use tempfile::tempdir;

    struct NoSystemCommands;

    impl CommandLookup for NoSystemCommands {
        fn is_system_command(&self, name: &str) -> bool {
            name == "echo"
        }
    }

    fn cmds(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn add_creates_then_replaces_after_confirmation() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("aliases"), ShimFormat::windows());
        registry.ensure_dir().unwrap();
        let service = AliasService::new(&registry, NameValidator::new(&NoSystemCommands, dir.path()));

        let outcome = service
            .add("greet", &cmds(&["echo hello"]), &mut |_: &str| false)
            .unwrap();
        assert_eq!(outcome, AddOutcome::Created);

        let mut questions = Vec::new();
        let outcome = service
            .add("greet", &cmds(&["echo howdy"]), &mut |q: &str| {
                questions.push(q.to_string());
                true
            })
            .unwrap();
        assert_eq!(outcome, AddOutcome::Replaced);
        assert_eq!(questions, vec![REPLACE_QUESTION.to_string()]);
        assert_eq!(service.show("greet").unwrap().commands, vec!["echo howdy"]);
    }

    #[test]
    fn declining_replacement_keeps_old_alias() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("aliases"), ShimFormat::windows());
        registry.ensure_dir().unwrap();
        let service = AliasService::new(&registry, NameValidator::new(&NoSystemCommands, dir.path()));

        service
            .add("greet", &cmds(&["echo hello"]), &mut |_: &str| true)
            .unwrap();
        let outcome = service
            .add("greet", &cmds(&["echo bye"]), &mut |_: &str| false)
            .unwrap();

        assert_eq!(outcome, AddOutcome::Cancelled);
        assert_eq!(registry.get("greet").unwrap(), "echo hello");
    }

    #[test]
    fn invalid_name_writes_nothing() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("aliases"), ShimFormat::windows());
        registry.ensure_dir().unwrap();
        let service = AliasService::new(&registry, NameValidator::new(&NoSystemCommands, dir.path()));

        let err = service
            .add("my build", &cmds(&["echo hi"]), &mut |_: &str| true)
            .unwrap_err();
        assert_eq!(err.code.as_str(), "alias.invalid_name");
        assert!(registry.list().unwrap().is_empty());
    }

    #[test]
    fn declined_unknown_program_is_invalid_command() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("aliases"), ShimFormat::windows());
        registry.ensure_dir().unwrap();
        let service = AliasService::new(&registry, NameValidator::new(&NoSystemCommands, dir.path()));

        let err = service
            .add("go", &cmds(&["nosuchprogram --x"]), &mut |_: &str| false)
            .unwrap_err();
        assert_eq!(err.code.as_str(), "alias.invalid_command");
        assert!(!registry.exists("go").unwrap());
    }

    #[test]
    fn multi_command_alias_lists_every_line() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("aliases"), ShimFormat::windows());
        registry.ensure_dir().unwrap();
        let service = AliasService::new(&registry, NameValidator::new(&NoSystemCommands, dir.path()));

        service
            .add("both", &cmds(&["echo one", "echo two"]), &mut |_: &str| true)
            .unwrap();

        let listed = service.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].command_text(), "echo one\necho two");
    }
}
