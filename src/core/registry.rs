//! Alias registry backed by one shim file per alias.
//!
//! The directory listing is the registry: there is no index and no cache,
//! so every call observes the current set of shims.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, NameRejection, Result};
use crate::local_files::{self, FileSystem};
use crate::shim::ShimFormat;

/// Alias that points back at this tool. Never deleted or overwritten by users.
pub const BOOTSTRAP_ALIAS: &str = "alias";

/// Shim file names are case-insensitive on Windows, so `ALIAS` is the bootstrap too.
pub fn is_bootstrap(name: &str) -> bool {
    name.eq_ignore_ascii_case(BOOTSTRAP_ALIAS)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasRecord {
    pub name: String,
    pub commands: Vec<String>,
}

impl AliasRecord {
    pub fn command_text(&self) -> String {
        self.commands.join("\n")
    }
}

/// Storage seam for aliases.
pub trait AliasStore {
    /// Names of every alias, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Command text of `name`: the stored command lines joined by newlines.
    fn get(&self, name: &str) -> Result<String>;

    /// Create or overwrite `name` with `commands`, one per line.
    fn create(&self, name: &str, commands: &[String]) -> Result<()>;

    fn delete(&self, name: &str) -> Result<()>;

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|alias| alias == name))
    }

    fn record(&self, name: &str) -> Result<AliasRecord> {
        let text = self.get(name)?;
        Ok(AliasRecord {
            name: name.to_string(),
            commands: text.lines().map(str::to_string).collect(),
        })
    }

    fn records(&self) -> Result<Vec<AliasRecord>> {
        self.list()?
            .iter()
            .map(|name| self.record(name))
            .collect()
    }
}

/// Registry directory of shim scripts.
#[derive(Debug, Clone)]
pub struct ShimRegistry {
    dir: PathBuf,
    format: ShimFormat,
}

impl ShimRegistry {
    pub fn new(dir: impl Into<PathBuf>, format: ShimFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> &ShimFormat {
        &self.format
    }

    pub fn shim_path(&self, name: &str) -> PathBuf {
        self.dir.join(self.format.file_name(name))
    }

    /// Create the registry directory when missing. Returns true if it was created.
    pub fn ensure_dir(&self) -> Result<bool> {
        local_files::local().ensure_dir(&self.dir)
    }

    /// Path of the shim backing `name`, as it is actually spelled on disk.
    fn existing_shim(&self, name: &str) -> Result<PathBuf> {
        validate_alias_id(name)?;
        let path = self.shim_path(name);
        if path.is_file() {
            return Ok(path);
        }

        // Listed under a differently-cased extension, e.g. `Build.CMD`.
        local_files::local()
            .list(&self.dir)
            .unwrap_or_default()
            .into_iter()
            .filter(|e| !e.is_dir)
            .find(|e| {
                e.file_name()
                    .is_some_and(|file_name| self.format.alias_name(&file_name) == Some(name))
            })
            .map(|e| e.path)
            .ok_or_else(|| Error::alias_not_found(name))
    }
}

impl AliasStore for ShimRegistry {
    fn list(&self) -> Result<Vec<String>> {
        let entries = local_files::local().list(&self.dir)?;

        let mut names: Vec<String> = entries
            .into_iter()
            .filter(|e| !e.is_dir)
            .filter_map(|e| {
                let file_name = e.file_name()?;
                self.format.alias_name(&file_name).map(str::to_string)
            })
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn get(&self, name: &str) -> Result<String> {
        let path = self.existing_shim(name)?;
        let body = local_files::local().read(&path)?;
        Ok(self.format.command_text(&body).to_string())
    }

    fn create(&self, name: &str, commands: &[String]) -> Result<()> {
        validate_alias_id(name)?;
        validate_commands(commands)?;

        let path = self.shim_path(name);
        crate::log_status!("alias", "Generating {}", path.display());

        let fs = local_files::local();
        fs.write(&path, &self.format.render(commands))?;
        fs.make_executable(&path)
    }

    fn delete(&self, name: &str) -> Result<()> {
        if is_bootstrap(name) {
            return Err(Error::alias_protected(name));
        }
        let path = self.existing_shim(name)?;
        local_files::local().delete(&path)?;
        crate::log_status!("alias", "Removed '{}' alias", name);
        Ok(())
    }
}

/// Reject names that cannot be a single file inside the registry directory.
pub(crate) fn validate_alias_id(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::alias_invalid_name(name, NameRejection::Empty));
    }

    if name == "."
        || name == ".."
        || name
            .chars()
            .any(|c| c.is_control() || c == '/' || c == '\\' || c == ':')
    {
        return Err(Error::alias_invalid_name(
            name,
            NameRejection::InvalidCharacters,
        ));
    }

    Ok(())
}

fn validate_commands(commands: &[String]) -> Result<()> {
    if commands.is_empty() {
        return Err(Error::validation_invalid_argument(
            "commands",
            "At least one command is required",
            None,
            None,
        ));
    }

    if let Some(bad) = commands.iter().find(|c| c.contains(['\n', '\r'])) {
        return Err(Error::validation_invalid_argument(
            "commands",
            "Each command must be a single line",
            Some(bad.clone()),
            None,
        ));
    }

    Ok(())
}
