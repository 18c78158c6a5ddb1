use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::shim::ShimFormat;

/// Environment variable that overrides the configured registry directory.
pub const REGISTRY_DIR_ENV: &str = "ALIASGEN_REGISTRY_DIR";

/// Root configuration structure for aliasgen.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AliasgenConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via aliasgen.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_registry_dir")]
    pub registry_dir: String,

    #[serde(default)]
    pub shim: ShimFormat,

    #[serde(default = "default_search_path")]
    pub search_path: SearchPathConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            registry_dir: default_registry_dir(),
            shim: ShimFormat::default(),
            search_path: default_search_path(),
        }
    }
}

/// Configuration for the executable search path check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPathConfig {
    #[serde(default = "default_path_variable")]
    pub variable: String,

    #[serde(default = "default_path_separator")]
    pub separator: char,

    /// Refuse to run alias commands until the registry directory is on the search path.
    #[serde(default = "default_required")]
    pub required: bool,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_registry_dir() -> String {
    if cfg!(windows) {
        "C:\\Cmd_Aliases\\".to_string()
    } else {
        "~/.local/share/aliasgen/bin".to_string()
    }
}

fn default_search_path() -> SearchPathConfig {
    SearchPathConfig {
        variable: default_path_variable(),
        separator: default_path_separator(),
        required: default_required(),
    }
}

fn default_path_variable() -> String {
    if cfg!(windows) {
        "Path".to_string()
    } else {
        "PATH".to_string()
    }
}

fn default_path_separator() -> char {
    if cfg!(windows) {
        ';'
    } else {
        ':'
    }
}

fn default_required() -> bool {
    true
}

impl Defaults {
    /// Registry directory with `~` and environment variables expanded.
    ///
    /// `ALIASGEN_REGISTRY_DIR` takes precedence over the configured value.
    pub fn registry_dir(&self) -> crate::Result<PathBuf> {
        let raw = std::env::var(REGISTRY_DIR_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.registry_dir.clone());

        expand_dir(&raw)
    }
}

fn expand_dir(raw: &str) -> crate::Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|e| {
        crate::Error::config_invalid_value("registry_dir", Some(raw.to_string()), e.to_string())
    })?;

    if expanded.trim().is_empty() {
        return Err(crate::Error::config_invalid_value(
            "registry_dir",
            Some(raw.to_string()),
            "Registry directory cannot be empty",
        ));
    }

    Ok(PathBuf::from(expanded.as_ref()))
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If aliasgen.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full aliasgen.json config, falling back to defaults on any error.
pub fn load_config() -> AliasgenConfig {
    load_config_from_file().unwrap_or_default()
}

/// Attempt to load config from aliasgen.json file.
fn load_config_from_file() -> crate::Result<AliasgenConfig> {
    let path = paths::aliasgen_json()?;

    if !path.exists() {
        return Err(crate::Error::internal_unexpected("aliasgen.json not found"));
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    parse_config(&path.display().to_string(), &content)
}

pub(crate) fn parse_config(source: &str, content: &str) -> crate::Result<AliasgenConfig> {
    serde_json::from_str(content).map_err(|e| crate::Error::config_invalid_json(source, e))
}

/// Check if aliasgen.json file exists
pub fn config_exists() -> bool {
    paths::aliasgen_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete aliasgen.json file (reset to defaults)
pub fn reset_config() -> crate::Result<bool> {
    let path = paths::aliasgen_json()?;

    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to aliasgen.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::aliasgen_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_builtin_defaults() {
        let config = parse_config("test", "{}").unwrap();
        assert_eq!(config.defaults.shim, ShimFormat::native());
        assert!(config.defaults.search_path.required);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = parse_config(
            "test",
            r#"{"defaults":{"registry_dir":"/opt/aliases","search_path":{"required":false}}}"#,
        )
        .unwrap();
        assert_eq!(config.defaults.registry_dir, "/opt/aliases");
        assert!(!config.defaults.search_path.required);
        assert_eq!(
            config.defaults.search_path.variable,
            default_path_variable()
        );
    }

    #[test]
    fn search_path_keys_are_read_from_nested_object() {
        let config = parse_config(
            "test",
            r#"{"defaults":{"search_path":{"variable":"MYPATH","separator":",","required":false}}}"#,
        )
        .unwrap();
        let search = &config.defaults.search_path;
        assert_eq!(search.variable, "MYPATH");
        assert_eq!(search.separator, ',');
        assert!(!search.required);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let err = parse_config("aliasgen.json", "{not json").unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
    }

    #[test]
    fn expand_dir_rejects_empty() {
        assert!(expand_dir("   ").is_err());
    }

    #[test]
    fn expand_dir_keeps_plain_paths() {
        assert_eq!(
            expand_dir("/opt/aliases").unwrap(),
            PathBuf::from("/opt/aliases")
        );
    }
}
