use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base aliasgen config directory (%APPDATA%\aliasgen on Windows, ~/.config/aliasgen elsewhere)
pub fn aliasgen() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("aliasgen"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("aliasgen"))
    }
}

/// Global aliasgen.json config file path
pub fn aliasgen_json() -> Result<PathBuf> {
    Ok(aliasgen()?.join("aliasgen.json"))
}

/// Path of the running executable, used as the bootstrap alias target
pub fn current_exe() -> Result<PathBuf> {
    env::current_exe().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve current executable".to_string()))
    })
}

/// Working directory used to resolve relative names and command paths
pub fn working_dir() -> Result<PathBuf> {
    env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("resolve working directory".to_string())))
}
