//! First-run setup and per-run bootstrap checks.

use serde::Serialize;
use std::path::Path;

use crate::defaults::SearchPathConfig;
use crate::error::Result;
use crate::registry::{AliasStore, ShimRegistry, BOOTSTRAP_ALIAS};
use crate::search_path::{self, PathStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Installation {
    /// The registry directory did not exist before this run.
    pub first_run: bool,
    /// The bootstrap alias was written (missing or pointing elsewhere).
    pub bootstrap_installed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    pub registry_dir: String,
    #[serde(flatten)]
    pub installation: Installation,
    pub search_path: PathStatus,
}

/// Create the registry directory and the bootstrap alias pointing at `exe`.
///
/// Failure to create the directory is fatal for the caller.
pub fn install(registry: &ShimRegistry, exe: &Path) -> Result<Installation> {
    let first_run = registry.ensure_dir()?;
    if first_run {
        crate::log_status!("setup", "Created {}", registry.dir().display());
    }

    let expected = registry.format().forwarding_command(exe);
    let current = if registry.exists(BOOTSTRAP_ALIAS)? {
        Some(registry.get(BOOTSTRAP_ALIAS)?)
    } else {
        None
    };

    let bootstrap_installed = current.as_deref() != Some(expected.as_str());
    if bootstrap_installed {
        crate::log_status!("setup", "Setting self alias '{}'", BOOTSTRAP_ALIAS);
        registry.create(BOOTSTRAP_ALIAS, &[expected])?;
    }

    Ok(Installation {
        first_run,
        bootstrap_installed,
    })
}

/// Install, then check the registry directory against the search path.
pub fn ensure(
    registry: &ShimRegistry,
    exe: &Path,
    search: &SearchPathConfig,
) -> Result<SetupReport> {
    let installation = install(registry, exe)?;
    let search_path = search_path::check(registry.dir(), search);

    Ok(SetupReport {
        registry_dir: registry.dir().display().to_string(),
        installation,
        search_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_path::Membership;
    use crate::shim::ShimFormat;
    use tempfile::tempdir;

    #[test]
    fn first_install_creates_dir_and_bootstrap() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("Cmd_Aliases"), ShimFormat::windows());
        let exe = Path::new("C:\\tools\\aliasgen.exe");

        let installation = install(&registry, exe).unwrap();
        assert!(installation.first_run);
        assert!(installation.bootstrap_installed);
        assert_eq!(
            registry.get(BOOTSTRAP_ALIAS).unwrap(),
            "\"C:\\tools\\aliasgen.exe\" %*"
        );
    }

    #[test]
    fn second_install_is_a_no_op() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("Cmd_Aliases"), ShimFormat::windows());
        let exe = Path::new("/usr/local/bin/aliasgen");

        install(&registry, exe).unwrap();
        let again = install(&registry, exe).unwrap();
        assert_eq!(
            again,
            Installation {
                first_run: false,
                bootstrap_installed: false
            }
        );
    }

    #[test]
    fn missing_bootstrap_is_restored() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("Cmd_Aliases"), ShimFormat::windows());
        let exe = Path::new("/usr/local/bin/aliasgen");

        install(&registry, exe).unwrap();
        std::fs::remove_file(registry.shim_path(BOOTSTRAP_ALIAS)).unwrap();

        let again = install(&registry, exe).unwrap();
        assert!(!again.first_run);
        assert!(again.bootstrap_installed);
        assert!(registry.exists(BOOTSTRAP_ALIAS).unwrap());
    }

    #[test]
    fn moved_executable_refreshes_bootstrap() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("Cmd_Aliases"), ShimFormat::windows());

        install(&registry, Path::new("/old/aliasgen")).unwrap();
        let again = install(&registry, Path::new("/new/aliasgen")).unwrap();
        assert!(again.bootstrap_installed);
        assert_eq!(registry.get(BOOTSTRAP_ALIAS).unwrap(), "\"/new/aliasgen\" %*");
    }

    #[test]
    fn ensure_reports_instead_of_failing_when_path_variable_is_unset() {
        let dir = tempdir().unwrap();
        let registry = ShimRegistry::new(dir.path().join("Cmd_Aliases"), ShimFormat::windows());
        let search = SearchPathConfig {
            variable: "ALIASGEN_TEST_UNSET_PATH_VARIABLE".to_string(),
            separator: ';',
            required: true,
        };

        let report = ensure(&registry, Path::new("/bin/aliasgen"), &search).unwrap();
        assert!(report.installation.first_run);
        assert_eq!(report.search_path.membership, Membership::Malformed);
        assert!(!report.search_path.on_path());
        assert!(search_path::require(&report.search_path).is_err());
    }

    #[test]
    fn uncreatable_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let registry = ShimRegistry::new(blocker.join("aliases"), ShimFormat::windows());

        let err = install(&registry, Path::new("/bin/aliasgen")).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
