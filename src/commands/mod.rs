use aliasgen::defaults::{self, Defaults};
use aliasgen::search_path::{self, Membership};
use aliasgen::setup::SetupReport;
use aliasgen::{paths, ShimRegistry};

pub mod alias;
pub mod config;
pub mod setup;
pub mod special;

pub type CmdResult<T> = aliasgen::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Answer yes to every confirmation.
    pub yes: bool,
}

pub(crate) const ADD_USAGE: &str = "aliasgen <yourAliasName> <yourCommand>";

/// Registry and setup state for one invocation.
pub(crate) struct Session {
    pub defaults: Defaults,
    pub registry: ShimRegistry,
    pub setup: SetupReport,
}

impl Session {
    /// Run setup and report the search-path state without enforcing it.
    pub fn open_unchecked() -> aliasgen::Result<Self> {
        let defaults = defaults::load_defaults();
        let registry = ShimRegistry::new(defaults.registry_dir()?, defaults.shim.clone());
        let exe = paths::current_exe()?;
        let setup = aliasgen::setup::ensure(&registry, &exe, &defaults.search_path)?;

        Ok(Self {
            defaults,
            registry,
            setup,
        })
    }

    /// Run setup and refuse to continue while the registry is off the search path
    /// (unless the configuration says the check is optional).
    pub fn open() -> aliasgen::Result<Self> {
        let session = Self::open_unchecked()?;
        if session.defaults.search_path.required {
            search_path::require(&session.setup.search_path)?;
        }
        Ok(session)
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let status = &self.setup.search_path;
        if status.membership == Membership::Malformed {
            warnings.push(format!("{} not formatted correctly", status.variable));
        }
        if !status.on_path() && !self.defaults.search_path.required {
            warnings.push(format!(
                "{} is not on {}; aliases will not resolve until it is added",
                status.directory, status.variable
            ));
        }
        warnings
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (aliasgen::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Setup => crate::output::map_cmd_result_to_json(setup::run(global)),
        crate::Commands::Config(args) => dispatch!(args, global, config),
        crate::Commands::List => dispatch!(alias::AliasAction::List, global, alias),
        crate::Commands::Show { name } => dispatch!(alias::AliasAction::Show(name), global, alias),
        crate::Commands::Delete { name } => {
            let action = match name {
                Some(name) => alias::AliasAction::Delete(name),
                None => alias::AliasAction::List,
            };
            dispatch!(action, global, alias)
        }
        crate::Commands::Add(words) => dispatch!(alias::AliasAction::Add(words), global, alias),
        crate::Commands::Special => dispatch!((), global, special),

        // Special case: Help uses raw output mode
        crate::Commands::Help => {
            let err = aliasgen::Error::validation_invalid_argument(
                "output_mode",
                "Help command uses raw output mode",
                None,
                None,
            );
            crate::output::map_cmd_result_to_json::<serde_json::Value>(Err(err))
        }
    }
}

pub(crate) fn run_markdown(command: crate::Commands) -> CmdResult<String> {
    match command {
        crate::Commands::Help => Ok((crate::docs::help().to_string(), 0)),
        _ => Err(aliasgen::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support markdown output",
            None,
            None,
        )),
    }
}
