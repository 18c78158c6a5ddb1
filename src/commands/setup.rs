use serde::Serialize;

use aliasgen::search_path;
use aliasgen::setup::SetupReport;

use super::{CmdResult, GlobalArgs, Session};

#[derive(Debug, Serialize)]
pub struct SetupOutput {
    command: &'static str,
    #[serde(flatten)]
    report: SetupReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    next_steps: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

/// Install the registry and bootstrap alias, and explain what is left to do.
///
/// Unlike alias commands this never fails on a missing search-path entry.
pub fn run(_global: &GlobalArgs) -> CmdResult<SetupOutput> {
    let session = Session::open_unchecked()?;

    let status = &session.setup.search_path;
    let next_steps = if status.on_path() {
        Vec::new()
    } else {
        search_path::instructions(&status.variable, &status.directory)
    };

    Ok((
        SetupOutput {
            command: "setup",
            warnings: session.warnings(),
            report: session.setup,
            next_steps,
        },
        0,
    ))
}
