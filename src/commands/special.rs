use aliasgen::alias::AliasService;
use aliasgen::validator::{NameValidator, SystemCommands};
use aliasgen::{paths, validation};

use super::alias::AliasOutput;
use super::{CmdResult, GlobalArgs, Session};

/// Interactive wizard for aliases that run several commands.
///
/// Reads the name first, then one command per line until an empty line.
pub fn run(_args: (), global: &GlobalArgs) -> CmdResult<AliasOutput> {
    let session = Session::open()?;
    let cwd = paths::working_dir()?;
    let service = AliasService::new(
        &session.registry,
        NameValidator::new(&SystemCommands, cwd),
    );

    let answer = crate::tty::prompt("Alias name: ")?;
    let name = validation::require_non_empty(&answer, "name", "Alias name cannot be empty")?;

    crate::tty::status("Enter one command per line. Finish with an empty line.");
    let mut commands = Vec::new();
    loop {
        let line = crate::tty::prompt(&format!("{}> ", commands.len() + 1))?;
        if line.is_empty() {
            break;
        }
        commands.push(line);
    }

    if commands.is_empty() {
        return Err(aliasgen::Error::validation_missing_argument(vec![
            "command".to_string(),
        ]));
    }

    let mut confirm = crate::tty::confirmer(global.yes);
    let outcome = service.add(name, &commands, &mut confirm)?;

    Ok((AliasOutput::added(&session, &service, name, outcome)?, 0))
}
