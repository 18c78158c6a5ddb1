use serde::Serialize;

use aliasgen::alias::{AddOutcome, AliasService};
use aliasgen::registry::AliasRecord;
use aliasgen::validator::{NameValidator, SystemCommands};
use aliasgen::{paths, token, validation};

use super::{CmdResult, GlobalArgs, Session, ADD_USAGE};

pub enum AliasAction {
    Add(Vec<String>),
    List,
    Show(String),
    Delete(String),
}

#[derive(Debug, Serialize)]
pub struct AliasOutput {
    command: &'static str,
    registry_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<AliasRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aliases: Option<Vec<AliasRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<AddOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

impl AliasOutput {
    fn new(command: &'static str, session: &Session) -> Self {
        Self {
            command,
            registry_dir: session.registry.dir().display().to_string(),
            alias: None,
            aliases: None,
            outcome: None,
            deleted: None,
            warnings: session.warnings(),
        }
    }

    pub(crate) fn added(
        session: &Session,
        service: &AliasService<'_>,
        name: &str,
        outcome: AddOutcome,
    ) -> aliasgen::Result<Self> {
        let mut output = Self::new("alias.add", session);
        output.alias = match outcome {
            AddOutcome::Cancelled => None,
            AddOutcome::Created | AddOutcome::Replaced => Some(service.show(name)?),
        };
        output.outcome = Some(outcome);
        Ok(output)
    }
}

pub fn run(action: AliasAction, global: &GlobalArgs) -> CmdResult<AliasOutput> {
    let session = Session::open()?;
    let cwd = paths::working_dir()?;
    let service = AliasService::new(
        &session.registry,
        NameValidator::new(&SystemCommands, cwd),
    );

    match action {
        AliasAction::Add(words) => add(&session, &service, &words, global),
        AliasAction::List => list(&session, &service),
        AliasAction::Show(name) => show(&session, &service, &name),
        AliasAction::Delete(name) => delete(&session, &service, &name),
    }
}

fn add(
    session: &Session,
    service: &AliasService<'_>,
    words: &[String],
    global: &GlobalArgs,
) -> CmdResult<AliasOutput> {
    let (name, command_words) =
        validation::require_head_and_rest(words, ["name", "command"], ADD_USAGE)?;
    let command = vec![token::join_words(command_words)];

    let mut confirm = crate::tty::confirmer(global.yes);
    let outcome = service.add(name, &command, &mut confirm)?;

    Ok((AliasOutput::added(session, service, name, outcome)?, 0))
}

fn list(session: &Session, service: &AliasService<'_>) -> CmdResult<AliasOutput> {
    let mut output = AliasOutput::new("alias.list", session);
    output.aliases = Some(service.list()?);
    Ok((output, 0))
}

fn show(session: &Session, service: &AliasService<'_>, name: &str) -> CmdResult<AliasOutput> {
    let mut output = AliasOutput::new("alias.show", session);
    output.alias = Some(service.show(name)?);
    Ok((output, 0))
}

fn delete(session: &Session, service: &AliasService<'_>, name: &str) -> CmdResult<AliasOutput> {
    service.remove(name)?;

    let mut output = AliasOutput::new("alias.delete", session);
    output.deleted = Some(name.to_string());
    Ok((output, 0))
}
