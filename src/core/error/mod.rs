use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod codes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,
    ConfigInvalidValue,

    ValidationMissingArgument,
    ValidationInvalidArgument,

    AliasNotFound,
    AliasInvalidName,
    AliasInvalidCommand,
    AliasProtected,

    PathMalformed,
    PathNotConfigured,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::AliasNotFound => "alias.not_found",
            ErrorCode::AliasInvalidName => "alias.invalid_name",
            ErrorCode::AliasInvalidCommand => "alias.invalid_command",
            ErrorCode::AliasProtected => "alias.protected",

            ErrorCode::PathMalformed => "path.malformed",
            ErrorCode::PathNotConfigured => "path.not_configured",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

/// Why a candidate alias name was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameRejection {
    Empty,
    ContainsSpace,
    Reserved,
    ShadowsFilesystemEntry,
    ShadowsSystemCommand,
    InvalidCharacters,
}

impl NameRejection {
    pub fn describe(&self) -> &'static str {
        match self {
            NameRejection::Empty => "Alias name cannot be empty",
            NameRejection::ContainsSpace => "Alias name cannot contain spaces",
            NameRejection::Reserved => "Alias name is reserved",
            NameRejection::ShadowsFilesystemEntry => "Cannot use folder/file name as alias name",
            NameRejection::ShadowsSystemCommand => "Cannot use existing command as alias name",
            NameRejection::InvalidCharacters => "Alias name contains invalid characters",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundDetails {
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidNameDetails {
    pub name: String,
    pub reason: NameRejection,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidCommandDetails {
    pub command: String,
    pub program: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPathDetails {
    pub variable: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            to_details(MissingArgumentDetails { args }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
        tried: Option<Vec<String>>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            id,
            tried,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn alias_not_found(name: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::AliasNotFound,
            "Alias not found",
            to_details(NotFoundDetails { id: name.into() }),
        )
        .with_hint("Run 'aliasgen list' to see all aliases")
    }

    pub fn alias_invalid_name(name: impl Into<String>, reason: NameRejection) -> Self {
        Self::new(
            ErrorCode::AliasInvalidName,
            reason.describe(),
            to_details(InvalidNameDetails {
                name: name.into(),
                reason,
            }),
        )
    }

    pub fn alias_invalid_command(command: impl Into<String>, program: impl Into<String>) -> Self {
        let command = command.into();
        Self::new(
            ErrorCode::AliasInvalidCommand,
            format!("{} is not a valid command", command),
            to_details(InvalidCommandDetails {
                command,
                program: program.into(),
            }),
        )
        .with_hint("Pass --yes to create the alias anyway")
    }

    pub fn alias_protected(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            ErrorCode::AliasProtected,
            format!("Cannot remove or overwrite the '{}' alias", name),
            to_details(NotFoundDetails { id: name }),
        )
    }

    pub fn path_malformed(variable: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::PathMalformed,
            problem,
            to_details(SearchPathDetails {
                variable: variable.into(),
                directory: None,
            }),
        )
    }

    pub fn path_not_configured(variable: impl Into<String>, directory: impl Into<String>) -> Self {
        let variable = variable.into();
        Self::new(
            ErrorCode::PathNotConfigured,
            format!("The alias folder must be added to the {} variable", variable),
            to_details(SearchPathDetails {
                variable,
                directory: Some(directory.into()),
            }),
        )
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let details = to_details(ConfigInvalidJsonDetails {
            path: path.into(),
            error: err.to_string(),
        });

        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            details,
        )
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = to_details(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        });

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    /// Reason attached to an `alias.invalid_name` error, if any.
    pub fn name_rejection(&self) -> Option<NameRejection> {
        if self.code != ErrorCode::AliasInvalidName {
            return None;
        }
        let reason = self.details.get("reason")?.as_str()?;
        codes::parse_rejection(reason)
    }
}
