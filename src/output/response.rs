//! CLI response formatting and output.
//!
//! Every command answers with one JSON envelope on stdout; the exit code is
//! derived from the error area.

use aliasgen::error::Hint;
use aliasgen::{Error, ErrorCode, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub(crate) fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: err.hints.clone(),
            }),
        }
    }
}

fn write_stdout(payload: &str) -> Result<()> {
    use std::io::{self, Write};

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match writeln!(handle, "{}", payload) {
        Ok(()) => Ok(()),
        // Reader went away (e.g. `| head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        )),
    }
}

pub fn print_result<T: Serialize>(result: Result<T>) -> Result<()> {
    let payload = match result {
        Ok(data) => CliResponse::success(data).to_json()?,
        Err(err) => CliResponse::<()>::from_error(&err).to_json()?,
    };
    write_stdout(&payload)
}

pub fn print_json_result(result: Result<Value>) -> Result<()> {
    print_result(result)
}

pub fn map_cmd_result_to_json<T: Serialize>(result: Result<(T, i32)>) -> (Result<Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationMissingArgument
        | ErrorCode::ValidationInvalidArgument
        | ErrorCode::AliasInvalidName
        | ErrorCode::AliasInvalidCommand
        | ErrorCode::AliasProtected => 2,

        ErrorCode::PathMalformed | ErrorCode::PathNotConfigured => 3,

        ErrorCode::AliasNotFound => 4,

        ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_serializes_code_and_hint() {
        let err = Error::alias_not_found("greet");
        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

        assert!(json.contains("\"code\": \"alias.not_found\""));
        assert!(json.contains("\"id\": \"greet\""));
        assert!(json.contains("aliasgen list"));
    }

    #[test]
    fn success_envelope_has_no_error() {
        let json = CliResponse::success(serde_json::json!({"command": "alias.list"}))
            .to_json()
            .unwrap();
        assert!(json.contains("\"success\": true"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn hints_are_omitted_when_empty() {
        let err = Error::internal_io("disk full", None);
        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();
        assert!(!json.contains("hints"));
    }

    #[test]
    fn exit_codes_follow_error_area() {
        let cases = [
            (Error::alias_not_found("x"), 4),
            (Error::alias_protected("alias"), 2),
            (Error::path_not_configured("Path", "C:\\Cmd_Aliases\\"), 3),
            (Error::internal_io("disk full", None), 1),
        ];
        for (err, expected) in cases {
            let (_value, exit_code) = map_cmd_result_to_json::<Value>(Err(err));
            assert_eq!(exit_code, expected);
        }
    }

    #[test]
    fn every_code_has_a_nonzero_exit() {
        for code in aliasgen::error::codes::all_codes() {
            assert!(exit_code_for_error(*code) > 0, "{}", code.as_str());
        }
    }
}
