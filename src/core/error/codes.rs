use super::{ErrorCode, NameRejection};

pub fn all_codes() -> &'static [ErrorCode] {
    &[
        ErrorCode::ConfigInvalidJson,
        ErrorCode::ConfigInvalidValue,
        ErrorCode::ValidationMissingArgument,
        ErrorCode::ValidationInvalidArgument,
        ErrorCode::AliasNotFound,
        ErrorCode::AliasInvalidName,
        ErrorCode::AliasInvalidCommand,
        ErrorCode::AliasProtected,
        ErrorCode::PathMalformed,
        ErrorCode::PathNotConfigured,
        ErrorCode::InternalIoError,
        ErrorCode::InternalJsonError,
        ErrorCode::InternalUnexpected,
    ]
}

pub fn parse_code(code: &str) -> Option<ErrorCode> {
    all_codes()
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == code)
}

pub(crate) fn parse_rejection(reason: &str) -> Option<NameRejection> {
    [
        NameRejection::Empty,
        NameRejection::ContainsSpace,
        NameRejection::Reserved,
        NameRejection::ShadowsFilesystemEntry,
        NameRejection::ShadowsSystemCommand,
        NameRejection::InvalidCharacters,
    ]
    .into_iter()
    .find(|candidate| {
        serde_json::to_value(candidate)
            .ok()
            .is_some_and(|value| value == reason)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_parses_back() {
        for code in all_codes() {
            assert_eq!(parse_code(code.as_str()), Some(*code));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(parse_code("alias.nope"), None);
    }
}
