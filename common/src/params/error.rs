use serde::Serialize;
use thiserror::Error;

/// Reasons a path parameter could not be turned into a typed value.
///
/// The set is closed. Mapping a kind to a status code or a user-facing
/// message belongs to the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The parameter is present but its value is malformed.
    #[error("invalid format")]
    InvalidFormat,
    /// The request does not carry a parameter with the requested name.
    #[error("missing parameter")]
    MissingParameter,
}

impl ErrorKind {
    /// Stable machine-readable code, matching the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "INVALID_FORMAT",
            ErrorKind::MissingParameter => "MISSING_PARAMETER",
        }
    }
}

/// Outcome of a single parse: the typed value or the reason it failed.
pub type ParseResult<T> = Result<T, ErrorKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matches_serialized_form() {
        for kind in [ErrorKind::InvalidFormat, ErrorKind::MissingParameter] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }

    #[test]
    fn display_is_lowercase_reason() {
        assert_eq!(ErrorKind::InvalidFormat.to_string(), "invalid format");
        assert_eq!(ErrorKind::MissingParameter.to_string(), "missing parameter");
    }
}
