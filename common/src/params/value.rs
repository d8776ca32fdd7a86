use uuid::Uuid;

/// Length of the canonical hyphenated UUID text, `8-4-4-4-12`.
const HYPHENATED_LEN: usize = 36;

/// A type that can be read out of a single path segment.
///
/// `EXPECTED` names the type for error messages produced further up
/// (e.g. `"UUID"`), so callers never have to repeat it.
pub trait PathValue: Sized {
    const EXPECTED: &'static str;

    /// Converts the raw segment, or returns `None` if it is malformed.
    fn parse_path_value(raw: &str) -> Option<Self>;
}

/// Only the canonical hyphenated form is accepted, in any hex case.
///
/// The `uuid` crate also accepts the 32-digit simple form as well as
/// braced and URN forms. Those are rejected here by the length check,
/// because 36 characters can only ever be the hyphenated layout.
impl PathValue for Uuid {
    const EXPECTED: &'static str = "UUID";

    fn parse_path_value(raw: &str) -> Option<Self> {
        if raw.len() != HYPHENATED_LEN {
            return None;
        }
        Uuid::try_parse(raw).ok()
    }
}

impl PathValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn parse_path_value(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}
