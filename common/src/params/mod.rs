//! Typed extraction of named path parameters.
//!
//! A request is only ever seen through [`PathParameters`], so any HTTP
//! layer can plug in by exposing its matched parameters as strings.
//! Every operation here is pure: no logging, no panics, no shared state,
//! and malformed input comes back as a value instead of unwinding.
//!
//! ```
//! use std::collections::HashMap;
//! use common::params::{ErrorKind, parse_uuid_parameter};
//!
//! let mut params = HashMap::new();
//! params.insert("id".to_string(), "not-a-uuid".to_string());
//!
//! assert_eq!(parse_uuid_parameter(&params, "id"), Err(ErrorKind::InvalidFormat));
//! ```

use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

mod error;
mod value;

pub use error::{ErrorKind, ParseResult};
pub use value::PathValue;

/// Read access to the named path parameters of an inbound request.
pub trait PathParameters {
    /// Raw value of the parameter called `name`, if the route declared one.
    fn path_parameter(&self, name: &str) -> Option<&str>;
}

impl PathParameters for HashMap<String, String> {
    fn path_parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl PathParameters for BTreeMap<String, String> {
    fn path_parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl PathParameters for [(&str, &str)] {
    fn path_parameter(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }
}

impl PathParameters for Vec<(String, String)> {
    fn path_parameter(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parses `raw` as a UUID in canonical hyphenated form.
///
/// Hex digits may be upper or lower case. The hyphen-less 32-digit form
/// is rejected, as are braced and `urn:uuid:` forms.
pub fn parse_uuid(raw: &str) -> ParseResult<Uuid> {
    Uuid::parse_path_value(raw).ok_or(ErrorKind::InvalidFormat)
}

/// Reads the parameter `name` from `request` and converts it to `T`.
///
/// # Errors
/// - [`ErrorKind::MissingParameter`] if the request has no such parameter.
/// - [`ErrorKind::InvalidFormat`] if the value does not parse as `T`.
pub fn parse_parameter<T, P>(request: &P, name: &str) -> ParseResult<T>
where
    T: PathValue,
    P: PathParameters + ?Sized,
{
    let raw = request
        .path_parameter(name)
        .ok_or(ErrorKind::MissingParameter)?;
    T::parse_path_value(raw).ok_or(ErrorKind::InvalidFormat)
}

/// Reads the parameter `name` from `request` as a UUID.
pub fn parse_uuid_parameter<P>(request: &P, name: &str) -> ParseResult<Uuid>
where
    P: PathParameters + ?Sized,
{
    parse_parameter(request, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn request_with(id: &str) -> HashMap<String, String> {
        HashMap::from([("id".to_string(), id.to_string())])
    }

    #[test]
    fn parses_canonical_uuid() {
        let parsed = parse_uuid_parameter(&request_with(SAMPLE), "id").unwrap();
        assert_eq!(parsed.to_string(), SAMPLE);
    }

    #[test]
    fn uppercase_hex_is_accepted_and_normalised() {
        let upper = SAMPLE.to_uppercase();
        let parsed = parse_uuid(&upper).unwrap();
        assert_eq!(parsed.to_string(), SAMPLE);
    }

    #[test]
    fn mixed_case_hex_is_accepted() {
        let parsed = parse_uuid("123E4567-e89B-12d3-A456-426614174000").unwrap();
        assert_eq!(parsed, Uuid::parse_str(SAMPLE).unwrap());
    }

    #[test]
    fn rejects_non_uuid_text() {
        assert_eq!(parse_uuid("not-a-uuid"), Err(ErrorKind::InvalidFormat));
    }

    #[test]
    fn rejects_empty_string() {
        assert_eq!(parse_uuid(""), Err(ErrorKind::InvalidFormat));
        assert_eq!(
            parse_uuid_parameter(&request_with(""), "id"),
            Err(ErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn rejects_single_non_hex_digit() {
        let bad = SAMPLE.replacen('4', "g", 1);
        assert_eq!(bad.len(), SAMPLE.len());
        assert_eq!(parse_uuid(&bad), Err(ErrorKind::InvalidFormat));
    }

    #[test]
    fn rejects_simple_form_without_hyphens() {
        let simple = SAMPLE.replace('-', "");
        assert_eq!(simple.len(), 32);
        assert_eq!(parse_uuid(&simple), Err(ErrorKind::InvalidFormat));
    }

    #[test]
    fn rejects_braced_and_urn_forms() {
        assert_eq!(
            parse_uuid(&format!("{{{SAMPLE}}}")),
            Err(ErrorKind::InvalidFormat)
        );
        assert_eq!(
            parse_uuid(&format!("urn:uuid:{SAMPLE}")),
            Err(ErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn rejects_misplaced_hyphens() {
        // Right length, hyphen shifted one position left.
        let shifted = "123e456-7e89b-12d3-a456-426614174000";
        assert_eq!(shifted.len(), 36);
        assert_eq!(parse_uuid(shifted), Err(ErrorKind::InvalidFormat));
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert_eq!(
            parse_uuid(&format!(" {SAMPLE}")),
            Err(ErrorKind::InvalidFormat)
        );
        assert_eq!(
            parse_uuid(&format!("{SAMPLE}\n")),
            Err(ErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn rejects_multibyte_input_of_canonical_byte_length() {
        // 34 ASCII bytes plus one two-byte char is 36 bytes.
        let tricky = "123e4567-e89b-12d3-a456-4266141740é";
        assert_eq!(tricky.len(), 36);
        assert_eq!(parse_uuid(tricky), Err(ErrorKind::InvalidFormat));
    }

    #[test]
    fn random_uuids_round_trip() {
        for _ in 0..256 {
            let id = Uuid::new_v4();
            assert_eq!(parse_uuid(&id.to_string()), Ok(id));
            assert_eq!(parse_uuid(&id.to_string().to_uppercase()), Ok(id));
        }
    }

    #[test]
    fn parsing_is_repeatable() {
        for raw in [SAMPLE, "not-a-uuid", ""] {
            assert_eq!(parse_uuid(raw), parse_uuid(raw));
        }
    }

    #[test]
    fn missing_parameter_is_reported() {
        assert_eq!(
            parse_uuid_parameter(&request_with(SAMPLE), "user_id"),
            Err(ErrorKind::MissingParameter)
        );
    }

    #[test]
    fn parses_integer_ids() {
        let params: &[(&str, &str)] = &[("module_id", "42"), ("user_id", "abc")];
        assert_eq!(parse_parameter::<i64, _>(params, "module_id"), Ok(42));
        assert_eq!(
            parse_parameter::<i64, _>(params, "user_id"),
            Err(ErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn every_capability_impl_agrees() {
        let map = request_with(SAMPLE);
        let tree: BTreeMap<_, _> = map.clone().into_iter().collect();
        let pairs: Vec<(String, String)> = map.clone().into_iter().collect();
        let slice: &[(&str, &str)] = &[("id", SAMPLE)];

        let expected = parse_uuid(SAMPLE);
        assert_eq!(parse_uuid_parameter(&map, "id"), expected);
        assert_eq!(parse_uuid_parameter(&tree, "id"), expected);
        assert_eq!(parse_uuid_parameter(&pairs, "id"), expected);
        assert_eq!(parse_uuid_parameter(slice, "id"), expected);
    }
}
