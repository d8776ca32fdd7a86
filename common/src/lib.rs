//! Shared, framework-independent building blocks for the HTTP layer.
//!
//! The only module today is [`params`], which turns raw path parameters
//! into typed values without ever panicking on client input.

pub mod params;

pub use params::{
    ErrorKind, ParseResult, PathParameters, PathValue, parse_parameter, parse_uuid,
    parse_uuid_parameter,
};
