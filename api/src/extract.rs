//! Axum extractors that bridge matched route parameters into
//! [`common::params`].
//!
//! Handlers either take [`RouteParams`] and pick parameters by name, or take
//! [`IdParam`] when the route's identifier is a UUID named `id`.

use crate::response::ParamRejection;
use axum::{
    extract::{
        FromRequestParts, MatchedPath, OriginalUri, RawPathParams,
        rejection::RawPathParamsRejection,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
};
use common::params::{PathParameters, PathValue, parse_parameter};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use uuid::Uuid;

/// Name of the path parameter read by [`IdParam`].
pub const ID_PARAM: &str = "id";

/// All path parameters matched for the current route, percent-decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(pub HashMap<String, String>);

impl RouteParams {
    /// Reads `name` as `T`, ready to be returned from a handler on failure.
    pub fn get<T: PathValue>(&self, name: &str) -> Result<T, ParamRejection> {
        parse_parameter(self, name).map_err(|kind| ParamRejection::new(name, T::EXPECTED, kind))
    }

    pub fn uuid(&self, name: &str) -> Result<Uuid, ParamRejection> {
        self.get(name)
    }
}

impl PathParameters for RouteParams {
    fn path_parameter(&self, name: &str) -> Option<&str> {
        self.0.path_parameter(name)
    }
}

impl<S> FromRequestParts<S> for RouteParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match RawPathParams::from_request_parts(parts, state).await {
            Ok(raw) => Ok(RouteParams(
                raw.iter()
                    .map(|(key, value)| (key.to_owned(), value.to_owned()))
                    .collect(),
            )),
            // Bad bytes become U+FFFD so the value fails as a normal
            // malformed parameter, named and in the JSON envelope.
            Err(RawPathParamsRejection::InvalidUtf8InPathParam(rejection)) => {
                let path = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map_or_else(|| parts.uri.path(), |uri| uri.0.path());
                parts
                    .extensions
                    .get::<MatchedPath>()
                    .and_then(|matched| decode_lossy(matched.as_str(), path))
                    .map(RouteParams)
                    .ok_or_else(|| rejection.into_response())
            }
            Err(rejection) => Err(rejection.into_response()),
        }
    }
}

/// Pairs each `{name}` segment of a route template with the matching segment
/// of the request path, percent-decoding lossily.
///
/// Returns `None` if the path does not line up with the template.
fn decode_lossy(template: &str, path: &str) -> Option<HashMap<String, String>> {
    let mut segments = path.split('/');
    let mut params = HashMap::new();

    for part in template.split('/') {
        let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) else {
            segments.next()?;
            continue;
        };

        let (name, raw) = match name.strip_prefix('*') {
            Some(name) => (name, segments.by_ref().collect::<Vec<_>>().join("/")),
            None => (name, segments.next()?.to_owned()),
        };
        let value = percent_decode_str(&raw).decode_utf8_lossy().into_owned();
        params.insert(name.to_owned(), value);
    }

    segments.next().is_none().then_some(params)
}

/// The route's `id` parameter, parsed as a canonical UUID.
///
/// Rejects with `400 Bad Request` and the standard error envelope when the
/// value is malformed.
///
/// # Example
/// ```ignore
/// async fn get_thing(IdParam(id): IdParam) -> impl IntoResponse {
///     // `id` is a valid `Uuid` here
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub Uuid);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RouteParams::from_request_parts(parts, state).await?;
        params
            .uuid(ID_PARAM)
            .map(IdParam)
            .map_err(IntoResponse::into_response)
    }
}
