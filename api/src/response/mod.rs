use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::ErrorKind;
use serde::Serialize;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// This struct enforces a consistent response structure across all endpoints:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// - `T` is the type of the `data` payload.
/// - `success` is a boolean indicating operation status.
/// - `message` provides a human-readable context string.
///
/// ## Example (error):
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Invalid UUID format for path parameter 'id'"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    ///
    /// # Requires
    /// - `T` must implement `Default`, since error responses do not include useful data.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// A path parameter that could not be read as the type a handler asked for.
///
/// Carries enough context to build the client-facing message; the status is
/// always `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamRejection {
    pub name: String,
    pub expected: &'static str,
    pub kind: ErrorKind,
}

impl ParamRejection {
    pub fn new(name: impl Into<String>, expected: &'static str, kind: ErrorKind) -> Self {
        Self {
            name: name.into(),
            expected,
            kind,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn message(&self) -> String {
        match self.kind {
            ErrorKind::InvalidFormat => format!(
                "Invalid {} format for path parameter '{}'",
                self.expected, self.name
            ),
            ErrorKind::MissingParameter => format!("Missing path parameter '{}'", self.name),
        }
    }
}

impl IntoResponse for ParamRejection {
    fn into_response(self) -> Response {
        tracing::warn!(
            param = %self.name,
            code = self.kind.code(),
            "Rejected path parameter"
        );
        (
            self.status(),
            Json(ApiResponse::<()>::error(self.message())),
        )
            .into_response()
    }
}
