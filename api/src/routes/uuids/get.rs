use crate::extract::{IdParam, RouteParams};
use crate::response::ApiResponse;
use crate::routes::uuids::common::{CompareResponse, UuidResponse};
use axum::{
    Json,
    response::{IntoResponse, Response},
};

/// GET /api/uuids/{id}
///
/// Echoes the identifier back in canonical lower-case form, together with
/// its version number and whether it is the nil UUID.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "version": 1,
///     "nil": false
///   },
///   "message": "UUID parsed successfully"
/// }
/// ```
///
/// - `400 Bad Request`
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Invalid UUID format for path parameter 'id'"
/// }
/// ```
pub async fn describe_uuid(IdParam(id): IdParam) -> impl IntoResponse {
    Json(ApiResponse::success(
        UuidResponse::from(id),
        "UUID parsed successfully",
    ))
}

/// GET /api/uuids/{id}/compare/{other_id}
///
/// Compares two identifiers after normalisation, so differently cased
/// spellings of the same UUID are equal.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "other_id": "123e4567-e89b-12d3-a456-426614174000",
///     "equal": true
///   },
///   "message": "UUIDs compared successfully"
/// }
/// ```
///
/// - `400 Bad Request` - `id` or `other_id` is malformed (`id` is reported first)
pub async fn compare_uuids(params: RouteParams) -> Response {
    let id = match params.uuid("id") {
        Ok(id) => id,
        Err(rejection) => return rejection.into_response(),
    };
    let other_id = match params.uuid("other_id") {
        Ok(other_id) => other_id,
        Err(rejection) => return rejection.into_response(),
    };

    let response = CompareResponse {
        id: id.to_string(),
        other_id: other_id.to_string(),
        equal: id == other_id,
    };

    Json(ApiResponse::success(response, "UUIDs compared successfully")).into_response()
}
