//! Failure classification and structured error responses.
//!
//! Every failure that can reach the request boundary becomes an [`ApiError`]
//! variant and is mapped to exactly one HTTP status and body shape. The
//! classification is an ordered chain -- first match wins, with a mandatory
//! catch-all -- so no failure escapes unclassified:
//!
//! 1. Entity not found                      -> 404, basic error
//! 2. Field validation failure              -> 422, validation error
//! 3. Malformed request body                -> 422, validation error
//! 4. Persistence integrity violation       -> 409, basic error
//! 5. Malformed path/query parameter        -> 400, basic error
//! 6. Unknown sort/filter property          -> 400, basic error
//! 7. Anything else                         -> 500, basic error
//!
//! The original failure is logged via `tracing` and never placed in the
//! response body.

use axum::extract::rejection::JsonRejection;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use roster_core::error::CoreError;
use roster_core::types::Timestamp;
use roster_db::models::employee::Role;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds boundary-specific
/// variants. Implements [`IntoResponse`] to produce the structured JSON
/// error bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from `roster_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// One or more declared field constraints violated on a bound DTO.
    #[error("Invalid request data")]
    FieldValidation(#[from] validator::ValidationErrors),

    /// The request body could not be parsed into the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A path or query parameter failed type coercion.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Catch-all for anything uncategorized.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, ApiError>;

/// One invalid field and its message, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Structured error body.
///
/// The basic shape is `{timestamp, status, message, path}`; validation
/// failures (rules 2 and 3) additionally carry `errors`, possibly empty.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub timestamp: Timestamp,
    pub status: u16,
    pub message: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Classify this failure into a status, message, and optional field
    /// errors. Ordered to match the rule table in the module docs; the
    /// variants are mutually exclusive, so exactly one rule applies.
    fn classify(&self) -> (StatusCode, String, Option<Vec<FieldError>>) {
        match self {
            // 1. Entity not found: the service-supplied message verbatim.
            ApiError::Core(core @ CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, core.to_string(), None)
            }

            // 2. Field validation: one entry per violated field.
            ApiError::FieldValidation(errors) => {
                tracing::error!(error = %errors, "Not valid entity");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Invalid Data".to_string(),
                    Some(field_entries(errors)),
                )
            }

            // 2 (cont.): a mapper-level gap behaves like a field validation
            //    failure with nothing field-specific to report.
            ApiError::Core(core @ CoreError::Validation(_)) => {
                tracing::error!(error = %core, "Validation gap past the extractor");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Invalid Data".to_string(),
                    Some(Vec::new()),
                )
            }

            // 3. Malformed body: synthetic role entry on enum mismatch,
            //    otherwise an empty errors sequence.
            ApiError::MalformedBody(rejection) => {
                tracing::error!(error = %rejection.body_text(), "Json format error");
                let entries = if is_role_mismatch(rejection) {
                    vec![FieldError {
                        field: "role".to_string(),
                        message: Role::unavailable_message(),
                    }]
                } else {
                    Vec::new()
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Invalid Data".to_string(),
                    Some(entries),
                )
            }

            // 4. Persistence integrity violation; everything else from the
            //    store falls through to the catch-all.
            ApiError::Database(err) => classify_sqlx_error(err),

            // 5. Path/query type coercion failure.
            ApiError::InvalidParameter(detail) => {
                tracing::error!(error = %detail, "Invalid parameter");
                (StatusCode::BAD_REQUEST, "Invalid Parameter".to_string(), None)
            }

            // 6. Unknown sort/filter property.
            ApiError::Core(core @ CoreError::UnknownProperty(_)) => {
                tracing::error!(error = %core, "Invalid property");
                (StatusCode::BAD_REQUEST, "Invalid property".to_string(), None)
            }

            // 7. Catch-all. The cause is logged, never exposed.
            ApiError::Unexpected(detail) => {
                tracing::error!(error = %detail, "Unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected Error Occurred".to_string(),
                    None,
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = self.classify();
        let body = ErrorBody {
            timestamp: Utc::now(),
            status: status.as_u16(),
            message,
            // Filled in by the `error_envelope` middleware, which knows the
            // request URI.
            path: String::new(),
            errors,
        };

        let mut response = (status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

/// Response-mapping middleware that stamps the request URI onto any error
/// body produced further down the stack.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if let Some(body) = response.extensions_mut().remove::<ErrorBody>() {
        let status = response.status();
        let body = ErrorBody { path, ..body };
        return (status, Json(body)).into_response();
    }
    response
}

/// Classify a sqlx error: SQLSTATE class 23 (integrity constraint
/// violation) maps to 409; everything else is unexpected and maps to 500
/// with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String, Option<Vec<FieldError>>) {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().is_some_and(|code| code.starts_with("23")) {
            tracing::error!(error = %db_err, "Database integrity error");
            return (
                StatusCode::CONFLICT,
                "The request violates the Database integrity".to_string(),
                None,
            );
        }
    }
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Unexpected Error Occurred".to_string(),
        None,
    )
}

/// Flatten `validator` output into `{field, message}` entries, using the
/// wire-format (camelCase) field names.
fn field_entries(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = camel_case(&field);
            errs.iter().map(move |err| FieldError {
                field: field.clone(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect()
}

/// Whether a body rejection stems from an enum-value mismatch. The role is
/// the only enum field in the API, so serde's "unknown variant" marker is
/// attributable to it.
fn is_role_mismatch(rejection: &JsonRejection) -> bool {
    matches!(rejection, JsonRejection::JsonDataError(_))
        && rejection.body_text().contains("unknown variant")
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
