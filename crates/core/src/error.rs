use crate::types::DbId;

/// Domain-level failures raised by the service layer.
///
/// HTTP classification happens in `roster-api`; this enum only names the
/// failure. The `NotFound` display text is part of the API contract (it is
/// returned verbatim in the error body).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with ID: {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A sort or filter references a property the entity does not have.
    #[error("No property '{0}' found")]
    UnknownProperty(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
