//! Custom extractors routing framework rejections into the error pipeline.
//!
//! Axum's built-in extractors reply with their own plain-text bodies on
//! failure. Wrapping them keeps every failure on the single classification
//! path in [`crate::error`].

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::Validate;

use roster_core::types::DbId;
use roster_db::pagination::{PageRequest, DEFAULT_PAGE_SIZE};

use crate::error::ApiError;

/// JSON body extractor that also runs declared field validation.
///
/// Binding failures become rule-3 errors (malformed body), validation
/// failures rule-2 errors (field validation).
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Path extractor for an id segment; a non-numeric segment becomes a
/// rule-5 error (invalid parameter).
#[derive(Debug)]
pub struct PathId(pub DbId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                ApiError::InvalidParameter(rejection.body_text())
            })?;
        Ok(Self(id))
    }
}

/// Raw `?page=&size=&sort=` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

/// Pagination extractor with the page=0 / size=10 defaults applied; a
/// non-numeric value becomes a rule-5 error (invalid parameter).
#[derive(Debug)]
pub struct PageQuery(pub PageRequest);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                ApiError::InvalidParameter(rejection.body_text())
            })?;
        Ok(Self(PageRequest::new(
            params.page.unwrap_or(0),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
            params.sort,
        )))
    }
}
