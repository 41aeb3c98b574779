//! Request extractors.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON body extractor that runs `validator` rules after decoding.
///
/// Malformed bodies and rule violations both reject with an [`ApiError`],
/// so clients always get a 400 with the shared error shape rather than
/// axum's plain-text 415/422 responses.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value): Json<T> = Json::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
