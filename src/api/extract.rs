use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::api::models::ApiError;
use crate::constants::{BODY_INVALID_SHAPE, BODY_NOT_JSON, REQUEST_FIELD};
use crate::core::errors::PostboardError;
use crate::core::validation::{self, FieldRule};

/// Field rules registered for a request payload.
pub trait RequestRules {
    const RULES: &'static [FieldRule];
}

/// JSON body that has passed its [`RequestRules`] before the handler runs.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + RequestRules,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await.map_err(|rejection| {
            debug!(%rejection, "unreadable request body");
            PostboardError::field(REQUEST_FIELD, BODY_NOT_JSON)
        })?;
        validation::validate(&body, T::RULES)?;
        let payload = serde_json::from_value(body).map_err(|err| {
            debug!(%err, "request body does not match payload");
            PostboardError::field(REQUEST_FIELD, BODY_INVALID_SHAPE)
        })?;
        Ok(ValidatedJson(payload))
    }
}
