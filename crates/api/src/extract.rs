use adboard_core::error::CoreError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs the payload's `validator` constraints.
///
/// Decode failures -- absent body, malformed JSON, wrong shape, wrong types --
/// are client errors answered with 400. Only a failure to read the body
/// stream itself is internal. Handlers taking `ValidatedJson<T>` therefore
/// only ever see well-formed, constraint-checked values.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::BytesRejection(err) => AppError::Internal(err.to_string()),
                other => AppError::BadRequest(other.body_text()),
            })?;

        value
            .validate()
            .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?;

        Ok(ValidatedJson(value))
    }
}
