use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

/// JSON body extractor that validates after deserialization.
///
/// Structurally broken input (not JSON at all, wrong field types, missing
/// required fields) rejects with 400. A well-formed body whose values break
/// a constraint rejects with 422 and the offending messages joined into
/// `message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match &rejection {
                JsonRejection::MissingJsonContentType(_) => AppError::bad_request(anyhow!(
                    "Missing 'Content-Type: application/json' header"
                )),
                _ => {
                    let body_text = rejection.body_text();
                    match missing_field_name(&body_text) {
                        Some(field) => AppError::bad_request(anyhow!("{field} is required")),
                        None => AppError::bad_request(anyhow!("Invalid request body")),
                    }
                }
            })?;

        value.validate().map_err(|errors| {
            AppError::unprocessable(anyhow!("{}", constraint_messages(&errors)))
        })?;

        Ok(ValidatedJson(value))
    }
}

fn missing_field_name(body_text: &str) -> Option<&str> {
    body_text
        .split("missing field `")
        .nth(1)
        .and_then(|rest| rest.split('`').next())
}

fn constraint_messages(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
