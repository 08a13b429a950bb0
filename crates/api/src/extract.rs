//! Request extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};
use vernissage_core::error::{CoreError, FieldErrors};

use crate::error::AppError;

/// An Axum extractor that deserializes JSON and validates it using `validator::Validate`.
///
/// Drop-in replacement for `Json<T>`. Malformed bodies, unknown fields and
/// wrong types are answered with `400 BAD_REQUEST` (axum's own `Json`
/// would answer 422); rule failures with `400 VALIDATION_ERROR` and a
/// per-field message map.
///
/// ```ignore
/// async fn create(Validated(input): Validated<CreateGenre>) -> AppResult<...> {
///     // input passed every field rule
/// }
/// ```
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::InvalidFields(field_errors(&errors))))?;

        Ok(Validated(value))
    }
}

/// Flatten `validator` output into the wire field-error map.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut result = FieldErrors::new();
    for (field, errors) in errors.field_errors() {
        let messages = errors.iter().map(describe).collect();
        result.insert(field.to_string(), messages);
    }
    result
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    let param = |name: &str| error.params.get(name);
    match error.code.as_ref() {
        "length" => {
            let len = param("value")
                .and_then(Value::as_str)
                .map(|v| v.chars().count() as u64);
            let min = param("min").and_then(Value::as_u64);
            let max = param("max").and_then(Value::as_u64);
            match (len, min, max) {
                (Some(0), _, _) => "This field may not be blank.".to_string(),
                (Some(len), _, Some(max)) if len > max => {
                    format!("Ensure this field has no more than {max} characters.")
                }
                (_, Some(min), _) => format!("Ensure this field has at least {min} characters."),
                _ => "Invalid length.".to_string(),
            }
        }
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("Ensure this value is between {min} and {max}."),
            (Some(min), None) => format!("Ensure this value is greater than or equal to {min}."),
            (None, Some(max)) => format!("Ensure this value is less than or equal to {max}."),
            (None, None) => "Value out of range.".to_string(),
        },
        code => format!("Invalid value ({code})."),
    }
}
