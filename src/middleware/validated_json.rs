use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, StatusCode, header},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::NotefulError;
use crate::types::RequiredFields;

/// JSON body whose required fields have been checked before deserialization.
///
/// Rejections:
/// - a required field absent or `null` -> `MissingField` (first one in declared order)
/// - malformed JSON or a field of the wrong type -> `InvalidBody`
/// - body over the configured limit -> `PayloadTooLarge`
///
/// An empty body, or one whose `Content-Type` is not JSON, is treated as `{}`
/// so it reports the first missing field.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + RequiredFields,
{
    type Rejection = NotefulError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_json_content_type(req.headers()) {
            read_body(req, state).await?
        } else {
            Value::Object(Default::default())
        };
        check_required(&value, T::REQUIRED)?;

        let body = serde_json::from_value(value)
            .map_err(|e| NotefulError::InvalidBody(e.to_string()))?;
        Ok(ValidatedJson(body))
    }
}

async fn read_body<S>(req: Request, state: &S) -> Result<Value, NotefulError>
where
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            NotefulError::PayloadTooLarge
        } else {
            NotefulError::InvalidBody(rejection.body_text())
        }
    })?;
    parse_body(&bytes)
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn parse_body(bytes: &[u8]) -> Result<Value, NotefulError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(bytes).map_err(|e| NotefulError::InvalidBody(e.to_string()))
}

/// Non-object bodies have no fields, so they fail on the first required one.
pub fn check_required(value: &Value, fields: &'static [&'static str]) -> Result<(), NotefulError> {
    match fields
        .iter()
        .find(|field| value.get(**field).is_none_or(Value::is_null))
    {
        Some(field) => Err(NotefulError::MissingField(*field)),
        None => Ok(()),
    }
}
