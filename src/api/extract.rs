//! Request extractors shared by the deck handlers.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::error::AppError;

/// Query string extractor where the first occurrence of a repeated key wins.
///
/// `?count=2&count=x` deserializes as `count=2` instead of being rejected as
/// a duplicate field. Rejections render as [`AppError`] so clients always
/// receive the JSON error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstValueQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for FirstValueQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|err| {
                AppError::bad_request(
                    "Malformed query string",
                    json!({ "reason": err.body_text() }),
                )
            })?;

        let params = serde_json::from_value(first_values(pairs)).map_err(|err| {
            AppError::bad_request(
                "Invalid query parameters",
                json!({ "reason": err.to_string() }),
            )
        })?;

        Ok(Self(params))
    }
}

fn first_values(pairs: Vec<(String, String)>) -> Value {
    let mut params = Map::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(Value::String(value));
    }
    Value::Object(params)
}
