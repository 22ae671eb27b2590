use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{ApiMethod, Response, SUCCESS_MESSAGE, describe_error_code};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a raw gateway body and classify it with the error table of `method`.
pub fn decode_response(raw: &str, method: ApiMethod) -> Result<Response, TransportError> {
    let payload: Value = serde_json::from_str(raw)?;

    let Some(code) = payload.get("error_code").and_then(truthy_error_code) else {
        debug!(method = method.as_str(), "gateway request succeeded");
        return Ok(Response {
            origin: raw.to_owned(),
            payload,
            method,
            has_error: false,
            status_code: 0,
            status_message: SUCCESS_MESSAGE.to_owned(),
            status_code_message: String::new(),
        });
    };

    let status_message = match payload.get("error") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    let status_code_message = match describe_error_code(method, code) {
        Some(text) => text.to_owned(),
        None => {
            warn!(
                method = method.as_str(),
                code, "gateway returned an undocumented error code"
            );
            format!("Unknown error: \"{method}\":\"{code}\". See full response: {raw}")
        }
    };
    debug!(method = method.as_str(), code, "gateway reported an error");

    Ok(Response {
        origin: raw.to_owned(),
        payload,
        method,
        has_error: true,
        status_code: code,
        status_message,
        status_code_message,
    })
}

/// Numeric code of a truthy `error_code`; `None` when the field means "no error".
///
/// Non-numeric but non-empty strings still count as errors and map to `-1`.
fn truthy_error_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            let code = number
                .as_i64()
                .or_else(|| number.as_f64().map(|float| float as i64))?;
            (code != 0).then_some(code)
        }
        Value::String(text) => {
            let text = text.trim();
            match text.parse::<i64>() {
                Ok(0) => None,
                Ok(code) => Some(code),
                Err(_) if text.is_empty() => None,
                Err(_) => Some(-1),
            }
        }
        Value::Bool(true) => Some(1),
        _ => None,
    }
}
