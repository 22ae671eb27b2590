use crate::domain::value::ApiMethod;

/// Status message reported for responses without a gateway error.
pub const SUCCESS_MESSAGE: &str = "Success";

#[derive(Debug, Clone, PartialEq)]
/// Decoded gateway response.
///
/// A gateway-reported error (for example insufficient funds) is not a Rust error:
/// check [`Response::has_error`] and the status accessors.
pub struct Response {
    pub(crate) origin: String,
    pub(crate) payload: serde_json::Value,
    pub(crate) method: ApiMethod,
    pub(crate) has_error: bool,
    pub(crate) status_code: i64,
    pub(crate) status_message: String,
    pub(crate) status_code_message: String,
}

impl Response {
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Gateway `error_code`, `0` on success.
    pub fn status_code(&self) -> i64 {
        self.status_code
    }

    /// Gateway `error` text, or `"Success"`.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Explanation of [`Response::status_code`] for this method; empty on success.
    pub fn status_code_message(&self) -> &str {
        &self.status_code_message
    }

    /// Method the request was sent to.
    pub fn method(&self) -> ApiMethod {
        self.method
    }

    /// Parsed JSON body, unchanged.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Raw response body as received.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Balance and currency of a `balance` response.
    pub fn balance(&self) -> Balance {
        crate::transport::decode_balance(&self.payload)
    }

    /// Sender ids of a `senders` response.
    pub fn senders(&self) -> Vec<String> {
        crate::transport::decode_senders(&self.payload)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Account balance. Missing fields decode as `0.0` and an empty currency.
pub struct Balance {
    pub amount: f64,
    pub currency: String,
}
