use serde::Deserialize;

use super::money::TransportMoney;
use crate::domain::{Balance, ParamValue, Params};

#[derive(Debug, Clone, Default, Deserialize)]
struct BalanceJsonResponse {
    #[serde(default)]
    balance: Option<TransportMoney>,
    #[serde(default)]
    currency: Option<String>,
}

/// Fragment for `balance`: ask for the currency alongside the amount.
pub fn encode_get_balance_params() -> Params {
    Params::from([("cur".to_owned(), ParamValue::Flag(true))])
}

/// Fragment for `senders`: list the approved sender ids.
pub fn encode_list_senders_params() -> Params {
    Params::from([("get".to_owned(), ParamValue::Flag(true))])
}

pub fn decode_balance(payload: &serde_json::Value) -> Balance {
    let parsed: BalanceJsonResponse =
        serde_json::from_value(payload.clone()).unwrap_or_default();
    Balance {
        amount: parsed
            .balance
            .and_then(TransportMoney::into_f64)
            .unwrap_or(0.0),
        currency: parsed.currency.unwrap_or_default(),
    }
}

pub fn decode_senders(payload: &serde_json::Value) -> Vec<String> {
    payload
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("sender").and_then(serde_json::Value::as_str))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
