//! Transport layer: wire-format details (form encoding, JSON decoding).

mod account;
mod money;
mod response;
mod send_message;

pub use account::{
    decode_balance, decode_senders, encode_get_balance_params, encode_list_senders_params,
};
pub use response::{TransportError, decode_response};
pub use send_message::encode_send_message_params;

use crate::domain::{Operation, Params};

/// Fields an operation adds on top of the shared configuration defaults.
pub fn encode_operation_params(operation: &Operation) -> Params {
    match operation {
        Operation::SendMessage(request) => encode_send_message_params(request),
        Operation::GetBalance(_) => encode_get_balance_params(),
        Operation::ListSenders(_) => encode_list_senders_params(),
        Operation::Call(call) => call.params().clone(),
    }
}

/// `application/x-www-form-urlencoded` body for the given parameters.
pub fn encode_form(params: &Params) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, &value.to_form_value());
    }
    serializer.finish()
}
