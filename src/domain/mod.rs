//! Domain layer: strong types with validation and invariants (no I/O).

mod error_code;
mod request;
mod response;
mod validation;
mod value;

pub use error_code::describe as describe_error_code;
pub use request::{GetBalance, ListSenders, MethodCall, Operation, SendMessage, SendOptions};
pub use response::{Balance, Response, SUCCESS_MESSAGE};
pub use validation::ValidationError;
pub use value::{
    ApiMethod, Host, MessageText, ParamValue, Params, PhoneNumber, RawPhoneNumber, SenderId,
    Voice,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(raw: &str) -> RawPhoneNumber {
        RawPhoneNumber::new(raw).unwrap()
    }

    #[test]
    fn send_message_requires_recipients() {
        let err = SendMessage::new(
            Vec::new(),
            MessageText::new("hi").unwrap(),
            SendOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: RawPhoneNumber::FIELD
            }
        ));
    }

    #[test]
    fn send_message_toggles_are_idempotent() {
        let msg = SendMessage::new(
            vec![phone("380501234567")],
            MessageText::new("hi").unwrap(),
            SendOptions::default(),
        )
        .unwrap();

        let once = msg.clone().with_viber().with_flash();
        let twice = msg.with_viber().with_viber().with_flash().with_flash();
        assert_eq!(once, twice);
        assert!(once.options().viber);
        assert!(once.options().flash);
        assert!(!once.options().mms);
    }

    #[test]
    fn send_message_add_phones_appends() {
        let mut msg = SendMessage::new(
            vec![phone("380501234567")],
            MessageText::new("hi").unwrap(),
            SendOptions::default(),
        )
        .unwrap();
        msg.add_phones(vec![phone("380671234567")]);
        msg.set_message(MessageText::new("bye").unwrap());

        let raws = msg.phones().iter().map(RawPhoneNumber::raw).collect::<Vec<_>>();
        assert_eq!(raws, vec!["380501234567", "380671234567"]);
        assert_eq!(msg.message().as_str(), "bye");
    }

    #[test]
    fn operation_method_tags() {
        let send = SendMessage::new(
            vec![phone("380501234567")],
            MessageText::new("hi").unwrap(),
            SendOptions::default(),
        )
        .unwrap();
        assert_eq!(Operation::from(send).api_method(), ApiMethod::Send);
        assert_eq!(Operation::from(GetBalance).api_method(), ApiMethod::Balance);
        assert_eq!(Operation::from(ListSenders).api_method(), ApiMethod::Senders);
        assert_eq!(
            Operation::from(MethodCall::new(ApiMethod::GetMnp)).api_method(),
            ApiMethod::GetMnp
        );
    }

    #[test]
    fn method_call_params_are_last_write_wins() {
        let call = MethodCall::new(ApiMethod::Status)
            .param("id", 1)
            .param("phone", "380501234567")
            .param("id", 2);
        assert_eq!(call.params().len(), 2);
        assert_eq!(call.params().get("id"), Some(&ParamValue::Integer(2)));
    }
}
