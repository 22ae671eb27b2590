use crate::domain::{
    MessageText, ParamValue, Params, RawPhoneNumber, SendMessage, SendOptions, SenderId, Voice,
};

/// Fragment for `send`: recipients, text, and one parameter per enabled toggle.
pub fn encode_send_message_params(request: &SendMessage) -> Params {
    let mut params = Params::new();

    let phones = request
        .phones()
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>()
        .join(",");
    params.insert(RawPhoneNumber::FIELD.to_owned(), ParamValue::Text(phones));
    params.insert(
        MessageText::FIELD.to_owned(),
        ParamValue::Text(request.message().as_str().to_owned()),
    );
    push_options(&mut params, request.options());

    params
}

fn push_options(params: &mut Params, options: &SendOptions) {
    let toggles = [
        ("mms", options.mms),
        ("mail", options.mail),
        ("hlr", options.hlr),
        ("flash", options.flash),
        ("push", options.push),
        ("ping", options.ping),
        ("viber", options.viber),
    ];
    for (key, enabled) in toggles {
        if enabled {
            params.insert(key.to_owned(), ParamValue::Flag(true));
        }
    }
    if let Some(voice) = options.call {
        params.insert("call".to_owned(), ParamValue::Flag(true));
        params.insert(
            Voice::FIELD.to_owned(),
            ParamValue::Text(voice.as_str().to_owned()),
        );
    }
    if let Some(sender) = options.sender.as_ref() {
        params.insert(
            SenderId::FIELD.to_owned(),
            ParamValue::Text(sender.as_str().to_owned()),
        );
    }
}
