use crate::domain::validation::ValidationError;
use crate::domain::value::{
    ApiMethod, MessageText, ParamValue, Params, RawPhoneNumber, SenderId, Voice,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Delivery toggles for [`SendMessage`].
///
/// Every flag only adds parameters; none of them excludes another.
pub struct SendOptions {
    pub mms: bool,
    pub mail: bool,
    pub hlr: bool,
    pub flash: bool,
    pub push: bool,
    pub ping: bool,
    pub viber: bool,
    /// Deliver as a voice call read out with the given voice.
    pub call: Option<Voice>,
    /// Per-message sender, overrides the configured one.
    pub sender: Option<SenderId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Send a message to one or more phones (`send`).
pub struct SendMessage {
    phones: Vec<RawPhoneNumber>,
    message: MessageText,
    options: SendOptions,
}

impl SendMessage {
    pub fn new(
        phones: Vec<RawPhoneNumber>,
        message: MessageText,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if phones.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self {
            phones,
            message,
            options,
        })
    }

    /// Append more recipients to the list.
    pub fn add_phones(&mut self, phones: impl IntoIterator<Item = RawPhoneNumber>) {
        self.phones.extend(phones);
    }

    pub fn set_message(&mut self, message: MessageText) {
        self.message = message;
    }

    pub fn phones(&self) -> &[RawPhoneNumber] {
        &self.phones
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SendOptions {
        &mut self.options
    }

    pub fn with_mms(mut self) -> Self {
        self.options.mms = true;
        self
    }

    pub fn with_mail(mut self) -> Self {
        self.options.mail = true;
        self
    }

    pub fn with_hlr(mut self) -> Self {
        self.options.hlr = true;
        self
    }

    pub fn with_flash(mut self) -> Self {
        self.options.flash = true;
        self
    }

    pub fn with_push(mut self) -> Self {
        self.options.push = true;
        self
    }

    pub fn with_ping(mut self) -> Self {
        self.options.ping = true;
        self
    }

    pub fn with_viber(mut self) -> Self {
        self.options.viber = true;
        self
    }

    pub fn with_call(mut self, voice: Voice) -> Self {
        self.options.call = Some(voice);
        self
    }

    pub fn with_sender(mut self, sender: SenderId) -> Self {
        self.options.sender = Some(sender);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Query the account balance together with its currency (`balance`).
pub struct GetBalance;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// List the sender ids approved for the account (`senders`).
pub struct ListSenders;

#[derive(Debug, Clone, PartialEq)]
/// Call any allow-listed method with caller-supplied parameters.
///
/// Used for methods without a dedicated request type (`status`, `info`, `get_mnp`, ...).
pub struct MethodCall {
    method: ApiMethod,
    params: Params,
}

impl MethodCall {
    pub fn new(method: ApiMethod) -> Self {
        Self {
            method,
            params: Params::new(),
        }
    }

    /// Set a parameter, replacing any previous value for `key`.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn method(&self) -> ApiMethod {
        self.method
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A single gateway action.
pub enum Operation {
    SendMessage(SendMessage),
    GetBalance(GetBalance),
    ListSenders(ListSenders),
    Call(MethodCall),
}

impl Operation {
    /// Remote method this operation is sent to.
    pub fn api_method(&self) -> ApiMethod {
        match self {
            Self::SendMessage(_) => ApiMethod::Send,
            Self::GetBalance(_) => ApiMethod::Balance,
            Self::ListSenders(_) => ApiMethod::Senders,
            Self::Call(call) => call.method(),
        }
    }
}

impl From<SendMessage> for Operation {
    fn from(value: SendMessage) -> Self {
        Self::SendMessage(value)
    }
}

impl From<GetBalance> for Operation {
    fn from(value: GetBalance) -> Self {
        Self::GetBalance(value)
    }
}

impl From<ListSenders> for Operation {
    fn from(value: ListSenders) -> Self {
        Self::ListSenders(value)
    }
}

impl From<MethodCall> for Operation {
    fn from(value: MethodCall) -> Self {
        Self::Call(value)
    }
}
