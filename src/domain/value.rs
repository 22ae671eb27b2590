use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

use phonenumber::country;

/// Request parameters sent to the gateway.
///
/// Keys are unique; inserting an existing key replaces its value (last write wins).
pub type Params = BTreeMap<String, ParamValue>;

#[derive(Debug, Clone, PartialEq)]
/// Scalar value of a single form parameter.
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Encoded as `1` / `0`.
    Flag(bool),
}

impl ParamValue {
    /// Wire representation used in the URL-encoded body.
    pub fn to_form_value(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Flag(true) => "1".to_owned(),
            Self::Flag(false) => "0".to_owned(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Regional gateway domain.
pub enum Host {
    #[default]
    Ua,
    Ru,
    Kz,
    Tj,
    Centre,
}

impl Host {
    /// Every supported host, default first.
    pub const ALL: [Host; 5] = [Self::Ua, Self::Ru, Self::Kz, Self::Tj, Self::Centre];

    /// Domain name of the host.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ua => "smsc.ua",
            Self::Ru => "smsc.ru",
            Self::Kz => "smsc.kz",
            Self::Tj => "smsc.tj",
            Self::Centre => "smscentre.com",
        }
    }

    /// Look up a host by domain name. Only exact matches from [`Host::ALL`] are accepted.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|host| host.as_str() == value)
            .ok_or_else(|| ValidationError::UnsupportedHost {
                host: value.to_owned(),
            })
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Host {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Remote gateway method, served at `/sys/{method}.php`.
pub enum ApiMethod {
    Send,
    Templates,
    Jobs,
    Status,
    Balance,
    Phones,
    Users,
    Senders,
    Get,
    Info,
    GetMnp,
    ReceivePhones,
}

impl ApiMethod {
    /// Every method the gateway client is allowed to call.
    pub const ALL: [ApiMethod; 12] = [
        Self::Send,
        Self::Templates,
        Self::Jobs,
        Self::Status,
        Self::Balance,
        Self::Phones,
        Self::Users,
        Self::Senders,
        Self::Get,
        Self::Info,
        Self::GetMnp,
        Self::ReceivePhones,
    ];

    /// Method name as used in the endpoint path.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Templates => "templates",
            Self::Jobs => "jobs",
            Self::Status => "status",
            Self::Balance => "balance",
            Self::Phones => "phones",
            Self::Users => "users",
            Self::Senders => "senders",
            Self::Get => "get",
            Self::Info => "info",
            Self::GetMnp => "get_mnp",
            Self::ReceivePhones => "receive_phones",
        }
    }

    /// Look up a method by name. Only exact matches from [`ApiMethod::ALL`] are accepted.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| ValidationError::UnsupportedMethod {
                method: value.to_owned(),
            })
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Voice used for voice-call delivery (`voice`).
pub enum Voice {
    Male,
    Male2,
    Male3,
    Male4,
    Female,
    Female2,
    Female3,
    Female4,
}

impl Voice {
    /// Form field name used by the gateway (`voice`).
    pub const FIELD: &'static str = "voice";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Male2 => "m2",
            Self::Male3 => "m3",
            Self::Male4 => "m4",
            Self::Female => "w",
            Self::Female2 => "w2",
            Self::Female3 => "w3",
            Self::Female4 => "w4",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Approved sender id (`sender`).
///
/// Invariant: non-empty after trimming. The value must be approved for your account.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by the gateway (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`mes`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by the gateway (`mes`).
    pub const FIELD: &'static str = "mes";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to the gateway, without normalization.
///
/// Invariant: non-empty after trimming and free of commas (the gateway uses them as
/// list separators). Parse into [`PhoneNumber`] first if you want E.164 normalization.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by the gateway (`phones`).
    pub const FIELD: &'static str = "phones";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.contains(',') {
            return Err(ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Split a comma-separated list (`"79001234567,79007654321"`) into numbers.
    ///
    /// Blank entries are skipped; an input with no numbers at all is rejected.
    pub fn parse_list(value: &str) -> Result<Vec<Self>, ValidationError> {
        let phones = value
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Self::new)
            .collect::<Result<Vec<_>, _>>()?;
        if phones.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(phones)
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing use the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` applies when the input has no explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;
        if !phonenumber::is_valid(&parsed) {
            return Err(ValidationError::InvalidPhoneNumber { input: raw });
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164 })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_allow_list_is_exact() {
        assert_eq!(Host::default(), Host::Ua);
        assert_eq!(Host::parse("smsc.ru").unwrap(), Host::Ru);
        assert_eq!("smscentre.com".parse::<Host>().unwrap(), Host::Centre);
        assert!(Host::parse("SMSC.RU").is_err());
        assert!(matches!(
            Host::parse("unknown.example"),
            Err(ValidationError::UnsupportedHost { .. })
        ));
        for host in Host::ALL {
            assert_eq!(Host::parse(host.as_str()).unwrap(), host);
        }
    }

    #[test]
    fn method_allow_list_covers_gateway_methods() {
        let names = ApiMethod::ALL
            .iter()
            .map(|method| method.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "send",
                "templates",
                "jobs",
                "status",
                "balance",
                "phones",
                "users",
                "senders",
                "get",
                "info",
                "get_mnp",
                "receive_phones",
            ]
        );
        assert_eq!(ApiMethod::parse("get_mnp").unwrap(), ApiMethod::GetMnp);
        assert!(matches!(
            ApiMethod::parse("delete"),
            Err(ValidationError::UnsupportedMethod { .. })
        ));
    }

    #[test]
    fn param_values_encode_for_forms() {
        assert_eq!(ParamValue::from("utf-8").to_form_value(), "utf-8");
        assert_eq!(ParamValue::from(3).to_form_value(), "3");
        assert_eq!(ParamValue::from(true).to_form_value(), "1");
        assert_eq!(ParamValue::from(false).to_form_value(), "0");
        assert_eq!(ParamValue::from(1.5).to_form_value(), "1.5");
    }

    #[test]
    fn string_newtypes_trim_or_validate() {
        let sender = SenderId::new(" Shop ").unwrap();
        assert_eq!(sender.as_str(), "Shop");
        assert!(SenderId::new("  ").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());
    }

    #[test]
    fn raw_phone_number_rejects_separators() {
        let raw = RawPhoneNumber::new(" 380501234567 ").unwrap();
        assert_eq!(raw.raw(), "380501234567");
        assert!(RawPhoneNumber::new("").is_err());
        assert!(matches!(
            RawPhoneNumber::new("380501234567,380671234567"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn raw_phone_number_parses_comma_lists() {
        let phones = RawPhoneNumber::parse_list("380501234567, 380671234567,").unwrap();
        assert_eq!(phones.len(), 2);
        assert_eq!(phones[1].raw(), "380671234567");
        assert!(RawPhoneNumber::parse_list(" , ").is_err());
    }

    #[test]
    fn phone_number_parsing_uses_e164() {
        let p1 = PhoneNumber::parse(None, "+380501234567").unwrap();
        let p2 = PhoneNumber::parse(None, "+380 50 123 45 67").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+380501234567");
        assert_eq!(p2.raw(), "+380 50 123 45 67");

        let raw: RawPhoneNumber = p2.into();
        assert_eq!(raw.raw(), "+380501234567");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn phone_number_uses_default_region() {
        let pn = PhoneNumber::parse(Some(country::Id::UA), "050 123 45 67").unwrap();
        assert_eq!(pn.e164(), "+380501234567");
    }
}
