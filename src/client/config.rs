//! Account configuration shared by every request.

use std::fmt;

use crate::domain::{ApiMethod, Host, ParamValue, Params, SenderId, ValidationError};

use super::SmscError;

/// Character set requested for message text (`charset`).
pub const CHARSET: &str = "utf-8";

/// Response format id for JSON (`fmt=3`).
pub const RESPONSE_FORMAT_JSON: i64 = 3;

/// Partner id sent with every request (`pp`).
pub const PARTNER_ID: &str = "0";

#[derive(Clone)]
/// Credentials, endpoint host and default parameters for gateway requests.
///
/// A `Config` is built once and reused for many operations. Operations read it but
/// never write to it; use the setters or [`Config::merge_options`] between calls.
pub struct Config {
    login: String,
    password: String,
    host: Host,
    sender: Option<SenderId>,
    default_options: Params,
}

impl Config {
    /// Form field name of the account login (`login`).
    pub const LOGIN_FIELD: &'static str = "login";

    /// Form field name of the account password (`psw`).
    pub const PASSWORD_FIELD: &'static str = "psw";

    /// Create a validated config for the default host.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Result<Self, SmscError> {
        Self::builder(login, password).build()
    }

    pub fn builder(login: impl Into<String>, password: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(login, password)
    }

    /// Check that login and password are present.
    ///
    /// The host is always one of [`Host::ALL`] by construction.
    pub fn validate(&self) -> Result<(), SmscError> {
        if self.login.trim().is_empty() {
            return Err(SmscError::InvalidConfig(ValidationError::Empty {
                field: Self::LOGIN_FIELD,
            }));
        }
        if self.password.is_empty() {
            return Err(SmscError::InvalidConfig(ValidationError::Empty {
                field: Self::PASSWORD_FIELD,
            }));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn set_login(&mut self, login: impl Into<String>) {
        self.login = login.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn host(&self) -> Host {
        self.host
    }

    /// Select the host by domain name.
    ///
    /// Blank input resets to the default host; names outside [`Host::ALL`] are rejected
    /// and leave the current host unchanged.
    pub fn set_host(&mut self, host: &str) -> Result<(), SmscError> {
        let host = host.trim();
        self.host = if host.is_empty() {
            Host::default()
        } else {
            Host::parse(host).map_err(|_| SmscError::UnsupportedHost {
                host: host.to_owned(),
            })?
        };
        Ok(())
    }

    /// Whether `host` is one of the supported domain names.
    pub fn is_supported_host(host: &str) -> bool {
        Host::parse(host).is_ok()
    }

    pub fn sender(&self) -> Option<&SenderId> {
        self.sender.as_ref()
    }

    pub fn set_sender(&mut self, sender: Option<SenderId>) {
        self.sender = sender;
    }

    /// Extra parameters added to every request.
    pub fn default_options(&self) -> &Params {
        &self.default_options
    }

    /// Merge `options` into the defaults; new values win on key collisions.
    pub fn merge_options<K, V>(&mut self, options: impl IntoIterator<Item = (K, V)>) -> &Params
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.default_options.extend(
            options
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        &self.default_options
    }

    /// Endpoint URL for a method given by name.
    pub fn build_url(&self, method: &str) -> Result<String, SmscError> {
        let method = ApiMethod::parse(method).map_err(|_| SmscError::UnsupportedMethod {
            method: method.to_owned(),
        })?;
        Ok(self.method_url(method))
    }

    /// Endpoint URL for `method`: `https://{host}/sys/{method}.php`.
    pub fn method_url(&self, method: ApiMethod) -> String {
        format!("https://{}/sys/{}.php", self.host, method)
    }

    /// Parameters every request starts from, before default options and operation fields.
    pub(crate) fn base_params(&self) -> Params {
        let mut params = Params::from([
            (
                Self::LOGIN_FIELD.to_owned(),
                ParamValue::Text(self.login.clone()),
            ),
            (
                Self::PASSWORD_FIELD.to_owned(),
                ParamValue::Text(self.password.clone()),
            ),
            ("charset".to_owned(), ParamValue::from(CHARSET)),
            ("fmt".to_owned(), ParamValue::Integer(RESPONSE_FORMAT_JSON)),
            ("pp".to_owned(), ParamValue::from(PARTNER_ID)),
        ]);
        if let Some(sender) = self.sender.as_ref() {
            params.insert(
                SenderId::FIELD.to_owned(),
                ParamValue::Text(sender.as_str().to_owned()),
            );
        }
        params
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("sender", &self.sender)
            .field("default_options", &self.default_options)
            .finish()
    }
}

#[derive(Debug, Clone)]
/// Builder for [`Config`].
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            config: Config {
                login: login.into(),
                password: password.into(),
                host: Host::default(),
                sender: None,
                default_options: Params::new(),
            },
        }
    }

    pub fn host(mut self, host: Host) -> Self {
        self.config.host = host;
        self
    }

    /// Default sender id for every request.
    pub fn sender(mut self, sender: SenderId) -> Self {
        self.config.sender = Some(sender);
        self
    }

    /// Add a default parameter, replacing any previous value for `key`.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.config
            .default_options
            .insert(key.into(), value.into());
        self
    }

    /// Validate and build the [`Config`].
    pub fn build(self) -> Result<Config, SmscError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new("user", "secret").unwrap()
    }

    #[test]
    fn new_validates_credentials() {
        assert!(matches!(
            Config::new("", "secret"),
            Err(SmscError::InvalidConfig(ValidationError::Empty { field: "login" }))
        ));
        assert!(matches!(
            Config::new("user", ""),
            Err(SmscError::InvalidConfig(ValidationError::Empty { field: "psw" }))
        ));
        assert!(config().is_valid());
    }

    #[test]
    fn setters_can_invalidate_config() {
        let mut config = config();
        config.set_login("   ");
        assert!(!config.is_valid());
        assert!(matches!(
            config.validate(),
            Err(SmscError::InvalidConfig(_))
        ));
        config.set_login("user");
        config.set_password("other");
        assert!(config.is_valid());
        assert_eq!(config.password(), "other");
    }

    #[test]
    fn set_host_enforces_allow_list() {
        let mut config = config();
        assert_eq!(config.host(), Host::Ua);

        config.set_host("smsc.kz").unwrap();
        assert_eq!(config.host(), Host::Kz);

        let err = config.set_host("unknown.example").unwrap_err();
        assert!(matches!(err, SmscError::UnsupportedHost { ref host } if host == "unknown.example"));
        assert_eq!(config.host(), Host::Kz);

        config.set_host("").unwrap();
        assert_eq!(config.host(), Host::Ua);

        assert!(Config::is_supported_host("smscentre.com"));
        assert!(!Config::is_supported_host("unknown.example"));
    }

    #[test]
    fn build_url_formats_every_allowed_method() {
        let config = Config::builder("user", "secret")
            .host(Host::Ru)
            .build()
            .unwrap();
        for method in ApiMethod::ALL {
            assert_eq!(
                config.build_url(method.as_str()).unwrap(),
                format!("https://smsc.ru/sys/{}.php", method.as_str())
            );
        }
        assert_eq!(
            config.build_url("get_mnp").unwrap(),
            "https://smsc.ru/sys/get_mnp.php"
        );
    }

    #[test]
    fn build_url_rejects_unknown_methods() {
        let err = config().build_url("delete").unwrap_err();
        assert!(matches!(err, SmscError::UnsupportedMethod { ref method } if method == "delete"));
        assert!(config().build_url("").is_err());
    }

    #[test]
    fn merge_options_is_right_biased() {
        let mut sequential = config();
        sequential.merge_options([("tz", ParamValue::from(2)), ("translit", ParamValue::from(true))]);
        sequential.merge_options([("tz", ParamValue::from(3)), ("id", ParamValue::from("a1"))]);

        let mut single = config();
        let merged = single
            .merge_options([
                ("translit", ParamValue::from(true)),
                ("tz", ParamValue::from(3)),
                ("id", ParamValue::from("a1")),
            ])
            .clone();

        assert_eq!(sequential.default_options(), &merged);
        assert_eq!(merged.get("tz"), Some(&ParamValue::Integer(3)));
    }

    #[test]
    fn merge_options_twice_is_idempotent() {
        let mut config = config();
        let options = [("tz", 2), ("valid", 24)];
        let first = config.merge_options(options).clone();
        let second = config.merge_options(options).clone();
        assert_eq!(first, second);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn base_params_carry_credentials_and_defaults() {
        let config = Config::builder("user", "secret")
            .sender(SenderId::new("Shop").unwrap())
            .build()
            .unwrap();
        let params = config.base_params();

        assert_eq!(params.get("login"), Some(&ParamValue::from("user")));
        assert_eq!(params.get("psw"), Some(&ParamValue::from("secret")));
        assert_eq!(params.get("charset"), Some(&ParamValue::from("utf-8")));
        assert_eq!(params.get("fmt"), Some(&ParamValue::Integer(3)));
        assert_eq!(params.get("pp"), Some(&ParamValue::from(PARTNER_ID)));
        assert_eq!(params.get("sender"), Some(&ParamValue::from("Shop")));
    }

    #[test]
    fn debug_output_redacts_password() {
        let rendered = format!("{:?}", config());
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("secret"));
    }
}
