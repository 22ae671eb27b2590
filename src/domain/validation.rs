use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    UnsupportedHost { host: String },
    UnsupportedMethod { method: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::UnsupportedHost { host } => write!(f, "host \"{host}\" is not supported"),
            Self::UnsupportedMethod { method } => {
                write!(f, "method \"{method}\" is not supported")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
