//! Typed Rust client for the SMSC gateway HTTP API.
//!
//! The crate has three layers: a domain layer of strong types, a transport layer for
//! wire-format details, and a client layer that orchestrates blocking requests through
//! a pluggable [`HttpTransport`].
//!
//! ```rust,no_run
//! use smsc::{Config, MessageText, RawPhoneNumber, SendMessage, SendOptions, SmscClient};
//!
//! fn main() -> Result<(), smsc::SmscError> {
//!     let client = SmscClient::new(Config::new("login", "password")?);
//!     let phones = vec![RawPhoneNumber::new("380501234567")?];
//!     let request = SendMessage::new(phones, MessageText::new("hello")?, SendOptions::default())?;
//!     let response = client.send_message(request)?;
//!     if response.has_error() {
//!         eprintln!("{}: {}", response.status_code(), response.status_code_message());
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Config, ConfigBuilder, HttpError, HttpResponse, HttpTransport, OneShotTransport,
    PooledTransport, PooledTransportBuilder, SmscClient, SmscError,
};
pub use domain::{
    ApiMethod, Balance, GetBalance, Host, ListSenders, MessageText, MethodCall, Operation,
    ParamValue, Params, PhoneNumber, RawPhoneNumber, Response, SendMessage, SendOptions, SenderId,
    ValidationError, Voice,
};
