use std::io;

use smsc::{
    Config, MessageText, OneShotTransport, Operation, RawPhoneNumber, SendMessage, SendOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let login = std::env::var("SMSC_LOGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_LOGIN environment variable is required",
        )
    })?;
    let password = std::env::var("SMSC_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_PASSWORD environment variable is required",
        )
    })?;
    let phones = std::env::var("SMSC_PHONES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSC_PHONES environment variable is required",
        )
    })?;
    let message = std::env::var("SMSC_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsc demo.".to_owned());

    let config = Config::new(login, password)?;
    let mut request = SendMessage::new(
        RawPhoneNumber::parse_list(&phones)?,
        MessageText::new(message)?,
        SendOptions::default(),
    )?;
    if std::env::var("SMSC_VIBER").is_ok() {
        request = request.with_viber();
    }

    let response = Operation::from(request).execute(&config, &OneShotTransport::new())?;
    println!(
        "error: {}, status_code: {}, message: {}, payload: {}",
        response.has_error(),
        response.status_code(),
        response.status_message(),
        response.payload()
    );

    Ok(())
}
