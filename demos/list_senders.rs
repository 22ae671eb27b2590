use std::io;

use smsc::{Config, PooledTransport, SmscClient};

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

    // Balance and senders go through the same keep-alive pool.
    let client = SmscClient::with_transport(Config::new(login, password)?, PooledTransport::new()?);

    let balance = client.get_balance()?.balance();
    println!("balance: {:.2} {}", balance.amount, balance.currency);

    let response = client.list_senders()?;
    if response.has_error() {
        println!("error: {}", response.status_code_message());
        return Ok(());
    }
    for sender in response.senders() {
        println!("{sender}");
    }

    Ok(())
}
