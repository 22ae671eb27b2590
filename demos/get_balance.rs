use std::io;

use smsc::{Config, SmscClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let login = required_env("SMSC_LOGIN")?;
    let password = required_env("SMSC_PASSWORD")?;

    let mut config = Config::new(login, password)?;
    if let Ok(host) = std::env::var("SMSC_HOST") {
        config.set_host(&host)?;
    }

    let client = SmscClient::new(config);
    let response = client.get_balance()?;
    if response.has_error() {
        println!(
            "error {}: {}",
            response.status_code(),
            response.status_code_message()
        );
        return Ok(());
    }

    let balance = response.balance();
    println!("balance: {:.2} {}", balance.amount, balance.currency);

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
