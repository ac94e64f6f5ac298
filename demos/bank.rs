//! Deposit and an over-limit withdrawal against an account opened from JSON
//! settings.

use anyhow::Result;
use primer::PrimerConfig;

fn main() -> Result<()> {
    println!("{}", primer::version());
    let config = PrimerConfig::from_json(r#"{ "opening_balance": 500.0 }"#)?;
    let mut account = config.open_account()?;
    println!("Starting balance is {:.2}", account.balance());

    account.deposit(700.0)?;
    println!("Balance now is {:.2}", account.balance());

    match account.withdraw(1700.0) {
        Ok(()) => println!("Balance now is {:.2}", account.balance()),
        Err(e) => println!("Cannot withdraw: {}", e),
    }

    for tx in account.history() {
        println!("  {}", tx);
    }
    Ok(())
}
