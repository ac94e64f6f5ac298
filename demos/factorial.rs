//! Read an integer from stdin and print its factorial.

use anyhow::{Context, Result};
use primer::{factorial, PrimerError};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    print!("Enter a positive integer to calculate its factorial: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let n: i64 = line.trim().parse().context("expected an integer")?;

    match factorial(n) {
        Ok(f) => println!("Factorial of {} is {}", n, f),
        Err(PrimerError::NegativeInput(_)) => {
            println!("Factorial is not defined for negative numbers.")
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
