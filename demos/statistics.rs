//! Summary statistics, primality and binary digits for a fixed sample.

use anyhow::Result;
use primer::stats::{average, largest, smallest};
use primer::{is_prime, to_binary_digits};

fn main() -> Result<()> {
    println!("{}", primer::version());

    let numbers = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];

    println!("Largest: {}", largest(&numbers)?);
    println!("Smallest: {}", smallest(&numbers)?);
    println!("Average: {:.2}", average(&numbers)?);

    for n in [5, 4, 7, 1, -10] {
        println!("Is {} prime? {}", n, is_prime(n));
    }

    for n in [5, 10, 0] {
        println!("Binary of {} is {}", n, to_binary_digits(n)?);
    }

    if let Err(e) = average(&[]) {
        println!("Average of nothing: {}", e);
    }
    Ok(())
}
