//! Read an integer and a score from stdin; print parity and letter grade.

use anyhow::{Context, Result};
use primer::{Grade, Parity};
use std::io::{self, BufRead};

fn read_int(lines: &mut impl Iterator<Item = io::Result<String>>, prompt: &str) -> Result<i64> {
    println!("{}", prompt);
    let line = lines.next().context("unexpected end of input")??;
    line.trim()
        .parse()
        .with_context(|| format!("invalid integer {:?}", line.trim()))
}

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let number = read_int(&mut lines, "Enter an integer:")?;
    println!("{}", Parity::of(number));

    let score = read_int(&mut lines, "Enter the score (0-100):")?;
    match Grade::from_score(score) {
        Ok(grade) => println!("{}", grade),
        Err(_) => println!("Invalid score"),
    }
    Ok(())
}
