//! Read coefficients a, b and c from stdin and print the roots.
//!
//! Run with: `echo "1 -3 2" | cargo run --example quadratic`

use anyhow::{Context, Result};
use primer::quadratic::solve;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    println!("{}", primer::version());
    print!("Enter coefficients a, b and c: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let coeffs = line
        .split_whitespace()
        .map(|tok| tok.parse::<f64>().with_context(|| format!("invalid coefficient {:?}", tok)))
        .collect::<Result<Vec<f64>>>()?;
    let &[a, b, c] = coeffs.as_slice() else {
        anyhow::bail!("expected 3 coefficients, got {}", coeffs.len());
    };

    let solution = solve(a, b, c)?;
    println!("{}", solution);
    Ok(())
}
