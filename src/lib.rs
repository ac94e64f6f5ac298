//! Primer - Numeric Utilities with Explicit Contracts
//!
//! Primer is a small collection of numeric building blocks whose edge cases
//! are pinned down precisely. Every operation is either a pure function or a
//! mutation of a single owned value, and every failure is a recoverable
//! [`PrimerError`] rather than a panic.
//!
//! # Modules
//!
//! - **stats**: largest, smallest and mean of a non-empty integer sequence
//! - **number**: primality, parity, factorial and a guarded square root
//! - **binary**: recursive base-2 digit encoding
//! - **quadratic**: classification and solution of `a*x^2 + b*x + c = 0`
//! - **account**: deposit/withdraw with an insufficient-funds guard
//! - **grade**: percentage score to letter grade
//! - **config**: JSON settings for the solver and new accounts
//!
//! # Examples
//!
//! ## Statistics
//!
//! ```
//! use primer::stats::{average, largest, smallest};
//!
//! let numbers = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
//! assert_eq!(largest(&numbers).unwrap(), 9);
//! assert_eq!(smallest(&numbers).unwrap(), 1);
//! assert_eq!(average(&numbers).unwrap(), 4.0);
//!
//! // Empty input is an error, not a panic
//! assert!(average(&[]).is_err());
//! ```
//!
//! ## Equations and balances
//!
//! ```
//! use primer::{quadratic::solve, Account, PrimerError, Solution};
//!
//! assert_eq!(solve(1.0, 2.0, 1.0).unwrap(), Solution::OneRoot(-1.0));
//!
//! let mut acct = Account::new(500.0).unwrap();
//! acct.deposit(700.0).unwrap();
//! let err = acct.withdraw(1700.0).unwrap_err();
//! assert!(matches!(err, PrimerError::InsufficientFunds { .. }));
//! assert_eq!(acct.balance(), 1200.0);
//! ```

// Module declarations
pub mod error;

pub mod account;
pub mod binary;
pub mod config;
pub mod grade;
pub mod number;
pub mod quadratic;
pub mod stats;

// Re-exports for convenient access
pub use error::{PrimerError, Result};

pub use account::{Account, Transaction, TransactionKind};
pub use binary::{to_binary_digits, to_binary_literal};
pub use config::PrimerConfig;
pub use grade::Grade;
pub use number::{factorial, is_prime, safe_sqrt, Parity};
pub use quadratic::{EquationKind, QuadraticCoefficients, Solution, Solver};
pub use stats::{summarize, Summary};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "Primer";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
