//! Account with a guarded balance.
//!
//! An [`Account`] owns a single `f64` balance that never goes negative. Every
//! operation validates its amount before touching the balance, so a failed
//! call leaves the account exactly as it was. Successful operations are
//! appended to a [`Transaction`] history for later inspection.

use crate::error::ensure_finite;
use crate::{PrimerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a balance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// A successful balance change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: f64,
    /// Balance immediately after this transaction
    pub balance_after: f64,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        };
        write!(f, "{} {:.2} -> balance {:.2}", verb, self.amount, self.balance_after)
    }
}

/// Single-owner account balance.
///
/// # Examples
///
/// ```
/// use primer::Account;
///
/// let mut acct = Account::new(500.0).unwrap();
/// acct.deposit(700.0).unwrap();
/// assert_eq!(acct.balance(), 1200.0);
///
/// assert!(acct.withdraw(1700.0).is_err());
/// assert_eq!(acct.balance(), 1200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    balance: f64,
    history: Vec<Transaction>,
}

fn validate_amount(amount: f64) -> Result<()> {
    ensure_finite("amount", amount)?;
    if amount < 0.0 {
        return Err(PrimerError::NegativeAmount(amount));
    }
    Ok(())
}

impl Account {
    /// Open an account with `opening` balance.
    ///
    /// # Errors
    ///
    /// * [`PrimerError::NonFinite`] if `opening` is NaN or infinite
    /// * [`PrimerError::NegativeAmount`] if `opening < 0`
    pub fn new(opening: f64) -> Result<Self> {
        validate_amount(opening)?;
        Ok(Self {
            balance: opening,
            history: Vec::new(),
        })
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Successful transactions, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Add `amount` to the balance.
    ///
    /// Negative and non-finite amounts are rejected.
    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        validate_amount(amount)?;
        let balance = self.balance + amount;
        ensure_finite("balance", balance)?;
        self.commit(TransactionKind::Deposit, amount, balance);
        Ok(())
    }

    /// Remove `amount` from the balance.
    ///
    /// # Errors
    ///
    /// [`PrimerError::InsufficientFunds`] if `amount` exceeds the balance.
    /// Negative and non-finite amounts are rejected as in [`deposit`].
    ///
    /// [`deposit`]: Account::deposit
    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        validate_amount(amount)?;
        if amount > self.balance {
            return Err(PrimerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        let balance = self.balance - amount;
        self.commit(TransactionKind::Withdrawal, amount, balance);
        Ok(())
    }

    fn commit(&mut self, kind: TransactionKind, amount: f64, balance: f64) {
        self.balance = balance;
        self.history.push(Transaction {
            kind,
            amount,
            balance_after: balance,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(Account::new(-1.0), Err(PrimerError::NegativeAmount(_))));
        assert!(matches!(Account::new(f64::NAN), Err(PrimerError::NonFinite(_))));
        assert_eq!(Account::new(0.0).unwrap().balance(), 0.0);
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut acct = Account::new(100.0).unwrap();
        acct.withdraw(100.0).unwrap();
        assert_eq!(acct.balance(), 0.0);
    }

    #[test]
    fn test_deposit_overflow_to_infinity() {
        let mut acct = Account::new(f64::MAX).unwrap();
        assert!(matches!(acct.deposit(f64::MAX), Err(PrimerError::NonFinite(_))));
        assert_eq!(acct.balance(), f64::MAX);
        assert!(acct.history().is_empty());
    }

    #[test]
    fn test_transaction_display() {
        let mut acct = Account::new(500.0).unwrap();
        acct.deposit(700.0).unwrap();
        assert_eq!(acct.history()[0].to_string(), "deposit 700.00 -> balance 1200.00");
    }
}
