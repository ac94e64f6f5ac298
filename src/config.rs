//! JSON-loadable settings.
//!
//! [`PrimerConfig`] gathers the few tunable values in the crate: the
//! discriminant tolerance used by the equation solver and the opening
//! balance for new accounts. Missing fields fall back to their defaults.
//!
//! # Example
//!
//! ```
//! use primer::PrimerConfig;
//!
//! let config = PrimerConfig::from_json(r#"{ "opening_balance": 500.0 }"#).unwrap();
//! let account = config.open_account().unwrap();
//! assert_eq!(account.balance(), 500.0);
//! assert_eq!(config.solver().unwrap().tolerance(), 0.0);
//! ```

use crate::error::ensure_finite;
use crate::quadratic::Solver;
use crate::{Account, PrimerError, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrimerConfig {
    /// Discriminant magnitude treated as zero by the solver
    pub tolerance: f64,
    /// Balance of accounts opened through [`PrimerConfig::open_account`]
    pub opening_balance: f64,
}

impl PrimerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PrimerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("tolerance", self.tolerance)?;
        if self.tolerance < 0.0 {
            return Err(PrimerError::InvalidParameter(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        ensure_finite("opening_balance", self.opening_balance)?;
        if self.opening_balance < 0.0 {
            return Err(PrimerError::NegativeAmount(self.opening_balance));
        }
        Ok(())
    }

    pub fn solver(&self) -> Result<Solver> {
        Solver::with_tolerance(self.tolerance)
    }

    pub fn open_account(&self) -> Result<Account> {
        Account::new(self.opening_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrimerConfig::from_json("{}").unwrap();
        assert_eq!(config, PrimerConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            PrimerConfig::from_json(r#"{ "tolerence": 0.1 }"#),
            Err(PrimerError::Serialization(_))
        ));
    }
}
