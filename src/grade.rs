//! Letter grades from percentage scores.

use crate::{PrimerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
    F,
}

impl Grade {
    /// Map a score in `0..=100` to its grade.
    ///
    /// | Score  | Grade |
    /// |--------|-------|
    /// | 80-100 | A+    |
    /// | 75-79  | A     |
    /// | 70-74  | A-    |
    /// | 65-69  | B+    |
    /// | 60-64  | B     |
    /// | 55-59  | B-    |
    /// | 50-54  | C+    |
    /// | 45-49  | C     |
    /// | 40-44  | D     |
    /// | 0-39   | F     |
    ///
    /// # Examples
    ///
    /// ```
    /// use primer::Grade;
    ///
    /// assert_eq!(Grade::from_score(82).unwrap(), Grade::APlus);
    /// assert!(Grade::from_score(101).is_err());
    /// ```
    pub fn from_score(score: i64) -> Result<Self> {
        let grade = match score {
            80..=100 => Grade::APlus,
            75..=79 => Grade::A,
            70..=74 => Grade::AMinus,
            65..=69 => Grade::BPlus,
            60..=64 => Grade::B,
            55..=59 => Grade::BMinus,
            50..=54 => Grade::CPlus,
            45..=49 => Grade::C,
            40..=44 => Grade::D,
            0..=39 => Grade::F,
            _ => return Err(PrimerError::ScoreOutOfRange(score)),
        };
        Ok(grade)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
