//! Aggregate statistics over integer sequences.
//!
//! Every function here requires a non-empty slice and reports an empty one as
//! [`PrimerError::EmptyInput`] instead of panicking.

use crate::{PrimerError, Result};
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Return the largest element of `seq`.
///
/// Scans left to right with a strict comparison, so the first occurrence of
/// the maximum wins.
///
/// # Examples
///
/// ```
/// use primer::stats::largest;
///
/// assert_eq!(largest(&[3, 1, 4, 1, 5, 9, 2, 6]).unwrap(), 9);
/// assert!(largest::<i64>(&[]).is_err());
/// ```
pub fn largest<T: Ord + Copy>(seq: &[T]) -> Result<T> {
    let (&first, rest) = seq.split_first().ok_or(PrimerError::EmptyInput)?;
    let mut largest = first;
    for &x in rest {
        if x > largest {
            largest = x;
        }
    }
    Ok(largest)
}

/// Return the smallest element of `seq`.
///
/// # Examples
///
/// ```
/// use primer::stats::smallest;
///
/// assert_eq!(smallest(&[3, 1, 4, 1, 5, 9, 2, 6]).unwrap(), 1);
/// ```
pub fn smallest<T: Ord + Copy>(seq: &[T]) -> Result<T> {
    let (&first, rest) = seq.split_first().ok_or(PrimerError::EmptyInput)?;
    let mut smallest = first;
    for &x in rest {
        if x < smallest {
            smallest = x;
        }
    }
    Ok(smallest)
}

/// Return the arithmetic mean of `seq`.
///
/// The sum is accumulated in `i128`, which cannot overflow for any slice of
/// `i64` that fits in memory.
///
/// # Examples
///
/// ```
/// use primer::stats::average;
///
/// assert_eq!(average(&[1, 2, 3, 4]).unwrap(), 2.5);
/// ```
pub fn average(seq: &[i64]) -> Result<f64> {
    if seq.is_empty() {
        return Err(PrimerError::EmptyInput);
    }
    let sum: i128 = seq.iter().map(|&x| x as i128).sum();
    Ok(sum as f64 / seq.len() as f64)
}

/// Largest, smallest and mean of a sequence, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of elements
    pub count: usize,
    /// Largest element
    pub largest: i64,
    /// Smallest element
    pub smallest: i64,
    /// Arithmetic mean
    pub average: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Largest: {}, Smallest: {}, Average: {:.2}",
            self.largest, self.smallest, self.average
        )
    }
}

/// Compute a [`Summary`] of `seq`.
///
/// # Examples
///
/// ```
/// use primer::stats::summarize;
///
/// let s = summarize(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]).unwrap();
/// assert_eq!((s.smallest, s.largest, s.count), (1, 9, 11));
/// ```
pub fn summarize(seq: &[i64]) -> Result<Summary> {
    let (smallest, largest) = match seq.iter().copied().minmax() {
        MinMaxResult::NoElements => return Err(PrimerError::EmptyInput),
        MinMaxResult::OneElement(x) => (x, x),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };
    Ok(Summary {
        count: seq.len(),
        largest,
        smallest,
        average: average(seq)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i64; 11] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];

    #[test]
    fn test_largest() {
        assert_eq!(largest(&SAMPLE).unwrap(), 9);
        assert_eq!(largest(&[-5, -2, -9]).unwrap(), -2);
        assert_eq!(largest(&[7]).unwrap(), 7);
    }

    #[test]
    fn test_smallest() {
        assert_eq!(smallest(&SAMPLE).unwrap(), 1);
        assert_eq!(smallest(&[-5, -2, -9]).unwrap(), -9);
        assert_eq!(smallest(&[7]).unwrap(), 7);
    }

    #[test]
    fn test_average() {
        assert!((average(&SAMPLE).unwrap() - 44.0 / 11.0).abs() < 1e-12);
        assert_eq!(average(&[-3, 3]).unwrap(), 0.0);
    }

    #[test]
    fn test_average_no_overflow() {
        let seq = [i64::MAX, i64::MAX];
        assert_eq!(average(&seq).unwrap(), i64::MAX as f64);
    }

    #[test]
    fn test_empty_input() {
        let empty: [i64; 0] = [];
        assert!(matches!(largest(&empty), Err(PrimerError::EmptyInput)));
        assert!(matches!(smallest(&empty), Err(PrimerError::EmptyInput)));
        assert!(matches!(average(&empty), Err(PrimerError::EmptyInput)));
        assert!(matches!(summarize(&empty), Err(PrimerError::EmptyInput)));
    }

    #[test]
    fn test_summarize_single() {
        let s = summarize(&[42]).unwrap();
        assert_eq!(s.largest, 42);
        assert_eq!(s.smallest, 42);
        assert_eq!(s.average, 42.0);
        assert_eq!(s.count, 1);
    }

    #[test]
    fn test_summary_display() {
        let s = summarize(&SAMPLE).unwrap();
        assert_eq!(s.to_string(), "Largest: 9, Smallest: 1, Average: 4.00");
    }
}
