//! Solver for `a*x^2 + b*x + c = 0`.
//!
//! Coefficients are first classified into one of four [`EquationKind`]s, then
//! solved. A zero leading coefficient falls back to the linear equation
//! `b*x + c = 0`, whose own degenerate cases (`0 = 0`, and `c = 0` with
//! `c != 0`) are reported as infinite solutions and no solution.
//!
//! # Tolerance
//!
//! Before solving, the coefficients are rescaled by a power of two so the
//! largest has magnitude near 1 (see [`QuadraticCoefficients::normalized`]).
//! The roots are unchanged by this, and the discriminant can no longer
//! overflow. The normalized discriminant is compared against zero exactly by
//! default. A [`Solver`] built with [`Solver::with_tolerance`] treats any
//! normalized discriminant with `|d| <= tolerance` as zero, which turns
//! near-double roots produced by rounding into a single root.
//!
//! # Example
//!
//! ```
//! use primer::quadratic::{solve, Solution};
//!
//! assert_eq!(solve(1.0, -3.0, 2.0).unwrap(), Solution::TwoRoots(1.0, 2.0));
//! assert_eq!(solve(0.0, 2.0, -4.0).unwrap(), Solution::Linear(2.0));
//! ```

use crate::error::ensure_finite;
use crate::{PrimerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coefficients `(a, b, c)` of `a*x^2 + b*x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Shape of an equation before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationKind {
    /// `a == 0`, `b != 0`
    Linear,
    /// `a == 0`, `b == 0`, `c == 0`: holds for every x
    Identity,
    /// `a == 0`, `b == 0`, `c != 0`: holds for no x
    Contradiction,
    /// `a != 0`
    Quadratic,
}

impl QuadraticCoefficients {
    /// Create coefficients, rejecting NaN and infinities.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        ensure_finite("a", a)?;
        ensure_finite("b", b)?;
        ensure_finite("c", c)?;
        Ok(Self { a, b, c })
    }

    /// Classify the equation. Zero tests on coefficients are exact.
    pub fn kind(&self) -> EquationKind {
        match (self.a == 0.0, self.b == 0.0, self.c == 0.0) {
            (false, _, _) => EquationKind::Quadratic,
            (true, false, _) => EquationKind::Linear,
            (true, true, true) => EquationKind::Identity,
            (true, true, false) => EquationKind::Contradiction,
        }
    }

    /// `b^2 - 4ac`, computed directly. Overflows for large coefficients;
    /// call it on [`normalized`](Self::normalized) coefficients to avoid that.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// The same equation with every coefficient divided by a power of two
    /// near the largest magnitude. Power-of-two scaling is exact, so the
    /// roots and the equation kind are unchanged.
    pub fn normalized(&self) -> Self {
        let largest = self.a.abs().max(self.b.abs()).max(self.c.abs());
        if largest == 0.0 {
            return *self;
        }
        // clamp keeps 2^exp itself a normal, finite f64
        let exp = largest.log2().floor().clamp(-1000.0, 1000.0) as i32;
        let scale = 2f64.powi(exp);
        Self {
            a: self.a / scale,
            b: self.b / scale,
            c: self.c / scale,
        }
    }
}

/// Reject roots that left the f64 range; turn `-0.0` into `0.0`.
fn finite_root(x: f64) -> Result<f64> {
    if x.is_finite() {
        Ok(x + 0.0)
    } else {
        Err(PrimerError::Overflow(format!("root is not a finite f64: {}", x)))
    }
}

/// Result of solving an equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Solution {
    /// Root of the degenerate linear equation
    Linear(f64),
    /// Two distinct real roots, smaller first
    TwoRoots(f64, f64),
    /// One repeated real root
    OneRoot(f64),
    /// Negative discriminant, or the contradiction `c = 0` with `c != 0`
    NoRealSolution,
    /// Every x is a solution
    InfiniteSolutions,
}

impl Solution {
    /// Real roots in ascending order. Empty for `NoRealSolution` and
    /// `InfiniteSolutions`.
    pub fn roots(&self) -> Vec<f64> {
        match *self {
            Solution::Linear(x) | Solution::OneRoot(x) => vec![x],
            Solution::TwoRoots(lo, hi) => vec![lo, hi],
            Solution::NoRealSolution | Solution::InfiniteSolutions => Vec::new(),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Linear(x) => write!(f, "Linear equation root: {:.2}", x),
            Solution::TwoRoots(lo, hi) => {
                write!(f, "Two real and distinct roots: {:.2} and {:.2}", lo, hi)
            }
            Solution::OneRoot(x) => write!(f, "One real root: {:.2}", x),
            Solution::NoRealSolution => f.write_str("No real solutions"),
            Solution::InfiniteSolutions => f.write_str("Infinite solutions"),
        }
    }
}

/// Equation solver with a configurable discriminant tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Solver {
    tolerance: f64,
}

impl Solver {
    /// Solver with exact discriminant comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver that treats a normalized discriminant with
    /// `|d| <= tolerance` as zero.
    ///
    /// # Errors
    ///
    /// [`PrimerError::InvalidParameter`] if `tolerance` is negative or not
    /// finite.
    pub fn with_tolerance(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(PrimerError::InvalidParameter(format!(
                "tolerance must be finite and non-negative, got {}",
                tolerance
            )));
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Solve already-validated coefficients.
    ///
    /// Two distinct roots use the cancellation-free form
    /// `q = -(b + sign(b) * sqrt(d)) / 2`, `x1 = q / a`, `x2 = c / q`.
    ///
    /// # Errors
    ///
    /// [`PrimerError::Overflow`] if a root is too large for an `f64`. A
    /// coefficient smaller than the largest one by a factor beyond the `f64`
    /// exponent range (about 2^1074) underflows during normalization and
    /// also reports `Overflow`.
    pub fn solve(&self, coeffs: &QuadraticCoefficients) -> Result<Solution> {
        let QuadraticCoefficients { a, b, c } = coeffs.normalized();
        let solution = match coeffs.kind() {
            EquationKind::Linear => Solution::Linear(finite_root(-c / b)?),
            EquationKind::Identity => Solution::InfiniteSolutions,
            EquationKind::Contradiction => Solution::NoRealSolution,
            EquationKind::Quadratic => {
                let d = b * b - 4.0 * a * c;
                if d.abs() <= self.tolerance {
                    Solution::OneRoot(finite_root(-b / (2.0 * a))?)
                } else if d > 0.0 {
                    let q = -0.5 * (b + b.signum() * d.sqrt());
                    let r1 = finite_root(q / a)?;
                    let r2 = finite_root(c / q)?;
                    Solution::TwoRoots(r1.min(r2), r1.max(r2))
                } else {
                    Solution::NoRealSolution
                }
            }
        };
        Ok(solution)
    }
}

/// Solve `a*x^2 + b*x + c = 0` with exact discriminant comparison.
///
/// # Errors
///
/// * [`PrimerError::NonFinite`] if any coefficient is NaN or infinite
/// * [`PrimerError::Overflow`] if a root is too large for an `f64`
pub fn solve(a: f64, b: f64, c: f64) -> Result<Solution> {
    let coeffs = QuadraticCoefficients::new(a, b, c)?;
    Solver::new().solve(&coeffs)
}
