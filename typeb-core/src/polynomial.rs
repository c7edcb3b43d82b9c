//! Piecewise Polynomial Evaluation
//!
//! ## Motivation
//!
//! ITS-90 reference functions are not single polynomials: each thermocouple
//! type splits its domain into sub-ranges, each with its own coefficient set.
//! Evaluating one means two steps:
//!
//! 1. **Select** the sub-range that contains the input
//! 2. **Evaluate** that sub-range's polynomial at the input
//!
//! ## Sub-Range Selection
//!
//! Adjacent sub-ranges share their boundary value, so an input sitting exactly
//! on the boundary is contained in both. Which one wins is part of the model's
//! observable behavior, and the two Type B models resolve it differently:
//!
//! ```text
//! Inverse (mV → °C):   scan every range, last containing range wins
//!                      2.431 mV → high range
//!
//! Direct (°C → mV):    low range if it contains x, else high range
//!                      630.615°C → low range
//! ```
//!
//! Both rules are expressed by [`Selection`] so each table carries its own.
//!
//! ## Evaluation
//!
//! The polynomial is accumulated term by term with a running power of `x`:
//!
//! ```text
//! power = 1, sum = 0
//! for each coefficient c_i:
//!     sum   += power * c_i
//!     power *= x
//! ```
//!
//! No `powi`/`powf` calls, which matters on cores without an FPU, and always
//! in `f64` even though inputs arrive as `f32`.

/// Closed interval `[low, high]` of valid inputs for one coefficient set
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubRange {
    /// Lower bound (inclusive)
    pub low: f32,
    /// Upper bound (inclusive)
    pub high: f32,
}

impl SubRange {
    /// Create a sub-range from its bounds
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Closed-interval membership
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.low && x <= self.high
    }
}

/// Tie-break rule used when choosing a sub-range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Scan all sub-ranges in order; the last one containing the input wins.
    /// Returns `None` when no sub-range contains the input.
    LastContaining,
    /// Pick the first sub-range (excluding the last) containing the input,
    /// otherwise fall through to the last sub-range without checking it.
    FirstContainingElseLast,
}

/// A polynomial split into `RANGES` sub-ranges of `TERMS` coefficients each
///
/// Coefficients are stored `[degree][sub_range]`, matching the layout of the
/// published reference tables.
#[derive(Debug, Clone, Copy)]
pub struct PiecewisePolynomial<const TERMS: usize, const RANGES: usize> {
    coefficients: &'static [[f64; RANGES]; TERMS],
    ranges: &'static [SubRange; RANGES],
    selection: Selection,
}

impl<const TERMS: usize, const RANGES: usize> PiecewisePolynomial<TERMS, RANGES> {
    /// Build a model from static tables
    pub const fn new(
        coefficients: &'static [[f64; RANGES]; TERMS],
        ranges: &'static [SubRange; RANGES],
        selection: Selection,
    ) -> Self {
        Self {
            coefficients,
            ranges,
            selection,
        }
    }

    /// Pick the sub-range for `x` according to this model's tie-break rule
    pub fn select(&self, x: f32) -> Option<usize> {
        if RANGES == 0 {
            return None;
        }

        let selected = match self.selection {
            Selection::LastContaining => self
                .ranges
                .iter()
                .enumerate()
                .filter(|(_, range)| range.contains(x))
                .map(|(idx, _)| idx)
                .last(),
            Selection::FirstContainingElseLast => Some(
                self.ranges[..RANGES - 1]
                    .iter()
                    .position(|range| range.contains(x))
                    .unwrap_or(RANGES - 1),
            ),
        };

        if let Some(idx) = selected {
            log_trace!("sub-range {} selected for x={}", idx, x);
        }

        selected
    }

    /// Evaluate the polynomial of sub-range `range` at `x`
    ///
    /// Returns `None` if `range` is not a valid sub-range index. The input is
    /// not checked against the sub-range bounds.
    pub fn evaluate(&self, range: usize, x: f32) -> Option<f64> {
        if range >= RANGES {
            return None;
        }

        let x = f64::from(x);
        let mut power = 1.0;
        let mut sum = 0.0;
        for row in self.coefficients.iter() {
            sum += power * row[range];
            power *= x;
        }

        Some(sum)
    }

    /// Select a sub-range for `x` and evaluate it
    pub fn select_and_evaluate(&self, x: f32) -> Option<f64> {
        self.select(x).and_then(|range| self.evaluate(range, x))
    }

    /// Sub-range bounds
    pub fn ranges(&self) -> &'static [SubRange; RANGES] {
        self.ranges
    }

    /// Coefficient table, `[degree][sub_range]`
    pub fn coefficients(&self) -> &'static [[f64; RANGES]; TERMS] {
        self.coefficients
    }

    /// Tie-break rule
    pub fn selection(&self) -> Selection {
        self.selection
    }
}
