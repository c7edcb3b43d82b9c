//! Error Types for Thermocouple Conversions
//!
//! ## Design Philosophy
//!
//! Conversions run inside measurement loops on small microcontrollers, so the
//! error type follows the same rules as the rest of the crate:
//!
//! 1. **Small Size**: every variant fits in 16 bytes and is `Copy`.
//!
//! 2. **No Heap Allocation**: no `String` payloads; the offending value and the
//!    violated bounds are stored inline.
//!
//! 3. **Actionable Information**: `OutOfRange` names the quantity that was
//!    rejected, so the caller can tell a bad thermocouple reading from a bad
//!    ambient (cold-junction) reading without re-checking anything.
//!
//! ## Error Categories
//!
//! - `OutOfRange`: the input lies outside the ITS-90 domain for the requested
//!   lookup (e.g. 0.1 mV, or a cold junction at -5°C)
//! - `InvalidValue`: the input is NaN or infinite
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use typeb_core::{ConversionError, Quantity, TypeB};
//!
//! fn read_tip(tc: &TypeB, mv: f32, ambient_c: f32) -> Option<f64> {
//!     match tc.try_temperature_celsius_compensated(mv, ambient_c) {
//!         Ok(celsius) => Some(celsius),
//!         Err(ConversionError::OutOfRange { quantity: Quantity::Celsius, .. }) => {
//!             // Cold-junction sensor is reporting nonsense
//!             None
//!         }
//!         Err(ConversionError::OutOfRange { .. }) => {
//!             // Thermocouple open or outside 250-1820°C
//!             None
//!         }
//!         Err(ConversionError::InvalidValue) => None,
//!     }
//! }
//! # let tc = TypeB::new();
//! # assert!(read_tip(&tc, 4.834, 0.0).is_some());
//! ```
//!
//! ## Sentinel Compatibility
//!
//! The unchecked API reports every error as [`RANGE_ERROR`]. Use
//! [`ConversionError::sentinel`] when bridging checked results back into code
//! that expects the sentinel.
//!
//! [`RANGE_ERROR`]: crate::constants::RANGE_ERROR

use core::fmt;

use thiserror_no_std::Error;

use crate::constants::RANGE_ERROR;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// The physical quantity an input value represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantity {
    /// Thermocouple EMF in millivolts
    Millivolts,
    /// Temperature in degrees Celsius
    Celsius,
    /// Temperature in degrees Fahrenheit
    Fahrenheit,
}

impl Quantity {
    /// Unit symbol used in messages
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Millivolts => "mV",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Conversion errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConversionError {
    /// Input outside the domain of the lookup
    #[error("Value {value}{quantity} outside range [{min}, {max}]")]
    OutOfRange {
        /// What the rejected value measures
        quantity: Quantity,
        /// The rejected input
        value: f32,
        /// Lower bound of the domain (inclusive)
        min: f32,
        /// Upper bound of the domain (inclusive)
        max: f32,
    },

    /// Input makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

impl ConversionError {
    /// Sentinel the unchecked API returns in place of this error
    pub const fn sentinel(&self) -> f64 {
        RANGE_ERROR
    }

    /// Quantity that was rejected, if known
    pub const fn quantity(&self) -> Option<Quantity> {
        match self {
            Self::OutOfRange { quantity, .. } => Some(*quantity),
            Self::InvalidValue => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Quantity {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.symbol())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { quantity, value, min, max } =>
                defmt::write!(fmt, "Value {}{} outside [{}, {}]", value, quantity, min, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
