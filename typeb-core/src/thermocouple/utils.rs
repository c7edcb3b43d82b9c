//! Shared input checks for thermocouple lookups
//!
//! Every lookup validates its input the same way before touching a table:
//!
//! 1. Reject NaN and infinities (`InvalidValue`)
//! 2. Reject values outside the closed domain `[min, max]` (`OutOfRange`)
//!
//! Both are pure functions, safe to call from interrupt context.

use crate::errors::{ConversionError, ConversionResult, Quantity};

/// Closed-interval membership, the predicate behind every `in_range_*` check
#[inline]
pub fn in_range(value: f32, min: f32, max: f32) -> bool {
    value >= min && value <= max
}

/// Check that a value is finite and within `[min, max]`, returning it if so
pub fn check_range(quantity: Quantity, value: f32, min: f32, max: f32) -> ConversionResult<f32> {
    if !value.is_finite() {
        log_warn!("rejected non-finite {} input", quantity.symbol());
        return Err(ConversionError::InvalidValue);
    }

    if in_range(value, min, max) {
        Ok(value)
    } else {
        log_warn!(
            "{}{} outside [{}, {}]",
            value, quantity.symbol(), min, max
        );
        Err(ConversionError::OutOfRange {
            quantity,
            value,
            min,
            max,
        })
    }
}
