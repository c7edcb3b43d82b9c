//! Celsius / Fahrenheit conversion
//!
//! The converter works in Celsius internally; Fahrenheit inputs are
//! normalized to Celsius before a lookup and results are converted back on
//! the way out.

/// °C → °F
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// °F → °C
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
