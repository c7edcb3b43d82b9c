//! Type B thermocouple converter
//!
//! Converts between Type B EMF and temperature using the ITS-90 reference
//! polynomials:
//! - Inverse model: 0.291 to 13.820 mV → °C (≈250 to 1820°C)
//! - Direct model: 0 to 1820°C → mV, used for cold-junction compensation
//!
//! Two API flavors share the same tables:
//! - Unchecked methods return `f64` and report failures as [`RANGE_ERROR`]
//! - `try_*` methods return [`ConversionResult`] and propagate every failure

use crate::{
    constants::{
        its90::{
            DIRECT_COEFFICIENTS, DIRECT_RANGES, INVERSE_COEFFICIENTS, INVERSE_RANGES, SUB_RANGES,
            TERMS,
        },
        limits::{CELSIUS_MAX, CELSIUS_MIN, MV_MAX, MV_MIN, RANGE_ERROR},
    },
    errors::{ConversionError, ConversionResult, Quantity},
    polynomial::{PiecewisePolynomial, Selection},
    units::{celsius_to_fahrenheit, fahrenheit_to_celsius},
};

use super::utils;

/// Inverse model: mV → °C. On the shared 2.431 mV boundary the high range wins.
pub const INVERSE: PiecewisePolynomial<TERMS, SUB_RANGES> = PiecewisePolynomial::new(
    &INVERSE_COEFFICIENTS,
    &INVERSE_RANGES,
    Selection::LastContaining,
);

/// Direct model: °C → mV. On the shared 630.615°C boundary the low range wins.
pub const DIRECT: PiecewisePolynomial<TERMS, SUB_RANGES> = PiecewisePolynomial::new(
    &DIRECT_COEFFICIENTS,
    &DIRECT_RANGES,
    Selection::FirstContainingElseLast,
);

/// Type B thermocouple converter
///
/// Holds only the Fahrenheit domain limits, derived from the Celsius limits
/// when the converter is built. Every method takes `&self` and is pure, so one
/// instance can be shared between tasks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeB {
    /// Lowest accepted ambient temperature in °F
    f_min: f32,

    /// Highest accepted ambient temperature in °F
    f_max: f32,
}

impl Default for TypeB {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeB {
    /// Create a converter
    pub fn new() -> Self {
        Self {
            f_max: celsius_to_fahrenheit(f64::from(CELSIUS_MAX)) as f32,
            f_min: celsius_to_fahrenheit(f64::from(CELSIUS_MIN)) as f32,
        }
    }

    /// Accepted ambient range in °F as `(min, max)`
    pub fn fahrenheit_limits(&self) -> (f32, f32) {
        (self.f_min, self.f_max)
    }

    // ----- domain checks -----

    /// Is `mv` inside the inverse model's domain?
    pub fn in_range_millivolts(&self, mv: f32) -> bool {
        utils::in_range(mv, MV_MIN, MV_MAX)
    }

    /// Is `celsius` inside the direct model's domain?
    pub fn in_range_celsius(&self, celsius: f32) -> bool {
        utils::in_range(celsius, CELSIUS_MIN, CELSIUS_MAX)
    }

    /// Is `fahrenheit` inside the direct model's domain?
    pub fn in_range_fahrenheit(&self, fahrenheit: f32) -> bool {
        utils::in_range(fahrenheit, self.f_min, self.f_max)
    }

    /// Inverse sub-range `mv` would be evaluated in, `None` outside the domain
    pub fn inverse_subrange(&self, mv: f32) -> Option<usize> {
        if !self.in_range_millivolts(mv) {
            return None;
        }
        INVERSE.select(mv)
    }

    /// Direct sub-range `celsius` would be evaluated in, `None` outside the domain
    pub fn direct_subrange(&self, celsius: f32) -> Option<usize> {
        if !self.in_range_celsius(celsius) {
            return None;
        }
        DIRECT.select(celsius)
    }

    // ----- checked API -----

    /// Absolute tip temperature in °C for a reading of `mv`
    pub fn try_temperature_celsius(&self, mv: f32) -> ConversionResult<f64> {
        let mv = utils::check_range(Quantity::Millivolts, mv, MV_MIN, MV_MAX)?;
        INVERSE
            .select_and_evaluate(mv)
            .ok_or(ConversionError::OutOfRange {
                quantity: Quantity::Millivolts,
                value: mv,
                min: MV_MIN,
                max: MV_MAX,
            })
    }

    /// Cold-junction compensated tip temperature in °C
    ///
    /// The EMF the cold junction would produce at `ambient_c` is added to the
    /// reading before inverting. An out-of-range ambient is reported as such
    /// rather than folded into the reading.
    pub fn try_temperature_celsius_compensated(
        &self,
        mv: f32,
        ambient_c: f32,
    ) -> ConversionResult<f64> {
        let mv_ambient = self.try_millivolts_from_celsius(ambient_c)?;
        self.try_temperature_celsius(mv + mv_ambient as f32)
    }

    /// Absolute tip temperature in °F
    pub fn try_temperature_fahrenheit(&self, mv: f32) -> ConversionResult<f64> {
        self.try_temperature_celsius(mv).map(celsius_to_fahrenheit)
    }

    /// Cold-junction compensated tip temperature in °F, ambient given in °F
    pub fn try_temperature_fahrenheit_compensated(
        &self,
        mv: f32,
        ambient_f: f32,
    ) -> ConversionResult<f64> {
        let ambient_f = utils::check_range(Quantity::Fahrenheit, ambient_f, self.f_min, self.f_max)?;
        let ambient_c = fahrenheit_to_celsius(f64::from(ambient_f)) as f32;
        self.try_temperature_celsius_compensated(mv, ambient_c)
            .map(celsius_to_fahrenheit)
    }

    /// EMF in mV a junction at `celsius` produces (reference junction at 0°C)
    pub fn try_millivolts_from_celsius(&self, celsius: f32) -> ConversionResult<f64> {
        let celsius = utils::check_range(Quantity::Celsius, celsius, CELSIUS_MIN, CELSIUS_MAX)?;
        DIRECT
            .select_and_evaluate(celsius)
            .ok_or(ConversionError::OutOfRange {
                quantity: Quantity::Celsius,
                value: celsius,
                min: CELSIUS_MIN,
                max: CELSIUS_MAX,
            })
    }

    /// EMF in mV a junction at `fahrenheit` produces
    pub fn try_millivolts_from_fahrenheit(&self, fahrenheit: f32) -> ConversionResult<f64> {
        let fahrenheit = utils::check_range(Quantity::Fahrenheit, fahrenheit, self.f_min, self.f_max)?;
        self.try_millivolts_from_celsius(fahrenheit_to_celsius(f64::from(fahrenheit)) as f32)
    }

    // ----- unchecked API -----
    //
    // Same results as the checked API for valid input, RANGE_ERROR otherwise.
    // The compensated variants keep their historical quirks, see each method.

    /// Absolute tip temperature in °C, or [`RANGE_ERROR`]
    pub fn temperature_celsius(&self, mv: f32) -> f64 {
        self.try_temperature_celsius(mv).unwrap_or(RANGE_ERROR)
    }

    /// Compensated tip temperature in °C, or [`RANGE_ERROR`]
    ///
    /// The ambient lookup result is not checked: an out-of-range ambient adds
    /// [`RANGE_ERROR`] to the reading, which then fails the millivolt check
    /// and yields [`RANGE_ERROR`] again. Use
    /// [`try_temperature_celsius_compensated`](Self::try_temperature_celsius_compensated)
    /// to learn which input was rejected.
    pub fn temperature_celsius_compensated(&self, mv: f32, ambient_c: f32) -> f64 {
        let mv_ambient = self.millivolts_from_celsius(ambient_c);
        self.temperature_celsius(mv + mv_ambient as f32)
    }

    /// Absolute tip temperature in °F, or [`RANGE_ERROR`] unconverted
    pub fn temperature_fahrenheit(&self, mv: f32) -> f64 {
        let celsius = self.temperature_celsius(mv);
        if celsius == RANGE_ERROR {
            return RANGE_ERROR;
        }
        celsius_to_fahrenheit(celsius)
    }

    /// Compensated tip temperature in °F, ambient given in °F
    ///
    /// Unlike [`temperature_fahrenheit`](Self::temperature_fahrenheit) the
    /// sentinel is not checked before conversion, so a failure comes back as
    /// `celsius_to_fahrenheit(RANGE_ERROR)` rather than [`RANGE_ERROR`].
    pub fn temperature_fahrenheit_compensated(&self, mv: f32, ambient_f: f32) -> f64 {
        let ambient_c = fahrenheit_to_celsius(f64::from(ambient_f)) as f32;
        celsius_to_fahrenheit(self.temperature_celsius_compensated(mv, ambient_c))
    }

    /// EMF in mV for a junction at `celsius`, or [`RANGE_ERROR`]
    pub fn millivolts_from_celsius(&self, celsius: f32) -> f64 {
        self.try_millivolts_from_celsius(celsius).unwrap_or(RANGE_ERROR)
    }

    /// EMF in mV for a junction at `fahrenheit`, or [`RANGE_ERROR`]
    pub fn millivolts_from_fahrenheit(&self, fahrenheit: f32) -> f64 {
        self.try_millivolts_from_fahrenheit(fahrenheit).unwrap_or(RANGE_ERROR)
    }
}
