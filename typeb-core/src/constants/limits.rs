//! Domain Limits for Type B Conversions
//!
//! These bounds are the valid input domains of the two ITS-90 polynomial
//! models. They are `f32` because readings arrive as `f32` from the ADC path
//! and range checks compare in the input's own precision.

// ===== INVERSE LOOKUP (mV → °C) =====

/// Lowest thermocouple EMF the inverse polynomial accepts (mV).
///
/// Corresponds to roughly 250°C. Below this the Type B EMF curve is too flat
/// (and non-monotonic near 0-42°C) to invert.
///
/// Source: NIST ITS-90 Thermocouple Database, Type B inverse coefficients
pub const MV_MIN: f32 = 0.291;

/// Highest thermocouple EMF the inverse polynomial accepts (mV).
///
/// EMF at 1820°C, the upper end of the Type B reference function.
pub const MV_MAX: f32 = 13.820;

// ===== DIRECT LOOKUP (°C → mV) =====

/// Lowest temperature the direct polynomial accepts (°C).
pub const CELSIUS_MIN: f32 = 0.0;

/// Highest temperature the direct polynomial accepts (°C).
pub const CELSIUS_MAX: f32 = 1820.0;

// ===== ERROR SIGNALING =====

/// Sentinel returned by the unchecked API for any rejected input.
///
/// Far outside every output domain (-99999°C / mV), so a caller can compare
/// for equality before trusting a result.
pub const RANGE_ERROR: f64 = -99999.0;
