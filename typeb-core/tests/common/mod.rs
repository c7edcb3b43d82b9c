//! Common test utilities for integration tests
//!
//! This module provides:
//! - ITS-90 Type B reference points taken from the NIST tables
//! - Sample temperatures spanning both direct sub-ranges
//! - Assertion helpers for tolerance checks

#![allow(dead_code)]

/// (°C, mV) pairs from the NIST ITS-90 Type B table, reference junction at 0°C
pub const NIST_REFERENCE_POINTS: &[(f32, f64)] = &[
    (300.0, 0.431),
    (400.0, 0.787),
    (500.0, 1.242),
    (600.0, 1.792),
    (700.0, 2.431),
    (800.0, 3.154),
    (1000.0, 4.834),
    (1200.0, 6.786),
    (1400.0, 8.956),
    (1600.0, 11.263),
    (1800.0, 13.591),
];

/// Temperatures whose EMF lies inside the inverse model's domain
pub const ROUND_TRIP_TEMPERATURES_C: &[f32] = &[
    260.0, 300.0, 450.0, 630.0, 630.615, 631.0, 700.0, 850.0, 1000.0, 1250.0, 1500.0, 1800.0,
];

/// Round trip tolerance between the independently fitted models (°C)
pub const ROUND_TRIP_TOLERANCE_C: f64 = 1.0;

/// Tolerance against the 3-decimal NIST table (mV)
pub const TABLE_TOLERANCE_MV: f64 = 0.001;

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let actual = $actual;
        let expected = $expected;
        let diff = (actual - expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                actual, $tolerance, expected, diff
            );
        }
    };
}
