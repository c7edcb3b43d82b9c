//! ITS-90 Reference Coefficients for Type B Thermocouples
//!
//! Both models are piecewise polynomials of degree 8 with two sub-ranges.
//! Tables are laid out `[degree][sub_range]`: row `i` holds the coefficient of
//! `x^i`, column 0 the low sub-range and column 1 the high sub-range.
//!
//! Source: NIST Monograph 175 / NIST ITS-90 Thermocouple Database

use crate::polynomial::SubRange;

/// Number of coefficients per sub-range (degree 0 through 8).
pub const TERMS: usize = 9;

/// Number of sub-ranges in each model.
pub const SUB_RANGES: usize = 2;

/// Index of the low sub-range column.
pub const LOW: usize = 0;

/// Index of the high sub-range column.
pub const HIGH: usize = 1;

// ===== INVERSE (mV → °C) =====

/// Inverse coefficients, given mV find °C.
///
/// Low: 0.291 to 2.431 mV (250 to 700°C), error ±0.03°C.
/// High: 2.431 to 13.820 mV (700 to 1820°C), error ±0.02°C.
pub const INVERSE_COEFFICIENTS: [[f64; SUB_RANGES]; TERMS] = [
    [ 9.8423321E+01,  2.1315071E+02],
    [ 6.9971500E+02,  2.8510504E+02],
    [-8.4765304E+02, -5.2742887E+01],
    [ 1.0052644E+03,  9.9160804E+00],
    [-8.3345952E+02, -1.2965303E+00],
    [ 4.5508542E+02,  1.1195870E-01],
    [-1.5523037E+02, -6.0625199E-03],
    [ 2.9886750E+01,  1.8661696E-04],
    [-2.4742860E+00, -2.4878585E-06],
];

/// Millivolt bounds of each inverse sub-range. Shared boundary at 2.431 mV.
pub const INVERSE_RANGES: [SubRange; SUB_RANGES] = [
    SubRange::new(0.291, 2.431),
    SubRange::new(2.431, 13.820),
];

// ===== DIRECT (°C → mV) =====

/// Direct coefficients, given °C find mV.
///
/// The low sub-range has only seven non-zero terms; the trailing zeros keep
/// both columns the same length.
pub const DIRECT_COEFFICIENTS: [[f64; SUB_RANGES]; TERMS] = [
    [ 0.000000000000E+00, -0.389381686210E+01],
    [-0.246508183460E-03,  0.285717474700E-01],
    [ 0.590404211710E-05, -0.848851047850E-04],
    [-0.132579316360E-08,  0.157852801640E-06],
    [ 0.156682919010E-11, -0.168353448640E-09],
    [-0.169445292400E-14,  0.111097940130E-12],
    [ 0.629903470940E-18, -0.445154310330E-16],
    [ 0.000000000000E+00,  0.989756408210E-20],
    [ 0.000000000000E+00, -0.937913302890E-24],
];

/// Celsius bounds of each direct sub-range. Shared boundary at 630.615°C.
pub const DIRECT_RANGES: [SubRange; SUB_RANGES] = [
    SubRange::new(0.000, 630.615),
    SubRange::new(630.615, 1820.000),
];
