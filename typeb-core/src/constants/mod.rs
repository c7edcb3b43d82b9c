//! Constants for Type B Conversions
//!
//! All numeric values used by the converter live here, grouped by purpose:
//! - **ITS-90**: polynomial coefficients and sub-range bounds
//! - **Limits**: valid input domains and the error sentinel
//!
//! Tables are plain `const` data with no initialization order and no interior
//! mutability, so they can be shared freely between threads and interrupts.

/// ITS-90 Type B coefficient and sub-range tables.
pub mod its90;

/// Input domains and the range error sentinel.
pub mod limits;

pub use limits::{CELSIUS_MAX, CELSIUS_MIN, MV_MAX, MV_MIN, RANGE_ERROR};
