//! ITS-90 Type B thermocouple conversion
//!
//! Turns a Type B thermocouple EMF into a temperature, with optional
//! cold-junction compensation, and turns a temperature into the EMF it
//! produces.
//!
//! Key constraints:
//! - `no_std`, no heap allocation
//! - Bounded time: one range check and one 9-term polynomial per lookup
//! - Float inputs (`f32` from the ADC path), `f64` evaluation
//!
//! ```no_run
//! use typeb_core::{TypeB, RANGE_ERROR};
//!
//! let tc = TypeB::new();
//!
//! let celsius = tc.temperature_celsius_compensated(4.834, 25.0);
//! if celsius == RANGE_ERROR {
//!     // Reading or ambient outside the Type B domain
//! }
//!
//! match tc.try_temperature_fahrenheit(4.834) {
//!     Ok(_fahrenheit) => {}, // Good to go
//!     Err(_e) => {},         // Handle invalid reading
//! }
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod errors;
pub mod polynomial;
pub mod thermocouple;
pub mod units;

// Public API
pub use constants::RANGE_ERROR;
pub use errors::{ConversionError, ConversionResult, Quantity};
pub use polynomial::{PiecewisePolynomial, Selection, SubRange};
pub use thermocouple::TypeB;
pub use units::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
