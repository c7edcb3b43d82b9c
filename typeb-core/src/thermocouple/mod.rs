//! Thermocouple Converters
//!
//! ## Overview
//!
//! A thermocouple produces an EMF proportional to the temperature difference
//! between its measuring (hot) junction and its reference (cold) junction.
//! Turning that EMF into a temperature takes two lookups:
//!
//! ```text
//!   reading (mV) ──┐
//!                  ├─► + ──► inverse model ──► tip temperature
//!   ambient (°C) ──► direct model (mV) ┘
//! ```
//!
//! 1. **Direct model** (°C → mV): what EMF would the cold junction alone
//!    produce at the ambient temperature?
//! 2. **Inverse model** (mV → °C): what tip temperature explains the reading
//!    plus that EMF?
//!
//! Skip step 1 and you get the absolute temperature, which assumes the cold
//! junction sits at 0°C. For Type B that error is small near room temperature
//! (the EMF is only ~-2.5 µV at 25°C) but grows quickly if the terminal block
//! gets hot.
//!
//! ## Type B Characteristics
//!
//! - Pt-30%Rh / Pt-6%Rh, usable up to 1820°C
//! - Very low output below ~50°C and non-monotonic below ~42°C, which is why
//!   the inverse model only accepts readings from 0.291 mV (≈250°C) upwards
//!
//! ## Usage Example
//!
//! ```rust
//! use typeb_core::{TypeB, RANGE_ERROR};
//!
//! let tc = TypeB::new();
//!
//! // Absolute temperature, cold junction assumed at 0°C
//! let tip = tc.temperature_celsius(4.834);
//! assert!((tip - 1000.0).abs() < 0.1);
//!
//! // Compensated with a 25°C terminal block
//! let tip = tc.temperature_celsius_compensated(4.834, 25.0);
//! assert!(tip != RANGE_ERROR);
//!
//! // Checked API tells you what went wrong
//! assert!(tc.try_temperature_celsius(0.1).is_err());
//! ```

mod type_b;
mod utils;

pub use type_b::{TypeB, DIRECT, INVERSE};
