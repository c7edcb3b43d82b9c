//! Checked API Example
//!
//! The sentinel API folds every failure into one value. The `try_*` methods
//! say which input was rejected and why.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_checked_api
//! ```

use typeb_core::{ConversionError, Quantity, TypeB, RANGE_ERROR};

fn describe(result: Result<f64, ConversionError>) -> String {
    match result {
        Ok(value) => format!("ok: {:.2}", value),
        Err(ConversionError::OutOfRange { quantity: Quantity::Millivolts, value, .. }) => {
            format!("thermocouple reading {} mV rejected (open circuit or too cold?)", value)
        }
        Err(ConversionError::OutOfRange { quantity, value, min, max }) => {
            format!("ambient {}{} outside [{}, {}]", value, quantity, min, max)
        }
        Err(ConversionError::InvalidValue) => "not a number".to_string(),
    }
}

fn main() {
    println!("Type B Checked API Example");
    println!("==========================\n");

    let tc = TypeB::new();

    let cases: [(f32, f32); 5] = [
        (4.834, 25.0),   // normal
        (0.05, 25.0),    // reading too low
        (4.834, -20.0),  // ambient below the direct model
        (13.8, 250.0),   // compensated sum overflows 13.820 mV
        (f32::NAN, 25.0),
    ];

    for (mv, ambient_c) in cases {
        let sentinel = tc.temperature_celsius_compensated(mv, ambient_c);
        let checked = tc.try_temperature_celsius_compensated(mv, ambient_c);

        println!("reading {:>6} mV, ambient {:>6}°C", mv, ambient_c);
        println!(
            "  sentinel: {}",
            if sentinel == RANGE_ERROR { "RANGE_ERROR".to_string() } else { format!("{:.2}", sentinel) }
        );
        println!("  checked:  {}\n", describe(checked));
    }

    // Fahrenheit compensation is where the two APIs visibly differ
    let sentinel_f = tc.temperature_fahrenheit_compensated(4.834, -40.0);
    let checked_f = tc.try_temperature_fahrenheit_compensated(4.834, -40.0);
    println!("Fahrenheit compensation with a -40°F ambient:");
    println!("  sentinel: {:.1} (RANGE_ERROR converted to °F, not RANGE_ERROR)", sentinel_f);
    println!("  checked:  {}", describe(checked_f));
}
