//! Absolute Temperature Example
//!
//! The simplest use: turn a Type B reading into a tip temperature, assuming
//! the cold junction sits at 0°C.
//!
//! ## What You'll Learn
//!
//! - Creating a converter
//! - Checking the domain before trusting a result
//! - Reading results in Celsius and Fahrenheit
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_absolute_temperature
//! ```

use typeb_core::{constants::{MV_MAX, MV_MIN}, TypeB, RANGE_ERROR};

fn main() {
    println!("Type B Absolute Temperature Example");
    println!("===================================\n");

    let tc = TypeB::new();

    println!("Valid reading range: {} mV to {} mV", MV_MIN, MV_MAX);
    let (f_min, f_max) = tc.fahrenheit_limits();
    println!("Valid ambient range: {}°F to {}°F\n", f_min, f_max);

    // Readings as they might come off an amplified ADC channel
    let readings = [0.1_f32, 0.291, 1.242, 2.431, 4.834, 10.099, 13.82, 14.5];

    println!("{:>10} | {:>12} | {:>12} | {}", "mV", "°C", "°F", "sub-range");
    println!("{}", "-".repeat(54));

    for mv in readings {
        let celsius = tc.temperature_celsius(mv);
        if celsius == RANGE_ERROR {
            println!("{:>10.3} | {:>12} | {:>12} | -", mv, "out of range", "");
            continue;
        }

        let fahrenheit = tc.temperature_fahrenheit(mv);
        let range = match tc.inverse_subrange(mv) {
            Some(0) => "low",
            Some(_) => "high",
            None => "-",
        };
        println!("{:>10.3} | {:>12.2} | {:>12.2} | {}", mv, celsius, fahrenheit, range);
    }

    println!("\nNote: 2.431 mV sits on the boundary and is evaluated in the high sub-range.");
}
