//! Cold-Junction Compensation Example
//!
//! A thermocouple only measures the difference between its two junctions.
//! When the terminal block warms up, the raw reading understates the tip
//! temperature. This example shows how much compensation adds back.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_cold_junction
//! ```

use typeb_core::{celsius_to_fahrenheit, TypeB};

fn main() {
    println!("Type B Cold-Junction Compensation Example");
    println!("=========================================\n");

    let tc = TypeB::new();

    // Furnace tip held at 1200°C; the terminal block heats up over time
    let tip_c = 1200.0_f32;
    let tip_mv = tc.millivolts_from_celsius(tip_c);
    println!("Tip at {}°C produces {:.4} mV against a 0°C reference\n", tip_c, tip_mv);

    println!(
        "{:>10} | {:>10} | {:>12} | {:>12} | {:>8}",
        "ambient °C", "reading mV", "absolute °C", "compensated", "error"
    );
    println!("{}", "-".repeat(64));

    for ambient_c in [0.0_f32, 25.0, 50.0, 100.0, 200.0, 400.0] {
        let ambient_mv = tc.millivolts_from_celsius(ambient_c);
        let reading = (tip_mv - ambient_mv) as f32;

        let absolute = tc.temperature_celsius(reading);
        let compensated = tc.temperature_celsius_compensated(reading, ambient_c);

        println!(
            "{:>10.1} | {:>10.4} | {:>12.2} | {:>12.2} | {:>8.2}",
            ambient_c,
            reading,
            absolute,
            compensated,
            f64::from(tip_c) - absolute
        );
    }

    // Same thing with the ambient sensor reporting Fahrenheit
    let ambient_f = 212.0_f32;
    let reading = (tip_mv - tc.millivolts_from_fahrenheit(ambient_f)) as f32;
    let tip_f = tc.temperature_fahrenheit_compensated(reading, ambient_f);
    println!(
        "\nAmbient {}°F: compensated tip {:.2}°F (expected {:.2}°F)",
        ambient_f,
        tip_f,
        celsius_to_fahrenheit(f64::from(tip_c))
    );

    println!("\nType B output is tiny near room temperature, so small ambients barely matter;");
    println!("a hot terminal block does.");
}
