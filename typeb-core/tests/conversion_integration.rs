//! Integration tests for Type B conversions
//!
//! Exercises the public API end to end:
//! - Direct and inverse models against NIST reference tables
//! - Round trips through both models
//! - Sub-range tie-breaks on the shared boundaries
//! - Sentinel and checked error reporting
//! - Fahrenheit wrappers and their historical quirks

#[macro_use]
mod common;

use typeb_core::{
    celsius_to_fahrenheit, fahrenheit_to_celsius,
    constants::its90::{DIRECT_COEFFICIENTS, HIGH, LOW},
    thermocouple::{DIRECT, INVERSE},
    ConversionError, Quantity, TypeB, RANGE_ERROR,
};

use common::{
    NIST_REFERENCE_POINTS, ROUND_TRIP_TEMPERATURES_C, ROUND_TRIP_TOLERANCE_C, TABLE_TOLERANCE_MV,
};

#[test]
fn test_direct_model_matches_nist_table() {
    let tc = TypeB::new();

    for &(celsius, mv) in NIST_REFERENCE_POINTS {
        assert_within_tolerance!(tc.millivolts_from_celsius(celsius), mv, TABLE_TOLERANCE_MV);
    }
}

#[test]
fn test_inverse_model_matches_nist_table() {
    let tc = TypeB::new();

    for &(celsius, mv) in NIST_REFERENCE_POINTS {
        assert_within_tolerance!(
            tc.temperature_celsius(mv as f32),
            f64::from(celsius),
            ROUND_TRIP_TOLERANCE_C
        );
    }
}

#[test]
fn test_round_trip_through_both_models() {
    let tc = TypeB::new();

    for &celsius in ROUND_TRIP_TEMPERATURES_C {
        let mv = tc.millivolts_from_celsius(celsius);
        assert_ne!(mv, RANGE_ERROR, "{}°C has no EMF", celsius);

        let back = tc.temperature_celsius(mv as f32);
        assert_ne!(back, RANGE_ERROR, "{} mV rejected", mv);
        assert_within_tolerance!(back, f64::from(celsius), ROUND_TRIP_TOLERANCE_C);
    }
}

#[test]
fn test_domain_boundaries() {
    let tc = TypeB::new();

    assert!(tc.in_range_millivolts(0.291));
    assert!(tc.in_range_millivolts(13.820));
    assert!(!tc.in_range_millivolts(0.290));
    assert!(!tc.in_range_millivolts(13.821));

    assert!(tc.in_range_celsius(0.0));
    assert!(tc.in_range_celsius(1820.0));
    assert!(!tc.in_range_celsius(-0.1));
    assert!(!tc.in_range_celsius(1820.1));

    // Edges of the domain still evaluate
    assert_ne!(tc.temperature_celsius(0.291), RANGE_ERROR);
    assert_ne!(tc.temperature_celsius(13.820), RANGE_ERROR);
    assert_ne!(tc.millivolts_from_celsius(1820.0), RANGE_ERROR);
}

#[test]
fn test_boundary_tie_breaks_differ() {
    let tc = TypeB::new();

    // Inverse: last containing range wins on the shared 2.431 mV boundary
    assert_eq!(tc.inverse_subrange(2.431), Some(HIGH));
    assert_eq!(
        tc.temperature_celsius(2.431),
        INVERSE.evaluate(HIGH, 2.431).unwrap()
    );

    // Direct: first containing range wins on the shared 630.615°C boundary
    assert_eq!(tc.direct_subrange(630.615), Some(LOW));
    assert_eq!(
        tc.millivolts_from_celsius(630.615),
        DIRECT.evaluate(LOW, 630.615).unwrap()
    );
}

#[test]
fn test_subrange_introspection() {
    let tc = TypeB::new();

    assert_eq!(tc.inverse_subrange(1.0), Some(LOW));
    assert_eq!(tc.inverse_subrange(10.0), Some(HIGH));
    assert_eq!(tc.inverse_subrange(0.1), None);

    assert_eq!(tc.direct_subrange(25.0), Some(LOW));
    assert_eq!(tc.direct_subrange(1200.0), Some(HIGH));
    assert_eq!(tc.direct_subrange(-5.0), None);
}

#[test]
fn test_out_of_range_returns_sentinel() {
    let tc = TypeB::new();

    assert_eq!(tc.temperature_celsius(0.0), RANGE_ERROR);
    assert_eq!(tc.millivolts_from_celsius(-5.0), RANGE_ERROR);
    assert_eq!(tc.millivolts_from_celsius(1900.0), RANGE_ERROR);
    assert_eq!(tc.temperature_fahrenheit(20.0), RANGE_ERROR);
    assert_eq!(tc.millivolts_from_fahrenheit(4000.0), RANGE_ERROR);
}

#[test]
fn test_zero_celsius_reference_point() {
    let tc = TypeB::new();

    // Every higher-degree term vanishes at 0°C
    assert_eq!(tc.millivolts_from_celsius(0.0), DIRECT_COEFFICIENTS[0][LOW]);
    assert_eq!(tc.millivolts_from_fahrenheit(32.0), DIRECT_COEFFICIENTS[0][LOW]);
}

#[test]
fn test_cold_junction_compensation() {
    let tc = TypeB::new();

    // Cold junction at 0°C adds nothing
    assert_eq!(
        tc.temperature_celsius_compensated(4.834, 0.0),
        tc.temperature_celsius(4.834)
    );

    // A hot terminal block hides part of the EMF; compensation puts it back
    let ambient_c = 400.0;
    let tip_c = 1000.0;
    let reading = tc.millivolts_from_celsius(tip_c) - tc.millivolts_from_celsius(ambient_c);
    let compensated = tc.temperature_celsius_compensated(reading as f32, ambient_c);
    assert_within_tolerance!(compensated, f64::from(tip_c), ROUND_TRIP_TOLERANCE_C);

    let checked = tc
        .try_temperature_celsius_compensated(reading as f32, ambient_c)
        .unwrap();
    assert_eq!(checked, compensated);
}

#[test]
fn test_fahrenheit_wrappers() {
    let tc = TypeB::new();

    let celsius = tc.temperature_celsius(6.786);
    assert_eq!(tc.temperature_fahrenheit(6.786), celsius_to_fahrenheit(celsius));

    // 77°F is 25°C
    let ambient_c = fahrenheit_to_celsius(77.0) as f32;
    assert_eq!(
        tc.temperature_fahrenheit_compensated(6.786, 77.0),
        celsius_to_fahrenheit(tc.temperature_celsius_compensated(6.786, ambient_c))
    );
    assert_eq!(
        tc.millivolts_from_fahrenheit(77.0),
        tc.millivolts_from_celsius(ambient_c)
    );
}

#[test]
fn test_sentinel_propagation_quirks() {
    let tc = TypeB::new();

    // Absolute °F passes the sentinel through untouched
    assert_eq!(tc.temperature_fahrenheit(0.0), RANGE_ERROR);

    // Compensated °C: the sentinel is added to the reading, which then fails
    assert_eq!(tc.temperature_celsius_compensated(4.0, 2000.0), RANGE_ERROR);

    // Compensated °F converts the sentinel as if it were a temperature
    let converted = tc.temperature_fahrenheit_compensated(4.0, 5000.0);
    assert_ne!(converted, RANGE_ERROR);
    assert_eq!(converted, celsius_to_fahrenheit(RANGE_ERROR));
}

#[test]
fn test_checked_api_propagates_errors() {
    let tc = TypeB::new();

    assert_eq!(
        tc.try_temperature_celsius(0.0),
        Err(ConversionError::OutOfRange {
            quantity: Quantity::Millivolts,
            value: 0.0,
            min: 0.291,
            max: 13.820,
        })
    );

    assert_eq!(
        tc.try_temperature_celsius_compensated(4.0, 2000.0),
        Err(ConversionError::OutOfRange {
            quantity: Quantity::Celsius,
            value: 2000.0,
            min: 0.0,
            max: 1820.0,
        })
    );

    assert_eq!(
        tc.try_temperature_fahrenheit_compensated(4.0, 5000.0),
        Err(ConversionError::OutOfRange {
            quantity: Quantity::Fahrenheit,
            value: 5000.0,
            min: 32.0,
            max: 3308.0,
        })
    );

    assert_eq!(
        tc.try_temperature_fahrenheit(f32::NAN),
        Err(ConversionError::InvalidValue)
    );
}

#[test]
fn test_checked_and_sentinel_agree_on_valid_input() {
    let tc = TypeB::new();

    for mv in [0.291_f32, 0.5, 1.0, 2.431, 5.0, 9.0, 13.820] {
        assert_eq!(tc.try_temperature_celsius(mv), Ok(tc.temperature_celsius(mv)));
        assert_eq!(tc.try_temperature_fahrenheit(mv), Ok(tc.temperature_fahrenheit(mv)));
    }

    for celsius in [0.0_f32, 25.0, 630.615, 1000.0, 1820.0] {
        assert_eq!(
            tc.try_millivolts_from_celsius(celsius),
            Ok(tc.millivolts_from_celsius(celsius))
        );
    }
}

#[test]
fn test_shared_converter_across_threads() {
    let tc = TypeB::new();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || tc.temperature_celsius(1.0 + i as f32))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result, tc.temperature_celsius(1.0 + i as f32));
    }
}
