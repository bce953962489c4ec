use approx::assert_relative_eq;
use pipe_flow_toolkit::conversion::{
    self, convert, convert_for_display, convert_psi_kpa, ConversionError, CONVERSION_ERROR,
    UNSUPPORTED_CONVERSION,
};
use pipe_flow_toolkit::quantity::QuantityKind;

#[test]
fn length_factors() {
    assert_relative_eq!(convert(QuantityKind::Length, 1.0, "in", "mm").unwrap(), 25.4, max_relative = 1e-12);
    assert_relative_eq!(convert(QuantityKind::Length, 1.0, "mi", "km").unwrap(), 1.609344, max_relative = 1e-12);
    assert_relative_eq!(convert(QuantityKind::Length, 3.0, "ft", "yd").unwrap(), 1.0, max_relative = 1e-12);
}

#[test]
fn pressure_factors() {
    assert_relative_eq!(convert(QuantityKind::Pressure, 1.0, "bar", "kPa").unwrap(), 100.0, max_relative = 1e-12);
    assert_relative_eq!(convert(QuantityKind::Pressure, 1.0, "atm", "Pa").unwrap(), 101_325.0, max_relative = 1e-9);
    assert_relative_eq!(convert(QuantityKind::Pressure, 760.0, "mmHg", "atm").unwrap(), 1.0, max_relative = 1e-4);
}

#[test]
fn flow_and_viscosity_factors() {
    assert_relative_eq!(convert(QuantityKind::VolumeFlow, 1.0, "m3/s", "l/s").unwrap(), 1000.0, max_relative = 1e-12);
    assert_relative_eq!(convert(QuantityKind::VolumeFlow, 1.0, "m3/h", "l/min").unwrap(), 1000.0 / 60.0, max_relative = 1e-12);
    assert_relative_eq!(convert(QuantityKind::Viscosity, 1.0, "cP", "Pa·s").unwrap(), 0.001, max_relative = 1e-12);
    assert_relative_eq!(convert(QuantityKind::Density, 1.0, "g/cm3", "kg/m3").unwrap(), 1000.0, max_relative = 1e-12);
}

#[test]
fn temperature_offsets() {
    assert_relative_eq!(convert(QuantityKind::Temperature, 100.0, "C", "F").unwrap(), 212.0, max_relative = 1e-12);
    assert_relative_eq!(convert(QuantityKind::Temperature, 0.0, "C", "K").unwrap(), 273.15, max_relative = 1e-12);
    assert_relative_eq!(convert(QuantityKind::Temperature, -40.0, "F", "C").unwrap(), -40.0, max_relative = 1e-12);
}

#[test]
fn unit_names_are_case_insensitive() {
    assert_relative_eq!(convert(QuantityKind::Length, 2.0, " M ", "CM").unwrap(), 200.0, max_relative = 1e-12);
    assert_relative_eq!(convert(QuantityKind::Length, 1.0, "inch", "in").unwrap(), 1.0);
}

#[test]
fn unknown_unit_is_an_error() {
    let err = convert(QuantityKind::Length, 1.0, "furlong", "m").unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownUnit {
            kind: QuantityKind::Length,
            unit: "furlong".into()
        }
    );
    // 다른 물리량의 단위는 받지 않는다.
    assert!(convert(QuantityKind::Pressure, 1.0, "m", "kPa").is_err());
}

#[test]
fn display_uses_four_decimals_or_sentinel() {
    assert_eq!(convert_for_display(QuantityKind::Length, 1.0, "mm", "cm"), "0.1000");
    assert_eq!(convert_for_display(QuantityKind::Length, 1.0, "mm", "parsec"), CONVERSION_ERROR);
    assert_eq!(convert_for_display(QuantityKind::Length, f64::NAN, "mm", "cm"), CONVERSION_ERROR);
    assert_eq!(convert_for_display(QuantityKind::Mass, f64::INFINITY, "kg", "lb"), CONVERSION_ERROR);
}

#[test]
fn psi_kpa_helper() {
    assert_eq!(convert_psi_kpa(1.0, "psi", "kPa"), "6.89");
    assert_eq!(convert_psi_kpa(6.89476, "kPa", "psi"), "1.00");
    assert_eq!(convert_psi_kpa(1.0, "bar", "kPa"), UNSUPPORTED_CONVERSION);
    assert_eq!(convert_psi_kpa(1.0, "PSI", "kPa"), UNSUPPORTED_CONVERSION);
}

#[test]
fn every_measure_has_at_least_two_units() {
    for kind in conversion::measures() {
        let units = conversion::possibilities(*kind);
        assert!(units.len() >= 2, "{kind}");
        let (from, to) = conversion::default_units(*kind);
        assert_eq!((from, to), (units[0], units[1]));
        // 모든 기호는 자기 자신으로 변환된다.
        for u in &units {
            assert_relative_eq!(convert(*kind, 3.5, u, u).unwrap(), 3.5, max_relative = 1e-12);
        }
    }
}
