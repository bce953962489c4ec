use crate::quantity::QuantityKind;
use crate::units::pressure::KPA_PER_PSI;
use crate::units::{self, *};

/// 변환 결과 대신 표시하는 문자열.
pub const CONVERSION_ERROR: &str = "Conversion error";
/// [`convert_psi_kpa`]가 지원하지 않는 조합에 돌려주는 문자열.
pub const UNSUPPORTED_CONVERSION: &str = "Unsupported conversion";

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("unknown {kind} unit: {unit}")]
    UnknownUnit { kind: QuantityKind, unit: String },
}

/// 변환기가 지원하는 물리량 목록.
pub fn measures() -> &'static [QuantityKind] {
    &QuantityKind::ALL
}

/// 물리량에 속한 단위 기호를 표시 순서대로 반환한다.
pub fn possibilities(kind: QuantityKind) -> Vec<&'static str> {
    match kind {
        QuantityKind::Length => units::symbols::<LengthUnit>(),
        QuantityKind::Area => units::symbols::<AreaUnit>(),
        QuantityKind::Volume => units::symbols::<VolumeUnit>(),
        QuantityKind::VolumeFlow => units::symbols::<VolumeFlowUnit>(),
        QuantityKind::Pressure => units::symbols::<PressureUnit>(),
        QuantityKind::Velocity => units::symbols::<VelocityUnit>(),
        QuantityKind::Mass => units::symbols::<MassUnit>(),
        QuantityKind::Temperature => units::symbols::<TemperatureUnit>(),
        QuantityKind::Viscosity => units::symbols::<ViscosityUnit>(),
        QuantityKind::Density => units::symbols::<DensityUnit>(),
    }
}

/// 물리량을 고른 직후의 (입력, 출력) 단위. 목록의 첫 번째와 두 번째 단위다.
pub fn default_units(kind: QuantityKind) -> (&'static str, &'static str) {
    let units = possibilities(kind);
    (units[0], units[1])
}

/// 문자열로 전달된 단위명을 해석한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열은 대소문자를 구분하지 않으며 `m`, `in`, `kPa`, `m3/s`, `cP` 같은
/// 기호나 `inch`, `torr` 같은 별칭을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => convert_as::<LengthUnit>(kind, value, from, to),
        QuantityKind::Area => convert_as::<AreaUnit>(kind, value, from, to),
        QuantityKind::Volume => convert_as::<VolumeUnit>(kind, value, from, to),
        QuantityKind::VolumeFlow => convert_as::<VolumeFlowUnit>(kind, value, from, to),
        QuantityKind::Pressure => convert_as::<PressureUnit>(kind, value, from, to),
        QuantityKind::Velocity => convert_as::<VelocityUnit>(kind, value, from, to),
        QuantityKind::Mass => convert_as::<MassUnit>(kind, value, from, to),
        QuantityKind::Temperature => convert_as::<TemperatureUnit>(kind, value, from, to),
        QuantityKind::Viscosity => convert_as::<ViscosityUnit>(kind, value, from, to),
        QuantityKind::Density => convert_as::<DensityUnit>(kind, value, from, to),
    }
}

fn convert_as<U: Unit>(
    kind: QuantityKind,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let from = parse::<U>(kind, from)?;
    let to = parse::<U>(kind, to)?;
    Ok(units::convert(value, from, to))
}

fn parse<U: Unit>(kind: QuantityKind, s: &str) -> Result<U, ConversionError> {
    U::parse(s).ok_or_else(|| ConversionError::UnknownUnit {
        kind,
        unit: s.to_string(),
    })
}

/// 화면 표시용 변환. 소수점 4자리 문자열을 돌려주며, 실패하거나 값이 유한하지 않으면
/// [`CONVERSION_ERROR`]를 돌려준다.
pub fn convert_for_display(kind: QuantityKind, value: f64, from: &str, to: &str) -> String {
    match convert(kind, value, from, to) {
        Ok(v) if v.is_finite() && value.is_finite() => format!("{v:.4}"),
        Ok(_) => CONVERSION_ERROR.to_string(),
        Err(err) => {
            tracing::debug!(%err, "unit conversion failed");
            CONVERSION_ERROR.to_string()
        }
    }
}

/// psi ↔ kPa 전용 간이 변환. 소수점 2자리 문자열을 돌려준다.
pub fn convert_psi_kpa(value: f64, from: &str, to: &str) -> String {
    match (from, to) {
        ("psi", "kPa") => format!("{:.2}", value * KPA_PER_PSI),
        ("kPa", "psi") => format!("{:.2}", value / KPA_PER_PSI),
        _ => UNSUPPORTED_CONVERSION.to_string(),
    }
}
