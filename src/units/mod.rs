//! 단위 정의 및 변환 모듈 모음.
//!
//! 각 물리량은 내부 기준 단위(SI)를 하나 두고, 모든 단위는 기준 단위를 거쳐 변환한다.

pub mod area;
pub mod density;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod velocity;
pub mod viscosity;
pub mod volume;
pub mod volume_flow;

pub use area::AreaUnit;
pub use density::DensityUnit;
pub use length::LengthUnit;
pub use mass::MassUnit;
pub use pressure::PressureUnit;
pub use temperature::TemperatureUnit;
pub use velocity::VelocityUnit;
pub use viscosity::ViscosityUnit;
pub use volume::VolumeUnit;
pub use volume_flow::VolumeFlowUnit;

/// 한 물리량에 속한 단위 집합.
pub trait Unit: Copy + PartialEq + std::fmt::Debug + 'static {
    /// 화면/목록에 노출되는 순서 그대로.
    const ALL: &'static [Self];

    fn symbol(self) -> &'static str;

    /// `symbol` 외에 입력으로 받아들이는 표기.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    fn to_base(self, value: f64) -> f64;

    fn from_base(self, value: f64) -> f64;

    /// 대소문자를 구분하지 않고 기호 또는 별칭으로 단위를 찾는다.
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.iter().copied().find(|u| {
            u.symbol().eq_ignore_ascii_case(s) || u.aliases().iter().any(|a| a.eq_ignore_ascii_case(s))
        })
    }
}

/// 같은 물리량의 두 단위 사이에서 값을 변환한다.
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    to.from_base(from.to_base(value))
}

/// 단위 기호 목록.
pub fn symbols<U: Unit>() -> Vec<&'static str> {
    U::ALL.iter().map(|u| u.symbol()).collect()
}
