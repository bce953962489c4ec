use serde::{Deserialize, Serialize};

use super::volume::US_GALLON_M3;
use super::Unit;

/// 체적 유량 단위. 내부 기준은 m3/s이며 유량 계산기 출력과 같은 단위다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeFlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    LiterPerMinute,
    UsGallonPerMinute,
    CubicFootPerSecond,
}

impl VolumeFlowUnit {
    fn m3_per_s(self) -> f64 {
        match self {
            VolumeFlowUnit::CubicMeterPerSecond => 1.0,
            VolumeFlowUnit::CubicMeterPerHour => 1.0 / 3600.0,
            VolumeFlowUnit::LiterPerSecond => 1e-3,
            VolumeFlowUnit::LiterPerMinute => 1e-3 / 60.0,
            VolumeFlowUnit::UsGallonPerMinute => US_GALLON_M3 / 60.0,
            VolumeFlowUnit::CubicFootPerSecond => 0.028_316_846_592,
        }
    }
}

impl Unit for VolumeFlowUnit {
    const ALL: &'static [Self] = &[
        VolumeFlowUnit::CubicMeterPerSecond,
        VolumeFlowUnit::CubicMeterPerHour,
        VolumeFlowUnit::LiterPerSecond,
        VolumeFlowUnit::LiterPerMinute,
        VolumeFlowUnit::UsGallonPerMinute,
        VolumeFlowUnit::CubicFootPerSecond,
    ];

    fn symbol(self) -> &'static str {
        match self {
            VolumeFlowUnit::CubicMeterPerSecond => "m3/s",
            VolumeFlowUnit::CubicMeterPerHour => "m3/h",
            VolumeFlowUnit::LiterPerSecond => "l/s",
            VolumeFlowUnit::LiterPerMinute => "l/min",
            VolumeFlowUnit::UsGallonPerMinute => "gpm",
            VolumeFlowUnit::CubicFootPerSecond => "ft3/s",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            VolumeFlowUnit::CubicMeterPerSecond => &["m³/s"],
            VolumeFlowUnit::CubicMeterPerHour => &["m³/h", "cmh"],
            VolumeFlowUnit::LiterPerMinute => &["lpm"],
            VolumeFlowUnit::UsGallonPerMinute => &["gal/min"],
            VolumeFlowUnit::CubicFootPerSecond => &["cfs", "ft³/s"],
            VolumeFlowUnit::LiterPerSecond => &[],
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.m3_per_s()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.m3_per_s()
    }
}
