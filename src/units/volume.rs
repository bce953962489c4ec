use serde::{Deserialize, Serialize};

use super::Unit;

/// 미국 갤런 [m3]
pub(crate) const US_GALLON_M3: f64 = 0.003_785_411_784;

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    CubicMeter,
    CubicInch,
    CubicFoot,
    UsGallon,
}

impl VolumeUnit {
    fn cubic_meters(self) -> f64 {
        match self {
            VolumeUnit::Milliliter => 1e-6,
            VolumeUnit::Liter => 1e-3,
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::CubicInch => 1.638_706_4e-5,
            VolumeUnit::CubicFoot => 0.028_316_846_592,
            VolumeUnit::UsGallon => US_GALLON_M3,
        }
    }
}

impl Unit for VolumeUnit {
    const ALL: &'static [Self] = &[
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
        VolumeUnit::CubicMeter,
        VolumeUnit::CubicInch,
        VolumeUnit::CubicFoot,
        VolumeUnit::UsGallon,
    ];

    fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::Liter => "l",
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::CubicInch => "in3",
            VolumeUnit::CubicFoot => "ft3",
            VolumeUnit::UsGallon => "gal",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            VolumeUnit::Liter => &["liter", "litre"],
            VolumeUnit::CubicMeter => &["m³", "m^3"],
            VolumeUnit::CubicInch => &["in³", "in^3"],
            VolumeUnit::CubicFoot => &["ft³", "ft^3", "cuft"],
            VolumeUnit::UsGallon => &["gallon"],
            VolumeUnit::Milliliter => &[],
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.cubic_meters()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.cubic_meters()
    }
}
