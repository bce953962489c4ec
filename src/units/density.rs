use serde::{Deserialize, Serialize};

use super::Unit;

/// 밀도 단위. 내부 기준은 kg/m3이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
    KilogramPerLiter,
    PoundPerCubicFoot,
}

impl DensityUnit {
    fn kg_per_m3(self) -> f64 {
        match self {
            DensityUnit::KilogramPerCubicMeter => 1.0,
            DensityUnit::GramPerCubicCentimeter | DensityUnit::KilogramPerLiter => 1000.0,
            DensityUnit::PoundPerCubicFoot => 16.018_463_373_960_14,
        }
    }
}

impl Unit for DensityUnit {
    const ALL: &'static [Self] = &[
        DensityUnit::KilogramPerCubicMeter,
        DensityUnit::GramPerCubicCentimeter,
        DensityUnit::KilogramPerLiter,
        DensityUnit::PoundPerCubicFoot,
    ];

    fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KilogramPerCubicMeter => "kg/m3",
            DensityUnit::GramPerCubicCentimeter => "g/cm3",
            DensityUnit::KilogramPerLiter => "kg/l",
            DensityUnit::PoundPerCubicFoot => "lb/ft3",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            DensityUnit::KilogramPerCubicMeter => &["kg/m³"],
            DensityUnit::GramPerCubicCentimeter => &["g/cm³", "g/cc"],
            DensityUnit::KilogramPerLiter => &[],
            DensityUnit::PoundPerCubicFoot => &["lb/ft³"],
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.kg_per_m3()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.kg_per_m3()
    }
}
