use serde::{Deserialize, Serialize};

use super::Unit;

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Gram,
    Kilogram,
    Tonne,
    Ounce,
    Pound,
}

impl MassUnit {
    fn kilograms(self) -> f64 {
        match self {
            MassUnit::Gram => 1e-3,
            MassUnit::Kilogram => 1.0,
            MassUnit::Tonne => 1000.0,
            MassUnit::Ounce => 0.028_349_523_125,
            MassUnit::Pound => 0.453_592_37,
        }
    }
}

impl Unit for MassUnit {
    const ALL: &'static [Self] = &[
        MassUnit::Gram,
        MassUnit::Kilogram,
        MassUnit::Tonne,
        MassUnit::Ounce,
        MassUnit::Pound,
    ];

    fn symbol(self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
            MassUnit::Ounce => "oz",
            MassUnit::Pound => "lb",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            MassUnit::Tonne => &["tonne"],
            MassUnit::Pound => &["lbs", "lbm"],
            _ => &[],
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.kilograms()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.kilograms()
    }
}
