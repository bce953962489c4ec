use serde::{Deserialize, Serialize};

use super::Unit;

/// psi → kPa 환산 계수.
pub const KPA_PER_PSI: f64 = 6.89476;
const PA_PER_ATM: f64 = 101_325.0;

/// 압력 단위. 내부 기준은 Pa(절대압 스케일)이며 게이지 보정은 하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
    Atm,
    MmHg,
}

impl PressureUnit {
    fn pascals(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1000.0,
            PressureUnit::MegaPascal => 1e6,
            PressureUnit::Bar => 100_000.0,
            PressureUnit::Psi => KPA_PER_PSI * 1000.0,
            PressureUnit::Atm => PA_PER_ATM,
            // 1 atm = 760 mmHg
            PressureUnit::MmHg => PA_PER_ATM / 760.0,
        }
    }
}

impl Unit for PressureUnit {
    const ALL: &'static [Self] = &[
        PressureUnit::Pascal,
        PressureUnit::KiloPascal,
        PressureUnit::MegaPascal,
        PressureUnit::Bar,
        PressureUnit::Psi,
        PressureUnit::Atm,
        PressureUnit::MmHg,
    ];

    fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Psi => "psi",
            PressureUnit::Atm => "atm",
            PressureUnit::MmHg => "mmHg",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            PressureUnit::Pascal => &["pascal"],
            PressureUnit::KiloPascal => &["kilopascal"],
            PressureUnit::MegaPascal => &["megapascal"],
            PressureUnit::MmHg => &["torr"],
            _ => &[],
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.pascals()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.pascals()
    }
}
