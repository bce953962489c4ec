use serde::{Deserialize, Serialize};

use super::Unit;

/// 동점성(dynamic viscosity) 단위. 내부 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    PascalSecond,
    MilliPascalSecond,
    Poise,
    Centipoise,
}

impl ViscosityUnit {
    fn pascal_seconds(self) -> f64 {
        match self {
            ViscosityUnit::PascalSecond => 1.0,
            ViscosityUnit::MilliPascalSecond | ViscosityUnit::Centipoise => 1e-3,
            ViscosityUnit::Poise => 0.1,
        }
    }
}

impl Unit for ViscosityUnit {
    const ALL: &'static [Self] = &[
        ViscosityUnit::PascalSecond,
        ViscosityUnit::MilliPascalSecond,
        ViscosityUnit::Poise,
        ViscosityUnit::Centipoise,
    ];

    fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::PascalSecond => "Pa·s",
            ViscosityUnit::MilliPascalSecond => "mPa·s",
            ViscosityUnit::Poise => "P",
            ViscosityUnit::Centipoise => "cP",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ViscosityUnit::PascalSecond => &["Pa.s", "Pas"],
            ViscosityUnit::MilliPascalSecond => &["mPa.s", "mPas"],
            ViscosityUnit::Poise => &["poise"],
            ViscosityUnit::Centipoise => &["cps", "centipoise"],
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.pascal_seconds()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.pascal_seconds()
    }
}
