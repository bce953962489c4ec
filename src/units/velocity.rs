use serde::{Deserialize, Serialize};

use super::Unit;

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    FootPerSecond,
    MilePerHour,
}

impl VelocityUnit {
    fn mps(self) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => 1.0,
            VelocityUnit::KilometerPerHour => 1.0 / 3.6,
            VelocityUnit::FootPerSecond => 0.3048,
            VelocityUnit::MilePerHour => 0.447_04,
        }
    }
}

impl Unit for VelocityUnit {
    const ALL: &'static [Self] = &[
        VelocityUnit::MeterPerSecond,
        VelocityUnit::KilometerPerHour,
        VelocityUnit::FootPerSecond,
        VelocityUnit::MilePerHour,
    ];

    fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::KilometerPerHour => "km/h",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::MilePerHour => "mph",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            VelocityUnit::MeterPerSecond => &["mps"],
            VelocityUnit::KilometerPerHour => &["kph"],
            VelocityUnit::FootPerSecond => &["fps"],
            VelocityUnit::MilePerHour => &["mi/h"],
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.mps()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.mps()
    }
}
