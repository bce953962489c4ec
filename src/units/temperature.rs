use serde::{Deserialize, Serialize};

use super::Unit;

/// 온도 단위. 내부 기준은 켈빈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
    Rankine,
}

impl Unit for TemperatureUnit {
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Rankine,
    ];

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Rankine => "R",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TemperatureUnit::Celsius => &["°C", "celsius"],
            TemperatureUnit::Kelvin => &["kelvin"],
            TemperatureUnit::Fahrenheit => &["°F", "fahrenheit"],
            TemperatureUnit::Rankine => &["°R", "rankine"],
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value + 273.15,
            TemperatureUnit::Kelvin => value,
            TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
            TemperatureUnit::Rankine => value * 5.0 / 9.0,
        }
    }

    fn from_base(self, value_k: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value_k - 273.15,
            TemperatureUnit::Kelvin => value_k,
            TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
            TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
        }
    }
}
