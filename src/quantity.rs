use serde::{Deserialize, Serialize};

/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum QuantityKind {
    Length,
    Area,
    Volume,
    VolumeFlow,
    Pressure,
    Velocity,
    Mass,
    Temperature,
    Viscosity,
    Density,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 10] = [
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::VolumeFlow,
        QuantityKind::Pressure,
        QuantityKind::Velocity,
        QuantityKind::Mass,
        QuantityKind::Temperature,
        QuantityKind::Viscosity,
        QuantityKind::Density,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuantityKind::Length => "Length",
            QuantityKind::Area => "Area",
            QuantityKind::Volume => "Volume",
            QuantityKind::VolumeFlow => "Volume flow rate",
            QuantityKind::Pressure => "Pressure",
            QuantityKind::Velocity => "Velocity",
            QuantityKind::Mass => "Mass",
            QuantityKind::Temperature => "Temperature",
            QuantityKind::Viscosity => "Dynamic viscosity",
            QuantityKind::Density => "Density",
        }
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
