use serde::{Deserialize, Serialize};

use super::Unit;

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMillimeter,
    SquareCentimeter,
    SquareMeter,
    SquareInch,
    SquareFoot,
}

impl AreaUnit {
    fn square_meters(self) -> f64 {
        match self {
            AreaUnit::SquareMillimeter => 1e-6,
            AreaUnit::SquareCentimeter => 1e-4,
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareInch => 0.0254 * 0.0254,
            AreaUnit::SquareFoot => 0.3048 * 0.3048,
        }
    }
}

impl Unit for AreaUnit {
    const ALL: &'static [Self] = &[
        AreaUnit::SquareMillimeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMeter,
        AreaUnit::SquareInch,
        AreaUnit::SquareFoot,
    ];

    fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMillimeter => "mm2",
            AreaUnit::SquareCentimeter => "cm2",
            AreaUnit::SquareMeter => "m2",
            AreaUnit::SquareInch => "in2",
            AreaUnit::SquareFoot => "ft2",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            AreaUnit::SquareMillimeter => &["mm²", "mm^2"],
            AreaUnit::SquareCentimeter => &["cm²", "cm^2"],
            AreaUnit::SquareMeter => &["m²", "m^2", "sqm"],
            AreaUnit::SquareInch => &["in²", "in^2", "sqin"],
            AreaUnit::SquareFoot => &["ft²", "ft^2", "sqft"],
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.square_meters()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.square_meters()
    }
}
