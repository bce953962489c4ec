use serde::{Deserialize, Serialize};

use super::flow_rate::INCH_TO_M;
use crate::material_db::Fluid;

/// 층류 상한 (미만이면 층류).
pub const LAMINAR_LIMIT: f64 = 2000.0;
/// 천이 영역 상한 (이 값까지 천이, 초과하면 난류).
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// 레이놀즈수로 분류한 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    pub fn label(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "Laminar",
            FlowRegime::Transitional => "Transitional",
            FlowRegime::Turbulent => "Turbulent",
        }
    }
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Re = ρ·v·d / μ. 유속이 0 이하이면 정의하지 않는다(`None`).
pub fn compute_reynolds(fluid: &Fluid, velocity_mps: f64, diameter_in: f64) -> Option<f64> {
    if velocity_mps.is_nan() || velocity_mps <= 0.0 {
        return None;
    }
    let d = diameter_in * INCH_TO_M;
    let re = fluid.density_kg_per_m3 * velocity_mps * d / fluid.viscosity_pa_s;
    re.is_finite().then_some(re)
}

/// 경계값 2000과 4000은 모두 천이 영역에 포함한다.
/// NaN은 어느 비교도 만족하지 않으므로 층류로 떨어진다.
pub fn classify_regime(re: f64) -> FlowRegime {
    if re > TURBULENT_LIMIT {
        FlowRegime::Turbulent
    } else if re >= LAMINAR_LIMIT {
        FlowRegime::Transitional
    } else {
        FlowRegime::Laminar
    }
}

/// 레이놀즈수가 정의되지 않으면 기본값인 층류로 본다.
pub fn classify_optional(re: Option<f64>) -> FlowRegime {
    re.map_or(FlowRegime::Laminar, classify_regime)
}
