//! 배관 수력 계산 엔진. 모든 함수는 순수 함수이며 호출 간 상태를 갖지 않는다.

pub mod flow_rate;
pub mod pressure_series;
pub mod reynolds;

pub use flow_rate::{compute_flow_rate, FlowRate, INCH_TO_M};
pub use pressure_series::{
    friction_coefficient, generate_pressure_series, PressureSeries, SeriesPoint, DEFAULT_STEPS,
};
pub use reynolds::{classify_optional, classify_regime, compute_reynolds, FlowRegime};

use serde::{Deserialize, Serialize};

use crate::material_db::{self, Fluid, PipeMaterial, FALLBACK_ROUGHNESS_M};

/// 문자열 키로 재질/유체를 지정하는 외부 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowQuery {
    pub material: String,
    pub diameter_inches: f64,
    pub pipe_length_meters: f64,
    pub fluid: String,
    pub velocity_mps: f64,
}

/// 입력 한 벌에 대한 계산 결과. 입력과 참조 테이블만으로 결정된다.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowResult {
    pub flow_rate: FlowRate,
    /// 유속이 0 이하이면 `None`
    pub reynolds: Option<f64>,
    pub regime: FlowRegime,
    pub series: PressureSeries,
}

impl FlowResult {
    /// 재질이 없으면 기본 거칠기를, 유체가 없으면 정의되지 않은 레이놀즈수를 사용한다.
    pub fn compute(
        material: Option<&PipeMaterial>,
        fluid: Option<&Fluid>,
        diameter_in: f64,
        pipe_length_m: f64,
        velocity_mps: f64,
        steps: usize,
    ) -> Self {
        let flow_rate = compute_flow_rate(diameter_in, velocity_mps);
        let reynolds = fluid.and_then(|f| compute_reynolds(f, velocity_mps, diameter_in));
        let regime = classify_optional(reynolds);
        let roughness = material.map_or(FALLBACK_ROUGHNESS_M, |m| m.roughness_m);
        let series = pressure_series::generate_with_roughness(
            roughness,
            diameter_in,
            pipe_length_m,
            velocity_mps,
            flow_rate.exact_m3_per_s,
            steps,
        );
        Self {
            flow_rate,
            reynolds,
            regime,
            series,
        }
    }

    /// 화면 표시용 레이놀즈수. 정의되지 않으면 `N/A`.
    pub fn reynolds_text(&self) -> String {
        match self.reynolds {
            Some(re) => format!("{re:.0}"),
            None => "N/A".to_string(),
        }
    }
}

/// 외부 입력을 받아 테이블을 조회한 뒤 전체 결과를 계산한다.
pub fn evaluate(query: &FlowQuery, steps: usize) -> FlowResult {
    let material = material_db::find_material(&query.material);
    if material.is_none() {
        tracing::warn!(material = %query.material, "unknown pipe material, using fallback roughness");
    }
    let fluid = material_db::find_fluid(&query.fluid);
    if fluid.is_none() {
        tracing::warn!(fluid = %query.fluid, "unknown fluid, Reynolds number left undefined");
    }
    FlowResult::compute(
        material,
        fluid,
        query.diameter_inches,
        query.pipe_length_meters,
        query.velocity_mps,
        steps,
    )
}
