use serde::Serialize;

use super::flow_rate::INCH_TO_M;
use crate::material_db::PipeMaterial;

/// 차트 한 구간을 만드는 기본 분할 수.
pub const DEFAULT_STEPS: usize = 20;

/// 차트 점 하나. x는 위치[m] 또는 유량[m3/s], y는 압력강하(비보정 단위).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesPoint {
    pub const ORIGIN: SeriesPoint = SeriesPoint { x: 0.0, y: 0.0 };
}

/// 길이 방향 누적 압력강하와 유량 스윕 압력강하.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PressureSeries {
    pub length_series: Vec<SeriesPoint>,
    pub flow_sweep_series: Vec<SeriesPoint>,
    /// 유량 스윕 상한 max(1.0, 1.2·Q). 퇴화 시리즈에서는 0.
    pub q_max: f64,
}

impl PressureSeries {
    /// 입력이 잘못되었을 때 차트가 깨지지 않도록 (0, 0) 한 점만 담는다.
    pub fn degenerate() -> Self {
        Self {
            length_series: vec![SeriesPoint::ORIGIN],
            flow_sweep_series: vec![SeriesPoint::ORIGIN],
            q_max: 0.0,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.length_series.len() == 1
    }
}

/// k = 8·ε / d⁵. Darcy-Weisbach 계수를 흉내 낸 단순 근사이며 차원이 맞지 않는다.
pub fn friction_coefficient(roughness_m: f64, diameter_m: f64) -> f64 {
    8.0 * roughness_m / diameter_m.powi(5)
}

/// 압력강하 차트용 시리즈를 만든다.
///
/// 유속·직경·길이·유량 중 하나라도 0 이하이거나 유한하지 않으면, `steps`가 0이면,
/// 혹은 압력강하 값이 f64 범위를 넘으면 [`PressureSeries::degenerate`]를 반환한다.
pub fn generate_pressure_series(
    material: &PipeMaterial,
    diameter_in: f64,
    pipe_length_m: f64,
    velocity_mps: f64,
    flow_rate_m3_per_s: f64,
    steps: usize,
) -> PressureSeries {
    generate_with_roughness(
        material.roughness_m,
        diameter_in,
        pipe_length_m,
        velocity_mps,
        flow_rate_m3_per_s,
        steps,
    )
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn generate_with_roughness(
    roughness_m: f64,
    diameter_in: f64,
    pipe_length_m: f64,
    velocity_mps: f64,
    flow_rate_m3_per_s: f64,
    steps: usize,
) -> PressureSeries {
    let d = diameter_in * INCH_TO_M;
    let q = flow_rate_m3_per_s;
    let length = pipe_length_m;
    if !positive_finite(velocity_mps)
        || !positive_finite(d)
        || !positive_finite(length)
        || !positive_finite(q)
        || steps == 0
    {
        tracing::debug!(
            diameter_m = d,
            pipe_length_m = length,
            flow_rate_m3_per_s = q,
            velocity_mps,
            steps,
            "invalid inputs, returning single-point pressure series"
        );
        return PressureSeries::degenerate();
    }

    let k = friction_coefficient(roughness_m, d);
    let drop_per_m = k * q * q;
    let q_max = (q * 1.2).max(1.0);
    // 양 끝점이 유한하면 중간 점도 유한하다.
    if !(drop_per_m * length).is_finite() || !(k * q_max * q_max * length).is_finite() {
        tracing::debug!(
            friction_coefficient = k,
            flow_rate_m3_per_s = q,
            pipe_length_m = length,
            "pressure drop overflows, returning single-point pressure series"
        );
        return PressureSeries::degenerate();
    }
    let n = steps as f64;

    let length_series = (0..=steps)
        .map(|i| {
            let x = length * (i as f64 / n);
            SeriesPoint {
                x,
                y: drop_per_m * x,
            }
        })
        .collect();

    let flow_sweep_series = (1..=steps)
        .map(|i| {
            let x = q_max * (i as f64 / n);
            SeriesPoint {
                x,
                y: k * x * x * length,
            }
        })
        .collect();

    PressureSeries {
        length_series,
        flow_sweep_series,
        q_max,
    }
}
