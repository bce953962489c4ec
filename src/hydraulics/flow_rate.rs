use serde::Serialize;

/// 호칭경 inch → m 환산 계수.
pub const INCH_TO_M: f64 = 0.0254;

/// 체적 유량 계산 결과.
///
/// 차트 계산에는 `exact_m3_per_s`를, 화면 표시에는 소수점 4자리로 반올림한
/// `display_m3_per_s`를 사용한다. 입력이 잘못되면 둘 다 0인 [`FlowRate::INVALID`]가 된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowRate {
    pub exact_m3_per_s: f64,
    pub display_m3_per_s: f64,
}

impl FlowRate {
    pub const INVALID: FlowRate = FlowRate {
        exact_m3_per_s: 0.0,
        display_m3_per_s: 0.0,
    };

    pub fn is_valid(&self) -> bool {
        self.exact_m3_per_s > 0.0
    }

    /// `0.0010 m³/s` 형식 문자열.
    pub fn display_text(&self) -> String {
        format!("{:.4} m³/s", self.display_m3_per_s)
    }
}

/// 내경(inch)과 유속(m/s)으로 원형 배관의 체적 유량을 구한다.
///
/// Q = π·(d/2)²·v. 직경이나 유속이 0 이하이거나 유한한 수가 아니면
/// 패닉 없이 [`FlowRate::INVALID`]를 반환한다.
pub fn compute_flow_rate(diameter_in: f64, velocity_mps: f64) -> FlowRate {
    let d = diameter_in * INCH_TO_M;
    if !d.is_finite() || !velocity_mps.is_finite() || d <= 0.0 || velocity_mps <= 0.0 {
        return FlowRate::INVALID;
    }
    let area = std::f64::consts::PI * (d / 2.0).powi(2);
    let q = area * velocity_mps;
    FlowRate {
        exact_m3_per_s: q,
        display_m3_per_s: round_to(q, 4),
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
