//! 렌더링과 무관한 압력강하 차트 모델. GUI는 이 모델을 그대로 그리고 CLI는 표로 출력한다.

use crate::hydraulics::{FlowResult, SeriesPoint};

pub const LENGTH_CHART_TITLE: &str = "Pressure Drop Along Pipe Length";
pub const FLOW_CHART_TITLE: &str = "Pressure Drop vs. Flow Rate";
/// 압력강하 값은 k·Q² 그대로이며 kPa로 환산되지 않았다.
pub const PRESSURE_AXIS_TITLE: &str = "Pressure Drop (uncalibrated)";

/// 현재 유량 위치를 표시하는 세로선.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: &'static str,
    pub series_label: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub points: Vec<SeriesPoint>,
    /// 고정 x 범위. `None`이면 데이터 범위를 쓴다.
    pub x_range: Option<(f64, f64)>,
    pub marker: Option<Marker>,
    /// x 눈금 라벨 소수 자릿수
    pub x_label_decimals: usize,
}

impl Chart {
    /// 위치별 누적 압력강하 차트.
    pub fn along_length(result: &FlowResult) -> Self {
        Self {
            title: LENGTH_CHART_TITLE,
            series_label: "Cumulative Pressure Drop vs. Pipe Length",
            x_title: "Pipe Length (m)",
            y_title: PRESSURE_AXIS_TITLE,
            points: result.series.length_series.clone(),
            x_range: None,
            marker: None,
            x_label_decimals: 1,
        }
    }

    /// 유량 스윕 차트. 현재 유량에 세로선을 둔다.
    pub fn flow_sweep(result: &FlowResult) -> Self {
        let series = &result.series;
        let (x_range, marker) = if series.is_degenerate() {
            (None, None)
        } else {
            let q = result.flow_rate.exact_m3_per_s;
            (
                Some((0.0, series.q_max)),
                Some(Marker {
                    x: q,
                    label: format!("Q = {q:.4} m³/s"),
                }),
            )
        };
        Self {
            title: FLOW_CHART_TITLE,
            series_label: "Pressure Drop vs. Flow Rate",
            x_title: "Flow Rate (m³/s)",
            y_title: PRESSURE_AXIS_TITLE,
            points: series.flow_sweep_series.clone(),
            x_range,
            marker,
            x_label_decimals: 2,
        }
    }

    pub fn x_labels(&self) -> Vec<String> {
        let decimals = self.x_label_decimals;
        self.points
            .iter()
            .map(|p| format!("{:.*}", decimals, p.x))
            .collect()
    }

    /// (min, max) x. 고정 범위가 있으면 그 값을 쓴다.
    pub fn x_bounds(&self) -> (f64, f64) {
        self.x_range
            .unwrap_or_else(|| widen(bounds(self.points.iter().map(|p| p.x))))
    }

    /// (min, max) y. 한 점짜리 시리즈도 폭이 0이 되지 않게 넓힌다.
    pub fn y_bounds(&self) -> (f64, f64) {
        widen(bounds(self.points.iter().map(|p| p.y)))
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo <= f64::EPSILON * hi.abs().max(1.0) {
        return (lo, lo + 1.0);
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydraulics::{FlowQuery, evaluate, DEFAULT_STEPS};

    fn query(velocity_mps: f64) -> FlowQuery {
        FlowQuery {
            material: "Steel - Commercial".into(),
            diameter_inches: 1.0,
            pipe_length_meters: 100.0,
            fluid: "Water".into(),
            velocity_mps,
        }
    }

    #[test]
    fn flow_chart_marks_current_flow_rate() {
        let result = evaluate(&query(2.0), DEFAULT_STEPS);
        let chart = Chart::flow_sweep(&result);
        let marker = chart.marker.as_ref().expect("marker");
        assert_eq!(marker.label, "Q = 0.0010 m³/s");
        assert_eq!(chart.x_range, Some((0.0, 1.0)));
        assert_eq!(chart.x_labels()[0], "0.05");
        assert_eq!(chart.x_labels().last().map(String::as_str), Some("1.00"));
    }

    #[test]
    fn length_chart_labels_use_one_decimal() {
        let result = evaluate(&query(2.0), DEFAULT_STEPS);
        let chart = Chart::along_length(&result);
        let labels = chart.x_labels();
        assert_eq!(labels.len(), 21);
        assert_eq!(labels[1], "5.0");
        assert_eq!(chart.x_bounds(), (0.0, 100.0));
    }

    #[test]
    fn degenerate_chart_has_usable_bounds_and_no_marker() {
        let result = evaluate(&query(0.0), DEFAULT_STEPS);
        let chart = Chart::flow_sweep(&result);
        assert!(chart.marker.is_none());
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.y_bounds(), (0.0, 1.0));
        assert_eq!(chart.x_bounds(), (0.0, 1.0));
    }
}
