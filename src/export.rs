//! 계산 결과를 CSV/JSON으로 내보낸다.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::hydraulics::{FlowRegime, FlowResult, SeriesPoint};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 외부로 내보내는 결과 형식.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowReport<'a> {
    pub flow_rate_m3_per_s: f64,
    pub flow_rate_display: f64,
    pub reynolds: Option<f64>,
    pub regime: FlowRegime,
    pub q_max: f64,
    pub length_series: &'a [SeriesPoint],
    pub flow_sweep_series: &'a [SeriesPoint],
}

impl<'a> From<&'a FlowResult> for FlowReport<'a> {
    fn from(result: &'a FlowResult) -> Self {
        Self {
            flow_rate_m3_per_s: result.flow_rate.exact_m3_per_s,
            flow_rate_display: result.flow_rate.display_m3_per_s,
            reynolds: result.reynolds,
            regime: result.regime,
            q_max: result.series.q_max,
            length_series: &result.series.length_series,
            flow_sweep_series: &result.series.flow_sweep_series,
        }
    }
}

pub fn result_json(result: &FlowResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&FlowReport::from(result))
}

/// 헤더 한 줄과 `x,y` 행으로 이루어진 CSV.
pub fn series_csv(points: &[SeriesPoint], x_header: &str, y_header: &str) -> String {
    std::iter::once(format!("{x_header},{y_header}\n"))
        .chain(points.iter().map(|p| format!("{},{}\n", p.x, p.y)))
        .collect()
}

/// 두 시리즈를 하나의 CSV 파일로 저장한다. 시리즈 사이에는 빈 줄을 둔다.
pub fn write_series_csv(path: &Path, result: &FlowResult) -> Result<(), ExportError> {
    let mut content = series_csv(
        &result.series.length_series,
        "position_m",
        "pressure_drop",
    );
    content.push('\n');
    content.push_str(&series_csv(
        &result.series.flow_sweep_series,
        "flow_rate_m3_per_s",
        "pressure_drop",
    ));
    fs::write(path, content)?;
    Ok(())
}

pub fn write_result_json(path: &Path, result: &FlowResult) -> Result<(), ExportError> {
    fs::write(path, result_json(result)?)?;
    Ok(())
}
