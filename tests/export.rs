use pipe_flow_toolkit::export::{result_json, series_csv, write_result_json, write_series_csv};
use pipe_flow_toolkit::hydraulics::{evaluate, FlowQuery, SeriesPoint};
use std::fs;

fn sample() -> pipe_flow_toolkit::hydraulics::FlowResult {
    evaluate(
        &FlowQuery {
            material: "PVC - Smooth".into(),
            diameter_inches: 2.0,
            pipe_length_meters: 300.0,
            fluid: "Light Diesel".into(),
            velocity_mps: 1.2,
        },
        4,
    )
}

#[test]
fn json_report_uses_camel_case_keys() {
    let json = result_json(&sample()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in [
        "flowRateM3PerS",
        "flowRateDisplay",
        "reynolds",
        "regime",
        "qMax",
        "lengthSeries",
        "flowSweepSeries",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["lengthSeries"].as_array().unwrap().len(), 5);
    assert_eq!(v["flowSweepSeries"].as_array().unwrap().len(), 4);
    assert_eq!(v["qMax"], 1.0);
}

#[test]
fn undefined_reynolds_is_null() {
    let r = evaluate(
        &FlowQuery {
            material: "PVC - Smooth".into(),
            diameter_inches: 2.0,
            pipe_length_meters: 300.0,
            fluid: "Light Diesel".into(),
            velocity_mps: 0.0,
        },
        4,
    );
    let v: serde_json::Value = serde_json::from_str(&result_json(&r).unwrap()).unwrap();
    assert!(v["reynolds"].is_null());
}

#[test]
fn csv_has_header_and_rows() {
    let pts = [SeriesPoint { x: 0.0, y: 0.0 }, SeriesPoint { x: 1.5, y: 2.25 }];
    assert_eq!(series_csv(&pts, "x", "y"), "x,y\n0,0\n1.5,2.25\n");
}

#[test]
fn empty_series_is_header_only() {
    assert_eq!(series_csv(&[], "position_m", "pressure_drop"), "position_m,pressure_drop\n");
}

#[test]
fn files_are_written() {
    let r = sample();
    let dir = std::env::temp_dir();
    let csv = dir.join(format!("pipe_flow_toolkit_{}_series.csv", std::process::id()));
    let json = dir.join(format!("pipe_flow_toolkit_{}_result.json", std::process::id()));

    write_series_csv(&csv, &r).unwrap();
    let text = fs::read_to_string(&csv).unwrap();
    assert!(text.starts_with("position_m,pressure_drop\n"));
    assert!(text.contains("\n\nflow_rate_m3_per_s,pressure_drop\n"));
    // 헤더 2 + 빈 줄 1 + 길이 5 + 유량 4
    assert_eq!(text.lines().count(), 12);

    write_result_json(&json, &r).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(v["regime"], serde_json::to_value(r.regime).unwrap());

    fs::remove_file(csv).unwrap();
    fs::remove_file(json).unwrap();
}
