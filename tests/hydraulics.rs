//! 수력 계산 엔진 회귀 테스트.
use approx::assert_relative_eq;
use pipe_flow_toolkit::hydraulics::{
    classify_optional, classify_regime, compute_flow_rate, compute_reynolds, evaluate,
    friction_coefficient, generate_pressure_series, FlowQuery, FlowRate, FlowRegime,
    SeriesPoint, DEFAULT_STEPS,
};
use pipe_flow_toolkit::material_db::{find_fluid, find_material};
use std::f64::consts::PI;

fn steel() -> &'static pipe_flow_toolkit::material_db::PipeMaterial {
    find_material("Steel - Commercial").expect("steel")
}

#[test]
fn flow_rate_matches_circular_area_times_velocity() {
    for (d, v) in [(0.25, 0.1), (1.0, 2.0), (4.0, 3.5), (36.0, 0.75)] {
        let q = compute_flow_rate(d, v);
        let expected = PI * (0.0254 * d / 2.0).powi(2) * v;
        assert_relative_eq!(q.exact_m3_per_s, expected, max_relative = 1e-12);
        assert!(q.is_valid());
    }
}

#[test]
fn one_inch_at_two_mps() {
    let q = compute_flow_rate(1.0, 2.0);
    assert_relative_eq!(q.exact_m3_per_s, 1.0134e-3, max_relative = 1e-3);
    assert_eq!(q.display_m3_per_s, 0.001);
    assert_eq!(q.display_text(), "0.0010 m³/s");
}

#[test]
fn display_value_is_rounded_but_exact_value_is_kept() {
    // 4 inch, 3 m/s → Q ≈ 0.024322
    let q = compute_flow_rate(4.0, 3.0);
    assert_eq!(q.display_m3_per_s, 0.0243);
    assert!(q.exact_m3_per_s != q.display_m3_per_s);
}

#[test]
fn invalid_flow_inputs_return_sentinel() {
    for (d, v) in [
        (1.0, 0.0),
        (1.0, -2.0),
        (0.0, 2.0),
        (-1.0, 2.0),
        (f64::NAN, 2.0),
        (1.0, f64::NAN),
        (f64::INFINITY, 2.0),
        (1.0, f64::INFINITY),
    ] {
        let q = compute_flow_rate(d, v);
        assert_eq!(q, FlowRate::INVALID, "d={d} v={v}");
        assert!(!q.is_valid());
    }
}

#[test]
fn water_reynolds_is_turbulent() {
    let water = find_fluid("Water").unwrap();
    let re = compute_reynolds(water, 2.0, 1.0).expect("defined");
    assert_relative_eq!(re, 50_698.4, max_relative = 1e-9);
    assert_eq!(classify_regime(re), FlowRegime::Turbulent);
}

#[test]
fn reynolds_undefined_without_positive_velocity() {
    let oil = find_fluid("Crude Oil").unwrap();
    assert_eq!(compute_reynolds(oil, 0.0, 1.0), None);
    assert_eq!(compute_reynolds(oil, -1.0, 1.0), None);
    assert_eq!(compute_reynolds(oil, f64::NAN, 1.0), None);
    assert_eq!(compute_reynolds(oil, 1.0, f64::NAN), None);
}

#[test]
fn regime_boundaries() {
    assert_eq!(classify_regime(0.0), FlowRegime::Laminar);
    assert_eq!(classify_regime(1999.0), FlowRegime::Laminar);
    assert_eq!(classify_regime(2000.0), FlowRegime::Transitional);
    assert_eq!(classify_regime(4000.0), FlowRegime::Transitional);
    assert_eq!(classify_regime(4001.0), FlowRegime::Turbulent);
    assert_eq!(classify_regime(f64::NAN), FlowRegime::Laminar);
    assert_eq!(classify_optional(None), FlowRegime::Laminar);
}

#[test]
fn guard_inputs_produce_single_origin_point() {
    let m = steel();
    let cases = [
        (1.0, 100.0, 0.0, 0.001),
        (1.0, 0.0, 2.0, 0.001),
        (1.0, f64::NAN, 2.0, 0.001),
        (0.0, 100.0, 2.0, 0.001),
        (f64::NAN, 100.0, 2.0, 0.001),
        (1.0, 100.0, 2.0, 0.0),
        (1.0, 100.0, 2.0, f64::NAN),
        (1.0, f64::INFINITY, 2.0, 0.001),
        (f64::INFINITY, 100.0, 2.0, 0.001),
        (1.0, 100.0, f64::INFINITY, 0.001),
        (1.0, 100.0, 2.0, f64::INFINITY),
        // k·Q²가 f64 범위를 넘는 경우
        (1.0, 100.0, 1e200, 1e197),
    ];
    for (d, len, v, q) in cases {
        let s = generate_pressure_series(m, d, len, v, q, DEFAULT_STEPS);
        assert_eq!(s.length_series, vec![SeriesPoint::ORIGIN]);
        assert_eq!(s.flow_sweep_series, vec![SeriesPoint::ORIGIN]);
        assert!(s.is_degenerate());
    }
    let zero_steps = generate_pressure_series(m, 1.0, 100.0, 2.0, 0.001, 0);
    assert!(zero_steps.is_degenerate());
}

#[test]
fn huge_inputs_never_leak_nan_into_series() {
    for query in [
        FlowQuery {
            material: "Steel - Commercial".into(),
            diameter_inches: 1.0,
            pipe_length_meters: f64::INFINITY,
            fluid: "Water".into(),
            velocity_mps: 2.0,
        },
        FlowQuery {
            material: "Steel - Commercial".into(),
            diameter_inches: 1.0,
            pipe_length_meters: 100.0,
            fluid: "Water".into(),
            velocity_mps: 1e200,
        },
    ] {
        let r = evaluate(&query, DEFAULT_STEPS);
        assert!(r.series.is_degenerate(), "{query:?}");
        assert_eq!(r.series.length_series, vec![SeriesPoint::ORIGIN]);
        assert_eq!(r.series.q_max, 0.0);
    }
}

#[test]
fn length_series_is_linear_and_monotonic() {
    let m = steel();
    let q = compute_flow_rate(1.0, 2.0).exact_m3_per_s;
    let s = generate_pressure_series(m, 1.0, 100.0, 2.0, q, DEFAULT_STEPS);
    assert_eq!(s.length_series.len(), DEFAULT_STEPS + 1);
    assert_eq!(s.length_series[0], SeriesPoint::ORIGIN);
    assert_eq!(s.length_series.last().unwrap().x, 100.0);
    assert!(s.length_series.windows(2).all(|w| w[1].y >= w[0].y));

    let k = friction_coefficient(0.00045, 0.0254);
    assert_relative_eq!(k, 8.0 * 0.00045 / 0.0254f64.powi(5), max_relative = 1e-12);
    let last = s.length_series.last().unwrap();
    assert_relative_eq!(last.y, k * q * q * 100.0, max_relative = 1e-12);
}

#[test]
fn flow_sweep_spans_step_to_q_max() {
    let m = steel();
    let s = generate_pressure_series(m, 1.0, 100.0, 2.0, 0.001, DEFAULT_STEPS);
    assert_eq!(s.flow_sweep_series.len(), DEFAULT_STEPS);
    assert_eq!(s.q_max, 1.0);
    assert_relative_eq!(s.flow_sweep_series[0].x, 1.0 / 20.0, max_relative = 1e-12);
    assert!(s.flow_sweep_series[0].x > 0.0);
    assert_eq!(s.flow_sweep_series.last().unwrap().x, 1.0);

    let k = friction_coefficient(m.roughness_m, 0.0254);
    for p in &s.flow_sweep_series {
        assert_relative_eq!(p.y, k * p.x * p.x * 100.0, max_relative = 1e-12);
    }
}

#[test]
fn large_flow_rate_stretches_sweep() {
    let concrete = find_material("Concrete").unwrap();
    let q = compute_flow_rate(36.0, 2.0).exact_m3_per_s;
    assert!(q * 1.2 > 1.0);
    let s = generate_pressure_series(concrete, 36.0, 500.0, 2.0, q, 10);
    assert_eq!(s.flow_sweep_series.len(), 10);
    assert_relative_eq!(s.q_max, q * 1.2, max_relative = 1e-12);
    assert_relative_eq!(
        s.flow_sweep_series.last().unwrap().x,
        q * 1.2,
        max_relative = 1e-12
    );
}

#[test]
fn evaluate_end_to_end() {
    let query = FlowQuery {
        material: "Steel - Commercial".into(),
        diameter_inches: 1.0,
        pipe_length_meters: 100.0,
        fluid: "Water".into(),
        velocity_mps: 2.0,
    };
    let r = evaluate(&query, DEFAULT_STEPS);
    assert_relative_eq!(r.flow_rate.exact_m3_per_s, 1.0134e-3, max_relative = 1e-3);
    assert_eq!(r.regime, FlowRegime::Turbulent);
    assert_eq!(r.reynolds_text(), "50698");
    assert!(!r.series.is_degenerate());
}

#[test]
fn zero_velocity_end_to_end() {
    let query = FlowQuery {
        material: "Steel - Commercial".into(),
        diameter_inches: 1.0,
        pipe_length_meters: 100.0,
        fluid: "Water".into(),
        velocity_mps: 0.0,
    };
    let r = evaluate(&query, DEFAULT_STEPS);
    assert_eq!(r.reynolds, None);
    assert_eq!(r.reynolds_text(), "N/A");
    assert_eq!(r.regime, FlowRegime::Laminar);
    assert_eq!(r.flow_rate.exact_m3_per_s, 0.0);
    assert!(r.series.is_degenerate());
}

#[test]
fn unknown_names_degrade_instead_of_failing() {
    let query = FlowQuery {
        material: "Bamboo".into(),
        diameter_inches: 1.0,
        pipe_length_meters: 100.0,
        fluid: "Mercury".into(),
        velocity_mps: 2.0,
    };
    let r = evaluate(&query, DEFAULT_STEPS);
    assert_eq!(r.reynolds, None);
    assert_eq!(r.regime, FlowRegime::Laminar);
    let k = friction_coefficient(0.0001, 0.0254);
    let q = r.flow_rate.exact_m3_per_s;
    assert_relative_eq!(
        r.series.length_series.last().unwrap().y,
        k * q * q * 100.0,
        max_relative = 1e-12
    );
}

#[test]
fn query_deserializes_from_camel_case() {
    let json = r#"{"material":"Cast Iron","diameterInches":6,"pipeLengthMeters":200,"fluid":"Crude Oil","velocityMps":1.5}"#;
    let q: FlowQuery = serde_json::from_str(json).unwrap();
    assert_eq!(q.material, "Cast Iron");
    assert_eq!(q.diameter_inches, 6.0);
    assert_eq!(q.velocity_mps, 1.5);
}
