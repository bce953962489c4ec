use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::chart::Chart;
use crate::conversion;
use crate::hydraulics::FlowResult;
use crate::material_db::{self, PIPE_LENGTH_CHOICES_M};
use crate::quantity::QuantityKind;
use crate::session::{FlowInputs, FlowSession};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    FlowRate,
    PressureDrop,
    ReferenceTables,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Engineering Toolkit ===");
    println!("1) Unit converter");
    println!("2) Flow rate calculator");
    println!("3) Pressure drop");
    println!("4) Pipe materials / fluids");
    println!("0) Exit");
    loop {
        let sel = match read_line("Select: ") {
            Ok(sel) => sel,
            // 입력이 닫히면 메뉴를 끝낸다.
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                println!();
                return Ok(MenuChoice::Exit);
            }
            Err(err) => return Err(err),
        };
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("Invalid selection, try again."),
        }
    }
}

fn parse_menu_choice(s: &str) -> Option<MenuChoice> {
    match s.trim() {
        "1" => Some(MenuChoice::UnitConversion),
        "2" => Some(MenuChoice::FlowRate),
        "3" => Some(MenuChoice::PressureDrop),
        "4" => Some(MenuChoice::ReferenceTables),
        "0" | "q" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 단위 변환 메뉴를 처리한다. 엔터만 누르면 기본 물리량/단위를 쓴다.
pub fn handle_unit_conversion(default_kind: QuantityKind) -> Result<(), AppError> {
    println!("\n-- Unit converter --");
    for (i, kind) in conversion::measures().iter().enumerate() {
        println!("{:>2}) {}", i + 1, kind.label());
    }
    let kind = loop {
        let sel = read_line(&format!("Quantity [{}]: ", default_kind.label()))?;
        if sel.trim().is_empty() {
            break default_kind;
        }
        match pick(conversion::measures(), &sel) {
            Some(kind) => break *kind,
            None => println!("Unsupported number."),
        }
    };
    let units = conversion::possibilities(kind);
    println!("Units: {}", units.join(", "));
    let (default_from, default_to) = conversion::default_units(kind);
    let value = read_f64("Value: ")?;
    let from = read_or_default(&format!("From [{default_from}]: "), default_from)?;
    let to = read_or_default(&format!("To [{default_to}]: "), default_to)?;
    let shown = conversion::convert_for_display(kind, value, &from, &to);
    println!("Result: {shown} {to}");
    Ok(())
}

/// 현재 호칭경에서 유속을 입력받아 유량을 계산한다.
pub fn handle_flow_rate(session: &mut FlowSession) -> Result<(), AppError> {
    println!("\n-- Flow rate calculator --");
    println!("Dia: {}\"", session.inputs().diameter_in);
    let velocity = read_f64(&format!(
        "Vel [m/s] (current {}): ",
        session.inputs().velocity_mps
    ))?;
    session.set_velocity(velocity);
    println!("Q: {}", session.flow_rate().display_text());
    Ok(())
}

/// 재질/호칭경/길이/유체를 고른 뒤 결과와 압력강하 표를 출력한다.
pub fn handle_pressure_drop(session: &mut FlowSession) -> Result<(), AppError> {
    println!("\n-- Pressure drop --");
    let materials = material_db::materials();
    for (i, m) in materials.iter().enumerate() {
        println!("{:>2}) {}", i + 1, m.name);
    }
    let sel = read_line(&format!(
        "Pipe type [{}]: ",
        session.inputs().material.name
    ))?;
    if let Some(m) = pick(materials, &sel) {
        session.select_material(m.name)?;
    }

    let diameters = session.inputs().material.diameters_in;
    let listed: Vec<String> = diameters.iter().map(|d| format!("{d}\"")).collect();
    println!("Diameters: {}", listed.join(", "));
    let sel = read_line(&format!("Diameter [{}]: ", session.inputs().diameter_in))?;
    if !sel.trim().is_empty() {
        match sel.trim().trim_end_matches('"').parse::<f64>() {
            Ok(d) => {
                if let Err(err) = session.select_diameter(d) {
                    println!("{err}");
                }
            }
            Err(_) => println!("Enter a number."),
        }
    }

    let lengths: Vec<String> = PIPE_LENGTH_CHOICES_M.iter().map(|l| l.to_string()).collect();
    println!("Common lengths [m]: {}", lengths.join(", "));
    let sel = read_line(&format!(
        "Length [m] [{}]: ",
        session.inputs().pipe_length_m
    ))?;
    if let Ok(len) = sel.trim().parse::<f64>() {
        session.set_pipe_length(len);
    }

    let fluids = material_db::fluids();
    for (i, f) in fluids.iter().enumerate() {
        println!("{:>2}) {}", i + 1, f.name);
    }
    let sel = read_line(&format!("Fluid [{}]: ", session.inputs().fluid.name))?;
    if let Some(f) = pick(fluids, &sel) {
        session.select_fluid(f.name)?;
    }

    print_flow_summary(session.inputs(), session.result());
    print_series_tables(session.result());
    Ok(())
}

/// 입력과 주요 결과를 요약 출력한다.
pub fn print_flow_summary(inputs: &FlowInputs, result: &FlowResult) {
    println!(
        "Pipe: {} ({}\", roughness {} m), length {} m",
        inputs.material.name,
        inputs.diameter_in,
        inputs.material.roughness_m,
        inputs.pipe_length_m
    );
    println!(
        "Fluid: {} (viscosity {} Pa·s, density {} kg/m³)",
        inputs.fluid.name, inputs.fluid.viscosity_pa_s, inputs.fluid.density_kg_per_m3
    );
    println!("Velocity: {} m/s", inputs.velocity_mps);
    println!("Flow rate Q: {}", result.flow_rate.display_text());
    println!(
        "Reynolds number: {}, regime: {}",
        result.reynolds_text(),
        result.regime
    );
}

pub fn print_series_tables(result: &FlowResult) {
    print_chart_table(&Chart::along_length(result));
    print_chart_table(&Chart::flow_sweep(result));
    println!("note: pressure drop is k·Q² without unit calibration.");
}

fn print_chart_table(chart: &Chart) {
    println!("\n{}", chart.title);
    if let Some(marker) = &chart.marker {
        println!("  {}", marker.label);
    }
    println!("{:>12}  {:>16}", chart.x_title, "pressure drop");
    for (label, p) in chart.x_labels().iter().zip(&chart.points) {
        println!("{label:>12}  {:>16.6e}", p.y);
    }
}

pub fn print_materials() {
    println!("{:<20} {:>14}  diameters [in]", "material", "roughness [m]");
    for m in material_db::materials() {
        let ds: Vec<String> = m.diameters_in.iter().map(|d| d.to_string()).collect();
        println!("{:<20} {:>14}  {}", m.name, m.roughness_m, ds.join(", "));
    }
}

pub fn print_fluids() {
    println!("{:<14} {:>16} {:>16}", "fluid", "viscosity [Pa·s]", "density [kg/m³]");
    for f in material_db::fluids() {
        println!(
            "{:<14} {:>16} {:>16}",
            f.name, f.viscosity_pa_s, f.density_kg_per_m3
        );
    }
}

pub fn print_units(kind: Option<QuantityKind>) {
    match kind {
        Some(kind) => println!("{}: {}", kind.label(), conversion::possibilities(kind).join(", ")),
        None => {
            for kind in conversion::measures() {
                println!("{:<18} {}", kind.label(), conversion::possibilities(*kind).join(", "));
            }
        }
    }
}

/// 1부터 시작하는 번호로 목록 항목을 고른다.
fn pick<'a, T>(items: &'a [T], sel: &str) -> Option<&'a T> {
    let n = sel.trim().parse::<usize>().ok()?;
    items.get(n.checked_sub(1)?)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(next_line(&mut io::stdin().lock())?)
}

/// 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof` 오류.
fn next_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(buf)
}

fn read_or_default(prompt: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(prompt)?;
    let s = s.trim();
    Ok(if s.is_empty() { default } else { s }.to_string())
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Enter a number."),
        }
    }
}
