#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use pipe_flow_toolkit::{
    chart::Chart,
    config::{self, LogLevel},
    conversion, export,
    hydraulics::SeriesPoint,
    logging,
    material_db::{self, PIPE_LENGTH_CHOICES_M},
    quantity::QuantityKind,
    session::{FlowInputs, FlowSession},
};
use std::{fs, path::Path, path::PathBuf};

/// 배관 유량/압력강하 GUI
#[derive(Debug, Parser)]
#[command(name = "pipe_flow_toolkit_gui", version, about, long_about = None)]
struct GuiArgs {
    /// 설정 파일 경로
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 로그 레벨
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = GuiArgs::parse();
    let app_cfg = config::Config::load_or_default(&args.config).unwrap_or_else(|e| {
        eprintln!("config error, using defaults: {e}");
        config::Config::default()
    });
    logging::init(args.log_level.unwrap_or(app_cfg.log_level))?;

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([960.0, 900.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Engineering Toolkit",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )?;
    Ok(())
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["assets/icon.png", "icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

const LENGTH_SERIES_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 90, 220);
const FLOW_SERIES_COLOR: egui::Color32 = egui::Color32::from_rgb(30, 150, 60);
const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 40, 40);

struct GuiApp {
    session: FlowSession,
    show_formula_modal: bool,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_input: String,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 내보내기
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let inputs = FlowInputs::from_defaults(&config.session);
        let conv_kind = config.converter.kind;
        let (conv_from, conv_to) = conversion::default_units(conv_kind);
        Self {
            session: FlowSession::new(inputs, config.chart.steps),
            show_formula_modal: false,
            conv_kind,
            conv_input: String::new(),
            conv_from: conv_from.into(),
            conv_to: conv_to.into(),
            conv_result: None,
            export_status: None,
        }
    }

    fn set_conv_kind(&mut self, kind: QuantityKind) {
        self.conv_kind = kind;
        let (from, to) = conversion::default_units(kind);
        self.conv_from = from.into();
        self.conv_to = to.into();
        self.conv_result = None;
    }

    fn run_conversion(&mut self) {
        let value = self.conv_input.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.conv_result = Some(conversion::convert_for_display(
            self.conv_kind,
            value,
            &self.conv_from,
            &self.conv_to,
        ));
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        ui.heading("Engineering Unit Converter");
        ui.horizontal(|ui| {
            ui.label("Category:");
            let mut kind = self.conv_kind;
            egui::ComboBox::from_id_source("conv_kind")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for k in conversion::measures() {
                        ui.selectable_value(&mut kind, *k, k.label());
                    }
                });
            if kind != self.conv_kind {
                self.set_conv_kind(kind);
            }
            let units = conversion::possibilities(self.conv_kind);
            ui.label("From:");
            unit_combo(ui, "conv_from", &mut self.conv_from, &units);
            ui.label("To:");
            unit_combo(ui, "conv_to", &mut self.conv_to, &units);
        });
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.conv_input)
                    .hint_text(format!("Enter value in {}", self.conv_from))
                    .desired_width(150.0),
            );
            if ui.button("Convert").clicked() {
                self.run_conversion();
            }
            if let Some(res) = &self.conv_result {
                ui.label(format!("Result: {res} {}", self.conv_to));
            }
        });
    }

    fn ui_flow_rate(&mut self, ui: &mut egui::Ui) {
        ui.heading("Flow Rate Calculator");
        let inputs = *self.session.inputs();
        ui.horizontal(|ui| {
            ui.label(format!("Dia: {}\"", inputs.diameter_in));
            ui.separator();
            ui.label("Vel:");
            let mut velocity = inputs.velocity_mps;
            let resp = ui.add(egui::DragValue::new(&mut velocity).speed(0.1).suffix(" m/s"));
            if resp.changed() {
                self.session.set_velocity(velocity);
            }
            ui.separator();
            let q = self.session.flow_rate();
            ui.label(format!("Q: {}", q.display_text()));
            if !q.is_valid() {
                let warn = ui.visuals().warn_fg_color;
                ui.colored_label(warn, "diameter and velocity must be > 0");
            }
        });
    }

    fn ui_pressure_drop(&mut self, ui: &mut egui::Ui) {
        ui.heading("Pressure Drop Graph");
        let inputs = *self.session.inputs();

        ui.horizontal(|ui| {
            ui.label("Pipe Type:");
            let mut material = inputs.material.name;
            egui::ComboBox::from_id_source("pipe_material")
                .selected_text(material)
                .show_ui(ui, |ui| {
                    for m in material_db::materials() {
                        ui.selectable_value(&mut material, m.name, m.name);
                    }
                });
            if material != inputs.material.name {
                if let Err(e) = self.session.select_material(material) {
                    tracing::warn!(%e, "material selection rejected");
                }
            }

            ui.label("Diameter:");
            let current = *self.session.inputs();
            let mut diameter = current.diameter_in;
            egui::ComboBox::from_id_source("pipe_diameter")
                .selected_text(format!("{diameter}\""))
                .show_ui(ui, |ui| {
                    for d in current.material.diameters_in {
                        ui.selectable_value(&mut diameter, *d, format!("{d}\""));
                    }
                });
            if diameter != current.diameter_in {
                if let Err(e) = self.session.select_diameter(diameter) {
                    tracing::warn!(%e, "diameter selection rejected");
                }
            }

            ui.label("Length:");
            let mut length = inputs.pipe_length_m;
            egui::ComboBox::from_id_source("pipe_length")
                .selected_text(format!("{length} m"))
                .show_ui(ui, |ui| {
                    for l in PIPE_LENGTH_CHOICES_M {
                        ui.selectable_value(&mut length, l, format!("{l} m"));
                    }
                });
            if length != inputs.pipe_length_m {
                self.session.set_pipe_length(length);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Fluid Type:");
            let mut fluid = inputs.fluid.name;
            egui::ComboBox::from_id_source("fluid")
                .selected_text(fluid)
                .show_ui(ui, |ui| {
                    for f in material_db::fluids() {
                        ui.selectable_value(&mut fluid, f.name, f.name);
                    }
                });
            if fluid != inputs.fluid.name {
                if let Err(e) = self.session.select_fluid(fluid) {
                    tracing::warn!(%e, "fluid selection rejected");
                }
            }
            let fluid = self.session.inputs().fluid;
            ui.label(format!("Viscosity: {} Pa·s", fluid.viscosity_pa_s));
            ui.label(format!("Density: {} kg/m³", fluid.density_kg_per_m3));
        });

        let result = self.session.result();
        ui.horizontal(|ui| {
            ui.label(format!("Reynolds Number: {}", result.reynolds_text()));
            ui.separator();
            ui.label(format!("Flow Regime: {}", result.regime));
        });
        ui.add_space(8.0);

        draw_chart(ui, &Chart::along_length(result), LENGTH_SERIES_COLOR);
        ui.add_space(12.0);
        draw_chart(ui, &Chart::flow_sweep(result), FLOW_SERIES_COLOR);
    }

    fn export_csv(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("pressure_drop.csv")
            .save_file()
        else {
            return;
        };
        self.export_status = Some(match export::write_series_csv(&path, self.session.result()) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => format!("Export failed: {e}"),
        });
    }

    fn export_json(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("flow_result.json")
            .save_file()
        else {
            return;
        };
        self.export_status = Some(match export::write_result_json(&path, self.session.result()) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => format!("Export failed: {e}"),
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Engineering Toolkit");
                ui.separator();
                if ui.button("Formula reference").clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button("Export CSV").clicked() {
                    self.export_csv();
                }
                if ui.button("Export JSON").clicked() {
                    self.export_json();
                }
                if let Some(msg) = &self.export_status {
                    ui.label(msg);
                }
            });
        });

        if self.show_formula_modal {
            egui::Window::new("Formula reference")
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.label("Flow rate: Q = π·(d/2)²·v, d = inches × 0.0254.");
                    ui.label("Reynolds: Re = ρ·v·d / μ. Laminar < 2000 ≤ Transitional ≤ 4000 < Turbulent.");
                    ui.label("Pressure drop: k = 8·ε / d⁵, ΔP/m = k·Q².");
                    ui.separator();
                    ui.label("ΔP is a proportional quantity: no kPa calibration is applied.");
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    egui::Frame::group(ui.style()).show(ui, |ui| self.ui_unit_conv(ui));
                    ui.add_space(8.0);
                    egui::Frame::group(ui.style()).show(ui, |ui| self.ui_flow_rate(ui));
                    ui.add_space(8.0);
                    egui::Frame::group(ui.style()).show(ui, |ui| self.ui_pressure_drop(ui));
                });
        });
    }
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, units: &[&'static str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for u in units {
                ui.selectable_value(value, u.to_string(), *u);
            }
        });
}

/// 데이터 좌표를 그림 영역 안의 화면 좌표로 옮긴다. y축은 위로 증가한다.
fn map_point(plot: egui::Rect, x: (f64, f64), y: (f64, f64), p: SeriesPoint) -> egui::Pos2 {
    let tx = ((p.x - x.0) / (x.1 - x.0)) as f32;
    let ty = ((p.y - y.0) / (y.1 - y.0)) as f32;
    egui::pos2(
        plot.left() + tx * plot.width(),
        plot.bottom() - ty * plot.height(),
    )
}

fn draw_chart(ui: &mut egui::Ui, chart: &Chart, color: egui::Color32) {
    ui.label(egui::RichText::new(chart.title).strong());
    ui.horizontal(|ui| {
        ui.colored_label(color, "━");
        ui.label(egui::RichText::new(chart.series_label).small());
        ui.separator();
        ui.label(egui::RichText::new(chart.y_title).small());
    });
    let size = egui::vec2(ui.available_width().max(240.0), 220.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let outer = response.rect;
    let plot = egui::Rect::from_min_max(
        outer.min + egui::vec2(64.0, 8.0),
        outer.max - egui::vec2(12.0, 36.0),
    );
    let text_color = ui.visuals().text_color();
    let axis = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
    let small = egui::FontId::proportional(11.0);
    painter.rect_stroke(plot, 0.0, axis);

    let xb = chart.x_bounds();
    let yb = chart.y_bounds();
    let points: Vec<egui::Pos2> = chart
        .points
        .iter()
        .map(|p| map_point(plot, xb, yb, *p))
        .collect();
    if points.len() > 1 {
        painter.add(egui::Shape::line(points.clone(), egui::Stroke::new(2.0, color)));
    }
    for p in &points {
        painter.circle_filled(*p, 3.0, color);
    }

    // 눈금 라벨은 최대 6개 정도만
    let labels = chart.x_labels();
    let every = (labels.len() / 5).max(1);
    for (i, (label, p)) in labels.iter().zip(&points).enumerate() {
        if i % every == 0 || i + 1 == labels.len() {
            painter.text(
                egui::pos2(p.x, plot.bottom() + 4.0),
                egui::Align2::CENTER_TOP,
                label,
                small.clone(),
                text_color,
            );
        }
    }
    painter.text(
        egui::pos2(plot.left() - 4.0, plot.top()),
        egui::Align2::RIGHT_TOP,
        format!("{:.2e}", yb.1),
        small.clone(),
        text_color,
    );
    painter.text(
        egui::pos2(plot.left() - 4.0, plot.bottom()),
        egui::Align2::RIGHT_BOTTOM,
        format!("{:.2e}", yb.0),
        small.clone(),
        text_color,
    );
    painter.text(
        egui::pos2(plot.center().x, outer.bottom()),
        egui::Align2::CENTER_BOTTOM,
        chart.x_title,
        small,
        text_color,
    );

    if let Some(marker) = &chart.marker {
        let top = map_point(plot, xb, yb, SeriesPoint { x: marker.x, y: yb.1 });
        let stroke = egui::Stroke::new(2.0, MARKER_COLOR);
        painter.line_segment([top, egui::pos2(top.x, plot.bottom())], stroke);
        painter.text(
            top + egui::vec2(4.0, 2.0),
            egui::Align2::LEFT_TOP,
            &marker.label,
            egui::FontId::proportional(13.0),
            MARKER_COLOR,
        );
    }

    if let Some(pos) = response.hover_pos() {
        let nearest = points
            .iter()
            .zip(&chart.points)
            .min_by(|a, b| {
                let da = (a.0.x - pos.x).abs();
                let db = (b.0.x - pos.x).abs();
                da.total_cmp(&db)
            });
        if let Some((_, p)) = nearest {
            response.on_hover_text(format!("x = {:.4}, ΔP = {:.4e}", p.x, p.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_from_config_defaults() {
        let app = GuiApp::new(config::Config::default());
        let inputs = app.session.inputs();
        assert_eq!(inputs.material.name, "Steel - Commercial");
        assert_eq!(inputs.diameter_in, 0.5);
        assert_eq!(inputs.fluid.name, "Water");
        assert_eq!(app.conv_from, "mm");
        assert_eq!(app.conv_to, "cm");
    }

    #[test]
    fn changing_category_resets_units_and_result() {
        let mut app = GuiApp::new(config::Config::default());
        app.conv_input = "1".into();
        app.run_conversion();
        assert_eq!(app.conv_result.as_deref(), Some("0.1000"));
        app.set_conv_kind(QuantityKind::Pressure);
        assert_eq!(app.conv_from, "Pa");
        assert_eq!(app.conv_to, "kPa");
        assert!(app.conv_result.is_none());
    }

    #[test]
    fn empty_converter_input_shows_sentinel() {
        let mut app = GuiApp::new(config::Config::default());
        app.run_conversion();
        assert_eq!(
            app.conv_result.as_deref(),
            Some(conversion::CONVERSION_ERROR)
        );
    }

    #[test]
    fn map_point_hits_plot_corners() {
        let plot = egui::Rect::from_min_max(egui::pos2(10.0, 20.0), egui::pos2(110.0, 220.0));
        let origin = map_point(plot, (0.0, 1.0), (0.0, 2.0), SeriesPoint { x: 0.0, y: 0.0 });
        let far = map_point(plot, (0.0, 1.0), (0.0, 2.0), SeriesPoint { x: 1.0, y: 2.0 });
        assert_eq!(origin, egui::pos2(10.0, 220.0));
        assert_eq!(far, egui::pos2(110.0, 20.0));
    }
}
