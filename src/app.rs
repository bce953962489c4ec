use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, ConfigError, LogLevel, DEFAULT_CONFIG_PATH};
use crate::conversion::{self, ConversionError};
use crate::export::{self, ExportError};
use crate::quantity::QuantityKind;
use crate::session::{FlowInputs, FlowSession, SessionError};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging setup failed: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// 배관 유량/레이놀즈수/압력강하 계산 도구
#[derive(Debug, Parser)]
#[command(name = "pipe_flow_toolkit", version, about, long_about = None)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 로그 레벨. 지정하지 않으면 설정 파일 값을 따른다.
    #[arg(short, long, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 유량, 레이놀즈수, 압력강하 시리즈 계산
    Flow(FlowArgs),
    /// 단위 변환
    Convert {
        #[arg(value_enum)]
        kind: QuantityKind,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 물리량 또는 단위 목록
    Units {
        #[arg(value_enum)]
        kind: Option<QuantityKind>,
    },
    /// 배관 재질 테이블
    Materials,
    /// 유체 물성 테이블
    Fluids,
    /// 대화형 메뉴 (기본값)
    Menu,
}

/// 생략한 항목은 설정 파일의 세션 기본값을 사용한다.
#[derive(Debug, Default, Args)]
pub struct FlowArgs {
    /// 배관 재질 이름 (예: "Cast Iron")
    #[arg(long)]
    pub material: Option<String>,
    /// 호칭경 [inch]. 재질이 허용하는 값이어야 한다.
    #[arg(long)]
    pub diameter: Option<f64>,
    /// 배관 길이 [m]
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<f64>,
    /// 유체 이름 (예: "Water")
    #[arg(long)]
    pub fluid: Option<String>,
    /// 유속 [m/s]
    #[arg(long, allow_negative_numbers = true)]
    pub velocity: Option<f64>,
    /// 시리즈 분할 수
    #[arg(long)]
    pub steps: Option<usize>,
    /// 결과를 JSON으로 출력
    #[arg(long)]
    pub json: bool,
    /// 압력강하 시리즈 표도 출력
    #[arg(long)]
    pub table: bool,
}

/// 설정 기본값 위에 명령행 값을 적용한 세션을 만든다.
pub fn session_for(args: &FlowArgs, config: &Config) -> Result<FlowSession, AppError> {
    let inputs = FlowInputs::from_defaults(&config.session);
    let mut session = FlowSession::new(inputs, args.steps.unwrap_or(config.chart.steps));
    if let Some(material) = &args.material {
        session.select_material(material)?;
    }
    if let Some(diameter) = args.diameter {
        session.select_diameter(diameter)?;
    }
    if let Some(length) = args.length {
        session.set_pipe_length(length);
    }
    if let Some(fluid) = &args.fluid {
        session.select_fluid(fluid)?;
    }
    if let Some(velocity) = args.velocity {
        session.set_velocity(velocity);
    }
    Ok(session)
}

/// 명령을 실행한다. 명령이 없으면 대화형 메뉴를 띄운다.
pub fn run(command: Option<Command>, config: &Config) -> Result<(), AppError> {
    match command.unwrap_or(Command::Menu) {
        Command::Flow(args) => {
            let session = session_for(&args, config)?;
            if args.json {
                println!("{}", export::result_json(session.result())?);
            } else {
                ui_cli::print_flow_summary(session.inputs(), session.result());
                if args.table {
                    ui_cli::print_series_tables(session.result());
                }
            }
        }
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result:.4} {to}");
        }
        Command::Units { kind } => ui_cli::print_units(kind),
        Command::Materials => ui_cli::print_materials(),
        Command::Fluids => ui_cli::print_fluids(),
        Command::Menu => menu_loop(config)?,
    }
    Ok(())
}

fn menu_loop(config: &Config) -> Result<(), AppError> {
    let inputs = FlowInputs::from_defaults(&config.session);
    let mut session = FlowSession::new(inputs, config.chart.steps);
    loop {
        match ui_cli::main_menu()? {
            ui_cli::MenuChoice::UnitConversion => {
                ui_cli::handle_unit_conversion(config.converter.kind)?
            }
            ui_cli::MenuChoice::FlowRate => ui_cli::handle_flow_rate(&mut session)?,
            ui_cli::MenuChoice::PressureDrop => ui_cli::handle_pressure_drop(&mut session)?,
            ui_cli::MenuChoice::ReferenceTables => {
                ui_cli::print_materials();
                ui_cli::print_fluids();
            }
            ui_cli::MenuChoice::Exit => break,
        }
    }
    Ok(())
}
