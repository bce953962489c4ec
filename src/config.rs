use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::hydraulics::DEFAULT_STEPS;
use crate::quantity::QuantityKind;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 세션 시작 시 사용할 배관/유동 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDefaults {
    pub material: String,
    pub diameter_in: f64,
    pub pipe_length_m: f64,
    pub fluid: String,
    pub velocity_mps: f64,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            material: "Steel - Commercial".to_string(),
            diameter_in: 0.5,
            pipe_length_m: 100.0,
            fluid: "Water".to_string(),
            velocity_mps: 100.0,
        }
    }
}

/// 압력강하 차트 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// 시리즈 분할 수
    pub steps: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

/// 단위 변환기 시작 시 선택되는 물리량.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterSettings {
    pub kind: QuantityKind,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            kind: QuantityKind::Length,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// tracing 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: LogLevel,
    pub session: SessionDefaults,
    pub chart: ChartSettings,
    pub converter: ConverterSettings,
}

/// 설정 파일에서 허용하는 로그 레벨.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// 설정 파일을 읽고, 없으면 기본 설정을 만들어 저장한다.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            let cfg = Config::default();
            cfg.save(path)?;
            Ok(cfg)
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
