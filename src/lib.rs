//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod chart;
pub mod config;
pub mod conversion;
pub mod export;
pub mod hydraulics;
pub mod logging;
pub mod material_db;
pub mod quantity;
pub mod session;
pub mod ui_cli;
pub mod units;
