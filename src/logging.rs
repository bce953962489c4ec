use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::FmtSubscriber;

use crate::config::LogLevel;

/// 전역 tracing 구독자를 설치한다. 로그는 stderr로 보내 stdout(JSON 출력 등)과 섞이지 않게 한다.
pub fn init(level: LogLevel) -> Result<(), SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::from(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
