use clap::Parser;
use pipe_flow_toolkit::app::{self, AppError, Cli};
use pipe_flow_toolkit::{config::Config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let cfg = Config::load_or_default(&cli.config)?;
    logging::init(cli.log_level.unwrap_or(cfg.log_level))?;
    app::run(cli.command, &cfg)
}
