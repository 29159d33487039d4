use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fterm::core::config::{self, FtermConfig};
use fterm::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "fterm",
    version,
    about = "Terminal dashboard for Fragaria members, blog posts and videos"
)]
struct Args {
    /// Config file to read instead of ./.fraga-term.toml or ~/.fraga-term.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to fterm.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("fterm.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("fterm {} starting up", env!("CARGO_PKG_VERSION"));

    let path = args.config.or_else(config::config_path);
    let file_config = match config::load_config(path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            // Printed before the alternate screen, so it is still visible after exit
            eprintln!("fterm: {e}; using defaults");
            log::warn!("{}; using defaults", e);
            FtermConfig::default()
        }
    };
    let resolved = config::resolve(&file_config);

    match tui::run(resolved) {
        Ok(()) => {
            log::info!("fterm exited cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("fterm failed: {}", e);
            eprintln!("fterm: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
