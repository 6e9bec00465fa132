//! Replay entry point.

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: airpaint <session.json>");
        return ExitCode::FAILURE;
    };

    match airpaint_app::run(&path) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            log::error!("replay failed: {error}");
            eprintln!("replay failed: {error}");
            ExitCode::FAILURE
        }
    }
}
