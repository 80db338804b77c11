//! main.rs
//! Entry point for cds

use cds::app::AppState;
use cds::config::Config;
use cds::core::terminal;
use cds::utils::cli::{CliAction, handle_args};
use cds::utils::{get_home, is_path_ok, resolve_input_path};

use std::path::PathBuf;
use std::process;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stderr = std::io::stderr();
        let _ = crossterm::execute!(
            stderr,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[cds] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let action = handle_args();

    if let CliAction::Exit = action {
        return;
    }

    init_logging();

    let config = Config::load();
    if !config.editor().exists() {
        log::warn!("editor '{}' not found in PATH", config.editor().program());
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => fail(&format!("cannot read the current directory: {}", e)),
    };

    let start = match action {
        CliAction::RunAppAtPath(path_arg) => {
            let home = get_home();
            if !is_path_ok(&path_arg, &cwd, &home) {
                fail(&format!("Path '{}' cannot be opened.", path_arg));
            }
            resolve_input_path(&path_arg, &cwd, &home)
        }
        _ => PathBuf::from(&cwd),
    };

    let mut app = match AppState::new(&config, &start) {
        Ok(app) => app,
        Err(e) => fail(&e.to_string()),
    };

    match terminal::run_terminal(&mut app) {
        Ok(Some(cmd)) => println!("{}", cmd),
        Ok(None) => {}
        Err(e) => fail(&e.to_string()),
    }
}

/// Logs to the file named by `CDS_LOG`. Without it nothing is logged.
fn init_logging() {
    let Ok(log_file) = std::env::var("CDS_LOG") else {
        return;
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("[cds] Cannot open log file {}: {}", log_file, e);
            return;
        }
    };

    let level = std::env::var("CDS_LOG_LEVEL")
        .ok()
        .and_then(|l| l.parse().ok())
        .unwrap_or(log::LevelFilter::Debug);

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .filter_level(level)
        .init();

    log::info!("cds {} starting up", env!("CARGO_PKG_VERSION"));
}

fn fail(msg: &str) -> ! {
    log::error!("{}", msg);
    eprintln!("[cds] Error: {}", msg);
    process::exit(1);
}
