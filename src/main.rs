#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use {
    clap::Parser,
    eframe::NativeOptions,
    sma_dashboard::{
        Cli, DashboardConfig, ViewOutcome, app::DEFAULT_SYMBOL, config::PERSISTENCE,
        export_charts, run_app,
    },
    std::{
        panic,
        path::{Path, PathBuf},
        process::ExitCode,
    },
};

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("sma_dashboard"), my_code_level)
        .init();
}

fn run_export(args: &Cli, config: &DashboardConfig, out_dir: &Path) -> ExitCode {
    let symbol = args.symbol.clone().unwrap_or_else(|| DEFAULT_SYMBOL.to_string());
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(export_charts(&symbol, out_dir, config, args.api_config())) {
        Ok(report) => {
            for outcome in &report.outcomes {
                match outcome {
                    ViewOutcome::Rendered { title, .. } => println!("✔ {}", title),
                    ViewOutcome::Failed { title, error, .. } => {
                        eprintln!("✘ {}: {:#}", title, error)
                    }
                }
            }
            if report.all_rendered() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Export for {} failed: {:#}", symbol, e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    init_log();

    let args = Cli::parse();
    let config = match args.dashboard_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("⚠️  Invalid view configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(out_dir) = &args.export {
        return run_export(&args, &config, out_dir);
    }

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_title("SMA Dashboard"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "SMA Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args, config)))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("GUI exited with error: {}", e);
            ExitCode::FAILURE
        }
    }
}
