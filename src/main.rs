// SidSort - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Either a terminal run or the GUI launch (--gui)

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use sidsort::app;
pub use sidsort::core;
pub use sidsort::platform;
pub use sidsort::util;

use clap::Parser;
use std::path::PathBuf;

/// SidSort - VLF data repository filing tool.
///
/// Renames VLF receiver log files to the repository naming convention
/// UT<date>_VLF_<observer>.<ext> and files them into a date-derived
/// directory tree under the output root, copying only files not already
/// present there.
#[derive(Parser, Debug)]
#[command(name = "SidSort", version, about)]
struct Cli {
    /// Input directory containing the raw receiver files.
    #[arg(short = 'i', long = "input", default_value = "./")]
    input: PathBuf,

    /// Output directory for the renamed copies (created if missing).
    #[arg(short = 'o', long = "output", default_value = "./")]
    output: PathBuf,

    /// Observer name credited in every renamed file.
    #[arg(short = 'n', long = "observer", default_value = util::constants::OBSERVER_NAMES[0])]
    observer: String,

    /// Launch the desktop window instead of running in the terminal.
    #[arg(long = "gui")]
    gui: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        gui = cli.gui,
        "SidSort starting"
    );

    if cli.gui {
        if let Err(e) = gui::run(cli.observer) {
            tracing::error!(error = %e, "Failed to launch GUI");
            eprintln!("Error: Failed to launch SidSort GUI: {e}");
            std::process::exit(1);
        }
        return;
    }

    println!(
        "{} v{} started at {}",
        util::constants::APP_NAME,
        util::constants::APP_VERSION,
        chrono::Local::now().format("%H:%M:%S")
    );
    println!("Sorting files in {}", cli.input.display());
    println!("Outputting renamed files in {}", cli.output.display());

    let config = crate::core::model::RunConfig::new(cli.input, cli.output, cli.observer);

    match app::sort::run_sort(&config, print_event) {
        Ok(summary) => {
            if summary.files_skipped > 0 {
                println!("Skipped files = {}", summary.files_skipped);
            }
            println!(
                "{} finished at {}",
                util::constants::APP_NAME,
                chrono::Local::now().format("%H:%M:%S")
            );
            println!(
                "Files copied = {} in {:.3} seconds",
                summary.files_copied,
                summary.duration.as_secs_f64()
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Sort failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Terminal rendering of per-file progress events.
fn print_event(event: &crate::core::model::SortEvent) {
    use crate::core::model::SortEvent;
    match event {
        SortEvent::Copied { source, dest } => {
            println!("{} >> {}", source.display(), dest.display());
        }
        SortEvent::AlreadyExists { dest } => {
            println!("{} - file already exists!", dest.display());
        }
        SortEvent::Skipped { file, reason } => {
            println!("{file} skipped ({reason})");
        }
        SortEvent::Warning { message } => {
            eprintln!("Warning: {message}");
        }
        SortEvent::ReportWritten { path } => {
            println!("Skipped file report = {}", path.display());
        }
    }
}
