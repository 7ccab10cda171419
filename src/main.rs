use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use bioeval::content::{Language, ModuleId};
use bioeval::core::config;
use bioeval::core::state::App;
use bioeval::export::{FileSink, export_report};
use bioeval::tui;

#[derive(Parser)]
#[command(
    name = "bioeval",
    about = "Bilingual evaluation dashboard for biological AI agents"
)]
struct Args {
    /// Display language
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Module to open at startup
    #[arg(short, long, value_enum)]
    module: Option<ModuleId>,

    /// Directory for exported CSV reports
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Write the selected module's report and exit without entering the TUI
    #[arg(long)]
    export: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to bioeval.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("bioeval.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("bioeval: {e}");
            log::warn!("Falling back to default config: {e}");
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.language, args.module, args.export_dir);
    log::info!("Bioeval starting up: {:?}", resolved);

    // Headless export: write the report and exit
    if args.export {
        let app = App::from_config(&resolved);
        let sink = FileSink::new(app.export_dir.clone());
        let path = export_report(app.active_record(), &sink)?;
        println!("{}", path.display());
        return Ok(());
    }

    tui::run(resolved)
}
