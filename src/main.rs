use clap::Parser;
use gv_folio::app::{App, AppState, Tui};
use gv_folio::config::Cli;
use gv_folio::{error, logging, FolioError, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "gv-folio exited with an error");
        eprintln!("❌ {}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    // A missing log file never stops the UI
    match logging::log_file_path() {
        Ok(path) => {
            if let Err(e) = logging::init_file_logger(&path, &config.log_level, cli.verbose) {
                eprintln!("⚠️  Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("⚠️  Logging disabled: {}", e),
    }

    tracing::info!(endpoint = %config.endpoint, skip_intro = cli.skip_intro, "starting gv-folio");

    let start = if cli.skip_intro {
        AppState::Main
    } else {
        AppState::Intro
    };
    let mut app = App::new(config.clone(), start)?;

    let mut tui = Tui::new(config.tick_rate()).map_err(|e| FolioError::Tui(e.to_string()))?;
    tui.init().map_err(|e| FolioError::Tui(e.to_string()))?;

    let outcome = app.run(&mut tui).await;
    tui.restore()?;

    tracing::info!("gv-folio stopped");
    outcome
}
