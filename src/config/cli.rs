use super::FolioConfig;
use crate::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gv-folio")]
#[command(about = "Terminal portfolio with a typing intro and quote requests")]
pub struct Cli {
    /// Form relay endpoint receiving quote requests
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Delay between typed characters on the intro, in milliseconds
    #[arg(long)]
    pub typing_delay_ms: Option<u64>,

    /// Open directly on the main screen
    #[arg(long)]
    pub skip_intro: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the configuration file and apply command-line overrides
    pub fn resolve_config(&self) -> Result<FolioConfig> {
        let config = match &self.config {
            Some(path) => FolioConfig::load_from(path)?,
            None => FolioConfig::load()?,
        };
        let config = self.apply(config);
        config.validate()?;
        Ok(config)
    }

    /// Overrides given on the command line win over the file
    pub fn apply(&self, mut config: FolioConfig) -> FolioConfig {
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        if let Some(delay) = self.typing_delay_ms {
            config = config.with_typing_delay_ms(delay);
        }
        config
    }
}
