use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;

/// Browse, filter and page through users fetched from a remote endpoint.
#[derive(Debug, Parser)]
#[command(name = "userdeck", version, about)]
pub struct Cli {
    /// Override the users endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the initial page size (must be one of the configured options)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            page_size: self.page_size,
        }
    }
}
