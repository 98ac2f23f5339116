//! CLI argument parsing

use std::path::PathBuf;

use bx_loader::CatalogLoader;
use clap::Parser;

/// Bedrock Explorer - browse model availability and inference profiles
#[derive(Parser, Debug)]
#[command(name = "bedrock-explorer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing models.json, profiles.json and beta_models.json
    ///
    /// The files are the output of the upstream refresh job. Ignored when
    /// --base-url is given.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Base URL serving the same three files over HTTP
    ///
    /// Example: --base-url https://models.example.net/data
    #[arg(long)]
    pub base_url: Option<String>,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the loader for the selected data source.
    pub fn loader(&self) -> CatalogLoader {
        match &self.base_url {
            Some(url) => CatalogLoader::from_base_url(url.clone()),
            None => CatalogLoader::from_directory(&self.data_dir),
        }
    }
}
