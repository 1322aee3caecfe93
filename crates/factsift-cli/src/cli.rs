//! Command-line surface.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{LogOpts, RuntimeOpts};

#[derive(Parser, Debug)]
#[command(
    name = "factsift",
    about = "factsift — extract one fact from a rendered web page",
    version,
    args_conflicts_with_subcommands = true,
    after_help = "With URL and QUERY, prints one JSON object to stdout:\n  {\"url\": ..., \"query\": ..., \"extracted_data\": ...}\nLogs go to stderr."
)]
pub struct Cli {
    /// Page to render, e.g. https://example.com/listing/42
    pub url: Option<String>,

    /// Fact to extract, e.g. "price"
    pub query: Option<String>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true)]
    pub extra: Vec<String>,

    #[command(flatten)]
    pub runtime: RuntimeOpts,

    #[command(flatten)]
    pub logging: LogOpts,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve `GET /scrape?url=...&query=...` over HTTP.
    Serve {
        /// Listen IP address.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Listen port.
        #[arg(long, default_value_t = 6000)]
        port: u16,
    },

    /// Check that a browser and API key are available.
    Doctor,

    /// Generate shell completion scripts.
    ///
    /// Example:
    ///   factsift completions zsh > ~/.zfunc/_factsift
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}
