//! factsift entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use factsift_cli::cli::{Cli, Commands};
use factsift_cli::config::RuntimeOpts;
use factsift_cli::{doctor, launch_pipeline, run_once, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.logging.init();

    let result = match cli.command {
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_once(cli.url.as_deref(), cli.query.as_deref(), &mut out, || {
                launch_pipeline(&cli.runtime)
            })
            .await
        }

        Some(Commands::Serve { host, port }) => serve(&host, port, &cli.runtime).await,

        Some(Commands::Doctor) => {
            let stdout = std::io::stdout();
            doctor::run(&cli.runtime, &mut stdout.lock()).map(|_| ())
        }

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "factsift", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success (including the missing-argument record), 1=error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}

async fn serve(host: &str, port: u16, runtime: &RuntimeOpts) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;
    let pipeline = launch_pipeline(runtime).await?;
    server::start(addr, Arc::new(pipeline)).await
}
