use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use feed_cli::{commands, Cli, FileStore, TerminalPrompt, UreqTransport};
use feed_core::{Dashboard, PostApi, PostClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Views go to stdout; keep logs on stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let state_path = cli.state_path();
    let store = FileStore::open(&state_path)
        .with_context(|| format!("failed to open state file {}", state_path.display()))?;
    let api = PostApi::new(PostClient::new(&cli.api_url), UreqTransport::new());
    let prompt = TerminalPrompt::new(cli.assume_yes());
    let mut dash = Dashboard::new(api, store, prompt);

    tracing::debug!(api_url = %cli.api_url, command = ?cli.command, "running command");
    let ok = commands::run(&mut dash, cli.command, &mut io::stdout().lock())?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
