//! Renders the site footer to static HTML.
//!
//! Usage: cargo run -p prerender -- [OUTPUT] [--document] [--hydratable]

mod args;
mod render;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::args::PrerenderArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = telemetry::get_subscriber("info");
    telemetry::init_subscriber(subscriber)?;

    let args = PrerenderArgs::parse();
    let html = render::render(&args).await;

    match args.destination() {
        Some(path) => {
            tokio::fs::write(path, &html)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote footer to {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(html.as_bytes())
                .await
                .context("writing to stdout")?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
