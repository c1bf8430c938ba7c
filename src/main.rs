//! xdo
//!
//! Perform one action (close, kill, hide, show, activate, key, button) on
//! the windows selected by explicit IDs or by criteria relative to the
//! active window, then exit.

mod action;
mod cli;
mod config;
mod criteria;
mod error;
mod resolve;
mod wm;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use action::{dispatch_all, DispatchReport};
use cli::Cli;
use config::Config;
use resolve::{resolve, Request};
use wm::session::X11Session;
use wm::{WindowControl, WindowDirectory};

fn main() -> Result<()> {
    // Logs go to stderr; stdout is left for usage and version output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("XDO_LOG")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if cli.version {
        println!("{}", Cli::version_string());
        return Ok(());
    }
    let Some(request) = cli.into_request() else {
        anyhow::bail!("No action given");
    };
    debug!("Request: {:?}", request);

    let config = Config::load()?;

    let session = X11Session::connect(&config)?;
    execute(&session, &session, &request)?;
    session.flush().context("Failed to flush requests")?;

    Ok(())
}

/// Resolve the targets of `request` and dispatch its action to each one.
///
/// Resolution errors abort before anything is dispatched; dispatch errors
/// are only reported.
fn execute<D, C>(directory: &D, control: &C, request: &Request) -> error::Result<DispatchReport>
where
    D: WindowDirectory + ?Sized,
    C: WindowControl + ?Sized,
{
    let targets = resolve(directory, request)?;
    if !targets.invalid.is_empty() {
        debug!("Skipped {} invalid window ID(s)", targets.invalid.len());
    }
    Ok(dispatch_all(request.action, control, &targets.windows))
}
