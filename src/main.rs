//! Entity Console
//!
//! Desktop console for defining entity fields and driving the entity,
//! demo-data and index endpoints of a backend.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use console_client::{ClientConfig, HttpBackend};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   Entity Console v{:<40}║", console_ui::VERSION);
    println!("║   Entity definition, demo data and indexes                ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let config = ClientConfig::from_env().context("invalid backend configuration")?;
    let backend = HttpBackend::new(config).context("failed to build HTTP client")?;
    tracing::info!(base_url = backend.base_url(), "backend configured");

    // Launch the Dioxus desktop application
    console_ui::launch(backend);
    Ok(())
}
