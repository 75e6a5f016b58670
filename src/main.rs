//! Bookshelf
//!
//! Desktop catalog for users, books, genres, authors and reviews
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use bookshelf_core::CatalogConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   📚 Bookshelf v{:<42}║", bookshelf_ui::VERSION);
    println!("║   Book catalog for users, books, genres and reviews      ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let config = CatalogConfig::load().context("Failed to load bookshelf.toml")?;
    tracing::info!("Catalog API: {}", config.api_base_url);

    // Launch the Dioxus desktop application
    bookshelf_ui::launch(&config).context("Failed to start the catalog client")?;
    Ok(())
}
