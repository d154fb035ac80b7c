//! # lite news
//!
//! A small proxy that re-renders news sites as lightweight pages. Each
//! request fetches one upstream page, extracts its structure by walking the
//! parsed HTML tree (class-token and fixed-position navigation, no schema
//! guarantees), and renders the typed records through minimal templates.
//!
//! ## Usage
//!
//! ```sh
//! lite_news --bind 127.0.0.1:7001
//! ```
//!
//! Then open `/life` or `/artlebedev` for a listing, and follow a teaser to
//! `/{site}/p/{...}` for the re-rendered article.
//!
//! ## Architecture
//!
//! raw bytes → parsed [`dom::Node`] tree → [`select`] queries →
//! [`extract`] assembles typed records per [`sites::SiteProfile`] →
//! [`render`] emits output markup, served by [`server`].

use clap::Parser;
use std::error::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod dom;
mod error;
mod extract;
mod models;
mod render;
mod select;
mod server;
mod sites;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    info!(bind = %args.bind, sites = sites::ALL.len(), "lite_news starting up");

    let app = server::router();
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!(bind = %args.bind, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
