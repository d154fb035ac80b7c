//! Command-line interface definitions.
//!
//! This module defines the CLI arguments using the `clap` crate. Arguments
//! can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for the lite news proxy.
///
/// # Examples
///
/// ```sh
/// # Serve on the default address
/// lite_news
///
/// # Serve on a specific address
/// lite_news --bind 0.0.0.0:8080
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Address to serve on
    #[arg(short, long, env = "LITE_NEWS_BIND", default_value = "127.0.0.1:7001")]
    pub bind: String,
}
