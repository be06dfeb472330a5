//! CLI administration tool for url-shortener.
//!
//! Inspects the short code scheme offline, without a running service.
//! The lookup table lives inside the server process, so nothing here
//! reads or changes stored links.
//!
//! # Usage
//!
//! ```bash
//! # Short code for an identifier
//! cargo run --bin admin -- encode 37
//!
//! # Identifier behind a short code
//! cargo run --bin admin -- decode bb
//!
//! # Canonical form the service would store for a URL
//! cargo run --bin admin -- canonicalize "www.nintex.com/?"
//! ```

use url_shortener::application::services::shortener_service::{
    URL_INVALID_MESSAGE, URL_MISSING_MESSAGE,
};
use url_shortener::utils::numeral_codec::{self, ALPHABET};
use url_shortener::utils::url_canonicalizer;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting url-shortener codes and URLs.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the short code of an identifier
    Encode {
        /// Sequential identifier (0 is the first stored URL)
        id: u64,
    },

    /// Print the identifier behind a short code
    Decode {
        /// Short code, e.g. "bb"
        code: String,
    },

    /// Print the canonical form of a URL
    Canonicalize {
        /// Raw URL as it would be submitted to /shorten
        url: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { id } => encode(id),
        Commands::Decode { code } => decode(&code),
        Commands::Canonicalize { url } => canonicalize(&url),
    }

    Ok(())
}

fn encode(id: u64) {
    let code = numeral_codec::encode(id);

    println!("{}", "🔗 Encode".bright_blue().bold());
    println!();
    println!("  ID:   {}", id.to_string().cyan());
    println!("  Code: {}", code.bright_yellow().bold());
}

fn decode(code: &str) {
    println!("{}", "🔍 Decode".bright_blue().bold());
    println!();

    match numeral_codec::decode(code) {
        Ok(id) => {
            println!("  Code: {}", code.cyan());
            println!("  ID:   {}", id.to_string().bright_yellow().bold());

            let normalized = numeral_codec::encode(id);
            if normalized != code {
                println!();
                println!(
                    "  {} leading '{}' symbols are zero digits, canonical code is {}",
                    "Note:".yellow(),
                    &ALPHABET[..1],
                    normalized.bright_yellow()
                );
            }
        }
        Err(e) => {
            println!("{}", format!("❌ {e}").red());
            println!();
            println!("  Alphabet: {}", ALPHABET.bright_black());
        }
    }
}

fn canonicalize(url: &str) {
    println!("{}", "🧭 Canonicalize".bright_blue().bold());
    println!();

    if url.trim().is_empty() {
        println!("{}", format!("❌ {URL_MISSING_MESSAGE}").red());
        return;
    }

    match url_canonicalizer::canonicalize(url) {
        Ok(canonical) => {
            println!("  Input:     {}", url.cyan());
            println!("  Canonical: {}", canonical.bright_yellow().bold());
        }
        Err(e) => {
            println!("{}", format!("❌ {URL_INVALID_MESSAGE}").red());
            println!("  {}", e.to_string().bright_black());
        }
    }
}
