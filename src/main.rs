//! Command-line front end.
//!
//! Usage:
//!   tiny-translator [lang] words...   # Translate and print the arguments
//!   tiny-translator --languages       # List supported languages
//!   tiny-translator --dump            # Print the dictionary as JSON
//!
//! Words are dictionary keys (`not_supported`) or free text. Integers,
//! decimals, `true`/`false` and `:` are recognised as such.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tiny_translator::config::Config;
use tiny_translator::{Arg, Translator};
use tracing::{debug, info};

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout only carries translations)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tiny_translator=info".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    debug!("Requested language: {}", config.default_language);

    let translator = Translator::new(config.translator_options().sink(io::stdout()));
    let words: Vec<String> = std::env::args().skip(1).collect();

    match words.first().map(String::as_str) {
        Some("--languages") => {
            let mut out = io::stdout().lock();
            for code in translator.supported_languages() {
                writeln!(out, "{}", code)?;
            }
        }
        Some("--dump") => {
            let json = serde_json::to_string_pretty(translator.dictionary().entries())
                .context("Failed to serialize dictionary")?;
            writeln!(io::stdout(), "{}", json)?;
        }
        Some(_) => {
            let args: Vec<Arg<'_>> = words.iter().map(|word| parse_arg(word)).collect();
            translator.print(&args);
            writeln!(io::stdout())?;
        }
        None => {
            info!(
                "Nothing to translate. Usage: tiny-translator [{}] words...",
                translator.supported_languages().join("|")
            );
        }
    }

    Ok(())
}

/// Interpret one command-line word.
fn parse_arg(word: &str) -> Arg<'_> {
    if word == ":" {
        return Arg::Char(':');
    }
    if let Ok(n) = word.parse::<i128>() {
        return Arg::Int(n);
    }
    if let Ok(b) = word.parse::<bool>() {
        return Arg::Bool(b);
    }
    match word.parse::<f64>() {
        Ok(x) if x.is_finite() && word.contains('.') => Arg::Float(x),
        _ => Arg::from(word),
    }
}
