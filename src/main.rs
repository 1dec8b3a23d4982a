//! Command line front end for odataq.
//!
//! `odataq build [FILE]` reads a JSON query spec and prints the query string.
//! `odataq normalize [FILE] [--display]` reads a JSON response and prints it
//! in canonical form, or the display properties of each entity.
//!
//! Both read standard input when no file is given. Settings are described in
//! the `settings` module; logs go to standard error.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use odataq::response::{normalize, select_display_properties};
use odataq::settings::Settings;
use odataq::spec::QuerySpec;
use odataq::Result;

#[derive(Parser)]
#[command(name = "odataq", version, about = "OData query builder and response normalizer")]
struct Cli {
    /// Settings file (defaults to an optional odataq.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a query string from a JSON query spec
    Build {
        /// Query spec file, standard input when omitted
        file: Option<PathBuf>,
    },
    /// Bring a JSON API response into canonical shape
    Normalize {
        /// Response file, standard input when omitted
        file: Option<PathBuf>,
        /// Print the display properties of each entity instead
        #[arg(long)]
        display: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(?settings, "settings loaded");

    match run(cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "odataq failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Build { file } => {
            let spec: QuerySpec = read_input(file.as_deref())?.parse()?;
            let spec = settings.apply_defaults(spec);
            println!("{}", odataq::build(&spec));
        }
        Command::Normalize { file, display } => {
            let response: serde_json::Value = serde_json::from_str(&read_input(file.as_deref())?)?;
            let normalized = normalize(response);
            if display {
                for (i, entity) in normalized.entities.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    for (key, value) in select_display_properties(entity) {
                        match value {
                            serde_json::Value::String(s) => println!("{key}: {s}"),
                            other => println!("{key}: {other}"),
                        }
                    }
                }
            } else {
                let value = normalized.into_value();
                let text = if settings.pretty {
                    serde_json::to_string_pretty(&value)?
                } else {
                    serde_json::to_string(&value)?
                };
                println!("{text}");
            }
        }
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
