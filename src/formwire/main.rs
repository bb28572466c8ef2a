use clap::Parser;
use formwire::demo::Registration;
use formwire::{decode, encode_with, ConfigError, FormData, FormError, FormwireConfig};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Expected KEY=VALUE, got {0:?}")]
    InvalidPair(String),
}

type Result<T> = std::result::Result<T, CliError>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = cli
        .config
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let config = FormwireConfig::load(&config_dir)?;
    debug!(dir = %config_dir.display(), "loaded config");

    match cli.command {
        Some(Commands::Render) | None => handle_render(&config),
        Some(Commands::Read { pairs, query }) => handle_read(pairs, query),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "formwire=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_render(config: &FormwireConfig) -> Result<()> {
    let html = encode_with(&Registration::sample(), &config.document)?;
    println!("{}", html);
    Ok(())
}

fn handle_read(pairs: Vec<String>, query: Option<String>) -> Result<()> {
    let data = collect_submission(&pairs, query.as_deref())?;
    debug!(values = data.len(), "decoding submission");

    let mut registration = Registration::default();
    decode(&mut registration, &data)?;
    println!("{}", serde_json::to_string_pretty(&registration)?);
    Ok(())
}

fn collect_submission(pairs: &[String], query: Option<&str>) -> Result<FormData> {
    let mut data = query.map(FormData::parse_query).unwrap_or_default();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::InvalidPair(pair.clone()))?;
        data.insert(key, value);
    }
    Ok(data)
}
