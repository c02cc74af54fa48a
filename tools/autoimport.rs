//! Inspect the import table of a directory tree
//!
//! `autoimport list` prints every key with the file it resolves to;
//! `autoimport get KEY...` loads keys and prints their values as JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use autoimport::utils::{env_bool, env_opt, init_logging_from_config, log_error};
use autoimport::{Imports, ImportsConfig};

#[derive(Debug, Parser)]
#[command(name = "autoimport", version, about = "Inspect name-keyed imports under a directory")]
struct Args {
    /// Root directory to index (overrides the config file)
    #[arg(long, short)]
    root: Option<PathBuf>,

    /// Config file (.json or .toml); falls back to AUTOIMPORT_CONFIG
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Index every regular file, not only recognized extensions; also set by
    /// AUTOIMPORT_ALL_FILES
    #[arg(long)]
    all_files: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List keys and the files they resolve to
    List,
    /// Load keys and print their values
    Get {
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn load_config(args: &Args) -> anyhow::Result<ImportsConfig> {
    let path = args
        .config
        .clone()
        .or_else(|| env_opt("AUTOIMPORT_CONFIG").map(PathBuf::from));

    let mut config = match path {
        Some(path) => ImportsConfig::from_file(&path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => ImportsConfig::default(),
    };

    if let Some(root) = &args.root {
        config.root = Some(root.clone());
    }
    if args.all_files || env_bool("AUTOIMPORT_ALL_FILES") {
        config.accept_all_files = true;
    }

    Ok(config)
}

fn run(args: Args) -> anyhow::Result<bool> {
    let config = load_config(&args)?;
    init_logging_from_config(config.logging.as_ref());

    let imports = Imports::with_config(&config).context("Failed to index imports")?;

    match args.command {
        Command::List => {
            for key in imports.keys() {
                if let Some(path) = imports.path_of(key) {
                    println!("{}\t{}", key, path.display());
                }
            }
            Ok(true)
        }
        Command::Get { keys } => {
            let mut all_loaded = true;
            for key in &keys {
                match log_error(|| imports.get(key), &format!("Failed to load {:?}", key)) {
                    Some(Some(value)) => {
                        let rendered = serde_json::to_string_pretty(value.as_ref())?;
                        println!("{}: {}", key, rendered);
                    }
                    Some(None) => println!("{}: <absent>", key),
                    None => all_loaded = false,
                }
            }
            Ok(all_loaded)
        }
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
