//! Console shell for the keypad engine.
//!
//! Each argument, or each whitespace separated word of standard input, is a
//! keypad label (`7`, `+`, `=`, `√`, `DEL`, ...). The buffer is printed after
//! every input line, or once after all arguments.

use anyhow::{Context, Result};
use clap::Parser;
use keypad::{Command, Config, Engine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "keypad", version, about = "A keypad calculator on the command line")]
struct Args {
    /// Significant digits kept on results
    #[arg(long)]
    precision: Option<usize>,

    /// TOML file holding the engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keypad labels to press, read from standard input when empty
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut engine = Engine::with_config(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.keys.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read standard input")?;
            press_all(&mut engine, line.split_whitespace());
            writeln!(out, "{}", engine.display())?;
        }
    } else {
        press_all(&mut engine, args.keys.iter().map(String::as_str));
        writeln!(out, "{}", engine.display())?;
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let config: Config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?
        }
        None => Config::default(),
    };
    Ok(match args.precision {
        Some(precision) => Config::with_precision(precision),
        None => config,
    })
}

fn press_all<'a>(engine: &mut Engine, keys: impl Iterator<Item = &'a str>) {
    for key in keys {
        match key.parse::<Command>() {
            Ok(command) => engine.dispatch(command),
            Err(err) => eprintln!("keypad: {}", err),
        }
    }
}
