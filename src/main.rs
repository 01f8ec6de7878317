use anyhow::Result;
use clap::Parser;
use linedex::engine::{EngineOptions, SearchEngine};
use linedex::records::RecordSet;
use linedex::repl;
use linedex::utils::{AppConfig, ColorMode};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const USAGE_ERROR: &str = "Incorrect commandline parameters";
const DATA_SOURCE_ERROR: &str = "Incorrect data source";

/// Number of command line arguments after the program name: `--data <PATH>`
const EXPECTED_ARGS: usize = 2;

#[derive(Parser)]
#[command(name = "linedex")]
#[command(about = "Interactive line-oriented search over a text file")]
struct Cli {
    /// Text file to search, one record per line
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    data: PathBuf,
}

fn main() -> Result<()> {
    // Only `--data <PATH>` is accepted; `--data=<PATH>`, help and extra flags are usage errors
    let cli = match Cli::try_parse() {
        Ok(cli) if std::env::args_os().len() == EXPECTED_ARGS + 1 => cli,
        _ => {
            println!("{}", USAGE_ERROR);
            return Ok(());
        }
    };

    let config = load_config();

    let records = match RecordSet::load(&cli.data) {
        Ok(records) => records,
        Err(e) => {
            debug!(error = %e, "data source rejected");
            println!("{}", DATA_SOURCE_ERROR);
            return Ok(());
        }
    };

    let engine = SearchEngine::new(records, EngineOptions::from(&config));

    let stdout = StandardStream::stdout(color_choice(config.color));
    let stdin = io::stdin();
    repl::run(&engine, stdin.lock(), stdout.lock())
}

/// Load the config file and start logging at its level.
/// A broken config file falls back to defaults with a warning.
fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => {
            init_tracing(&config.log_level);
            config
        }
        Err(e) => {
            let config = AppConfig::default();
            init_tracing(&config.log_level);
            warn!("{:#}; using default settings", e);
            config
        }
    }
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// `auto` only colours when stdout is a terminal
fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Auto if !io::stdout().is_terminal() => ColorChoice::Never,
        mode => mode.choice(),
    }
}
