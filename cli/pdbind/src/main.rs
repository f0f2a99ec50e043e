//! pdbind CLI: translates Playdate C API declaration blocks into Nelua bindings.

mod commands;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pdbind", version, about = "Playdate C API to Nelua binding translator")]
struct Cli {
    /// Table overrides file (default: nearest pdbind.toml, if any)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log translation decisions to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate one declaration block
    Translate {
        /// Input file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the kind of a declaration block (enum, struct, function-list)
    Classify {
        /// Input file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print the effective renaming tables
    Tables {
        /// Output format (text, toml, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Normalize raw C type expressions
    Type {
        /// Type expressions, e.g. "const char*"
        #[arg(required = true)]
        exprs: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `PDBIND_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "pdbind=warn,pdbind_ffi=warn",
        1 => "pdbind=debug,pdbind_ffi=debug",
        _ => "pdbind=trace,pdbind_ffi=trace",
    };
    let filter = EnvFilter::try_from_env("PDBIND_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    dispatch(cli, &cwd)
}

/// Run one command. Tables are loaded only by the commands that use them.
fn dispatch(cli: Cli, cwd: &Path) -> anyhow::Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Translate { input, output } => {
            let tables = commands::load_tables(cwd, config)?;
            commands::translate::run(&tables, input.as_deref(), output.as_deref())
        }
        Commands::Classify { input } => commands::translate::classify(input.as_deref()),
        Commands::Tables { format } => {
            let tables = commands::load_tables(cwd, config)?;
            commands::tables::run(&tables, &format)
        }
        Commands::Type { exprs } => {
            let tables = commands::load_tables(cwd, config)?;
            commands::types::run(&tables, &exprs)
        }
    }
}
