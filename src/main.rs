use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{OutputFormat, validate_command};

#[derive(Parser)]
#[command(
    name = "savecheck",
    about = "Checks a Tabletop Simulator save file against DBR table, scale and terrain rules",
    version,
    author,
    long_about = None
)]
struct Cli {
    /// Path to the Tabletop Simulator save file (.json)
    save_file: PathBuf,

    /// YAML rule catalog to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Print findings as JSON instead of the colored report
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors share the failure status with failed validations
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match validate_command(&cli.save_file, cli.catalog.as_deref(), format) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("savecheck=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("savecheck=info"), // -v: info messages
        _ => EnvFilter::new("savecheck=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
