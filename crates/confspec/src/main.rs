mod cli; // Declare the cli module

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand}; // Use clap for argument parsing
use confspec_core::{Manager, Result};
use log::debug;

/// Confspec: typed configuration files for the "person" example
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Configuration file; repeat to build a stack, the last one is written
    #[arg(long = "file", value_name = "PATH", global = true)]
    files: Vec<PathBuf>,

    /// Format of the configuration files
    #[arg(long, value_name = "NAME", default_value = "ini", global = true)]
    format: String,

    /// Do not create missing configuration files
    #[arg(long, global = true)]
    no_create: bool,

    /// Fail on the first configuration fault instead of reporting it
    #[arg(long, global = true)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every option grouped by category
    Show,
    /// Print the value of one option
    Get {
        /// Option key
        key: String,
    },
    /// Change the value of one option
    Set {
        /// Option key
        key: String,
        /// New value, in its text form
        value: String,
    },
    /// Print the configuration in a format
    Export {
        /// Output format, defaults to the file format
        #[arg(long = "to", value_name = "NAME")]
        to: Option<String>,
    },
    /// List the supported formats
    Formats,
}

const DEFAULT_FILE: &str = "~/.confspec/confspec.ini";

fn build_manager(args: &CliArgs) -> Result<Manager> {
    let files = if args.files.is_empty() {
        vec![PathBuf::from(DEFAULT_FILE)]
    } else {
        args.files.clone()
    };
    Manager::builder(cli::person_spec()?)
        .files(files)
        .format(args.format.as_str())
        .create(!args.no_create)
        .safe(!args.strict)
        .build()
}

fn run(args: &CliArgs) -> Result<()> {
    let mut manager = match args.command {
        Commands::Formats => {
            cli::formats();
            return Ok(());
        }
        _ => build_manager(args)?,
    };
    debug!("Using {:?}", manager);

    match &args.command {
        Commands::Show => cli::show(&manager),
        Commands::Get { key } => cli::get(&manager, key)?,
        Commands::Set { key, value } => cli::set(&mut manager, key, value)?,
        Commands::Export { to } => cli::export(&manager, to.as_deref())?,
        // Needs no manager, handled above
        Commands::Formats => {}
    }
    Ok(())
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args = CliArgs::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
