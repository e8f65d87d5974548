//! mjc - Mini-Java compiler and stack machine CLI.
//!
//! Three mutually exclusive modes:
//! - `mjc run <source.java>` compiles, writes the `.obj` next to the
//!   source, then executes it;
//! - `mjc compile <source.java>` compiles and writes the `.obj` only;
//! - `mjc exec <program.obj>` executes an existing object file.
//!
//! Exit code 0 on success; nonzero on any diagnostic or runtime fault.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Mini-Java compiler and stack machine
#[derive(Parser, Debug)]
#[command(name = "mjc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mini-Java compiler and stack machine", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable stage progress logging
    #[arg(short, long, global = true, env = "MJC_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a source file and run the resulting object program
    Run {
        /// Path to the Mini-Java source file
        source: PathBuf,
    },

    /// Compile a source file to an object file without running it
    Compile {
        /// Path to the Mini-Java source file
        source: PathBuf,
    },

    /// Execute an existing object file
    Exec {
        /// Path to the object file
        object: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run { source } => {
            mjc_drv::compile_file(&source).and_then(|object| mjc_drv::exec_object(&object))
        },
        Commands::Compile { source } => mjc_drv::compile_file(&source).map(|_| ()),
        Commands::Exec { object } => mjc_drv::exec_object(&object),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

/// Initialize the tracing subscriber.
///
/// `--verbose` enables stage progress at info level; otherwise the filter
/// comes from `RUST_LOG`, defaulting to warnings only. Logs go to stderr
/// so program output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
