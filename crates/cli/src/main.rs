//! Dichotomy - bisection root finder for expressions in `x`.
//!
//! # Usage
//!
//! ```bash
//! dichotomy                                   # prompts for everything
//! dichotomy "x^2 - 4" -a 0 -b 3 -e 1e-6
//! dichotomy "sin(x)" -a 3 -b 4 -e 1e-8 --json
//! ```

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dichotomy_cli::{Args, Prompter};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = io::stdout();
    let result = if args.json {
        // Keep stdout clean for the report.
        let mut prompter = Prompter::new(io::stdin().lock(), io::stderr());
        dichotomy_cli::run(&args, &mut prompter, &mut stdout)
    } else {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
        dichotomy_cli::run(&args, &mut prompter, &mut stdout)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = stdout.flush();
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "error: {err}");
            for cause in err.chain().skip(1) {
                let _ = writeln!(stderr, "  caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr. `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(
                "dichotomy=debug,dichotomy_cli=debug,dichotomy_expr=debug,\
                 dichotomy_solvers=debug,dichotomy_observers=debug",
            )
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
