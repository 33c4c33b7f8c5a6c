use clap::Parser;
use dichotomy_solvers::bisection::DEFAULT_MAX_ITERS;

/// Find a root of f(x) = 0 on [a, b] with the bisection method.
///
/// Values not given as flags are prompted for on stdin.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "dichotomy")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Expression in x, for example "x^2 - 4" or "sin(x) - 0.5"
    pub expression: Option<String>,

    /// Left end of the bracket
    #[arg(short = 'a', long = "left", allow_negative_numbers = true)]
    pub left: Option<f64>,

    /// Right end of the bracket
    #[arg(short = 'b', long = "right", allow_negative_numbers = true)]
    pub right: Option<f64>,

    /// Precision; the search stops when |f(c)| or the half-width drops below it
    #[arg(short, long, allow_negative_numbers = true)]
    pub epsilon: Option<f64>,

    /// Maximum number of midpoint evaluations
    #[arg(long, default_value_t = DEFAULT_MAX_ITERS)]
    pub max_iters: usize,

    /// Print the trace table with 8 digits instead of 10 and 12
    #[arg(long)]
    pub compact: bool,

    /// Skip the trace table (iterations are still logged at debug level)
    #[arg(long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print a JSON report instead of the trace table
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
