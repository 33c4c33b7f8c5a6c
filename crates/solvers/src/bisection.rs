//! Bisection (interval halving) root finding.
//!
//! Starting from a bracket `[a, b]` whose endpoint values have opposite signs,
//! each iteration evaluates the midpoint `c`, reports it to the observer as an
//! [`Event`], and keeps the half of the bracket that still changes sign.
//!
//! ```
//! use dichotomy_solvers::bisection;
//!
//! let root = bisection::bisect(&|x: f64| x * x - 4.0, 0.0, 3.0, 1e-6).unwrap();
//! assert!((root - 2.0).abs() < 1e-6);
//! ```

mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use bracket::BracketError;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS};
pub use error::Error;
pub use event::Event;
pub use solution::{Criterion, Solution, Status};

use dichotomy_core::{Function, Observer};

use bracket::{Bounds, Bracket, Sign};

/// Finds a root of `function` inside `bracket` using the bisection method.
///
/// Both endpoints are evaluated first. If they share a strict sign the solve
/// fails before any midpoint is computed; if either is an exact root it is
/// returned immediately. Otherwise the observer sees one [`Event`] per
/// iteration, and the solve stops when `|f(c)| < epsilon`, when the
/// half-width drops below `epsilon`, or after `config.max_iters` iterations.
/// Hitting the iteration limit is not an error: the midpoint of the final
/// bracket is returned with [`Status::MaxIters`].
///
/// The endpoints may be given in either order.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if the function
/// fails or returns a non-finite value at any evaluated point, or if the
/// endpoint values do not bracket a root.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event>,
{
    config.validate()?;

    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();
    tracing::debug!(
        left,
        right,
        epsilon = config.epsilon,
        max_iters = config.max_iters,
        "starting bisection"
    );

    let left_residual = evaluate(function, left)?;
    let right_residual = evaluate(function, right)?;
    let mut bracket = Bracket::new(bounds, left_residual, right_residual)?;

    for (x, residual) in [(left, left_residual), (right, right_residual)] {
        #[allow(clippy::float_cmp)]
        if residual == 0.0 {
            tracing::debug!(x, "bracket endpoint is an exact root");
            return Ok(Solution::converged(Criterion::ExactRoot, x, residual, 0));
        }
    }

    for iter in 1..=config.max_iters {
        let mid = bracket.midpoint();
        let half_width = bracket.half_width();
        let residual = evaluate(function, mid)?;

        tracing::trace!(iter, mid, residual, half_width, "bisection iteration");
        observer.observe(&Event {
            iter,
            bracket: bracket.as_array(),
            mid,
            residual,
            half_width,
        });

        let criterion = if residual.abs() < config.epsilon {
            Some(Criterion::Residual)
        } else if half_width < config.epsilon {
            Some(Criterion::HalfWidth)
        } else {
            None
        };

        if let Some(criterion) = criterion {
            tracing::debug!(x = mid, residual, iter, ?criterion, "bisection converged");
            return Ok(Solution::converged(criterion, mid, residual, iter));
        }

        bracket.shrink(mid, Sign::of(residual));
    }

    let x = bracket.midpoint();
    tracing::warn!(
        x,
        max_iters = config.max_iters,
        "bisection reached the iteration limit"
    );
    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual: None,
        iters: config.max_iters,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, config, ())
}

/// Finds a root of `function` between `a` and `b` to precision `epsilon`.
///
/// Uses the default iteration limit of [`DEFAULT_MAX_ITERS`] and returns only
/// the root estimate.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn bisect<F: Function>(function: &F, a: f64, b: f64, epsilon: f64) -> Result<f64, Error> {
    solve_unobserved(function, [a, b], &Config::new(epsilon)).map(|solution| solution.x)
}

/// Evaluates the function, rejecting failures and non-finite values.
fn evaluate<F: Function>(function: &F, x: f64) -> Result<f64, Error> {
    let residual = function
        .call(x)
        .map_err(|err| Error::Function(Box::new(err)))?;

    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }

    Ok(residual)
}
