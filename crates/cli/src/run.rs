use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use dichotomy_expr::{builtins, compile};
use dichotomy_observers::{LogObserver, TraceStyle, TraceTable, scientific};
use dichotomy_solvers::bisection::{self, Config, Event, Status};

use crate::{
    Args, Prompter, Report,
    input::{check_bound, check_epsilon, parse_bound, parse_epsilon},
};

/// Runs one solve, prompting for any value not given in `args`.
///
/// The banner, trace table, and result go to `out`. With `--json`, only the
/// JSON report is written to `out`.
///
/// # Errors
///
/// Returns an error if input is missing or invalid, the expression does not
/// compile, the solve fails, or writing output fails.
pub fn run<R, P, W>(args: &Args, prompter: &mut Prompter<R, P>, out: &mut W) -> Result<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    if !args.json {
        write_banner(out)?;
    }

    let source = match &args.expression {
        Some(source) => source.clone(),
        None => prompter.require("f(x)", "f(x) = ")?,
    };
    let f = compile(&source).with_context(|| format!("cannot compile `{source}`"))?;

    let left = match args.left {
        Some(value) => check_bound("left bound", value)?,
        None => parse_bound(
            "left bound",
            &prompter.require("left bound", "Left bound a: ")?,
        )?,
    };
    let right = match args.right {
        Some(value) => check_bound("right bound", value)?,
        None => parse_bound(
            "right bound",
            &prompter.require("right bound", "Right bound b: ")?,
        )?,
    };
    let epsilon = match args.epsilon {
        Some(value) => check_epsilon(value)?,
        None => parse_epsilon(&prompter.require("epsilon", "Precision epsilon: ")?)?,
    };

    let config = Config::new(epsilon).with_max_iters(args.max_iters);
    let bracket = [left, right];
    tracing::debug!(expression = f.source(), left, right, epsilon, "solving");

    if args.json {
        let mut iterations = Vec::new();
        let solution = bisection::solve(&f, bracket, &config, |event: &Event| {
            iterations.push(*event);
        })?;
        let residual = f
            .eval(solution.x)
            .context("cannot evaluate f at the root")?;

        let report = Report::new(f.source(), &solution, residual, iterations);
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let solution = if args.quiet {
        bisection::solve(&f, bracket, &config, LogObserver::default())?
    } else {
        let style = if args.compact {
            TraceStyle::compact()
        } else {
            TraceStyle::wide()
        };

        writeln!(out)?;
        let mut table = TraceTable::with_style(&mut *out, style);
        let solution = bisection::solve(&f, bracket, &config, &mut table)?;
        table.finish().context("failed to write the trace table")?;
        solution
    };

    let residual = f
        .eval(solution.x)
        .context("cannot evaluate f at the root")?;

    writeln!(out)?;
    writeln!(out, "Approximate root: {:.10}", solution.x)?;
    writeln!(out, "Function value at root: {}", scientific(residual, 10))?;
    if solution.status == Status::MaxIters {
        writeln!(
            out,
            "Note: stopped after {} iterations before reaching epsilon = {epsilon}",
            solution.iters
        )?;
    }

    Ok(())
}

fn write_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Bisection method for solving f(x) = 0.")?;
    writeln!(
        out,
        "Supported names: x, {}.",
        builtins::names().collect::<Vec<_>>().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    use dichotomy_expr::{CompileError, EvalError};

    use crate::InputError;

    fn args(expression: Option<&str>, left: Option<f64>, right: Option<f64>, epsilon: Option<f64>) -> Args {
        Args {
            expression: expression.map(str::to_owned),
            left,
            right,
            epsilon,
            max_iters: bisection::DEFAULT_MAX_ITERS,
            compact: false,
            quiet: false,
            json: false,
            verbose: false,
        }
    }

    fn run_with(args: &Args, input: &str) -> (Result<()>, String) {
        let mut prompts = Vec::new();
        let mut out = Vec::new();
        let result = run(
            args,
            &mut Prompter::new(input.as_bytes(), &mut prompts),
            &mut out,
        );
        let mut text = String::from_utf8(prompts).expect("utf-8 prompts");
        text.push_str(&String::from_utf8(out).expect("utf-8 output"));
        (result, text)
    }

    fn root_from(output: &str) -> f64 {
        output
            .lines()
            .find_map(|line| line.strip_prefix("Approximate root: "))
            .expect("root line")
            .parse()
            .expect("numeric root")
    }

    #[test]
    fn solves_with_flags() {
        let args = args(Some("x^2 - 4"), Some(0.0), Some(3.0), Some(1e-6));
        let (result, output) = run_with(&args, "");

        result.expect("should solve");
        assert!(output.contains("Supported names: x, e, pi"));
        assert!(output.contains("Iteration"));
        assert!((root_from(&output) - 2.0).abs() < 1e-5);
        assert!(output.contains("Function value at root: "));
        assert!(!output.contains("Note:"));
    }

    #[test]
    fn prompts_for_missing_values() {
        let args = args(None, None, None, None);
        let (result, output) = run_with(&args, "sin(x)\n3\n4\n1e-8\n");

        result.expect("should solve");
        assert!(output.contains("f(x) = "));
        assert!(output.contains("Precision epsilon: "));
        assert!((root_from(&output) - std::f64::consts::PI).abs() < 1e-7);
    }

    #[test]
    fn reports_compile_errors_before_prompting_for_bounds() {
        let args = args(Some("bogus_fn(x)"), None, None, None);
        let (result, output) = run_with(&args, "0\n3\n1e-6\n");

        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("bogus_fn"));
        assert!(matches!(
            err.downcast_ref::<CompileError>(),
            Some(CompileError::UnknownName { .. })
        ));
        assert!(!output.contains("Left bound"));
    }

    #[test]
    fn rejects_same_sign_bracket() {
        let args = args(Some("x^2 - 9"), Some(5.0), Some(10.0), Some(1e-6));
        let (result, output) = run_with(&args, "");

        let err = result.expect_err("should fail");
        assert!(matches!(
            err.downcast_ref::<bisection::Error>(),
            Some(bisection::Error::InvalidBracket(
                bisection::BracketError::NoSignChange { .. }
            ))
        ));
        assert!(!output.contains("Iteration"));
    }

    #[test]
    fn rejects_bad_epsilon_before_solving() {
        let args = args(Some("x"), Some(-1.0), Some(1.0), None);
        let (result, _) = run_with(&args, "0\n");

        let err = result.expect_err("should fail");
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::Epsilon { value: 0.0 })
        );
    }

    #[test]
    fn rejects_non_numeric_bound() {
        let args = args(Some("x"), None, Some(1.0), Some(1e-6));
        let (result, _) = run_with(&args, "abc\n");

        let err = result.expect_err("should fail");
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::NotANumber { .. })
        ));
    }

    #[test]
    fn reports_missing_input() {
        let args = args(None, None, None, None);
        let (result, _) = run_with(&args, "x - 1\n");

        let err = result.expect_err("should fail");
        let io_err = err.downcast_ref::<io::Error>().expect("io error");
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn evaluation_errors_abort_the_solve() {
        // The first midpoint of [-1, 1] is the pole of ctg.
        let args = args(Some("ctg(x)"), Some(-1.0), Some(1.0), Some(1e-6));
        let (result, _) = run_with(&args, "");

        let err = result.expect_err("should fail");
        let eval = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<EvalError>())
            .expect("evaluation error in chain");
        assert_eq!(eval.x, 0.0);
    }

    #[test]
    fn notes_iteration_limit() {
        let mut args = args(Some("x^2 - 2"), Some(0.0), Some(2.0), Some(1e-12));
        args.max_iters = 3;
        let (result, output) = run_with(&args, "");

        result.expect("soft termination succeeds");
        assert!(output.contains("Note: stopped after 3 iterations"));
    }

    #[test]
    fn quiet_skips_the_table() {
        let mut args = args(Some("x - 0.25"), Some(0.0), Some(1.0), Some(1e-6));
        args.quiet = true;
        let (result, output) = run_with(&args, "");

        result.expect("should solve");
        assert!(!output.contains("Iteration"));
        assert!(output.contains("Approximate root: 0.2500000000"));
        assert!(output.contains("Function value at root: 0.0000000000e+00"));
    }

    #[test]
    fn compact_table_uses_eight_digits() {
        let mut args = args(Some("x^2 - 4"), Some(0.0), Some(3.0), Some(1e-6));
        args.compact = true;
        let (result, output) = run_with(&args, "");

        result.expect("should solve");
        assert!(output.contains("|   1.50000000 |"));
    }

    #[test]
    fn json_report_lists_iterations() {
        let mut args = args(Some("x^2 - 4"), Some(0.0), Some(3.0), Some(1e-6));
        args.json = true;

        let mut out = Vec::new();
        run(
            &args,
            &mut Prompter::new(io::empty(), io::sink()),
            &mut out,
        )
        .expect("should solve");

        let report: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(report["expression"], "x^2 - 4");
        assert!((report["root"].as_f64().expect("root") - 2.0).abs() < 1e-5);

        let iterations = report["iterations"].as_array().expect("iterations");
        assert_eq!(report["iters"].as_u64(), Some(iterations.len() as u64));
        assert_eq!(iterations[0]["mid"], 1.5);
        assert_eq!(iterations[0]["bracket"], serde_json::json!([0.0, 3.0]));
        assert!(report["status"]["converged"].is_string());
    }
}
