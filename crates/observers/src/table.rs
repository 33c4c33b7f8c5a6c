//! Fixed-width iteration table.
//!
//! See [`TraceTable`] for usage.

use std::io::{self, Write};

use dichotomy_core::Observer;
use dichotomy_solvers::bisection::Event;

const ITER_WIDTH: usize = 9;

/// Column widths and precision for a [`TraceTable`].
///
/// The bracket and midpoint columns are printed in fixed-point notation, the
/// residual and half-width columns in scientific notation with a signed
/// exponent of at least two digits (`-1.75e+00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStyle {
    point_width: usize,
    point_digits: usize,
    sci_digits: usize,
}

impl TraceStyle {
    /// Ten fractional digits for points, twelve for scientific columns.
    #[must_use]
    pub const fn wide() -> Self {
        Self {
            point_width: 15,
            point_digits: 10,
            sci_digits: 12,
        }
    }

    /// Eight digits everywhere.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            point_width: 12,
            point_digits: 8,
            sci_digits: 8,
        }
    }

    /// Room for a sign, the mantissa, and an exponent of up to three digits.
    const fn sci_width(&self) -> usize {
        self.sci_digits + 8
    }
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self::wide()
    }
}

/// An observer that writes one table row per bisection iteration.
///
/// The header and its separator rule are written together with the first
/// row, so a solve that never iterates (for example, when an endpoint is an
/// exact root) writes nothing.
///
/// Writing never interrupts the solve. The first I/O error is kept, later
/// rows are skipped, and the error is returned by [`finish`][Self::finish].
///
/// # Example
///
/// ```
/// use dichotomy_observers::TraceTable;
/// use dichotomy_solvers::bisection::{self, Config};
///
/// let mut table = TraceTable::new(Vec::new());
/// bisection::solve(&|x: f64| x * x - 4.0, [0.0, 3.0], &Config::new(1e-6), &mut table)?;
///
/// let output = String::from_utf8(table.finish()?)?;
/// assert!(output.starts_with("Iteration"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct TraceTable<W: Write> {
    writer: W,
    style: TraceStyle,
    started: bool,
    error: Option<io::Error>,
}

impl<W: Write> TraceTable<W> {
    /// Creates a table in the [wide][TraceStyle::wide] style.
    pub fn new(writer: W) -> Self {
        Self::with_style(writer, TraceStyle::default())
    }

    /// Creates a table with the given style.
    pub fn with_style(writer: W, style: TraceStyle) -> Self {
        Self {
            writer,
            style,
            started: false,
            error: None,
        }
    }

    /// Writes the row for a single event, starting with the header if needed.
    pub fn record(&mut self, event: &Event) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_row(event) {
            self.error = Some(err);
        }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing rows, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_header(&mut self) -> io::Result<()> {
        let pw = self.style.point_width;
        let sw = self.style.sci_width();

        let header = format!(
            "{:>ITER_WIDTH$} | {:>pw$} | {:>pw$} | {:>pw$} | {:>sw$} | {:>sw$}",
            "Iteration", "a", "b", "c", "f(c)", "(b - a)/2",
        );
        writeln!(self.writer, "{header}")?;
        writeln!(self.writer, "{}", "-".repeat(header.len()))
    }

    fn write_row(&mut self, event: &Event) -> io::Result<()> {
        if !self.started {
            self.write_header()?;
            self.started = true;
        }

        let TraceStyle {
            point_width: pw,
            point_digits: pd,
            sci_digits: sd,
        } = self.style;
        let sw = self.style.sci_width();

        writeln!(
            self.writer,
            "{:>ITER_WIDTH$} | {:>pw$.pd$} | {:>pw$.pd$} | {:>pw$.pd$} | {:>sw$} | {:>sw$}",
            event.iter,
            event.left(),
            event.right(),
            event.mid,
            scientific(event.residual, sd),
            scientific(event.half_width, sd),
        )
    }
}

/// Formats `value` as `d.ddde+XX`, with a sign on the exponent and at least
/// two exponent digits.
///
/// ```
/// assert_eq!(dichotomy_observers::scientific(-0.00125, 3), "-1.250e-03");
/// ```
#[must_use]
pub fn scientific(value: f64, digits: usize) -> String {
    let plain = format!("{value:.digits$e}");
    let Some((mantissa, exponent)) = plain.split_once('e') else {
        return plain;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return plain;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

impl<W: Write> Observer<Event> for TraceTable<W> {
    fn observe(&mut self, event: &Event) {
        self.record(event);
    }
}

/// Allows `&mut TraceTable<W>` to be passed to solvers that take an observer
/// by value, so [`TraceTable::finish`] can be called after the solve.
impl<W: Write> Observer<Event> for &mut TraceTable<W> {
    fn observe(&mut self, event: &Event) {
        (*self).record(event);
    }
}
