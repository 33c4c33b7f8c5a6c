//! Reusable observers for dichotomy solvers.
//!
//! This crate provides [`Observer`] implementations for the bisection
//! solver's iteration [`Event`]s.
//!
//! - [`TraceTable`] writes a fixed-width iteration table to any
//!   [`std::io::Write`] sink.
//! - [`LogObserver`] emits one `tracing` event per iteration.
//!
//! Both implement [`Observer`] for `&mut T` as well as `T`, so the observer
//! can be inspected or finished after the solve returns.
//!
//! [`Observer`]: dichotomy_core::Observer
//! [`Event`]: dichotomy_solvers::bisection::Event

mod logging;
mod table;

pub use logging::LogObserver;
pub use table::{TraceStyle, TraceTable, scientific};
