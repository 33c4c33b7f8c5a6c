use std::convert::Infallible;

/// A scalar function of one real variable.
///
/// Evaluation takes `&self`, so a function carries no per-call state and a
/// single instance can be evaluated repeatedly, or from several threads when
/// the implementor is `Sync`.
///
/// Plain closures `Fn(f64) -> f64` implement `Function` with an
/// [`Infallible`] error type.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function is undefined at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
