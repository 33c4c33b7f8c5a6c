use thiserror::Error;

/// Iteration limit used when none is given.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Errors that can occur when validating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive, got {0}")]
    Epsilon(f64),
}

/// Configuration for the bisection solver.
///
/// The search stops as soon as `|f(c)| < epsilon` or the half-width of the
/// bracket drops below `epsilon`, or after `max_iters` midpoint evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub epsilon: f64,
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-10,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Creates a config with the given precision and the default iteration limit.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }

    /// Sets the iteration limit.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Validates that epsilon is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Epsilon`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::Epsilon(self.epsilon));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().max_iters, DEFAULT_MAX_ITERS);
    }

    #[test]
    fn rejects_bad_epsilon() {
        for epsilon in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Config::new(epsilon).validate(),
                Err(ConfigError::Epsilon(_))
            ));
        }
    }

    #[test]
    fn builder_sets_max_iters() {
        let config = Config::new(1e-6).with_max_iters(7);
        assert_eq!(config.max_iters, 7);
        assert!(config.validate().is_ok());
    }
}
