use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// An endpoint is NaN or infinite.
    #[error("non-finite endpoint {value}")]
    NonFinite { value: f64 },

    /// Residuals at both endpoints share a strict sign.
    #[error(
        "no sign change: f({left}) = {left_residual} and f({right}) = {right_residual} have the same sign"
    )]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },
}

/// Current bracket bounds and the residual sign at the left bound.
///
/// The residual at the right bound always has the opposite sign, or one of
/// the residuals is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates a validated bracket from its bounds and endpoint residuals.
    ///
    /// A zero residual at either endpoint is accepted.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if both residuals are non-zero and
    /// share a sign.
    pub(super) fn new(
        bounds: Bounds,
        left_residual: f64,
        right_residual: f64,
    ) -> Result<Self, BracketError> {
        let left_sign = Sign::of(left_residual);
        let right_sign = Sign::of(right_residual);

        #[allow(clippy::float_cmp)]
        let has_zero = left_residual == 0.0 || right_residual == 0.0;

        if !has_zero && left_sign == right_sign {
            return Err(BracketError::NoSignChange {
                left: bounds.left,
                right: bounds.right,
                left_residual,
                right_residual,
            });
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            left_sign,
        })
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns half the bracket width.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * (self.right - self.left)
    }

    /// Shrinks the bracket using a new interior point and its residual sign.
    ///
    /// The point replaces whichever bound has the same residual sign, so the
    /// bracket keeps a sign change.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    pub(super) fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NonFinite` if either endpoint is NaN or infinite.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        for value in [left, right] {
            if !value.is_finite() {
                return Err(BracketError::NonFinite { value });
            }
        }

        if left <= right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_eq!(bounds.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite { .. })
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite { .. })
        ));
    }

    #[test]
    fn new_bracket_rejects_no_sign_change() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        let err = Bracket::new(bounds, 2.0, 3.0);
        assert!(matches!(err, Err(BracketError::NoSignChange { .. })));

        let err = Bracket::new(bounds, -2.0, -3.0);
        assert!(matches!(err, Err(BracketError::NoSignChange { .. })));
    }

    #[test]
    fn new_bracket_accepts_zero_residual() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        assert!(Bracket::new(bounds, 0.0, 3.0).is_ok());
        assert!(Bracket::new(bounds, -3.0, 0.0).is_ok());
    }

    #[test]
    fn midpoint_and_half_width() {
        let bounds = Bounds::new([1.0, 4.0]).expect("valid bounds");
        let bracket = Bracket::new(bounds, -1.0, 1.0).expect("valid bracket");
        assert_relative_eq!(bracket.midpoint(), 2.5);
        assert_relative_eq!(bracket.half_width(), 1.5);
    }

    #[test]
    fn shrink_shifts_bounds() {
        let mut bracket = Bracket::new(
            Bounds::new([0.0, 2.0]).expect("valid bounds"),
            -1.0,
            1.0,
        )
        .expect("valid bracket");

        bracket.shrink(1.0, Sign::Negative);
        let [left, right] = bracket.as_array();
        assert_relative_eq!(left, 1.0);
        assert_relative_eq!(right, 2.0);

        bracket.shrink(1.5, Sign::Positive);
        let [left, right] = bracket.as_array();
        assert_relative_eq!(left, 1.0);
        assert_relative_eq!(right, 1.5);
    }
}
