//! The fixed allow-list of names an expression may reference.
//!
//! The table below is the entire vocabulary available to an expression
//! besides the variable `x`, numeric literals, and the operators
//! `+ - * / ^ **`. Lookup is by exact (lowercase) name.
//!
//! Each function checks its own real domain and reports a [`Fault`] instead
//! of producing NaN; the evaluator attaches the function name and `x`.

use std::f64::consts::{E, PI, TAU};

/// A failure raised by a builtin before the evaluator tags it with `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Fault {
    /// The argument lies outside the function's real domain.
    Domain(f64),
    DivisionByZero,
    ComplexPower { base: f64, exponent: f64 },
}

pub(crate) type Unary = fn(f64) -> Result<f64, Fault>;
pub(crate) type Binary = fn(f64, f64) -> Result<f64, Fault>;

/// What a name in the allow-list refers to.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Kind {
    Constant(f64),
    Unary(Unary),
    Binary(Binary),
    /// One argument, or two with the second optional (`log(v, base)`).
    UnaryOrBinary(Unary, Binary),
}

/// An allow-listed constant or function.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Builtin {
    pub(crate) name: &'static str,
    pub(crate) kind: Kind,
}

impl Builtin {
    const fn constant(name: &'static str, value: f64) -> Self {
        Self {
            name,
            kind: Kind::Constant(value),
        }
    }

    const fn unary(name: &'static str, apply: Unary) -> Self {
        Self {
            name,
            kind: Kind::Unary(apply),
        }
    }

    const fn binary(name: &'static str, apply: Binary) -> Self {
        Self {
            name,
            kind: Kind::Binary(apply),
        }
    }

    /// Describes the accepted argument count for error messages.
    pub(crate) fn expected_args(&self) -> &'static str {
        match self.kind {
            Kind::Constant(_) => "0",
            Kind::Unary(_) => "1",
            Kind::Binary(_) => "2",
            Kind::UnaryOrBinary(..) => "1 or 2",
        }
    }
}

static BUILTINS: &[Builtin] = &[
    // Constants
    Builtin::constant("e", E),
    Builtin::constant("pi", PI),
    Builtin::constant("tau", TAU),
    // Trigonometric
    Builtin::unary("sin", |v| Ok(v.sin())),
    Builtin::unary("cos", |v| Ok(v.cos())),
    Builtin::unary("tan", |v| Ok(v.tan())),
    Builtin::unary("tg", |v| Ok(v.tan())),
    Builtin::unary("ctg", cot),
    Builtin::unary("asin", |v| within_unit(v).map(f64::asin)),
    Builtin::unary("acos", |v| within_unit(v).map(f64::acos)),
    Builtin::unary("atan", |v| Ok(v.atan())),
    Builtin::binary("atan2", |y, x| Ok(y.atan2(x))),
    Builtin::unary("degrees", |v| Ok(v.to_degrees())),
    Builtin::unary("radians", |v| Ok(v.to_radians())),
    // Hyperbolic
    Builtin::unary("sinh", |v| Ok(v.sinh())),
    Builtin::unary("cosh", |v| Ok(v.cosh())),
    Builtin::unary("tanh", |v| Ok(v.tanh())),
    Builtin::unary("asinh", |v| Ok(v.asinh())),
    Builtin::unary("acosh", |v| {
        if v < 1.0 {
            return Err(Fault::Domain(v));
        }
        Ok(v.acosh())
    }),
    Builtin::unary("atanh", |v| {
        if v.abs() >= 1.0 {
            return Err(Fault::Domain(v));
        }
        Ok(v.atanh())
    }),
    // Exponential and logarithmic
    Builtin::unary("exp", |v| Ok(v.exp())),
    Builtin::unary("exp2", |v| Ok(v.exp2())),
    Builtin::unary("expm1", |v| Ok(v.exp_m1())),
    Builtin {
        name: "log",
        kind: Kind::UnaryOrBinary(ln, log_base),
    },
    Builtin::unary("log10", |v| positive(v).map(f64::log10)),
    Builtin::unary("log2", |v| positive(v).map(f64::log2)),
    Builtin::unary("log1p", |v| {
        if v <= -1.0 {
            return Err(Fault::Domain(v));
        }
        Ok(v.ln_1p())
    }),
    // Powers and roots
    Builtin::unary("sqrt", |v| {
        if v < 0.0 {
            return Err(Fault::Domain(v));
        }
        Ok(v.sqrt())
    }),
    Builtin::unary("cbrt", cbrt),
    Builtin::binary("pow", pow),
    Builtin::binary("hypot", |a, b| Ok(a.hypot(b))),
    // Magnitude, sign and rounding
    Builtin::unary("abs", |v| Ok(v.abs())),
    Builtin::unary("fabs", |v| Ok(v.abs())),
    Builtin::unary("floor", |v| Ok(v.floor())),
    Builtin::unary("ceil", |v| Ok(v.ceil())),
    Builtin::unary("trunc", |v| Ok(v.trunc())),
    Builtin::binary("copysign", |a, b| Ok(a.copysign(b))),
    Builtin::binary("fmod", |a, b| {
        #[allow(clippy::float_cmp)]
        if b == 0.0 {
            return Err(Fault::Domain(b));
        }
        Ok(a % b)
    }),
];

/// Looks up an allow-listed name.
pub(crate) fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

/// Returns every allow-listed name, constants first.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|builtin| builtin.name)
}

/// Raises `base` to `exponent` over the reals.
///
/// A zero base with a negative exponent is a division by zero, and a negative
/// base only accepts integral exponents.
pub(crate) fn pow(base: f64, exponent: f64) -> Result<f64, Fault> {
    #[allow(clippy::float_cmp)]
    if base == 0.0 && exponent < 0.0 {
        return Err(Fault::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(Fault::ComplexPower { base, exponent });
    }
    Ok(base.powf(exponent))
}

/// Cotangent, undefined where the tangent is exactly zero.
fn cot(v: f64) -> Result<f64, Fault> {
    let tan = v.tan();
    #[allow(clippy::float_cmp)]
    if tan == 0.0 {
        return Err(Fault::Domain(v));
    }
    Ok(1.0 / tan)
}

/// Real cube root; negative inputs give the negated root of `|v|`.
fn cbrt(v: f64) -> Result<f64, Fault> {
    if v < 0.0 { Ok(-(-v).cbrt()) } else { Ok(v.cbrt()) }
}

fn ln(v: f64) -> Result<f64, Fault> {
    positive(v).map(f64::ln)
}

fn log_base(v: f64, base: f64) -> Result<f64, Fault> {
    let numerator = ln(v)?;
    let denominator = ln(base)?;
    #[allow(clippy::float_cmp)]
    if denominator == 0.0 {
        return Err(Fault::DivisionByZero);
    }
    Ok(numerator / denominator)
}

fn positive(v: f64) -> Result<f64, Fault> {
    if v <= 0.0 {
        return Err(Fault::Domain(v));
    }
    Ok(v)
}

fn within_unit(v: f64) -> Result<f64, Fault> {
    if v.abs() > 1.0 {
        return Err(Fault::Domain(v));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn unary(name: &str) -> Unary {
        match lookup(name).expect("allow-listed").kind {
            Kind::Unary(apply) => apply,
            other => panic!("{name} is not unary: {other:?}"),
        }
    }

    #[test]
    fn names_are_unique() {
        let mut all: Vec<_> = names().collect();
        let count = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), count);
    }

    #[test]
    fn names_are_lowercase() {
        for name in names() {
            assert_eq!(name, name.to_ascii_lowercase());
        }
    }

    #[test]
    fn cbrt_is_real_for_negative_input() {
        let cbrt = unary("cbrt");
        assert_relative_eq!(cbrt(-27.0).unwrap(), -3.0, epsilon = 1e-12);
        assert_relative_eq!(cbrt(8.0).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(cbrt(0.0).unwrap(), 0.0);
    }

    #[test]
    fn ctg_rejects_tangent_zero() {
        let ctg = unary("ctg");
        assert_eq!(ctg(0.0), Err(Fault::Domain(0.0)));
        assert_relative_eq!(ctg(PI / 4.0).unwrap(), 1.0, epsilon = 1e-12);
        assert!(ctg(PI / 2.0).unwrap().abs() < 1e-12);
    }

    #[test]
    fn tg_matches_tan() {
        assert_relative_eq!(unary("tg")(0.3).unwrap(), 0.3_f64.tan());
    }

    #[test]
    fn logarithms_reject_non_positive() {
        for name in ["log10", "log2"] {
            assert_eq!(unary(name)(0.0), Err(Fault::Domain(0.0)));
            assert_eq!(unary(name)(-1.0), Err(Fault::Domain(-1.0)));
        }
        assert_eq!(ln(-2.0), Err(Fault::Domain(-2.0)));
        assert_eq!(unary("log1p")(-1.0), Err(Fault::Domain(-1.0)));
    }

    #[test]
    fn log_with_base() {
        assert_relative_eq!(log_base(8.0, 2.0).unwrap(), 3.0, epsilon = 1e-12);
        assert_eq!(log_base(8.0, 1.0), Err(Fault::DivisionByZero));
        assert_eq!(log_base(8.0, -2.0), Err(Fault::Domain(-2.0)));
    }

    #[test]
    fn inverse_functions_check_domain() {
        assert_eq!(unary("asin")(1.5), Err(Fault::Domain(1.5)));
        assert_eq!(unary("acos")(-1.5), Err(Fault::Domain(-1.5)));
        assert_eq!(unary("acosh")(0.5), Err(Fault::Domain(0.5)));
        assert_eq!(unary("atanh")(1.0), Err(Fault::Domain(1.0)));
        assert_relative_eq!(unary("asin")(1.0).unwrap(), PI / 2.0);
    }

    #[test]
    fn sqrt_rejects_negative() {
        assert_eq!(unary("sqrt")(-4.0), Err(Fault::Domain(-4.0)));
        assert_relative_eq!(unary("sqrt")(16.0).unwrap(), 4.0);
    }

    #[test]
    fn pow_stays_real() {
        assert_relative_eq!(pow(2.0, 10.0).unwrap(), 1024.0);
        assert_relative_eq!(pow(-2.0, 3.0).unwrap(), -8.0);
        assert_relative_eq!(pow(0.0, 0.0).unwrap(), 1.0);
        assert_eq!(pow(0.0, -1.0), Err(Fault::DivisionByZero));
        assert_eq!(
            pow(-8.0, 1.0 / 3.0),
            Err(Fault::ComplexPower {
                base: -8.0,
                exponent: 1.0 / 3.0
            })
        );
    }
}
