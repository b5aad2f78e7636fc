use std::fmt;

use derive_more::Display;

use crate::error::{CalcError, ComputationError};

/// Squares `x`.
///
/// A finite input that overflows to infinity is an error; NaN and infinite
/// inputs pass straight through.
pub fn calculate(x: f64) -> Result<f64, ComputationError> {
    let res = x * x;
    if x.is_finite() && res.is_infinite() {
        return Err(ComputationError::Overflow(x));
    }
    Ok(res)
}

/// Interprets file content as a single float literal.
pub fn parse_input(text: &str) -> Result<f64, CalcError> {
    text.trim().parse::<f64>().map_err(|source| CalcError::Parse {
        input: text.to_string(),
        source,
    })
}

/// Float rendered the way a dynamic-language `str()` would: integral values
/// keep a trailing `.0`, exponents carry a sign and at least two digits,
/// non-finite values are lowercase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("nan")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "inf" } else { "-inf" })
        } else {
            // Debug is the shortest round-trip form and keeps ".0".
            let text = format!("{v:?}");
            match text.split_once('e') {
                Some((mantissa, exp)) => {
                    let (sign, digits) = match exp.strip_prefix('-') {
                        Some(digits) => ('-', digits),
                        None => ('+', exp),
                    };
                    write!(f, "{mantissa}e{sign}{digits:0>2}")
                }
                None => f.write_str(&text),
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Display)]
#[display("Result is: {_0}")]
pub struct Calculation(Number);

impl From<f64> for Calculation {
    fn from(value: f64) -> Self {
        Self(Number(value))
    }
}
