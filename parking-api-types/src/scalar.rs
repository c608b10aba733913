use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single column value. The backend mostly sends strings, but numeric
/// columns (ids, mobile numbers stored as integers) and flags come through
/// untouched and are shown as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    /// Empty text, zero and `false` count as "no value" for the optional columns.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Text(text) => text.is_empty(),
            Scalar::Number(number) => number.as_f64() == Some(0.0),
            Scalar::Bool(flag) => !flag,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{text}"),
            // whole floats print without a fraction, `7.0` is shown as `7`
            Scalar::Number(number) => match number.as_f64() {
                Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e15 => {
                    write!(f, "{}", float as i64)
                }
                _ => write!(f, "{number}"),
            },
            Scalar::Bool(flag) => write!(f, "{flag}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}
