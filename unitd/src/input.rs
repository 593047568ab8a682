//! Values a measure can be built from

use std::fmt;
use crate::Measure;

/// Anything coercible to a [`Measure`]
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Number(f64),
    /// Quantity string; may carry a unit abbreviation and implies a precision
    Text(String),
    /// Passed through unchanged
    Measure(Measure),
    /// No value at all; always rejected
    Missing,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Number(n) => write!(f, "{}", n),
            Input::Text(s) => write!(f, "{}", s),
            Input::Measure(m) => write!(f, "{}", m),
            Input::Missing => write!(f, "missing"),
        }
    }
}

impl From<f64> for Input {
    fn from(n: f64) -> Self {
        Input::Number(n)
    }
}

impl From<i32> for Input {
    fn from(n: i32) -> Self {
        Input::Number(n as f64)
    }
}

impl From<i64> for Input {
    fn from(n: i64) -> Self {
        Input::Number(n as f64)
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<Measure> for Input {
    fn from(m: Measure) -> Self {
        Input::Measure(m)
    }
}

impl From<&Measure> for Input {
    fn from(m: &Measure) -> Self {
        Input::Measure(m.clone())
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Input::from(3), Input::Number(3.0));
        assert_eq!(Input::from(3.5), Input::Number(3.5));
        assert_eq!(Input::from("3 m"), Input::Text("3 m".to_string()));
        assert_eq!(Input::from(None::<f64>), Input::Missing);
        assert_eq!(Input::from(Some("2")), Input::Text("2".to_string()));
    }

    #[test]
    fn test_display_keeps_original_text() {
        assert_eq!(Input::from("abc").to_string(), "abc");
        assert_eq!(Input::Missing.to_string(), "missing");
        assert_eq!(Input::from(f64::NAN).to_string(), "NaN");
    }
}
