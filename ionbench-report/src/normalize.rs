//! Value Normalization
//!
//! The harness records each result as a ratio of new to baseline runtime.
//! For markup output the ratio is shown as a signed percentage relative to 1.0.

use crate::report::MISSING_VALUE;

/// Convert a ratio token into a signed percentage string.
///
/// Tokens that are not numbers (including the `??` placeholder) are returned
/// unchanged. Negative ratios are shifted by `+1` instead of `-1`; the log
/// never contains them, and the behavior is kept as the harness defines it.
pub fn normalize_value(token: &str) -> String {
    let Ok(mut value) = token.parse::<f64>() else {
        return token.to_string();
    };
    if !value.is_finite() {
        return token.to_string();
    }

    if value < 0.0 {
        value += 1.0;
    } else {
        value -= 1.0;
    }

    // f64::round rounds half away from zero; formatting the f64 keeps every
    // digit of values beyond the i64 range
    let percent = (value * 100.0).round();
    if percent == 0.0 {
        // -0.0 would print as "-0"
        return "0".to_string();
    }
    format!("{:.0}", percent)
}

/// Display class of a normalized value, used to pick a markup color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// A negative percentage (red)
    Negative,
    /// A lone `-` placeholder (blue)
    Dash,
    /// The `??` placeholder (uncolored)
    Missing,
    /// Anything else (green)
    Positive,
}

impl ValueClass {
    /// Color name for markup renderers, `None` for uncolored values
    pub fn color(self) -> Option<&'static str> {
        match self {
            ValueClass::Negative => Some("red"),
            ValueClass::Dash => Some("blue"),
            ValueClass::Missing => None,
            ValueClass::Positive => Some("green"),
        }
    }
}

/// Classify a normalized value.
pub fn classify_value(normalized: &str) -> ValueClass {
    if normalized.starts_with('-') {
        if normalized.len() > 1 {
            ValueClass::Negative
        } else {
            ValueClass::Dash
        }
    } else if normalized == MISSING_VALUE {
        ValueClass::Missing
    } else {
        ValueClass::Positive
    }
}
