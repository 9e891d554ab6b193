// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value formatting hooks for accessibility strings.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Largest decimal count honored; more digits carry no information for an `f64`.
const MAX_DECIMALS: usize = 17;

/// Formats a data value for display, given a caller-defined specifier.
///
/// Formatting is best effort; implementations return an empty string rather than failing.
pub trait ValueFormatter {
    /// Formats `value` according to `specifier`.
    fn format(&self, value: f64, specifier: &str) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(f64, &str) -> String,
{
    fn format(&self, value: f64, specifier: &str) -> String {
        self(value, specifier)
    }
}

/// A small fixed-point formatter.
///
/// Specifiers look like `[prefix].N[%]`:
/// - `prefix` is copied verbatim before the number (e.g. `$`),
/// - `.N` sets the number of decimals (default 0, at most 17),
/// - a trailing `%` multiplies by 100 and appends `%`.
///
/// An empty specifier formats with no decimals.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecimalFormatter;

impl ValueFormatter for DecimalFormatter {
    fn format(&self, value: f64, specifier: &str) -> String {
        if !value.is_finite() {
            return String::new();
        }
        let (body, percent) = match specifier.strip_suffix('%') {
            Some(body) => (body, true),
            None => (specifier, false),
        };
        let (prefix, decimals) = match body.rfind('.') {
            Some(dot) => {
                let decimals = body[dot + 1..]
                    .parse::<usize>()
                    .map_or(0, |d| d.min(MAX_DECIMALS));
                (&body[..dot], decimals)
            }
            None => (body, 0),
        };
        let scaled = if percent { value * 100.0 } else { value };
        let suffix = if percent { "%" } else { "" };
        format!("{prefix}{scaled:.decimals$}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_specifiers() {
        let f = DecimalFormatter;
        assert_eq!(f.format(800.0, ""), "800");
        assert_eq!(f.format(800.0, "$.2"), "$800.00");
        assert_eq!(f.format(0.5333, ".1%"), "53.3%");
        assert_eq!(f.format(1.24, ".1"), "1.2");
        assert_eq!(f.format(f64::NAN, ".1"), "");
    }

    #[test]
    fn oversized_precision_is_clamped() {
        let f = DecimalFormatter;
        assert_eq!(f.format(1.0, ".70000"), "1.00000000000000000");
        assert_eq!(f.format(1.0, ".99999999999999999999999"), "1");
    }

    #[test]
    fn closures_are_formatters() {
        let f = |value: f64, spec: &str| format!("{spec}{value}");
        assert_eq!(ValueFormatter::format(&f, 2.0, "#"), "#2");
    }
}
