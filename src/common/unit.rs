//! Unit conversion utilities.
//!
//! This module provides the EMU conversion constants and the formatting of ODF
//! measure values (`"12pt"`, `"2.5mm"`).

use std::fmt;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Decimal places kept when writing a measure.
const MEASURE_PRECISION: f64 = 10_000.0;

/// Units an ODF measure can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureUnit {
    /// Millimeter
    Millimeter,
    /// Centimeter
    Centimeter,
    /// Inch
    Inch,
    /// Point (1/72 inch)
    Point,
}

impl MeasureUnit {
    /// Get the unit abbreviation
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Inch => "in",
            Self::Point => "pt",
        }
    }

    /// Number of EMUs in one unit.
    #[inline]
    pub const fn emus_per_unit(&self) -> i64 {
        match self {
            Self::Millimeter => EMUS_PER_MM,
            Self::Centimeter => EMUS_PER_CM,
            Self::Inch => EMUS_PER_INCH,
            Self::Point => EMUS_PER_PT,
        }
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a number with its unit suffix using the shortest exact representation.
///
/// Whole values are written without a fraction (`"12pt"`), everything else is
/// rounded to four decimals first so EMU round-off never leaks into the output.
pub fn format_measure(value: f64, unit: MeasureUnit) -> String {
    let mut out = format_number(value);
    out.push_str(unit.as_str());
    out
}

/// Format a plain number the way ODF attribute values expect it.
pub fn format_number(value: f64) -> String {
    let rounded = (value * MEASURE_PRECISION).round() / MEASURE_PRECISION;
    if rounded.fract() == 0.0 && rounded.abs() < i64::MAX as f64 {
        let mut buffer = itoa::Buffer::new();
        // -0.0 prints as 0
        buffer.format(rounded as i64).to_string()
    } else {
        let mut buffer = ryu::Buffer::new();
        buffer.format(rounded).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.635), "0.635");
        assert_eq!(format_number(11.499_999_999), "11.5");
    }

    #[test]
    fn test_format_measure() {
        assert_eq!(format_measure(2.5, MeasureUnit::Centimeter), "2.5cm");
        assert_eq!(format_measure(1.0, MeasureUnit::Inch), "1in");
    }
}
