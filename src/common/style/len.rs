use std::fmt;

use crate::common::unit::{
    EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_MM, EMUS_PER_PT, MeasureUnit, format_measure,
};

/// Length measurement with units.
///
/// Lengths are stored as whole EMUs (English Metric Units), which keeps every
/// style that contains them `Eq + Hash`: two margins typed as `12.7mm` and
/// `0.5in` are the same value and hash the same way.
///
/// # Examples
///
/// ```rust
/// use flat_odt::common::Length;
///
/// let length = Length::from_inches(1.0);
/// assert_eq!(length, Length::from_mm(25.4));
/// assert_eq!(length.to_odf_mm(), "25.4mm");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Length {
    /// Value in EMUs (English Metric Units)
    /// 1 inch = 914,400 EMUs
    /// 1 cm = 360,000 EMUs
    emus: i64,
}

impl Length {
    /// The zero length.
    pub const ZERO: Self = Self::from_emus(0);

    /// Create a length from EMUs (English Metric Units).
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self::scaled(inches, EMUS_PER_INCH)
    }

    /// Create a length from centimeters.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self::scaled(cm, EMUS_PER_CM)
    }

    /// Create a length from millimeters.
    #[inline]
    pub fn from_mm(mm: f64) -> Self {
        Self::scaled(mm, EMUS_PER_MM)
    }

    /// Create a length from points (1/72 inch).
    #[inline]
    pub fn from_points(points: f64) -> Self {
        Self::scaled(points, EMUS_PER_PT)
    }

    #[inline]
    fn scaled(value: f64, per_unit: i64) -> Self {
        // NaN collapses to zero through the saturating float cast
        Self {
            emus: (value * per_unit as f64).round() as i64,
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_CM as f64
    }

    /// Convert to millimeters.
    #[inline]
    pub fn mm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_MM as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }

    /// Whether this length is exactly zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.emus == 0
    }

    /// Whether this length is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.emus < 0
    }

    /// Format as an ODF measure in the given unit, e.g. `"12.5pt"`.
    pub fn to_odf(&self, unit: MeasureUnit) -> String {
        let value = self.emus as f64 / unit.emus_per_unit() as f64;
        format_measure(value, unit)
    }

    /// Format as an ODF measure in millimeters.
    #[inline]
    pub fn to_odf_mm(&self) -> String {
        self.to_odf(MeasureUnit::Millimeter)
    }

    /// Format as an ODF measure in points.
    #[inline]
    pub fn to_odf_pt(&self) -> String {
        self.to_odf(MeasureUnit::Point)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_odf_mm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_equivalence() {
        assert_eq!(Length::from_inches(1.0), Length::from_cm(2.54));
        assert_eq!(Length::from_points(72.0), Length::from_inches(1.0));
        assert_eq!(Length::from_mm(12.7).emus(), 457_200);
    }

    #[test]
    fn test_odf_formatting() {
        assert_eq!(Length::from_mm(20.0).to_odf_mm(), "20mm");
        assert_eq!(Length::from_points(11.5).to_odf_pt(), "11.5pt");
        assert_eq!(Length::from_cm(-0.635).to_odf(MeasureUnit::Centimeter), "-0.635cm");
        assert_eq!(Length::ZERO.to_odf_pt(), "0pt");
    }

    #[test]
    fn test_nan_is_zero() {
        assert!(Length::from_mm(f64::NAN).is_zero());
    }

    #[test]
    fn test_ordering() {
        assert!(Length::from_mm(1.0) < Length::from_mm(2.0));
        assert!(Length::from_mm(-1.0).is_negative());
    }
}
