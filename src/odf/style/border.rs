//! Border value type for paragraph properties.

use crate::common::{Length, RGBColor};

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    /// Single solid line
    #[default]
    Solid,
    /// Dotted line
    Dotted,
    /// Dashed line
    Dashed,
    /// Two solid lines
    Double,
    /// 3D grooved line
    Groove,
    /// 3D ridged line
    Ridge,
    /// 3D inset line
    Inset,
    /// 3D outset line
    Outset,
}

impl BorderStyle {
    /// Convert to the XSL-FO border style keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
            Self::Double => "double",
            Self::Groove => "groove",
            Self::Ridge => "ridge",
            Self::Inset => "inset",
            Self::Outset => "outset",
        }
    }
}

/// One side of a paragraph border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border {
    width: Length,
    style: BorderStyle,
    color: RGBColor,
}

impl Border {
    /// Create a border.
    ///
    /// Widths that are zero or negative are accepted here but rejected by the
    /// paragraph setters, which leave the side unchanged.
    pub fn new(width: Length, style: BorderStyle, color: RGBColor) -> Self {
        Self {
            width,
            style,
            color,
        }
    }

    /// Create a solid black border of the given width.
    pub fn solid(width: Length) -> Self {
        Self::new(width, BorderStyle::Solid, RGBColor::BLACK)
    }

    /// Line width
    #[inline]
    pub fn width(&self) -> Length {
        self.width
    }

    /// Line style
    #[inline]
    pub fn style(&self) -> BorderStyle {
        self.style
    }

    /// Line color
    #[inline]
    pub fn color(&self) -> RGBColor {
        self.color
    }

    /// Whether this border can be written (positive width).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.emus() > 0
    }

    /// Format as an `fo:border-*` value, e.g. `"0.5pt solid #000000"`.
    pub fn to_odf(&self) -> String {
        format!("{} {} {}", self.width.to_odf_pt(), self.style.as_str(), self.color)
    }
}
