//! Strongly-typed numeric primitives for penframe (zero-cost newtypes).
//!
//! Designs are authored in millimetres and rendered at a fixed
//! pixels-per-millimetre scale. `Mm` and `Px` keep the two spaces apart;
//! the only way across is a [`Scaler`].

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::{DVec2, dvec2};

use crate::defaults;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Length in millimetres (the authoring unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Mm(pub f64);

impl Mm {
    pub const ZERO: Mm = Mm(0.0);

    /// Const-friendly, unchecked constructor for built-in defaults.
    #[inline]
    pub(crate) const fn mm(val: f64) -> Mm {
        Mm(val)
    }

    /// Create a length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Mm, NumericError> {
        check_finite(val).map(Mm)
    }

    /// Create a non-negative length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Mm, NumericError> {
        let val = check_finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Mm(val))
        }
    }

    #[inline]
    pub fn abs(self) -> Mm {
        Mm(self.0.abs())
    }

    #[inline]
    pub fn min(self, other: Mm) -> Mm {
        Mm(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Mm) -> Mm {
        Mm(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Mm {
    type Output = Mm;
    fn add(self, rhs: Mm) -> Mm { Mm(self.0 + rhs.0) }
}
impl Sub for Mm {
    type Output = Mm;
    fn sub(self, rhs: Mm) -> Mm { Mm(self.0 - rhs.0) }
}
impl Mul<f64> for Mm {
    type Output = Mm;
    fn mul(self, rhs: f64) -> Mm { Mm(self.0 * rhs) }
}
impl Div<f64> for Mm {
    type Output = Mm;
    fn div(self, rhs: f64) -> Mm { Mm(self.0 / rhs) }
}
impl Neg for Mm {
    type Output = Mm;
    fn neg(self) -> Mm { Mm(-self.0) }
}

impl AddAssign for Mm {
    fn add_assign(&mut self, rhs: Mm) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Mm {
    fn sub_assign(&mut self, rhs: Mm) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Mm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

/// Canvas pixels (millimetres after applying the scale)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Px(pub f64);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Simple color model for guide and stroke colors.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
    Raw(String),
}

impl Color {
    pub fn black() -> Self {
        Color::Rgb(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) | Color::Raw(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

/// Convert millimetres → canvas pixels (the editor uses 3 px/mm).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    pub px_per_mm: f64,
}

impl Default for Scaler {
    fn default() -> Self {
        Scaler { px_per_mm: defaults::PX_PER_MM }
    }
}

impl Scaler {
    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(px_per_mm: f64) -> Result<Self, NumericError> {
        let px_per_mm = check_finite(px_per_mm)?;
        if px_per_mm == 0.0 {
            Err(NumericError::Zero)
        } else if px_per_mm < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scaler { px_per_mm })
        }
    }

    /// Convert a length in millimetres to raw f64 pixels.
    #[inline]
    pub fn px(&self, l: Mm) -> f64 {
        l.0 * self.px_per_mm
    }

    /// Convert a point given in millimetres to a pixel-space vector.
    pub fn point(&self, x: Mm, y: Mm) -> DVec2 {
        dvec2(self.px(x), self.px(y))
    }

    /// Convert pixels back to millimetres.
    pub fn to_mm(&self, px: Px) -> Mm {
        Mm(px.0 / self.px_per_mm)
    }
}

/// Axis-aligned bounding box in canvas pixels.
///
/// Width and height are always non-negative; [`BoundingBox::new`]
/// normalizes a box given with a negative extent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        let (left, width) = if width < 0.0 { (left + width, -width) } else { (left, width) };
        let (top, height) = if height < 0.0 { (top + height, -height) } else { (top, height) };
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn origin(&self) -> DVec2 {
        dvec2(self.left, self.top)
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// True when the box encloses no area (either side is zero).
    pub fn is_zero_size(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Same box moved so its top-left corner sits at `origin`.
    pub fn moved_to(&self, origin: DVec2) -> Self {
        Self { left: origin.x, top: origin.y, ..*self }
    }

    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn enclosing(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mm_try_new_rejects_nan_and_infinity() {
        assert_eq!(Mm::try_new(f64::NAN), Err(NumericError::NaN));
        assert_eq!(Mm::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert!(Mm::try_new(-1.0).is_ok());
    }

    #[test]
    fn mm_try_non_negative_rejects_negative() {
        assert_eq!(Mm::try_non_negative(-0.5), Err(NumericError::Negative));
        assert_eq!(Mm::try_non_negative(0.0), Ok(Mm(0.0)));
    }

    #[test]
    fn mm_arithmetic() {
        let a = Mm(3.0);
        let b = Mm(2.0);
        assert_eq!(a + b, Mm(5.0));
        assert_eq!(a - b, Mm(1.0));
        assert_eq!(a * 2.0, Mm(6.0));
        assert_eq!(a / 2.0, Mm(1.5));
        assert_eq!(-a, Mm(-3.0));
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn scaler_defaults_to_three_px_per_mm() {
        let scaler = Scaler::default();
        assert_eq!(scaler.px(Mm(210.0)), 630.0);
        assert_eq!(scaler.to_mm(Px(630.0)), Mm(210.0));
    }

    #[test]
    fn scaler_try_new_rejects_bad_values() {
        assert_eq!(Scaler::try_new(0.0), Err(NumericError::Zero));
        assert_eq!(Scaler::try_new(-3.0), Err(NumericError::Negative));
        assert_eq!(Scaler::try_new(f64::NAN), Err(NumericError::NaN));
        assert!(Scaler::try_new(3.0).is_ok());
    }

    #[test]
    fn bounding_box_normalizes_negative_extent() {
        let bb = BoundingBox::new(10.0, 10.0, -4.0, -6.0);
        assert_eq!(bb, BoundingBox { left: 6.0, top: 4.0, width: 4.0, height: 6.0 });
        assert_eq!(bb.right(), 10.0);
        assert_eq!(bb.bottom(), 10.0);
    }

    #[test]
    fn bounding_box_enclosing_points() {
        let bb = BoundingBox::enclosing([dvec2(3.0, 1.0), dvec2(-1.0, 4.0), dvec2(2.0, 2.0)]);
        assert_eq!(bb, Some(BoundingBox::new(-1.0, 1.0, 4.0, 3.0)));
        assert_eq!(BoundingBox::enclosing(std::iter::empty()), None);
    }

    #[test]
    fn color_display_is_css() {
        assert_eq!(Color::Rgb(255, 64, 129).to_string(), "rgb(255,64,129)");
        assert_eq!(Color::Named("black".into()).to_string(), "black");
    }
}
