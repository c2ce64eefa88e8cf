//! Unit types: Dip, Dp, and conversions
//!
//! [`Dip`] is the device-independent pixel used by component code. Arithmetic on
//! a [`Dip`] produces a [`Dp`], the dimension the layout system consumes. Both
//! share the same sentinels: [`Dip::HAIRLINE`] (zero), [`Dip::INFINITY`]
//! (unbounded) and [`Dip::UNSPECIFIED`] (NaN, "no value set"). NaN flows through
//! every operator following IEEE rules; nothing here panics.
//!
//! ```
//! use dippy_ui_graphics::{Dip, DipExt, Dp, DpExt};
//!
//! let margin = 16.dip() + 8.dp();
//! assert_eq!(margin, Dp(24.0));
//! assert_eq!(Dip(3.0).coerce_in(Dip(1.0), Dip(2.0)), Dp(2.0));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Device-independent pixels.
///
/// Hairline (one physical pixel) thickness is expressed with [`Dip::HAIRLINE`], a
/// dimension that takes up no space. Values are normally created through
/// [`DipExt::dip`]: `10.dip()`, `10f32.dip()`, `20.0_f64.dip()`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dip(pub f32);

/// Density-independent pixels as consumed by layout.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dip {
    /// A dimension used to represent a hairline drawing element. Hairline elements
    /// take up no space, but draw a single pixel independent of the display density.
    pub const HAIRLINE: Dip = Dip(0.0);

    /// Infinite dip dimension.
    pub const INFINITY: Dip = Dip(f32::INFINITY);

    /// Constant that means "no dimension set".
    pub const UNSPECIFIED: Dip = Dip(f32::NAN);

    /// `false` when this is [`Dip::UNSPECIFIED`].
    #[inline]
    pub fn is_specified(self) -> bool {
        !self.0.is_nan()
    }

    /// `true` when this is [`Dip::UNSPECIFIED`].
    #[inline]
    pub fn is_unspecified(self) -> bool {
        self.0.is_nan()
    }

    /// `false` only for [`Dip::INFINITY`]. An unspecified value counts as finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0 != f32::INFINITY
    }

    /// Returns this value as [`Dp`] when specified, otherwise the result of `fallback`.
    pub fn take_or_else(self, fallback: impl FnOnce() -> Dp) -> Dp {
        if self.is_specified() {
            Dp(self.0)
        } else {
            fallback()
        }
    }

    /// Total three-way comparison by magnitude.
    ///
    /// Unlike `partial_cmp`, this always yields an ordering: NaN equals NaN and is
    /// greater than every other value, and `-0.0` sorts before `0.0`.
    pub fn compare_to(self, other: Dip) -> Ordering {
        compare_magnitudes(self.0, other.0)
    }

    /// Ensures this value lies in `minimum..=maximum`.
    pub fn coerce_in(self, minimum: Dip, maximum: Dip) -> Dp {
        Dp(coerce_in(self.0, minimum.0, maximum.0))
    }

    /// Ensures this value is not less than `minimum`.
    pub fn coerce_at_least(self, minimum: Dip) -> Dp {
        Dp(coerce_at_least(self.0, minimum.0))
    }

    /// Ensures this value is not greater than `maximum`.
    pub fn coerce_at_most(self, maximum: Dip) -> Dp {
        Dp(coerce_at_most(self.0, maximum.0))
    }

    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

impl Dp {
    pub const HAIRLINE: Dp = Dp(0.0);
    pub const INFINITY: Dp = Dp(f32::INFINITY);
    pub const UNSPECIFIED: Dp = Dp(f32::NAN);

    #[inline]
    pub fn is_specified(self) -> bool {
        !self.0.is_nan()
    }

    #[inline]
    pub fn is_unspecified(self) -> bool {
        self.0.is_nan()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0 != f32::INFINITY
    }

    pub fn take_or_else(self, fallback: impl FnOnce() -> Dp) -> Dp {
        if self.is_specified() {
            self
        } else {
            fallback()
        }
    }

    pub fn compare_to(self, other: Dp) -> Ordering {
        compare_magnitudes(self.0, other.0)
    }

    pub fn coerce_in(self, minimum: Dp, maximum: Dp) -> Dp {
        Dp(coerce_in(self.0, minimum.0, maximum.0))
    }

    pub fn coerce_at_least(self, minimum: Dp) -> Dp {
        Dp(coerce_at_least(self.0, minimum.0))
    }

    pub fn coerce_at_most(self, maximum: Dp) -> Dp {
        Dp(coerce_at_most(self.0, maximum.0))
    }

    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

fn compare_magnitudes(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

// NaN passes through unchanged; an inverted range never panics.
fn coerce_in(value: f32, minimum: f32, maximum: f32) -> f32 {
    if value < minimum {
        minimum
    } else if value > maximum {
        maximum
    } else {
        value
    }
}

fn coerce_at_least(value: f32, minimum: f32) -> f32 {
    if value < minimum {
        minimum
    } else {
        value
    }
}

fn coerce_at_most(value: f32, maximum: f32) -> f32 {
    if value > maximum {
        maximum
    } else {
        value
    }
}

impl fmt::Display for Dip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unspecified() {
            f.write_str("Dip.Unspecified")
        } else {
            write_magnitude(f, self.0)?;
            f.write_str(".dip")
        }
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unspecified() {
            f.write_str("Dp.Unspecified")
        } else {
            write_magnitude(f, self.0)?;
            f.write_str(".dp")
        }
    }
}

/// Writes `value` as `16.0`, `Infinity` or `1.0E10`: plain decimals in
/// `[1e-3, 1e7)`, scientific notation outside it.
fn write_magnitude(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return write!(f, "{value:?}");
    }
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        write!(f, "{mantissa}E{exponent}")
    } else {
        write!(f, "{mantissa}.0E{exponent}")
    }
}

impl From<Dip> for Dp {
    fn from(value: Dip) -> Self {
        Dp(value.0)
    }
}

impl From<Dp> for Dip {
    fn from(value: Dp) -> Self {
        Dip(value.0)
    }
}

impl From<Dip> for f32 {
    fn from(value: Dip) -> Self {
        value.0
    }
}

impl From<Dp> for f32 {
    fn from(value: Dp) -> Self {
        value.0
    }
}

// Dip on the left-hand side

impl Add for Dip {
    type Output = Dp;

    fn add(self, rhs: Dip) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Add<Dp> for Dip {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dip {
    type Output = Dp;

    fn sub(self, rhs: Dip) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Sub<Dp> for Dip {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

/// Same as multiplying by `-1`.
impl Neg for Dip {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

impl Div<f32> for Dip {
    type Output = Dp;

    fn div(self, rhs: f32) -> Dp {
        Dp(self.0 / rhs)
    }
}

impl Div<i32> for Dip {
    type Output = Dp;

    fn div(self, rhs: i32) -> Dp {
        Dp(self.0 / rhs as f32)
    }
}

/// Dividing two dimensions yields a plain ratio.
impl Div for Dip {
    type Output = f32;

    fn div(self, rhs: Dip) -> f32 {
        self.0 / rhs.0
    }
}

impl Div<Dp> for Dip {
    type Output = f32;

    fn div(self, rhs: Dp) -> f32 {
        self.0 / rhs.0
    }
}

impl Mul<f32> for Dip {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Mul<i32> for Dip {
    type Output = Dp;

    fn mul(self, rhs: i32) -> Dp {
        Dp(self.0 * rhs as f32)
    }
}

/// Multiplies the raw magnitudes; the right-hand side acts as a scalar.
impl Mul for Dip {
    type Output = Dp;

    fn mul(self, rhs: Dip) -> Dp {
        Dp(self.0 * rhs.0)
    }
}

impl Mul<Dp> for Dip {
    type Output = Dp;

    fn mul(self, rhs: Dp) -> Dp {
        Dp(self.0 * rhs.0)
    }
}

impl Mul<Dip> for f32 {
    type Output = Dp;

    fn mul(self, rhs: Dip) -> Dp {
        Dp(self * rhs.0)
    }
}

impl Mul<Dip> for i32 {
    type Output = Dp;

    fn mul(self, rhs: Dip) -> Dp {
        Dp(self as f32 * rhs.0)
    }
}

// Dp on the left-hand side

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Add<Dip> for Dp {
    type Output = Dp;

    fn add(self, rhs: Dip) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Sub<Dip> for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dip) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

impl Div<f32> for Dp {
    type Output = Dp;

    fn div(self, rhs: f32) -> Dp {
        Dp(self.0 / rhs)
    }
}

impl Div<i32> for Dp {
    type Output = Dp;

    fn div(self, rhs: i32) -> Dp {
        Dp(self.0 / rhs as f32)
    }
}

impl Div for Dp {
    type Output = f32;

    fn div(self, rhs: Dp) -> f32 {
        self.0 / rhs.0
    }
}

impl Div<Dip> for Dp {
    type Output = f32;

    fn div(self, rhs: Dip) -> f32 {
        self.0 / rhs.0
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Mul<i32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: i32) -> Dp {
        Dp(self.0 * rhs as f32)
    }
}

impl Mul<Dp> for f32 {
    type Output = Dp;

    fn mul(self, rhs: Dp) -> Dp {
        Dp(self * rhs.0)
    }
}

impl Mul<Dp> for i32 {
    type Output = Dp;

    fn mul(self, rhs: Dp) -> Dp {
        Dp(self as f32 * rhs.0)
    }
}

/// Creates a [`Dip`] from a numeric literal: `10.dip()`, `10f32.dip()`, `20.0_f64.dip()`.
pub trait DipExt {
    fn dip(self) -> Dip;
}

impl DipExt for i32 {
    fn dip(self) -> Dip {
        Dip(self as f32)
    }
}

impl DipExt for f32 {
    fn dip(self) -> Dip {
        Dip(self)
    }
}

impl DipExt for f64 {
    fn dip(self) -> Dip {
        Dip(self as f32)
    }
}

/// Creates a [`Dp`] from a numeric literal: `8.dp()`.
pub trait DpExt {
    fn dp(self) -> Dp;
}

impl DpExt for i32 {
    fn dp(self) -> Dp {
        Dp(self as f32)
    }
}

impl DpExt for f32 {
    fn dp(self) -> Dp {
        Dp(self)
    }
}

impl DpExt for f64 {
    fn dp(self) -> Dp {
        Dp(self as f32)
    }
}

/// Four-sided bounds measured in [`Dip`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DipRect {
    pub left: Dip,
    pub top: Dip,
    pub right: Dip,
    pub bottom: Dip,
}

impl DipRect {
    pub const fn new(left: Dip, top: Dip, right: Dip, bottom: Dip) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> Dp {
        self.right - self.left
    }

    pub fn height(&self) -> Dp {
        self.bottom - self.top
    }
}

#[cfg(test)]
#[path = "tests/unit_tests.rs"]
mod tests;
