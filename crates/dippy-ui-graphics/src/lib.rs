//! Pure math/data for units & geometry in Deeply Dippy
//!
//! This crate contains the dip/dp unit types, their literal conversions, and the
//! geometry primitives that the layout system works with.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::unit::{Dip, DipExt, DipRect, Dp, DpExt};
}
