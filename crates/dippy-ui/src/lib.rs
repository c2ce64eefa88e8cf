//! UI primitives for Deeply Dippy
//!
//! A small headless Compose-style toolkit: composables emit `Column` and `Text`
//! nodes into a [`Composition`], modifiers carry dp-valued padding and sizes, and
//! [`Composition::compute_layout`] measures and places the tree.

#![allow(non_snake_case)]

mod composer;
mod error;
pub mod layout;
pub mod modifier;
mod text;
pub mod widgets;

pub use composer::{Composition, NodeId};
pub use error::NodeError;
pub use layout::{LayoutBox, LayoutTree};
pub use modifier::{Modifier, ModifierElement};
pub use text::{measure_text, set_text_measurer, TextMeasurer, TextMetrics};
pub use widgets::*;

pub use dippy_ui_graphics::{Dip, DipExt, DipRect, Dp, DpExt, EdgeInsets, Point, Rect, Size};
pub use dippy_ui_layout::{Constraints, HorizontalAlignment, LinearArrangement};
