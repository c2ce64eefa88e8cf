//! UI Widget components

pub mod column;
pub mod text;

pub use column::*;
pub use text::*;
