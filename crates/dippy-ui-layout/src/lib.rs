//! Layout contracts & policies for Deeply Dippy

mod alignment;
mod arrangement;
mod constraints;

pub use alignment::*;
pub use arrangement::*;
pub use constraints::*;

pub mod prelude {
    pub use crate::alignment::HorizontalAlignment;
    pub use crate::arrangement::{Arrangement, LinearArrangement};
    pub use crate::constraints::Constraints;
}
