//! Modifier chains: ordered layout decorations applied to a node.
//!
//! Elements apply outer to inner in call order, so
//! `Modifier::empty().size(..).padding(..)` sizes the node first and pads its
//! content inside that size.

mod padding;
mod size;

use dippy_ui_graphics::EdgeInsets;
use smallvec::SmallVec;

/// A single layout decoration, in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModifierElement {
    Padding(EdgeInsets),
    Size {
        width: Option<f32>,
        height: Option<f32>,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    elements: SmallVec<[ModifierElement; 2]>,
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends `next` inside this modifier.
    pub fn then(mut self, next: Modifier) -> Self {
        self.elements.extend(next.elements);
        self
    }

    fn with_element(element: ModifierElement) -> Self {
        let mut elements = SmallVec::new();
        elements.push(element);
        Self { elements }
    }

    pub fn elements(&self) -> &[ModifierElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Sum of every padding element in the chain.
    pub fn total_padding(&self) -> EdgeInsets {
        let mut total = EdgeInsets::ZERO;
        for element in &self.elements {
            if let ModifierElement::Padding(padding) = element {
                total += *padding;
            }
        }
        total
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
