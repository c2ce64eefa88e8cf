use super::{Modifier, ModifierElement};
use dippy_ui_graphics::{Dp, Size};

impl Modifier {
    /// Declare the preferred size of the content, in dp.
    ///
    /// The incoming measurement constraints may override this value, forcing the content
    /// to be either smaller or larger.
    ///
    /// Example: `Modifier::empty().size(Size { width: 100.0, height: 200.0 })`
    pub fn size(self, size: Size) -> Self {
        self.then(Self::with_element(ModifierElement::Size {
            width: Some(size.width),
            height: Some(size.height),
        }))
    }

    /// Declare the preferred width of the content.
    ///
    /// Example: `Modifier::empty().width(100.dip()).height(200.dip())`
    pub fn width(self, width: impl Into<Dp>) -> Self {
        self.then(Self::with_element(ModifierElement::Size {
            width: Some(width.into().0),
            height: None,
        }))
    }

    /// Declare the preferred height of the content.
    pub fn height(self, height: impl Into<Dp>) -> Self {
        self.then(Self::with_element(ModifierElement::Size {
            width: None,
            height: Some(height.into().0),
        }))
    }
}
