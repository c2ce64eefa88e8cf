use super::{Modifier, ModifierElement};
use dippy_ui_graphics::{Dp, EdgeInsets};

impl Modifier {
    /// Add uniform padding to all sides.
    ///
    /// Example: `Modifier::empty().padding(16.dip())`
    pub fn padding(self, all: impl Into<Dp>) -> Self {
        self.padding_insets(EdgeInsets::uniform(all.into().0))
    }

    /// Add horizontal padding (left and right).
    ///
    /// Example: `Modifier::empty().padding_horizontal(16.dip())`
    pub fn padding_horizontal(self, horizontal: impl Into<Dp>) -> Self {
        self.padding_insets(EdgeInsets::horizontal(horizontal.into().0))
    }

    /// Add vertical padding (top and bottom).
    ///
    /// Example: `Modifier::empty().padding_vertical(8.dp())`
    pub fn padding_vertical(self, vertical: impl Into<Dp>) -> Self {
        self.padding_insets(EdgeInsets::vertical(vertical.into().0))
    }

    /// Add symmetric padding (horizontal and vertical).
    ///
    /// Example: `Modifier::empty().padding_symmetric(16.dip(), 8.dip())`
    pub fn padding_symmetric(self, horizontal: impl Into<Dp>, vertical: impl Into<Dp>) -> Self {
        self.padding_insets(EdgeInsets::symmetric(
            horizontal.into().0,
            vertical.into().0,
        ))
    }

    /// Add padding to each side individually.
    ///
    /// Example: `Modifier::empty().padding_each(8.dip(), 4.dip(), 8.dip(), 4.dip())`
    pub fn padding_each(
        self,
        left: impl Into<Dp>,
        top: impl Into<Dp>,
        right: impl Into<Dp>,
        bottom: impl Into<Dp>,
    ) -> Self {
        self.padding_insets(EdgeInsets::from_components(
            left.into().0,
            top.into().0,
            right.into().0,
            bottom.into().0,
        ))
    }

    // Unspecified or negative padding is kept so that it shows up in layout.
    fn padding_insets(self, padding: EdgeInsets) -> Self {
        if !padding.is_valid() {
            log::warn!("padding {padding:?} is unspecified or negative; layout will carry it through");
        }
        self.then(Self::with_element(ModifierElement::Padding(padding)))
    }
}
