//! Layout constraints system

use dippy_ui_graphics::{Dp, Size};

/// Constraints used during layout measurement, in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Loose constraints bounded by a viewport.
    pub fn for_viewport(viewport: Size) -> Self {
        Self::loose(viewport.width, viewport.height)
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Returns true if all bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.has_bounded_width() && self.has_bounded_height()
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Constrains the provided width and height to fit within these constraints.
    ///
    /// NaN sizes pass through unchanged so that an unspecified dimension stays
    /// visible in the layout result.
    pub fn constrain(&self, width: f32, height: f32) -> Size {
        Size {
            width: coerce(width, self.min_width, self.max_width),
            height: coerce(height, self.min_height, self.max_height),
        }
    }

    /// Creates new constraints with an unbounded maximum height.
    pub fn with_unbounded_height(self) -> Self {
        Self {
            max_height: f32::INFINITY,
            ..self
        }
    }

    /// Deflates constraints by the given amount on all sides.
    /// This is used to apply padding before measuring content.
    pub fn deflate(self, horizontal: f32, vertical: f32) -> Self {
        Self {
            min_width: (self.min_width - horizontal).max(0.0),
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: (self.min_height - vertical).max(0.0),
            max_height: (self.max_height - vertical).max(0.0),
        }
    }

    /// Creates new constraints with loosened minimums (min = 0).
    pub fn loosen(self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..self
        }
    }

    /// Creates constraints that enforce the given size where one is provided,
    /// coerced into the current bounds.
    pub fn enforce(self, width: Option<f32>, height: Option<f32>) -> Self {
        let mut enforced = self;
        if let Some(width) = width {
            let width = coerce(width, self.min_width, self.max_width);
            enforced.min_width = width;
            enforced.max_width = width;
        }
        if let Some(height) = height {
            let height = coerce(height, self.min_height, self.max_height);
            enforced.min_height = height;
            enforced.max_height = height;
        }
        enforced
    }
}

fn coerce(value: f32, min: f32, max: f32) -> f32 {
    Dp(value).coerce_in(Dp(min), Dp(max)).0
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
