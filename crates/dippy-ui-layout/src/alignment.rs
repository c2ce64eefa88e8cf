//! Alignment utilities for positioning content

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Align children to the leading edge.
    Start,
    /// Align children to the horizontal center.
    CenterHorizontally,
    /// Align children to the trailing edge.
    End,
}

impl HorizontalAlignment {
    /// Computes the horizontal offset of a child of width `child` inside `available`.
    /// Children wider than the space are pinned to the leading edge; an unspecified
    /// (NaN) width yields a NaN offset for the centered and trailing alignments.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::CenterHorizontally => leading_offset((available - child) / 2.0),
            HorizontalAlignment::End => leading_offset(available - child),
        }
    }
}

// `f32::max` would turn NaN into 0.
fn leading_offset(free: f32) -> f32 {
    if free < 0.0 {
        0.0
    } else {
        free
    }
}
