//! Main-axis arrangement of a column's children, in dp

use dippy_ui_graphics::Dp;

/// Places children one after another along a column's main axis.
pub trait Arrangement {
    /// Writes the offset of each child, measured from the content's leading edge.
    fn arrange(&self, sizes: &[Dp], out_positions: &mut [Dp]);

    /// Space reserved between `count` children on top of their own sizes.
    fn total_spacing(&self, count: usize) -> Dp;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LinearArrangement {
    /// Children touch each other, starting at the leading edge.
    #[default]
    Start,
    /// A fixed gap between neighbouring children. Nothing before the first or after the last.
    SpacedBy(Dp),
}

impl LinearArrangement {
    pub fn spaced_by(spacing: impl Into<Dp>) -> Self {
        Self::SpacedBy(spacing.into())
    }

    /// Gap inserted between two neighbours.
    pub fn gap(&self) -> Dp {
        match *self {
            LinearArrangement::Start => Dp::HAIRLINE,
            LinearArrangement::SpacedBy(spacing) => spacing,
        }
    }
}

impl Arrangement for LinearArrangement {
    fn arrange(&self, sizes: &[Dp], out_positions: &mut [Dp]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        let gap = self.gap();
        let mut cursor = Dp::HAIRLINE;
        for (&size, position) in sizes.iter().zip(out_positions.iter_mut()) {
            *position = cursor;
            cursor = cursor + size + gap;
        }
    }

    fn total_spacing(&self, count: usize) -> Dp {
        match count {
            0 | 1 => Dp::HAIRLINE,
            _ => self.gap() * (count - 1) as f32,
        }
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
