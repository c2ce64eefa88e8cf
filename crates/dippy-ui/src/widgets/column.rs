//! Column widget implementation

use crate::composer::{emit_node, with_children, NodeKind};
use crate::modifier::Modifier;
use crate::NodeId;
use dippy_ui_layout::{HorizontalAlignment, LinearArrangement};

/// How a Column arranges and aligns its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSpec {
    pub vertical_arrangement: LinearArrangement,
    pub horizontal_alignment: HorizontalAlignment,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.vertical_arrangement = arrangement;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            vertical_arrangement: LinearArrangement::Start,
            horizontal_alignment: HorizontalAlignment::Start,
        }
    }
}

/// Stacks the nodes emitted by `content` vertically.
pub fn Column<F>(modifier: Modifier, spec: ColumnSpec, content: F) -> NodeId
where
    F: FnOnce(),
{
    let id = emit_node(modifier, NodeKind::Column(spec));
    with_children(id, content);
    id
}
