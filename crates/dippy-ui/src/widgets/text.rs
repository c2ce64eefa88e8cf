//! Text widget implementation

use crate::composer::{emit_node, NodeKind};
use crate::modifier::Modifier;
use crate::NodeId;

/// Emits a single run of text, measured by the active [`crate::TextMeasurer`].
pub fn Text(value: impl Into<String>, modifier: Modifier) -> NodeId {
    emit_node(modifier, NodeKind::Text(value.into()))
}
