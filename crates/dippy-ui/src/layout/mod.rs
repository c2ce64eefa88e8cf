//! Headless measure & place pass over a composed node tree.
//!
//! All coordinates are dp-valued `f32`. A node's rect covers its whole modifier
//! chain; its content rect is what remains inside the padding.

use std::fmt::Write as _;

use dippy_ui_graphics::{Dp, EdgeInsets, Point, Rect, Size};
use dippy_ui_layout::{Arrangement, Constraints};

use crate::composer::{LayoutNode, NodeKind};
use crate::modifier::ModifierElement;
use crate::text::measure_text;
use crate::widgets::ColumnSpec;
use crate::{NodeError, NodeId};

/// A placed node.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBox {
    pub node_id: NodeId,
    /// Bounds including padding, in absolute dp.
    pub rect: Rect,
    /// Bounds of the content inside the modifier chain, in absolute dp.
    pub content_rect: Rect,
    /// Total padding declared on the node.
    pub padding: EdgeInsets,
    /// Text of a `Text` node.
    pub text: Option<String>,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    /// Finds `id` in this subtree.
    pub fn find(&self, id: NodeId) -> Option<&LayoutBox> {
        if self.node_id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// This box's bounds in physical pixels.
    pub fn rect_px(&self, density: f32) -> Rect {
        self.rect.to_px(density)
    }

    fn dump_into(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        let kind = if self.text.is_some() { "Text" } else { "Column" };
        let _ = write!(
            out,
            "{indent}{kind} #{} rect=({:.1}, {:.1}, {:.1}x{:.1})",
            self.node_id, self.rect.x, self.rect.y, self.rect.width, self.rect.height
        );
        if !self.padding.is_zero() {
            let _ = write!(
                out,
                " padding=({:.1}, {:.1}, {:.1}, {:.1})",
                self.padding.left, self.padding.top, self.padding.right, self.padding.bottom
            );
        }
        if let Some(text) = &self.text {
            let _ = write!(out, " {text:?}");
        }
        out.push('\n');
        for child in &self.children {
            child.dump_into(depth + 1, out);
        }
    }
}

/// Result of a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutTree {
    root: LayoutBox,
}

impl LayoutTree {
    pub fn root(&self) -> &LayoutBox {
        &self.root
    }

    pub fn find(&self, id: NodeId) -> Option<&LayoutBox> {
        self.root.find(id)
    }

    /// Indented, one-line-per-node description of the tree.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.root.dump_into(0, &mut out);
        out
    }
}

struct Measured {
    node_id: NodeId,
    size: Size,
    content_offset: Point,
    content_size: Size,
    padding: EdgeInsets,
    text: Option<String>,
    // Child positions are relative to the content origin.
    children: Vec<(Measured, Point)>,
}

struct ChainResult {
    size: Size,
    content_offset: Point,
    content_size: Size,
}

pub(crate) fn compute_layout(
    nodes: &[LayoutNode],
    root: NodeId,
    viewport: Size,
) -> Result<LayoutTree, NodeError> {
    let valid = |v: f32| v.is_finite() && v >= 0.0;
    if !valid(viewport.width) || !valid(viewport.height) {
        return Err(NodeError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let measured = measure_node(nodes, root, Constraints::for_viewport(viewport))?;
    let root = place(measured, Point::ZERO);
    log::debug!(
        "layout of node {} finished at {}x{}",
        root.node_id,
        root.rect.width,
        root.rect.height
    );
    Ok(LayoutTree { root })
}

fn measure_node(
    nodes: &[LayoutNode],
    id: NodeId,
    constraints: Constraints,
) -> Result<Measured, NodeError> {
    let node = nodes.get(id).ok_or(NodeError::Missing { id })?;
    let mut children = Vec::new();
    let chain = measure_chain(node.modifier.elements(), constraints, &mut |inner: Constraints| {
        match &node.kind {
            NodeKind::Text(text) => {
                let metrics = measure_text(text);
                Ok(inner.constrain(metrics.width, metrics.height))
            }
            NodeKind::Column(spec) => measure_column(nodes, node, spec, inner, &mut children),
        }
    })?;
    log::debug!(
        "measured {} #{id}: {}x{}",
        node.kind.name(),
        chain.size.width,
        chain.size.height
    );
    Ok(Measured {
        node_id: id,
        size: chain.size,
        content_offset: chain.content_offset,
        content_size: chain.content_size,
        padding: node.modifier.total_padding(),
        text: match &node.kind {
            NodeKind::Text(text) => Some(text.clone()),
            NodeKind::Column(_) => None,
        },
        children,
    })
}

/// Walks the modifier chain outer to inner, then measures the content itself.
fn measure_chain<F>(
    elements: &[ModifierElement],
    constraints: Constraints,
    measure_content: &mut F,
) -> Result<ChainResult, NodeError>
where
    F: FnMut(Constraints) -> Result<Size, NodeError>,
{
    let Some((element, rest)) = elements.split_first() else {
        let size = measure_content(constraints)?;
        return Ok(ChainResult {
            size,
            content_offset: Point::ZERO,
            content_size: size,
        });
    };

    match *element {
        ModifierElement::Padding(padding) => {
            let horizontal = padding.horizontal_sum();
            let vertical = padding.vertical_sum();
            let inner = measure_chain(
                rest,
                constraints.deflate(horizontal, vertical),
                measure_content,
            )?;
            Ok(ChainResult {
                size: constraints.constrain(
                    inner.size.width + horizontal,
                    inner.size.height + vertical,
                ),
                content_offset: Point::new(
                    inner.content_offset.x + padding.left,
                    inner.content_offset.y + padding.top,
                ),
                content_size: inner.content_size,
            })
        }
        ModifierElement::Size { width, height } => {
            let inner = measure_chain(rest, constraints.enforce(width, height), measure_content)?;
            Ok(ChainResult {
                size: constraints.constrain(inner.size.width, inner.size.height),
                ..inner
            })
        }
    }
}

fn measure_column(
    nodes: &[LayoutNode],
    node: &LayoutNode,
    spec: &ColumnSpec,
    constraints: Constraints,
    out: &mut Vec<(Measured, Point)>,
) -> Result<Size, NodeError> {
    let child_constraints = constraints.loosen().with_unbounded_height();
    let measured = node
        .children
        .iter()
        .map(|&child| measure_node(nodes, child, child_constraints))
        .collect::<Result<Vec<_>, _>>()?;

    let heights: Vec<Dp> = measured.iter().map(|child| Dp(child.size.height)).collect();
    let spacing = spec.vertical_arrangement.total_spacing(heights.len());
    let content_height = heights.iter().map(|height| height.0).sum::<f32>() + spacing.0;
    // NaN widths stay NaN instead of being skipped by `f32::max`.
    let content_width = measured.iter().fold(0.0_f32, |widest, child| {
        if child.size.width.is_nan() || child.size.width > widest {
            child.size.width
        } else {
            widest
        }
    });
    let size = constraints.constrain(content_width, content_height);

    let mut positions = vec![Dp::HAIRLINE; heights.len()];
    spec.vertical_arrangement.arrange(&heights, &mut positions);

    out.clear();
    for (child, y) in measured.into_iter().zip(positions) {
        let x = spec
            .horizontal_alignment
            .align(size.width, child.size.width);
        out.push((child, Point::new(x, y.0)));
    }
    Ok(size)
}

fn place(measured: Measured, origin: Point) -> LayoutBox {
    let content_origin = Point::new(
        origin.x + measured.content_offset.x,
        origin.y + measured.content_offset.y,
    );
    let children = measured
        .children
        .into_iter()
        .map(|(child, position)| {
            place(
                child,
                Point::new(content_origin.x + position.x, content_origin.y + position.y),
            )
        })
        .collect();
    LayoutBox {
        node_id: measured.node_id,
        rect: Rect::from_origin_size(origin, measured.size),
        content_rect: Rect::from_size(measured.content_size).translate(content_origin),
        padding: measured.padding,
        text: measured.text,
        children,
    }
}

#[cfg(test)]
#[path = "tests/measure_tests.rs"]
mod tests;
