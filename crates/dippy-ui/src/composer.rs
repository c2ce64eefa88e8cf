//! Composition: records the node tree emitted by composable functions.
//!
//! Composables find the active composer through a thread-local stack, so widget
//! functions can be called without threading a context parameter through user code.

use std::cell::RefCell;
use std::rc::Rc;

use dippy_ui_graphics::Size;

use crate::layout::{self, LayoutTree};
use crate::modifier::Modifier;
use crate::widgets::ColumnSpec;
use crate::NodeError;

pub type NodeId = usize;

#[derive(Clone, Debug)]
pub(crate) enum NodeKind {
    Column(ColumnSpec),
    Text(String),
}

impl NodeKind {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            NodeKind::Column(_) => "Column",
            NodeKind::Text(_) => "Text",
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct LayoutNode {
    pub(crate) modifier: Modifier,
    pub(crate) kind: NodeKind,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Default)]
struct ComposerCore {
    nodes: RefCell<Vec<LayoutNode>>,
    parents: RefCell<Vec<NodeId>>,
    roots: RefCell<Vec<NodeId>>,
}

impl ComposerCore {
    fn insert(&self, modifier: Modifier, kind: NodeKind) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = nodes.len();
        nodes.push(LayoutNode {
            modifier,
            kind,
            children: Vec::new(),
        });
        match self.parents.borrow().last() {
            Some(&parent) => nodes[parent].children.push(id),
            None => self.roots.borrow_mut().push(id),
        }
        id
    }
}

// Thread-local stack of composer handles.
thread_local! {
    static COMPOSER_STACK: RefCell<Vec<Rc<ComposerCore>>> = const { RefCell::new(Vec::new()) };
}

/// Guard that pops the composer stack on drop.
#[must_use = "ComposerScopeGuard pops the composer stack on drop"]
struct ComposerScopeGuard;

impl Drop for ComposerScopeGuard {
    fn drop(&mut self) {
        COMPOSER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

fn enter(core: &Rc<ComposerCore>) -> ComposerScopeGuard {
    COMPOSER_STACK.with(|stack| {
        stack.borrow_mut().push(Rc::clone(core));
    });
    ComposerScopeGuard
}

/// Access the current composer from the thread-local stack.
///
/// # Panics
/// Panics if there is no active composition; widgets may only be called from
/// inside [`Composition::compose`].
fn with_composer<R>(f: impl FnOnce(&ComposerCore) -> R) -> R {
    let core = COMPOSER_STACK.with(|stack| {
        stack
            .borrow()
            .last()
            .cloned()
            .expect("with_composer: no active composition")
    });
    f(&core)
}

/// Records a node under the current parent and returns its id.
pub(crate) fn emit_node(modifier: Modifier, kind: NodeKind) -> NodeId {
    with_composer(|core| core.insert(modifier, kind))
}

/// Runs `content` with `parent` as the target for emitted nodes.
pub(crate) fn with_children(parent: NodeId, content: impl FnOnce()) {
    with_composer(|core| core.parents.borrow_mut().push(parent));
    content();
    with_composer(|core| {
        core.parents.borrow_mut().pop();
    });
}

/// The result of running a composable: an arena of nodes and the roots it emitted.
pub struct Composition {
    nodes: Vec<LayoutNode>,
    roots: Vec<NodeId>,
}

impl Composition {
    /// Runs `content` and records every node it emits.
    pub fn compose(content: impl FnOnce()) -> Self {
        let core = Rc::new(ComposerCore::default());
        {
            let _guard = enter(&core);
            content();
        }
        let nodes = core.nodes.take();
        let roots = core.roots.take();
        log::debug!(
            "composition recorded {} nodes ({} roots)",
            nodes.len(),
            roots.len()
        );
        Self { nodes, roots }
    }

    /// The first node emitted at the top level, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Children of `id` in emission order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId], NodeError> {
        self.node(id).map(|node| node.children.as_slice())
    }

    pub fn modifier(&self, id: NodeId) -> Result<&Modifier, NodeError> {
        self.node(id).map(|node| &node.modifier)
    }

    /// Measures and places the subtree at `root` inside a viewport given in dp.
    pub fn compute_layout(&self, root: NodeId, viewport: Size) -> Result<LayoutTree, NodeError> {
        layout::compute_layout(&self.nodes, root, viewport)
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&LayoutNode, NodeError> {
        self.nodes.get(id).ok_or(NodeError::Missing { id })
    }
}

#[cfg(test)]
#[path = "tests/composer_tests.rs"]
mod tests;
