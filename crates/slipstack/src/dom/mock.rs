//! Headless DOM for tests and host-less embedding.
//!
//! `MockDom` implements every capability trait against a slotmap arena, and
//! records each [`EventBinding`] call so tests can assert exactly which
//! listeners a controller attached and detached.

use parking_lot::Mutex;
use slotmap::SlotMap;

use crate::events::DragEventKind;
use crate::selector::{Selector, TypeSelector};

use super::{ClassToggling, DomTree, EventBinding, IndexLocating, NodeId, SelectorMatching};

/// Whether a [`BindCall`] attached or detached a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOp {
    /// Listener attached.
    Bind,
    /// Listener detached.
    Unbind,
}

/// One recorded call to the event-binding capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindCall {
    /// Attach or detach.
    pub op: BindOp,
    /// The element the listener was (un)registered on.
    pub target: NodeId,
    /// The event the listener covers.
    pub event: DragEventKind,
}

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    element_id: Option<String>,
    classes: Vec<String>,
    inline_display: Option<String>,
    draggable: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena-backed element tree with a bind/unbind call log.
#[derive(Debug, Default)]
pub struct MockDom {
    nodes: Mutex<SlotMap<NodeId, NodeData>>,
    bind_log: Mutex<Vec<BindCall>>,
}

impl MockDom {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element with the given tag.
    pub fn create_element(&self, tag: &str) -> NodeId {
        self.nodes.lock().insert(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        })
    }

    /// Set the element's id attribute.
    pub fn set_element_id(&self, node: NodeId, id: &str) {
        if let Some(data) = self.nodes.lock().get_mut(node) {
            data.element_id = Some(id.to_string());
        }
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&self, parent: NodeId, child: NodeId) {
        self.insert_before(parent, child, None);
    }

    /// The element's current class list.
    pub fn class_list(&self, node: NodeId) -> Vec<String> {
        self.nodes
            .lock()
            .get(node)
            .map(|data| data.classes.clone())
            .unwrap_or_default()
    }

    /// Whether the element is currently marked as a native drag source.
    pub fn is_draggable(&self, node: NodeId) -> bool {
        self.nodes
            .lock()
            .get(node)
            .is_some_and(|data| data.draggable)
    }

    /// Every event-binding call made so far, in order.
    pub fn bind_calls(&self) -> Vec<BindCall> {
        self.bind_log.lock().clone()
    }

    /// Forget the recorded event-binding calls.
    pub fn clear_bind_calls(&self) {
        self.bind_log.lock().clear();
    }

    fn unlink(nodes: &mut SlotMap<NodeId, NodeData>, node: NodeId) {
        let Some(parent) = nodes.get(node).and_then(|data| data.parent) else {
            return;
        };
        if let Some(parent_data) = nodes.get_mut(parent) {
            parent_data.children.retain(|&child| child != node);
        }
        if let Some(data) = nodes.get_mut(node) {
            data.parent = None;
        }
    }
}

impl DomTree for MockDom {
    fn contains(&self, node: NodeId) -> bool {
        self.nodes.lock().contains_key(node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.lock().get(node).and_then(|data| data.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .lock()
            .get(node)
            .map(|data| data.children.clone())
            .unwrap_or_default()
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let nodes = self.nodes.lock();
        let parent = nodes.get(node)?.parent?;
        let siblings = &nodes.get(parent)?.children;
        let index = siblings.iter().position(|&sibling| sibling == node)?;
        siblings.get(index + 1).copied()
    }

    fn insert_before(&self, parent: NodeId, node: NodeId, reference: Option<NodeId>) {
        if reference == Some(node) {
            return;
        }
        let mut nodes = self.nodes.lock();
        if !nodes.contains_key(parent) || !nodes.contains_key(node) {
            return;
        }
        Self::unlink(&mut nodes, node);

        let Some(parent_data) = nodes.get_mut(parent) else {
            return;
        };
        let index = reference
            .and_then(|reference| {
                parent_data
                    .children
                    .iter()
                    .position(|&child| child == reference)
            })
            .unwrap_or(parent_data.children.len());
        parent_data.children.insert(index, node);
        if let Some(data) = nodes.get_mut(node) {
            data.parent = Some(parent);
        }
    }

    fn detach(&self, node: NodeId) {
        let mut nodes = self.nodes.lock();
        Self::unlink(&mut nodes, node);
    }

    fn clone_shallow(&self, node: NodeId) -> NodeId {
        let mut nodes = self.nodes.lock();
        let template = match nodes.get(node) {
            Some(data) => NodeData {
                tag: data.tag.clone(),
                element_id: data.element_id.clone(),
                classes: data.classes.clone(),
                inline_display: data.inline_display.clone(),
                draggable: data.draggable,
                parent: None,
                children: Vec::new(),
            },
            None => NodeData::default(),
        };
        nodes.insert(template)
    }

    fn tag_name(&self, node: NodeId) -> String {
        self.nodes
            .lock()
            .get(node)
            .map(|data| data.tag.clone())
            .unwrap_or_default()
    }

    fn display(&self, node: NodeId) -> String {
        self.nodes
            .lock()
            .get(node)
            .and_then(|data| data.inline_display.clone())
            // The mock has no stylesheet cascade; elements default to block.
            .unwrap_or_else(|| "block".to_string())
    }

    fn set_display(&self, node: NodeId, display: &str) {
        if let Some(data) = self.nodes.lock().get_mut(node) {
            data.inline_display = Some(display.to_string());
        }
    }

    fn set_draggable(&self, node: NodeId, draggable: bool) {
        if let Some(data) = self.nodes.lock().get_mut(node) {
            data.draggable = draggable;
        }
    }
}

impl EventBinding for MockDom {
    fn bind(&self, target: NodeId, event: DragEventKind) {
        tracing::trace!(target: "slipstack::dom", ?target, ?event, "bind");
        self.bind_log.lock().push(BindCall {
            op: BindOp::Bind,
            target,
            event,
        });
    }

    fn unbind(&self, target: NodeId, event: DragEventKind) {
        tracing::trace!(target: "slipstack::dom", ?target, ?event, "unbind");
        self.bind_log.lock().push(BindCall {
            op: BindOp::Unbind,
            target,
            event,
        });
    }
}

impl ClassToggling for MockDom {
    fn add_class(&self, node: NodeId, name: &str) {
        if let Some(data) = self.nodes.lock().get_mut(node) {
            if !data.classes.iter().any(|class| class == name) {
                data.classes.push(name.to_string());
            }
        }
    }

    fn remove_class(&self, node: NodeId, name: &str) {
        if let Some(data) = self.nodes.lock().get_mut(node) {
            data.classes.retain(|class| class != name);
        }
    }

    fn has_class(&self, node: NodeId, name: &str) -> bool {
        self.nodes
            .lock()
            .get(node)
            .is_some_and(|data| data.classes.iter().any(|class| class == name))
    }
}

impl IndexLocating for MockDom {
    fn index_of(&self, node: NodeId) -> Option<usize> {
        let nodes = self.nodes.lock();
        let parent = nodes.get(node)?.parent?;
        nodes
            .get(parent)?
            .children
            .iter()
            .position(|&child| child == node)
    }
}

impl SelectorMatching for MockDom {
    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let nodes = self.nodes.lock();
        let Some(data) = nodes.get(node) else {
            return false;
        };
        match &selector.type_selector {
            Some(TypeSelector::Tag(tag)) if *tag != data.tag => return false,
            _ => {}
        }
        if let Some(id) = &selector.id {
            if data.element_id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        selector
            .classes
            .iter()
            .all(|class| data.classes.iter().any(|have| have == class))
    }
}
