//! DOM capability traits.
//!
//! The controller never talks to a real document. Every host concern it
//! needs is a capability trait the host implements and injects at
//! construction time: tree structure, event listener registration, class
//! toggling, sibling-index lookup, and selector matching. A browser host
//! backs these with real elements; [`MockDom`] backs them with an arena
//! for headless tests.

mod mock;

pub use mock::{BindCall, BindOp, MockDom};

use slotmap::new_key_type;

use crate::events::DragEventKind;
use crate::selector::Selector;

new_key_type! {
    /// Host-side handle for one element.
    ///
    /// The controller treats node ids as opaque: it can only compare them and
    /// pass them back to the capability traits that minted them.
    pub struct NodeId;
}

/// Structural view and mutation of the host tree.
///
/// `insert_before` follows DOM move semantics: a node that already has a
/// parent is detached from it first, and a `None` reference appends.
pub trait DomTree: Send + Sync {
    /// Whether the node exists in the host.
    fn contains(&self, node: NodeId) -> bool;

    /// The node's parent, if attached.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// The node's children, in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// The sibling immediately after the node, if any.
    fn next_sibling(&self, node: NodeId) -> Option<NodeId>;

    /// Insert `node` into `parent` before `reference` (append when `None`).
    fn insert_before(&self, parent: NodeId, node: NodeId, reference: Option<NodeId>);

    /// Detach the node from its parent, if attached.
    fn detach(&self, node: NodeId);

    /// Clone the node without its children: same tag, classes, and styles.
    fn clone_shallow(&self, node: NodeId) -> NodeId;

    /// The node's element tag ("li", "div", ...).
    fn tag_name(&self, node: NodeId) -> String;

    /// The node's computed CSS `display` value.
    fn display(&self, node: NodeId) -> String;

    /// Set the node's inline CSS `display` value.
    fn set_display(&self, node: NodeId, display: &str);

    /// Mark the node as a native drag source (the `draggable` attribute).
    fn set_draggable(&self, node: NodeId, draggable: bool);
}

/// Event listener registration on the host.
///
/// The host delivers the bound events back through
/// [`Reorderable::handle_event`](crate::Reorderable::handle_event); this
/// trait only records which (target, event) pairs the controller wants.
pub trait EventBinding: Send + Sync {
    /// Attach a listener for `event` on `target`.
    fn bind(&self, target: NodeId, event: DragEventKind);

    /// Detach the listener for `event` on `target`.
    fn unbind(&self, target: NodeId, event: DragEventKind);
}

/// CSS class mutation.
pub trait ClassToggling: Send + Sync {
    /// Add a class to the node's class list.
    fn add_class(&self, node: NodeId, name: &str);

    /// Remove a class from the node's class list.
    fn remove_class(&self, node: NodeId, name: &str);

    /// Whether the node's class list contains a class.
    fn has_class(&self, node: NodeId, name: &str) -> bool;
}

/// Sibling-index lookup.
pub trait IndexLocating: Send + Sync {
    /// The node's position among its parent's children, or `None` when
    /// detached.
    fn index_of(&self, node: NodeId) -> Option<usize>;
}

/// Selector matching for handle/ignore filtering.
pub trait SelectorMatching: Send + Sync {
    /// Whether the node matches the selector.
    fn matches(&self, node: NodeId, selector: &Selector) -> bool;
}

/// The full capability bundle a [`Reorderable`](crate::Reorderable) needs.
///
/// Blanket-implemented for any host that provides all five capabilities.
pub trait DomHost:
    DomTree + EventBinding + ClassToggling + IndexLocating + SelectorMatching
{
}

impl<T> DomHost for T where
    T: DomTree + EventBinding + ClassToggling + IndexLocating + SelectorMatching
{
}
