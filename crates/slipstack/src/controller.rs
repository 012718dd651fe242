//! The reorder controller.
//!
//! A [`Reorderable`] is bound to one container element and tracks a native
//! drag gesture over that container's direct children. During `dragover` it
//! positions a placeholder node to preview where the dragged item would
//! land; the real move is committed only by an actual `drop`. A cancelled
//! gesture removes the preview and leaves the children untouched.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use slipstack::dom::{DomTree, MockDom};
//! use slipstack::events::{DragEvent, DragEventKind};
//! use slipstack::Reorderable;
//!
//! # fn main() -> slipstack::Result<()> {
//! let dom = Arc::new(MockDom::new());
//! let container = dom.create_element("ul");
//! for _ in 0..3 {
//!     let item = dom.create_element("li");
//!     dom.append_child(container, item);
//! }
//!
//! let list = Reorderable::new(dom.clone(), container)?;
//! list.bind()?;
//! list.updated().connect(|_| println!("order changed"));
//!
//! // The host routes native drag events back to the controller:
//! let first = dom.children(container)[0];
//! let mut event = DragEvent::new(DragEventKind::DragStart, first);
//! list.handle_event(&mut event);
//! # Ok(())
//! # }
//! ```
//!
//! # Connected containers
//!
//! Two controllers can be linked so an item dragged out of one container
//! can be dropped into the other:
//!
//! ```ignore
//! // Bidirectional: chain through the returned controller.
//! one.connect(&two).connect(&one);
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use slipstack_core::Signal;

use crate::dom::{DomHost, NodeId};
use crate::error::{Error, Result};
use crate::events::{DragEvent, DragEventKind};
use crate::selector::Selector;

/// Class applied to the element being dragged.
pub const DRAGGING_CLASS: &str = "dragging";

/// Class applied to the placeholder node.
pub const PLACEHOLDER_CLASS: &str = "slipstack-placeholder";

/// Phase of the drag gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A handle filter is set and the last mousedown matched it.
    Armed,
    /// A drag is in progress.
    Dragging,
    /// The placeholder has been positioned inside the container.
    Entered,
}

/// Drag-state snapshot passed controller-to-controller by [`Reorderable::connect`].
///
/// When a drag starts in an origin container, every connected destination
/// receives this message and adopts the gesture, so its own `dragover`/`drop`
/// handlers can operate on an item that originated elsewhere.
#[derive(Debug, Clone)]
pub struct DragHandoff {
    /// The element being dragged.
    pub dragged: NodeId,
    /// The origin's placeholder node (the destination positions this one).
    pub placeholder: Option<NodeId>,
    /// The dragged element's saved `display` value.
    pub display: String,
    /// The dragged element's sibling index at drag start.
    pub origin_index: Option<usize>,
}

/// Transient per-gesture state.
#[derive(Debug, Default)]
struct DragContext {
    phase: DragPhase,
    /// The element currently being dragged (None when idle).
    dragging: Option<NodeId>,
    /// The placeholder in play for this gesture: the bound one, or the one
    /// adopted from a cross-container handoff.
    placeholder: Option<NodeId>,
    /// Saved `display` of `dragging`, restored at drag end.
    original_display: Option<String>,
    /// Sibling index of `dragging` at drag start; decides whether the
    /// gesture changed the order.
    original_index: Option<usize>,
    /// Whether the last mousedown satisfied the handle filter.
    handle_matched: bool,
}

#[derive(Debug, Clone, Default)]
struct Filters {
    handle: Option<Selector>,
    ignore: Option<Selector>,
}

struct Inner {
    dom: Arc<dyn DomHost>,
    container: NodeId,
    /// Created at bind time; inserted/removed during drags, never destroyed.
    bound_placeholder: Mutex<Option<NodeId>>,
    filters: Mutex<Filters>,
    ctx: Mutex<DragContext>,
    started: Signal<DragEvent>,
    updated: Signal<()>,
    dropped: Signal<DragEvent>,
    /// Internal channel consumed by connected controllers.
    handoff: Signal<DragHandoff>,
}

/// A drag-to-reorder controller for one container element.
///
/// Cheaply clonable handle; clones share the same controller state. See the
/// [module documentation](self) for usage.
#[derive(Clone)]
pub struct Reorderable {
    inner: Arc<Inner>,
}

impl Reorderable {
    /// Create a controller for `container`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingContainer`] when the node does not exist in the host.
    pub fn new(dom: Arc<dyn DomHost>, container: NodeId) -> Result<Self> {
        if !dom.contains(container) {
            return Err(Error::MissingContainer);
        }
        Ok(Self {
            inner: Arc::new(Inner {
                dom,
                container,
                bound_placeholder: Mutex::new(None),
                filters: Mutex::new(Filters::default()),
                ctx: Mutex::new(DragContext::default()),
                started: Signal::new(),
                updated: Signal::new(),
                dropped: Signal::new(),
                handoff: Signal::new(),
            }),
        })
    }

    /// The managed container element.
    pub fn container(&self) -> NodeId {
        self.inner.container
    }

    /// The container's current children (a fresh snapshot per call).
    pub fn items(&self) -> Vec<NodeId> {
        self.inner.dom.children(self.inner.container)
    }

    /// Attach listeners, mark children draggable, and build the placeholder.
    ///
    /// The placeholder is a shallow clone of the first child, tagged with
    /// [`PLACEHOLDER_CLASS`]. Rebinding without an intervening [`unbind`]
    /// double-registers the listeners; callers own that sequencing.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the container has no children.
    ///
    /// [`unbind`]: Self::unbind
    pub fn bind(&self) -> Result<&Self> {
        let inner = &self.inner;
        let children = inner.dom.children(inner.container);
        if children.is_empty() {
            return Err(Error::EmptyContainer);
        }

        for kind in DragEventKind::ALL {
            inner.dom.bind(inner.container, kind);
        }
        for &child in &children {
            inner.dom.set_draggable(child, true);
        }

        let placeholder = inner.dom.clone_shallow(children[0]);
        inner.dom.add_class(placeholder, PLACEHOLDER_CLASS);
        *inner.bound_placeholder.lock() = Some(placeholder);

        tracing::debug!(
            target: "slipstack::controller",
            container = ?inner.container,
            children = children.len(),
            "bound reorderable"
        );
        Ok(self)
    }

    /// Detach listeners and mark children not draggable.
    ///
    /// A placeholder attached mid-drag is left in the container (known
    /// limitation of unbinding during a gesture).
    pub fn unbind(&self) -> &Self {
        let inner = &self.inner;
        for child in inner.dom.children(inner.container) {
            inner.dom.set_draggable(child, false);
        }
        for kind in DragEventKind::ALL {
            inner.dom.unbind(inner.container, kind);
        }
        tracing::debug!(
            target: "slipstack::controller",
            container = ?inner.container,
            "unbound reorderable"
        );
        self
    }

    /// Restrict drag initiation to sub-elements matching `selector`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSelector`] when the selector does not parse.
    pub fn handle(&self, selector: &str) -> Result<&Self> {
        self.inner.filters.lock().handle = Some(selector.parse()?);
        Ok(self)
    }

    /// Exclude elements matching `selector` from acting as drag origins or
    /// placeholder reference targets.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSelector`] when the selector does not parse.
    pub fn ignore(&self, selector: &str) -> Result<&Self> {
        self.inner.filters.lock().ignore = Some(selector.parse()?);
        Ok(self)
    }

    /// Wire `other` as a drag origin for this container.
    ///
    /// When a drag starts in `other`, this controller adopts the gesture
    /// via a [`DragHandoff`] message, so the item can be dropped here; the
    /// drop then resets `other`'s transient state. Returns a clone of
    /// `other` so links chain:
    ///
    /// ```ignore
    /// // two <-> one
    /// one.connect(&two).connect(&one);
    ///
    /// // three <- two <- one (drags flow left)
    /// three.connect(&two).connect(&one);
    /// ```
    pub fn connect(&self, other: &Reorderable) -> Reorderable {
        let destination = Arc::downgrade(&self.inner);
        other.inner.handoff.connect(move |message| {
            if let Some(inner) = destination.upgrade() {
                inner.adopt(message);
            }
        });

        let origin: Weak<Inner> = Arc::downgrade(&other.inner);
        self.inner.dropped.connect(move |_| {
            // The item has left the origin's container; its gesture is over.
            if let Some(inner) = origin.upgrade() {
                inner.reset();
            }
        });

        other.clone()
    }

    /// Route one native drag event into the state machine.
    ///
    /// After this returns the host applies the event's cancellation flags
    /// ([`DragEvent::is_default_prevented`],
    /// [`DragEvent::is_propagation_stopped`]) to the native event.
    pub fn handle_event(&self, event: &mut DragEvent) {
        match event.kind {
            DragEventKind::MouseDown => self.inner.on_mouse_down(event),
            DragEventKind::DragStart => self.inner.on_drag_start(event),
            DragEventKind::DragEnter | DragEventKind::DragOver => {
                self.inner.on_drag_over(event);
            }
            DragEventKind::DragEnd => self.inner.on_drag_end(event),
            DragEventKind::Drop => self.inner.on_drop(event),
        }
    }

    /// Emitted when a drag begins; payload is the originating event.
    pub fn started(&self) -> &Signal<DragEvent> {
        &self.inner.started
    }

    /// Emitted after a gesture that actually changed the order.
    pub fn updated(&self) -> &Signal<()> {
        &self.inner.updated
    }

    /// Emitted on a successful drop; payload is the originating event.
    pub fn dropped(&self) -> &Signal<DragEvent> {
        &self.inner.dropped
    }

    /// Current phase of the gesture state machine.
    pub fn phase(&self) -> DragPhase {
        self.inner.ctx.lock().phase
    }
}

impl Inner {
    fn on_mouse_down(&self, event: &DragEvent) {
        let Some(handle) = self.filters.lock().handle.clone() else {
            return;
        };
        let matched = self.dom.matches(event.target, &handle);
        let mut ctx = self.ctx.lock();
        if matches!(ctx.phase, DragPhase::Dragging | DragPhase::Entered) {
            return;
        }
        ctx.handle_matched = matched;
        ctx.phase = if matched {
            DragPhase::Armed
        } else {
            DragPhase::Idle
        };
    }

    fn on_drag_start(&self, event: &mut DragEvent) {
        let filters = self.filters.lock().clone();
        let handoff = {
            let mut ctx = self.ctx.lock();
            if let Some(ignore) = &filters.ignore {
                if self.dom.matches(event.target, ignore) {
                    event.prevent_default();
                    ctx.phase = DragPhase::Idle;
                    return;
                }
            }
            if filters.handle.is_some() && !ctx.handle_matched {
                event.prevent_default();
                ctx.phase = DragPhase::Idle;
                return;
            }

            let display = self.dom.display(event.target);
            ctx.dragging = Some(event.target);
            ctx.original_display = Some(display.clone());
            ctx.original_index = self.dom.index_of(event.target);
            ctx.placeholder = *self.bound_placeholder.lock();
            ctx.handle_matched = false;
            ctx.phase = DragPhase::Dragging;

            DragHandoff {
                dragged: event.target,
                placeholder: ctx.placeholder,
                display,
                origin_index: ctx.original_index,
            }
        };

        self.dom.add_class(event.target, DRAGGING_CLASS);
        tracing::trace!(
            target: "slipstack::controller",
            dragged = ?event.target,
            index = ?handoff.origin_index,
            "drag started"
        );

        self.handoff.emit(handoff);
        self.started.emit(*event);
    }

    fn on_drag_over(&self, event: &mut DragEvent) {
        let ignore = self.filters.lock().ignore.clone();
        let mut ctx = self.ctx.lock();
        let Some(dragging) = ctx.dragging else {
            return;
        };
        if event.target == self.container {
            // No insertion point at container root.
            return;
        }
        event.prevent_default();

        // Hide the dragged element so it cannot serve as its own drop target.
        self.dom.set_display(dragging, "none");

        let Some(child) = self.child_containing(event.target) else {
            return;
        };
        if let Some(ignore) = &ignore {
            if self.dom.matches(child, ignore) {
                // Placeholder stays at its last valid position.
                return;
            }
        }
        let Some(placeholder) = ctx.placeholder else {
            return;
        };

        // A detached placeholder counts as index -1, so the first hover
        // always lands the placeholder after the hovered child.
        let placeholder_index = self
            .dom
            .index_of(placeholder)
            .map_or(-1, |index| index as i64);
        let Some(child_index) = self.dom.index_of(child) else {
            return;
        };

        let reference = if placeholder_index < child_index as i64 {
            self.dom.next_sibling(child)
        } else {
            Some(child)
        };
        self.dom.insert_before(self.container, placeholder, reference);
        ctx.phase = DragPhase::Entered;

        tracing::trace!(
            target: "slipstack::controller",
            over = ?child,
            placeholder_index,
            child_index,
            "placeholder moved"
        );
    }

    fn on_drag_end(&self, _event: &mut DragEvent) {
        let Some(order_changed) = self.cleanup() else {
            return;
        };
        // The dragged element's real position is not reconciled with the
        // placeholder preview; only a drop commits a move.
        if order_changed {
            self.updated.emit(());
        }
        self.reset();
    }

    fn on_drop(&self, event: &mut DragEvent) {
        // Keep ancestor containers in connected setups from also handling it.
        event.stop_propagation();

        let (dragging, placeholder) = {
            let ctx = self.ctx.lock();
            let Some(dragging) = ctx.dragging else {
                return;
            };
            (dragging, ctx.placeholder)
        };

        // Commit the move: the dragged element takes the placeholder's slot.
        if let Some(placeholder) = placeholder {
            if self.dom.parent(placeholder) == Some(self.container) {
                self.dom
                    .insert_before(self.container, dragging, Some(placeholder));
            }
        }

        let order_changed = self.cleanup().unwrap_or(false);
        if order_changed {
            self.updated.emit(());
        }

        tracing::debug!(
            target: "slipstack::controller",
            dropped = ?dragging,
            index = ?self.dom.index_of(dragging),
            order_changed,
            "drop committed"
        );

        self.dropped.emit(*event);
        self.reset();
    }

    /// Shared dragend/drop teardown: detach the placeholder, restore the
    /// dragged element's display and class. Returns whether the element's
    /// index changed from drag start, or `None` when no drag was active.
    /// Leaves the transient state for the caller to reset.
    fn cleanup(&self) -> Option<bool> {
        let (dragging, placeholder, original_display, original_index) = {
            let ctx = self.ctx.lock();
            let dragging = ctx.dragging?;
            (
                dragging,
                ctx.placeholder,
                ctx.original_display.clone(),
                ctx.original_index,
            )
        };

        if let Some(placeholder) = placeholder {
            if self.dom.parent(placeholder).is_some() {
                self.dom.detach(placeholder);
            }
        }
        if let Some(display) = original_display {
            self.dom.set_display(dragging, &display);
        }
        self.dom.remove_class(dragging, DRAGGING_CLASS);

        Some(original_index != self.dom.index_of(dragging))
    }

    /// Adopt a gesture that started in a connected origin container.
    fn adopt(&self, message: &DragHandoff) {
        let mut ctx = self.ctx.lock();
        ctx.dragging = Some(message.dragged);
        ctx.placeholder = message.placeholder;
        ctx.original_display = Some(message.display.clone());
        ctx.original_index = message.origin_index;
        ctx.phase = DragPhase::Dragging;
        tracing::trace!(
            target: "slipstack::controller",
            container = ?self.container,
            dragged = ?message.dragged,
            "adopted cross-container drag"
        );
    }

    fn reset(&self) {
        *self.ctx.lock() = DragContext::default();
    }

    /// Walk up from `node` to the immediate child of the container that
    /// contains it, or `None` when the node is outside the container.
    fn child_containing(&self, node: NodeId) -> Option<NodeId> {
        let mut current = node;
        loop {
            match self.dom.parent(current) {
                Some(parent) if parent == self.container => return Some(current),
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }
}

static_assertions::assert_impl_all!(Reorderable: Send, Sync, Clone);
