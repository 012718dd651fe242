//! Drag event types delivered by the host.
//!
//! The host environment owns the native drag gesture; it translates each
//! native event into a [`DragEvent`] and feeds it to
//! [`Reorderable::handle_event`](crate::Reorderable::handle_event). After the
//! call returns, the host inspects [`EventBase`] to learn whether the
//! controller suppressed the default behavior (cancelling a drag start,
//! permitting a drop) or stopped propagation to ancestor containers.

use crate::dom::NodeId;

/// The native drag/mouse events the controller listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    /// Mouse press, used only for handle-filter arming.
    MouseDown,
    /// A drag gesture began on an element.
    DragStart,
    /// The pointer entered a potential drop target while dragging.
    DragEnter,
    /// The pointer moved over a potential drop target while dragging.
    DragOver,
    /// The drag gesture ended (with or without a drop).
    DragEnd,
    /// The dragged element was released over a valid target.
    Drop,
}

impl DragEventKind {
    /// Every kind the controller binds on its container, in binding order.
    pub const ALL: [Self; 6] = [
        Self::MouseDown,
        Self::DragStart,
        Self::DragOver,
        Self::DragEnter,
        Self::DragEnd,
        Self::Drop,
    ];
}

/// Common data for all drag events.
///
/// Tracks the two cancellation flags a native drag event exposes. The
/// controller raises them; the host applies them to the underlying native
/// event when the handler returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event's default behavior has been suppressed.
    default_prevented: bool,
    /// Whether propagation to ancestor containers has been stopped.
    propagation_stopped: bool,
}

impl EventBase {
    /// Create a new event base with no flags raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the default behavior has been suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Suppress the event's default behavior.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Check whether propagation was stopped.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Stop the event from reaching ancestor containers.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// A native drag event, as routed to the controller by the host.
#[derive(Debug, Clone, Copy)]
pub struct DragEvent {
    /// Base event data (cancellation flags).
    pub base: EventBase,
    /// Which native event this is.
    pub kind: DragEventKind,
    /// The element the native event targeted.
    pub target: NodeId,
}

impl DragEvent {
    /// Create a new drag event targeting `target`.
    pub fn new(kind: DragEventKind, target: NodeId) -> Self {
        Self {
            base: EventBase::new(),
            kind,
            target,
        }
    }

    /// Suppress the event's default behavior.
    pub fn prevent_default(&mut self) {
        self.base.prevent_default();
    }

    /// Check whether the default behavior has been suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.base.is_default_prevented()
    }

    /// Stop the event from reaching ancestor containers.
    pub fn stop_propagation(&mut self) {
        self.base.stop_propagation();
    }

    /// Check whether propagation was stopped.
    pub fn is_propagation_stopped(&self) -> bool {
        self.base.is_propagation_stopped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_base_flags() {
        let mut base = EventBase::new();
        assert!(!base.is_default_prevented());
        assert!(!base.is_propagation_stopped());

        base.prevent_default();
        assert!(base.is_default_prevented());
        assert!(!base.is_propagation_stopped());

        base.stop_propagation();
        assert!(base.is_propagation_stopped());
    }

    #[test]
    fn test_all_kinds_cover_bindings() {
        assert_eq!(DragEventKind::ALL.len(), 6);
        assert!(DragEventKind::ALL.contains(&DragEventKind::Drop));
    }
}
