//! Slipstack - a host-agnostic drag-to-reorder list widget.
//!
//! Slipstack lets a user reorder sibling elements within a container via
//! native drag-and-drop gestures, and optionally drag items between
//! connected containers. The crate owns only the gesture state machine;
//! everything environment-specific is a capability trait
//! ([`dom::DomHost`]) the host implements and injects: event listener
//! registration, class toggling, sibling-index lookup, and selector
//! matching.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use slipstack::dom::MockDom;
//! use slipstack::Reorderable;
//!
//! fn main() -> slipstack::Result<()> {
//!     let dom = Arc::new(MockDom::new());
//!     let container = dom.create_element("ul");
//!     let item = dom.create_element("li");
//!     dom.append_child(container, item);
//!
//!     let list = Reorderable::new(dom, container)?;
//!     list.bind()?;
//!     list.updated().connect(|_| println!("order changed"));
//!     Ok(())
//! }
//! ```
//!
//! See [`controller`] for the gesture model and [`dom`] for the capability
//! seams a real host (browser, terminal UI, test harness) implements.

pub mod controller;
pub mod dom;
pub mod error;
pub mod events;
pub mod prelude;
pub mod selector;

pub use controller::{
    DragHandoff, DragPhase, Reorderable, DRAGGING_CLASS, PLACEHOLDER_CLASS,
};
pub use error::{Error, Result};
pub use events::{DragEvent, DragEventKind, EventBase};
pub use selector::{Selector, TypeSelector};

// Re-export the signal system so hosts depend on one crate.
pub use slipstack_core::{ConnectionGuard, ConnectionId, Signal};
