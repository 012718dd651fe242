//! Core systems for Slipstack.
//!
//! This crate provides the foundational pieces of the Slipstack
//! drag-to-reorder toolkit:
//!
//! - **Signal/Slot System**: Type-safe publish/subscribe used for the
//!   widget's public events (`start`, `update`, `drop`) and for the
//!   cross-container handoff channel
//! - **Logging targets**: `tracing` target constants and macros for
//!   consistent, filterable instrumentation
//!
//! # Signal/Slot Example
//!
//! ```
//! use slipstack_core::Signal;
//!
//! // Create a signal that notifies when an order changes
//! let order_changed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = order_changed.connect(|index| {
//!     println!("Item settled at index {}", index);
//! });
//!
//! // Emit the signal
//! order_changed.emit(2);
//!
//! // Disconnect when done
//! order_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};

// The signal system is shared between controllers wired with `connect`;
// it must stay usable across threads even though dispatch is direct.
static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
