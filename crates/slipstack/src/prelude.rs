//! Prelude module for Slipstack.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use slipstack::prelude::*;
//! ```
//!
//! This provides access to:
//! - The reorder controller (`Reorderable`, `DragPhase`)
//! - Drag event types (`DragEvent`, `DragEventKind`)
//! - DOM capability traits (`DomHost` and its constituents)
//! - Signal/slot system (`Signal`, `ConnectionId`)

// ============================================================================
// Controller
// ============================================================================

pub use crate::controller::{DragHandoff, DragPhase, Reorderable};

// ============================================================================
// Events
// ============================================================================

pub use crate::events::{DragEvent, DragEventKind, EventBase};

// ============================================================================
// DOM Capabilities
// ============================================================================

pub use crate::dom::{
    ClassToggling, DomHost, DomTree, EventBinding, IndexLocating, NodeId, SelectorMatching,
};

// ============================================================================
// Filtering and Errors
// ============================================================================

pub use crate::error::{Error, Result};
pub use crate::selector::Selector;

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use slipstack_core::{ConnectionId, Signal};
