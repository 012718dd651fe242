//! Logging facilities for Slipstack.
//!
//! Slipstack uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event the crates emit carries one of the targets in [`targets`],
//! so a directive such as `slipstack::controller=trace` narrows output to
//! the gesture state machine.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "slipstack_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "slipstack_core::signal";
    /// Reorder controller / gesture state machine target.
    pub const CONTROLLER: &str = "slipstack::controller";
    /// DOM capability layer target.
    pub const DOM: &str = "slipstack::dom";
}

/// Macros for common tracing patterns.
///
/// These are just wrappers around the `tracing` crate macros with a
/// consistent target name.
#[macro_export]
macro_rules! slipstack_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "slipstack_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! slipstack_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "slipstack_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! slipstack_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "slipstack_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! slipstack_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "slipstack_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! slipstack_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "slipstack_core", $($arg)*)
    };
}
