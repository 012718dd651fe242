//! Error types for the reorder widget.

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or binding a reorder controller.
///
/// Runtime gesture handling never errors: a drag event that arrives while no
/// drag is active, or that targets nothing the controller recognizes, is a
/// silent no-op. Only construction and binding have validated preconditions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The container node does not exist in the host.
    #[error("reorderable container is missing: node is absent from the host")]
    MissingContainer,

    /// The container has no children, so no placeholder can be created.
    #[error("cannot bind to an empty container: a first child is required to build the placeholder")]
    EmptyContainer,

    /// Selector parsing error for a handle/ignore filter.
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

impl Error {
    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_selector(".a b", "combinators are not supported");
        assert_eq!(
            err.to_string(),
            "invalid selector '.a b': combinators are not supported"
        );
    }
}
