//! Errors reported by the toggle group.

/// Error type for toggle group operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleGroupError {
    /// A value was set before any items were available.
    #[error(
        "cannot set a value before the items are set; call set_items() or build the group \
         with items before calling set_value()"
    )]
    NoItems,
}
