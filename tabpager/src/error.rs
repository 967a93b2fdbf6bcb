//! Errors surfaced while building tab geometry.

use thiserror::Error;

/// Errors returned by [`TabPagerController`](crate::TabPagerController)
/// operations that rebuild geometry.
///
/// Navigation requests never fail; they degrade to no-ops instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabPagerError {
    /// A tab reported a width the scroll mapping cannot divide by.
    #[error("tab {index} has invalid width {width}; tab widths must be positive and finite")]
    InvalidTabWidth {
        /// Index of the offending tab.
        index: usize,
        /// The width reported by the host.
        width: f32,
    },
    /// The host supplied a viewport that is negative or not finite.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Reported viewport width.
        width: f32,
        /// Reported viewport height.
        height: f32,
    },
}
