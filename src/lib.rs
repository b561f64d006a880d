//! docsearch library - Terminal documentation search overlay
//!
//! This library exposes the overlay, highlighter and key dispatcher used by
//! the `docsearch` binary.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod highlight;
pub mod keys;
pub mod layout;
pub mod overlay;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use error::DocSearchError;
pub use highlight::{Segment, highlight};
pub use overlay::{CloseReason, SearchOverlay};
