//! Query highlighting
//!
//! Splits display text into plain and emphasized segments wherever the
//! search query occurs (case-insensitive, literal). Segments always
//! concatenate back to the original text.

mod highlighter;

pub use highlighter::{Segment, highlight, highlight_line, to_spans};
