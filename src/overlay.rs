//! Search overlay
//!
//! A modal panel hosting the search input and the highlighted result list.
//! State lives in `overlay_state`, input handling in `overlay_events`, and
//! drawing in `overlay_render`.

mod focus_request;
pub mod overlay_events;
pub mod overlay_render;
pub mod overlay_state;

pub use focus_request::FocusRequest;
pub use overlay_render::render_overlay;
pub use overlay_state::{
    CloseReason, DEFAULT_FOCUS_DELAY, OnClose, OverlayPhase, SearchOverlay, validate_seed,
};
