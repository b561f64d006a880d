//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    // Host page
    SearchTrigger,
    Page,

    // Overlay
    Scrim,
    OverlayPanel,
    SearchInput,
    /// Result list row (0 is the "ask AI" row)
    ResultRow(usize),
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is not visible.
/// Used by mouse event handlers to determine which component is under the cursor.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct LayoutRegions {
    // Host page
    pub search_trigger: Option<Rect>,
    pub page: Option<Rect>,

    // Overlay (only populated while open)
    pub scrim: Option<Rect>,
    pub overlay_panel: Option<Rect>,
    pub search_input: Option<Rect>,
    /// Visible result rows as (row index, area)
    pub result_rows: Vec<(usize, Rect)>,
}

impl LayoutRegions {
    /// Create a new empty LayoutRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
