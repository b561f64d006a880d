//! Overlay event handling
//!
//! Handles input for the open overlay:
//! - Text input to the search query (once the input has focus)
//! - Result selection with Up/Down, mouse hover and the scroll wheel
//! - Clicks on the input, result rows and the scrim
//!
//! Escape is not handled here; it reaches the overlay through its key
//! subscription before the host sees the key.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[cfg(debug_assertions)]
use log::debug;

use super::overlay_state::{CloseReason, SearchOverlay};
use crate::catalog;
use crate::layout::Region;

/// Keys the single-line input must never turn into a line break
fn is_newline_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Handle a key while the overlay is open
/// Returns true if event was consumed, false otherwise
pub fn handle_key(overlay: &mut SearchOverlay, key: KeyEvent) -> bool {
    if !overlay.is_open() {
        return false;
    }

    match key.code {
        KeyCode::Up => {
            overlay.move_selection(-1, catalog::row_count());
            return true;
        }
        KeyCode::Down => {
            overlay.move_selection(1, catalog::row_count());
            return true;
        }
        _ => {}
    }

    // The overlay is modal: keys that do not reach the input are still swallowed
    if is_newline_key(&key) || !overlay.is_input_focused() {
        return true;
    }

    if let Some(textarea) = overlay.textarea_mut() {
        textarea.input(key);
    }

    #[cfg(debug_assertions)]
    debug!("Search query now {:?}", overlay.query());

    true
}

/// Insert pasted text into the focused input, flattening line breaks
pub fn handle_paste(overlay: &mut SearchOverlay, text: &str) -> bool {
    if !overlay.is_input_focused() {
        return false;
    }

    let flattened = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    match overlay.textarea_mut() {
        Some(textarea) => {
            textarea.insert_str(flattened);
            true
        }
        None => false,
    }
}

/// Handle a left click while the overlay is open
pub fn handle_click(overlay: &mut SearchOverlay, region: Option<Region>, close_on_scrim: bool) {
    if !overlay.is_open() {
        return;
    }

    match region {
        Some(Region::SearchInput) => overlay.focus_input(),
        Some(Region::ResultRow(row)) => overlay.select(Some(row)),
        Some(Region::OverlayPanel) => {}
        // Anything outside the panel is scrim
        _ => {
            if close_on_scrim {
                overlay.close(CloseReason::Scrim);
            }
        }
    }
}

/// Hovering a result row selects it
pub fn handle_hover(overlay: &mut SearchOverlay, region: Option<Region>) {
    if let Some(Region::ResultRow(row)) = region {
        overlay.select(Some(row));
    }
}

/// Scroll wheel over the overlay moves the selection
pub fn handle_scroll(overlay: &mut SearchOverlay, delta: isize) {
    overlay.move_selection(delta, catalog::row_count());
}

#[cfg(test)]
#[path = "overlay_events_tests.rs"]
mod overlay_events_tests;
