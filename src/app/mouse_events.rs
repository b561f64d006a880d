//! Mouse event dispatcher
//!
//! Routes mouse events to the overlay or the host page based on position.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};
use crate::overlay::overlay_events;

/// Handle mouse events by routing to appropriate handlers
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, region),
        MouseEventKind::Moved => overlay_events::handle_hover(&mut app.overlay, region),
        MouseEventKind::ScrollDown => overlay_events::handle_scroll(&mut app.overlay, 1),
        MouseEventKind::ScrollUp => overlay_events::handle_scroll(&mut app.overlay, -1),
        _ => {}
    }
}

fn handle_click(app: &mut App, region: Option<Region>) {
    if app.overlay.is_open() {
        let close_on_scrim = app.config.overlay.close_on_scrim;
        overlay_events::handle_click(&mut app.overlay, region, close_on_scrim);
        return;
    }

    if region == Some(Region::SearchTrigger) {
        app.open_search();
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
