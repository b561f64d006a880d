//! Tests for overlay_events

use super::*;
use crate::keys::KeyDispatcher;
use crate::overlay::overlay_state::DEFAULT_FOCUS_DELAY;
use crate::test_utils::test_helpers::{key, key_with_mods};
use std::cell::RefCell;
use std::rc::Rc;

fn focused_overlay(seed: &str) -> (SearchOverlay, Rc<RefCell<Vec<CloseReason>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let mut overlay = SearchOverlay::new(
        KeyDispatcher::new(),
        Box::new(move |reason| sink.borrow_mut().push(reason)),
        DEFAULT_FOCUS_DELAY,
    );
    overlay.open(seed);
    overlay.focus_input();
    (overlay, log)
}

fn type_str(overlay: &mut SearchOverlay, text: &str) {
    for ch in text.chars() {
        handle_key(overlay, key(KeyCode::Char(ch)));
    }
}

#[test]
fn test_closed_overlay_ignores_keys() {
    let mut overlay = SearchOverlay::new(KeyDispatcher::new(), Box::new(|_| {}), DEFAULT_FOCUS_DELAY);

    assert!(!handle_key(&mut overlay, key(KeyCode::Char('a'))));
    assert_eq!(overlay.query(), "");
}

#[test]
fn test_typing_updates_query() {
    let (mut overlay, _log) = focused_overlay("");

    type_str(&mut overlay, "browser");

    assert_eq!(overlay.query(), "browser");
}

#[test]
fn test_typing_appends_to_seed() {
    let (mut overlay, _log) = focused_overlay("browser");

    type_str(&mut overlay, " use");

    assert_eq!(overlay.query(), "browser use");
}

#[test]
fn test_backspace_edits_query() {
    let (mut overlay, _log) = focused_overlay("browsers");

    assert!(handle_key(&mut overlay, key(KeyCode::Backspace)));

    assert_eq!(overlay.query(), "browser");
}

#[test]
fn test_keys_before_focus_are_swallowed() {
    let (mut overlay, _log) = focused_overlay("");
    overlay.close(CloseReason::Requested);
    overlay.open("seed");

    assert!(!overlay.is_input_focused());
    assert!(handle_key(&mut overlay, key(KeyCode::Char('x'))));

    assert_eq!(overlay.query(), "seed");
}

#[test]
fn test_enter_never_adds_a_line() {
    let (mut overlay, _log) = focused_overlay("browser");

    assert!(handle_key(&mut overlay, key(KeyCode::Enter)));
    assert!(handle_key(
        &mut overlay,
        key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL)
    ));
    type_str(&mut overlay, "x");

    assert_eq!(overlay.query(), "browserx");
}

#[test]
fn test_arrow_keys_move_selection() {
    let (mut overlay, _log) = focused_overlay("");

    handle_key(&mut overlay, key(KeyCode::Down));
    assert_eq!(overlay.selected(), Some(0));
    handle_key(&mut overlay, key(KeyCode::Down));
    assert_eq!(overlay.selected(), Some(1));
    handle_key(&mut overlay, key(KeyCode::Up));
    handle_key(&mut overlay, key(KeyCode::Up));
    assert_eq!(overlay.selected(), Some(catalog::row_count() - 1));
}

#[test]
fn test_arrow_keys_work_before_focus() {
    let mut overlay = SearchOverlay::new(KeyDispatcher::new(), Box::new(|_| {}), DEFAULT_FOCUS_DELAY);
    overlay.open("");

    handle_key(&mut overlay, key(KeyCode::Down));

    assert_eq!(overlay.selected(), Some(0));
}

#[test]
fn test_paste_inserts_single_line() {
    let (mut overlay, _log) = focused_overlay("");

    assert!(handle_paste(&mut overlay, "browser\nsettings\r\nprofile"));

    assert_eq!(overlay.query(), "browser settings profile");
}

#[test]
fn test_paste_ignored_without_focus() {
    let mut overlay = SearchOverlay::new(KeyDispatcher::new(), Box::new(|_| {}), DEFAULT_FOCUS_DELAY);
    overlay.open("");

    assert!(!handle_paste(&mut overlay, "browser"));
    assert_eq!(overlay.query(), "");
}

#[test]
fn test_scrim_click_closes() {
    let (mut overlay, log) = focused_overlay("");

    handle_click(&mut overlay, Some(Region::Scrim), true);

    assert!(!overlay.is_open());
    assert_eq!(*log.borrow(), vec![CloseReason::Scrim]);
}

#[test]
fn test_click_outside_any_region_counts_as_scrim() {
    let (mut overlay, log) = focused_overlay("");

    handle_click(&mut overlay, None, true);

    assert_eq!(*log.borrow(), vec![CloseReason::Scrim]);
}

#[test]
fn test_scrim_click_respects_config() {
    let (mut overlay, log) = focused_overlay("");

    handle_click(&mut overlay, Some(Region::Scrim), false);

    assert!(overlay.is_open());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_panel_click_keeps_overlay_open() {
    let (mut overlay, log) = focused_overlay("");

    handle_click(&mut overlay, Some(Region::OverlayPanel), true);

    assert!(overlay.is_open());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_input_click_focuses_immediately() {
    let mut overlay = SearchOverlay::new(KeyDispatcher::new(), Box::new(|_| {}), DEFAULT_FOCUS_DELAY);
    overlay.open("");

    handle_click(&mut overlay, Some(Region::SearchInput), true);

    assert!(overlay.is_input_focused());
    assert!(!overlay.has_pending_focus());
}

#[test]
fn test_row_click_and_hover_select() {
    let (mut overlay, _log) = focused_overlay("");

    handle_click(&mut overlay, Some(Region::ResultRow(3)), true);
    assert_eq!(overlay.selected(), Some(3));

    handle_hover(&mut overlay, Some(Region::ResultRow(5)));
    assert_eq!(overlay.selected(), Some(5));

    handle_hover(&mut overlay, Some(Region::Scrim));
    assert_eq!(overlay.selected(), Some(5));
}

#[test]
fn test_scroll_moves_selection() {
    let (mut overlay, _log) = focused_overlay("");

    handle_scroll(&mut overlay, 1);
    handle_scroll(&mut overlay, 1);
    assert_eq!(overlay.selected(), Some(1));

    handle_scroll(&mut overlay, -1);
    assert_eq!(overlay.selected(), Some(0));
}
