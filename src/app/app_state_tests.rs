//! Tests for app_state

use super::*;
use crate::overlay::OverlayPhase;
use crate::test_utils::test_helpers::test_app;

#[test]
fn test_app_initialization() {
    let app = test_app();

    assert_eq!(app.overlay.phase(), OverlayPhase::Closed);
    assert!(!app.should_quit());
    assert_eq!(app.last_close(), None);
    assert_eq!(app.keys.listener_count(), 0);
}

#[test]
fn test_open_search_seeds_initial_query() {
    let mut app = App::new(Config::default(), "browser".to_string());

    assert!(app.open_search());

    assert_eq!(app.overlay.query(), "browser");
    assert_eq!(app.keys.listener_count(), 1);
}

#[test]
fn test_open_search_twice_is_noop() {
    let mut app = test_app();

    assert!(app.open_search());
    assert!(!app.open_search());
    assert_eq!(app.keys.listener_count(), 1);
}

#[test]
fn test_close_search_records_reason() {
    let mut app = test_app();
    app.open_search();

    assert!(app.close_search());

    assert_eq!(app.last_close(), Some(CloseReason::Requested));
    assert_eq!(app.keys.listener_count(), 0);
}

#[test]
fn test_close_search_when_closed_records_nothing() {
    let mut app = test_app();

    assert!(!app.close_search());
    assert_eq!(app.last_close(), None);
}

#[test]
fn test_reopen_clears_last_close() {
    let mut app = test_app();
    app.open_search();
    app.close_search();

    app.open_search();

    assert_eq!(app.last_close(), None);
}

#[test]
fn test_focus_delay_comes_from_config() {
    let mut config = Config::default();
    config.overlay.focus_delay_ms = 250;

    let app = App::new(config, String::new());

    assert_eq!(app.overlay.focus_delay(), std::time::Duration::from_millis(250));
}
