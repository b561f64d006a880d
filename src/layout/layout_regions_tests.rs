//! Tests for LayoutRegions struct

use ratatui::layout::Rect;

use super::layout_regions::{LayoutRegions, Region};

#[test]
fn test_new_creates_empty_regions() {
    let regions = LayoutRegions::new();

    assert!(regions.search_trigger.is_none());
    assert!(regions.page.is_none());
    assert!(regions.scrim.is_none());
    assert!(regions.overlay_panel.is_none());
    assert!(regions.search_input.is_none());
    assert!(regions.result_rows.is_empty());
}

#[test]
fn test_clear_resets_all_regions() {
    let mut regions = LayoutRegions::new();

    regions.search_trigger = Some(Rect::new(2, 0, 40, 1));
    regions.scrim = Some(Rect::new(0, 0, 100, 50));
    regions.overlay_panel = Some(Rect::new(10, 2, 80, 30));
    regions.result_rows.push((0, Rect::new(11, 6, 78, 2)));

    regions.clear();

    assert!(regions.search_trigger.is_none());
    assert!(regions.scrim.is_none());
    assert!(regions.overlay_panel.is_none());
    assert!(regions.result_rows.is_empty());
}

#[test]
fn test_result_row_variants_compare_by_index() {
    assert_eq!(Region::ResultRow(2), Region::ResultRow(2));
    assert_ne!(Region::ResultRow(1), Region::ResultRow(2));
    assert_ne!(Region::Scrim, Region::OverlayPanel);
}
