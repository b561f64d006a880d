use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Clear,
};

/// Horizontally centered popup hanging `top_margin` rows below the top of `frame_area`
pub fn top_anchored_popup(
    frame_area: Rect,
    max_width: u16,
    height: u16,
    top_margin: u16,
    horizontal_margin: u16,
) -> Rect {
    let popup_width = max_width.min(frame_area.width.saturating_sub(horizontal_margin * 2));
    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;

    let offset = top_margin.min(frame_area.height.saturating_sub(height));
    let popup_y = frame_area.y + offset;
    let popup_height = height.min(frame_area.height.saturating_sub(offset));

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

/// Restyle every cell in `area` without touching its symbols
pub fn dim_area(frame: &mut Frame, area: Rect, style: Style) {
    frame.buffer_mut().set_style(area, style);
}
