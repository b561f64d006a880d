use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::overlay_state::SearchOverlay;
use crate::catalog::{self, DocResult};
use crate::highlight::{highlight, to_spans};
use crate::layout::LayoutRegions;
use crate::theme;
use crate::widgets::{popup, scrollbar};

const PANEL_MAX_WIDTH: u16 = 72;
const PANEL_TOP_MARGIN: u16 = 2;
const PANEL_HORIZONTAL_MARGIN: u16 = 2;
/// Borders, input row and separator
const PANEL_CHROME_HEIGHT: u16 = 4;
const ROW_HEIGHT: u16 = 2;
const MIN_FRAME_WIDTH: u16 = 24;
const MIN_FRAME_HEIGHT: u16 = PANEL_CHROME_HEIGHT + ROW_HEIGHT;

const SEARCH_ICON: &str = " ⌕ ";
const ESC_BADGE: &str = " ESC ";
const CHEVRON: &str = "›";

/// Render the overlay over whatever is already in the frame.
///
/// Draws nothing and registers no regions while the overlay is closed.
pub fn render_overlay(
    overlay: &mut SearchOverlay,
    frame: &mut Frame,
    placeholder: &str,
    regions: &mut LayoutRegions,
) {
    if !overlay.is_open() {
        return;
    }

    let frame_area = frame.area();
    popup::dim_area(frame, frame_area, theme::overlay::SCRIM);
    regions.scrim = Some(frame_area);

    if frame_area.width < MIN_FRAME_WIDTH || frame_area.height < MIN_FRAME_HEIGHT {
        return;
    }

    let total_rows = catalog::row_count();
    // Result list takes at most 60% of the screen
    let list_budget = (frame_area.height.saturating_mul(3) / 5).max(ROW_HEIGHT);
    let list_height = (total_rows as u16 * ROW_HEIGHT).min(list_budget);
    let panel_area = popup::top_anchored_popup(
        frame_area,
        PANEL_MAX_WIDTH,
        list_height + PANEL_CHROME_HEIGHT,
        PANEL_TOP_MARGIN,
        PANEL_HORIZONTAL_MARGIN,
    );
    popup::clear_area(frame, panel_area);
    regions.overlay_panel = Some(panel_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(" Search ", theme::overlay::TITLE))
        .border_style(Style::default().fg(theme::overlay::BORDER))
        .style(Style::default().bg(theme::overlay::BACKGROUND));
    let inner_area = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner_area);

    render_input(overlay, frame, layout[0], placeholder);
    regions.search_input = Some(layout[0]);

    let separator = Line::from(Span::styled(
        "─".repeat(layout[1].width as usize),
        Style::default().fg(theme::overlay::SEPARATOR),
    ));
    frame.render_widget(Paragraph::new(separator), layout[1]);

    let list_area = layout[2];
    let visible_rows = (list_area.height / ROW_HEIGHT) as usize;
    let offset = scroll_offset(overlay.selected(), visible_rows);
    regions.result_rows = render_results(overlay, frame, list_area, offset);

    let scrollbar_area = Rect {
        x: panel_area.x,
        y: list_area.y,
        width: panel_area.width,
        height: list_area.height,
    };
    scrollbar::render_vertical_scrollbar(
        frame,
        scrollbar_area,
        total_rows,
        visible_rows,
        offset,
        theme::overlay::BORDER,
    );
}

/// First visible row so that the selected row stays on screen
fn scroll_offset(selected: Option<usize>, visible_rows: usize) -> usize {
    match selected {
        Some(row) if visible_rows > 0 => (row + 1).saturating_sub(visible_rows),
        _ => 0,
    }
}

fn render_input(overlay: &mut SearchOverlay, frame: &mut Frame, area: Rect, placeholder: &str) {
    let focused = overlay.is_input_focused();

    let columns = Layout::horizontal([
        Constraint::Length(SEARCH_ICON.chars().count() as u16),
        Constraint::Min(1),
        Constraint::Length(ESC_BADGE.len() as u16 + 1),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            SEARCH_ICON,
            Style::default().fg(theme::overlay::SEARCH_ICON),
        )),
        columns[0],
    );

    if let Some(textarea) = overlay.textarea_mut() {
        textarea.set_style(
            Style::default()
                .fg(theme::overlay::INPUT_TEXT)
                .bg(theme::overlay::BACKGROUND),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder);
        textarea.set_placeholder_style(Style::default().fg(theme::overlay::PLACEHOLDER));

        if focused {
            textarea.set_cursor_style(theme::palette::CURSOR);
        } else {
            textarea.set_cursor_style(Style::default());
        }

        frame.render_widget(&*textarea, columns[1]);
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(ESC_BADGE, theme::overlay::ESC_BADGE),
        ])),
        columns[2],
    );
}

/// Render visible rows starting at `offset`, returning each row's area
fn render_results(
    overlay: &SearchOverlay,
    frame: &mut Frame,
    area: Rect,
    offset: usize,
) -> Vec<(usize, Rect)> {
    let query = overlay.query();
    let selected = overlay.selected();
    let results = catalog::doc_results();

    let mut rows = Vec::new();
    let mut y = area.y;

    for row in offset..catalog::row_count() {
        if y >= area.bottom() {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: ROW_HEIGHT.min(area.bottom() - y),
        };

        let (lines, chevron) = match row.checked_sub(1) {
            None => (ai_row_lines(query), true),
            Some(index) => {
                let result = &results[index];
                (doc_row_lines(result, query), result.chevron)
            }
        };

        let row_style = if selected == Some(row) {
            Style::default().bg(theme::overlay::SELECTED_BG)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(lines).style(row_style), row_area);

        if chevron && row_area.width > 2 {
            let chevron_area = Rect {
                x: row_area.right() - 2,
                y: row_area.y,
                width: 1,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    CHEVRON,
                    Style::default().fg(theme::overlay::CHEVRON),
                )),
                chevron_area,
            );
        }

        rows.push((row, row_area));
        y += ROW_HEIGHT;
    }

    rows
}

fn ai_row_lines(query: &str) -> Vec<Line<'_>> {
    let mut title = vec![
        Span::raw(" "),
        Span::styled(" ✦ ", theme::overlay::AI_ICON),
        Span::raw(" "),
    ];
    let title_style = Style::default().fg(theme::overlay::RESULT_TITLE);
    if query.trim().is_empty() {
        title.push(Span::styled("Ask AI about the docs", title_style));
    } else {
        title.push(Span::styled("Can you tell me about ", title_style));
        title.push(Span::styled(query, title_style.patch(theme::overlay::MATCH)));
    }

    vec![
        Line::from(title),
        Line::from(Span::styled(
            "     Use AI to answer your question",
            Style::default().fg(theme::overlay::RESULT_SNIPPET),
        )),
    ]
}

fn doc_row_lines<'a>(result: &'a DocResult, query: &str) -> Vec<Line<'a>> {
    let title_style = Style::default().fg(theme::overlay::RESULT_TITLE);
    let snippet_style = Style::default().fg(theme::overlay::RESULT_SNIPPET);

    let mut title = vec![Span::raw(" ")];
    if let Some(method) = result.method {
        title.push(Span::styled(
            format!(" {} ", method.label()),
            theme::overlay::METHOD_BADGE,
        ));
        title.push(Span::raw(" "));
    }
    title.extend(to_spans(
        &highlight(result.title, query),
        title_style,
        theme::overlay::MATCH,
    ));

    let mut snippet = vec![Span::raw(" ")];
    snippet.extend(to_spans(
        &highlight(result.snippet, query),
        snippet_style,
        theme::overlay::MATCH,
    ));

    vec![Line::from(title), Line::from(snippet)]
}

#[cfg(test)]
#[path = "overlay_render_tests.rs"]
mod overlay_render_tests;
