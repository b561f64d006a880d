use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::App;
use crate::overlay::render_overlay;
use crate::theme::{self, border_hints};

const TRIGGER_WIDTH: u16 = 32;

const PAGE_TITLE: &str = "Get Started › Introduction";
const PAGE_BODY: &[&str] = &[
    "Browser Use is the easiest way to connect your AI agents with the browser.",
    "",
    "It makes websites accessible for AI agents by extracting all interactive \
     elements, so agents can focus on what makes your use case unique.",
    "",
    "Read the Quickstart to run your first agent, then browse the Agent \
     Settings and Browser Settings pages to customize how it runs.",
];

const PAGE_HINTS: &[(&str, &str)] = &[("Ctrl+K", "Search"), ("/", "Search"), ("q", "Quit")];
const OVERLAY_HINTS: &[(&str, &str)] = &[
    ("Esc", "Close"),
    ("↑↓", "Select"),
    ("Ctrl+C", "Quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::page::BACKGROUND)),
            area,
        );

        let layout = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        self.render_header(frame, layout[0]);
        self.render_page(frame, layout[1]);
        self.render_status(frame, layout[2]);

        // Drawn last so the scrim covers the whole page
        render_overlay(
            &mut self.overlay,
            frame,
            &self.config.overlay.placeholder,
            &mut self.layout_regions,
        );
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme::palette::TEXT_DIM));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(TRIGGER_WIDTH)]).split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(" docsearch", theme::page::BRAND)),
            columns[0],
        );

        let label_width = (columns[1].width as usize).saturating_sub(" Ctrl K ".len() + 1);
        let trigger = Line::from(vec![
            Span::styled(
                format!("{:<width$}", " ⌕ Search...", width = label_width),
                theme::page::TRIGGER,
            ),
            Span::styled(" Ctrl K ", theme::page::TRIGGER_KEY),
        ]);
        frame.render_widget(Paragraph::new(trigger), columns[1]);
        self.layout_regions.search_trigger = Some(columns[1]);
    }

    fn render_page(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(PAGE_TITLE, theme::page::HEADING)),
            Line::default(),
        ];
        lines.extend(PAGE_BODY.iter().map(|text| {
            Line::from(Span::styled(*text, Style::default().fg(theme::page::BODY)))
        }));

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            area.inner(Margin::new(2, 1)),
        );
        self.layout_regions.page = Some(area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(warning) = &self.warning {
            Line::from(Span::styled(
                format!(" ⚠ {}", warning),
                Style::default().fg(theme::page::STATUS_WARNING),
            ))
        } else if self.overlay.is_open() {
            border_hints::build_hints(OVERLAY_HINTS, theme::page::HINTS)
        } else {
            let mut line = border_hints::build_hints(PAGE_HINTS, theme::page::HINTS);
            if let Some(reason) = self.last_close() {
                line.spans.push(Span::styled(
                    format!(" Search closed by {}", reason),
                    Style::default().fg(theme::page::STATUS_INFO),
                ));
            }
            line
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
