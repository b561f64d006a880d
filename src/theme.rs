//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background,
//! orange for query matches

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    // Semantic colors
    pub const WARNING: Color = Color::Rgb(255, 217, 61);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const ORANGE: Color = Color::Rgb(255, 140, 50);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    // Shared cursor style (search input)
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Search overlay styles
pub mod overlay {
    use super::*;

    /// Applied over every cell behind the panel
    pub const SCRIM: Style = Style::new()
        .fg(Color::Rgb(70, 70, 92))
        .bg(Color::Rgb(16, 16, 28))
        .add_modifier(Modifier::DIM);

    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const BORDER: Color = palette::PURPLE;
    pub const TITLE: Style = Style::new()
        .fg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);

    // Input row
    pub const SEARCH_ICON: Color = palette::TEXT_MUTED;
    pub const INPUT_TEXT: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const ESC_BADGE: Style = Style::new().fg(palette::TEXT_MUTED).bg(palette::BG_HOVER);
    pub const SEPARATOR: Color = palette::TEXT_DIM;

    // Result rows
    pub const RESULT_TITLE: Color = palette::TEXT;
    pub const RESULT_SNIPPET: Color = palette::TEXT_MUTED;
    pub const SELECTED_BG: Color = palette::BG_HOVER;
    pub const CHEVRON: Color = palette::ORANGE;
    pub const AI_ICON: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::ORANGE)
        .add_modifier(Modifier::BOLD);
    pub const METHOD_BADGE: Style = Style::new()
        .fg(Color::Rgb(30, 64, 175))
        .bg(Color::Rgb(219, 234, 254))
        .add_modifier(Modifier::BOLD);

    /// Query matches inside titles and snippets
    pub const MATCH: Style = Style::new()
        .fg(palette::ORANGE)
        .add_modifier(Modifier::BOLD);
}

/// Host page styles
pub mod page {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const BRAND: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const HEADING: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const BODY: Color = palette::TEXT_MUTED;

    // Search trigger in the header
    pub const TRIGGER: Style = Style::new().fg(palette::TEXT_DIM).bg(palette::BG_SURFACE);
    pub const TRIGGER_KEY: Style = Style::new().fg(palette::TEXT_MUTED).bg(palette::BG_HOVER);

    // Status line
    pub const STATUS_WARNING: Color = palette::WARNING;
    pub const STATUS_INFO: Color = palette::TEXT_MUTED;
    pub const HINTS: Color = palette::TEXT_MUTED;
}

/// Border hint utilities - for building styled keyboard shortcuts
pub mod border_hints {
    use super::*;
    use ratatui::text::{Line, Span};

    /// Build a single hint with key in full color and description dimmed
    pub fn hint(key: &'static str, desc: &'static str, color: Color) -> Vec<Span<'static>> {
        vec![
            Span::styled(key, Style::new().fg(color)),
            Span::styled(
                format!(" {} ", desc),
                Style::new().fg(color).add_modifier(Modifier::DIM),
            ),
        ]
    }

    /// Build a separator dot in dimmed color
    pub fn separator(color: Color) -> Span<'static> {
        Span::styled("• ", Style::new().fg(color).add_modifier(Modifier::DIM))
    }

    /// Build a line with multiple hints separated by dots
    pub fn build_hints(hints: &[(&'static str, &'static str)], color: Color) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(separator(color));
            }
            spans.extend(hint(key, desc, color));
        }
        Line::from(spans)
    }
}
