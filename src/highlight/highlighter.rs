use std::ops::Range;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// A contiguous run of text, either plain or emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Emphasized(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(text) | Segment::Emphasized(text) => text,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, Segment::Emphasized(_))
    }
}

/// Lowercased text with a map from folded byte offsets back to the original.
///
/// `boundaries` holds one `(folded, original)` pair per source character plus
/// a trailing pair for the end of the string, strictly increasing in both.
struct Folded {
    text: String,
    boundaries: Vec<(usize, usize)>,
}

impl Folded {
    fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut boundaries = Vec::with_capacity(source.len() + 1);

        for (idx, ch) in source.char_indices() {
            boundaries.push((text.len(), idx));
            text.extend(ch.to_lowercase());
        }
        boundaries.push((text.len(), source.len()));

        Self { text, boundaries }
    }

    /// Original offset for a folded offset, if it lands on a source char boundary
    fn original_offset(&self, folded: usize) -> Option<usize> {
        self.boundaries
            .binary_search_by_key(&folded, |&(f, _)| f)
            .ok()
            .map(|i| self.boundaries[i].1)
    }
}

/// Byte ranges of `text` matching `query`, left to right, non-overlapping
fn find_matches(text: &str, query: &str) -> Vec<Range<usize>> {
    let haystack = Folded::new(text);
    let needle: String = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;

    while from < haystack.text.len() {
        let Some(pos) = haystack.text[from..].find(&needle) else {
            break;
        };
        let start = from + pos;
        let end = start + needle.len();

        match (haystack.original_offset(start), haystack.original_offset(end)) {
            (Some(orig_start), Some(orig_end)) => {
                ranges.push(orig_start..orig_end);
                from = end;
            }
            // Match begins or ends inside the lowercase expansion of one char
            _ => {
                from = start
                    + haystack.text[start..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
            }
        }
    }

    ranges
}

/// Split `text` into segments, emphasizing every occurrence of `query`.
///
/// The query is matched literally and case-insensitively; characters such as
/// `(` or `*` match themselves. A blank query yields the text as one plain
/// segment. Emphasized segments keep the original casing of `text`.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if query.trim().is_empty() {
        return vec![Segment::Plain(text)];
    }

    let ranges = find_matches(text, query);
    if ranges.is_empty() {
        return vec![Segment::Plain(text)];
    }

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;

    for range in ranges {
        let (Some(before), Some(matched)) = (text.get(cursor..range.start), text.get(range.clone()))
        else {
            #[cfg(debug_assertions)]
            log::debug!("Highlight fell back to plain text for query {:?}", query);
            return vec![Segment::Plain(text)];
        };

        if !before.is_empty() {
            segments.push(Segment::Plain(before));
        }
        segments.push(Segment::Emphasized(matched));
        cursor = range.end;
    }

    if let Some(rest) = text.get(cursor..)
        && !rest.is_empty()
    {
        segments.push(Segment::Plain(rest));
    }

    segments
}

/// Convert segments into styled spans
pub fn to_spans<'a>(segments: &[Segment<'a>], base: Style, emphasis: Style) -> Vec<Span<'a>> {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => Span::styled(*text, base),
            Segment::Emphasized(text) => Span::styled(*text, base.patch(emphasis)),
        })
        .collect()
}

/// Highlight `text` for `query` and build a single styled line
pub fn highlight_line<'a>(text: &'a str, query: &str, base: Style, emphasis: Style) -> Line<'a> {
    Line::from(to_spans(&highlight(text, query), base, emphasis))
}

#[cfg(test)]
#[path = "highlighter_tests.rs"]
mod highlighter_tests;
