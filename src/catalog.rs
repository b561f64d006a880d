//! Static result catalog shown beneath the search input
//!
//! The list is not data-driven: every query shows the same entries, with the
//! query highlighted wherever it occurs.

/// HTTP method badge for API reference entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A single documentation hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocResult {
    /// Page title, breadcrumb segments joined with " › "
    pub title: &'static str,
    /// Excerpt shown under the title (may be empty)
    pub snippet: &'static str,
    pub method: Option<Method>,
    /// Whether the entry shows a trailing chevron
    pub chevron: bool,
}

impl DocResult {
    const fn page(title: &'static str, snippet: &'static str) -> Self {
        Self {
            title,
            snippet,
            method: None,
            chevron: false,
        }
    }
}

const RESULTS: &[DocResult] = &[
    DocResult::page("Browser Settings", "Browser Use allows you to customize the"),
    DocResult {
        title: "Delete Browser Profile For User",
        snippet: "Deletes the browser profile for the user.",
        method: Some(Method::Post),
        chevron: false,
    },
    DocResult {
        title: "Connect to your Browser",
        snippet: "With this you can connect to your real browser, where you are logged",
        method: None,
        chevron: true,
    },
    DocResult::page(
        "Implementing the API",
        "the API Learn how to implement the Browser Use API in Python",
    ),
    DocResult::page("Agent Settings › Reuse Existing Browser", "browser : A"),
    DocResult::page(
        "Custom Functions › Browser-Aware Functions",
        "For actions that need browser access, simply add the",
    ),
    DocResult::page(
        "Development › Telemetry › Overview",
        "Browser Use collects anonymous usage data to help us",
    ),
    DocResult::page(
        "Get Started › Introduction › Overview",
        "Browser Use is the easiest way to connect your AI agents with the browser. It m",
    ),
    DocResult::page(
        "Lifecycle Hooks › Client Component (client.py)",
        "(client.py) The client component runs the Browser-Use agent with a recording",
    ),
    DocResult::page("Evaluations › Prerequisites", ""),
];

/// All documentation entries, in display order
pub fn doc_results() -> &'static [DocResult] {
    RESULTS
}

/// Rows in the result list: the "ask AI" row followed by every doc entry
pub fn row_count() -> usize {
    1 + RESULTS.len()
}
