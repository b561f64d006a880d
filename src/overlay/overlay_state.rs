use std::fmt;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use ratatui::crossterm::event::KeyCode;
use ratatui::style::Style;
use tui_textarea::TextArea;

use super::focus_request::FocusRequest;
use crate::error::DocSearchError;
use crate::keys::{KeyDispatcher, KeySubscription, Propagation};
use crate::theme;

/// Default delay between opening the overlay and focusing its input
pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(50);

/// Visibility of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    Open,
}

/// Which path closed the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The owner asked for it
    Requested,
    /// Escape pressed while open
    Escape,
    /// Click on the dimmed background
    Scrim,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CloseReason::Requested => "request",
            CloseReason::Escape => "Esc",
            CloseReason::Scrim => "background click",
        };
        f.write_str(label)
    }
}

/// Callback invoked once per close, whatever the path
pub type OnClose = Box<dyn FnMut(CloseReason)>;

/// Creates a single-line TextArea for the search input
fn create_search_textarea(seed: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![seed.to_string()]);
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

/// Rejects seeds the single-line input cannot hold
pub fn validate_seed(seed: &str) -> Result<(), DocSearchError> {
    if seed.contains(['\n', '\r']) {
        return Err(DocSearchError::MultilineQuery);
    }
    Ok(())
}

/// State that exists only while the overlay is open
struct Session {
    textarea: TextArea<'static>,
    focus: FocusRequest,
    input_focused: bool,
    selected: Option<usize>,
    escape: KeySubscription,
}

enum Phase {
    Closed,
    Open(Session),
}

/// Modal search overlay
///
/// Transitions only through `open` and `close`; the Escape listener and the
/// scrim click both funnel into `close`, which calls `on_close` exactly once.
pub struct SearchOverlay {
    phase: Phase,
    dispatcher: KeyDispatcher,
    on_close: OnClose,
    focus_delay: Duration,
    close_tx: Sender<CloseReason>,
    close_rx: Receiver<CloseReason>,
}

impl SearchOverlay {
    pub fn new(dispatcher: KeyDispatcher, on_close: OnClose, focus_delay: Duration) -> Self {
        let (close_tx, close_rx) = channel();
        Self {
            phase: Phase::Closed,
            dispatcher,
            on_close,
            focus_delay,
            close_tx,
            close_rx,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        match self.phase {
            Phase::Closed => OverlayPhase::Closed,
            Phase::Open(_) => OverlayPhase::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open(_))
    }

    pub fn focus_delay(&self) -> Duration {
        self.focus_delay
    }

    /// Open the overlay with the input seeded from `initial_query`.
    ///
    /// Returns false if the overlay was already open.
    pub fn open(&mut self, initial_query: &str) -> bool {
        self.open_at(initial_query, Instant::now())
    }

    pub fn open_at(&mut self, initial_query: &str, now: Instant) -> bool {
        if self.is_open() {
            return false;
        }

        let mut focus = FocusRequest::new();
        focus.schedule_at(now, self.focus_delay);

        self.phase = Phase::Open(Session {
            textarea: create_search_textarea(initial_query),
            focus,
            input_focused: false,
            selected: None,
            escape: self.subscribe_escape(),
        });

        #[cfg(debug_assertions)]
        log::debug!(
            "Overlay opened (seed {:?}, focus in {:?})",
            initial_query,
            self.focus_delay
        );

        true
    }

    /// Close the overlay and notify the owner.
    ///
    /// Returns false (and does not notify) if the overlay was already closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let Phase::Open(session) = std::mem::replace(&mut self.phase, Phase::Closed) else {
            return false;
        };
        drop(session);

        // Requests queued by the dropped listener belong to the old session
        while self.close_rx.try_recv().is_ok() {}

        #[cfg(debug_assertions)]
        log::debug!("Overlay closed ({})", reason);

        (self.on_close)(reason);
        true
    }

    /// Replace the close callback, re-registering the Escape listener if open
    pub fn set_on_close(&mut self, on_close: OnClose) {
        self.on_close = on_close;
        if self.is_open() {
            let escape = self.subscribe_escape();
            if let Phase::Open(session) = &mut self.phase {
                session.escape = escape;
            }
        }
    }

    /// Apply close requests raised by the Escape listener
    pub fn poll_close_requests(&mut self) -> bool {
        match self.close_rx.try_recv() {
            Ok(reason) => self.close(reason),
            Err(_) => false,
        }
    }

    /// Advance timers. Returns true if anything visible changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let closed = self.poll_close_requests();

        let Phase::Open(session) = &mut self.phase else {
            return closed;
        };
        if session.focus.is_due_at(now) {
            session.focus.cancel();
            session.input_focused = true;

            #[cfg(debug_assertions)]
            log::debug!("Search input focused");

            return true;
        }
        closed
    }

    /// Next instant at which `tick` has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Open(session) => session.focus.deadline(),
            Phase::Closed => None,
        }
    }

    /// Current query text; empty while closed
    pub fn query(&self) -> &str {
        match &self.phase {
            Phase::Open(session) => session
                .textarea
                .lines()
                .first()
                .map(|s| s.as_str())
                .unwrap_or(""),
            Phase::Closed => "",
        }
    }

    pub fn is_input_focused(&self) -> bool {
        matches!(&self.phase, Phase::Open(session) if session.input_focused)
    }

    pub fn has_pending_focus(&self) -> bool {
        matches!(&self.phase, Phase::Open(session) if session.focus.is_pending())
    }

    /// Focus the input right away (e.g. it was clicked)
    pub fn focus_input(&mut self) {
        if let Phase::Open(session) = &mut self.phase {
            session.focus.cancel();
            session.input_focused = true;
        }
    }

    /// Whether the Escape listener is currently registered
    pub fn is_listening(&self) -> bool {
        matches!(&self.phase, Phase::Open(session) if session.escape.is_active())
    }

    pub fn selected(&self) -> Option<usize> {
        match &self.phase {
            Phase::Open(session) => session.selected,
            Phase::Closed => None,
        }
    }

    pub fn select(&mut self, row: Option<usize>) {
        if let Phase::Open(session) = &mut self.phase {
            session.selected = row;
        }
    }

    /// Move the selection by `delta` rows, wrapping within `row_count`
    pub fn move_selection(&mut self, delta: isize, row_count: usize) {
        let Phase::Open(session) = &mut self.phase else {
            return;
        };
        if row_count == 0 {
            session.selected = None;
            return;
        }

        let count = row_count as isize;
        let next = match session.selected {
            None if delta >= 0 => 0,
            None => count - 1,
            Some(current) => (current as isize + delta).rem_euclid(count),
        };
        session.selected = Some(next as usize);
    }

    /// Input widget of the open session
    pub fn textarea_mut(&mut self) -> Option<&mut TextArea<'static>> {
        match &mut self.phase {
            Phase::Open(session) => Some(&mut session.textarea),
            Phase::Closed => None,
        }
    }

    fn subscribe_escape(&self) -> KeySubscription {
        let close_tx = self.close_tx.clone();
        self.dispatcher.subscribe(move |key| {
            if key.code != KeyCode::Esc {
                return Propagation::Continue;
            }
            let _ = close_tx.send(CloseReason::Escape);
            Propagation::Stop
        })
    }
}

#[cfg(test)]
#[path = "overlay_state_tests.rs"]
mod overlay_state_tests;
