use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use super::mouse_events;
use crate::keys::Propagation;
use crate::overlay::overlay_events;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout_at(Instant::now()))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                _ => {}
            }
        }

        self.overlay.tick();
        Ok(())
    }

    /// Poll timeout, shortened so a pending focus request is granted on time
    pub fn poll_timeout_at(&self, now: Instant) -> Duration {
        match self.overlay.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(now)
                .min(EVENT_POLL_TIMEOUT),
            None => EVENT_POLL_TIMEOUT,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Scoped listeners (the overlay's Escape handler) see the key first
        if self.keys.dispatch(&key) == Propagation::Stop {
            self.overlay.poll_close_requests();
            return;
        }

        if self.overlay.is_open() {
            overlay_events::handle_key(&mut self.overlay, key);
            return;
        }

        self.handle_page_key(key);
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.open_search();
            }
            KeyCode::Char('/') => {
                self.open_search();
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    pub fn handle_paste_event(&mut self, text: &str) {
        overlay_events::handle_paste(&mut self.overlay, text);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
