use std::cell::Cell;
use std::rc::Rc;

use crate::config::Config;
use crate::keys::KeyDispatcher;
use crate::layout::LayoutRegions;
use crate::overlay::{CloseReason, SearchOverlay};

/// Host page owning the search overlay
pub struct App {
    pub keys: KeyDispatcher,
    pub overlay: SearchOverlay,
    pub layout_regions: LayoutRegions,
    pub config: Config,
    /// Seed for the input every time the overlay opens
    pub initial_query: String,
    /// Config warning shown in the status line
    pub warning: Option<String>,
    pub should_quit: bool,
    last_close: Rc<Cell<Option<CloseReason>>>,
}

impl App {
    pub fn new(config: Config, initial_query: String) -> Self {
        let keys = KeyDispatcher::new();
        let last_close = Rc::new(Cell::new(None));

        let sink = Rc::clone(&last_close);
        let overlay = SearchOverlay::new(
            keys.clone(),
            Box::new(move |reason| sink.set(Some(reason))),
            config.overlay.focus_delay(),
        );

        Self {
            keys,
            overlay,
            layout_regions: LayoutRegions::new(),
            config,
            initial_query,
            warning: None,
            should_quit: false,
            last_close,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Open the overlay seeded with `initial_query`
    pub fn open_search(&mut self) -> bool {
        let opened = self.overlay.open(&self.initial_query);
        if opened {
            self.last_close.set(None);
        }
        opened
    }

    pub fn close_search(&mut self) -> bool {
        self.overlay.close(CloseReason::Requested)
    }

    /// How the overlay was last closed, cleared when it reopens
    pub fn last_close(&self) -> Option<CloseReason> {
        self.last_close.get()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
