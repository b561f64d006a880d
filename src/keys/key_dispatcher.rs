use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ratatui::crossterm::event::KeyEvent;

/// Whether a key should continue to later handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    /// The key was consumed; later handlers and the host's own bindings must not see it
    Stop,
}

type Handler = Box<dyn FnMut(&KeyEvent) -> Propagation>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
    /// Ids unsubscribed while their handler was checked out by `dispatch`
    removed: Vec<u64>,
    dispatching: bool,
}

impl Registry {
    /// Detach a handler, returning it so the caller can drop it outside the borrow
    fn unregister(&mut self, id: u64) -> Option<Handler> {
        if let Some(pos) = self.handlers.iter().position(|(hid, _)| *hid == id) {
            return Some(self.handlers.remove(pos).1);
        }
        if self.dispatching {
            self.removed.push(id);
        }
        None
    }
}

/// Registry of process-wide key handlers
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct KeyDispatcher {
    registry: Rc<RefCell<Registry>>,
}

impl KeyDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it stays active until the returned guard is dropped
    #[must_use = "dropping the subscription unregisters the handler immediately"]
    pub fn subscribe<F>(&self, handler: F) -> KeySubscription
    where
        F: FnMut(&KeyEvent) -> Propagation + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Box::new(handler)));

        #[cfg(debug_assertions)]
        log::debug!(
            "Key listener {} subscribed ({} active)",
            id,
            registry.handlers.len()
        );

        KeySubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Offer a key to every handler in subscription order until one stops it.
    ///
    /// Handlers may drop subscriptions (their own included) while running; a
    /// handler unsubscribed mid-dispatch is not called again.
    pub fn dispatch(&self, key: &KeyEvent) -> Propagation {
        let mut handlers = {
            let mut registry = self.registry.borrow_mut();
            if registry.dispatching {
                #[cfg(debug_assertions)]
                log::debug!("Ignoring nested key dispatch for {:?}", key.code);
                return Propagation::Continue;
            }
            registry.dispatching = true;
            std::mem::take(&mut registry.handlers)
        };

        let mut outcome = Propagation::Continue;
        for (id, handler) in handlers.iter_mut() {
            if self.registry.borrow().removed.contains(id) {
                continue;
            }
            if handler(key) == Propagation::Stop {
                outcome = Propagation::Stop;
                break;
            }
        }

        let dropped: Vec<Handler> = {
            let mut registry = self.registry.borrow_mut();
            let added = std::mem::replace(&mut registry.handlers, handlers);
            registry.handlers.extend(added);

            let removed = std::mem::take(&mut registry.removed);
            let (kept, dropped): (Vec<_>, Vec<_>) = std::mem::take(&mut registry.handlers)
                .into_iter()
                .partition(|(id, _)| !removed.contains(id));
            registry.handlers = kept;
            registry.dispatching = false;
            dropped.into_iter().map(|(_, handler)| handler).collect()
        };
        drop(dropped);

        outcome
    }

    /// Number of registered handlers
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Scoped registration of a key handler
///
/// The handler is unregistered when this guard is dropped.
pub struct KeySubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl KeySubscription {
    /// Whether the handler is still registered with a live dispatcher
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            let registry = registry.borrow();
            !registry.removed.contains(&self.id)
                && (registry.dispatching
                    || registry.handlers.iter().any(|(id, _)| *id == self.id))
        })
    }
}

impl std::fmt::Debug for KeySubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeySubscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        let handler = registry.borrow_mut().unregister(self.id);

        #[cfg(debug_assertions)]
        log::debug!("Key listener {} unsubscribed", self.id);

        drop(handler);
    }
}

#[cfg(test)]
#[path = "key_dispatcher_tests.rs"]
mod key_dispatcher_tests;
