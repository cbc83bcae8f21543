//! Single-threaded viewport-change signal.
//!
//! Hosts emit the new surface size; subscribers hold a `ResizeListener`
//! guard that deregisters its callback when dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::core::Viewport;

type ResizeCallback = Rc<RefCell<dyn FnMut(Viewport)>>;

#[derive(Default)]
struct SignalState {
    next_id: u64,
    listeners: Vec<(u64, ResizeCallback)>,
}

impl SignalState {
    fn is_connected(&self, id: u64) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

/// Broadcasts viewport changes to connected listeners.
#[derive(Clone, Default)]
pub struct ResizeSignal {
    state: Rc<RefCell<SignalState>>,
}

impl std::fmt::Debug for ResizeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeSignal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ResizeSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback`; it stays connected while the returned guard lives.
    #[must_use = "dropping the guard disconnects the listener immediately"]
    pub fn connect<F>(&self, callback: F) -> ResizeListener
    where
        F: FnMut(Viewport) + 'static,
    {
        let callback: ResizeCallback = Rc::new(RefCell::new(callback));
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, callback));
        ResizeListener {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Delivers `viewport` to every listener still connected at call time.
    pub fn emit(&self, viewport: Viewport) {
        let listeners: Vec<(u64, ResizeCallback)> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in listeners {
            // A listener earlier in this emission may have disconnected this one.
            if !self.state.borrow().is_connected(id) {
                continue;
            }
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(viewport);
            }
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

/// Connection guard returned by `ResizeSignal::connect`.
#[derive(Debug)]
pub struct ResizeListener {
    id: u64,
    state: Weak<RefCell<SignalState>>,
}

impl ResizeListener {
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| state.borrow().is_connected(self.id))
    }

    /// Explicit form of dropping the guard.
    pub fn disconnect(self) {}
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        if let Ok(mut state) = state.try_borrow_mut() {
            state.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::ResizeSignal;
    use crate::core::Viewport;

    #[test]
    fn dropped_guard_stops_delivery() {
        let signal = ResizeSignal::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let guard = signal.connect(move |_| counter.set(counter.get() + 1));

        signal.emit(Viewport::new(800, 600));
        assert_eq!(calls.get(), 1);
        assert!(guard.is_connected());

        drop(guard);
        assert_eq!(signal.listener_count(), 0);
        signal.emit(Viewport::new(1024, 768));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn guard_outliving_signal_is_harmless() {
        let guard = {
            let signal = ResizeSignal::new();
            signal.connect(|_| {})
        };
        assert!(!guard.is_connected());
    }
}
