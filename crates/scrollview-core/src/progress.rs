//! Observable single-writer / multi-reader progress value.
//!
//! The writer (scroll source or render loop) calls [`ProgressCell::set`];
//! readers either poll [`ProgressCell::get`] or hold a [`Subscription`].
//! Only the latest value is kept; there is no history queue.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(f32)>>;

struct Shared {
    value: Cell<f32>,
    next_id: Cell<u64>,
    listeners: RefCell<SmallVec<[(u64, Listener); 4]>>,
}

/// Cheap-to-clone handle; all clones observe the same value.
#[derive(Clone)]
pub struct ProgressCell {
    shared: Rc<Shared>,
}

impl ProgressCell {
    pub fn new(initial: f32) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: Cell::new(clamp_progress(initial).unwrap_or(0.0)),
                next_id: Cell::new(0),
                listeners: RefCell::new(SmallVec::new()),
            }),
        }
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.shared.value.get()
    }

    /// Store a new value (clamped to [0, 1]) and notify subscribers if it changed.
    ///
    /// Non-finite input is dropped. Listeners may read the cell, subscribe or
    /// unsubscribe from inside their callback; a listener is never re-entered
    /// by a nested `set`.
    pub fn set(&self, value: f32) {
        let Some(v) = clamp_progress(value) else {
            log::debug!("[progress] ignoring non-finite value {value}");
            return;
        };
        if v == self.shared.value.get() {
            return;
        }
        self.shared.value.set(v);
        let snapshot: SmallVec<[Listener; 4]> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in snapshot {
            if let Ok(mut f) = listener.try_borrow_mut() {
                (&mut *f)(v);
            }
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(f32) + 'static) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        let listener: Listener = Rc::new(RefCell::new(callback));
        self.shared.listeners.borrow_mut().push((id, listener));
        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }
}

impl Default for ProgressCell {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Keeps a callback registered until dropped or explicitly unsubscribed.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[inline]
fn clamp_progress(v: f32) -> Option<f32> {
    v.is_finite().then(|| v.clamp(0.0, 1.0))
}
