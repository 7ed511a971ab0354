//! Selection store interface and the in-memory implementation
//!
//! The page only ever talks to [`SelectionStore`]. designer-web binds it to
//! the address bar; [`MemoryStore`] keeps the selection in memory.

use crate::selection::{Selection, THEME_FIELD};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Callback invoked with the new selection after every write
pub type Listener = Rc<dyn Fn(&Selection)>;

/// Read/write access to the current selection
pub trait SelectionStore {
    /// Full current selection
    fn snapshot(&self) -> Selection;

    /// Replace the whole selection
    fn replace(&self, selection: Selection);

    /// Register a change listener. It stays registered until the returned
    /// [`Subscription`] is dropped.
    fn subscribe(&self, listener: Listener) -> Subscription;

    fn get(&self, field: &str) -> Option<String> {
        self.snapshot().get(field).map(str::to_string)
    }

    /// Overlay a single field on the current selection
    fn set(&self, field: &str, value: &str) {
        let next = self.snapshot().with_field(field, value);
        self.replace(next);
    }
}

/// Write a variable (or any other field) value
pub fn select_field(store: &dyn SelectionStore, field: &str, value: &str) {
    debug!(field, value, "Selecting field");
    store.set(field, value);
}

/// Write a theme choice. See [`THEME_FIELD`] for where it lands.
pub fn select_theme(store: &dyn SelectionStore, theme_id: &str) {
    debug!(theme_id, "Selecting theme");
    store.set(THEME_FIELD, theme_id);
}

/// Switch template, dropping every field but the conference series
pub fn select_template(store: &dyn SelectionStore, template_id: &str) {
    debug!(template_id, "Selecting template");
    let next = store.snapshot().for_template(template_id);
    store.replace(next);
}

/// Shared handle to the page's selection store, provided through context
#[derive(Clone)]
pub struct SelectionHandle(Rc<dyn SelectionStore>);

impl SelectionHandle {
    pub fn new(store: impl SelectionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn store(&self) -> &dyn SelectionStore {
        self.0.as_ref()
    }
}

impl PartialEq for SelectionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Default)]
struct ListenerSlots {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Listener list shared by store implementations
#[derive(Clone, Default)]
pub struct Listeners {
    slots: Rc<RefCell<ListenerSlots>>,
}

impl Listeners {
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        slots.listeners.push((id, listener));
        Subscription {
            id,
            slots: Rc::downgrade(&self.slots),
        }
    }

    pub fn notify(&self, selection: &Selection) {
        // Listeners may subscribe or unsubscribe while being notified
        let listeners: Vec<Listener> = self
            .slots
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(selection);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a listener registered; unregisters it on drop
pub struct Subscription {
    id: u64,
    slots: Weak<RefCell<ListenerSlots>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Selection kept in memory. Writes notify listeners synchronously.
#[derive(Default)]
pub struct MemoryStore {
    selection: RefCell<Selection>,
    listeners: Listeners,
}

impl MemoryStore {
    pub fn new(initial: Selection) -> Self {
        Self {
            selection: RefCell::new(initial),
            listeners: Listeners::default(),
        }
    }
}

impl SelectionStore for MemoryStore {
    fn snapshot(&self) -> Selection {
        self.selection.borrow().clone()
    }

    fn replace(&self, selection: Selection) {
        *self.selection.borrow_mut() = selection.clone();
        self.listeners.notify(&selection);
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}
