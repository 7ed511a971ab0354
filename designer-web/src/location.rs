//! Selection store backed by the address bar

use designer_ui::selection::Selection;
use designer_ui::stores::{Listener, Listeners, SelectionStore, Subscription};
use designer_ui::url_state;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// How a write reaches the address bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Assign `location.search`; the browser reloads the page
    Reload,
    /// Push a history entry and notify subscribers; no reload
    PushState,
}

/// Reads the selection from `location.search` and writes it back there.
///
/// With [`Navigation::PushState`] the store also follows back/forward
/// navigation and notifies subscribers of the restored selection.
pub struct QueryStringStore {
    navigation: Navigation,
    listeners: Listeners,
    _popstate: Option<WindowEventListener>,
}

impl QueryStringStore {
    pub fn new(navigation: Navigation) -> Self {
        let listeners = Listeners::default();
        let popstate = match navigation {
            Navigation::Reload => None,
            Navigation::PushState => web_sys::window().map(|window| {
                let listeners = listeners.clone();
                WindowEventListener::new(window, "popstate", move |_| {
                    listeners.notify(&url_state::decode(&current_search()));
                })
            }),
        };

        Self {
            navigation,
            listeners,
            _popstate: popstate,
        }
    }
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn push_query(window: &web_sys::Window, query: &str) -> Result<(), JsValue> {
    let url = if query.is_empty() {
        window.location().pathname()?
    } else {
        format!("?{query}")
    };
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(&url))
}

impl SelectionStore for QueryStringStore {
    fn snapshot(&self) -> Selection {
        url_state::decode(&current_search())
    }

    fn replace(&self, selection: Selection) {
        let query = url_state::encode(&selection);
        debug!(%query, "Writing selection to address bar");

        let Some(window) = web_sys::window() else {
            warn!("No window, selection not written");
            return;
        };

        let written = match self.navigation {
            Navigation::Reload => window.location().set_search(&query),
            Navigation::PushState => push_query(&window, &query),
        };
        if let Err(e) = written {
            warn!("Failed to write selection to address bar: {e:?}");
            return;
        }

        self.listeners.notify(&selection);
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}

/// Window event listener removed on drop
struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl WindowEventListener {
    fn new(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));
        window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
