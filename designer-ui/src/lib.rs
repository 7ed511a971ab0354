//! designer-ui - Shared UI types and components for the asset designer
//!
//! Contains display types, the selection model and its URL codec, stores,
//! and pure view components. Anything that talks to the network or the
//! browser lives in designer-web.

pub mod components;
pub mod display_types;
pub mod selection;
pub mod stores;
pub mod url_state;
pub mod variables;

pub use components::*;
pub use display_types::*;
pub use selection::Selection;
