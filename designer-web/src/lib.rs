//! designer-web - Browser app for designing conference assets
//!
//! Binds the designer-ui components to the address bar, the GraphQL
//! endpoint and the image export.

pub mod api;
pub mod config;
mod dom_to_image;
mod download;
pub mod export;
pub mod location;
pub mod pages;
pub mod templates;

use config::DesignerConfig;
use designer_ui::stores::SelectionHandle;
use dioxus::prelude::*;
use location::{Navigation, QueryStringStore};
use pages::AssetDesigner;
use templates::TemplateRegistry;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
/// Exposes the `domtoimage` global used by the export
pub const DOM_TO_IMAGE_JS: &str =
    "https://cdn.jsdelivr.net/npm/dom-to-image@2.6.0/src/dom-to-image.js";

#[component]
pub fn App() -> Element {
    let config = use_context_provider(DesignerConfig::load);
    use_context_provider(TemplateRegistry::builtin);

    let navigation = if config.reload_on_change {
        Navigation::Reload
    } else {
        Navigation::PushState
    };
    use_context_provider(|| SelectionHandle::new(QueryStringStore::new(navigation)));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: DOM_TO_IMAGE_JS }
        AssetDesigner {}
    }
}
