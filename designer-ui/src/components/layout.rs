//! Designer page layout: fixed-width sidebar next to the preview pane

use dioxus::prelude::*;

#[component]
pub fn DesignerLayout(
    /// CSS width of the sidebar column
    sidebar_width: String,
    /// Sidebar background, taken from the active theme
    sidebar_background: String,
    sidebar: Element,
    children: Element,
) -> Element {
    rsx! {
        article {
            class: "designer",
            style: "grid-template-columns: {sidebar_width} 1fr;",
            aside {
                class: "designer-sidebar",
                style: "background-color: {sidebar_background};",
                {sidebar}
            }
            main { class: "designer-main", {children} }
        }
    }
}

/// One block of the sidebar, headed unless `title` is empty
#[component]
pub fn SidebarSection(#[props(default)] title: String, children: Element) -> Element {
    rsx! {
        div { class: "designer-sidebar-item",
            if !title.is_empty() {
                h2 { class: "designer-sidebar-header", "{title}" }
            }
            {children}
        }
    }
}

/// Shown in the preview pane when the selected template is not registered
#[component]
pub fn NoTemplateFound() -> Element {
    rsx! { "No template found!" }
}
