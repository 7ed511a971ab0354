use crate::api;
use crate::config::DesignerConfig;
use crate::export::{run_export, try_begin, BrowserCapture};
use crate::templates::{TemplateProps, TemplateRegistry};
use designer_ui::selection::Selection;
use designer_ui::stores::{select_field, select_template, select_theme, SelectionHandle};
use designer_ui::{
    DesignerLayout, ExportButton, ExportStatus, NoTemplateFound, SidebarSection,
    TemplateSelector, ThemeSelector, VariableOptions, VariableRow, VariableSelectorView,
};
use dioxus::prelude::*;
use std::rc::Rc;

/// The designer page: sidebar of selectors next to the rendered template.
///
/// The selection is read from the store on mount and refreshed on every
/// store notification.
#[component]
pub fn AssetDesigner() -> Element {
    let config = use_context::<DesignerConfig>();
    let registry = use_context::<TemplateRegistry>();
    let handle = use_context::<SelectionHandle>();

    let selection = use_signal(|| handle.store().snapshot());
    let store = handle.clone();
    use_hook(move || {
        let subscription = store.store().subscribe(Rc::new(move |next: &Selection| {
            let mut selection = selection;
            selection.set(next.clone());
        }));
        Rc::new(subscription)
    });

    let mut export_status = use_signal(ExportStatus::default);
    let anchor_id = config.anchor_id.clone();
    let file_name = config.export_file_name.clone();
    let on_export = move |_: ()| {
        if !try_begin(&mut export_status.write()) {
            return;
        }
        let anchor_id = anchor_id.clone();
        let file_name = file_name.clone();
        spawn(async move {
            run_export(&BrowserCapture, &anchor_id, &file_name, |status| {
                export_status.set(status)
            })
            .await;
        });
    };

    let selected = selection();
    let catalog = config.theme_catalog();
    let theme = catalog.resolve(&selected);
    let template = registry.resolve(&selected);
    let rows = registry.variable_rows(&selected);

    let preview = match template {
        Some(def) => def.render(TemplateProps {
            selected: selected.clone(),
            theme: theme.clone(),
            id: config.anchor_id.clone(),
        }),
        None => rsx! { NoTemplateFound {} },
    };

    let theme_handle = handle.clone();
    let template_handle = handle.clone();

    rsx! {
        DesignerLayout {
            sidebar_width: config.sidebar_width.clone(),
            sidebar_background: theme.colors.background.clone(),
            sidebar: rsx! {
                SidebarSection {
                    h1 { class: "designer-title", "Asset designer" }
                }
                SidebarSection {
                    ExportButton { status: export_status(), onclick: on_export }
                }
                SidebarSection { title: "Themes",
                    ThemeSelector {
                        themes: catalog.themes().to_vec(),
                        selected_theme: theme.id.clone(),
                        onchange: move |id: String| select_theme(theme_handle.store(), &id),
                    }
                }
                SidebarSection { title: "Templates",
                    TemplateSelector {
                        templates: registry.ids(),
                        selected_template: selected.template_id().unwrap_or_default(),
                        onchange: move |id: String| select_template(template_handle.store(), &id),
                    }
                }
                if !rows.is_empty() {
                    SidebarSection { title: "Variables",
                        for row in rows {
                            VariableField { key: "{row.decl.id}", row, selected: selected.clone() }
                        }
                    }
                }
            },
            {preview}
        }
    }
}

/// One variable row. Options are re-queried whenever the selection changes.
#[component]
fn VariableField(row: VariableRow, selected: Selection) -> Element {
    let endpoint = use_context::<DesignerConfig>().graphql_endpoint;
    let handle = use_context::<SelectionHandle>();

    let decl = row.decl;
    let value = row.value.unwrap_or_default();
    let options = use_resource(use_reactive!(|decl, selected| {
        let endpoint = endpoint.clone();
        async move { api::fetch_options(&endpoint, &decl, &selected).await }
    }));
    let options = match &*options.read() {
        Some(options) => VariableOptions::Ready(options.clone()),
        None => VariableOptions::Loading,
    };

    rsx! {
        VariableSelectorView {
            field: decl.id,
            options,
            selected: value,
            onchange: move |value: String| select_field(handle.store(), decl.id, &value),
        }
    }
}
