//! Sidebar selectors: theme, template and template variables

use super::select::Select;
use crate::display_types::{SelectOption, Theme, VariableOptions};
use dioxus::prelude::*;

/// Theme dropdown. Options are the theme ids.
#[component]
pub fn ThemeSelector(
    themes: Vec<Theme>,
    selected_theme: String,
    onchange: EventHandler<String>,
) -> Element {
    let options: Vec<SelectOption> = themes
        .iter()
        .map(|t| SelectOption::same(t.id.clone()))
        .collect();

    rsx! {
        Select { options, selected: selected_theme, onchange }
    }
}

/// Template dropdown. Options are the registered template ids.
#[component]
pub fn TemplateSelector(
    templates: Vec<String>,
    #[props(default)] selected_template: String,
    onchange: EventHandler<String>,
) -> Element {
    let options: Vec<SelectOption> = templates.into_iter().map(SelectOption::same).collect();

    rsx! {
        Select { options, selected: selected_template, onchange }
    }
}

/// One labelled variable row. Only this row shows a loading state while its
/// query runs.
#[component]
pub fn VariableSelectorView(
    field: String,
    options: VariableOptions,
    #[props(default)] selected: String,
    onchange: EventHandler<String>,
) -> Element {
    let control = match options {
        VariableOptions::Ready(options) => rsx! {
            Select { options, selected, onchange }
        },
        VariableOptions::Loading => rsx! {
            span { class: "designer-loading", "Loading..." }
        },
    };

    rsx! {
        div { class: "designer-variable",
            label { class: "designer-label", "{field}" }
            {control}
        }
    }
}
