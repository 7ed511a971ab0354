//! Native select control driven by an option list

use crate::display_types::SelectOption;
use dioxus::prelude::*;

/// A labeled dropdown.
///
/// `selected` is empty when nothing is chosen. It is not checked against
/// `options`; an unknown value simply leaves no option marked.
#[component]
pub fn Select(
    options: Vec<SelectOption>,
    #[props(default)] selected: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "designer-select",
            value: "{selected}",
            onchange: move |e| onchange.call(e.value()),
            for opt in options {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == selected,
                    "{opt.label}"
                }
            }
        }
    }
}
