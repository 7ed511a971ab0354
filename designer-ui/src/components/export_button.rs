use crate::display_types::ExportStatus;
use dioxus::prelude::*;

/// Trigger for the image export. Disabled while a capture is running.
#[component]
pub fn ExportButton(status: ExportStatus, onclick: EventHandler<()>) -> Element {
    let in_flight = status.is_in_flight();
    let label = if in_flight { "Exporting..." } else { "Export Image" };

    rsx! {
        button {
            class: "designer-export",
            disabled: in_flight,
            onclick: move |_| {
                if !in_flight {
                    onclick.call(());
                }
            },
            "{label}"
        }
    }
}
