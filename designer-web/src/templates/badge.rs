//! Attendee badge

use super::use_template_data;
use designer_ui::selection::Selection;
use designer_ui::Theme;
use dioxus::prelude::*;
use serde::Deserialize;

const BADGE_QUERY: &str = "query Badge($conferenceId: ID, $contact: ID) {
  conference(id: $conferenceId) { title }
  attendee(id: $contact) { name company }
}";

#[derive(Deserialize, Clone, Debug, PartialEq)]
struct Conference {
    title: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
struct Attendee {
    name: String,
    company: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
struct BadgeData {
    conference: Option<Conference>,
    attendee: Option<Attendee>,
}

#[component]
pub fn Badge(selected: Selection, theme: Theme, id: String) -> Element {
    let data = use_template_data::<BadgeData>(BADGE_QUERY, selected);
    let colors = theme.colors;

    let Some(data) = data else {
        return rsx! {
            div { id: "{id}", class: "template template-badge", "Loading..." }
        };
    };
    let BadgeData {
        conference,
        attendee,
    } = data.unwrap_or_default();

    let conference = conference.map(|c| c.title).unwrap_or_default();
    let (name, company) = match attendee {
        Some(a) => (a.name, a.company.unwrap_or_default()),
        None => ("Attendee".to_string(), String::new()),
    };

    rsx! {
        div {
            id: "{id}",
            class: "template template-badge",
            style: "background-color: {colors.background}; color: {colors.text}; border-color: {colors.primary};",
            header {
                class: "template-badge-conference",
                style: "background-color: {colors.primary}; color: {colors.background};",
                "{conference}"
            }
            p { class: "template-badge-name", "{name}" }
            if !company.is_empty() {
                p {
                    class: "template-badge-company",
                    style: "color: {colors.secondary};",
                    "{company}"
                }
            }
        }
    }
}
