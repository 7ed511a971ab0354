//! Conference schedule

use super::use_template_data;
use designer_ui::selection::Selection;
use designer_ui::Theme;
use dioxus::prelude::*;
use serde::Deserialize;

const SCHEDULE_QUERY: &str = "query Schedule($conferenceId: ID) {
  conference(id: $conferenceId) {
    title
    sessions { id title begin speaker }
  }
}";

#[derive(Deserialize, Clone, Debug, PartialEq)]
struct Session {
    id: String,
    title: String,
    /// Start time as served, e.g. "09:30"
    begin: Option<String>,
    speaker: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
struct Conference {
    title: String,
    #[serde(default)]
    sessions: Vec<Session>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
struct ScheduleData {
    conference: Option<Conference>,
}

#[component]
pub fn Schedule(selected: Selection, theme: Theme, id: String) -> Element {
    let data = use_template_data::<ScheduleData>(SCHEDULE_QUERY, selected);
    let colors = theme.colors;

    let Some(data) = data else {
        return rsx! {
            div { id: "{id}", class: "template template-schedule", "Loading..." }
        };
    };
    let Some(conference) = data.unwrap_or_default().conference else {
        return rsx! {
            div {
                id: "{id}",
                class: "template template-schedule",
                style: "background-color: {colors.background}; color: {colors.secondary};",
                "Select a conference"
            }
        };
    };

    rsx! {
        div {
            id: "{id}",
            class: "template template-schedule",
            style: "background-color: {colors.background}; color: {colors.text};",
            h1 { style: "color: {colors.primary};", "{conference.title}" }
            ol { class: "template-schedule-sessions",
                for session in conference.sessions {
                    li { key: "{session.id}",
                        span {
                            class: "template-schedule-time",
                            style: "color: {colors.secondary};",
                            {session.begin.unwrap_or_default()}
                        }
                        span { class: "template-schedule-title", "{session.title}" }
                        if let Some(speaker) = session.speaker {
                            span { class: "template-schedule-speaker", "{speaker}" }
                        }
                    }
                }
            }
        }
    }
}
