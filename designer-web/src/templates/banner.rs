//! Track banner: series and track title over the theme's primary color

use super::use_template_data;
use designer_ui::selection::Selection;
use designer_ui::Theme;
use dioxus::prelude::*;
use serde::Deserialize;

const BANNER_QUERY: &str = "query Banner($conferenceSeriesId: ID, $track: ID) {
  series(id: $conferenceSeriesId) { title }
  track(id: $track) { title }
}";

#[derive(Deserialize, Clone, Debug, PartialEq)]
struct Title {
    title: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
struct BannerData {
    series: Option<Title>,
    track: Option<Title>,
}

#[component]
pub fn Banner(selected: Selection, theme: Theme, id: String) -> Element {
    let data = use_template_data::<BannerData>(BANNER_QUERY, selected.clone());
    let colors = theme.colors;

    let (series, track) = match data {
        None => ("Loading...".to_string(), String::new()),
        Some(data) => {
            let data = data.unwrap_or_default();
            (
                data.series
                    .map(|s| s.title)
                    .or_else(|| selected.conference_series_id().map(str::to_string))
                    .unwrap_or_default(),
                data.track.map(|t| t.title).unwrap_or_default(),
            )
        }
    };

    rsx! {
        div {
            id: "{id}",
            class: "template template-banner",
            style: "background-color: {colors.primary}; color: {colors.background};",
            h1 { class: "template-banner-series", "{series}" }
            if !track.is_empty() {
                h2 {
                    class: "template-banner-track",
                    style: "color: {colors.text};",
                    "{track}"
                }
            }
        }
    }
}
