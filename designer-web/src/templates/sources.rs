//! Option sources of the built-in template variables

use designer_ui::variables::VariableSource;
use designer_ui::SelectOption;
use serde::Deserialize;

pub const TRACKS_QUERY: &str = "query Tracks($conferenceSeriesId: ID) {
  series(id: $conferenceSeriesId) {
    tracks { id title }
  }
}";

pub const CONFERENCES_QUERY: &str = "query Conferences($conferenceSeriesId: ID) {
  series(id: $conferenceSeriesId) {
    conferences { id title }
  }
}";

pub const CONTACTS_QUERY: &str = "query Contacts($conferenceId: ID) {
  conference(id: $conferenceId) {
    attendees { id name }
  }
}";

/// A record with an id and a display title
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Titled {
    pub id: String,
    pub title: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct SeriesTracks {
    series: Option<TrackList>,
}

#[derive(Deserialize)]
struct TrackList {
    tracks: Option<Vec<Titled>>,
}

#[derive(Deserialize)]
pub struct SeriesConferences {
    series: Option<ConferenceList>,
}

#[derive(Deserialize)]
struct ConferenceList {
    conferences: Option<Vec<Titled>>,
}

#[derive(Deserialize)]
pub struct ConferenceAttendees {
    conference: Option<AttendeeList>,
}

#[derive(Deserialize)]
struct AttendeeList {
    attendees: Option<Vec<Person>>,
}

/// Tracks of the selected conference series
pub struct TrackSource;

impl VariableSource for TrackSource {
    type Response = SeriesTracks;
    type Item = Titled;

    fn collection(response: SeriesTracks) -> Option<Vec<Titled>> {
        response.series?.tracks
    }

    fn option(item: &Titled) -> SelectOption {
        SelectOption::new(item.id.clone(), item.title.clone())
    }
}

/// Conferences of the selected conference series
pub struct ConferenceSource;

impl VariableSource for ConferenceSource {
    type Response = SeriesConferences;
    type Item = Titled;

    fn collection(response: SeriesConferences) -> Option<Vec<Titled>> {
        response.series?.conferences
    }

    fn option(item: &Titled) -> SelectOption {
        SelectOption::new(item.id.clone(), item.title.clone())
    }
}

/// Attendees of the selected conference
pub struct ContactSource;

impl VariableSource for ContactSource {
    type Response = ConferenceAttendees;
    type Item = Person;

    fn collection(response: ConferenceAttendees) -> Option<Vec<Person>> {
        response.conference?.attendees
    }

    fn option(item: &Person) -> SelectOption {
        SelectOption::new(item.id.clone(), item.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designer_ui::variables::{with_blank_option, VariableDecl};
    use serde_json::json;

    #[test]
    fn tracks_become_titled_options() {
        let decl = VariableDecl::new::<TrackSource>("track", TRACKS_QUERY);
        let data = json!({"series": {"tracks": [
            {"id": "t1", "title": "Frontend"},
            {"id": "t2", "title": "Tooling"},
        ]}});

        assert_eq!(
            with_blank_option(decl.options(data)),
            vec![
                SelectOption::blank(),
                SelectOption::new("t1", "Frontend"),
                SelectOption::new("t2", "Tooling"),
            ]
        );
    }

    #[test]
    fn unknown_series_has_no_conferences() {
        let decl = VariableDecl::new::<ConferenceSource>("conferenceId", CONFERENCES_QUERY);
        assert_eq!(decl.options(json!({"series": null})), None);
        assert_eq!(decl.options(json!({"series": {"conferences": null}})), None);
    }

    #[test]
    fn attendees_are_labelled_by_name() {
        let decl = VariableDecl::new::<ContactSource>("contact", CONTACTS_QUERY);
        let data = json!({"conference": {"attendees": [{"id": "p1", "name": "Ada"}]}});

        assert_eq!(
            decl.options(data),
            Some(vec![SelectOption::new("p1", "Ada")])
        );
    }
}
