//! The designer's selection: every field currently driving the page
//!
//! The selection is always derived from the query string. Nothing else keeps
//! a copy, so every change goes through a [`crate::stores::SelectionStore`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CONFERENCE_SERIES_ID: &str = "conferenceSeriesId";
pub const TEMPLATE_ID: &str = "templateId";

/// Field the theme selector writes to.
///
/// Themes are keyed by conference series, so picking a theme selects the
/// series with the same id. Downstream page loads read this field.
pub const THEME_FIELD: &str = CONFERENCE_SERIES_ID;

/// Field name to value mapping, ordered by field name
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn conference_series_id(&self) -> Option<&str> {
        self.get(CONFERENCE_SERIES_ID)
    }

    pub fn template_id(&self) -> Option<&str> {
        self.get(TEMPLATE_ID)
    }

    /// Copy of this selection with `field` set to `value`
    pub fn with_field(&self, field: &str, value: &str) -> Self {
        let mut next = self.clone();
        next.insert(field, value);
        next
    }

    /// Selection after switching to another template.
    ///
    /// Variables of the old template may not apply to the new one, so only
    /// the conference series survives.
    pub fn for_template(&self, template_id: &str) -> Self {
        let mut next = Self::new();
        if let Some(series) = self.conference_series_id() {
            next.insert(CONFERENCE_SERIES_ID, series);
        }
        next.insert(TEMPLATE_ID, template_id);
        next
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_template_keeps_only_series() {
        let current: Selection = [
            ("conferenceSeriesId", "s1"),
            ("conferenceId", "c1"),
            ("templateId", "banner"),
            ("track", "t1"),
        ]
        .into_iter()
        .collect();

        let next = current.for_template("badge");

        assert_eq!(next.len(), 2);
        assert_eq!(next.conference_series_id(), Some("s1"));
        assert_eq!(next.template_id(), Some("badge"));
        assert_eq!(next.get("track"), None);
    }

    #[test]
    fn for_template_without_series() {
        let current: Selection = [("conferenceId", "c1")].into_iter().collect();
        let next = current.for_template("badge");

        assert_eq!(next, [("templateId", "badge")].into_iter().collect());
    }

    #[test]
    fn with_field_overlays_and_keeps_the_rest() {
        let current: Selection = [("templateId", "banner"), ("track", "t1")]
            .into_iter()
            .collect();
        let next = current.with_field("track", "t2");

        assert_eq!(next.get("track"), Some("t2"));
        assert_eq!(next.template_id(), Some("banner"));
        assert_eq!(current.get("track"), Some("t1"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let selection: Selection = [("conferenceSeriesId", "s1"), ("templateId", "banner")]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"conferenceSeriesId": "s1", "templateId": "banner"})
        );
    }
}
