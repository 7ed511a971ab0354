//! Template registry
//!
//! A template is a render unit plus the variables it lets the user pick.
//! The registry maps template ids to [`TemplateDef`]s in registration order.

mod badge;
mod banner;
mod schedule;
pub mod sources;

pub use badge::Badge;
pub use banner::Banner;
pub use schedule::Schedule;

use crate::api;
use crate::config::DesignerConfig;
use designer_ui::selection::Selection;
use designer_ui::variables::{variable_rows, VariableDecl};
use designer_ui::{Theme, VariableRow};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use sources::{
    ConferenceSource, ContactSource, TrackSource, CONFERENCES_QUERY, CONTACTS_QUERY,
    TRACKS_QUERY,
};
use tracing::warn;

/// What every template renders from
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateProps {
    pub selected: Selection,
    pub theme: Theme,
    /// DOM id the template puts on its root node
    pub id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKind {
    Badge,
    Banner,
    Schedule,
}

impl TemplateKind {
    pub fn render(self, props: TemplateProps) -> Element {
        let TemplateProps {
            selected,
            theme,
            id,
        } = props;
        match self {
            TemplateKind::Badge => rsx! { Badge { selected, theme, id } },
            TemplateKind::Banner => rsx! { Banner { selected, theme, id } },
            TemplateKind::Schedule => rsx! { Schedule { selected, theme, id } },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateDef {
    pub id: &'static str,
    pub kind: TemplateKind,
    variables: Vec<VariableDecl>,
}

impl TemplateDef {
    pub fn new(id: &'static str, kind: TemplateKind) -> Self {
        Self {
            id,
            kind,
            variables: Vec::new(),
        }
    }

    pub fn with_variable(mut self, decl: VariableDecl) -> Self {
        self.variables.push(decl);
        self
    }

    /// Declared variables, in sidebar order. Empty when none are declared.
    pub fn variables(&self) -> &[VariableDecl] {
        &self.variables
    }

    pub fn render(&self, props: TemplateProps) -> Element {
        self.kind.render(props)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateRegistry {
    templates: Vec<TemplateDef>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The templates shipped with the designer
    pub fn builtin() -> Self {
        Self::new()
            .register(
                TemplateDef::new("badge", TemplateKind::Badge)
                    .with_variable(VariableDecl::new::<ConferenceSource>(
                        "conferenceId",
                        CONFERENCES_QUERY,
                    ))
                    .with_variable(VariableDecl::new::<ContactSource>(
                        "contact",
                        CONTACTS_QUERY,
                    )),
            )
            .register(
                TemplateDef::new("banner", TemplateKind::Banner)
                    .with_variable(VariableDecl::new::<TrackSource>("track", TRACKS_QUERY)),
            )
            .register(
                TemplateDef::new("schedule", TemplateKind::Schedule).with_variable(
                    VariableDecl::new::<ConferenceSource>("conferenceId", CONFERENCES_QUERY),
                ),
            )
    }

    /// Add a template. A later registration under the same id replaces the
    /// earlier one in place.
    pub fn register(mut self, def: TemplateDef) -> Self {
        match self.templates.iter_mut().find(|t| t.id == def.id) {
            Some(existing) => *existing = def,
            None => self.templates.push(def),
        }
        self
    }

    pub fn lookup(&self, id: &str) -> Option<&TemplateDef> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.id.to_string()).collect()
    }

    /// The template named by the selection's `templateId`
    pub fn resolve(&self, selection: &Selection) -> Option<&TemplateDef> {
        self.lookup(selection.template_id()?)
    }

    /// Sidebar variable rows for the selected template: its declared
    /// variables overlaid with their selected values. Empty when no template
    /// matches.
    pub fn variable_rows(&self, selection: &Selection) -> Vec<VariableRow> {
        self.resolve(selection)
            .map(|t| variable_rows(t.variables(), selection))
            .unwrap_or_default()
    }
}

/// Data a template queries for the current selection.
///
/// Outer None while loading. Inner None when the query failed; the failure is
/// logged and the template renders without it.
fn use_template_data<T>(query: &'static str, selected: Selection) -> Option<Option<T>>
where
    T: DeserializeOwned + Clone + 'static,
{
    let endpoint = use_context::<DesignerConfig>().graphql_endpoint;
    let data = use_resource(use_reactive!(|selected| {
        let endpoint = endpoint.clone();
        async move {
            match api::query::<T>(&endpoint, query, &selected).await {
                Ok(data) => Some(data),
                Err(e) => {
                    warn!("Template query failed: {e}");
                    None
                }
            }
        }
    }));
    let data = data.read().clone();
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use designer_ui::url_state;

    #[test]
    fn builtin_ids_in_registration_order() {
        assert_eq!(
            TemplateRegistry::builtin().ids(),
            vec!["badge", "banner", "schedule"]
        );
    }

    #[test]
    fn builtin_variables() {
        let registry = TemplateRegistry::builtin();
        let ids = |template: &str| -> Vec<&str> {
            registry
                .lookup(template)
                .unwrap()
                .variables()
                .iter()
                .map(|v| v.id)
                .collect()
        };

        assert_eq!(ids("badge"), vec!["conferenceId", "contact"]);
        assert_eq!(ids("banner"), vec!["track"]);
        assert_eq!(ids("schedule"), vec!["conferenceId"]);
    }

    #[test]
    fn resolve_follows_template_id() {
        let registry = TemplateRegistry::builtin();

        let banner = registry.resolve(&url_state::decode("templateId=banner"));
        assert_eq!(banner.map(|t| t.kind), Some(TemplateKind::Banner));

        assert!(registry
            .resolve(&url_state::decode("templateId=unknown"))
            .is_none());
        assert!(registry
            .resolve(&url_state::decode("conferenceSeriesId=s1"))
            .is_none());
    }

    #[test]
    fn variable_rows_follow_selected_template() {
        let registry = TemplateRegistry::builtin();
        let selection = url_state::decode("templateId=badge&contact=p1&track=t1");

        let rows = registry.variable_rows(&selection);
        let overlaid: Vec<(&str, Option<&str>)> =
            rows.iter().map(|r| (r.id(), r.value.as_deref())).collect();
        assert_eq!(overlaid, vec![("conferenceId", None), ("contact", Some("p1"))]);
        assert_eq!(rows[1].decl.query, sources::CONTACTS_QUERY);

        assert!(registry
            .variable_rows(&url_state::decode("templateId=unknown&track=t1"))
            .is_empty());
    }

    #[test]
    fn lookup_is_exact() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.lookup("Banner").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn re_registering_replaces_in_place() {
        let registry = TemplateRegistry::builtin()
            .register(TemplateDef::new("badge", TemplateKind::Schedule));

        assert_eq!(registry.ids(), vec!["badge", "banner", "schedule"]);
        let badge = registry.lookup("badge").unwrap();
        assert_eq!(badge.kind, TemplateKind::Schedule);
        assert!(badge.variables().is_empty());
    }
}
