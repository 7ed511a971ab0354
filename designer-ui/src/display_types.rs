//! Display types shared by the sidebar and the templates

use crate::variables::VariableDecl;
use serde::Deserialize;

/// A single entry of a selector: the value written to the URL and the text shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value (themes, template ids)
    pub fn same(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            value: id.clone(),
            label: id,
        }
    }

    /// The explicit "unset" entry prepended to variable selectors
    pub fn blank() -> Self {
        Self::new("", "")
    }
}

/// Display colors of a theme
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub background: String,
    pub text: String,
    pub primary: String,
    pub secondary: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111827".to_string(),
            primary: "#4f46e5".to_string(),
            secondary: "#6b7280".to_string(),
        }
    }
}

/// A theme as supplied by the theme catalog. Read-only for the designer.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Theme {
    pub id: String,
    #[serde(default)]
    pub colors: ThemeColors,
}

/// A template-declared variable overlaid with its current value
#[derive(Clone, Debug, PartialEq)]
pub struct VariableRow {
    pub decl: VariableDecl,
    /// None when the selection has no value for this variable
    pub value: Option<String>,
}

impl VariableRow {
    pub fn id(&self) -> &'static str {
        self.decl.id
    }
}

/// Options of a variable selector
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VariableOptions {
    /// The query is still running
    #[default]
    Loading,
    Ready(Vec<SelectOption>),
}

/// Lifecycle of a single export invocation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportStatus {
    #[default]
    Idle,
    InFlight,
    Done,
    Failed(String),
}

impl ExportStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ExportStatus::InFlight)
    }
}
