use designer_ui::stores::ThemeCatalog;
use designer_ui::Theme;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

/// Settings bundled with the app
const EMBEDDED_CONFIG: &str = include_str!("../designer.yaml");

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid designer config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Designer configuration. Missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    /// GraphQL endpoint for variable and template queries
    pub graphql_endpoint: String,
    /// Name of the downloaded image
    pub export_file_name: String,
    /// DOM id of the node wrapping the rendered template
    pub anchor_id: String,
    /// CSS width of the sidebar column
    pub sidebar_width: String,
    /// Whether selector changes reload the page (true) or navigate in place
    pub reload_on_change: bool,
    pub themes: Vec<Theme>,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: "/graphql".to_string(),
            export_file_name: "design.png".to_string(),
            anchor_id: "asset-design-template-id".to_string(),
            sidebar_width: "15em".to_string(),
            reload_on_change: true,
            themes: Vec::new(),
        }
    }
}

impl DesignerConfig {
    /// Load the bundled configuration, falling back to defaults when it is
    /// malformed.
    pub fn load() -> Self {
        match Self::from_yaml(EMBEDDED_CONFIG) {
            Ok(config) => {
                info!(
                    "Loaded designer config with {} themes",
                    config.themes.len()
                );
                config
            }
            Err(e) => {
                error!("{e}, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn theme_catalog(&self) -> ThemeCatalog {
        ThemeCatalog::new(self.themes.clone())
    }
}
