//! GraphQL client for variable options and template data

use designer_ui::selection::Selection;
use designer_ui::variables::{with_blank_option, VariableDecl};
use designer_ui::SelectOption;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("Query failed: {0}")]
    GraphQl(String),
    #[error("Query returned no data")]
    NoData,
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Request body. The whole selection goes along as the query's variables.
#[derive(Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: &'a Selection,
}

#[derive(Deserialize, Debug)]
pub struct GraphQlError {
    pub message: String,
}

/// Response envelope
#[derive(Deserialize, Debug)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// The `data` member. Reported errors win over partial data.
    pub fn into_data(self) -> Result<serde_json::Value, ApiError> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(ApiError::GraphQl(messages.join("; ")));
        }
        match self.data {
            Some(serde_json::Value::Null) | None => Err(ApiError::NoData),
            Some(data) => Ok(data),
        }
    }
}

/// Absolute endpoint URL. Relative endpoints are resolved against the page
/// origin when there is one.
pub fn endpoint_url(origin: Option<&str>, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    match origin {
        Some(origin) => format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        ),
        None => endpoint.to_string(),
    }
}

/// Origin of the current page, None outside a browser
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Run a query and return its raw `data`
pub async fn post_query(
    endpoint: &str,
    query: &str,
    selection: &Selection,
) -> Result<serde_json::Value, ApiError> {
    let url = endpoint_url(page_origin().as_deref(), endpoint);
    debug!(%url, fields = selection.len(), "Posting GraphQL query");

    let resp = reqwest::Client::new()
        .post(&url)
        .json(&GraphQlRequest {
            query,
            variables: selection,
        })
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status()));
    }

    let envelope: GraphQlResponse = resp.json().await?;
    envelope.into_data()
}

/// Run a query and deserialize its `data` into `T`
pub async fn query<T: DeserializeOwned>(
    endpoint: &str,
    query: &str,
    selection: &Selection,
) -> Result<T, ApiError> {
    let data = post_query(endpoint, query, selection).await?;
    Ok(serde_json::from_value(data)?)
}

/// Options of a variable selector for the given selection.
///
/// Failures are logged and yield no options; the selector still renders.
pub async fn fetch_options(
    endpoint: &str,
    decl: &VariableDecl,
    selection: &Selection,
) -> Vec<SelectOption> {
    match post_query(endpoint, decl.query, selection).await {
        Ok(data) => with_blank_option(decl.options(data)),
        Err(e) => {
            warn!(variable = decl.id, "Failed to load options: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn relative_endpoint_resolves_against_origin() {
        assert_eq!(
            endpoint_url(Some("https://conf.example"), "/graphql"),
            "https://conf.example/graphql"
        );
        assert_eq!(
            endpoint_url(Some("https://conf.example/"), "graphql"),
            "https://conf.example/graphql"
        );
    }

    #[test]
    fn absolute_endpoint_is_kept() {
        assert_eq!(
            endpoint_url(Some("https://conf.example"), "https://api.example/graphql"),
            "https://api.example/graphql"
        );
    }

    #[test]
    fn no_origin_keeps_endpoint() {
        assert_eq!(endpoint_url(None, "/graphql"), "/graphql");
    }

    #[test]
    fn request_carries_selection_as_variables() {
        let selection: Selection = [("conferenceId", "c1"), ("templateId", "badge")]
            .into_iter()
            .collect();
        let body = serde_json::to_value(GraphQlRequest {
            query: "query { x }",
            variables: &selection,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "query": "query { x }",
                "variables": {"conferenceId": "c1", "templateId": "badge"},
            })
        );
    }

    #[test]
    fn response_data_is_returned() {
        let resp: GraphQlResponse =
            serde_json::from_value(json!({"data": {"conference": {"id": "c1"}}})).unwrap();
        assert_eq!(resp.into_data().unwrap(), json!({"conference": {"id": "c1"}}));
    }

    #[test]
    fn response_errors_are_reported() {
        let resp: GraphQlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [{"message": "bad id"}, {"message": "denied"}],
        }))
        .unwrap();

        match resp.into_data() {
            Err(ApiError::GraphQl(message)) => assert_eq!(message, "bad id; denied"),
            other => panic!("expected GraphQl error, got {other:?}"),
        }
    }

    #[test]
    fn null_data_is_no_data() {
        let resp: GraphQlResponse = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(matches!(resp.into_data(), Err(ApiError::NoData)));

        let resp: GraphQlResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(resp.into_data(), Err(ApiError::NoData)));
    }
}
