//! Template variables: typed option sources behind a uniform declaration
//!
//! A template declares its variables as [`VariableDecl`]s. Each declaration
//! is built from a [`VariableSource`], which names the response type of the
//! query, how to pull the collection out of it, and how to present one item.

use crate::display_types::{SelectOption, VariableRow};
use crate::selection::Selection;
use serde::de::DeserializeOwned;
use std::iter;
use tracing::warn;

/// Typed description of where a variable's options come from
pub trait VariableSource: 'static {
    /// Shape of the query's `data` member
    type Response: DeserializeOwned;
    /// One selectable record
    type Item;

    /// The records to choose from, or None when the response has none
    fn collection(response: Self::Response) -> Option<Vec<Self::Item>>;

    fn option(item: &Self::Item) -> SelectOption;
}

/// A template-declared variable
#[derive(Clone, Copy, Debug)]
pub struct VariableDecl {
    /// Selection field the variable writes to
    pub id: &'static str,
    /// GraphQL query; the selection is passed as its variables
    pub query: &'static str,
    to_options: fn(serde_json::Value) -> Option<Vec<SelectOption>>,
}

impl VariableDecl {
    pub fn new<S: VariableSource>(id: &'static str, query: &'static str) -> Self {
        Self {
            id,
            query,
            to_options: options_from::<S>,
        }
    }

    /// Options for a raw query result, without the blank entry
    pub fn options(&self, data: serde_json::Value) -> Option<Vec<SelectOption>> {
        (self.to_options)(data)
    }
}

impl PartialEq for VariableDecl {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.query == other.query
    }
}

fn options_from<S: VariableSource>(data: serde_json::Value) -> Option<Vec<SelectOption>> {
    let response: S::Response = match serde_json::from_value(data) {
        Ok(response) => response,
        Err(e) => {
            warn!("Unexpected variable query result: {e}");
            return None;
        }
    };
    S::collection(response).map(|items| items.iter().map(S::option).collect())
}

/// Final option list of a variable selector.
///
/// A collection gets the blank "unset" entry in front of it; no collection
/// means no options at all.
pub fn with_blank_option(collection: Option<Vec<SelectOption>>) -> Vec<SelectOption> {
    match collection {
        Some(items) => iter::once(SelectOption::blank()).chain(items).collect(),
        None => Vec::new(),
    }
}

/// Overlay each declared variable with its value in the selection
pub fn variable_rows(decls: &[VariableDecl], selection: &Selection) -> Vec<VariableRow> {
    decls
        .iter()
        .map(|decl| VariableRow {
            decl: *decl,
            value: selection.get(decl.id).map(str::to_string),
        })
        .collect()
}
