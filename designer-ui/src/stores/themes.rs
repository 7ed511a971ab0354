//! Theme catalog

use crate::display_types::Theme;
use crate::selection::Selection;

/// All themes available to the designer, in display order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// The active theme: the one named after the selected conference series,
    /// otherwise the first theme, otherwise the default theme.
    pub fn resolve(&self, selection: &Selection) -> Theme {
        selection
            .conference_series_id()
            .and_then(|id| self.get(id))
            .or_else(|| self.themes.first())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(id: &str) -> Theme {
        Theme {
            id: id.to_string(),
            ..Default::default()
        }
    }

    fn catalog() -> ThemeCatalog {
        ThemeCatalog::new(vec![theme("light"), theme("dark")])
    }

    #[test]
    fn resolves_theme_of_selected_series() {
        let selection: Selection = [("conferenceSeriesId", "dark")].into_iter().collect();
        assert_eq!(catalog().resolve(&selection).id, "dark");
    }

    #[test]
    fn falls_back_to_first_theme() {
        let unknown: Selection = [("conferenceSeriesId", "s1")].into_iter().collect();
        assert_eq!(catalog().resolve(&unknown).id, "light");
        assert_eq!(catalog().resolve(&Selection::new()).id, "light");
    }

    #[test]
    fn empty_catalog_uses_default_theme() {
        let resolved = ThemeCatalog::default().resolve(&Selection::new());
        assert_eq!(resolved, Theme::default());
    }
}
