//! Theme registry for discovering and accessing themes

use super::{Theme, DEFAULT_THEME};
use std::collections::HashMap;

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
    /// Returned when nothing registered matches
    fallback: Theme,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        use super::definitions::*;

        Self::with_themes([
            cardrail(),
            terminal(),
            nord(),
            dracula(),
            gruvbox_dark(),
            paper(),
        ])
    }

    /// Registry holding exactly `themes`, in order
    pub fn with_themes(themes: impl IntoIterator<Item = Theme>) -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
            fallback: super::definitions::cardrail(),
        };
        for theme in themes {
            registry.register(theme);
        }
        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Look up a theme by name
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Get a theme by name, else the default theme, else the first
    /// registered one
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .or_else(|| {
                self.ordered_names
                    .first()
                    .and_then(|first| self.themes.get(first))
            })
            .unwrap_or(&self.fallback)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// Get the number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
