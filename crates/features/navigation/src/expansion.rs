use crate::error::NavigationError;
use crate::resolver::{ancestors_of, submenu_keys};
use ahub_kernel::domain::menu::MenuItem;
use fxhash::FxHashMap;

/// Expanded/collapsed flag per submenu key.
///
/// Groups are independent: opening one never closes another. The state lives as long as the
/// sidebar that owns it and starts all-collapsed on every mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuExpansionState {
    groups: FxHashMap<String, bool>,
}

impl MenuExpansionState {
    /// All-collapsed state for the given keys.
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self { groups: keys.into_iter().map(|key| (key.to_owned(), false)).collect() }
    }

    /// All-collapsed state for every group of a menu tree.
    #[must_use]
    pub fn for_menu(menu: &[MenuItem]) -> Self {
        Self::new(submenu_keys(menu))
    }

    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.groups.get(key).copied().unwrap_or(false)
    }

    /// Flips one group and returns its new state.
    ///
    /// # Errors
    /// Returns [`NavigationError::UnknownSubmenu`] when `key` is not a group of this menu.
    pub fn toggle(&mut self, key: &str) -> Result<bool, NavigationError> {
        let flag = self.flag_mut(key)?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// # Errors
    /// Returns [`NavigationError::UnknownSubmenu`] when `key` is not a group of this menu.
    pub fn set(&mut self, key: &str, expanded: bool) -> Result<(), NavigationError> {
        *self.flag_mut(key)? = expanded;
        Ok(())
    }

    /// Expands every group enclosing the link to `path`; returns whether the link was found.
    pub fn reveal(&mut self, menu: &[MenuItem], path: &str) -> bool {
        let Some(chain) = ancestors_of(menu, path) else { return false };
        for key in chain {
            if let Some(flag) = self.groups.get_mut(key) {
                *flag = true;
            }
        }
        true
    }

    /// Currently expanded keys, sorted.
    #[must_use]
    pub fn expanded_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> =
            self.groups.iter().filter(|(_, open)| **open).map(|(k, _)| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    fn flag_mut(&mut self, key: &str) -> Result<&mut bool, NavigationError> {
        self.groups.get_mut(key).ok_or_else(|| NavigationError::UnknownSubmenu {
            message: format!("no group with key '{key}'").into(),
            context: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let state = MenuExpansionState::new(["settings", "logs"]);
        assert!(!state.is_expanded("settings"));
        assert!(!state.is_expanded("logs"));
        assert!(state.expanded_keys().is_empty());
    }

    #[test]
    fn test_toggle_is_independent() {
        let mut state = MenuExpansionState::new(["settings", "logs"]);
        assert!(state.toggle("settings").unwrap());
        assert!(state.toggle("logs").unwrap());
        assert_eq!(state.expanded_keys(), vec!["logs", "settings"]);

        assert!(!state.toggle("settings").unwrap());
        assert!(state.is_expanded("logs"));
    }

    #[test]
    fn test_unknown_key() {
        let mut state = MenuExpansionState::new(["settings"]);
        assert!(matches!(state.toggle("platform"), Err(NavigationError::UnknownSubmenu { .. })));
        assert!(!state.is_expanded("platform"));
    }
}
