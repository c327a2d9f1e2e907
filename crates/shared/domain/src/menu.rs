use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A navigation entry: either a link or a collapsible group, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Stable identifier, unique among siblings (e.g. `platform` inside `settings`).
    pub id: Cow<'static, str>,
    pub label: Cow<'static, str>,
    pub icon: Cow<'static, str>,
    pub target: MenuTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MenuTarget {
    Link { path: Cow<'static, str> },
    Group { key: Cow<'static, str>, children: Vec<MenuItem> },
}

impl MenuItem {
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self.target, MenuTarget::Group { .. })
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match &self.target {
            MenuTarget::Link { path } => Some(&**path),
            MenuTarget::Group { .. } => None,
        }
    }

    #[must_use]
    pub fn submenu_key(&self) -> Option<&str> {
        match &self.target {
            MenuTarget::Group { key, .. } => Some(&**key),
            MenuTarget::Link { .. } => None,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.target {
            MenuTarget::Group { children, .. } => children,
            MenuTarget::Link { .. } => &[],
        }
    }

    /// Looks up a direct child by id.
    #[must_use]
    pub fn child(&self, id: &str) -> Option<&Self> {
        self.children().iter().find(|c| c.id == id)
    }

    /// Depth-first search for the link pointing at `path`.
    #[must_use]
    pub fn find_path(&self, path: &str) -> Option<&Self> {
        if self.path() == Some(path) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_path(path))
    }
}
