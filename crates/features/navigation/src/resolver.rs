use crate::catalog::{CATALOG, project};
use ahub_kernel::domain::config::UnknownRolePolicy;
use ahub_kernel::domain::menu::MenuItem;
use ahub_kernel::domain::role::Role;
use std::sync::Arc;
use tracing::warn;

/// Maps a role to its sidebar tree.
///
/// All trees are projected from the catalog once, at construction; resolving is a lookup and
/// always returns the same tree for the same role.
#[derive(Debug, Clone)]
pub struct RoleMenuResolver {
    menus: Arc<[Vec<MenuItem>; 4]>,
    unknown_role: UnknownRolePolicy,
}

impl Default for RoleMenuResolver {
    fn default() -> Self {
        Self::new(UnknownRolePolicy::default())
    }
}

impl RoleMenuResolver {
    #[must_use]
    pub fn new(unknown_role: UnknownRolePolicy) -> Self {
        let menus = Role::ALL.map(|role| project(CATALOG, role));
        Self { menus: Arc::new(menus), unknown_role }
    }

    #[must_use]
    pub const fn unknown_role_policy(&self) -> UnknownRolePolicy {
        self.unknown_role
    }

    /// The tree for a known role.
    #[must_use]
    pub fn for_role(&self, role: Role) -> &[MenuItem] {
        &self.menus[Self::slot(role)]
    }

    /// The tree for a raw role claim, matched case-insensitively.
    ///
    /// Missing or unrecognised claims fall back according to [`UnknownRolePolicy`]: the
    /// influencer tree when restrictive, the admin tree when permissive.
    #[must_use]
    pub fn resolve(&self, claim: Option<&str>) -> &[MenuItem] {
        if let Some(role) = claim.and_then(Role::parse) {
            return self.for_role(role);
        }

        let fallback = self.fallback_role();
        warn!(claim, %fallback, policy = ?self.unknown_role, "Unrecognised role, using fallback menu");
        self.for_role(fallback)
    }

    /// The tree for a role that may be unknown (`None`), as stored on a session.
    ///
    /// Silent lookup for per-render use; the session store reports unknown roles once when the
    /// session resolves.
    #[must_use]
    pub fn for_session_role(&self, role: Option<Role>) -> &[MenuItem] {
        self.for_role(role.unwrap_or(self.fallback_role()))
    }

    #[must_use]
    pub const fn fallback_role(&self) -> Role {
        match self.unknown_role {
            UnknownRolePolicy::Restrictive => Role::Influencer,
            UnknownRolePolicy::Permissive => Role::Admin,
        }
    }

    const fn slot(role: Role) -> usize {
        match role {
            Role::Influencer => 0,
            Role::Merchant => 1,
            Role::Admin => 2,
            Role::Commercial => 3,
        }
    }
}

/// Finds a top-level item by id.
#[must_use]
pub fn find<'a>(menu: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
    menu.iter().find(|item| item.id == id)
}

/// Every submenu key in the tree, depth-first.
#[must_use]
pub fn submenu_keys(menu: &[MenuItem]) -> Vec<&str> {
    let mut keys = Vec::new();
    collect_keys(menu, &mut keys);
    keys
}

fn collect_keys<'a>(menu: &'a [MenuItem], keys: &mut Vec<&'a str>) {
    for item in menu {
        if let Some(key) = item.submenu_key() {
            keys.push(key);
            collect_keys(item.children(), keys);
        }
    }
}

/// Keys of the groups enclosing the link to `path`, outermost first.
#[must_use]
pub fn ancestors_of<'a>(menu: &'a [MenuItem], path: &str) -> Option<Vec<&'a str>> {
    for item in menu {
        if item.path() == Some(path) {
            return Some(Vec::new());
        }
        if let Some(key) = item.submenu_key()
            && let Some(mut chain) = ancestors_of(item.children(), path)
        {
            chain.insert(0, key);
            return Some(chain);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_follow_role_order() {
        for (i, role) in Role::ALL.into_iter().enumerate() {
            assert_eq!(RoleMenuResolver::slot(role), i);
        }
    }

    #[test]
    fn test_ancestors() {
        let resolver = RoleMenuResolver::default();
        let admin = resolver.for_role(Role::Admin);

        assert_eq!(ancestors_of(admin, "/settings/platform"), Some(vec!["settings"]));
        assert_eq!(ancestors_of(admin, "/dashboard"), Some(vec![]));
        assert_eq!(ancestors_of(admin, "/nowhere"), None);
    }
}
