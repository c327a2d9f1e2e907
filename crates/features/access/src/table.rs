use crate::error::AccessError;
use crate::pattern::{RouteParams, RoutePattern, normalize};
use ahub_kernel::domain::access::{AccessPolicy, RouteDefinition};
use tracing::debug;

/// Policy applied to locations no route claims.
///
/// Unknown paths still require a session so a missing registration never exposes a page.
pub const UNMATCHED_POLICY: AccessPolicy = AccessPolicy::AnyAuthenticated;

#[derive(Debug, Clone)]
struct Entry {
    pattern: RoutePattern,
    definition: RouteDefinition,
}

/// A resolved location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub definition: &'a RouteDefinition,
    pub params: RouteParams,
}

/// The static `(pattern, page, policy)` registry built at startup.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<Entry>,
}

impl RouteTable {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Registers a route.
    ///
    /// # Errors
    /// * [`AccessError::InvalidPattern`] if the pattern does not parse.
    /// * [`AccessError::DuplicateRoute`] if an existing route has the same shape.
    pub fn register(&mut self, definition: RouteDefinition) -> Result<&mut Self, AccessError> {
        let pattern = RoutePattern::parse(&definition.pattern)?;

        if let Some(existing) = self.entries.iter().find(|e| e.pattern.same_shape(&pattern)) {
            return Err(AccessError::DuplicateRoute {
                message: format!("'{pattern}' overlaps '{}'", existing.pattern).into(),
                context: Some(format!("page '{}'", definition.page).into()),
            });
        }

        self.entries.push(Entry { pattern, definition });
        Ok(self)
    }

    /// Builder-style [`RouteTable::register`].
    ///
    /// # Errors
    /// See [`RouteTable::register`].
    pub fn with(mut self, definition: RouteDefinition) -> Result<Self, AccessError> {
        self.register(definition)?;
        Ok(self)
    }

    /// Finds the most specific route for a location; ties go to the earliest registration.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<RouteMatch<'_>> {
        let mut best: Option<(usize, &Entry, RouteParams)> = None;

        for entry in &self.entries {
            let Some(params) = entry.pattern.matches(location) else { continue };
            let score = entry.pattern.specificity();
            if best.as_ref().is_none_or(|(top, ..)| score > *top) {
                best = Some((score, entry, params));
            }
        }

        best.map(|(_, entry, params)| RouteMatch { definition: &entry.definition, params })
    }

    /// The policy guarding a location, or [`UNMATCHED_POLICY`] when no route claims it.
    #[must_use]
    pub fn policy_for(&self, location: &str) -> AccessPolicy {
        self.resolve(location).map_or_else(
            || {
                debug!(path = normalize(location), "No route registered, requiring a session");
                UNMATCHED_POLICY
            },
            |m| m.definition.policy,
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.entries.iter().map(|e| &e.definition)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahub_kernel::domain::role::Role;

    fn table() -> RouteTable {
        RouteTable::new()
            .with(RouteDefinition::new("/campaigns/:id", "campaign-detail", AccessPolicy::AnyAuthenticated))
            .and_then(|t| {
                t.with(RouteDefinition::new(
                    "/campaigns/create",
                    "campaign-create",
                    AccessPolicy::restricted([Role::Merchant]),
                ))
            })
            .unwrap()
    }

    #[test]
    fn test_literal_beats_parameter() {
        let table = table();
        assert_eq!(table.resolve("/campaigns/create").unwrap().definition.page, "campaign-create");

        let detail = table.resolve("/campaigns/7").unwrap();
        assert_eq!(detail.definition.page, "campaign-detail");
        assert_eq!(detail.params.get("id"), Some("7"));
    }

    #[test]
    fn test_duplicate_shape_rejected() {
        let mut table = table();
        let err = table
            .register(RouteDefinition::new("/campaigns/:slug", "dup", AccessPolicy::Public))
            .unwrap_err();
        assert!(matches!(err, AccessError::DuplicateRoute { .. }));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unmatched_requires_session() {
        assert_eq!(table().policy_for("/nowhere"), UNMATCHED_POLICY);
    }
}
