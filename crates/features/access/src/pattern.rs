use crate::error::AccessError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route pattern such as `/campaigns/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Values captured by `:param` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Strips the query string, fragment and trailing slash from a location.
///
/// `"/campaigns/?page=2"` becomes `"/campaigns"`; the root stays `"/"`.
#[must_use]
pub fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl RoutePattern {
    /// Parses an absolute route pattern.
    ///
    /// # Errors
    /// Returns [`AccessError::InvalidPattern`] when the pattern is relative, contains an empty
    /// segment, an unnamed parameter, or the same parameter twice.
    pub fn parse(raw: &str) -> Result<Self, AccessError> {
        let invalid = |message: String| AccessError::InvalidPattern {
            message: message.into(),
            context: Some(format!("pattern '{raw}'").into()),
        };

        if !raw.starts_with('/') {
            return Err(invalid("patterns must start with '/'".to_owned()));
        }
        if raw.contains(['?', '#']) {
            return Err(invalid("patterns cannot carry a query or fragment".to_owned()));
        }

        let body = raw.trim_end_matches('/');
        let mut segments: Vec<Segment> = Vec::new();
        for part in body.split('/').skip(1) {
            if part.is_empty() {
                return Err(invalid("empty path segment".to_owned()));
            }
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter without a name".to_owned()));
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(p) if p == name)) {
                    return Err(invalid(format!("parameter ':{name}' repeated")));
                }
                segments.push(Segment::Param(name.to_owned()));
            } else {
                segments.push(Segment::Static(part.to_owned()));
            }
        }

        Ok(Self { raw: normalize(raw).to_owned(), segments })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Matches a location, capturing parameters. Query and trailing slash are ignored.
    #[must_use]
    pub fn matches(&self, location: &str) -> Option<RouteParams> {
        let mut parts = split(normalize(location));
        let mut params = Vec::new();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => params.push((name.clone(), part.to_owned())),
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(RouteParams(params))
    }

    /// Number of literal segments; more literals means a more specific route.
    #[must_use]
    pub fn specificity(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, Segment::Static(_))).count()
    }

    /// Two patterns with the same shape match exactly the same locations.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|pair| match pair {
                (Segment::Static(a), Segment::Static(b)) => a == b,
                (Segment::Param(_), Segment::Param(_)) => true,
                _ => false,
            })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/campaigns/"), "/campaigns");
        assert_eq!(normalize("/campaigns?page=2#top"), "/campaigns");
        assert_eq!(normalize("/?next=/dashboard"), "/");
    }

    #[test]
    fn test_static_and_param_matching() {
        let pattern = RoutePattern::parse("/campaigns/:id").unwrap();
        let params = pattern.matches("/campaigns/42/").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert!(pattern.matches("/campaigns").is_none());
        assert!(pattern.matches("/campaigns/42/edit").is_none());

        let root = RoutePattern::parse("/").unwrap();
        assert!(root.matches("/?utm=x").is_some());
        assert!(root.matches("/login").is_none());
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(RoutePattern::parse("campaigns").is_err());
        assert!(RoutePattern::parse("/a//b").is_err());
        assert!(RoutePattern::parse("/a/:").is_err());
        assert!(RoutePattern::parse("/a/:id/:id").is_err());
        assert!(RoutePattern::parse("/a?x=1").is_err());
    }

    #[test]
    fn test_shape_and_specificity() {
        let create = RoutePattern::parse("/campaigns/create").unwrap();
        let detail = RoutePattern::parse("/campaigns/:id").unwrap();
        let other = RoutePattern::parse("/campaigns/:slug").unwrap();

        assert!(create.specificity() > detail.specificity());
        assert!(detail.same_shape(&other));
        assert!(!detail.same_shape(&create));
    }
}
