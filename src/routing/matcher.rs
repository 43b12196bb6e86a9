//! Path matching logic.
//!
//! # Responsibilities
//! - Match an exact request path
//! - Match a path prefix plus any deeper sub-path
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - A prefix pattern matches the prefix itself and any sub-path below it,
//!   but never a sibling that merely shares leading characters
//!   ("/versus" matches "/versus/abc", not "/versusx")
//! - No regex to guarantee O(n) matching

/// A URL path pattern for a registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches the whole path exactly.
    Exact(&'static str),

    /// Matches the path itself or any trailing sub-path below it.
    Prefix(&'static str),
}

impl PathPattern {
    /// Returns true if the request path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(expected) => path == *expected,
            PathPattern::Prefix(prefix) => {
                path == *prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches_whole_path_only() {
        let pattern = PathPattern::Exact("/about");
        assert!(pattern.matches("/about"));
        assert!(!pattern.matches("/about/"));
        assert!(!pattern.matches("/abou"));
        assert!(!pattern.matches("/About"));
    }

    #[test]
    fn prefix_matches_root_and_subpaths() {
        let pattern = PathPattern::Prefix("/versus");
        assert!(pattern.matches("/versus"));
        assert!(pattern.matches("/versus/"));
        assert!(pattern.matches("/versus/room/42"));
        assert!(!pattern.matches("/versusx"));
        assert!(!pattern.matches("/ver"));
    }
}
