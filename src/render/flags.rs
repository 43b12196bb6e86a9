//! Feature-flag registry.

use serde::Serialize;

/// Read-only feature flags shared by every rendering context.
///
/// Derived from the environment once at startup; templates branch on these
/// to show or hide entry points without a redeploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    /// Campaign ladder pages enabled.
    pub campaign: bool,

    /// Timed mode entry points shown.
    pub timed: bool,

    /// Facebook share affordances shown.
    pub facebook: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            campaign: true,
            timed: true,
            facebook: true,
        }
    }
}

impl FeatureFlags {
    /// Read the registry from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the registry through a lookup function. A flag is disabled only
    /// by an explicit "false".
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = |name: &str| {
            lookup(name)
                .map(|v| !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true)
        };

        Self {
            campaign: enabled("FLAG_CAMPAIGN"),
            timed: enabled("FLAG_TIMED"),
            facebook: enabled("FLAG_FACEBOOK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_on() {
        let flags = FeatureFlags::from_lookup(|_| None);
        assert_eq!(flags, FeatureFlags::default());
        assert!(flags.campaign && flags.timed && flags.facebook);
    }

    #[test]
    fn only_explicit_false_disables() {
        let flags = FeatureFlags::from_lookup(|name| match name {
            "FLAG_TIMED" => Some("false".into()),
            "FLAG_CAMPAIGN" => Some("0".into()),
            _ => None,
        });
        assert!(!flags.timed);
        assert!(flags.campaign);
        assert!(flags.facebook);
    }
}
