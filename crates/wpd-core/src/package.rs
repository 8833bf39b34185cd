//! Package references and the WPackagist mirror-namespace predicate.
//!
//! WPackagist is a Composer mirror of the WordPress Plugin Directory. A
//! package sourced from it is identified by its type plus a reserved name
//! prefix; everything else is out of scope for the advisor and must never
//! trigger a directory lookup.

use serde::{Deserialize, Serialize};

/// Package type used by the host for WordPress plugins.
pub const WORDPRESS_PLUGIN_KIND: &str = "wordpress-plugin";

/// Reserved name prefix for packages mirrored from the directory.
pub const MIRROR_PREFIX: &str = "wpackagist-plugin/";

/// A dependency under consideration, as supplied by the host per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    /// Full package name (e.g., `wpackagist-plugin/akismet`).
    pub name: String,
    /// Package type (e.g., `wordpress-plugin`, `library`).
    pub kind: String,
    /// Version being installed or updated to.
    pub version: String,
}

impl PackageRef {
    /// Create a package reference.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            version: version.into(),
        }
    }

    /// Whether this package comes from the WordPress Plugin Directory mirror.
    ///
    /// True iff the type is `wordpress-plugin` and the name carries the
    /// `wpackagist-plugin/` prefix. Packages that fail this test are not the
    /// advisor's business.
    #[must_use]
    pub fn is_directory_plugin(&self) -> bool {
        self.kind == WORDPRESS_PLUGIN_KIND && self.name.starts_with(MIRROR_PREFIX)
    }

    /// The directory slug: the package name without the mirror prefix.
    ///
    /// Names without the prefix are returned unchanged, so the derivation is
    /// idempotent.
    #[must_use]
    pub fn slug(&self) -> &str {
        self.name.strip_prefix(MIRROR_PREFIX).unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plugin(name: &str) -> PackageRef {
        PackageRef::new(name, WORDPRESS_PLUGIN_KIND, "1.0.0")
    }

    #[test]
    fn directory_plugin_requires_kind_and_prefix() {
        assert!(plugin("wpackagist-plugin/akismet").is_directory_plugin());

        // Right prefix, wrong kind.
        let theme = PackageRef::new("wpackagist-plugin/akismet", "wordpress-theme", "1.0.0");
        assert!(!theme.is_directory_plugin());

        // Right kind, wrong prefix.
        assert!(!plugin("wpackagist-theme/twentytwenty").is_directory_plugin());
        assert!(!plugin("vendor/akismet").is_directory_plugin());

        // Prefix somewhere other than the start does not count.
        assert!(!plugin("evil/wpackagist-plugin/akismet").is_directory_plugin());
    }

    #[test]
    fn plain_library_is_not_a_directory_plugin() {
        let lib = PackageRef::new("symfony/console", "library", "7.0.0");
        assert!(!lib.is_directory_plugin());
    }

    #[test]
    fn slug_strips_mirror_prefix() {
        assert_eq!(plugin("wpackagist-plugin/akismet").slug(), "akismet");
        assert_eq!(
            plugin("wpackagist-plugin/wordpress-seo").slug(),
            "wordpress-seo"
        );
    }

    #[test]
    fn slug_is_idempotent_without_prefix() {
        assert_eq!(plugin("akismet").slug(), "akismet");
        let stripped = plugin(plugin("wpackagist-plugin/akismet").slug());
        assert_eq!(stripped.slug(), "akismet");
    }

    #[test]
    fn package_ref_serialization_roundtrip() {
        let pkg = plugin("wpackagist-plugin/akismet");
        let json = serde_json::to_string(&pkg).unwrap();
        let back: PackageRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pkg);
    }
}
