//! Human-readable notices rendered out of failed predicates.
//!
//! The wording follows the directory's long-standing messages; the host
//! decides where the lines go (stderr for warnings, stdout for info).

use serde::{Deserialize, Serialize};

/// How the host should treat a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Something the user should double-check before proceeding.
    Warning,
    /// Informational, e.g. a changelog link after an update.
    Info,
}

/// One line of advice about a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    /// The plugin no longer exists in the directory.
    #[must_use]
    pub fn unavailable(package_name: &str) -> Self {
        Self {
            severity: Severity::Warning,
            text: format!(
                "The plugin {package_name} does not seem to be available in the WordPress Plugin Directory anymore."
            ),
        }
    }

    /// The plugin has not been updated within the maintenance window.
    #[must_use]
    pub fn stale(package_name: &str) -> Self {
        Self {
            severity: Severity::Warning,
            text: format!(
                "The plugin {package_name} has not been updated in over two years. Please double-check before using it."
            ),
        }
    }

    /// The plugin's tested version trails too far behind current WordPress.
    #[must_use]
    pub fn untested(package_name: &str) -> Self {
        Self {
            severity: Severity::Warning,
            text: format!(
                "The plugin {package_name} has not been tested with recent versions of WordPress. Please double-check before using it."
            ),
        }
    }

    /// The directory could not be reached; status is unknown.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            severity: Severity::Warning,
            text: "Could not reach WordPress.org to verify plugin availability status.".to_string(),
        }
    }

    /// Changelog link, printed after a successful update.
    #[must_use]
    pub fn changelog(url: &str) -> Self {
        Self {
            severity: Severity::Info,
            text: format!("    Changelog: {url}"),
        }
    }
}
