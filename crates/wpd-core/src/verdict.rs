//! The advisor's structured answer for one package.

use serde::{Deserialize, Serialize};

/// Result of evaluating one package against the directory.
///
/// Derived fresh per check; never persisted. Rendering warnings out of a
/// failed predicate belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The plugin still exists in the directory.
    pub available: bool,
    /// The plugin was updated within the maintenance window.
    pub actively_maintained: bool,
    /// The plugin's declared `tested` version reaches the current platform
    /// version after the coarse lookahead bump.
    pub compatible_with_recent: bool,
}

impl Verdict {
    /// All predicates passed; nothing to warn about.
    #[must_use]
    pub const fn is_clean(self) -> bool {
        self.available && self.actively_maintained && self.compatible_with_recent
    }

    /// The conservative verdict for an absent plugin: every predicate fails.
    #[must_use]
    pub const fn missing() -> Self {
        Self {
            available: false,
            actively_maintained: false,
            compatible_with_recent: false,
        }
    }
}
