//! Predicate tuning knobs.

use serde::{Deserialize, Serialize};

/// Default maintenance window: two calendar years.
const fn default_maintenance_window_months() -> u32 {
    24
}

/// Default compatibility lookahead: three coarse releases.
const fn default_compat_lookahead_steps() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdvisorConfig {
    /// How far back a plugin's last update may be before it counts as
    /// unmaintained, in calendar months.
    #[serde(default = "default_maintenance_window_months")]
    pub maintenance_window_months: u32,

    /// How many releases past its `tested` version a plugin is granted
    /// before it counts as untested against the current WordPress.
    #[serde(default = "default_compat_lookahead_steps")]
    pub compat_lookahead_steps: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            maintenance_window_months: default_maintenance_window_months(),
            compat_lookahead_steps: default_compat_lookahead_steps(),
        }
    }
}
