//! Pure predicate evaluation over directory lookups.
//!
//! Every function here is total: missing plugins and absent or unparseable
//! fields take the conservative branch (the one that produces a warning),
//! never a panic.

use chrono::{Months, NaiveDate};
use wpd_core::PlatformVersion;
use wpd_registry::PluginLookup;

/// The plugin exists in the directory.
#[must_use]
pub fn available(lookup: &PluginLookup) -> bool {
    matches!(lookup, PluginLookup::Found(_))
}

/// The plugin's last update falls strictly inside the maintenance window.
///
/// The window edge is `today` minus `window_months` calendar months
/// (month/day-preserving, clamped at month ends), not a fixed day count. A
/// plugin updated exactly on the edge is NOT actively maintained; the
/// comparison is strictly-after.
#[must_use]
pub fn actively_maintained(lookup: &PluginLookup, today: NaiveDate, window_months: u32) -> bool {
    let PluginLookup::Found(info) = lookup else {
        return false;
    };
    let Some(last_updated) = info.last_updated else {
        return false;
    };
    let Some(edge) = today.checked_sub_months(Months::new(window_months)) else {
        return false;
    };
    last_updated > edge
}

/// The plugin's declared `tested` version, bumped `lookahead_steps` coarse
/// releases forward, reaches the current WordPress release.
///
/// Both sides of the comparison are truncated to `major.minor`. A missing
/// or unparseable `tested` field fails the predicate.
#[must_use]
pub fn compatible_with_recent(
    lookup: &PluginLookup,
    current: PlatformVersion,
    lookahead_steps: u32,
) -> bool {
    let PluginLookup::Found(info) = lookup else {
        return false;
    };
    let Some(tested) = info.tested.as_deref() else {
        return false;
    };
    let Ok(tested) = tested.parse::<PlatformVersion>() else {
        return false;
    };
    tested.bump(lookahead_steps) >= current
}
