//! The lifecycle hook table.
//!
//! The host dependency manager fires package events; instead of a dynamic
//! subscriber interface, the advisor registers an explicit table of
//! `(event, priority, action)` hooks and exposes one dispatch entry point.
//! Dispatch is infallible by contract: a directory outage produces a single
//! "could not verify" warning, never an error, because nothing here may
//! abort the host's install or update.

use wpd_core::PackageRef;
use wpd_registry::PluginDirectory;

use crate::{Advisor, Notice};

/// Host lifecycle events the advisor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PrePackageInstall,
    PrePackageUpdate,
    PostPackageUpdate,
}

/// One package event as delivered by the host. For updates, `package` is
/// the target of the update, not the currently installed version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEvent {
    pub kind: EventKind,
    pub package: PackageRef,
}

impl PackageEvent {
    /// Create an event.
    pub const fn new(kind: EventKind, package: PackageRef) -> Self {
        Self { kind, package }
    }
}

/// What a hook does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    CheckAvailability,
    CheckMaintenance,
    CheckCompatibility,
    PrintChangelog,
}

/// One registered hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hook {
    pub event: EventKind,
    pub priority: i32,
    pub action: HookAction,
}

/// The full hook table, dispatched per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookSet {
    hooks: Vec<Hook>,
}

impl Default for HookSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl HookSet {
    /// The stock registrations:
    /// - pre-package-install → availability check
    /// - pre-package-update → availability, maintenance (ahead of the
    ///   others), and compatibility checks
    /// - post-package-update → changelog link
    #[must_use]
    pub fn standard() -> Self {
        Self {
            hooks: vec![
                Hook {
                    event: EventKind::PrePackageInstall,
                    priority: 0,
                    action: HookAction::CheckAvailability,
                },
                Hook {
                    event: EventKind::PrePackageUpdate,
                    priority: 0,
                    action: HookAction::CheckAvailability,
                },
                Hook {
                    event: EventKind::PrePackageUpdate,
                    priority: 1,
                    action: HookAction::CheckMaintenance,
                },
                Hook {
                    event: EventKind::PrePackageUpdate,
                    priority: 0,
                    action: HookAction::CheckCompatibility,
                },
                Hook {
                    event: EventKind::PostPackageUpdate,
                    priority: 0,
                    action: HookAction::PrintChangelog,
                },
            ],
        }
    }

    /// An empty table; combine with [`HookSet::register`].
    #[must_use]
    pub const fn empty() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register an additional hook.
    pub fn register(&mut self, hook: Hook) {
        self.hooks.push(hook);
    }

    /// The registered hooks, in registration order.
    #[must_use]
    pub fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    /// Run every hook registered for the event, highest priority first
    /// (registration order breaks ties), and collect the resulting notices.
    ///
    /// Packages outside the directory mirror namespace short-circuit: no
    /// notices, no directory traffic. Directory errors are logged and
    /// collapsed into one [`Notice::unreachable`] warning for the whole
    /// event.
    pub async fn dispatch<D: PluginDirectory>(
        &self,
        advisor: &Advisor<D>,
        event: &PackageEvent,
    ) -> Vec<Notice> {
        if !event.package.is_directory_plugin() {
            return Vec::new();
        }

        let mut matching: Vec<&Hook> = self.hooks.iter().filter(|h| h.event == event.kind).collect();
        matching.sort_by_key(|h| std::cmp::Reverse(h.priority));

        let mut notices = Vec::new();
        let mut reported_unreachable = false;

        for hook in matching {
            match run_action(advisor, hook.action, &event.package).await {
                Ok(Some(notice)) => notices.push(notice),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(
                        package = %event.package.name,
                        action = ?hook.action,
                        %e,
                        "could not verify plugin status"
                    );
                    if !reported_unreachable {
                        notices.push(Notice::unreachable());
                        reported_unreachable = true;
                    }
                }
            }
        }

        notices
    }
}

async fn run_action<D: PluginDirectory>(
    advisor: &Advisor<D>,
    action: HookAction,
    package: &PackageRef,
) -> Result<Option<Notice>, wpd_registry::DirectoryError> {
    let notice = match action {
        HookAction::CheckAvailability => (!advisor.is_available(package).await?)
            .then(|| Notice::unavailable(&package.name)),
        HookAction::CheckMaintenance => (!advisor.is_actively_maintained(package).await?)
            .then(|| Notice::stale(&package.name)),
        HookAction::CheckCompatibility => (!advisor.is_compatible_with_recent(package).await?)
            .then(|| Notice::untested(&package.name)),
        HookAction::PrintChangelog => {
            Some(Notice::changelog(&advisor.changelog_url(package)))
        }
    };
    Ok(notice)
}
