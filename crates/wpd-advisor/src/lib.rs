//! # wpd-advisor
//!
//! Status evaluation for WordPress plugin packages.
//!
//! The [`Advisor`] takes a [`PackageRef`], asks the directory (any
//! [`PluginDirectory`] implementation) for metadata, and evaluates three
//! independent predicates:
//! - **availability** — the plugin still exists in the directory
//! - **active maintenance** — updated within the maintenance window
//!   (two calendar years by default)
//! - **recent compatibility** — the declared `tested` version, bumped a few
//!   coarse releases forward, still reaches the current WordPress release
//!
//! The [`hooks`] module maps host lifecycle events (pre-install, pre-update,
//! post-update) onto these predicates through an explicit priority table and
//! renders the results as [`Notice`]s. Nothing in this crate can fail the
//! host's install or update: directory errors surface as a single "could not
//! verify" warning.

pub mod eval;
pub mod hooks;
mod notice;

pub use notice::{Notice, Severity};

use chrono::Utc;
use wpd_core::{PackageRef, Verdict};
use wpd_registry::{DirectoryError, PluginDirectory};

/// Evaluates directory status predicates for plugin packages.
///
/// Stateless between calls; each predicate performs one lookup. Use
/// [`Advisor::check`] to evaluate all three predicates off a single fetch.
pub struct Advisor<D> {
    directory: D,
    maintenance_window_months: u32,
    compat_lookahead_steps: u32,
}

impl<D: PluginDirectory> Advisor<D> {
    /// Create an advisor with the directory's stock heuristics: a two-year
    /// maintenance window and a three-release compatibility lookahead.
    pub fn new(directory: D) -> Self {
        Self::with_heuristics(directory, 24, 3)
    }

    /// Create an advisor with explicit heuristics.
    pub const fn with_heuristics(
        directory: D,
        maintenance_window_months: u32,
        compat_lookahead_steps: u32,
    ) -> Self {
        Self {
            directory,
            maintenance_window_months,
            compat_lookahead_steps,
        }
    }

    /// The directory this advisor queries.
    pub const fn directory(&self) -> &D {
        &self.directory
    }

    /// Changelog link for a package, on the directory website.
    pub fn changelog_url(&self, package: &PackageRef) -> String {
        self.directory.changelog_url(package.slug())
    }

    /// Whether the plugin still exists in the directory.
    ///
    /// Callers must have established [`PackageRef::is_directory_plugin`]
    /// first; the slug of a non-directory package is meaningless here.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if the directory cannot be reached.
    pub async fn is_available(&self, package: &PackageRef) -> Result<bool, DirectoryError> {
        let lookup = self.directory.plugin_info(package.slug()).await?;
        Ok(eval::available(&lookup))
    }

    /// Whether the plugin was updated within the maintenance window.
    ///
    /// False for missing plugins and for metadata without a usable
    /// `last_updated` date.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if the directory cannot be reached.
    pub async fn is_actively_maintained(
        &self,
        package: &PackageRef,
    ) -> Result<bool, DirectoryError> {
        let lookup = self.directory.plugin_info(package.slug()).await?;
        Ok(eval::actively_maintained(
            &lookup,
            Utc::now().date_naive(),
            self.maintenance_window_months,
        ))
    }

    /// Whether the plugin's declared `tested` version, bumped by the
    /// lookahead, reaches the current WordPress release.
    ///
    /// False for missing plugins and for metadata without a parseable
    /// `tested` version.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if either directory endpoint cannot be
    /// reached.
    pub async fn is_compatible_with_recent(
        &self,
        package: &PackageRef,
    ) -> Result<bool, DirectoryError> {
        let lookup = self.directory.plugin_info(package.slug()).await?;
        let current = self.directory.current_platform_version().await?;
        Ok(eval::compatible_with_recent(
            &lookup,
            current,
            self.compat_lookahead_steps,
        ))
    }

    /// Evaluate all three predicates off a single metadata fetch.
    ///
    /// Returns `None` for packages outside the directory mirror namespace —
    /// those trigger no network traffic at all. Metadata is immutable for
    /// the lifetime of one check, so sharing the fetch across predicates is
    /// an optimization, not a behavior change.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if either directory endpoint cannot be
    /// reached.
    pub async fn check(&self, package: &PackageRef) -> Result<Option<Verdict>, DirectoryError> {
        if !package.is_directory_plugin() {
            return Ok(None);
        }

        let lookup = self.directory.plugin_info(package.slug()).await?;
        let current = self.directory.current_platform_version().await?;
        let today = Utc::now().date_naive();

        Ok(Some(Verdict {
            available: eval::available(&lookup),
            actively_maintained: eval::actively_maintained(
                &lookup,
                today,
                self.maintenance_window_months,
            ),
            compatible_with_recent: eval::compatible_with_recent(
                &lookup,
                current,
                self.compat_lookahead_steps,
            ),
        }))
    }
}
