//! # wpd-registry
//!
//! WordPress.org HTTP client for the Plugin Directory advisor.
//!
//! Talks to two public api.wordpress.org endpoints:
//! - `plugins/info/1.0/{slug}.json` — per-plugin metadata (404 or an error
//!   object when the plugin is gone)
//! - `core/version-check/1.7/` — the current WordPress release
//!
//! Lookups return a tagged [`PluginLookup`] so "the directory says this
//! plugin does not exist" stays distinct from "we could not reach the
//! directory" ([`DirectoryError`]).

mod core_version;
mod error;
mod http;
mod plugin_info;

pub use error::DirectoryError;
pub use plugin_info::{PluginInfo, PluginLookup};

use wpd_core::PlatformVersion;

// ── Capability trait ───────────────────────────────────────────────

/// The one capability the advisor needs from the outside world.
///
/// Implemented by [`DirectoryClient`] for production and by in-memory fakes
/// in tests, so predicate evaluation stays deterministic.
#[allow(async_fn_in_trait)]
pub trait PluginDirectory {
    /// Look up a plugin by directory slug.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on transport failure or a non-404 error
    /// status. A 404 is a successful [`PluginLookup::NotFound`].
    async fn plugin_info(&self, slug: &str) -> Result<PluginLookup, DirectoryError>;

    /// The current WordPress release, truncated to `major.minor`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on transport failure, a non-success
    /// status, or an unparseable response.
    async fn current_platform_version(&self) -> Result<PlatformVersion, DirectoryError>;

    /// Changelog link for a plugin on the directory website. Pure.
    fn changelog_url(&self, slug: &str) -> String;
}

// ── Client ─────────────────────────────────────────────────────────

/// Connection settings for [`DirectoryClient`].
#[derive(Debug, Clone)]
pub struct DirectoryOptions {
    /// Base URL of the API host (no trailing slash).
    pub api_base: String,
    /// Base URL of the web host, used for changelog links.
    pub web_base: String,
    /// Connect/read timeout for every request.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            api_base: "https://api.wordpress.org".to_string(),
            web_base: "https://wordpress.org".to_string(),
            timeout_secs: 10,
            user_agent: "wpd/0.1".to_string(),
        }
    }
}

/// HTTP client for the WordPress.org plugin directory.
pub struct DirectoryClient {
    http: reqwest::Client,
    api_base: String,
    web_base: String,
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new(DirectoryOptions::default())
    }
}

impl DirectoryClient {
    /// Create a client with the given connection settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(options: DirectoryOptions) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(options.user_agent)
                .timeout(std::time::Duration::from_secs(options.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            api_base: options.api_base,
            web_base: options.web_base,
        }
    }

    /// URL of a plugin's metadata document.
    #[must_use]
    pub fn plugin_info_url(&self, slug: &str) -> String {
        format!(
            "{}/plugins/info/1.0/{}.json",
            self.api_base,
            urlencoding::encode(slug)
        )
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl PluginDirectory for DirectoryClient {
    async fn plugin_info(&self, slug: &str) -> Result<PluginLookup, DirectoryError> {
        self.fetch_plugin_info(slug).await
    }

    async fn current_platform_version(&self) -> Result<PlatformVersion, DirectoryError> {
        self.fetch_platform_version().await
    }

    fn changelog_url(&self, slug: &str) -> String {
        format!(
            "{}/plugins/{}/#developers",
            self.web_base,
            urlencoding::encode(slug)
        )
    }
}
