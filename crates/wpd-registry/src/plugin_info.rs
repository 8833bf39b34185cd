//! Plugin metadata lookup.
//!
//! The `plugins/info/1.0/{slug}.json` endpoint has three ways of saying "no
//! such plugin": an HTTP 404, a JSON `null` body, and an
//! `{"error": "Plugin not found."}` object. All three map to
//! [`PluginLookup::NotFound`]; only genuine transport problems become
//! errors.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::http::check_response;
use crate::{DirectoryClient, DirectoryError};

/// Result of a plugin lookup: the directory answered, one way or the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginLookup {
    /// The plugin exists; metadata attached (possibly partial).
    Found(PluginInfo),
    /// The directory reports no plugin under this slug.
    NotFound,
}

/// Metadata the advisor cares about, parsed out of the directory response.
///
/// Optional fields model partial data — the directory omits `tested` for
/// plugins whose authors never declared a compatibility target, and a
/// `last_updated` we cannot interpret is carried as `None` rather than a
/// parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    /// Canonical directory slug.
    pub slug: String,
    /// Date of the last release, if present and parseable.
    pub last_updated: Option<NaiveDate>,
    /// Highest WordPress version the author declared as tested, verbatim.
    pub tested: Option<String>,
}

#[derive(Deserialize)]
struct RawPluginInfo {
    slug: Option<String>,
    last_updated: Option<String>,
    tested: Option<String>,
}

impl DirectoryClient {
    pub(crate) async fn fetch_plugin_info(
        &self,
        slug: &str,
    ) -> Result<PluginLookup, DirectoryError> {
        let url = self.plugin_info_url(slug);
        let resp = self.http().get(&url).send().await?;

        if resp.status() == 404 {
            return Ok(PluginLookup::NotFound);
        }
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        Ok(parse_lookup(slug, &body))
    }
}

/// Interpret a 2xx response body.
///
/// Missing-plugin bodies (`null`, error object) and bodies that are not
/// JSON at all collapse to [`PluginLookup::NotFound`].
fn parse_lookup(slug: &str, body: &str) -> PluginLookup {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        tracing::debug!(slug, "plugin info body is not JSON, treating as not found");
        return PluginLookup::NotFound;
    };
    if value.is_null() || value.get("error").is_some() {
        return PluginLookup::NotFound;
    }

    let raw: RawPluginInfo = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(slug, %e, "plugin info has unexpected shape, treating as not found");
            return PluginLookup::NotFound;
        }
    };

    PluginLookup::Found(PluginInfo {
        slug: raw.slug.unwrap_or_else(|| slug.to_string()),
        last_updated: raw.last_updated.as_deref().and_then(parse_last_updated),
        tested: raw.tested,
    })
}

/// Parse the directory's `last_updated` field.
///
/// The field looks like `"2024-03-12 6:21pm GMT"`; only the leading
/// calendar date matters for the two-year maintenance window.
fn parse_last_updated(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split_whitespace().next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FOUND_FIXTURE: &str = r#"{
        "name": "Akismet Anti-spam: Spam Protection",
        "slug": "akismet",
        "version": "5.3.5",
        "requires": "5.8",
        "tested": "6.7.2",
        "last_updated": "2024-11-19 7:31pm GMT",
        "downloaded": 100000000,
        "sections": {"description": "..."}
    }"#;

    const NOT_FOUND_FIXTURE: &str = r#"{"error": "Plugin not found."}"#;

    #[test]
    fn parses_a_found_plugin() {
        let lookup = parse_lookup("akismet", FOUND_FIXTURE);
        let PluginLookup::Found(info) = lookup else {
            panic!("expected Found");
        };
        assert_eq!(info.slug, "akismet");
        assert_eq!(info.tested.as_deref(), Some("6.7.2"));
        assert_eq!(
            info.last_updated,
            NaiveDate::from_ymd_opt(2024, 11, 19)
        );
    }

    #[test]
    fn error_object_is_not_found() {
        assert_eq!(
            parse_lookup("gone-plugin", NOT_FOUND_FIXTURE),
            PluginLookup::NotFound
        );
    }

    #[test]
    fn null_body_is_not_found() {
        assert_eq!(parse_lookup("gone-plugin", "null"), PluginLookup::NotFound);
    }

    #[test]
    fn malformed_body_is_not_found() {
        assert_eq!(
            parse_lookup("weird", "<html>503 Service Unavailable</html>"),
            PluginLookup::NotFound
        );
    }

    #[test]
    fn missing_optional_fields_are_carried_as_none() {
        let lookup = parse_lookup("minimal", r#"{"slug": "minimal"}"#);
        let PluginLookup::Found(info) = lookup else {
            panic!("expected Found");
        };
        assert_eq!(info.slug, "minimal");
        assert_eq!(info.last_updated, None);
        assert_eq!(info.tested, None);
    }

    #[test]
    fn response_without_slug_falls_back_to_requested_slug() {
        let lookup = parse_lookup("jetpack", r#"{"tested": "6.4"}"#);
        let PluginLookup::Found(info) = lookup else {
            panic!("expected Found");
        };
        assert_eq!(info.slug, "jetpack");
    }

    #[test]
    fn last_updated_keeps_only_the_date() {
        assert_eq!(
            parse_last_updated("2023-05-01 9:00am GMT"),
            NaiveDate::from_ymd_opt(2023, 5, 1)
        );
        assert_eq!(parse_last_updated("2023-05-01"), NaiveDate::from_ymd_opt(2023, 5, 1));
        assert_eq!(parse_last_updated("last Tuesday"), None);
        assert_eq!(parse_last_updated(""), None);
    }
}
