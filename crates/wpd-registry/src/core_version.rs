//! Current WordPress release lookup.
//!
//! The `core/version-check/1.7/` endpoint returns a list of upgrade offers;
//! the first offer's `current` field is the latest stable release.

use serde::Deserialize;
use wpd_core::PlatformVersion;

use crate::http::check_response;
use crate::{DirectoryClient, DirectoryError};

#[derive(Deserialize)]
struct VersionCheckResponse {
    offers: Vec<Offer>,
}

#[derive(Deserialize)]
struct Offer {
    current: String,
}

impl DirectoryClient {
    pub(crate) async fn fetch_platform_version(
        &self,
    ) -> Result<PlatformVersion, DirectoryError> {
        let url = format!("{}/core/version-check/1.7/", self.api_base());
        let resp = check_response(self.http().get(&url).send().await?).await?;

        let data: VersionCheckResponse = resp
            .json()
            .await
            .map_err(|e| DirectoryError::Parse(format!("version-check response: {e}")))?;

        let offer = data
            .offers
            .first()
            .ok_or_else(|| DirectoryError::Parse("version-check response has no offers".into()))?;

        offer
            .current
            .parse()
            .map_err(|e| DirectoryError::Parse(format!("offer version '{}': {e}", offer.current)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "offers": [
            {
                "response": "upgrade",
                "current": "6.7.2",
                "version": "6.7.2",
                "locale": "en_US"
            },
            {
                "response": "autoupdate",
                "current": "6.7.1",
                "version": "6.7.1",
                "locale": "en_US"
            }
        ],
        "translations": []
    }"#;

    #[test]
    fn first_offer_wins() {
        let data: VersionCheckResponse = serde_json::from_str(FIXTURE).unwrap();
        let version: PlatformVersion = data.offers[0].current.parse().unwrap();
        assert_eq!(version, PlatformVersion::new(6, 7));
    }

    #[test]
    fn empty_offers_is_a_parse_error() {
        let data: VersionCheckResponse = serde_json::from_str(r#"{"offers": []}"#).unwrap();
        assert!(data.offers.is_empty());
    }
}
