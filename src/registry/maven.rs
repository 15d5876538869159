use log::*;
use reqwest::blocking::Client;

use crate::error::{Result, SynthfixError};
use crate::registry::metadata::version_from_metadata;

/// Default public Maven Central repository root.
pub const DEFAULT_REGISTRY_URL: &str = "https://repo1.maven.org/maven2";

/// Client for Maven-style package registries.
///
/// Every lookup re-fetches the metadata document; there is no caching and no
/// retry. The base URL is injectable so tests can point at a mock server.
pub struct MavenRegistry {
    client: Client,
    base_url: String,
}

impl Default for MavenRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL.to_string())
    }
}

impl MavenRegistry {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the latest published version of an artifact.
    ///
    /// Builds the canonical metadata URL from the dot-separated `group_id`
    /// and `artifact_id`, issues a single blocking GET, and extracts the
    /// `versioning.latest` field from the response body.
    pub fn latest_version(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<String> {
        let group_path = group_id.replace('.', "/");
        let url = format!(
            "{}/{}/{}/maven-metadata.xml",
            self.base_url, group_path, artifact_id
        );

        debug!("fetching metadata: {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(SynthfixError::network(format!(
                "registry returned status {} for {}",
                status, url
            )));
        }

        let body = response.text()?;
        let version = version_from_metadata(&body)?;

        info!(
            "latest version of {}:{} is {}",
            group_id, artifact_id, version
        );

        Ok(version)
    }
}
