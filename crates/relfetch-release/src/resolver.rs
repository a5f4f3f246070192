use std::sync::Arc;

use relfetch_fetch::HttpClient;
use relfetch_platform::PlatformDescriptor;
use tracing::{debug, info};

use crate::core::{download_prefix, select_asset};
use crate::data::{RELEASE_MEDIA_TYPE, ReleaseEndpoint, ReleaseMetadata, ResolvedAsset};
use crate::error::{ResolveError, Result};

/// Looks up the latest release and picks the installer for a platform.
pub struct AssetResolver<C: HttpClient> {
    client:   Arc<C>,
    endpoint: ReleaseEndpoint,
}

impl<C: HttpClient> AssetResolver<C> {
    pub fn new(client: Arc<C>, endpoint: ReleaseEndpoint) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &ReleaseEndpoint {
        &self.endpoint
    }

    /// Fetch the latest release document.
    pub async fn fetch_metadata(&self) -> Result<ReleaseMetadata> {
        let url = self.endpoint.latest_url();
        info!("Checking for latest release of {}/{}...", self.endpoint.owner, self.endpoint.repo);

        let headers = [("Accept".to_string(), RELEASE_MEDIA_TYPE.to_string())];
        let response = self
            .client
            .get(&url, &headers)
            .await
            .map_err(|e| Self::fetch_error(&url, e))?;
        let body = response.bytes().await.map_err(|e| Self::fetch_error(&url, e))?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Download URL and declared size of the installer for `platform`.
    pub async fn resolve(&self, platform: &PlatformDescriptor) -> Result<ResolvedAsset> {
        let metadata = self.fetch_metadata().await?;
        let prefix = download_prefix(&metadata.html_url);

        let asset = select_asset(&metadata.assets, platform).ok_or_else(|| {
            ResolveError::NoMatchingAsset {
                platform: platform.to_string(),
            }
        })?;
        debug!(asset = %asset.name, size = asset.size, "selected release asset");

        Ok(ResolvedAsset {
            name: asset.name.clone(),
            url:  asset.download_url(&prefix),
            size: asset.size,
        })
    }

    fn fetch_error(url: &str, e: C::Error) -> ResolveError {
        if C::is_timeout(&e) {
            ResolveError::Timeout { url: url.to_string() }
        } else {
            ResolveError::MetadataFetch {
                url:    url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}
