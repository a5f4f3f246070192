use serde::Deserialize;

use crate::core::asset_url;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Media type requested from the release API.
pub const RELEASE_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Where to look for the latest release of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEndpoint {
    /// Scheme and host of the API, e.g. `https://api.github.com`.
    pub api_base: String,
    pub owner:    String,
    pub repo:     String,
}

impl ReleaseEndpoint {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            owner:    owner.into(),
            repo:     repo.into(),
        }
    }

    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// `<api_base>/repos/<owner>/<repo>/releases/latest`
    pub fn latest_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

/// The subset of a release document the resolver reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseMetadata {
    /// Web page of the release tag, e.g. `.../releases/tag/v1.0/`.
    pub html_url: String,
    #[serde(default)]
    pub assets:   Vec<AssetInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetInfo {
    pub name: String,
    /// Declared size in bytes.
    pub size: u64,
}

impl AssetInfo {
    /// Download URL of this asset under a release's download prefix.
    pub fn download_url(&self, prefix: &str) -> String {
        asset_url(prefix, &self.name)
    }
}

/// The installer picked for a platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub name: String,
    pub url:  String,
    pub size: u64,
}
