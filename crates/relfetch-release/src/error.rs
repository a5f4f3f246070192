use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no installer package found for {platform} in the latest release, you will have to build from source")]
    NoMatchingAsset { platform: String },

    #[error("failed to fetch release metadata from {url}: {reason}")]
    MetadataFetch { url: String, reason: String },

    #[error("release metadata request to {url} timed out")]
    Timeout { url: String },

    #[error("invalid release metadata: {0}")]
    MetadataParse(#[from] serde_json::Error),
}
