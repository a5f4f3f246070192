//! Resolve, check the cache, download if needed, hand back the artifact.

use std::path::PathBuf;
use std::sync::Arc;

use relfetch_cache::{CacheStore, discard, is_valid};
use relfetch_fetch::{Downloader, FetchOptions, HttpClient, Progress};
use relfetch_platform::{PlatformDescriptor, ensure_supported};
use relfetch_release::core::file_name;
use relfetch_release::{AssetResolver, ReleaseEndpoint};
use tracing::{debug, info};

use crate::error::{PipelineError, Result};

/// A verified installer on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path:       PathBuf,
    pub size:       u64,
    /// Whether the file was reused instead of downloaded.
    pub from_cache: bool,
}

impl Artifact {
    pub async fn read(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| PipelineError::ReadArtifact {
                path: self.path.clone(),
                source,
            })
    }
}

/// Composes the resolver, the cache and the downloader.
///
/// Runs strictly in order and never retries; callers that want another
/// attempt run the pipeline again.
pub struct Pipeline<C: HttpClient> {
    resolver:   AssetResolver<C>,
    downloader: Downloader<C>,
    cache:      CacheStore,
}

impl<C: HttpClient> Pipeline<C> {
    pub fn new(client: Arc<C>, endpoint: ReleaseEndpoint, cache: CacheStore) -> Self {
        Self {
            resolver: AssetResolver::new(client.clone(), endpoint),
            downloader: Downloader::new(client),
            cache,
        }
    }

    /// Options for the download step (chunk size, cancellation).
    pub fn with_fetch_options(mut self, options: FetchOptions) -> Self {
        self.downloader = self.downloader.with_options(options);
        self
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Installer for `platform`, as a path into the cache.
    ///
    /// Platforms without published installers are refused before any
    /// request is made.
    pub async fn obtain_artifact<F>(&self, platform: &PlatformDescriptor, on_progress: F) -> Result<Artifact>
    where
        F: FnMut(&Progress),
    {
        ensure_supported(platform)?;
        let resolved = self.resolver.resolve(platform).await?;

        let name = file_name(&resolved.url);
        if name.is_empty() {
            return Err(PipelineError::InvalidAssetUrl(resolved.url));
        }
        let path = self.cache.prepare(name)?;

        if is_valid(&path, resolved.size) {
            info!("Using previously downloaded {name}");
            return Ok(Artifact {
                path,
                size: resolved.size,
                from_cache: true,
            });
        }

        if discard(&path)? {
            debug!(path = %path.display(), "removed stale cache entry");
        }

        info!("Will download and install {name}");
        let written = self
            .downloader
            .fetch(&resolved.url, resolved.size, &path, on_progress)
            .await?;
        info!("Downloaded {written} bytes");

        Ok(Artifact {
            path,
            size: written,
            from_cache: false,
        })
    }

    /// Installer for `platform`, as bytes.
    pub async fn obtain<F>(&self, platform: &PlatformDescriptor, on_progress: F) -> Result<Vec<u8>>
    where
        F: FnMut(&Progress),
    {
        self.obtain_artifact(platform, on_progress).await?.read().await
    }
}
