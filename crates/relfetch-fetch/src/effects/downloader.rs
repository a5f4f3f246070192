use std::path::Path;
use std::sync::Arc;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::core::{bytes_to_keep, check_complete, check_content_length};
use crate::data::{FetchOptions, FetchPhase, Progress};
use crate::effects::http::{HttpClient, HttpResponse};
use crate::error::{FetchError, Result};

/// Streams a remote artifact to disk and checks its size.
pub struct Downloader<C: HttpClient> {
    client:  Arc<C>,
    options: FetchOptions,
}

impl<C: HttpClient> Downloader<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Download `url` into `destination`, which is truncated first.
    ///
    /// The server's `Content-Length` must equal `expected_size`, otherwise
    /// nothing is written. The body is written in slices of at most
    /// `chunk_size` bytes and `on_progress` is called after each slice.
    /// Writing stops once `expected_size` bytes are on disk or the stream
    /// ends; a short file is an error. On any failure after the file was
    /// created the partial file is removed.
    ///
    /// Returns the number of bytes written.
    pub async fn fetch<F>(
        &self,
        url: &str,
        expected_size: u64,
        destination: &Path,
        mut on_progress: F,
    ) -> Result<u64>
    where
        F: FnMut(&Progress),
    {
        on_progress(&Progress::new(FetchPhase::Connecting, 0, expected_size));

        let response = self.open(url).await?;
        check_content_length(expected_size, response.content_length)?;

        let file = File::create(destination).await?;
        let result = self
            .stream_to_file(response, file, expected_size, destination, &mut on_progress)
            .await;

        match result {
            Ok(written) => {
                on_progress(&Progress::new(FetchPhase::Completed, written, expected_size));
                Ok(written)
            }
            Err(e) => {
                if let Err(remove_err) = tokio::fs::remove_file(destination).await {
                    warn!(path = %destination.display(), error = %remove_err, "failed to remove partial download");
                }
                Err(e)
            }
        }
    }

    async fn open(&self, url: &str) -> Result<HttpResponse<C::Error>> {
        debug!(url, "opening download stream");
        tokio::select! {
            biased;
            () = self.options.cancel.cancelled() => Err(FetchError::Cancelled),
            response = self.client.get(url, &self.options.headers) => {
                response.map_err(Self::map_error)
            }
        }
    }

    async fn stream_to_file<F>(
        &self,
        response: HttpResponse<C::Error>,
        mut file: File,
        expected_size: u64,
        destination: &Path,
        on_progress: &mut F,
    ) -> Result<u64>
    where
        F: FnMut(&Progress),
    {
        let mut body = response.body;
        let mut written = 0u64;

        while written < expected_size {
            let next = tokio::select! {
                biased;
                () = self.options.cancel.cancelled() => return Err(FetchError::Cancelled),
                next = body.next() => next,
            };
            let Some(chunk) = next else {
                debug!(written, expected_size, "stream ended early");
                break;
            };
            let chunk = chunk.map_err(Self::map_error)?;

            let keep = bytes_to_keep(chunk.len(), written, expected_size);
            for slice in chunk[..keep].chunks(self.options.chunk_size) {
                file.write_all(slice).await?;
                written += slice.len() as u64;
                on_progress(&Progress::new(FetchPhase::Downloading, written, expected_size));
            }
        }

        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        on_progress(&Progress::new(FetchPhase::Verifying, written, expected_size));
        let on_disk = tokio::fs::metadata(destination).await?.len();
        check_complete(expected_size, on_disk)?;

        Ok(written)
    }

    fn map_error(e: C::Error) -> FetchError {
        if C::is_timeout(&e) {
            FetchError::Timeout
        } else {
            FetchError::Network(e.to_string())
        }
    }
}
