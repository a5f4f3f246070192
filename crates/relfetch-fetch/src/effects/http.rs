use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Response headers the downloader cares about, plus the streaming body.
pub struct HttpResponse<E> {
    /// Value of the `Content-Length` header, if the server sent one.
    pub content_length: Option<u64>,
    pub body:           BoxStream<'static, Result<Bytes, E>>,
}

impl<E> HttpResponse<E> {
    /// Drain the body into memory.
    pub async fn bytes(self) -> Result<Vec<u8>, E> {
        self.body
            .try_fold(Vec::new(), |mut buf, chunk| async move {
                buf.extend_from_slice(&chunk);
                Ok(buf)
            })
            .await
    }
}

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the minimal interface needed for release lookups and
/// downloads. Implementations handle their own redirect following, timeout
/// configuration and mapping of non-success statuses to errors.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - In-memory implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET request and return the response as a stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (DNS failure, connection error,
    /// HTTP error status, timeout).
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<HttpResponse<Self::Error>, Self::Error>> + Send;

    /// Whether an error was caused by a connect or read timeout.
    fn is_timeout(_error: &Self::Error) -> bool {
        false
    }
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::data::Timeouts;
    use reqwest::Client;

    const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: Client,
    }

    impl ReqwestClient {
        /// Create a client with the given connect and read timeouts.
        pub fn new(timeouts: Timeouts) -> Result<Self, reqwest::Error> {
            let client = Client::builder()
                .user_agent(USER_AGENT)
                .connect_timeout(timeouts.connect)
                .read_timeout(timeouts.read)
                .build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> Result<HttpResponse<Self::Error>, Self::Error> {
            let mut request = self.client.get(url);

            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await?.error_for_status()?;
            let content_length = response.content_length();
            let body = response.bytes_stream();

            Ok(HttpResponse {
                content_length,
                body: Box::pin(body),
            })
        }

        fn is_timeout(error: &Self::Error) -> bool {
            error.is_timeout()
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
