//! I/O operations for downloads.

mod downloader;
mod http;

pub use downloader::Downloader;
pub use http::{BoxStream, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
