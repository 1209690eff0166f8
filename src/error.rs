use thiserror::Error;

/// Error types for metadata lookups.
///
/// Lookups surface these through the `try_*` methods of
/// [`MetadataProvider`](crate::MetadataProvider). The sentinel methods
/// (`get_song`, `get_album`) log the error and return `None` instead.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use songmeta::{MetadataProvider, Platform, ScrapeError};
///
/// #[tokio::main]
/// async fn main() {
///     let provider = MetadataProvider::with_http_client(
///         Platform::Deezer,
///         Box::new(http_client::native::NativeClient::new()),
///     );
///
///     match provider.try_get_song("1566859182").await {
///         Ok(song) => println!("{} by {}", song.title, song.artist),
///         Err(ScrapeError::Locator(msg)) => eprintln!("Bad input: {}", msg),
///         Err(ScrapeError::PageUnavailable(url)) => eprintln!("Could not load {}", url),
///         Err(e) => eprintln!("Lookup failed: {}", e),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The input looks like a platform URL but its path could not be parsed.
    ///
    /// This is raised before any network access happens.
    #[error("Unrecognized URL: {0}")]
    Locator(String),

    /// HTTP/network related errors.
    ///
    /// This includes connection failures, invalid URLs, unreadable bodies
    /// and redirect loops.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with a status other than 200.
    #[error("Unexpected status {status} for {url}")]
    Status {
        /// The URL that was requested
        url: String,
        /// The final HTTP status code
        status: u16,
    },

    /// The page a lookup depends on could not be retrieved.
    #[error("Page unavailable: {0}")]
    PageUnavailable(String),

    /// A tag value could not be converted, e.g. a non-numeric duration.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The embedded page state could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system I/O errors.
    ///
    /// This can occur when saving debug responses.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
