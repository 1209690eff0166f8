//! Song and album metadata from Deezer and Spotify web pages.
//!
//! A lookup resolves the input (a page URL or a bare id) with a [`Locator`],
//! fetches the page through a [`PageFetcher`], scans its `<meta>` tags with
//! the platform's mapping table and returns a fully populated record. Fields
//! the page does not provide read [`UNKNOWN`].

pub mod config;
pub mod error;
pub mod fetch;
pub mod headers;
pub mod locator;
pub mod page_state;
pub mod parsing;
pub mod platform;
pub mod provider;
pub mod types;

pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use fetch::{HttpPageFetcher, PageFetcher};
pub use locator::Locator;
pub use platform::Platform;
pub use provider::MetadataProvider;
pub use types::{AlbumField, AlbumMetadata, SongMetadata, TrackDuration, UNKNOWN};

#[cfg(feature = "mock")]
pub use fetch::MockPageFetcher;

// Re-export scraper types for testing
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, ScrapeError>;
