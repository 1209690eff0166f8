use crate::{Platform, Result, ScrapeError};
use regex::Regex;

/// Resolves user input into a platform identifier and canonical page URLs.
///
/// Construction is pure string work; nothing is fetched.
///
/// # Examples
///
/// ```rust
/// use songmeta::{Locator, Platform};
///
/// let locator = Locator::new(Platform::Deezer, "https://www.deezer.com/es/track/1566859182?host=0")?;
/// assert_eq!(locator.id(), "1566859182");
/// assert_eq!(locator.song_url(), "https://www.deezer.com/en/track/1566859182");
/// assert_eq!(locator.album_url(), "https://www.deezer.com/en/album/1566859182");
/// # Ok::<(), songmeta::ScrapeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    platform: Platform,
    id: String,
    song_url: String,
    album_url: String,
}

impl Locator {
    /// Build a locator from a platform URL or a bare identifier.
    ///
    /// Returns [`ScrapeError::Locator`] when the input names the platform's
    /// domain but its path does not have the `/<type>/<id>` shape, or when no
    /// identifier is left after parsing.
    pub fn new(platform: Platform, input: &str) -> Result<Self> {
        let input = input.trim();

        let id = if input.contains(platform.domain_marker()) {
            extract_id(platform, input)?
        } else {
            input.to_string()
        };

        if id.is_empty() {
            return Err(ScrapeError::Locator(format!(
                "no {platform} identifier in '{input}'"
            )));
        }

        Ok(Self {
            platform,
            song_url: platform.song_url(&id),
            album_url: platform.album_url(&id),
            id,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn song_url(&self) -> &str {
        &self.song_url
    }

    pub fn album_url(&self) -> &str {
        &self.album_url
    }
}

/// Capture the id segment of a platform URL, dropping the query string and
/// any locale or type prefix.
fn extract_id(platform: Platform, url: &str) -> Result<String> {
    let pattern =
        Regex::new(platform.url_pattern()).map_err(|e| ScrapeError::Locator(e.to_string()))?;
    let path = url.split('?').next().unwrap_or(url);

    let captured = pattern
        .captures(path)
        .and_then(|caps| caps.name("id"))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            ScrapeError::Locator(format!("'{url}' is not a {platform} track or album URL"))
        })?;

    let id = captured
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    Ok(id.to_string())
}
