//! Normalized song and album records returned by lookups.
//!
//! Every field of a returned record is populated: text fields that no tag
//! provided hold the literal [`UNKNOWN`], and the duration uses
//! [`TrackDuration::Unknown`].

use serde::{Serialize, Serializer};
use std::fmt;

/// Value given to every field the page did not provide.
pub const UNKNOWN: &str = "Unknown";

// ================================================================================================
// DURATION
// ================================================================================================

/// Track length in milliseconds, or unknown.
///
/// Displays and serializes as the bare number or the string `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrackDuration {
    Millis(u64),
    #[default]
    Unknown,
}

impl TrackDuration {
    pub fn millis(&self) -> Option<u64> {
        match self {
            TrackDuration::Millis(ms) => Some(*ms),
            TrackDuration::Unknown => None,
        }
    }
}

impl From<Option<u64>> for TrackDuration {
    fn from(value: Option<u64>) -> Self {
        value.map_or(TrackDuration::Unknown, TrackDuration::Millis)
    }
}

impl fmt::Display for TrackDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackDuration::Millis(ms) => write!(f, "{ms}"),
            TrackDuration::Unknown => f.write_str(UNKNOWN),
        }
    }
}

impl Serialize for TrackDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TrackDuration::Millis(ms) => serializer.serialize_u64(*ms),
            TrackDuration::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

// ================================================================================================
// ALBUM
// ================================================================================================

/// Album metadata scraped from an album page.
///
/// # Examples
///
/// ```rust
/// use songmeta::{AlbumMetadata, UNKNOWN};
///
/// let album = AlbumMetadata::unknown();
/// assert_eq!(album.title, UNKNOWN);
/// assert_eq!(album.description, UNKNOWN);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumMetadata {
    /// Cover image URL (`og:image`)
    pub artwork_url: String,
    /// Album title
    pub title: String,
    /// Artist name, resolved from the artist page when the album links to it
    pub artist: String,
    /// Page description (`og:description`)
    pub description: String,
    /// Release date as printed on the page, e.g. `2020-05-01`
    pub release_date: String,
}

impl AlbumMetadata {
    /// A record with every field set to [`UNKNOWN`].
    pub fn unknown() -> Self {
        Self {
            artwork_url: UNKNOWN.to_string(),
            title: UNKNOWN.to_string(),
            artist: UNKNOWN.to_string(),
            description: UNKNOWN.to_string(),
            release_date: UNKNOWN.to_string(),
        }
    }
}

/// The album a song belongs to.
///
/// A song page only carries a reference to its album. After the album lookup
/// the reference is replaced by the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AlbumField {
    /// Album URL (or [`UNKNOWN`]) as found on the song page
    Reference(String),
    /// Album record fetched through the reference
    Resolved(Box<AlbumMetadata>),
}

impl AlbumField {
    pub fn reference(&self) -> Option<&str> {
        match self {
            AlbumField::Reference(reference) => Some(reference),
            AlbumField::Resolved(_) => None,
        }
    }

    pub fn resolved(&self) -> Option<&AlbumMetadata> {
        match self {
            AlbumField::Reference(_) => None,
            AlbumField::Resolved(album) => Some(album),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.reference() == Some(UNKNOWN)
    }
}

impl fmt::Display for AlbumField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumField::Reference(reference) => f.write_str(reference),
            AlbumField::Resolved(album) => f.write_str(&album.title),
        }
    }
}

// ================================================================================================
// SONG
// ================================================================================================

/// Song metadata scraped from a track page.
///
/// # Examples
///
/// ```rust
/// use songmeta::{AlbumField, SongMetadata, TrackDuration, UNKNOWN};
///
/// let song = SongMetadata::unknown();
/// assert_eq!(song.duration, TrackDuration::Unknown);
/// assert_eq!(song.album, AlbumField::Reference(UNKNOWN.to_string()));
/// println!("{} - {} ({} ms)", song.artist, song.title, song.duration);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongMetadata {
    /// Cover image URL (`og:image`)
    pub artwork_url: String,
    /// Track length in milliseconds
    pub duration: TrackDuration,
    /// Genre, when the page declares one
    pub genre: String,
    /// Album reference, or the resolved album after a full lookup
    pub album: AlbumField,
    /// Track title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Release date as printed on the page
    pub release_date: String,
}

impl SongMetadata {
    /// A record with every field unknown.
    pub fn unknown() -> Self {
        Self {
            artwork_url: UNKNOWN.to_string(),
            duration: TrackDuration::Unknown,
            genre: UNKNOWN.to_string(),
            album: AlbumField::Reference(UNKNOWN.to_string()),
            title: UNKNOWN.to_string(),
            artist: UNKNOWN.to_string(),
            release_date: UNKNOWN.to_string(),
        }
    }
}
