//! Per-platform constants: URL shapes and meta tag mapping tables.
//!
//! Both providers run the same pipeline; everything that differs between
//! Deezer and Spotify pages lives here.

use std::fmt;
use std::str::FromStr;

/// Which attribute of a `<meta>` tag a rule matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAttr {
    Property,
    Name,
}

/// The record field a rule writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    ArtworkUrl,
    /// Integer milliseconds; non-numeric content fails the lookup
    Duration,
    Genre,
    Album,
    Title,
    /// Inline artist name
    Artist,
    /// Artist page URL that is fetched to read its `og:title`
    ArtistLink,
    ReleaseDate,
    Description,
}

/// One row of a mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRule {
    pub attr: TagAttr,
    pub key: &'static str,
    pub field: TagField,
    /// Only fill the field if no other rule has set it
    pub fallback: bool,
}

impl TagRule {
    pub const fn property(key: &'static str, field: TagField) -> Self {
        Self {
            attr: TagAttr::Property,
            key,
            field,
            fallback: false,
        }
    }

    pub const fn name(key: &'static str, field: TagField) -> Self {
        Self {
            attr: TagAttr::Name,
            key,
            field,
            fallback: false,
        }
    }

    pub const fn as_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }
}

const DEEZER_SONG_RULES: &[TagRule] = &[
    TagRule::property("og:image", TagField::ArtworkUrl),
    TagRule::property("music:duration", TagField::Duration),
    TagRule::name("music:genre", TagField::Genre),
    TagRule::property("music:album:url", TagField::Album),
    TagRule::property("music:musician", TagField::ArtistLink),
    TagRule::name("music:release_date", TagField::ReleaseDate),
    TagRule::property("og:title", TagField::Title).as_fallback(),
];

const DEEZER_ALBUM_RULES: &[TagRule] = &[
    TagRule::property("og:image", TagField::ArtworkUrl),
    TagRule::property("og:title", TagField::Title),
    TagRule::property("music:musician", TagField::ArtistLink),
    TagRule::name("music:musician", TagField::ArtistLink),
    TagRule::property("og:description", TagField::Description),
    TagRule::name("music:release_date", TagField::ReleaseDate),
];

const SPOTIFY_SONG_RULES: &[TagRule] = &[
    TagRule::property("og:image", TagField::ArtworkUrl),
    TagRule::name("music:duration", TagField::Duration),
    TagRule::name("music:genre", TagField::Genre),
    TagRule::name("music:album", TagField::Album),
    TagRule::name("music:song", TagField::Title),
    TagRule::name("music:musician_description", TagField::Artist),
    TagRule::name("music:release_date", TagField::ReleaseDate),
    TagRule::property("og:title", TagField::Title).as_fallback(),
];

const SPOTIFY_ALBUM_RULES: &[TagRule] = &[
    TagRule::property("og:image", TagField::ArtworkUrl),
    TagRule::property("og:title", TagField::Title),
    TagRule::name("music:musician", TagField::ArtistLink),
    TagRule::property("og:description", TagField::Description),
    TagRule::name("music:release_date", TagField::ReleaseDate),
];

/// Where an embedded page-state JSON blob keeps the physical release date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Text identifying the `<script>` that assigns the state object
    pub marker: &'static str,
    /// JSON pointer to the release date inside the state object
    pub release_date_pointer: &'static str,
}

/// A supported streaming platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Deezer,
    Spotify,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Deezer, Platform::Spotify];

    /// Substring that marks an input as a URL of this platform.
    pub fn domain_marker(self) -> &'static str {
        match self {
            Platform::Deezer => "deezer.com",
            Platform::Spotify => "open.spotify.com",
        }
    }

    /// Pattern capturing `<type>` and `<id>` from a query-less page URL.
    pub fn url_pattern(self) -> &'static str {
        match self {
            Platform::Deezer => r"https://www\.deezer\.com/(?P<type>[^/]*)/(?P<id>[^?]*)",
            Platform::Spotify => r"https://open\.spotify\.com/(?P<type>[^/]*)/(?P<id>[^?]*)",
        }
    }

    pub fn song_url(self, id: &str) -> String {
        match self {
            Platform::Deezer => format!("https://www.deezer.com/en/track/{id}"),
            Platform::Spotify => format!("https://open.spotify.com/track/{id}"),
        }
    }

    pub fn album_url(self, id: &str) -> String {
        match self {
            Platform::Deezer => format!("https://www.deezer.com/en/album/{id}"),
            Platform::Spotify => format!("https://open.spotify.com/album/{id}"),
        }
    }

    pub fn song_rules(self) -> &'static [TagRule] {
        match self {
            Platform::Deezer => DEEZER_SONG_RULES,
            Platform::Spotify => SPOTIFY_SONG_RULES,
        }
    }

    pub fn album_rules(self) -> &'static [TagRule] {
        match self {
            Platform::Deezer => DEEZER_ALBUM_RULES,
            Platform::Spotify => SPOTIFY_ALBUM_RULES,
        }
    }

    /// Embedded state used by the experimental release date backfill.
    pub fn page_state(self) -> Option<PageState> {
        match self {
            Platform::Deezer => Some(PageState {
                marker: "window.__DZR_APP_STATE__",
                release_date_pointer: "/DATA/PHYSICAL_RELEASE_DATE",
            }),
            Platform::Spotify => None,
        }
    }

    /// Guess the platform from an input URL.
    pub fn detect(input: &str) -> Option<Platform> {
        Self::ALL
            .into_iter()
            .find(|platform| input.contains(platform.domain_marker()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Deezer => write!(f, "deezer"),
            Platform::Spotify => write!(f, "spotify"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deezer" => Ok(Platform::Deezer),
            "spotify" => Ok(Platform::Spotify),
            other => Err(format!("unknown platform '{other}'")),
        }
    }
}
