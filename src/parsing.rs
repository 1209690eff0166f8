//! Meta tag scanning for streaming platform pages.
//!
//! A page is reduced to its `<meta>` tags, and each tag is matched against
//! a platform mapping table ([`TagRule`]). The scan fills a [`TagDraft`],
//! which is then coalesced into a [`SongMetadata`] or [`AlbumMetadata`].

use crate::platform::{TagAttr, TagField, TagRule};
use crate::{
    AlbumField, AlbumMetadata, PageFetcher, Result, ScrapeError, SongMetadata, TrackDuration,
    UNKNOWN,
};
use scraper::{Html, Selector};

/// Owned copy of the attributes a `<meta>` tag can be matched on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaTag {
    pub property: Option<String>,
    pub name: Option<String>,
    pub content: Option<String>,
}

impl MetaTag {
    pub fn attr(&self, attr: TagAttr) -> Option<&str> {
        match attr {
            TagAttr::Property => self.property.as_deref(),
            TagAttr::Name => self.name.as_deref(),
        }
    }
}

/// Collect every `<meta>` tag of the document in document order.
pub fn collect_meta_tags(document: &Html) -> Result<Vec<MetaTag>> {
    let meta_selector = Selector::parse("meta")
        .map_err(|e| ScrapeError::Parse(format!("Invalid meta selector: {e:?}")))?;

    Ok(document
        .select(&meta_selector)
        .map(|element| {
            let value = element.value();
            MetaTag {
                property: value.attr("property").map(str::to_string),
                name: value.attr("name").map(str::to_string),
                content: value.attr("content").map(str::to_string),
            }
        })
        .collect())
}

/// First rule in table order that the tag satisfies.
pub fn match_rule<'a>(rules: &'a [TagRule], tag: &MetaTag) -> Option<&'a TagRule> {
    rules
        .iter()
        .find(|rule| tag.attr(rule.attr) == Some(rule.key))
}

/// Fields gathered during a scan, before coalescing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagDraft {
    pub artwork_url: Option<String>,
    pub duration: Option<u64>,
    pub genre: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
    pub artists: Vec<String>,
    pub release_date: Option<String>,
    pub description: Option<String>,
}

impl TagDraft {
    pub fn artist(&self) -> Option<String> {
        if self.artists.is_empty() {
            None
        } else {
            Some(self.artists.join(", "))
        }
    }

    /// Coalesce into a song record; the album stays an unresolved reference.
    pub fn into_song(self) -> SongMetadata {
        let artist = self.artist();
        SongMetadata {
            artwork_url: or_unknown(self.artwork_url),
            duration: TrackDuration::from(self.duration),
            genre: or_unknown(self.genre),
            album: AlbumField::Reference(or_unknown(self.album)),
            title: or_unknown(self.title),
            artist: or_unknown(artist),
            release_date: or_unknown(self.release_date),
        }
    }

    pub fn into_album(self) -> AlbumMetadata {
        let artist = self.artist();
        AlbumMetadata {
            artwork_url: or_unknown(self.artwork_url),
            title: or_unknown(self.title),
            artist: or_unknown(artist),
            description: or_unknown(self.description),
            release_date: or_unknown(self.release_date),
        }
    }
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

fn assign(slot: &mut Option<String>, content: &str, fallback: bool) {
    if fallback && slot.is_some() {
        return;
    }
    *slot = Some(content.to_string());
}

/// Parse a `music:duration` value into milliseconds.
pub fn parse_duration(content: &str) -> Result<u64> {
    content
        .trim()
        .parse::<u64>()
        .map_err(|_| ScrapeError::Parse(format!("Invalid duration '{content}'")))
}

/// Read the artist name from an artist page (its last `og:title`).
pub fn artist_name_from_page(document: &Html) -> Result<Option<String>> {
    Ok(collect_meta_tags(document)?
        .into_iter()
        .filter(|tag| tag.attr(TagAttr::Property) == Some("og:title"))
        .last()
        .and_then(|tag| tag.content))
}

/// Scans meta tags with one mapping table.
///
/// Artist links are resolved through the fetcher the scanner was built with.
pub struct TagScanner<'a> {
    rules: &'a [TagRule],
    fetcher: &'a dyn PageFetcher,
    log_target: &'a str,
}

impl<'a> TagScanner<'a> {
    pub fn new(rules: &'a [TagRule], fetcher: &'a dyn PageFetcher, log_target: &'a str) -> Self {
        Self {
            rules,
            fetcher,
            log_target,
        }
    }

    /// Walk the tags once, applying the first matching rule to each.
    ///
    /// Fails only when a typed field cannot be converted.
    pub async fn scan(&self, tags: &[MetaTag]) -> Result<TagDraft> {
        let mut draft = TagDraft::default();

        for tag in tags {
            let Some(rule) = match_rule(self.rules, tag) else {
                continue;
            };
            let Some(content) = tag.content.as_deref() else {
                log::trace!(target: self.log_target, "Tag '{}' has no content", rule.key);
                continue;
            };

            match rule.field {
                TagField::ArtworkUrl => assign(&mut draft.artwork_url, content, rule.fallback),
                TagField::Duration => draft.duration = Some(parse_duration(content)?),
                TagField::Genre => assign(&mut draft.genre, content, rule.fallback),
                TagField::Album => assign(&mut draft.album, content, rule.fallback),
                TagField::Title => assign(&mut draft.title, content, rule.fallback),
                TagField::Artist => draft.artists.push(content.to_string()),
                TagField::ArtistLink => {
                    if let Some(artist) = self.resolve_artist(content).await? {
                        draft.artists.push(artist);
                    }
                }
                TagField::ReleaseDate => assign(&mut draft.release_date, content, rule.fallback),
                TagField::Description => assign(&mut draft.description, content, rule.fallback),
            }
        }

        Ok(draft)
    }

    /// Fetch an artist page and read its name; `None` if it is unavailable.
    async fn resolve_artist(&self, artist_url: &str) -> Result<Option<String>> {
        log::debug!(target: self.log_target, "Resolving artist from {artist_url}");

        let Some(document) = self.fetcher.fetch_page(artist_url).await else {
            log::debug!(target: self.log_target, "Artist page {artist_url} unavailable");
            return Ok(None);
        };

        let artist = artist_name_from_page(&document)?;
        if artist.is_none() {
            log::debug!(target: self.log_target, "No og:title on artist page {artist_url}");
        }
        Ok(artist)
    }
}
