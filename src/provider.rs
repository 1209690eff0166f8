use crate::page_state;
use crate::parsing::{collect_meta_tags, TagDraft, TagScanner};
use crate::platform::TagRule;
use crate::{
    AlbumField, AlbumMetadata, HttpPageFetcher, Locator, PageFetcher, Platform, Result,
    ScrapeError, ScraperConfig, SongMetadata, UNKNOWN,
};
use http_client::HttpClient;
use scraper::Html;

/// Looks up song and album metadata on one streaming platform.
///
/// Every lookup builds a fresh [`Locator`] from its input; the provider only
/// holds configuration and the fetcher, so one provider can serve any number
/// of lookups.
///
/// # Examples
///
/// ```rust,no_run
/// use songmeta::{MetadataProvider, Platform, ScraperConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let provider = MetadataProvider::with_http_client_and_config(
///         Platform::Deezer,
///         Box::new(http_client::native::NativeClient::new()),
///         ScraperConfig::new().with_experimental(true),
///     );
///
///     if let Some(song) = provider.get_song("https://www.deezer.com/es/track/1566859182?host=0").await {
///         println!("{} by {} ({} ms)", song.title, song.artist, song.duration);
///     }
/// }
/// ```
pub struct MetadataProvider {
    platform: Platform,
    fetcher: Box<dyn PageFetcher>,
    config: ScraperConfig,
}

impl MetadataProvider {
    /// Create a provider that retrieves pages through `fetcher`.
    pub fn new(platform: Platform, fetcher: Box<dyn PageFetcher>) -> Self {
        Self {
            platform,
            fetcher,
            config: ScraperConfig::default(),
        }
    }

    /// Create a provider over an HTTP client, using [`HttpPageFetcher`].
    pub fn with_http_client(platform: Platform, client: Box<dyn HttpClient>) -> Self {
        Self::with_http_client_and_config(platform, client, ScraperConfig::default())
    }

    /// Create a provider over an HTTP client whose fetcher shares `config`.
    ///
    /// Debug capture and the log target reach the fetcher only through this
    /// constructor; [`with_config`](Self::with_config) cannot change them.
    pub fn with_http_client_and_config(
        platform: Platform,
        client: Box<dyn HttpClient>,
        config: ScraperConfig,
    ) -> Self {
        let fetcher = HttpPageFetcher::with_config(client, &config);
        Self::new(platform, Box::new(fetcher)).with_config(config)
    }

    /// Replace the configuration.
    ///
    /// The fetcher keeps the settings it was built with.
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    fn log_target(&self) -> &str {
        &self.config.log_target
    }

    /// Look up a song, returning `None` if anything along the way fails.
    ///
    /// The error is logged under the configured target.
    pub async fn get_song(&self, input: &str) -> Option<SongMetadata> {
        match self.try_get_song(input).await {
            Ok(song) => Some(song),
            Err(e) => {
                log::error!(target: self.log_target(), "Failed to get song: {e}");
                None
            }
        }
    }

    /// Look up an album, returning `None` if anything along the way fails.
    pub async fn get_album(&self, input: &str) -> Option<AlbumMetadata> {
        match self.try_get_album(input).await {
            Ok(album) => Some(album),
            Err(e) => {
                log::error!(target: self.log_target(), "Failed to get album: {e}");
                None
            }
        }
    }

    /// Look up a song and resolve its album.
    ///
    /// The returned song's `album` is [`AlbumField::Resolved`] unless the
    /// track page did not reference an album, in which case it stays
    /// `Reference("Unknown")`.
    pub async fn try_get_song(&self, input: &str) -> Result<SongMetadata> {
        let locator = self.locate(input)?;
        let mut song = self.scan_song_page(locator.song_url()).await?;

        match song.album.reference().map(str::to_string) {
            Some(reference) if reference != UNKNOWN => {
                let album = self.try_get_album(&reference).await?;
                song.album = AlbumField::Resolved(Box::new(album));
            }
            _ => log::debug!(target: self.log_target(), "Song page has no album reference"),
        }

        Ok(song)
    }

    /// Look up a song without resolving its album.
    ///
    /// The `album` field holds the reference found on the track page.
    pub async fn try_get_song_page(&self, input: &str) -> Result<SongMetadata> {
        let locator = self.locate(input)?;
        self.scan_song_page(locator.song_url()).await
    }

    pub async fn try_get_album(&self, input: &str) -> Result<AlbumMetadata> {
        let locator = self.locate(input)?;
        let url = locator.album_url();
        let document = self.fetch_required(url).await?;

        let mut album = self
            .scan(&document, self.platform.album_rules())
            .await?
            .into_album();

        if album.release_date == UNKNOWN {
            if let Some(date) = self.backfill_release_date(&document) {
                album.release_date = date;
            }
        }

        log::debug!(target: self.log_target(), "Album '{}' by '{}'", album.title, album.artist);
        Ok(album)
    }

    fn locate(&self, input: &str) -> Result<Locator> {
        let locator = Locator::new(self.platform, input)?;
        log::debug!(target: self.log_target(), "{} ID: {}", self.platform, locator.id());
        log::debug!(target: self.log_target(), "Song URL: {}", locator.song_url());
        log::debug!(target: self.log_target(), "Album URL: {}", locator.album_url());
        Ok(locator)
    }

    async fn scan_song_page(&self, url: &str) -> Result<SongMetadata> {
        let document = self.fetch_required(url).await?;

        let mut song = self
            .scan(&document, self.platform.song_rules())
            .await?
            .into_song();

        if song.release_date == UNKNOWN {
            if let Some(date) = self.backfill_release_date(&document) {
                song.release_date = date;
            }
        }

        log::debug!(target: self.log_target(), "Song '{}' by '{}'", song.title, song.artist);
        Ok(song)
    }

    async fn fetch_required(&self, url: &str) -> Result<Html> {
        self.fetcher
            .fetch_page(url)
            .await
            .ok_or_else(|| ScrapeError::PageUnavailable(url.to_string()))
    }

    async fn scan(&self, document: &Html, rules: &[TagRule]) -> Result<TagDraft> {
        let tags = collect_meta_tags(document)?;
        log::trace!(target: self.log_target(), "Found {} meta tags", tags.len());

        TagScanner::new(rules, self.fetcher.as_ref(), self.log_target())
            .scan(&tags)
            .await
    }

    /// Best-effort release date from embedded page state; only when enabled.
    fn backfill_release_date(&self, document: &Html) -> Option<String> {
        if !self.config.experimental {
            return None;
        }
        let state = self.platform.page_state()?;

        match page_state::release_date(document, state) {
            Ok(Some(date)) => {
                log::debug!(target: self.log_target(), "Release date from page state: {date}");
                Some(date)
            }
            Ok(None) => {
                log::debug!(target: self.log_target(), "No release date in page state");
                None
            }
            Err(e) => {
                log::debug!(target: self.log_target(), "Unreadable page state: {e}");
                None
            }
        }
    }
}
