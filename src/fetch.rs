use crate::headers::add_page_headers;
use crate::{Result, ScrapeError, ScraperConfig};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use scraper::Html;
use std::fs;
use std::path::Path;

const MAX_REDIRECTS: u32 = 5;

/// Retrieves pages for the extraction pipeline.
///
/// Implementations never fail loudly: a page that cannot be retrieved yields
/// `None` and the caller decides whether that is fatal.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockPageFetcher`
/// that implements this trait using the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait PageFetcher {
    /// Fetch `url` and parse it, or return `None` if it is unavailable.
    async fn fetch_page(&self, url: &str) -> Option<Html>;
}

/// [`PageFetcher`] backed by any [`HttpClient`] implementation.
///
/// Each URL is requested once. Redirects are followed; any other non-200
/// answer or transport error is logged and reported as `None`.
pub struct HttpPageFetcher {
    client: Box<dyn HttpClient>,
    debug_save_responses: bool,
    log_target: String,
}

impl HttpPageFetcher {
    /// Create a fetcher with the default configuration.
    ///
    /// ```rust,no_run
    /// use songmeta::HttpPageFetcher;
    ///
    /// let fetcher = HttpPageFetcher::new(Box::new(http_client::native::NativeClient::new()));
    /// ```
    pub fn new(client: Box<dyn HttpClient>) -> Self {
        Self::with_config(client, &ScraperConfig::default())
    }

    pub fn with_config(client: Box<dyn HttpClient>, config: &ScraperConfig) -> Self {
        Self {
            client,
            debug_save_responses: config.debug_save_responses,
            log_target: config.log_target.clone(),
        }
    }

    /// Fetch the body of `url`, following redirects.
    ///
    /// Unlike [`PageFetcher::fetch_page`] this reports why the page is
    /// unavailable.
    pub async fn get_body(&self, url: &str) -> Result<String> {
        let mut current = url.to_string();

        for _ in 0..=MAX_REDIRECTS {
            let mut request = Request::new(Method::Get, parse_url(&current)?);
            add_page_headers(&mut request);

            let mut response = self
                .client
                .send(request)
                .await
                .map_err(|e| ScrapeError::Http(e.to_string()))?;
            let status: u16 = response.status().into();

            if matches!(status, 301 | 302 | 303 | 307 | 308) {
                let location = response
                    .header("location")
                    .and_then(|values| values.get(0))
                    .map(|value| value.as_str().to_string())
                    .ok_or_else(|| {
                        ScrapeError::Http(format!("Redirect from {current} without location"))
                    })?;

                let next = parse_url(&current)?
                    .join(&location)
                    .map_err(|e| ScrapeError::Http(format!("Bad redirect '{location}': {e}")))?;
                log::debug!(
                    target: self.log_target.as_str(),
                    "Following redirect from {current} to {next}"
                );
                current = next.to_string();
                continue;
            }

            let body = response
                .body_string()
                .await
                .map_err(|e| ScrapeError::Http(e.to_string()))?;

            if self.debug_save_responses {
                self.save_debug_response(&current, status, &body);
            }

            if status != 200 {
                return Err(ScrapeError::Status {
                    url: current,
                    status,
                });
            }

            log::trace!(
                target: self.log_target.as_str(),
                "Fetched {current} ({} bytes)",
                body.len()
            );
            return Ok(body);
        }

        Err(ScrapeError::Http(format!("Too many redirects for {url}")))
    }

    /// Save response to debug directory (optional debug feature)
    fn save_debug_response(&self, url: &str, status_code: u16, body: &str) {
        if let Err(e) = self.try_save_debug_response(url, status_code, body) {
            log::warn!(target: self.log_target.as_str(), "Failed to save debug response: {e}");
        }
    }

    fn try_save_debug_response(&self, url: &str, status_code: u16, body: &str) -> Result<()> {
        let debug_dir = Path::new("debug_responses");
        fs::create_dir_all(debug_dir)?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S_%3f");
        let filename = format!(
            "{timestamp}_{}_status{status_code}.html",
            debug_file_stem(url)
        );
        let file_path = debug_dir.join(filename);
        fs::write(&file_path, body)?;

        log::debug!(
            target: self.log_target.as_str(),
            "Saved HTTP response to {file_path:?} (status: {status_code}, url: {url})"
        );
        Ok(())
    }
}

#[async_trait(?Send)]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Option<Html> {
        match self.get_body(url).await {
            Ok(body) => Some(Html::parse_document(&body)),
            Err(e) => {
                log::error!(target: self.log_target.as_str(), "Failed to fetch {url}: {e}");
                None
            }
        }
    }
}

fn parse_url(url: &str) -> Result<Url> {
    url.parse::<Url>()
        .map_err(|e| ScrapeError::Http(format!("Invalid URL '{url}': {e}")))
}

/// File-name-safe rendering of a URL without its scheme.
fn debug_file_stem(url: &str) -> String {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme.replace(['/', '?', '&', '=', '%', '+', ':'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_file_stem_strips_scheme_and_separators() {
        assert_eq!(
            debug_file_stem("https://www.deezer.com/en/track/1?host=0"),
            "www.deezer.com_en_track_1_host_0"
        );
    }

    #[test]
    fn test_parse_url_rejects_garbage() {
        assert!(matches!(parse_url("Unknown"), Err(ScrapeError::Http(_))));
        assert!(parse_url("https://open.spotify.com/album/1").is_ok());
    }
}
