/// Environment variable that turns on saving of fetched pages.
pub const DEBUG_SAVE_RESPONSES_ENV: &str = "SONGMETA_DEBUG_SAVE_RESPONSES";

/// Default `log` target used by providers and fetchers.
pub const DEFAULT_LOG_TARGET: &str = "songmeta";

/// Configuration shared by a provider and the fetcher it builds.
///
/// # Examples
///
/// ```rust
/// use songmeta::ScraperConfig;
///
/// let config = ScraperConfig::new()
///     .with_experimental(true)
///     .with_log_target("deezer");
/// assert!(config.experimental);
/// assert_eq!(config.log_target, "deezer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Backfill an unresolved release date from the page's embedded state
    pub experimental: bool,
    /// Write every fetched body under `debug_responses/`
    pub debug_save_responses: bool,
    /// Target passed to every `log` call made by the lookup
    pub log_target: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            experimental: false,
            debug_save_responses: std::env::var(DEBUG_SAVE_RESPONSES_ENV).is_ok(),
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the experimental release date backfill
    pub fn with_experimental(mut self, experimental: bool) -> Self {
        self.experimental = experimental;
        self
    }

    /// Enable or disable saving fetched pages to disk
    pub fn with_debug_save_responses(mut self, enabled: bool) -> Self {
        self.debug_save_responses = enabled;
        self
    }

    /// Set the `log` target used for this lookup's messages
    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }
}
