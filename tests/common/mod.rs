#![allow(dead_code)]
use async_trait::async_trait;
use songmeta::{Html, MetadataProvider, PageFetcher, Platform, ScraperConfig};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::rc::Rc;

/// Serves canned HTML by URL and records every URL requested
#[derive(Clone, Default)]
pub struct CannedPages {
    pages: HashMap<String, String>,
    requested: Rc<RefCell<Vec<String>>>,
}

impl CannedPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_fixture(self, url: &str, fixture: &str) -> Self {
        let html = fs::read_to_string(format!("tests/fixtures/{fixture}"))
            .unwrap_or_else(|e| panic!("fixture {fixture} should exist: {e}"));
        self.with_page(url, &html)
    }

    /// Handle onto the request log that survives boxing the fetcher
    pub fn requests(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.requested)
    }
}

#[async_trait(?Send)]
impl PageFetcher for CannedPages {
    async fn fetch_page(&self, url: &str) -> Option<Html> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages.get(url).map(|body| Html::parse_document(body))
    }
}

/// Wrap a list of meta tags in a minimal HTML page
pub fn page(meta_tags: &[&str]) -> String {
    format!(
        "<!DOCTYPE html><html><head>{}</head><body></body></html>",
        meta_tags.join("\n")
    )
}

pub fn provider(platform: Platform, pages: CannedPages, experimental: bool) -> MetadataProvider {
    let config = ScraperConfig::new()
        .with_experimental(experimental)
        .with_debug_save_responses(false)
        .with_log_target(format!("songmeta::test::{platform}"));
    MetadataProvider::new(platform, Box::new(pages)).with_config(config)
}
