//! Experimental release date backfill from embedded page state.
//!
//! Deezer pages assign a JSON object to `window.__DZR_APP_STATE__` in an
//! inline script. The object carries `DATA.PHYSICAL_RELEASE_DATE`, which is
//! used when the meta tags do not declare a release date.

use crate::platform::PageState;
use crate::{Result, ScrapeError};
use scraper::{Html, Selector};
use serde_json::Value;

/// Locate and decode the state object assigned after `marker`.
///
/// Returns `Ok(None)` when no script contains the marker.
pub fn find_page_state(document: &Html, marker: &str) -> Result<Option<Value>> {
    let script_selector = Selector::parse("script")
        .map_err(|e| ScrapeError::Parse(format!("Invalid script selector: {e:?}")))?;

    let Some(script) = document
        .select(&script_selector)
        .map(|element| element.text().collect::<String>())
        .find(|text| text.contains(marker))
    else {
        return Ok(None);
    };

    parse_assigned_object(&script, marker).map(Some)
}

/// Decode the first JSON object that follows `marker` in a script body.
///
/// Anything after the object (the trailing `;`, further statements) is
/// ignored.
pub fn parse_assigned_object(script: &str, marker: &str) -> Result<Value> {
    let after_marker = script
        .split_once(marker)
        .map(|(_, rest)| rest)
        .ok_or_else(|| ScrapeError::Parse(format!("'{marker}' not found in script")))?;

    let start = after_marker
        .find('{')
        .ok_or_else(|| ScrapeError::Parse(format!("No object assigned to '{marker}'")))?;

    let mut stream =
        serde_json::Deserializer::from_str(&after_marker[start..]).into_iter::<Value>();
    match stream.next() {
        Some(value) => Ok(value?),
        None => Err(ScrapeError::Parse(format!("Empty state for '{marker}'"))),
    }
}

/// Physical release date from the page state, if the page has one.
pub fn release_date(document: &Html, state: PageState) -> Result<Option<String>> {
    let Some(value) = find_page_state(document, state.marker)? else {
        return Ok(None);
    };

    Ok(value
        .pointer(state.release_date_pointer)
        .and_then(Value::as_str)
        .filter(|date| !date.is_empty())
        .map(str::to_string))
}
