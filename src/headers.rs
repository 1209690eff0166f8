use http_client::Request;

/// Desktop Chrome user agent; both platforms serve the full meta tag set to it
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

const HTML_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

/// Add common browser headers to a request
pub fn add_common_headers(request: &mut Request) {
    let _ = request.insert_header("User-Agent", USER_AGENT);
    let _ = request.insert_header("Accept-Language", "en-US,en;q=0.9");
    let _ = request.insert_header("DNT", "1");
}

/// Add headers for a plain, unauthenticated page GET
pub fn add_page_headers(request: &mut Request) {
    add_common_headers(request);
    let _ = request.insert_header("Accept", HTML_ACCEPT);
    let _ = request.insert_header("Upgrade-Insecure-Requests", "1");
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_types::{Method, Url};

    #[test]
    fn test_page_headers_carry_user_agent() {
        let url: Url = "https://www.deezer.com/en/track/1".parse().unwrap();
        let mut request = Request::new(Method::Get, url);
        add_page_headers(&mut request);

        let agent = request
            .header("User-Agent")
            .and_then(|values| values.get(0))
            .map(|value| value.as_str().to_string());
        assert_eq!(agent.as_deref(), Some(USER_AGENT));
        assert!(request.header("Accept").is_some());
        assert!(request.header("Cookie").is_none());
    }
}
