mod common;

use common::{page, provider, CannedPages};
use songmeta::{AlbumField, Platform, ScrapeError, TrackDuration, UNKNOWN};

const TRACK_URL: &str = "https://www.deezer.com/en/track/1566859182";
const ALBUM_URL: &str = "https://www.deezer.com/en/album/275547892";
const ARTIST_URL: &str = "https://www.deezer.com/artist/8706544";

fn deezer_pages() -> CannedPages {
    CannedPages::new()
        .with_fixture(TRACK_URL, "deezer_track.html")
        .with_fixture(ALBUM_URL, "deezer_album.html")
        .with_fixture(ARTIST_URL, "deezer_artist.html")
}

#[test_log::test(tokio::test)]
async fn test_song_lookup_resolves_artist_and_album() {
    let pages = deezer_pages();
    let requests = pages.requests();
    let deezer = provider(Platform::Deezer, pages, false);

    let song = deezer
        .get_song("https://www.deezer.com/es/track/1566859182?host=0")
        .await
        .expect("song lookup should succeed");

    assert_eq!(song.title, "Levitating");
    assert_eq!(song.artist, "Dua Lipa");
    assert_eq!(song.duration, TrackDuration::Millis(203000));
    assert_eq!(song.release_date, "2020-03-27");
    assert_eq!(song.genre, UNKNOWN);
    assert!(song.artwork_url.starts_with("https://cdn-images.dzcdn.net/"));

    let album = song.album.resolved().expect("album should be resolved");
    assert_eq!(album.title, "Future Nostalgia");
    assert_eq!(album.artist, "Dua Lipa");
    assert_eq!(album.release_date, "2020-03-27");
    assert_eq!(
        album.description,
        "Listen to Future Nostalgia by Dua Lipa on Deezer."
    );

    // track page, its artist, album page, the album's artist
    assert_eq!(
        *requests.borrow(),
        vec![TRACK_URL, ARTIST_URL, ALBUM_URL, ARTIST_URL]
    );
}

#[tokio::test]
async fn test_song_page_without_album_reference() {
    let pages = CannedPages::new().with_page(
        TRACK_URL,
        &page(&[
            r#"<meta property="og:title" content="SongName">"#,
            r#"<meta property="music:duration" content="210000">"#,
            r#"<meta name="music:release_date" content="2020-05-01">"#,
        ]),
    );
    let requests = pages.requests();
    let deezer = provider(Platform::Deezer, pages, false);

    let song = deezer
        .try_get_song_page("https://www.deezer.com/es/track/1566859182?host=0")
        .await
        .unwrap();
    assert_eq!(song.title, "SongName");
    assert_eq!(song.duration, TrackDuration::Millis(210000));
    assert_eq!(song.release_date, "2020-05-01");
    assert_eq!(song.album, AlbumField::Reference(UNKNOWN.to_string()));
    assert_eq!(song.artist, UNKNOWN);

    // the full lookup has nothing to resolve and makes no album request
    let song = deezer.get_song("1566859182").await.unwrap();
    assert!(song.album.is_unknown());
    assert!(requests.borrow().iter().all(|url| url == TRACK_URL));
}

#[tokio::test]
async fn test_empty_page_yields_all_unknown_fields() {
    let pages = CannedPages::new().with_page(ALBUM_URL, &page(&[]));
    let deezer = provider(Platform::Deezer, pages, false);

    let album = deezer.get_album("275547892").await.unwrap();
    assert_eq!(album, songmeta::AlbumMetadata::unknown());
}

#[tokio::test]
async fn test_experimental_backfills_release_date() {
    let pages = CannedPages::new()
        .with_fixture(TRACK_URL, "deezer_track_no_date.html")
        .with_fixture(ARTIST_URL, "deezer_artist.html");

    let song = provider(Platform::Deezer, pages.clone(), true)
        .try_get_song("1566859182")
        .await
        .unwrap();
    assert_eq!(song.release_date, "2019-11-01");
    assert_eq!(song.title, "Don't Start Now");
    assert_eq!(song.artist, "Dua Lipa");

    let song = provider(Platform::Deezer, pages, false)
        .try_get_song("1566859182")
        .await
        .unwrap();
    assert_eq!(song.release_date, UNKNOWN);
}

#[tokio::test]
async fn test_experimental_keeps_tag_release_date() {
    let pages = CannedPages::new().with_page(
        ALBUM_URL,
        &format!(
            "{}<script>window.__DZR_APP_STATE__ = {{\"DATA\":{{\"PHYSICAL_RELEASE_DATE\":\"1999-01-01\"}}}};</script>",
            page(&[r#"<meta name="music:release_date" content="2020-03-27">"#])
        ),
    );

    let album = provider(Platform::Deezer, pages, true)
        .try_get_album("275547892")
        .await
        .unwrap();
    assert_eq!(album.release_date, "2020-03-27");
}

#[tokio::test]
async fn test_missing_page_state_is_tolerated() {
    let pages = CannedPages::new().with_page(
        ALBUM_URL,
        &page(&[r#"<meta property="og:title" content="Future Nostalgia">"#]),
    );

    let album = provider(Platform::Deezer, pages, true)
        .get_album("275547892")
        .await
        .unwrap();
    assert_eq!(album.title, "Future Nostalgia");
    assert_eq!(album.release_date, UNKNOWN);
}

#[tokio::test]
async fn test_unavailable_page_returns_sentinel() {
    let deezer = provider(Platform::Deezer, CannedPages::new(), false);

    assert!(deezer.get_song("1566859182").await.is_none());
    assert!(deezer.get_album("275547892").await.is_none());

    let err = deezer.try_get_song("1566859182").await.unwrap_err();
    assert!(matches!(err, ScrapeError::PageUnavailable(url) if url == TRACK_URL));
}

#[tokio::test]
async fn test_unavailable_artist_page_leaves_artist_unknown() {
    let pages = CannedPages::new().with_fixture(ALBUM_URL, "deezer_album.html");

    let album = provider(Platform::Deezer, pages, false)
        .get_album("https://www.deezer.com/album/275547892")
        .await
        .unwrap();
    assert_eq!(album.title, "Future Nostalgia");
    assert_eq!(album.artist, UNKNOWN);
}

#[tokio::test]
async fn test_unavailable_album_fails_song_lookup() {
    let pages = CannedPages::new()
        .with_fixture(TRACK_URL, "deezer_track.html")
        .with_fixture(ARTIST_URL, "deezer_artist.html");
    let deezer = provider(Platform::Deezer, pages, false);

    assert!(deezer.get_song("1566859182").await.is_none());
    // the track page itself is fine
    let song = deezer.try_get_song_page("1566859182").await.unwrap();
    assert_eq!(
        song.album.reference(),
        Some("https://www.deezer.com/album/275547892")
    );
}

#[tokio::test]
async fn test_non_numeric_duration_returns_sentinel() {
    let pages = CannedPages::new().with_page(
        TRACK_URL,
        &page(&[
            r#"<meta property="og:title" content="SongName">"#,
            r#"<meta property="music:duration" content="three minutes">"#,
        ]),
    );
    let deezer = provider(Platform::Deezer, pages, false);

    assert!(deezer.get_song("1566859182").await.is_none());
    assert!(matches!(
        deezer.try_get_song("1566859182").await,
        Err(ScrapeError::Parse(_))
    ));
}

#[tokio::test]
async fn test_malformed_url_fails_before_fetching() {
    let pages = CannedPages::new();
    let requests = pages.requests();
    let deezer = provider(Platform::Deezer, pages, false);

    let err = deezer.try_get_song("https://deezer.com/").await.unwrap_err();
    assert!(matches!(err, ScrapeError::Locator(_)));
    assert!(requests.borrow().is_empty());
}

#[tokio::test]
async fn test_album_artist_from_name_attribute() {
    let pages = CannedPages::new()
        .with_page(
            ALBUM_URL,
            &page(&[
                r#"<meta property="og:title" content="Future Nostalgia">"#,
                &format!(r#"<meta name="music:musician" content="{ARTIST_URL}">"#),
            ]),
        )
        .with_fixture(ARTIST_URL, "deezer_artist.html");
    let requests = pages.requests();

    let album = provider(Platform::Deezer, pages, false)
        .get_album("275547892")
        .await
        .expect("album lookup should succeed");

    assert_eq!(album.title, "Future Nostalgia");
    assert_eq!(album.artist, "Dua Lipa");
    assert_eq!(*requests.borrow(), vec![ALBUM_URL, ARTIST_URL]);
}

#[tokio::test]
async fn test_song_with_two_artist_links() {
    let featured_url = "https://www.deezer.com/artist/27";
    let pages = CannedPages::new()
        .with_page(
            TRACK_URL,
            &page(&[
                r#"<meta property="og:title" content="One Kiss">"#,
                &format!(r#"<meta property="music:musician" content="{featured_url}">"#),
                &format!(r#"<meta property="music:musician" content="{ARTIST_URL}">"#),
            ]),
        )
        .with_page(
            featured_url,
            &page(&[r#"<meta property="og:title" content="Calvin Harris">"#]),
        )
        .with_fixture(ARTIST_URL, "deezer_artist.html");
    let requests = pages.requests();

    let song = provider(Platform::Deezer, pages, false)
        .get_song("1566859182")
        .await
        .expect("song lookup should succeed");

    assert_eq!(song.artist, "Calvin Harris, Dua Lipa");
    assert_eq!(song.album, AlbumField::Reference(UNKNOWN.to_string()));
    assert_eq!(*requests.borrow(), vec![TRACK_URL, featured_url, ARTIST_URL]);
}
