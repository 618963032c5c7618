use crate::Client;

use mf_session::SessionStore;

#[test]
fn test_base_url_without_trailing_slash_resolves_segments() {
    let client = Client::new("http://localhost:8000", SessionStore::in_memory()).unwrap();
    let url = client.url(&["movies"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/movies");
}

#[test]
fn test_base_url_trailing_slash_not_doubled() {
    let client = Client::new("http://localhost:8000/", SessionStore::in_memory()).unwrap();
    let url = client.url(&["users", "alice"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/users/alice");
}

#[test]
fn test_base_url_path_prefix_kept() {
    let client = Client::new("https://example.com/api/", SessionStore::in_memory()).unwrap();
    let url = client.url(&["movies", "genre", "Drama"]).unwrap();
    assert_eq!(url.as_str(), "https://example.com/api/movies/genre/Drama");
}

#[test]
fn test_segments_are_percent_encoded() {
    let client = Client::new("http://localhost:8000", SessionStore::in_memory()).unwrap();
    let url = client.url(&["movies", "The Matrix"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/movies/The%20Matrix");

    let url = client.url(&["movies", "AC/DC"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/movies/AC%2FDC");
}

#[test]
fn test_invalid_base_url_rejected() {
    assert!(Client::new("not a url", SessionStore::in_memory()).is_err());
    assert!(Client::new("mailto:someone@example.com", SessionStore::in_memory()).is_err());
}

#[test]
fn test_is_favorite_reads_cached_user_only() {
    let session = SessionStore::in_memory();
    session.add_favorite("m1").unwrap().confirm();
    let client = Client::new("http://127.0.0.1:9", session).unwrap();

    assert!(client.is_favorite("m1").unwrap());
    assert!(!client.is_favorite("m2").unwrap());
}

#[test]
fn test_cached_user_empty_when_logged_out() {
    let client = Client::new("http://127.0.0.1:9", SessionStore::in_memory()).unwrap();
    assert!(client.cached_user().unwrap().is_empty());
}
