
use mf_core::User;
use serde_json::json;

/// A logged-in user with the given favorites
pub(crate) fn user_with_favorites(favorites: &[&str]) -> User {
    serde_json::from_value(json!({
        "_id": "u1",
        "Username": "alice",
        "FavoriteMovies": favorites,
    }))
    .unwrap()
}
