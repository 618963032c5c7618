use crate::{CoreError, User};

use chrono::NaiveDate;
use serde_json::{Value, json};

fn user(raw: Value) -> User {
    serde_json::from_value(raw).unwrap()
}

#[test]
fn test_user_reads_wire_names() {
    let user = user(json!({
        "_id": "u1",
        "Username": "alice",
        "Email": "alice@example.com",
        "Birthday": "1990-05-01T00:00:00.000Z",
        "FavoriteMovies": ["m1", "m2"]
    }));

    assert_eq!(user.id(), Some("u1"));
    assert_eq!(user.username(), Some("alice"));
    assert_eq!(user.email(), Some("alice@example.com"));
    assert_eq!(user.favorite_movies(), vec!["m1", "m2"]);
}

#[test]
fn test_user_accepts_plain_id_alias() {
    let user = user(json!({ "id": "u7", "Username": "bob" }));
    assert_eq!(user.id(), Some("u7"));
    assert!(user.favorite_movies().is_empty());
}

#[test]
fn test_user_round_trips_unknown_and_null_fields() {
    let raw = json!({
        "_id": "u1",
        "Username": "a",
        "Birthday": null,
        "FavoriteMovies": [],
        "__v": 0
    });
    let user = user(raw.clone());

    assert_eq!(user.get("__v"), Some(&json!(0)));
    assert_eq!(user.birthday(), None);
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}

#[test]
fn test_default_user_is_empty() {
    let user = User::default();
    assert!(user.is_empty());
    assert!(!user.is_favorite("m1"));
}

#[test]
fn test_push_favorite_allows_duplicates() {
    let mut user = User::default();
    user.push_favorite("m1");
    user.push_favorite("m1");
    assert_eq!(user.favorite_movies(), vec!["m1", "m1"]);
}

#[test]
fn test_push_favorite_replaces_null_list() {
    let mut user = user(json!({ "Username": "a", "FavoriteMovies": null }));
    user.push_favorite("m1");
    assert_eq!(user.favorite_movies(), vec!["m1"]);
}

#[test]
fn test_remove_favorite_removes_first_occurrence_only() {
    let mut user = user(json!({ "FavoriteMovies": ["m1", "m2", "m1"] }));

    assert!(user.remove_favorite("m1"));
    assert_eq!(user.favorite_movies(), vec!["m2", "m1"]);
    assert!(user.is_favorite("m1"));
}

#[test]
fn test_remove_favorite_missing_is_noop() {
    let mut user = user(json!({ "FavoriteMovies": ["m2"] }));

    assert!(!user.remove_favorite("m1"));
    assert_eq!(user.favorite_movies(), vec!["m2"]);
}

#[test]
fn test_birthday_date_from_timestamp() {
    let user = user(json!({ "Birthday": "1990-05-01T00:00:00.000Z" }));
    assert_eq!(
        user.birthday_date().unwrap(),
        NaiveDate::from_ymd_opt(1990, 5, 1)
    );
}

#[test]
fn test_birthday_date_from_plain_date() {
    let user = user(json!({ "Birthday": "2001-12-24" }));
    assert_eq!(
        user.birthday_date().unwrap(),
        NaiveDate::from_ymd_opt(2001, 12, 24)
    );
}

#[test]
fn test_birthday_date_missing_or_null_is_none() {
    assert_eq!(User::default().birthday_date().unwrap(), None);
    assert_eq!(user(json!({ "Birthday": null })).birthday_date().unwrap(), None);
}

#[test]
fn test_birthday_date_invalid() {
    for raw in [json!("yesterday"), json!(19900501)] {
        let user = user(json!({ "Birthday": raw }));
        assert!(matches!(
            user.birthday_date(),
            Err(CoreError::InvalidBirthday { .. })
        ));
    }
}

#[test]
fn test_set_birthday_overwrites_only_that_field() {
    let mut user = user(json!({ "Username": "a", "Birthday": "1990-05-01T00:00:00.000Z" }));
    user.set_birthday("1990-05-01");
    assert_eq!(
        serde_json::to_value(&user).unwrap(),
        json!({ "Username": "a", "Birthday": "1990-05-01" })
    );
}
