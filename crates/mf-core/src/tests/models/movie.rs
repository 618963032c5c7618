use crate::Movie;

use serde_json::json;

#[test]
fn test_movie_round_trips_unchanged() {
    let raw = json!({
        "_id": "m1",
        "Title": "Inception",
        "Genre": { "Name": "Sci-Fi", "Description": "Speculative" },
        "Director": { "Name": "Christopher Nolan", "Bio": "British-American director" },
        "ImagePath": "inception.png",
        "Featured": true,
        "Actors": ["Leonardo DiCaprio"]
    });

    let movie: Movie = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(movie.id(), Some("m1"));
    assert_eq!(movie.title(), Some("Inception"));
    assert_eq!(movie.featured(), Some(true));
    assert_eq!(movie.genre().unwrap().name(), Some("Sci-Fi"));
    assert_eq!(movie.director().unwrap().name(), Some("Christopher Nolan"));
    assert_eq!(serde_json::to_value(&movie).unwrap(), raw);
}

#[test]
fn test_movie_keeps_null_fields() {
    let raw = json!({
        "_id": "m1",
        "Title": "Inception",
        "Director": { "Name": "Nolan", "Death": null },
        "ImagePath": null
    });

    let movie: Movie = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(movie.image_path(), None);
    assert_eq!(movie.director().unwrap().death(), Some(&json!(null)));
    assert_eq!(serde_json::to_value(&movie).unwrap(), raw);
}

#[test]
fn test_movie_keeps_fields_of_unexpected_type() {
    let raw = json!({
        "_id": "m1",
        "Featured": "yes",
        "Director": { "Name": "Nolan", "Birth": 1970 },
        "Genre": "Thriller"
    });

    let movie: Movie = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(movie.featured(), None);
    assert_eq!(movie.get("Featured"), Some(&json!("yes")));
    assert_eq!(movie.director().unwrap().birth(), Some(&json!(1970)));
    assert!(movie.genre().is_none());
    assert_eq!(serde_json::to_value(&movie).unwrap(), raw);
}

#[test]
fn test_empty_movie_serializes_to_empty_object() {
    let movie: Movie = serde_json::from_value(json!({})).unwrap();
    assert_eq!(movie, Movie::default());
    assert!(movie.is_empty());
    assert_eq!(serde_json::to_value(&movie).unwrap(), json!({}));
}

#[test]
fn test_movie_requires_object_body() {
    let result: Result<Movie, _> = serde_json::from_value(json!(["m1"]));
    assert!(result.is_err());
}
