use crate::client::client::extract_response_data;

use serde_json::json;

#[test]
fn test_empty_body_becomes_empty_object() {
    assert_eq!(extract_response_data(""), json!({}));
    assert_eq!(extract_response_data("  \n"), json!({}));
}

#[test]
fn test_falsy_json_becomes_empty_object() {
    assert_eq!(extract_response_data("null"), json!({}));
    assert_eq!(extract_response_data("false"), json!({}));
    assert_eq!(extract_response_data("0"), json!({}));
    assert_eq!(extract_response_data("\"\""), json!({}));
}

#[test]
fn test_json_body_passed_through() {
    assert_eq!(
        extract_response_data(r#"{"_id":"m1","Title":"Inception"}"#),
        json!({ "_id": "m1", "Title": "Inception" })
    );
    assert_eq!(extract_response_data("[]"), json!([]));
    assert_eq!(extract_response_data("true"), json!(true));
}

#[test]
fn test_plain_text_body_becomes_string() {
    assert_eq!(
        extract_response_data("alice was deleted."),
        json!("alice was deleted.")
    );
}
