use crate::ApiErrorBody;

#[test]
fn test_first_message_of_structured_error() {
    let body = ApiErrorBody::parse(
        r#"{"errors":[{"msg":"Username is required","path":"Username"},{"msg":"Email is invalid"}]}"#,
    )
    .unwrap();
    assert_eq!(body.first_message(), Some("Username is required"));
}

#[test]
fn test_empty_error_list_has_no_message() {
    let body = ApiErrorBody::parse(r#"{"errors":[]}"#).unwrap();
    assert_eq!(body.first_message(), None);
}

#[test]
fn test_unstructured_bodies_do_not_parse() {
    assert!(ApiErrorBody::parse("Internal Server Error").is_none());
    assert!(ApiErrorBody::parse(r#"{"message":"nope"}"#).is_none());
    assert!(ApiErrorBody::parse(r#"{"errors":"nope"}"#).is_none());
    assert!(ApiErrorBody::parse("").is_none());
}
