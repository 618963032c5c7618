use crate::{CoreError, UserUpdate};

use serde_json::json;

#[test]
fn test_update_serializes_only_set_fields() {
    let update = UserUpdate {
        email: Some("new@example.com".into()),
        ..UserUpdate::default()
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({ "Email": "new@example.com" })
    );
}

#[test]
fn test_empty_update_fails_validation() {
    let update = UserUpdate::default();
    assert!(update.is_empty());
    assert!(matches!(
        update.validate(),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn test_non_empty_update_passes_validation() {
    let update = UserUpdate {
        username: Some("alice2".into()),
        ..UserUpdate::default()
    };
    assert!(update.validate().is_ok());
}
