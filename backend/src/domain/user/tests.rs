//! Tests for the domain user model.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(0)]
#[case(-4)]
fn user_id_rejects_non_positive_values(#[case] raw: i32) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::InvalidId));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn username_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(Username::new(raw), Err(UserValidationError::EmptyUsername));
}

#[rstest]
fn username_keeps_surrounding_whitespace() {
    let padded = Username::new(" alice ").expect("valid username");
    assert_eq!(padded.as_str(), " alice ");
    assert_ne!(padded, Username::new("alice").expect("valid username"));
}

#[rstest]
fn username_rejects_overlong_input() {
    let raw = "a".repeat(USERNAME_MAX + 1);
    assert_eq!(
        Username::new(raw),
        Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX })
    );
}

#[rstest]
fn username_comparison_is_case_sensitive() {
    let lower = Username::new("alice").expect("valid username");
    let upper = Username::new("Alice").expect("valid username");
    assert_ne!(lower, upper);
}

#[rstest]
fn user_serialises_as_id_and_username() {
    let user = User::try_from_parts(1, "alice").expect("valid user");
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(value, json!({ "id": 1, "username": "alice" }));
}

#[rstest]
fn user_deserialisation_validates_fields() {
    let result = serde_json::from_value::<User>(json!({ "id": 0, "username": "alice" }));
    assert!(result.is_err(), "zero id must be rejected");

    let result = serde_json::from_value::<User>(json!({ "id": 2, "username": " " }));
    assert!(result.is_err(), "blank username must be rejected");
}
