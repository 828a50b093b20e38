//! Unit tests for the user entity

use uuid::Uuid;

use crate::domain::entities::user::{User, UserProfile};

#[test]
fn test_new_user_creation() {
    let user = User::new("alice@example.com", "hashed");

    assert!(!user.id.is_nil());
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password, "hashed");
    assert!(user.name.is_empty());
}

#[test]
fn test_password_is_not_serialized() {
    let user = User::new("alice@example.com", "secret-hash").with_name("Alice");
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password").is_none());
    assert_eq!(json["name"], "Alice");
}

#[test]
fn test_user_deserializes_without_password() {
    let id = Uuid::new_v4();
    let json = format!(r#"{{"id":"{}","email":"carol@example.com"}}"#, id);
    let user: User = serde_json::from_str(&json).unwrap();

    assert_eq!(user.id, id);
    assert!(user.password.is_empty());
    assert!(user.website.is_empty());
}

#[test]
fn test_profile_round_trip_drops_password() {
    let user = User::new("dave@example.com", "secret-hash")
        .with_name("Dave")
        .with_website("https://dave.dev");

    let profile = UserProfile::from(&user);
    let restored = User::from(profile);

    assert_eq!(restored.id, user.id);
    assert_eq!(restored.email, user.email);
    assert_eq!(restored.name, user.name);
    assert_eq!(restored.website, user.website);
    assert!(restored.password.is_empty());
}
