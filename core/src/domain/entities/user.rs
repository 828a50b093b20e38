//! User entity representing a registered account.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// Owned by the account persistence layer; token issuance only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique per account and used as the login key
    pub email: String,

    /// Password hash; never serialized outward
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Avatar URL
    #[serde(default)]
    pub image_url: String,

    /// Personal website URL
    #[serde(default)]
    pub website: String,
}

impl User {
    /// Creates a new User with a random id
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the avatar URL
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the website URL
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    /// Public view of this user
    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }
}

/// Public fields of a [`User`]
///
/// Embedded in identity token claims. It has no password field, so the
/// password cannot leak into a signed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub website: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            image_url: user.image_url.clone(),
            website: user.website.clone(),
        }
    }
}

impl From<UserProfile> for User {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            password: String::new(),
            name: profile.name,
            image_url: profile.image_url,
            website: profile.website,
        }
    }
}
