//! Auth slice, persisted alongside the cart under the same store name.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// The signed-in user, as far as the storefront knows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    /// User ID.
    pub id: UserId,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AuthUser {
    /// Create a user without a display name.
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Session token and user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSlice {
    /// Bearer token for the catalog/account API.
    #[serde(default)]
    pub token: Option<String>,
    /// Signed-in user.
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl AuthSlice {
    /// Replace the token (or clear it with `None`).
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Replace the user (or clear it with `None`).
    pub fn set_user(&mut self, user: Option<AuthUser>) {
        self.user = user;
    }

    /// Forget both token and user.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Check if a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
