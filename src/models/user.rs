use serde::{Deserialize, Serialize};

use crate::models::{ColorTheme, NavLink};

/// The signed-in identity for the current console instance.
///
/// A user exists if and only if a durable record for it exists; absence
/// of either means "logged out."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: String,
    pub username: String,
    pub phone: String,
    pub email: String,
    pub role: String,
    pub token: String,
    #[serde(rename = "isVerified", default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    /// Role-specific status (e.g. coordinator approval state), when the
    /// backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Payload returned by login, registration, and OTP verification.
///
/// The auth flows hand this to `SessionStore::apply_login`, which
/// populates the session, theme catalog, active theme, and nav links in
/// one step.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub id: String,
    pub name: String,
    pub username: String,
    pub phone: String,
    pub email: String,
    pub role: String,
    pub token: String,
    #[serde(rename = "isVerified", default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "defaultTheme", default)]
    pub default_theme: Option<ColorTheme>,
    #[serde(default)]
    pub themes: Option<Vec<ColorTheme>>,
    #[serde(default)]
    pub navlinks: Option<Vec<NavLink>>,
}

impl LoginData {
    /// Extract just the identity portion of the response
    pub fn user(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.id.clone(),
            name: self.name.clone(),
            username: self.username.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            token: self.token.clone(),
            is_verified: self.is_verified,
            status: self.status.clone(),
        }
    }
}
