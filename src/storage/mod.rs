//! Durable per-user key-value storage.
//!
//! This module provides the `LocalStore`, the JSON-backed mirror behind
//! the session store. Each key is one file; reads are parse-or-null so a
//! corrupt or missing record behaves exactly like an absent one.
//!
//! Stored keys:
//! - `user`: the authenticated identity
//! - `themes`: the theme catalog for the role
//! - `defaultTheme`: the active theme
//! - `navlinks`: the role's navigation links
//! - `reLoginTimestamp`: start of the current idle period

pub mod local;

pub use local::{
    LocalStore, KEY_DEFAULT_THEME, KEY_NAVLINKS, KEY_RELOGIN_TIMESTAMP, KEY_THEMES, KEY_USER,
};
