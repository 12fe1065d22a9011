//! Data models for CareHive console entities.
//!
//! This module contains the data structures held by the session store
//! and exchanged with the REST backend:
//!
//! - `AuthenticatedUser`: the signed-in identity and bearer token
//! - `ColorTheme`, `Palette`, `ColorGroup`, `ColorShade`: role themes
//! - `NavLink`: the navigation links visible to a role
//! - `LoginData`: the combined login/registration/OTP response payload

pub mod navlink;
pub mod theme;
pub mod user;

pub use navlink::{display_order, NavLink};
pub use theme::{ColorGroup, ColorShade, ColorTheme, Palette};
pub use user::{AuthenticatedUser, LoginData};
