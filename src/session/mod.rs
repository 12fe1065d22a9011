//! Session and presentation state for the signed-in user.
//!
//! This module provides:
//! - `SessionStore`: the per-instance container for the authenticated
//!   identity, theme catalog, active theme, and navigation links, with
//!   synchronous mirroring to durable storage
//! - `guard::authorize`: the access check run before any protected view
//!
//! Sessions expire after 24 hours of the idle-period marker, evaluated
//! on access rather than by a timer.

pub mod guard;
pub mod store;

pub use guard::{authorize, Access};
pub use store::{ExpiryCheck, SessionStore, SESSION_EXPIRED_NOTICE};
