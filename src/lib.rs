//! CareHive console core - API client, models, session store.
//!
//! This crate is the client core of the CareHive healthcare-coordination
//! admin console. It owns the authenticated session, the color theme
//! catalog, and the navigation links for the signed-in role, mirrors all
//! of them to durable per-user storage, and talks to the CareHive REST
//! backend for the auth and CRUD flows. The UI shell consuming this crate
//! lives elsewhere.

pub mod api;
pub mod config;
pub mod models;
pub mod session;
pub mod storage;
pub mod utils;
