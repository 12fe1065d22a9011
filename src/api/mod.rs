//! REST API client module for the CareHive backend.
//!
//! This module provides the `ApiClient` for the auth flows
//! (email/password login, phone OTP, password reset) and the CRUD
//! endpoints behind the navigation-link and color-theme screens.
//!
//! All protected endpoints use JWT bearer token authentication; the
//! token comes from the login/OTP-verification response held in the
//! session store.

pub mod client;
pub mod error;

pub use client::{
    ApiClient, ChangePasswordRequest, LoginRequest, NavlinkFilter, NavlinkPayload,
    RegisterRequest, ResetPasswordRequest, VerifyOtpRequest,
};
pub use error::ApiError;
