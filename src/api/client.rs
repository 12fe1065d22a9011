//! API client for communicating with the CareHive REST backend.
//!
//! This module provides the `ApiClient` struct for the authentication
//! flows and the nav-link / color-theme CRUD endpoints. Responses arrive
//! in a `{ "data": ..., "message": ... }` envelope.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

use crate::models::{AuthenticatedUser, ColorTheme, LoginData, NavLink};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of retries for rate-limited (429) requests.
/// 3 retries with exponential backoff usually succeeds without excessive delay.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
/// 1 second is polite to the server while not making users wait too long.
const INITIAL_BACKOFF_MS: u64 = 1000;

// ============================================================================
// Request / response shapes
// ============================================================================

/// Standard response envelope used by every CareHive endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
}

/// Login request. The backend accepts email/password, username/password,
/// or phone/OTP combinations; unset fields are omitted from the body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn with_email(email: &str, password: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            ..Self::default()
        }
    }

    pub fn with_phone(phone_number: &str, otp: &str) -> Self {
        Self {
            phone_number: Some(phone_number.to_string()),
            otp: Some(otp.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "roleCode")]
    pub role_code: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Create/update body for a navigation link
#[derive(Debug, Clone, Serialize)]
pub struct NavlinkPayload {
    #[serde(rename = "roleCode")]
    pub role_code: String,
    pub index: String,
    pub name: String,
    pub path: String,
}

/// Listing filter for the nav-link screen
#[derive(Debug, Clone, Default, Serialize)]
pub struct NavlinkFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub sort: String,
    pub page: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// API client for the CareHive backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ===== Auth =====

    /// Authenticate and return the combined login payload (identity,
    /// themes, active theme, nav links) for the session store.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginData> {
        self.post("auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginData> {
        self.post("auth/register", request).await
    }

    pub async fn send_otp(&self, email: &str) -> Result<()> {
        self.post_no_data("auth/send-otp", &serde_json::json!({ "email": email }))
            .await
    }

    pub async fn resend_otp(&self, phone: &str) -> Result<()> {
        self.post_no_data("auth/resend-otp", &serde_json::json!({ "phone": phone }))
            .await
    }

    /// Verify a one-time passcode; success yields a full login payload
    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<LoginData> {
        self.post("auth/verify-otp", request).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        self.post_no_data("auth/forgot-password", &serde_json::json!({ "email": email }))
            .await
    }

    pub async fn validate_reset_token(&self, token: &str) -> Result<()> {
        self.post_no_data(
            "auth/validate-reset-token",
            &serde_json::json!({ "token": token }),
        )
        .await
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<()> {
        self.post_no_data("auth/reset-password", request).await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<()> {
        self.post_no_data("auth/change-password", request).await
    }

    /// Fetch the identity behind the current bearer token
    pub async fn me(&self) -> Result<AuthenticatedUser> {
        self.get("auth/me").await
    }

    // ===== Navigation links =====

    pub async fn fetch_navlinks(&self, filter: &NavlinkFilter) -> Result<Vec<NavLink>> {
        let url = self.url("nav-link");
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .query(filter)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        Self::decode(response, &url).await
    }

    pub async fn fetch_navlinks_for_role(&self, role: &str) -> Result<Vec<NavLink>> {
        self.get(&format!("nav-link/role/{}", role)).await
    }

    pub async fn fetch_navlink(&self, role: &str, index: &str) -> Result<NavLink> {
        self.get(&format!("nav-link/{}/{}", role, index)).await
    }

    pub async fn create_navlink(&self, payload: &NavlinkPayload) -> Result<NavLink> {
        self.post("nav-link", payload).await
    }

    pub async fn update_navlink(
        &self,
        role: &str,
        index: &str,
        payload: &NavlinkPayload,
    ) -> Result<NavLink> {
        self.put(&format!("nav-link/{}/{}", role, index), payload)
            .await
    }

    pub async fn delete_navlink(&self, role: &str, index: &str) -> Result<()> {
        self.delete(&format!("nav-link/{}/{}", role, index)).await
    }

    // ===== Color themes =====

    pub async fn fetch_themes(&self) -> Result<Vec<ColorTheme>> {
        self.get("color-theme").await
    }

    pub async fn fetch_theme(&self, role: &str, theme_name: &str) -> Result<ColorTheme> {
        self.get(&format!("color-theme/{}/{}", role, theme_name))
            .await
    }

    pub async fn create_theme(&self, theme: &ColorTheme) -> Result<ColorTheme> {
        self.post("color-theme", theme).await
    }

    pub async fn update_theme(
        &self,
        role: &str,
        theme_name: &str,
        theme: &ColorTheme,
    ) -> Result<ColorTheme> {
        self.put(&format!("color-theme/{}/{}", role, theme_name), theme)
            .await
    }

    pub async fn delete_theme(&self, role: &str, theme_name: &str) -> Result<()> {
        self.delete(&format!("color-theme/{}/{}", role, theme_name))
            .await
    }

    // ===== Plumbing =====

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    /// Returns Ok(Some(response)) for success, Ok(None) for rate limit
    /// (should retry), or Err for other errors.
    async fn check_response_for_retry(
        response: reqwest::Response,
    ) -> Result<Option<reqwest::Response>> {
        if response.status().is_success() {
            Ok(Some(response))
        } else if response.status().as_u16() == 429 {
            Ok(None)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response, url: &str) -> Result<T> {
        let envelope: Envelope<T> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))?;
        Ok(envelope.data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let response = self
                .client
                .get(&url)
                .headers(self.auth_headers()?)
                .send()
                .await
                .with_context(|| format!("Failed to send GET request to {}", url))?;

            match Self::check_response_for_retry(response).await? {
                Some(response) => return Self::decode(response, &url).await,
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(url = %url, retry = retries, backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2;
                }
            }
        }
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;
        Self::decode(response, &url).await
    }

    /// POST where the caller only cares about success (OTP sends,
    /// password flows); the envelope body is discarded.
    async fn post_no_data<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        Self::check_response(response).await?;
        Ok(())
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send PUT request to {}", url))?;

        let response = Self::check_response(response).await?;
        Self::decode(response, &url).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        let response = self
            .client
            .delete(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .with_context(|| format!("Failed to send DELETE request to {}", url))?;

        Self::check_response(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slashes() {
        let client = ApiClient::new("https://api.example.com/api/v1/").unwrap();
        assert_eq!(
            client.url("/auth/login"),
            "https://api.example.com/api/v1/auth/login"
        );
        assert_eq!(
            client.url("nav-link/ADMIN/1"),
            "https://api.example.com/api/v1/nav-link/ADMIN/1"
        );
    }

    #[test]
    fn test_login_request_omits_unset_fields() {
        let request = LoginRequest::with_email("asha@example.com", "secret");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"email\""));
        assert!(json.contains("\"password\""));
        assert!(!json.contains("phoneNumber"));
        assert!(!json.contains("otp"));
    }

    #[test]
    fn test_envelope_unwraps_data() {
        let json = r#"{ "data": { "id": "n-1", "roleCode": "ADMIN", "index": "1",
                         "name": "Home", "path": "/" },
                        "message": "ok" }"#;
        let envelope: Envelope<NavLink> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.name, "Home");
        assert_eq!(envelope.data.role_code, "ADMIN");
    }
}
