use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{AuthenticatedUser, ColorTheme, LoginData, NavLink};
use crate::storage::{
    LocalStore, KEY_DEFAULT_THEME, KEY_NAVLINKS, KEY_RELOGIN_TIMESTAMP, KEY_THEMES, KEY_USER,
};

/// Idle-session lifetime in hours.
/// A session older than this is cleared on the next access check.
const SESSION_IDLE_HOURS: i64 = 24;

/// Notice queued for the user when an expired session is detected
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Please log in again.";

/// Outcome of the on-access expiry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryCheck {
    /// Idle-period marker present and within the window; nothing done.
    Active,
    /// No idle-period marker: never logged in (or already handled).
    /// Stray state has been wiped; no notice, no redirect needed.
    NotLoggedIn,
    /// The idle window elapsed. State and marker are cleared, a notice
    /// is queued, and the caller should redirect to the login entry.
    Expired,
}

/// Container for authentication and presentation state.
///
/// Owns the in-memory copies of the session, theme catalog, active
/// theme, and navigation links for the lifetime of the console
/// instance; durable storage is a mirror, seeded once at construction
/// and re-written synchronously on every mutation. One instance is
/// created at application start and threaded through the composition
/// root; none of its operations error.
pub struct SessionStore {
    storage: LocalStore,
    user: Option<AuthenticatedUser>,
    themes: Option<Vec<ColorTheme>>,
    default_theme: Option<ColorTheme>,
    navlinks: Option<Vec<NavLink>>,
    /// One-shot flag so repeated expiry checks within the same instance
    /// don't re-fire the cleanup and notice. Deliberately not persisted,
    /// matching a per-page-load guard.
    expiry_handled: bool,
    pending_notice: Option<String>,
}

impl SessionStore {
    /// Create a store seeded from durable storage.
    pub fn new(storage: LocalStore) -> Self {
        let user = storage.read(KEY_USER);
        let themes = storage.read(KEY_THEMES);
        let default_theme = storage.read(KEY_DEFAULT_THEME);
        let navlinks = storage.read(KEY_NAVLINKS);

        Self {
            storage,
            user,
            themes,
            default_theme,
            navlinks,
            expiry_handled: false,
            pending_notice: None,
        }
    }

    // ===== Session =====

    pub fn session(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    /// Replace the session. A concrete value begins a new authenticated
    /// period: the idle-period marker is stamped with the current time
    /// and the expiry guard resets. `None` removes the durable record.
    pub fn set_session(&mut self, user: Option<AuthenticatedUser>) {
        if user.is_some() {
            self.persist(KEY_RELOGIN_TIMESTAMP, Some(&Utc::now()));
            self.expiry_handled = false;
        }
        self.user = user;
        self.persist(KEY_USER, self.user.as_ref());
    }

    // ===== Theme catalog =====

    pub fn themes(&self) -> Option<&[ColorTheme]> {
        self.themes.as_deref()
    }

    pub fn set_themes(&mut self, themes: Option<Vec<ColorTheme>>) {
        self.themes = themes;
        self.persist(KEY_THEMES, self.themes.as_ref());
    }

    // ===== Active theme =====

    pub fn default_theme(&self) -> Option<&ColorTheme> {
        self.default_theme.as_ref()
    }

    /// Change the active theme. The catalog is untouched.
    pub fn set_default_theme(&mut self, theme: Option<ColorTheme>) {
        self.default_theme = theme;
        self.persist(KEY_DEFAULT_THEME, self.default_theme.as_ref());
    }

    // ===== Navigation links =====

    pub fn navlinks(&self) -> Option<&[NavLink]> {
        self.navlinks.as_deref()
    }

    pub fn set_navlinks(&mut self, navlinks: Option<Vec<NavLink>>) {
        self.navlinks = navlinks;
        self.persist(KEY_NAVLINKS, self.navlinks.as_ref());
    }

    // ===== Login / logout =====

    /// Populate the store from a login, registration, or OTP
    /// verification response.
    pub fn apply_login(&mut self, data: LoginData) {
        self.set_session(Some(data.user()));
        self.set_themes(data.themes);
        self.set_default_theme(data.default_theme);
        self.set_navlinks(data.navlinks);
    }

    /// Clear everything: session, theme catalog, active theme, nav
    /// links, the idle-period marker, and the expiry guard. Idempotent.
    /// Does not navigate; callers redirect afterward.
    pub fn logout(&mut self) {
        debug!("Clearing session state");
        self.clear_all();
        self.expiry_handled = false;
    }

    /// Whether a session is currently held in memory
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    // ===== Expiry =====

    /// Evaluate the idle-expiry policy against the durable marker.
    ///
    /// Run by the route guard whenever a protected view is about to be
    /// granted. See `ExpiryCheck` for the outcomes.
    pub fn check_and_enforce_expiry(&mut self) -> ExpiryCheck {
        let marker: Option<DateTime<Utc>> = self.storage.read(KEY_RELOGIN_TIMESTAMP);

        let Some(marker) = marker else {
            // Never logged in: wipe any stray state, but this is not an
            // expiry and gets no notice.
            self.clear_all();
            return ExpiryCheck::NotLoggedIn;
        };

        let elapsed = Utc::now() - marker;
        if elapsed >= Duration::hours(SESSION_IDLE_HOURS) {
            if self.expiry_handled {
                // Already handled in this instance; don't re-fire
                return ExpiryCheck::NotLoggedIn;
            }
            self.expiry_handled = true;
            self.clear_all();
            self.pending_notice = Some(SESSION_EXPIRED_NOTICE.to_string());
            debug!(idle_hours = SESSION_IDLE_HOURS, "Session expired, state cleared");
            ExpiryCheck::Expired
        } else {
            ExpiryCheck::Active
        }
    }

    /// Take the pending user-facing notice, if one was queued.
    pub fn take_notice(&mut self) -> Option<String> {
        self.pending_notice.take()
    }

    // ===== Internals =====

    fn clear_all(&mut self) {
        self.user = None;
        self.themes = None;
        self.default_theme = None;
        self.navlinks = None;
        self.persist::<AuthenticatedUser>(KEY_USER, None);
        self.persist::<Vec<ColorTheme>>(KEY_THEMES, None);
        self.persist::<ColorTheme>(KEY_DEFAULT_THEME, None);
        self.persist::<Vec<NavLink>>(KEY_NAVLINKS, None);
        self.persist::<DateTime<Utc>>(KEY_RELOGIN_TIMESTAMP, None);
    }

    /// Mirror one key to durable storage. Write failures are logged and
    /// swallowed; the store contract is that mutations never raise.
    fn persist<T: Serialize>(&self, key: &str, value: Option<&T>) {
        let result = match value {
            Some(value) => self.storage.write(key, value),
            None => self.storage.remove(key),
        };
        if let Err(e) = result {
            warn!(key, error = %e, "Failed to sync durable storage");
        }
    }
}
