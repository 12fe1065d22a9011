use crate::models::AuthenticatedUser;
use crate::session::store::{ExpiryCheck, SessionStore};

/// Result of the protected-view access check.
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// A valid session is present; the view may render.
    Granted(AuthenticatedUser),
    /// No usable session. `notice` carries the expiry message when one
    /// was queued; the shell displays it and redirects to the login
    /// entry point.
    Denied { notice: Option<String> },
}

/// Run the idle-expiry check and decide whether a protected view may be
/// shown. Invoked by the routing layer before each protected mount.
pub fn authorize(store: &mut SessionStore) -> Access {
    if store.check_and_enforce_expiry() == ExpiryCheck::Active {
        if let Some(user) = store.session() {
            return Access::Granted(user.clone());
        }
    }

    Access::Denied {
        notice: store.take_notice(),
    }
}
