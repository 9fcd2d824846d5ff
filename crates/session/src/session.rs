use serde::Serialize;
use thiserror::Error;

use crate::route::Route;
use crate::storage::SessionStorage;

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USERNAME_KEY: &str = "username";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("display name cannot be empty")]
    EmptyName,
}

/// Logged-in user as shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    display_name: String,
}

impl Session {
    /// Restore the session from storage, if a user name was stored.
    pub fn load<S: SessionStorage + ?Sized>(storage: &S) -> Option<Session> {
        let name = storage.get(USERNAME_KEY)?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Session {
            display_name: name.to_string(),
        })
    }

    /// Store `display_name` as the current user. No credentials are checked.
    pub fn login<S: SessionStorage + ?Sized>(
        storage: &S,
        display_name: &str,
    ) -> Result<Session, SessionError> {
        let name = display_name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        storage.set(LOGGED_IN_KEY, "true".to_string());
        storage.set(USERNAME_KEY, name.to_string());
        tracing::info!(user = %name, "session opened");
        Ok(Session {
            display_name: name.to_string(),
        })
    }

    /// Clear stored session state; returns where to navigate next.
    pub fn logout<S: SessionStorage + ?Sized>(storage: &S) -> Route {
        storage.remove(LOGGED_IN_KEY);
        storage.remove(USERNAME_KEY);
        tracing::info!("session closed");
        Route::Login
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Placeholder address shown under the name.
    pub fn email(&self) -> String {
        format!("{}@example.com", self.display_name)
    }
}
