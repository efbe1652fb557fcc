//! Login gate
//!
//! A placeholder check in front of the catalog. Any non-empty username and
//! password pair is accepted; nothing is hashed or stored.

/// Whether a credential pair passes the gate
pub fn attempt_login(username: &str, password: &str) -> bool {
    !username.is_empty() && !password.is_empty()
}

/// Tracks whether the current session has passed the gate
#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    user: Option<String>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to log in. A refused attempt leaves the gate unchanged.
    pub fn attempt_login(&mut self, username: &str, password: &str) -> bool {
        if !attempt_login(username, password) {
            log::debug!("Login refused: empty username or password");
            return false;
        }
        log::info!("Logged in as '{}'", username);
        self.user = Some(username.to_string());
        true
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
