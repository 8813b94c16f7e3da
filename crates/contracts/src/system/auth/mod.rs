use crate::system::storage::{
    load_json, save_json, KeyValueStore, StorageError, IS_LOGGED_IN_KEY, USER_KEY,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single administrative account.
pub const ADMIN_USERNAME: &str = "Admin";
pub const ADMIN_PASSWORD: &str = "Admin";

/// Artificial delay before a login attempt is checked.
pub const LOGIN_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.username == ADMIN_USERNAME && self.password == ADMIN_PASSWORD
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
    #[error("could not persist session: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(Session),
}

/// Logged-in identity of the dashboard user.
///
/// Created by [`SessionGate::restore`] at startup, moved to `LoggedIn` by a
/// successful [`login`](SessionGate::login) and back by
/// [`logout`](SessionGate::logout). The view tree receives it as context
/// instead of reading storage directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionGate {
    state: SessionState,
}

impl SessionGate {
    /// Rebuilds the gate from a previously persisted session. A missing or
    /// malformed `user` entry means logged out.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let state = match load_json::<Session>(store, USER_KEY) {
            Some(session) => SessionState::LoggedIn(session),
            None => SessionState::LoggedOut,
        };
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            SessionState::LoggedIn(session) => Some(session),
            SessionState::LoggedOut => None,
        }
    }

    /// Checks the credential pair. On a mismatch or a failed write nothing is
    /// left in storage and the gate stays where it was.
    pub fn login(
        &mut self,
        credentials: &Credentials,
        store: &dyn KeyValueStore,
    ) -> Result<Session, AuthError> {
        if !credentials.is_admin() {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            name: credentials.username.clone(),
        };
        save_json(store, USER_KEY, &session)?;
        if credentials.remember_me {
            if let Err(e) = store.set_item(IS_LOGGED_IN_KEY, "true") {
                store.remove_item(USER_KEY);
                return Err(e.into());
            }
        }

        self.state = SessionState::LoggedIn(session.clone());
        Ok(session)
    }

    /// Drops the session and everything persisted for it.
    pub fn logout(&mut self, store: &dyn KeyValueStore) {
        store.remove_item(USER_KEY);
        store.remove_item(IS_LOGGED_IN_KEY);
        self.state = SessionState::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::storage::MemoryStore;

    #[test]
    fn correct_pair_logs_in_and_persists_user() {
        let store = MemoryStore::new();
        let mut gate = SessionGate::restore(&store);
        assert!(!gate.is_logged_in());

        let session = gate.login(&Credentials::new("Admin", "Admin"), &store).unwrap();
        assert_eq!(session.name, "Admin");
        assert!(gate.is_logged_in());
        assert_eq!(store.get_item(USER_KEY).as_deref(), Some(r#"{"name":"Admin"}"#));
        assert_eq!(store.get_item(IS_LOGGED_IN_KEY), None);
    }

    #[test]
    fn remember_me_sets_flag() {
        let store = MemoryStore::new();
        let mut gate = SessionGate::default();
        let credentials = Credentials {
            remember_me: true,
            ..Credentials::new("Admin", "Admin")
        };
        gate.login(&credentials, &store).unwrap();
        assert_eq!(store.get_item(IS_LOGGED_IN_KEY).as_deref(), Some("true"));
    }

    /// Accepts every write except the login flag.
    struct FlagRejectingStore(MemoryStore);

    impl KeyValueStore for FlagRejectingStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == IS_LOGGED_IN_KEY {
                return Err(StorageError::Unavailable);
            }
            self.0.set_item(key, value)
        }

        fn remove_item(&self, key: &str) {
            self.0.remove_item(key)
        }
    }

    #[test]
    fn failed_flag_write_leaves_no_session() {
        let store = FlagRejectingStore(MemoryStore::new());
        let mut gate = SessionGate::default();
        let credentials = Credentials {
            remember_me: true,
            ..Credentials::new("Admin", "Admin")
        };

        let err = gate.login(&credentials, &store).unwrap_err();
        assert_eq!(err, AuthError::Storage(StorageError::Unavailable));
        assert!(!gate.is_logged_in());
        assert!(store.0.is_empty());
        assert!(!SessionGate::restore(&store).is_logged_in());
    }

    #[test]
    fn mismatch_keeps_logged_out_and_writes_nothing() {
        let store = MemoryStore::new();
        let mut gate = SessionGate::default();
        for (user, pass) in [("admin", "Admin"), ("Admin", "admin"), ("", ""), ("Admin", "")] {
            let err = gate.login(&Credentials::new(user, pass), &store).unwrap_err();
            assert_eq!(err, AuthError::InvalidCredentials);
        }
        assert!(!gate.is_logged_in());
        assert!(store.is_empty());
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials. Please try again."
        );
    }

    #[test]
    fn restore_and_logout_cycle() {
        let store = MemoryStore::new();
        SessionGate::default()
            .login(&Credentials::new("Admin", "Admin"), &store)
            .unwrap();

        let mut restored = SessionGate::restore(&store);
        assert_eq!(restored.session().map(|s| s.name.as_str()), Some("Admin"));

        restored.logout(&store);
        assert_eq!(restored.state(), &SessionState::LoggedOut);
        assert!(store.is_empty());
        assert!(!SessionGate::restore(&store).is_logged_in());
    }

    #[test]
    fn malformed_session_restores_as_logged_out() {
        let store = MemoryStore::new();
        store.set_item(USER_KEY, "Admin").unwrap();
        assert!(!SessionGate::restore(&store).is_logged_in());
    }
}
