use contracts::system::auth::{AuthError, Credentials, Session, SessionGate};
use leptos::prelude::*;

use super::storage::LocalStore;

/// Session of the dashboard user, shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    gate: RwSignal<SessionGate>,
}

impl AuthContext {
    /// Restores a previously persisted session.
    pub fn restore() -> Self {
        let gate = SessionGate::restore(&LocalStore);
        if let Some(session) = gate.session() {
            log::info!("Restored session for {}", session.name);
        }
        Self {
            gate: RwSignal::new(gate),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.gate.with(|gate| gate.is_logged_in())
    }

    pub fn user_name(&self) -> Option<String> {
        self.gate
            .with(|gate| gate.session().map(|session| session.name.clone()))
    }

    pub fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let mut result = Err(AuthError::InvalidCredentials);
        self.gate.update(|gate| {
            result = gate.login(credentials, &LocalStore);
        });
        match &result {
            Ok(session) => log::info!("Login succeeded for {}", session.name),
            Err(e) => log::warn!("Login failed: {}", e),
        }
        result
    }

    pub fn logout(&self) {
        self.gate.update(|gate| gate.logout(&LocalStore));
        log::info!("Logged out");
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::restore());
    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
