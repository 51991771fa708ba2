use std::sync::{Arc, Mutex};

/// The signed-in player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    display_name: String,
}

impl UserProfile {
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// First whitespace-separated token of the display name, used for the
    /// menu greeting.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.display_name)
    }
}

/// Whether anyone is signed in right now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(UserProfile),
}

impl SessionState {
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::SignedOut => None,
            Self::SignedIn(profile) => Some(profile),
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}

/// Callback invoked whenever the session state changes.
pub type SessionListener = Arc<dyn Fn(&SessionState) + Send + Sync>;

/// Sign-in backend. The UI only talks to this trait, so the desktop
/// build can ship a local provider while a hosted build plugs in a real
/// identity service.
pub trait IdentityProvider: Send + Sync {
    fn current(&self) -> SessionState;
    fn sign_in(&self);
    fn sign_out(&self);
    fn subscribe(&self, listener: SessionListener);
}

/// Provider that signs in a locally configured profile.
pub struct LocalIdentity {
    profile: UserProfile,
    state: Mutex<SessionState>,
    listeners: Mutex<Vec<SessionListener>>,
}

impl LocalIdentity {
    #[must_use]
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            state: Mutex::new(SessionState::SignedOut),
            listeners: Mutex::new(Vec::new()),
        }
    }

    fn transition(&self, next: SessionState) {
        if let Ok(mut state) = self.state.lock() {
            if *state == next {
                return;
            }
            *state = next.clone();
        }
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(&next);
            }
        }
    }
}

impl IdentityProvider for LocalIdentity {
    fn current(&self) -> SessionState {
        self.state
            .lock()
            .map(|state| state.clone())
            .unwrap_or_default()
    }

    fn sign_in(&self) {
        self.transition(SessionState::SignedIn(self.profile.clone()));
    }

    fn sign_out(&self) {
        self.transition(SessionState::SignedOut);
    }

    fn subscribe(&self, listener: SessionListener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn first_name_is_the_leading_token() {
        assert_eq!(UserProfile::new("Ada Lovelace").first_name(), "Ada");
        assert_eq!(UserProfile::new("Sam").first_name(), "Sam");
        assert_eq!(UserProfile::new("").first_name(), "");
    }

    #[test]
    fn sign_in_and_out_notify_subscribers() {
        let identity = LocalIdentity::new(UserProfile::new("Ada Lovelace"));
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        identity.subscribe(Arc::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(!identity.current().is_signed_in());
        identity.sign_in();
        assert!(identity.current().is_signed_in());
        identity.sign_out();
        assert!(!identity.current().is_signed_in());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn repeated_sign_in_does_not_refire() {
        let identity = LocalIdentity::new(UserProfile::new("Ada"));
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        identity.subscribe(Arc::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        identity.sign_in();
        identity.sign_in();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
