//! Session context and hooks for the UI.
//!
//! [`AuthProvider`] restores the persisted session once, on mount, and shares
//! it as a `Signal<AuthState>`. Sign-in and sign-out go through
//! [`begin_session`] and [`end_session`], which keep the signal and browser
//! storage in step.

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, Session, User};

use crate::storage::make_session_store;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Client configuration provided by the platform package.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// An API client for the configured server, carrying the current token if any.
pub fn api_client(config: &ClientConfig, auth: &AuthState) -> ApiClient {
    ApiClient::new(config.api.base_url.clone()).with_token(auth.token())
}

/// API client for the lifetime of the calling component.
///
/// Captures the token present at mount; pages that need one are only
/// mounted while a session exists.
pub fn use_api_client() -> Signal<ApiClient> {
    let auth = use_auth();
    let config = use_config();
    use_signal(|| api_client(&config, &auth.peek()))
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| {
        let session = make_session_store().load();
        match &session {
            Some(s) => tracing::info!("Restored session for {}", s.user.username),
            None => tracing::debug!("No stored session"),
        }
        AuthState { session }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Persist `session` and publish it to the app.
pub fn begin_session(mut auth: Signal<AuthState>, session: Session) {
    if let Err(e) = make_session_store().save(&session) {
        tracing::error!("Failed to persist session: {}", e);
    }
    auth.set(AuthState {
        session: Some(session),
    });
}

/// Forget the stored session and publish the signed-out state.
pub fn end_session(mut auth: Signal<AuthState>) {
    make_session_store().clear();
    auth.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::routing::Page;

    static SIGNED_IN_AFTER_LOGIN: AtomicBool = AtomicBool::new(false);
    static STORED_AFTER_LOGIN: AtomicBool = AtomicBool::new(false);
    static SIGNED_IN_AFTER_LOGOUT: AtomicBool = AtomicBool::new(true);

    fn session() -> Session {
        Session {
            token: "abc".into(),
            user: User {
                id: 7,
                username: "dana".into(),
                email: "dana@example.org".into(),
                profile_picture: None,
                created_at: None,
                role: Some("user".into()),
            },
        }
    }

    #[test]
    fn test_signed_out_state() {
        let state = AuthState::default();
        assert!(!state.is_signed_in());
        assert!(state.user().is_none());
        assert!(state.token().is_none());
    }

    #[test]
    fn test_client_carries_session_token() {
        let state = AuthState {
            session: Some(session()),
        };
        assert_eq!(state.user().map(|u| u.id), Some(7));
        let client = api_client(&ClientConfig::new("http://tasks.test"), &state);
        assert_eq!(client.base_url(), "http://tasks.test");
    }

    #[component]
    fn SignInThenOut() -> Element {
        let auth = use_auth();
        use_hook(move || {
            begin_session(auth, session());
            SIGNED_IN_AFTER_LOGIN.store(auth.peek().is_signed_in(), Ordering::SeqCst);
            STORED_AFTER_LOGIN.store(make_session_store().load().is_some(), Ordering::SeqCst);
            end_session(auth);
            SIGNED_IN_AFTER_LOGOUT.store(auth.peek().is_signed_in(), Ordering::SeqCst);
        });
        rsx! {}
    }

    fn session_app() -> Element {
        rsx! {
            AuthProvider { SignInThenOut {} }
        }
    }

    #[test]
    fn test_logout_clears_storage_and_state() {
        let mut dom = VirtualDom::new(session_app);
        dom.rebuild_in_place();

        assert!(SIGNED_IN_AFTER_LOGIN.load(Ordering::SeqCst));
        assert!(STORED_AFTER_LOGIN.load(Ordering::SeqCst));
        let signed_in = SIGNED_IN_AFTER_LOGOUT.load(Ordering::SeqCst);
        assert!(!signed_in);
        assert!(make_session_store().load().is_none());
        assert_eq!(Page::Dashboard.redirect(signed_in), Some(Page::Login));
        assert_eq!(Page::Login.redirect(signed_in), None);
    }
}
