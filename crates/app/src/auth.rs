use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{Session, Tab, ViewState};

/// Who is signed in and what the shell is showing.
///
/// Held in memory only; a reload starts from the login screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Option<Session>>,
    pub view: Signal<ViewState>,
    anonymous: Signal<ApiClient>,
}

impl SessionState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            session: Signal::new(None),
            view: Signal::new(ViewState::default()),
            anonymous: Signal::new(client),
        }
    }

    /// Client without an identity header, used for login only.
    pub fn login_client(&self) -> ApiClient {
        self.anonymous.read().clone()
    }

    /// Client carrying the signed-in employee's email.
    pub fn client(&self) -> ApiClient {
        let base = self.anonymous.read();
        match self.session.read().as_ref() {
            Some(session) => base.for_session(session),
            None => base.clone(),
        }
    }

    pub fn email(&self) -> String {
        self.session
            .read()
            .as_ref()
            .map(|s| s.email.clone())
            .unwrap_or_default()
    }

    pub fn employee_name(&self) -> String {
        self.session
            .read()
            .as_ref()
            .map(|s| s.employee_name.clone())
            .unwrap_or_default()
    }

    pub fn sign_in(&mut self, session: Session) {
        self.view.set(ViewState::for_session(&session));
        self.session.set(Some(session));
    }

    pub fn sign_out(&mut self) {
        tracing::info!("Employee signed out");
        self.view.write().logout();
        self.session.set(None);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if !self.view.write().select_tab(tab) {
            tracing::warn!(tab = tab.as_str(), "Ignoring tab outside the current dashboard");
        }
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
