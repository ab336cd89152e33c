use dioxus::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::{AdminSession, Issue, Notification};

pub type AppSignal = Signal<AppState>;

#[cfg(target_arch = "wasm32")]
const SESSION_STORAGE_KEY: &str = "nagarseva.console.session";

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub issues: Vec<Issue>,
    pub notifications: Vec<Notification>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub session: Option<AdminSession>,
    pub dashboard: DashboardState,
}

impl AppState {
    /// Initial state with the persisted session, if any, restored from
    /// browser storage.
    pub fn restored() -> Self {
        Self {
            session: load_stored_session(),
            dashboard: DashboardState::default(),
        }
    }
}

/// Mutation facade over the app state signal.
#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn sign_in(&mut self, display_name: &str) {
        let session = AdminSession {
            operator_id: new_operator_id(),
            display_name: display_name.trim().to_string(),
            signed_in_at: OffsetDateTime::now_utc(),
        };
        store_session(Some(&session));
        tracing::info!(operator = %session.operator_id, "operator signed in");
        self.state.write().session = Some(session);
    }

    /// Clears the session and any loaded dashboard data.
    pub fn sign_out(&mut self) {
        store_session(None);
        *self.state.write() = AppState::default();
    }

    pub fn set_dashboard_loading(&mut self, loading: bool) {
        self.state.write().dashboard.is_loading = loading;
    }

    pub fn set_dashboard_error(&mut self, message: Option<String>) {
        let mut state = self.state.write();
        let failed = message.is_some();
        state.dashboard.error = message;
        if failed {
            state.dashboard.is_loading = false;
        }
    }

    pub fn set_dashboard_data(&mut self, issues: Vec<Issue>, notifications: Vec<Notification>) {
        let mut state = self.state.write();
        state.dashboard.issues = issues;
        state.dashboard.notifications = notifications;
        state.dashboard.is_loading = false;
        state.dashboard.error = None;
    }

    pub fn mark_notification_read(&mut self, id: Uuid) {
        let mut state = self.state.write();
        if let Some(notification) = state
            .dashboard
            .notifications
            .iter_mut()
            .find(|notification| notification.id == id)
        {
            notification.read = true;
        }
    }

    pub fn mark_all_notifications_read(&mut self) {
        let mut state = self.state.write();
        for notification in state.dashboard.notifications.iter_mut() {
            notification.read = true;
        }
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
    }
}

/// Demo credential rule: a name and a short passphrase, nothing more.
pub fn validate_credentials(name: &str, passphrase: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Enter your operator name.");
    }
    if passphrase.trim().len() < 4 {
        return Err("Passphrase must be at least 4 characters.");
    }
    Ok(())
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications
        .iter()
        .filter(|notification| !notification.read)
        .count()
}

fn new_operator_id() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("OPR{}", raw[..6].to_uppercase())
}

#[cfg(target_arch = "wasm32")]
fn load_stored_session() -> Option<AdminSession> {
    use gloo_storage::{LocalStorage, Storage};
    LocalStorage::get(SESSION_STORAGE_KEY).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_stored_session() -> Option<AdminSession> {
    None
}

#[cfg(target_arch = "wasm32")]
fn store_session(session: Option<&AdminSession>) {
    use gloo_storage::{LocalStorage, Storage};
    match session {
        Some(session) => {
            if let Err(err) = LocalStorage::set(SESSION_STORAGE_KEY, session) {
                tracing::warn!("failed to persist session: {err}");
            }
        }
        None => LocalStorage::delete(SESSION_STORAGE_KEY),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn store_session(_session: Option<&AdminSession>) {}
