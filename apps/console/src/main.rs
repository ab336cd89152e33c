#![allow(non_snake_case)]

mod config;
mod fixtures;
mod hooks;
mod models;
mod state;
mod ui;

use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use state::{use_app_state, AppState};
use tracing::info;
use ui::layout::Layout;
use ui::login::LoginPage;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    bootstrap();
    launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

fn bootstrap() {
    let config = AppConfig::from_env();
    info!(profile = ?config.profile, "console configured");
    let _ = APP_CONFIG.set(config);
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::restored);

    use_context_provider(|| app_state);

    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

/// Projects the current session onto exactly one of two subtrees: the
/// admin layout when an operator is signed in, the login prompt otherwise.
/// Re-renders whenever the session signal changes.
#[component]
fn Home() -> Element {
    let state = use_app_state();
    let signed_in = state.read().session.is_some();

    if signed_in {
        rsx! { Layout {} }
    } else {
        rsx! { LoginPage {} }
    }
}
