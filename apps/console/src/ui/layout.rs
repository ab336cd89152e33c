use dioxus::prelude::*;

use crate::hooks::dashboard::use_dashboard_loader;
use crate::state::{unread_count, use_app_actions, use_app_state};
use crate::ui::issues::IssueBoard;
use crate::ui::notifications::NotificationPanel;

/// Authenticated shell: header with the signed-in operator and unread
/// badge, then the dashboard grid.
#[component]
pub fn Layout() -> Element {
    use_dashboard_loader();

    let mut actions = use_app_actions();
    let state = use_app_state();

    let snapshot = state.read();
    let operator = snapshot
        .session
        .as_ref()
        .map(|session| session.display_name.clone())
        .unwrap_or_default();
    let unread = unread_count(&snapshot.dashboard.notifications);
    drop(snapshot);

    rsx! {
        div { class: "min-h-screen bg-slate-100",
            header { class: "flex items-center justify-between border-b border-slate-200 bg-white px-6 py-3",
                div {
                    h1 { class: "text-lg font-semibold text-slate-900", "NagarSeva Console" }
                    p { class: "text-xs text-slate-500", "Municipal issue tracking" }
                }
                div { class: "flex items-center gap-4",
                    span { class: "rounded-full bg-slate-900 px-2 py-1 text-[11px] font-medium text-white",
                        "{unread} unread"
                    }
                    span { class: "text-sm text-slate-600", "{operator}" }
                    button {
                        class: "rounded border border-slate-300 px-3 py-1 text-xs text-slate-600 transition hover:bg-slate-200",
                        onclick: move |_| actions.sign_out(),
                        "Sign out"
                    }
                }
            }
            main { class: "mx-auto max-w-6xl p-6",
                div { class: "grid gap-4 lg:grid-cols-[2fr_1fr]",
                    IssueBoard {}
                    NotificationPanel {}
                }
            }
        }
    }
}
