use dioxus::prelude::*;

use crate::models::{Issue, IssueStatus, Priority};
use crate::state::use_app_state;

const BADGE_CLASS: &str = "rounded-full px-2 py-0.5 text-[11px] font-medium";

fn status_accent(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Pending => "bg-amber-100 text-amber-700",
        IssueStatus::InProgress => "bg-sky-100 text-sky-700",
        IssueStatus::Resolved => "bg-emerald-100 text-emerald-700",
        IssueStatus::Error => "bg-red-100 text-red-700",
    }
}

fn priority_accent(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "bg-slate-100 text-slate-600",
        Priority::Medium => "bg-sky-100 text-sky-700",
        Priority::High => "bg-amber-100 text-amber-700",
        Priority::Critical => "bg-red-100 text-red-700",
    }
}

#[component]
pub fn IssueBoard() -> Element {
    let state = use_app_state();

    let snapshot = state.read();
    let dashboard = snapshot.dashboard.clone();
    drop(snapshot);

    let total = dashboard.issues.len();

    rsx! {
        section { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            div { class: "flex items-center justify-between",
                h2 { class: "text-sm font-semibold text-slate-900", "Reported issues" }
                span { class: "text-xs text-slate-500", "{total} total" }
            }
            if dashboard.is_loading {
                p { class: "text-xs text-slate-500", "Loading demo data…" }
            }
            if let Some(ref error) = dashboard.error {
                p { class: "text-xs text-red-600", "{error}" }
            }
            if !dashboard.is_loading && dashboard.error.is_none() && total == 0 {
                p { class: "text-xs text-slate-500", "No issues reported yet." }
            }
            div { class: "space-y-3",
                for issue in dashboard.issues.iter() {
                    IssueCard { issue: issue.clone() }
                }
            }
        }
    }
}

#[component]
fn IssueCard(issue: Issue) -> Element {
    let status_class = format!("{BADGE_CLASS} {}", status_accent(issue.status));
    let priority_class = format!("{BADGE_CLASS} {}", priority_accent(issue.priority));
    let status_label = issue.status.label();
    let priority_label = issue.priority.label();
    let department_label = issue.department.label();
    let submitted = issue.submitted_at.date().to_string();
    let distance = format!("{:.1} km away", issue.distance_km);
    let resolution_line = issue.resolution.as_ref().map(|resolution| {
        (
            format!(
                "Resolved by {} on {}",
                resolution.resolved_by,
                resolution.resolved_at.date()
            ),
            resolution.notes.clone(),
        )
    });

    rsx! {
        article { class: "space-y-2 rounded-lg border border-slate-200 p-3",
            div { class: "flex items-start justify-between gap-3",
                div {
                    h3 { class: "text-sm font-semibold text-slate-900", "{issue.title}" }
                    p { class: "text-[11px] text-slate-500",
                        "#{issue.id} · {department_label} · submitted {submitted}"
                    }
                }
                div { class: "flex shrink-0 gap-1",
                    span { class: "{status_class}", "{status_label}" }
                    span { class: "{priority_class}", "{priority_label}" }
                }
            }
            p { class: "text-xs text-slate-700", "{issue.description}" }
            p { class: "text-[11px] text-slate-500", "{issue.location_address} · {distance}" }
            p { class: "text-[11px] text-slate-500",
                "Reported by {issue.user_id} · {issue.user_contact}"
            }
            p { class: "text-[11px] italic text-slate-500", "{issue.notes}" }
            if !issue.questions.is_empty() {
                ul { class: "list-inside list-disc text-[11px] text-slate-500",
                    for question in issue.questions.iter() {
                        li { "{question}" }
                    }
                }
            }
            if let Some((line, notes)) = resolution_line {
                div { class: "rounded border border-emerald-200 bg-emerald-50 p-2",
                    p { class: "text-[11px] font-medium text-emerald-700", "{line}" }
                    p { class: "text-[11px] text-emerald-700", "{notes}" }
                }
            }
        }
    }
}
