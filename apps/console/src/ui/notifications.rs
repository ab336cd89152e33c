use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::state::{unread_count, use_app_actions, use_app_state};
use crate::ui::icons::IconBadge;

/// Panel listing the generated notifications; clicking a row marks it read.
#[component]
pub fn NotificationPanel() -> Element {
    let mut actions = use_app_actions();
    let state = use_app_state();

    let snapshot = state.read();
    let notifications = snapshot.dashboard.notifications.clone();
    drop(snapshot);

    let now = OffsetDateTime::now_utc();
    let unread = unread_count(&notifications);

    rsx! {
        section { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            div { class: "flex items-center justify-between",
                h2 { class: "text-sm font-semibold text-slate-900", "Notifications" }
                button {
                    class: "rounded border border-slate-300 px-2 py-1 text-[11px] text-slate-600 transition hover:bg-slate-200 disabled:opacity-50",
                    disabled: unread == 0,
                    onclick: move |_| actions.mark_all_notifications_read(),
                    "Mark all read"
                }
            }
            if notifications.is_empty() {
                p { class: "text-xs text-slate-500", "No notifications yet." }
            }
            ul { class: "space-y-2",
                {notifications.iter().map(|notification| {
                    let id = notification.id;
                    let row_class = if notification.read {
                        "flex cursor-pointer items-start gap-3 rounded-lg border border-slate-100 p-2"
                    } else {
                        "flex cursor-pointer items-start gap-3 rounded-lg border border-slate-200 bg-slate-50 p-2"
                    };
                    let when = format_relative(notification.timestamp, now);
                    rsx! {
                        li {
                            key: "{id}",
                            class: row_class,
                            onclick: move |_| actions.mark_notification_read(id),
                            IconBadge { icon: notification.icon }
                            div { class: "min-w-0 flex-1 space-y-0.5",
                                div { class: "flex items-center justify-between gap-2",
                                    h3 { class: "text-xs font-semibold text-slate-900", "{notification.title}" }
                                    span { class: "shrink-0 text-[10px] text-slate-400", "{when}" }
                                }
                                p { class: "text-[11px] text-slate-600", "{notification.description}" }
                                if let Some(ref issue_id) = notification.issue_id {
                                    span { class: "font-mono text-[10px] text-slate-400", "#{issue_id}" }
                                }
                            }
                            if !notification.read {
                                span { class: "mt-1 h-2 w-2 shrink-0 rounded-full bg-sky-500" }
                            }
                        }
                    }
                })}
            }
        }
    }
}

/// "just now", "12m ago", "3h ago", "2d ago".
pub(crate) fn format_relative(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - timestamp;
    let minutes = elapsed.whole_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if elapsed.whole_hours() < 24 {
        format!("{}h ago", elapsed.whole_hours())
    } else {
        format!("{}d ago", elapsed.whole_days())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::Duration;

    use super::*;

    #[test]
    fn relative_times_pick_the_right_unit() {
        let now = OffsetDateTime::UNIX_EPOCH + Duration::days(365);
        assert_eq!(format_relative(now, now), "just now");
        assert_eq!(format_relative(now - Duration::seconds(59), now), "just now");
        assert_eq!(format_relative(now - Duration::minutes(12), now), "12m ago");
        assert_eq!(format_relative(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_relative(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_relative(now - Duration::days(2), now), "2d ago");
    }
}
