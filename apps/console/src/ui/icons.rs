use dioxus::prelude::*;

use crate::models::NotificationIcon;

/// Decorative icon badge for a notification row. Purely presentational;
/// the data model only carries the [`NotificationIcon`] tag.
#[component]
pub fn IconBadge(icon: NotificationIcon) -> Element {
    let (accent, glyph) = icon_parts(icon);

    rsx! {
        span { class: "flex h-8 w-8 shrink-0 items-center justify-center rounded-full {accent}",
            svg {
                class: "h-4 w-4",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: glyph }
            }
        }
    }
}

fn icon_parts(icon: NotificationIcon) -> (&'static str, &'static str) {
    match icon {
        NotificationIcon::Zap => (
            "bg-amber-100 text-amber-600",
            "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
        ),
        NotificationIcon::Trash => (
            "bg-slate-200 text-slate-600",
            "M3 6h18M8 6V4h8v2M6 6l1 14h10l1-14",
        ),
        NotificationIcon::Truck => (
            "bg-sky-100 text-sky-600",
            "M1 7h14v8H1zM15 10h4l3 3v2h-7zM7 18.5a1.5 1.5 0 1 1-3 0 1.5 1.5 0 0 1 3 0zM20 18.5a1.5 1.5 0 1 1-3 0 1.5 1.5 0 0 1 3 0z",
        ),
        NotificationIcon::AlertCircle => (
            "bg-red-100 text-red-600",
            "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18zM12 8v5M12 16v.5",
        ),
        NotificationIcon::CheckCircle => (
            "bg-emerald-100 text-emerald-600",
            "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18zM8.5 12l2.5 2.5 4.5-5",
        ),
    }
}
