use dioxus::prelude::*;

use crate::state::{use_app_actions, validate_credentials};

#[component]
pub fn LoginPage() -> Element {
    let mut actions = use_app_actions();
    let mut name = use_signal(String::new);
    let mut passphrase = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<&'static str>::None);

    let error_text = *error_msg.read();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let name_value = name();
        match validate_credentials(&name_value, &passphrase()) {
            Ok(()) => {
                error_msg.set(None);
                actions.sign_in(&name_value);
            }
            Err(message) => error_msg.set(Some(message)),
        }
    };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-slate-100 px-4",
            form {
                class: "w-full max-w-sm space-y-4 rounded-lg border border-slate-200 bg-white p-6 shadow-sm",
                onsubmit: on_submit,
                div { class: "space-y-1",
                    h1 { class: "text-xl font-semibold text-slate-900", "NagarSeva Console" }
                    p { class: "text-sm text-slate-600", "Sign in to manage citizen-reported issues." }
                }
                div { class: "space-y-1",
                    label {
                        class: "text-xs font-medium text-slate-600",
                        r#for: "operator-name",
                        "Operator name"
                    }
                    input {
                        id: "operator-name",
                        class: "w-full rounded border border-slate-300 px-3 py-2 text-sm",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "space-y-1",
                    label {
                        class: "text-xs font-medium text-slate-600",
                        r#for: "operator-passphrase",
                        "Passphrase"
                    }
                    input {
                        id: "operator-passphrase",
                        class: "w-full rounded border border-slate-300 px-3 py-2 text-sm",
                        r#type: "password",
                        value: "{passphrase}",
                        oninput: move |evt| passphrase.set(evt.value()),
                    }
                }
                if let Some(message) = error_text {
                    p { class: "text-xs text-red-600", "{message}" }
                }
                button {
                    class: "w-full rounded bg-slate-900 px-3 py-2 text-sm font-medium text-white transition hover:bg-slate-700",
                    r#type: "submit",
                    "Sign in"
                }
            }
        }
    }
}
