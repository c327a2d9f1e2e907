use crate::context::AppContext;
use crate::session::use_session;
use ahub::features::session::Credentials;
use dioxus::prelude::*;
use tracing::debug;

/// Sign-in form. `next` is where the guard was heading when it sent the user here.
#[component]
pub fn Login(next: String) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let router = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let target = ctx.access.gate.after_login(Some(&next)).to_owned();

    if session.read().is_authenticated() {
        return rsx! {
            section { class: "login",
                p { "You are already signed in." }
                Link { to: target, "Continue" }
            }
        };
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        pending.set(true);

        let ctx = ctx.clone();
        let target = target.clone();
        let credentials = Credentials::new(email(), password());
        spawn(async move {
            match ctx.sessions.store.sign_in(&*ctx.provider, credentials).await {
                Ok(user) => {
                    debug!(user = %user.user_id, to = %target, "Signed in");
                    error.set(None);
                    router.replace(target);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    rsx! {
        section { class: "login",
            h1 { "Sign in" }
            form { onsubmit: submit,
                label { "Email"
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "error", "{message}" }
                }
                button { class: "primary", r#type: "submit", disabled: pending(), "Sign in" }
            }
            p { class: "hint", "Demo accounts: influencer@demo.test, merchant@demo.test, admin@demo.test, commercial@demo.test (password: demo)" }
        }
    }
}
