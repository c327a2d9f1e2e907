use crate::context::AppContext;
use crate::session::use_session;
use ahub::features::navigation::NavigationState;
use dioxus::prelude::*;
use tracing::warn;

/// Signed-in user, language switcher and sign-out.
#[component]
pub fn Header(state: Signal<NavigationState>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let router = navigator();

    let (name, role, plan) = session.read().user.as_ref().map_or_else(
        || (String::new(), String::from("unknown"), None),
        |user| {
            let role = user.role.map_or_else(|| String::from("unknown"), |r| r.to_string());
            (user.display_name.clone(), role, user.subscription_plan.clone())
        },
    );
    let current = state.read().language();
    let languages = state.read().languages().to_vec();

    let sign_out = move |_| {
        let ctx = ctx.clone();
        router.replace(ctx.config.routes.login_path.clone());
        spawn(async move {
            if let Err(err) = ctx.sessions.store.sign_out(&*ctx.provider).await {
                warn!(%err, "Sign-out not confirmed by the provider");
            }
        });
    };

    rsx! {
        header { class: "topbar",
            div { class: "who",
                strong { "{name}" }
                span { class: "badge", "{role}" }
                if let Some(plan) = plan {
                    span { class: "plan", "{plan}" }
                }
            }
            select {
                value: "{current.code()}",
                onchange: move |evt: FormEvent| {
                    let mut state = state;
                    if let Err(err) = state.write().set_language(&evt.value()) {
                        warn!(%err, "Language not switched");
                    }
                },
                for language in languages {
                    option { key: "{language.code()}", value: "{language.code()}", "{language.native_name()}" }
                }
            }
            button { class: "ghost", onclick: sign_out, "Sign out" }
        }
    }
}
