use crate::context::AppContext;
use crate::navigator::RouterNavigator;
use ahub::features::access::DeniedNotice;
use dioxus::prelude::*;

/// Rendered in place of a page the role may not open. Stays put until the user leaves.
#[component]
pub fn DeniedView(notice: DeniedNotice) -> Element {
    let ctx = use_context::<AppContext>();
    let mut router = RouterNavigator::current();
    let roles: Vec<String> = notice.allowed.roles().map(|role| role.to_string()).collect();

    rsx! {
        section { class: "denied",
            h1 { "Access denied" }
            p { "{notice.message()}" }
            ul { class: "roles",
                for role in roles {
                    li { key: "{role}", "{role}" }
                }
            }
            code { "{notice.path}" }
            button {
                class: "primary",
                onclick: move |_| ctx.access.gate.leave_denied(&mut router),
                "Back to dashboard"
            }
        }
    }
}
