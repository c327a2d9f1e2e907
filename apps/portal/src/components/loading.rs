use dioxus::prelude::*;

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "loading", role: "status",
            div { class: "spinner" }
            span { "Loading…" }
        }
    }
}
