use crate::context::AppContext;
use crate::routes::Route;
use crate::session::use_session;
use ahub::domain::menu::{MenuItem, MenuTarget};
use ahub::features::navigation::NavigationState;
use dioxus::prelude::*;
use tracing::{debug, warn};

#[component]
pub fn Sidebar(state: Signal<NavigationState>) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let menu = ctx.navigation.resolver.for_session_role(session.read().role()).to_vec();
    let location = use_route::<Route>().to_string();

    let resolver = ctx.navigation.resolver.clone();
    let locate = move |_| {
        let mut state = state;
        let menu = resolver.for_session_role(session.read().role());
        let path = location.split(['?', '#']).next().unwrap_or_default();
        if !state.write().reveal(menu, path) {
            debug!(path = %location, "Current page has no menu entry");
        }
    };

    rsx! {
        nav { class: "sidebar",
            div { class: "brand", "AffiliateHub" }
            button { class: "locate", title: "Show the current page in the menu", onclick: locate,
                i { class: "icon icon-locate" }
                span { "Current page" }
            }
            ul {
                for (id, item) in menu.into_iter().map(|item| (item.id.to_string(), item)) {
                    MenuEntry { key: "{id}", item, state }
                }
            }
        }
    }
}

#[component]
fn MenuEntry(item: MenuItem, state: Signal<NavigationState>) -> Element {
    match item.target {
        MenuTarget::Link { path } => rsx! {
            li {
                Link { to: path.to_string(), active_class: "active",
                    i { class: "icon icon-{item.icon}" }
                    span { "{item.label}" }
                }
            }
        },
        MenuTarget::Group { key, children } => {
            let open = state.read().is_expanded(&key);
            let toggle_key = key.to_string();
            rsx! {
                li { class: if open { "group open" } else { "group" },
                    button {
                        onclick: move |_| {
                            let mut state = state;
                            if let Err(err) = state.write().toggle(&toggle_key) {
                                warn!(%err, "Submenu toggle ignored");
                            }
                        },
                        i { class: "icon icon-{item.icon}" }
                        span { "{item.label}" }
                        i { class: if open { "chevron down" } else { "chevron" } }
                    }
                    if open {
                        ul {
                            for (id, child) in children.into_iter().map(|child| (format!("{key}/{}", child.id), child)) {
                                MenuEntry { key: "{id}", item: child, state }
                            }
                        }
                    }
                }
            }
        }
    }
}
