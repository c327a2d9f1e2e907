use crate::components::{Header, Sidebar};
use crate::context::AppContext;
use crate::session::use_session;
use ahub::features::navigation::NavigationState;
use dioxus::prelude::*;

/// The standard layout: sidebar, header and the page.
///
/// Owns the sidebar's [`NavigationState`]. It starts with every group collapsed and lives as
/// long as the layout stays mounted, across page changes.
#[component]
pub fn Shell(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let role = session.read().role();

    let state = use_signal(|| {
        NavigationState::new(ctx.navigation.resolver.for_session_role(role), &ctx.navigation.config)
    });

    rsx! {
        div { class: "shell",
            Sidebar { state }
            div { class: "content",
                Header { state }
                main { {children} }
            }
        }
    }
}
