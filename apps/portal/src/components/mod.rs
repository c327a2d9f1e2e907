mod denied;
mod guard;
mod header;
mod loading;
mod shell;
mod sidebar;

pub use denied::DeniedView;
pub use guard::Guarded;
pub use header::Header;
pub use loading::LoadingView;
pub use shell::Shell;
pub use sidebar::Sidebar;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::use_session_bridge;
use dioxus::prelude::*;

/// Root component: publishes the session signal and mounts the router.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session_bridge(&ctx);
    use_context_provider(|| session);

    rsx! {
        Router::<Route> {}
    }
}
