use crate::components::Guarded;
use crate::views::{Login, Page};
use dioxus::prelude::*;

/// Router entries. Access is decided by the route table, not here: every location passes
/// through the [`Guarded`] layout, and pages without a dedicated view share [`Page`].
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Guarded)]
        #[route("/login?:next")]
        Login { next: String },

        #[route("/:..segments")]
        Page { segments: Vec<String> },
}
