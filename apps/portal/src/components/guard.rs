use crate::components::{DeniedView, LoadingView, Shell};
use crate::context::AppContext;
use crate::navigator::RouterNavigator;
use crate::routes::Route;
use crate::session::use_session;
use ahub::features::access::GateView;
use ahub::kernel::security::guard::Chrome;
use dioxus::prelude::*;

/// Layout wrapping every route: asks the access gate what the current location may show.
///
/// Rendering only reads the gate. The login redirect is issued from an effect that reruns when
/// the location or the session changes, so it fires once per transition. Every signed-in
/// outcome renders inside the same [`Shell`], which keeps the sidebar state across pages.
#[component]
pub fn Guarded() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let location = use_route::<Route>().to_string();
    let router = RouterNavigator::current();

    let gate_ctx = ctx.clone();
    use_effect(use_reactive((&location,), move |(location,)| {
        let current = session.read().clone();
        let mut router = router;
        gate_ctx.access.gate.enforce(&current, &location, &mut router);
    }));

    let current = session.read().clone();
    let body = match ctx.access.gate.view(&current, &location) {
        GateView::Loading => return rsx! { LoadingView {} },
        GateView::Redirecting => return rsx! {},
        GateView::Page { chrome: Chrome::Bare, .. } => {
            return rsx! {
                main { class: "bare", Outlet::<Route> {} }
            };
        }
        GateView::Denied(notice) => rsx! { DeniedView { notice } },
        GateView::Page { chrome: Chrome::Layout, .. } => rsx! { Outlet::<Route> {} },
    };

    rsx! {
        Shell { {body} }
    }
}
