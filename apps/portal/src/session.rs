use crate::context::AppContext;
use ahub::domain::session::Session;
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::warn;

/// Runs the bootstrap check and mirrors the session store into a signal, so anything that
/// reads it re-renders on every sign-in, sign-out or bootstrap result.
pub fn use_session_bridge(ctx: &AppContext) -> Signal<Arc<Session>> {
    let store = ctx.sessions.store.clone();
    let provider = Arc::clone(&ctx.provider);
    let mut session = use_signal(|| store.current());

    let bootstrap_store = store.clone();
    use_future(move || {
        let store = bootstrap_store.clone();
        let provider = Arc::clone(&provider);
        async move {
            if let Err(err) = store.bootstrap(&*provider).await {
                warn!(%err, "Continuing without a restored session");
            }
        }
    });

    use_future(move || {
        let store = store.clone();
        async move {
            let mut rx = store.subscribe();
            loop {
                let current = Arc::clone(&rx.borrow_and_update());
                session.set(current);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    session
}

/// The session published by [`use_session_bridge`].
pub fn use_session() -> Signal<Arc<Session>> {
    use_context::<Signal<Arc<Session>>>()
}
