//! Fetch-on-key-change hook shared by every data-loading view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Effects only run in the browser, so server-rendered markup always shows the
//! loading state and hydration picks up from there. The navigation epoch from
//! context is part of every key, so re-entering the current page reloads it.

use std::future::Future;

use leptos::prelude::*;

use crate::state::navigation::NavigationEpoch;
use crate::state::query::{QueryScope, QueryState, key_changed};

/// Run `fetch` whenever the tracked `key` or the navigation epoch changes and
/// expose its state.
///
/// Each invocation supersedes the previous one; results that arrive after a
/// newer invocation started, or after the owning view was disposed, are
/// dropped.
pub fn use_query<K, T, Fut>(
    key: impl Fn() -> K + 'static,
    fetch: impl Fn(K) -> Fut + 'static,
) -> RwSignal<QueryState<T>>
where
    K: Clone + PartialEq + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = RwSignal::new(QueryState::default());
    let scope = QueryScope::new();

    let epoch = use_context::<RwSignal<NavigationEpoch>>();

    let effect_scope = scope.clone();
    Effect::new(move |previous: Option<(u64, K)>| {
        let tracked = (epoch.map_or(0, |epoch| epoch.get().count), key());
        if !key_changed(previous.as_ref(), &tracked) {
            return tracked;
        }
        let ticket = effect_scope.issue();
        state.update(QueryState::begin);
        let request = fetch(tracked.1.clone());
        leptos::task::spawn_local(async move {
            let result = request.await;
            if let Err(message) = &result {
                leptos::logging::warn!("query {} failed: {message}", ticket.generation());
            }
            if ticket.is_current() {
                state.try_update(|current| ticket.commit(current, result));
            }
        });
        tracked
    });

    on_cleanup(move || scope.close());
    state
}
