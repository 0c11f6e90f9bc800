//! Resource Loading
//!
//! Glue between the [`Resource`] contract and component state. Loads and
//! submits run with `spawn_local`; results only land if their ticket is still
//! current, so a late response never overwrites a newer one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use std::cell::Cell;

use filament_core::{submit_and_refresh, LoadEpoch, LoadTicket, Loadable, Resource, Submitted};

use crate::context::AppContext;

/// Whether `ticket` still belongs to a mounted view's newest load
fn is_current(epoch: StoredValue<LoadEpoch>, ticket: LoadTicket) -> bool {
    epoch.try_with_value(|e| e.is_current(ticket)).unwrap_or(false)
}

/// `loading`, then `ready` or `failed`
pub fn reload<R>(ctx: AppContext, epoch: StoredValue<LoadEpoch>, apply: impl Fn(Loadable<R::Data>) + 'static)
where
    R: Resource + 'static,
    R::Data: 'static,
{
    if ctx.token.with_untracked(Option::is_none) {
        epoch.with_value(|e| e.invalidate());
        return;
    }

    let ticket = epoch.with_value(|e| e.begin());
    apply(Loadable::Loading);
    log::debug!("[{}] loading", R::NAME);

    spawn_local(async move {
        let client = ctx.client();
        let result = R::fetch(&client).await;
        if !is_current(epoch, ticket) {
            log::debug!("[{}] dropping stale response", R::NAME);
            return;
        }
        match &result {
            Ok(_) => log::debug!("[{}] ready", R::NAME),
            Err(e) => log::warn!("[{}] load failed: {}", R::NAME, e),
        }
        apply(Loadable::from_result(result));
    });
}

/// Create, then refresh the whole view.
///
/// The view re-enters `loading` only once the create succeeded, and only then
/// takes a new ticket; a rejected create leaves any load in flight current.
/// `on_success` runs once the record exists (the form clears itself there).
/// A rejected create raises a blocking alert, except a 401/403, which has
/// already signed the session out.
pub fn submit<R>(
    ctx: AppContext,
    epoch: StoredValue<LoadEpoch>,
    payload: R::Payload,
    saving: RwSignal<bool>,
    apply: impl Fn(Loadable<R::Data>) + 'static,
    on_success: impl FnOnce() + 'static,
) where
    R: Resource + 'static,
    R::Data: 'static,
    R::Payload: 'static,
{
    saving.set(true);

    spawn_local(async move {
        let client = ctx.client();
        let ticket = Cell::new(None);
        let outcome = submit_and_refresh::<R>(&client, &payload, || {
            ticket.set(epoch.try_with_value(|e| e.begin()));
            if ticket.get().is_some() {
                apply(Loadable::Loading);
            }
        })
        .await;
        // The view may be gone by now.
        let _ = saving.try_set(false);

        match outcome {
            Submitted::Refreshed(result) => {
                log::info!("[{}] record created", R::NAME);
                if !ticket.get().is_some_and(|t| is_current(epoch, t)) {
                    log::debug!("[{}] dropping stale refresh", R::NAME);
                    return;
                }
                if let Err(e) = &result {
                    log::warn!("[{}] refresh failed: {}", R::NAME, e);
                }
                apply(Loadable::from_result(result));
                on_success();
            }
            Submitted::Rejected(err) if err.is_session_expired() => {}
            Submitted::Rejected(err) => {
                log::warn!("[{}] create failed: {}", R::NAME, err);
                alert(&err.user_message());
            }
        }
    });
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
