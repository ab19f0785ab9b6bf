//! Users view: one fetch at mount, then loading, error, or the users table.
//!
//! State lives in two signals: the one-shot [`ViewState`] and the
//! [`HoverSelection`] driving the detail panels. Rendering goes through the
//! pure mapping in `userboard_core::render`.

mod details;
mod table;

use leptos::logging::{log, warn};
use leptos::prelude::*;
use userboard_core::render::LOADING_TEXT;
use userboard_core::{HoverSelection, MountGuard, UserSource, ViewState};
use wasm_bindgen_futures::spawn_local;

use table::UsersTable;

stylance::import_crate_style!(css, "src/components/users/users.module.css");

#[cfg(not(feature = "mock"))]
fn users_source() -> impl UserSource {
    crate::utils::HttpUserSource::new(crate::config::USERS_ENDPOINT)
}

#[cfg(feature = "mock")]
fn users_source() -> impl UserSource {
    userboard_core::mock::MockUserSource::fixture()
}

/// Start the single users fetch and apply its outcome to `state`.
///
/// The outcome is dropped if the view was unmounted while the request was
/// in flight.
fn load_users(state: RwSignal<ViewState>, guard: MountGuard) {
    spawn_local(async move {
        let outcome = users_source().fetch_users().await;
        match &outcome {
            Ok(users) => log!("fetched {} users", users.len()),
            Err(e) => warn!("users fetch failed: {}", e),
        }

        match state.try_update(|s| guard.apply(s, outcome)) {
            Some(true) => {}
            Some(false) => {
                warn!("users view unmounted before the response arrived; dropping it")
            }
            None => warn!("users view state already disposed; dropping response"),
        }
    });
}

/// Users view component.
///
/// Renders exactly one of:
/// - the loading indicator while the request is in flight
/// - the error message as plain text
/// - the users table
#[component]
pub fn UsersView() -> impl IntoView {
    let state = RwSignal::new(ViewState::default());
    let hover = RwSignal::new(HoverSelection::default());

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });
    load_users(state, guard);

    view! {
        <section class=css::intro>
            {move || state.with(|s| match s {
                ViewState::Loading => view! {
                    <div class=css::loading>
                        <p class=css::loadingText>{LOADING_TEXT}</p>
                    </div>
                }.into_any(),
                ViewState::Error(msg) => view! {
                    <p class=css::error>{msg.clone()}</p>
                }.into_any(),
                ViewState::Loaded(users) => view! {
                    <UsersTable users=users.clone() hover=hover />
                }.into_any(),
            })}
        </section>
    }
}
