//! Root application module.
//!
//! Contains the main App component and application-level setup following
//! Leptos conventions.

use leptos::prelude::*;

use crate::components::UsersView;
use crate::config::APP_NAME;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// This component:
/// - Sets the document title
/// - Wraps the app in an ErrorBoundary as a last-resort fallback (fetch
///   failures are shown by the users view itself)
/// - Renders the users view
#[component]
pub fn App() -> impl IntoView {
    document().set_title(APP_NAME);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <div class=css::fallbackBody>
                        <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                        <p class=css::fallbackHint>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::details>
                            <summary>"Error details"</summary>
                            <ul class=css::errorList>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button class=css::reload on:click=move |_| dom::reload_page()>
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <UsersView />
        </ErrorBoundary>
    }
}
