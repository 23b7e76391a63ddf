//! Sign-in placeholder and the OAuth-style callback page.

use gloo::utils::window;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::app::context::{use_notifications, use_ui_config};
use crate::app::preferences::{current_query, persist_credentials};
use crate::core::auth::CallbackOutcome;

const DEMO_SUCCESS: &str = "/auth/callback?success=true&token=demo-access-token&refreshToken=demo-refresh-token";
const DEMO_FAILURE: &str = "/auth/callback?success=false";

/// Reads the callback query once, stores credentials on success, announces the outcome and
/// redirects after the configured delay.
#[function_component(AuthCallbackPage)]
pub(crate) fn auth_callback_page() -> Html {
    let notifications = use_notifications();
    let config = use_ui_config();
    let navigator = use_navigator();
    let outcome = use_memo(|_| CallbackOutcome::from_query(&current_query()), ());

    {
        let outcome = outcome.clone();
        use_effect_with_deps(
            move |_| {
                if let CallbackOutcome::Success(credentials) = &*outcome {
                    persist_credentials(credentials);
                }
                let (kind, message) = outcome.alert();
                notifications.enqueue(kind, message);
                tracing::info!(success = outcome.is_success(), "auth callback handled");

                let path = outcome.redirect_path();
                let redirect = Timeout::new(outcome.redirect_delay_ms(&config.auth), move || {
                    match (navigator, Route::recognize(path)) {
                        (Some(navigator), Some(route)) => navigator.push(&route),
                        _ => {
                            if let Err(err) = window().location().set_href(path) {
                                gloo::console::error!("redirect failed", err);
                            }
                        }
                    }
                });
                move || drop(redirect)
            },
            (),
        );
    }

    let (glyph, title, body, tone) = if outcome.is_success() {
        (
            "✓",
            "Signed in",
            "Taking you to your workspace...",
            "bg-green-100 text-green-600",
        )
    } else {
        (
            "✕",
            "Sign-in failed",
            "Returning to the sign-in page...",
            "bg-red-100 text-red-600",
        )
    };

    html! {
        <main class="flex min-h-screen items-center justify-center bg-gray-50">
            <div class="w-full max-w-sm rounded-2xl bg-white p-8 text-center shadow-lg">
                <div class={classes!("mx-auto", "mb-4", "flex", "h-14", "w-14", "items-center", "justify-center", "rounded-full", "text-2xl", tone)}>
                    { glyph }
                </div>
                <h1 class="text-xl font-semibold text-gray-900">{ title }</h1>
                <p class="mt-2 text-sm text-gray-600">{ body }</p>
                <div class="mx-auto mt-6 h-6 w-6 animate-spin rounded-full border-2 border-gray-300 border-t-blue-600" aria-hidden="true" />
            </div>
        </main>
    }
}

/// Stand-in for the external identity provider.
#[function_component(SignInPage)]
pub(crate) fn sign_in_page() -> Html {
    html! {
        <main class="flex min-h-screen items-center justify-center bg-gray-50">
            <div class="w-full max-w-sm rounded-2xl bg-white p-8 shadow-lg">
                <h1 class="text-2xl font-bold text-gray-900">{ "Sign in" }</h1>
                <p class="mt-2 text-sm text-gray-600">
                    { "Sign-in is handled by an external provider. Use a demo callback below." }
                </p>
                <div class="mt-6 flex flex-col gap-3">
                    <a href={DEMO_SUCCESS} class="rounded-lg bg-blue-600 px-4 py-2 text-center text-sm font-medium text-white hover:bg-blue-700">
                        { "Simulate successful sign-in" }
                    </a>
                    <a href={DEMO_FAILURE} class="rounded-lg border border-gray-300 px-4 py-2 text-center text-sm font-medium text-gray-700 hover:bg-gray-50">
                        { "Simulate failed sign-in" }
                    </a>
                    <Link<Route> to={Route::Home} classes="text-center text-sm text-gray-500 hover:underline">
                        { "Back home" }
                    </Link<Route>>
                </div>
            </div>
        </main>
    }
}
