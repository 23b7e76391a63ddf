//! Application shell: providers, routing and the wasm entry point.

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::context::UiProviders;
use crate::core::config::UiConfig;
use crate::features::auth::view::{AuthCallbackPage, SignInPage};
use crate::features::confirm::view::ConfirmHost;
use crate::features::home::view::HomePage;
use crate::features::notifications::view::AlertHost;
use crate::features::showcase::view::ShowcasePage;
use crate::features::tooltip::view::TooltipLayer;
pub(crate) use routes::Route;

pub(crate) mod context;
pub(crate) mod preferences;
mod routes;

#[derive(Properties, PartialEq)]
pub(crate) struct MetroniqueAppProps {
    pub config: Rc<UiConfig>,
}

#[function_component(MetroniqueApp)]
pub(crate) fn metronique_app(props: &MetroniqueAppProps) -> Html {
    html! {
        <BrowserRouter>
            <UiProviders config={Rc::clone(&props.config)}>
                <Switch<Route> render={switch} />
                <AlertHost />
                <ConfirmHost />
                <TooltipLayer />
            </UiProviders>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Showcase => html! { <ShowcasePage /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::AuthCallback => html! { <AuthCallbackPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <main class="flex min-h-screen flex-col items-center justify-center gap-4 bg-gray-50">
            <h1 class="text-4xl font-bold text-gray-900">{ "404" }</h1>
            <p class="text-gray-600">{ "This page does not exist." }</p>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">{ "Back home" }</Link<Route>>
        </main>
    }
}

/// Entrypoint for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = preferences::load_config();
    if let Err(err) = metronique_telemetry::init_logging(&config.logging_config()) {
        gloo::console::error!(format!("logging setup failed: {err}"));
    }
    tracing::info!(level = %config.logging.level, "starting metronique ui");

    let props = MetroniqueAppProps {
        config: Rc::new(config),
    };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MetroniqueApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<MetroniqueApp>::with_props(props).render();
    }
}
