//! Landing page.

use gloo::utils::document;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::features::home::content::{
    BRAND, CTA_BODY, CTA_BUTTON, CTA_HEADING, FEATURES, FEATURES_HEADING, FEATURES_SUBHEADING,
    FOOTER_COLUMNS, Feature, HERO_BODY, HERO_HIGHLIGHT, HERO_TITLE, NAV_LINKS, PAGE_TITLE,
};

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    use_effect_with_deps(
        |_| {
            document().set_title(PAGE_TITLE);
            || ()
        },
        (),
    );

    html! {
        <div class="min-h-screen bg-white">
            <nav class="sticky top-0 z-40 border-b border-gray-100 bg-white/90 backdrop-blur">
                <div class="mx-auto flex max-w-7xl items-center justify-between px-6 py-4">
                    <span class="text-xl font-bold text-blue-600">{ BRAND }</span>
                    <div class="hidden gap-8 md:flex">
                        { for NAV_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} class="text-sm font-medium text-gray-600 hover:text-gray-900">{ *label }</a>
                        }) }
                    </div>
                    <Link<Route> to={Route::SignIn} classes="rounded-lg bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-700">
                        { "Sign In" }
                    </Link<Route>>
                </div>
            </nav>

            <header class="mx-auto max-w-5xl px-6 py-24 text-center">
                <h1 class="text-5xl font-extrabold tracking-tight text-gray-900">
                    { HERO_TITLE }
                    <br />
                    <span class="text-blue-600">{ HERO_HIGHLIGHT }</span>
                </h1>
                <p class="mx-auto mt-6 max-w-2xl text-lg text-gray-600">{ HERO_BODY }</p>
                <div class="mt-10 flex justify-center gap-4">
                    <Link<Route> to={Route::SignIn} classes="rounded-lg bg-blue-600 px-6 py-3 font-medium text-white hover:bg-blue-700">
                        { "Get Started" }
                    </Link<Route>>
                    <Link<Route> to={Route::Showcase} classes="rounded-lg border border-gray-300 px-6 py-3 font-medium text-gray-700 hover:bg-gray-50">
                        { "See Components" }
                    </Link<Route>>
                </div>
            </header>

            <section id="features" class="bg-gray-50 py-20">
                <div class="mx-auto max-w-7xl px-6">
                    <h2 class="text-center text-3xl font-bold text-gray-900">{ FEATURES_HEADING }</h2>
                    <p class="mt-3 text-center text-gray-600">{ FEATURES_SUBHEADING }</p>
                    <div class="mt-12 grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                        { for FEATURES.iter().map(render_feature) }
                    </div>
                </div>
            </section>

            <section class="bg-blue-600 py-20 text-center text-white">
                <h2 class="text-3xl font-bold">{ CTA_HEADING }</h2>
                <p class="mt-3 text-blue-100">{ CTA_BODY }</p>
                <Link<Route> to={Route::SignIn} classes="mt-8 inline-block rounded-lg bg-white px-6 py-3 font-medium text-blue-600 hover:bg-blue-50">
                    { CTA_BUTTON }
                </Link<Route>>
            </section>

            <footer class="border-t border-gray-100 py-12">
                <div class="mx-auto grid max-w-7xl gap-8 px-6 sm:grid-cols-3 lg:grid-cols-5">
                    { for FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                        <div>
                            <h3 class="text-sm font-semibold text-gray-900">{ *heading }</h3>
                            <ul class="mt-4 space-y-2">
                                { for links.iter().map(|link| html! {
                                    <li class="text-sm text-gray-600">{ *link }</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </footer>
        </div>
    }
}

fn render_feature(feature: &Feature) -> Html {
    html! {
        <div class="rounded-xl bg-white p-6 shadow-sm transition hover:shadow-md">
            <div class="mb-4 flex h-12 w-12 items-center justify-center rounded-lg bg-blue-50 text-2xl" aria-hidden="true">
                { feature.glyph }
            </div>
            <h3 class="font-semibold text-gray-900">{ feature.title }</h3>
            <p class="mt-2 text-sm text-gray-600">{ feature.description }</p>
        </div>
    }
}
