//! Showcase page sections.

use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::app::context::{use_calendar, use_confirm, use_notifications, use_time, use_tooltip};
use crate::components::clock::today;
use crate::components::floating::{TimerSlot, measure};
use crate::core::duration::{INVALID_DATE_RANGE, INVALID_TIME_RANGE};
use crate::core::placement::Placement;
use crate::core::tone::{ConfirmKind, NotificationKind};
use crate::features::calendar::logic::DateFormat;
use crate::features::calendar::state::days_until;
use crate::features::calendar::view::DatePicker;
use crate::features::confirm::state::ConfirmRequest;
use crate::features::time::logic::ClockFormat;
use crate::features::time::view::TimePicker;
use crate::features::tooltip::state::TooltipRequest;
use crate::features::tooltip::view::TooltipTarget;

const SIMULATED_WORK_MS: u32 = 1500;

#[function_component(ShowcasePage)]
pub(crate) fn showcase_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <nav class="border-b border-gray-200 bg-white">
                <div class="mx-auto flex max-w-6xl items-center justify-between px-6 py-4">
                    <span class="text-lg font-bold text-gray-900">{ "Component Showcase" }</span>
                    <Link<Route> to={Route::Home} classes="text-sm text-blue-600 hover:underline">{ "Home" }</Link<Route>>
                </div>
            </nav>
            <main class="mx-auto flex max-w-6xl flex-col gap-8 px-6 py-10">
                <AlertSection />
                <ConfirmSection />
                <TooltipSection />
                <DateRangeSection />
                <TimeRangeSection />
            </main>
        </div>
    }
}

fn section(title: &'static str, body: Html) -> Html {
    html! {
        <section class="rounded-2xl bg-white p-6 shadow-sm">
            <h2 class="mb-4 text-lg font-semibold text-gray-900">{ title }</h2>
            { body }
        </section>
    }
}

const fn sample_message(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "Changes saved successfully.",
        NotificationKind::Error => "Something went wrong while saving.",
        NotificationKind::Warning => "Your session expires in five minutes.",
        NotificationKind::Info => "A new version is available.",
    }
}

fn registered_pickers(
    entries: impl Iterator<Item = (String, Option<String>)>,
    on_remove: &Callback<String>,
) -> Html {
    html! {
        <ul class="mt-4 divide-y divide-gray-100 rounded-lg border border-gray-200 text-sm">
            { for entries.map(|(key, formatted)| {
                let onclick = {
                    let on_remove = on_remove.clone();
                    let key = key.clone();
                    Callback::from(move |_: MouseEvent| on_remove.emit(key.clone()))
                };
                html! {
                    <li key={key.clone()} class="flex items-center justify-between px-3 py-2">
                        <span class="font-mono text-gray-700">{ key }</span>
                        <span class="text-gray-500">{ formatted.unwrap_or_else(|| "unset".to_string()) }</span>
                        <button type="button" class="text-xs text-red-600 hover:underline" {onclick}>{ "Remove" }</button>
                    </li>
                }
            }) }
        </ul>
    }
}

#[function_component(AlertSection)]
fn alert_section() -> Html {
    let notifications = use_notifications();
    let buttons = NotificationKind::all().into_iter().map(|kind| {
        let notifications = notifications.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            notifications.enqueue(kind, sample_message(kind));
        });
        html! {
            <button type="button" class="rounded-lg border border-gray-300 px-4 py-2 text-sm capitalize hover:bg-gray-50" {onclick}>
                { kind.as_str() }
            </button>
        }
    });
    let on_clear = {
        let notifications = notifications.clone();
        Callback::from(move |_: MouseEvent| notifications.clear())
    };

    section(
        "Alerts",
        html! {
            <div class="flex flex-wrap items-center gap-3">
                { for buttons }
                <button type="button" class="px-4 py-2 text-sm text-gray-500 hover:underline" onclick={on_clear}>
                    { format!("Clear ({})", notifications.records().len()) }
                </button>
            </div>
        },
    )
}

#[function_component(ConfirmSection)]
fn confirm_section() -> Html {
    let confirm = use_confirm();
    let notifications = use_notifications();
    let pending: TimerSlot = use_mut_ref(|| None);

    let on_delete = {
        let confirm = confirm.clone();
        let notifications = notifications.clone();
        Callback::from(move |_: MouseEvent| {
            let on_confirm = {
                let confirm = confirm.clone();
                let notifications = notifications.clone();
                let pending = pending.clone();
                Callback::from(move |()| {
                    confirm.set_loading(true);
                    let confirm = confirm.clone();
                    let notifications = notifications.clone();
                    *pending.borrow_mut() = Some(Timeout::new(SIMULATED_WORK_MS, move || {
                        confirm.close();
                        notifications.enqueue(NotificationKind::Success, "Project deleted.");
                    }));
                })
            };
            let on_cancel = {
                let notifications = notifications.clone();
                Callback::from(move |()| {
                    notifications.enqueue(NotificationKind::Info, "Deletion cancelled.");
                })
            };
            confirm.request(
                ConfirmRequest::new(
                    "Delete project?",
                    "This permanently removes the project and its files.",
                )
                .kind(ConfirmKind::Danger)
                .labels("Delete", "Keep")
                .on_confirm(on_confirm)
                .on_cancel(on_cancel),
            );
        })
    };

    let simple = |kind: ConfirmKind, title: &'static str, message: &'static str| {
        let confirm = confirm.clone();
        let notifications = notifications.clone();
        Callback::from(move |_: MouseEvent| {
            let on_confirm = {
                let confirm = confirm.clone();
                let notifications = notifications.clone();
                Callback::from(move |()| {
                    confirm.close();
                    notifications.enqueue(NotificationKind::Success, "Confirmed.");
                })
            };
            confirm.request(
                ConfirmRequest::new(title, message)
                    .kind(kind)
                    .on_confirm(on_confirm),
            );
        })
    };

    section(
        "Confirmation dialog",
        html! {
            <div class="flex flex-wrap gap-3">
                <button type="button" class="rounded-lg bg-red-600 px-4 py-2 text-sm text-white hover:bg-red-700" onclick={on_delete}>
                    { "Delete with progress" }
                </button>
                <button type="button" class="rounded-lg border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50"
                    onclick={simple(ConfirmKind::Success, "Publish changes?", "Everyone with access will see them.")}>
                    { "Success" }
                </button>
                <button type="button" class="rounded-lg border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50"
                    onclick={simple(ConfirmKind::Warning, "Discard draft?", "Unsaved edits will be lost.")}>
                    { "Warning" }
                </button>
                <button type="button" class="rounded-lg border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50"
                    onclick={simple(ConfirmKind::Info, "Enable sync?", "Documents will sync across devices.")}>
                    { "Info" }
                </button>
                <button type="button" class="rounded-lg border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50"
                    onclick={simple(ConfirmKind::Default, "Continue?", "You can change this later.")}>
                    { "Default" }
                </button>
            </div>
        },
    )
}

#[function_component(TooltipSection)]
fn tooltip_section() -> Html {
    let tooltip = use_tooltip();
    let manual = use_node_ref();
    let manual_placement = use_state(|| "right".to_string());
    let on_placement = {
        let manual_placement = manual_placement.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            manual_placement.set(input.value());
        })
    };
    let on_manual = {
        let tooltip = tooltip.clone();
        let manual = manual.clone();
        let requested = (*manual_placement).clone();
        Callback::from(move |_: MouseEvent| {
            if tooltip.state().visible {
                tooltip.hide();
                return;
            }
            if let Some(anchor) = measure(&manual) {
                tooltip.show(TooltipRequest {
                    content: "Shown on demand; click again to hide".to_string(),
                    anchor,
                    placement: Placement::from_attr(&requested),
                    class: String::new(),
                });
            }
        })
    };

    section(
        "Tooltips",
        html! {
            <>
                <div class="grid grid-cols-3 gap-3 sm:grid-cols-4 lg:grid-cols-6">
                    { for Placement::all().into_iter().map(|placement| html! {
                        <TooltipTarget content={format!("Placed {}", placement.as_str())} {placement}>
                            <span class="w-full rounded-md bg-gray-100 px-3 py-2 text-center text-xs text-gray-700">
                                { placement.as_str() }
                            </span>
                        </TooltipTarget>
                    }) }
                </div>
                <div class="mt-4 flex items-center gap-3">
                    <input
                        type="text"
                        class="w-40 rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        aria-label="Placement"
                        placeholder="placement, e.g. left-top"
                        value={(*manual_placement).clone()}
                        oninput={on_placement}
                    />
                    <button ref={manual} type="button" class="rounded-lg border border-gray-300 px-4 py-2 text-sm hover:bg-gray-50" onclick={on_manual}>
                        { "Toggle tooltip" }
                    </button>
                </div>
            </>
        },
    )
}

#[function_component(DateRangeSection)]
fn date_range_section() -> Html {
    let calendar = use_calendar();
    let state = calendar.state();
    let today = today();

    let on_start = {
        let calendar = calendar.clone();
        Callback::from(move |date: Option<NaiveDate>| calendar.set_start(date))
    };
    let on_end = {
        let calendar = calendar.clone();
        Callback::from(move |date: Option<NaiveDate>| calendar.set_end(date))
    };
    let on_remove = {
        let calendar = calendar.clone();
        Callback::from(move |key: String| calendar.remove_picker(key))
    };
    let on_clear = {
        let calendar = calendar.clone();
        Callback::from(move |_: MouseEvent| calendar.clear_all())
    };

    let summary = serde_json::to_string_pretty(&state.formatted_range()).unwrap_or_default();
    let upcoming = state.upcoming(today);
    let past = state.past(today);

    section(
        "Date range",
        html! {
            <>
                <div class="grid gap-4 md:grid-cols-3">
                    <DatePicker label="Start date" value={state.start()} on_change={on_start} registry_key="project-start" />
                    <DatePicker label="End date" value={state.end()} min={state.start()} on_change={on_end} registry_key="project-end" />
                    <DatePicker label="Review (DD/MM/YYYY)" format={DateFormat::DayMonthYear} registry_key="review" />
                </div>
                <div class="mt-4 space-y-1 text-sm text-gray-700">
                    if state.is_valid_range() == Some(false) {
                        <p class="text-red-600">{ INVALID_DATE_RANGE }</p>
                    }
                    if let Some(span) = state.project_duration() {
                        <p>{ format!("Duration: {} ({} days)", span.formatted, span.total_days) }</p>
                    }
                    <p>{ format!("{} days in range", state.dates_in_range().len()) }</p>
                    if state.contains(today) {
                        <p>{ "Today falls inside the range." }</p>
                    }
                </div>
                <div class="mt-4 grid gap-4 md:grid-cols-2">
                    <div>
                        <h3 class="text-sm font-semibold text-gray-900">{ "Upcoming" }</h3>
                        <ul class="mt-2 space-y-1 text-sm text-gray-600">
                            { for upcoming.iter().map(|entry| html! {
                                <li>{ format!("{}: {} (in {} days)", entry.key, entry.formatted, days_until(entry.date, today)) }</li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-sm font-semibold text-gray-900">{ "Past" }</h3>
                        <ul class="mt-2 space-y-1 text-sm text-gray-600">
                            { for past.iter().map(|entry| html! {
                                <li>{ format!("{}: {}", entry.key, entry.formatted) }</li>
                            }) }
                        </ul>
                    </div>
                </div>
                { registered_pickers(
                    state.pickers().iter().map(|(key, entry)| (key.clone(), entry.formatted.clone())),
                    &on_remove,
                ) }
                <pre class="mt-4 overflow-x-auto rounded-lg bg-gray-900 p-4 text-xs text-gray-100">{ summary }</pre>
                <button type="button" class="mt-4 text-sm text-gray-500 hover:underline" onclick={on_clear}>
                    { format!("Clear all ({} pickers)", state.pickers().len()) }
                </button>
            </>
        },
    )
}

#[function_component(TimeRangeSection)]
fn time_range_section() -> Html {
    let time = use_time();
    let state = time.state();

    let on_start = {
        let time = time.clone();
        Callback::from(move |value| time.set_start(value))
    };
    let on_end = {
        let time = time.clone();
        Callback::from(move |value| time.set_end(value))
    };
    let on_remove = {
        let time = time.clone();
        Callback::from(move |key: String| time.remove_picker(key))
    };
    let on_clear = {
        let time = time.clone();
        Callback::from(move |_: MouseEvent| time.clear_all())
    };
    let snapshot = serde_json::to_string_pretty(&state.snapshot()).unwrap_or_default();

    section(
        "Time range",
        html! {
            <>
                <div class="grid gap-4 md:grid-cols-3">
                    <TimePicker label="Meeting start" value={state.start()} on_change={on_start} registry_key="meeting-start" />
                    <TimePicker label="Meeting end" value={state.end()} on_change={on_end} registry_key="meeting-end" />
                    <TimePicker label="Reminder (24h)" format={ClockFormat::TwentyFourHour} registry_key="reminder" />
                </div>
                <div class="mt-4 space-y-1 text-sm text-gray-700">
                    if state.is_valid_range() == Some(false) {
                        <p class="text-red-600">{ INVALID_TIME_RANGE }</p>
                    }
                    if let Some(span) = state.meeting_duration() {
                        <p>{ format!("Meeting length: {}", span.formatted) }</p>
                    }
                </div>
                { registered_pickers(
                    state.pickers().iter().map(|(key, entry)| (key.clone(), entry.formatted.clone())),
                    &on_remove,
                ) }
                <pre class="mt-4 overflow-x-auto rounded-lg bg-gray-900 p-4 text-xs text-gray-100">{ snapshot }</pre>
                <button type="button" class="mt-4 text-sm text-gray-500 hover:underline" onclick={on_clear}>
                    { "Clear all" }
                </button>
            </>
        },
    )
}
