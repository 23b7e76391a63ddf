//! Time picker dropdown.

use chrono::NaiveDateTime;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::context::{use_try_time, use_ui_config};
use crate::components::clock::{now, today};
use crate::components::floating::use_dropdown_position;
use crate::features::time::logic::{ClockFormat, Period, TimeDraft, TimeDraftAction, format_time};

#[derive(Properties, PartialEq)]
pub(crate) struct TimePickerProps {
    #[prop_or_default]
    pub value: Option<NaiveDateTime>,
    #[prop_or_default]
    pub on_change: Callback<Option<NaiveDateTime>>,
    #[prop_or_default]
    pub on_select: Callback<Option<NaiveDateTime>>,
    #[prop_or(AttrValue::Static("Select time"))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub format: ClockFormat,
    #[prop_or(true)]
    pub clearable: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    /// Publishes every change into the time registry under this key.
    #[prop_or_default]
    pub registry_key: Option<AttrValue>,
}

/// Hour/minute stepper dropdown with an AM/PM switch on the 12-hour clock.
#[function_component(TimePicker)]
pub(crate) fn time_picker(props: &TimePickerProps) -> Html {
    let config = use_ui_config();
    let registry = use_try_time().ok();
    let open = use_state(|| false);
    let selected = use_state(|| props.value);
    let draft = {
        let value = props.value.map(|value| value.time());
        let format = props.format;
        use_reducer(move || TimeDraft::new(value, format))
    };
    let trigger = use_node_ref();
    let panel = use_node_ref();

    {
        let selected = selected.clone();
        use_effect_with_deps(
            move |value: &Option<NaiveDateTime>| {
                selected.set(*value);
                || ()
            },
            props.value,
        );
    }

    let on_outside = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };
    let layout = use_dropdown_position(
        *open,
        trigger.clone(),
        panel.clone(),
        config.dropdown_metrics(),
        on_outside,
    );

    let commit = {
        let on_change = props.on_change.clone();
        let on_select = props.on_select.clone();
        let key = props.registry_key.clone();
        let open = open.clone();
        let selected = selected.clone();
        Callback::from(move |value: Option<NaiveDateTime>| {
            selected.set(value);
            on_change.emit(value);
            on_select.emit(value);
            if let (Some(registry), Some(key)) = (&registry, &key) {
                registry.update_picker(key.to_string(), value);
            }
            open.set(false);
        })
    };

    let on_toggle = {
        let open = open.clone();
        let draft = draft.clone();
        let value = *selected;
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if disabled {
                return;
            }
            if !*open {
                draft.dispatch(TimeDraftAction::Load(value.map(|value| value.time())));
            }
            open.set(!*open);
        })
    };
    let on_confirm = {
        let draft = draft.clone();
        let commit = commit.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(value) = draft.on_date(today()) {
                commit.emit(Some(value));
            }
        })
    };
    let on_now = {
        let draft = draft.clone();
        let commit = commit.clone();
        Callback::from(move |_: MouseEvent| {
            let current = now();
            draft.dispatch(TimeDraftAction::Load(Some(current.time())));
            commit.emit(Some(current));
        })
    };
    let on_clear = Callback::from(move |_: MouseEvent| commit.emit(None));

    let step = |action: TimeDraftAction| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.dispatch(action.clone()))
    };
    let typed = |wrap: fn(String) -> TimeDraftAction| {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            draft.dispatch(wrap(input.value()));
        })
    };

    html! {
        <div class={classes!("time-picker", "relative", "w-full", props.class.clone())}>
            if let Some(label) = &props.label {
                <label class="mb-1 block text-sm font-medium text-gray-700">{ label.clone() }</label>
            }
            <div class="flex items-center gap-2">
                <button
                    ref={trigger}
                    type="button"
                    class="time-picker-trigger flex w-full items-center gap-2 rounded-lg border border-gray-300 bg-white px-3 py-2 text-left text-sm disabled:cursor-not-allowed disabled:bg-gray-100"
                    disabled={props.disabled}
                    aria-haspopup="dialog"
                    aria-expanded={(*open).to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{ "🕒" }</span>
                    if let Some(value) = *selected {
                        <span class="text-gray-900">{ format_time(value.time(), props.format) }</span>
                    } else {
                        <span class="text-gray-400">{ props.placeholder.clone() }</span>
                    }
                </button>
                if props.clearable && selected.is_some() && !props.disabled {
                    <button
                        type="button"
                        class="time-picker-clear text-gray-400 hover:text-gray-600"
                        aria-label="Clear time"
                        onclick={on_clear}
                    >
                        { "✕" }
                    </button>
                }
            </div>
            if *open {
                <div
                    ref={panel}
                    role="dialog"
                    class="time-picker-panel fixed z-50 w-72 rounded-xl border border-gray-200 bg-white p-4 shadow-xl"
                    style={layout.coordinate.to_style()}
                    data-placement={layout.placement.as_str()}
                >
                    <div class="flex items-center justify-center gap-3">
                        { render_stepper(
                            "hours",
                            draft.hours,
                            step(TimeDraftAction::IncrementHours),
                            step(TimeDraftAction::DecrementHours),
                            typed(TimeDraftAction::HoursInput),
                        ) }
                        <span class="text-2xl font-semibold text-gray-500">{ ":" }</span>
                        { render_stepper(
                            "minutes",
                            draft.minutes,
                            step(TimeDraftAction::IncrementMinutes),
                            step(TimeDraftAction::DecrementMinutes),
                            typed(TimeDraftAction::MinutesInput),
                        ) }
                        if props.format == ClockFormat::TwelveHour {
                            <div class="flex flex-col gap-1">
                                { for [Period::Am, Period::Pm].into_iter().map(|period| {
                                    let active = draft.period == period;
                                    html! {
                                        <button
                                            type="button"
                                            class={classes!("rounded-md", "px-2", "py-1", "text-xs", "font-semibold", if active { "bg-blue-600 text-white" } else { "bg-gray-100 text-gray-700" })}
                                            aria-pressed={active.to_string()}
                                            onclick={step(TimeDraftAction::SetPeriod(period))}
                                        >
                                            { period.as_str() }
                                        </button>
                                    }
                                }) }
                            </div>
                        }
                    </div>
                    <div class="mt-4 flex justify-between">
                        <button type="button" class="rounded-md px-3 py-1.5 text-sm text-blue-600 hover:bg-blue-50" onclick={on_now}>
                            { "Today" }
                        </button>
                        <button type="button" class="rounded-md bg-blue-600 px-3 py-1.5 text-sm font-medium text-white hover:bg-blue-700" onclick={on_confirm}>
                            { "Confirm" }
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}

fn render_stepper(
    unit: &'static str,
    value: i32,
    on_up: Callback<MouseEvent>,
    on_down: Callback<MouseEvent>,
    on_input: Callback<Event>,
) -> Html {
    html! {
        <div class="flex flex-col items-center gap-1">
            <button type="button" class="rounded p-1 hover:bg-gray-100" aria-label={format!("Increase {unit}")} onclick={on_up}>{ "▲" }</button>
            <input
                type="number"
                class="w-14 rounded-md border border-gray-300 py-1 text-center text-lg"
                aria-label={unit}
                value={format!("{value:02}")}
                onchange={on_input}
            />
            <button type="button" class="rounded p-1 hover:bg-gray-100" aria-label={format!("Decrease {unit}")} onclick={on_down}>{ "▼" }</button>
        </div>
    }
}
