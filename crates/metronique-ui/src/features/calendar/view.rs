//! Date picker dropdown.

use chrono::{Datelike, NaiveDate};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::context::{use_try_calendar, use_ui_config};
use crate::components::clock::today;
use crate::components::floating::use_dropdown_position;
use crate::features::calendar::logic::{
    DateBounds, DateFormat, DatePickerAction, DatePickerModel, WEEKDAY_HEADERS, month_label,
    parse_search,
};

#[derive(Properties, PartialEq)]
pub(crate) struct DatePickerProps {
    #[prop_or_default]
    pub value: Option<NaiveDate>,
    #[prop_or_default]
    pub on_change: Callback<Option<NaiveDate>>,
    #[prop_or_default]
    pub on_select: Callback<Option<NaiveDate>>,
    #[prop_or(AttrValue::Static("Select date"))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(AttrValue::Static("Search date (DD/MM/YYYY)"))]
    pub search_placeholder: AttrValue,
    #[prop_or_default]
    pub min: Option<NaiveDate>,
    #[prop_or_default]
    pub max: Option<NaiveDate>,
    #[prop_or_default]
    pub disabled_dates: Vec<NaiveDate>,
    #[prop_or_default]
    pub format: DateFormat,
    #[prop_or(true)]
    pub clearable: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    /// Publishes every change into the date registry under this key.
    #[prop_or_default]
    pub registry_key: Option<AttrValue>,
    #[prop_or(true)]
    pub highlight_today: bool,
}

/// Calendar dropdown with month navigation and free-text search.
#[function_component(DatePicker)]
pub(crate) fn date_picker(props: &DatePickerProps) -> Html {
    let config = use_ui_config();
    let registry = use_try_calendar().ok();
    let model = {
        let value = props.value;
        use_reducer(move || DatePickerModel::new(value, today()))
    };
    let trigger = use_node_ref();
    let panel = use_node_ref();

    {
        let model = model.clone();
        use_effect_with_deps(
            move |value: &Option<NaiveDate>| {
                model.dispatch(DatePickerAction::Sync(*value));
                || ()
            },
            props.value,
        );
    }

    let on_outside = {
        let model = model.clone();
        Callback::from(move |()| model.dispatch(DatePickerAction::Close))
    };
    let layout = use_dropdown_position(
        model.open,
        trigger.clone(),
        panel.clone(),
        config.dropdown_metrics(),
        on_outside,
    );

    let bounds = DateBounds {
        min: props.min,
        max: props.max,
        disabled: props.disabled_dates.clone(),
    };

    let commit = {
        let on_change = props.on_change.clone();
        let on_select = props.on_select.clone();
        let key = props.registry_key.clone();
        Callback::from(move |value: Option<NaiveDate>| {
            on_change.emit(value);
            on_select.emit(value);
            if let (Some(registry), Some(key)) = (&registry, &key) {
                registry.update_picker(key.to_string(), value);
            }
        })
    };

    let on_day = {
        let model = model.clone();
        let bounds = bounds.clone();
        let commit = commit.clone();
        Callback::from(move |date: NaiveDate| {
            if bounds.is_disabled(date) {
                return;
            }
            commit.emit(Some(date));
            model.dispatch(DatePickerAction::Select {
                date,
                bounds: bounds.clone(),
            });
        })
    };

    let on_toggle = {
        let model = model.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                model.dispatch(DatePickerAction::Toggle);
            }
        })
    };
    let on_clear = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| {
            model.dispatch(DatePickerAction::Clear);
            commit.emit(None);
        })
    };
    let on_previous = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(DatePickerAction::PreviousMonth))
    };
    let on_next = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(DatePickerAction::NextMonth))
    };
    let on_search = {
        let model = model.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            model.dispatch(DatePickerAction::Search(input.value()));
        })
    };
    let on_search_key = {
        let model = model.clone();
        let on_day = on_day.clone();
        Callback::from(move |event: KeyboardEvent| match event.key().as_str() {
            "Enter" => {
                event.prevent_default();
                if let Some(date) = parse_search(&model.search, model.view.year()) {
                    on_day.emit(date);
                }
            }
            "Escape" => model.dispatch(DatePickerAction::Close),
            _ => {}
        })
    };

    let today = props.highlight_today.then(today);
    let selected_label = model.selected.map(|date| props.format.format(date));

    html! {
        <div class={classes!("date-picker", "relative", "w-full", props.class.clone())}>
            if let Some(label) = &props.label {
                <label class="mb-1 block text-sm font-medium text-gray-700">{ label.clone() }</label>
            }
            <div class="flex items-center gap-2">
                <button
                    ref={trigger}
                    type="button"
                    class="date-picker-trigger flex w-full items-center gap-2 rounded-lg border border-gray-300 bg-white px-3 py-2 text-left text-sm disabled:cursor-not-allowed disabled:bg-gray-100"
                    disabled={props.disabled}
                    aria-haspopup="dialog"
                    aria-expanded={model.open.to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{ "📅" }</span>
                    if let Some(text) = selected_label {
                        <span class="text-gray-900">{ text }</span>
                    } else {
                        <span class="text-gray-400">{ props.placeholder.clone() }</span>
                    }
                </button>
                if props.clearable && model.selected.is_some() && !props.disabled {
                    <button
                        type="button"
                        class="date-picker-clear text-gray-400 hover:text-gray-600"
                        aria-label="Clear date"
                        onclick={on_clear}
                    >
                        { "✕" }
                    </button>
                }
            </div>
            if model.open {
                <div
                    ref={panel}
                    role="dialog"
                    class="date-picker-panel fixed z-50 w-80 rounded-xl border border-gray-200 bg-white p-4 shadow-xl"
                    style={layout.coordinate.to_style()}
                    data-placement={layout.placement.as_str()}
                >
                    <input
                        type="text"
                        class="mb-3 w-full rounded-md border border-gray-300 px-3 py-1.5 text-sm"
                        placeholder={props.search_placeholder.clone()}
                        value={model.search.clone()}
                        oninput={on_search}
                        onkeydown={on_search_key}
                    />
                    <div class="mb-3 flex items-center justify-between">
                        <button type="button" class="rounded p-1 hover:bg-gray-100" aria-label="Previous month" onclick={on_previous}>{ "‹" }</button>
                        <span class="text-sm font-semibold text-gray-900">{ month_label(model.view) }</span>
                        <button type="button" class="rounded p-1 hover:bg-gray-100" aria-label="Next month" onclick={on_next}>{ "›" }</button>
                    </div>
                    <div class="mb-1 grid grid-cols-7 gap-1 text-center text-xs font-medium text-gray-500">
                        { for WEEKDAY_HEADERS.iter().map(|name| html! { <span>{ *name }</span> }) }
                    </div>
                    <div class="grid grid-cols-7 gap-1">
                        { for model.cells().into_iter().map(|cell| render_day(cell, model.selected, &bounds, today, &on_day)) }
                    </div>
                </div>
            }
        </div>
    }
}

fn render_day(
    cell: Option<NaiveDate>,
    selected: Option<NaiveDate>,
    bounds: &DateBounds,
    today: Option<NaiveDate>,
    on_day: &Callback<NaiveDate>,
) -> Html {
    let Some(date) = cell else {
        return html! { <span class="h-9" aria-hidden="true" /> };
    };
    let disabled = bounds.is_disabled(date);
    let is_selected = selected == Some(date);
    let tone = if is_selected {
        "bg-blue-600 text-white"
    } else if today == Some(date) {
        "border border-blue-500 text-blue-600"
    } else {
        "text-gray-700 hover:bg-gray-100"
    };
    let onclick = {
        let on_day = on_day.clone();
        Callback::from(move |_: MouseEvent| on_day.emit(date))
    };

    html! {
        <button
            type="button"
            class={classes!("date-picker-day", "h-9", "rounded-md", "text-sm", tone, disabled.then_some("cursor-not-allowed opacity-40"))}
            disabled={disabled}
            aria-selected={is_selected.to_string()}
            onclick={onclick}
        >
            { date.day() }
        </button>
    }
}
