//! Context providers and hooks for the session registries.
//!
//! # Design
//! - Every registry is a reducer owned by [`UiProviders`] at the app root.
//! - Hooks fail fast outside their provider; `use_try_*` variants return the error instead.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use gloo::console;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::clock::now_ms;
use crate::core::config::UiConfig;
use crate::core::error::{ProviderError, require};
use crate::core::lifecycle::HoverIntent;
use crate::core::tone::NotificationKind;
use crate::features::calendar::state::{CalendarAction, CalendarState};
use crate::features::confirm::state::{ConfirmAction, ConfirmRequest, ConfirmState};
use crate::features::notifications::state::{
    IdSequence, NotificationAction, NotificationId, NotificationPhase, NotificationQueue,
    NotificationRecord,
};
use crate::features::time::state::{TimeAction, TimeState};
use crate::features::tooltip::state::{TooltipAction, TooltipRequest, TooltipState};

/// Enqueue/dismiss access to the notification queue.
#[derive(Clone)]
pub(crate) struct NotificationsHandle {
    queue: UseReducerHandle<NotificationQueue>,
    ids: Rc<IdSequence>,
}

impl PartialEq for NotificationsHandle {
    fn eq(&self, other: &Self) -> bool {
        self.queue == other.queue && Rc::ptr_eq(&self.ids, &other.ids)
    }
}

impl NotificationsHandle {
    /// Append a notification and return its id.
    pub(crate) fn enqueue(
        &self,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> NotificationId {
        let id = self.ids.next_id();
        self.queue.dispatch(NotificationAction::Push(NotificationRecord {
            id,
            kind,
            message: message.into(),
            created_at_ms: now_ms(),
            phase: NotificationPhase::Visible,
        }));
        id
    }

    /// Mark a notification as closing.
    pub(crate) fn begin_closing(&self, id: NotificationId) {
        self.queue.dispatch(NotificationAction::BeginClosing(id));
    }

    /// Remove a notification; unknown ids are ignored.
    pub(crate) fn dismiss(&self, id: NotificationId) {
        self.queue.dispatch(NotificationAction::Dismiss(id));
    }

    /// Remove every notification.
    pub(crate) fn clear(&self) {
        self.queue.dispatch(NotificationAction::Clear);
    }

    /// Active notifications in insertion order.
    pub(crate) fn records(&self) -> &[NotificationRecord] {
        self.queue.records()
    }
}

/// Access to the confirmation dialog.
#[derive(Clone, PartialEq)]
pub(crate) struct ConfirmHandle {
    state: UseReducerHandle<ConfirmState>,
}

impl ConfirmHandle {
    /// Open the dialog, replacing any pending request.
    pub(crate) fn request(&self, request: ConfirmRequest) {
        self.state.dispatch(ConfirmAction::Request(request));
    }

    /// Toggle the loading indicator.
    pub(crate) fn set_loading(&self, loading: bool) {
        self.state.dispatch(ConfirmAction::SetLoading(loading));
    }

    /// Close the dialog.
    pub(crate) fn close(&self) {
        self.state.dispatch(ConfirmAction::Close);
    }

    /// Run the confirm callback unless loading.
    pub(crate) fn confirm(&self) {
        if !self.state.loading {
            self.state.confirm();
        }
    }

    /// Run the cancel callback and close, unless loading.
    pub(crate) fn cancel(&self) {
        if self.state.cancel() {
            self.close();
        }
    }

    /// Current dialog.
    pub(crate) fn state(&self) -> &ConfirmState {
        &self.state
    }
}

/// Access to the singleton tooltip and its hover-intent timer.
#[derive(Clone)]
pub(crate) struct TooltipHandle {
    state: UseReducerHandle<TooltipState>,
    intent: Rc<RefCell<HoverIntent<Timeout>>>,
    hover_delay_ms: u32,
}

impl PartialEq for TooltipHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && Rc::ptr_eq(&self.intent, &other.intent)
            && self.hover_delay_ms == other.hover_delay_ms
    }
}

impl TooltipHandle {
    /// Show immediately.
    pub(crate) fn show(&self, request: TooltipRequest) {
        self.state.dispatch(TooltipAction::Show(request));
    }

    /// Cancel any pending hover intent and hide.
    pub(crate) fn hide(&self) {
        self.intent.borrow_mut().cancel();
        self.state.dispatch(TooltipAction::Hide);
    }

    /// Show after the hover delay, replacing any pending intent. `measure` runs when the delay
    /// elapses so the anchor rect is current.
    pub(crate) fn arm(&self, measure: impl FnOnce() -> Option<TooltipRequest> + 'static) {
        let handle = self.clone();
        let timeout = Timeout::new(self.hover_delay_ms, move || {
            let fired = handle.intent.borrow_mut().take();
            if let Some(request) = measure() {
                handle.show(request);
            }
            drop(fired);
        });
        self.intent.borrow_mut().arm(timeout);
    }

    /// Current descriptor.
    pub(crate) fn state(&self) -> &TooltipState {
        &self.state
    }
}

/// Access to the date registry.
#[derive(Clone, PartialEq)]
pub(crate) struct CalendarHandle {
    state: UseReducerHandle<CalendarState>,
}

impl CalendarHandle {
    /// Set the range start.
    pub(crate) fn set_start(&self, date: Option<NaiveDate>) {
        self.state.dispatch(CalendarAction::SetStart(date));
    }

    /// Set the range end.
    pub(crate) fn set_end(&self, date: Option<NaiveDate>) {
        self.state.dispatch(CalendarAction::SetEnd(date));
    }

    /// Upsert a keyed picker.
    pub(crate) fn update_picker(&self, key: impl Into<String>, value: Option<NaiveDate>) {
        self.state.dispatch(CalendarAction::UpdatePicker {
            key: key.into(),
            value,
        });
    }

    /// Remove a keyed picker.
    pub(crate) fn remove_picker(&self, key: impl Into<String>) {
        self.state.dispatch(CalendarAction::RemovePicker(key.into()));
    }

    /// Drop every picker and the range.
    pub(crate) fn clear_all(&self) {
        self.state.dispatch(CalendarAction::ClearAll);
    }

    /// Current registry.
    pub(crate) fn state(&self) -> &CalendarState {
        &self.state
    }
}

/// Access to the time registry.
#[derive(Clone, PartialEq)]
pub(crate) struct TimeHandle {
    state: UseReducerHandle<TimeState>,
}

impl TimeHandle {
    /// Set the range start.
    pub(crate) fn set_start(&self, time: Option<NaiveDateTime>) {
        self.state.dispatch(TimeAction::SetStart(time));
    }

    /// Set the range end.
    pub(crate) fn set_end(&self, time: Option<NaiveDateTime>) {
        self.state.dispatch(TimeAction::SetEnd(time));
    }

    /// Upsert a keyed picker.
    pub(crate) fn update_picker(&self, key: impl Into<String>, value: Option<NaiveDateTime>) {
        self.state.dispatch(TimeAction::UpdatePicker {
            key: key.into(),
            value,
        });
    }

    /// Remove a keyed picker.
    pub(crate) fn remove_picker(&self, key: impl Into<String>) {
        self.state.dispatch(TimeAction::RemovePicker(key.into()));
    }

    /// Drop every picker and the range.
    pub(crate) fn clear_all(&self) {
        self.state.dispatch(TimeAction::ClearAll);
    }

    /// Current registry.
    pub(crate) fn state(&self) -> &TimeState {
        &self.state
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct UiProvidersProps {
    pub config: Rc<UiConfig>,
    #[prop_or_default]
    pub children: Children,
}

/// Owns every registry for the lifetime of the app.
#[function_component(UiProviders)]
pub(crate) fn ui_providers(props: &UiProvidersProps) -> Html {
    let queue = use_reducer(NotificationQueue::default);
    let ids = use_memo(|_| IdSequence::default(), ());
    let confirm = use_reducer(ConfirmState::default);
    let tooltip = use_reducer(TooltipState::default);
    let intent = use_mut_ref(HoverIntent::<Timeout>::default);
    let calendar = use_reducer(CalendarState::default);
    let time = use_reducer(TimeState::default);

    let notifications = NotificationsHandle { queue, ids };
    let confirm = ConfirmHandle { state: confirm };
    let tooltip = TooltipHandle {
        state: tooltip,
        intent,
        hover_delay_ms: props.config.overlay.hover_delay_ms,
    };
    let calendar = CalendarHandle { state: calendar };
    let time = TimeHandle { state: time };

    html! {
        <ContextProvider<Rc<UiConfig>> context={Rc::clone(&props.config)}>
            <ContextProvider<NotificationsHandle> context={notifications}>
                <ContextProvider<ConfirmHandle> context={confirm}>
                    <ContextProvider<TooltipHandle> context={tooltip}>
                        <ContextProvider<CalendarHandle> context={calendar}>
                            <ContextProvider<TimeHandle> context={time}>
                                { for props.children.iter() }
                            </ContextProvider<TimeHandle>>
                        </ContextProvider<CalendarHandle>>
                    </ContextProvider<TooltipHandle>>
                </ContextProvider<ConfirmHandle>>
            </ContextProvider<NotificationsHandle>>
        </ContextProvider<Rc<UiConfig>>>
    }
}

fn fail_fast<T>(result: Result<T, ProviderError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            console::error!(err.to_string());
            panic!("{err}");
        }
    }
}

/// Notification queue, or the missing-provider error.
#[hook]
pub(crate) fn use_try_notifications() -> Result<NotificationsHandle, ProviderError> {
    require(
        use_context::<NotificationsHandle>(),
        "use_notifications",
        "UiProviders",
    )
}

/// Notification queue.
///
/// # Panics
///
/// Panics when called outside [`UiProviders`].
#[hook]
pub(crate) fn use_notifications() -> NotificationsHandle {
    fail_fast(use_try_notifications())
}

/// Confirmation dialog, or the missing-provider error.
#[hook]
pub(crate) fn use_try_confirm() -> Result<ConfirmHandle, ProviderError> {
    require(use_context::<ConfirmHandle>(), "use_confirm", "UiProviders")
}

/// Confirmation dialog.
///
/// # Panics
///
/// Panics when called outside [`UiProviders`].
#[hook]
pub(crate) fn use_confirm() -> ConfirmHandle {
    fail_fast(use_try_confirm())
}

/// Tooltip, or the missing-provider error.
#[hook]
pub(crate) fn use_try_tooltip() -> Result<TooltipHandle, ProviderError> {
    require(use_context::<TooltipHandle>(), "use_tooltip", "UiProviders")
}

/// Tooltip.
///
/// # Panics
///
/// Panics when called outside [`UiProviders`].
#[hook]
pub(crate) fn use_tooltip() -> TooltipHandle {
    fail_fast(use_try_tooltip())
}

/// Date registry, or the missing-provider error.
#[hook]
pub(crate) fn use_try_calendar() -> Result<CalendarHandle, ProviderError> {
    require(use_context::<CalendarHandle>(), "use_calendar", "UiProviders")
}

/// Date registry.
///
/// # Panics
///
/// Panics when called outside [`UiProviders`].
#[hook]
pub(crate) fn use_calendar() -> CalendarHandle {
    fail_fast(use_try_calendar())
}

/// Time registry, or the missing-provider error.
#[hook]
pub(crate) fn use_try_time() -> Result<TimeHandle, ProviderError> {
    require(use_context::<TimeHandle>(), "use_time", "UiProviders")
}

/// Time registry.
///
/// # Panics
///
/// Panics when called outside [`UiProviders`].
#[hook]
pub(crate) fn use_time() -> TimeHandle {
    fail_fast(use_try_time())
}

/// UI configuration; defaults when rendered outside [`UiProviders`].
#[hook]
pub(crate) fn use_ui_config() -> Rc<UiConfig> {
    use_context::<Rc<UiConfig>>().unwrap_or_default()
}
