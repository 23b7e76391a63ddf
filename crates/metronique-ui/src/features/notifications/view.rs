//! Alert stack rendering.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::app::context::{use_notifications, use_ui_config};
use crate::components::floating::measure;
use crate::core::lifecycle::DismissalState;
use crate::core::particles::{Particle, burst};
use crate::features::notifications::state::{NotificationPhase, NotificationRecord};

/// Fixed stack of active alerts, newest last.
#[function_component(AlertHost)]
pub(crate) fn alert_host() -> Html {
    let notifications = use_notifications();
    html! {
        <div class="alert-host fixed top-4 right-4 z-50 flex w-96 max-w-full flex-col gap-3" aria-live="polite">
            { for notifications.records().iter().map(|record| html! {
                <AlertItem key={record.id.to_string()} record={record.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AlertItemProps {
    pub record: NotificationRecord,
}

/// One alert. Owns its auto-dismiss and exit timers; unmounting cancels both.
#[function_component(AlertItem)]
pub(crate) fn alert_item(props: &AlertItemProps) -> Html {
    let notifications = use_notifications();
    let config = use_ui_config();
    let lifecycle = use_mut_ref(DismissalState::<Timeout>::default);
    let particles = use_state(Vec::<Particle>::new);
    let node = use_node_ref();
    let id = props.record.id;

    let begin_close = {
        let lifecycle = lifecycle.clone();
        let particles = particles.clone();
        let node = node.clone();
        let exit_ms = config.notifications.exit_ms;
        let count = config.notifications.particle_count;
        Callback::from(move |()| {
            let exit_lifecycle = lifecycle.clone();
            let exit_notifications = notifications.clone();
            let started = lifecycle.borrow_mut().begin_closing(move || {
                Timeout::new(exit_ms, move || {
                    if exit_lifecycle.borrow_mut().finish() {
                        exit_notifications.dismiss(id);
                    }
                })
            });
            if started {
                let area = measure(&node).map(|rect| rect.size()).unwrap_or_default();
                particles.set(burst(count, area, js_sys::Math::random));
                notifications.begin_closing(id);
            }
        })
    };

    {
        let begin_close = begin_close.clone();
        let visible_ms = config.notifications.visible_ms;
        use_effect_with_deps(
            move |_| {
                let auto = Timeout::new(visible_ms, move || begin_close.emit(()));
                lifecycle.borrow_mut().arm(auto);
                move || lifecycle.borrow_mut().cancel()
            },
            (),
        );
    }

    let record = &props.record;
    let style = record.kind.style();
    let closing = record.phase == NotificationPhase::Closing;
    let on_close = begin_close.reform(|_: MouseEvent| ());

    html! {
        <div
            ref={node}
            role="alert"
            data-kind={record.kind.as_str()}
            class={classes!(
                "alert",
                "relative",
                "flex",
                "items-start",
                "gap-3",
                "rounded-lg",
                "border",
                "p-4",
                "shadow-lg",
                style.surface,
                style.border,
                closing.then_some("alert-closing"),
            )}
        >
            <span class={classes!("alert-icon", "text-lg", style.icon_tone)} aria-hidden="true">
                { style.glyph }
            </span>
            <p class={classes!("alert-message", "flex-1", "text-sm", "font-medium", style.text)}>
                { record.message.clone() }
            </p>
            <button
                type="button"
                class={classes!("alert-close", "opacity-70", "hover:opacity-100", style.text)}
                aria-label="Close"
                disabled={closing}
                onclick={on_close}
            >
                { "✕" }
            </button>
            if closing {
                <div class="alert-particles pointer-events-none absolute inset-0" aria-hidden="true">
                    { for particles.iter().map(|particle| html! {
                        <span key={particle.id} class="alert-particle" style={particle.style(style.particle_color)} />
                    }) }
                </div>
            }
        </div>
    }
}
