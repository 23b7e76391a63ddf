//! Tooltip binding component and the singleton bubble.

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::EventTarget;
use yew::prelude::*;

use crate::app::context::{use_tooltip, use_ui_config};
use crate::components::floating::{measure, on_any_scroll, viewport};
use crate::core::placement::Placement;
use crate::core::positioner::{TooltipLayout, place_tooltip};
use crate::features::tooltip::state::{TooltipRequest, TooltipState};

#[derive(Properties, PartialEq)]
pub(crate) struct TooltipTargetProps {
    pub content: AttrValue,
    #[prop_or_default]
    pub placement: Placement,
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children and shows `content` after the hover delay.
///
/// Leaving the target, clicking it (capture phase) or unmounting it hides the tooltip and drops
/// any pending hover intent.
#[function_component(TooltipTarget)]
pub(crate) fn tooltip_target(props: &TooltipTargetProps) -> Html {
    let tooltip = use_tooltip();
    let node = use_node_ref();

    let on_enter = {
        let tooltip = tooltip.clone();
        let node = node.clone();
        let content = props.content.to_string();
        let class = props.class.to_string();
        let placement = props.placement;
        Callback::from(move |_: MouseEvent| {
            let node = node.clone();
            let content = content.clone();
            let class = class.clone();
            tooltip.arm(move || {
                measure(&node).map(|anchor| TooltipRequest {
                    content,
                    anchor,
                    placement,
                    class,
                })
            });
        })
    };
    let on_leave = {
        let tooltip = tooltip.clone();
        Callback::from(move |_: MouseEvent| tooltip.hide())
    };
    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let listener = node.cast::<EventTarget>().map(|target| {
                    let tooltip = tooltip.clone();
                    EventListener::new_with_options(
                        &target,
                        "click",
                        EventListenerOptions::run_in_capture_phase(),
                        move |_| tooltip.hide(),
                    )
                });
                move || {
                    drop(listener);
                    tooltip.hide();
                }
            },
            (),
        );
    }

    html! {
        <span
            ref={node}
            class="tooltip-target inline-flex"
            data-placement={props.placement.as_str()}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            { for props.children.iter() }
        </span>
    }
}

/// The one tooltip bubble. Positions itself after each show and hides on any scroll.
#[function_component(TooltipLayer)]
pub(crate) fn tooltip_layer() -> Html {
    let tooltip = use_tooltip();
    let config = use_ui_config();
    let bubble = use_node_ref();
    let layout = use_state(|| None::<TooltipLayout>);
    let state = tooltip.state().clone();

    {
        let bubble = bubble.clone();
        let layout = layout.clone();
        let metrics = config.tooltip_metrics();
        use_effect_with_deps(
            move |state: &TooltipState| {
                if !state.visible {
                    layout.set(None);
                } else if let (Some(anchor), Some(rect)) = (state.anchor, measure(&bubble)) {
                    layout.set(Some(place_tooltip(
                        &anchor,
                        rect.size(),
                        state.placement,
                        viewport(),
                        metrics,
                    )));
                }
                || ()
            },
            state.clone(),
        );
    }
    {
        let tooltip = tooltip.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                let listener = visible.then(|| on_any_scroll(move |_| tooltip.hide()));
                move || drop(listener)
            },
            state.visible,
        );
    }

    let shown = (*layout).filter(|_| state.visible);
    let style = shown.map_or_else(
        || "top: 0px; left: 0px; visibility: hidden;".to_string(),
        |layout| layout.coordinate.to_style(),
    );
    let placement = shown.map_or(state.placement, |layout| layout.placement);

    html! {
        <div
            ref={bubble}
            role="tooltip"
            aria-hidden={(!state.visible).to_string()}
            data-placement={placement.as_str()}
            style={style}
            class={classes!(
                "tooltip-bubble",
                "pointer-events-none",
                "fixed",
                "z-50",
                "max-w-xs",
                "rounded-md",
                "bg-gray-900",
                "px-3",
                "py-2",
                "text-xs",
                "text-white",
                "shadow-lg",
                shown.is_some().then_some("tooltip-visible"),
                state.class.clone(),
            )}
        >
            { state.content.clone() }
        </div>
    }
}
