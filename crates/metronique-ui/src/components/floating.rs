//! DOM measurement and the dropdown positioning hook.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Node};
use yew::prelude::*;

use crate::core::geometry::{Rect, Viewport};
use crate::core::positioner::{DropdownLayout, OverlayMetrics, reposition_dropdown};

/// Bounding rect of a mounted element.
pub(crate) fn measure(node: &NodeRef) -> Option<Rect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Rect {
        top: rect.top(),
        left: rect.left(),
        right: rect.right(),
        bottom: rect.bottom(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// Current inner window size.
pub(crate) fn viewport() -> Viewport {
    let window = window();
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: f64| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
    };
    Viewport {
        width: read(window.inner_width(), 1280.0),
        height: read(window.inner_height(), 800.0),
    }
}

/// Whether the event target lies inside `node`.
pub(crate) fn event_within(event: &Event, node: &NodeRef) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    node.get()
        .is_some_and(|container| container.contains(target.as_ref()))
}

/// Scroll listener on the window in capture phase, so scrolling any ancestor is seen.
pub(crate) fn on_any_scroll(callback: impl FnMut(&Event) + 'static) -> EventListener {
    EventListener::new_with_options(
        &window(),
        "scroll",
        EventListenerOptions::run_in_capture_phase(),
        callback,
    )
}

/// `ResizeObserver` registration that disconnects on drop.
struct ResizeWatch {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl ResizeWatch {
    fn observe(target: &Element, on_resize: Rc<dyn Fn()>) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(move || on_resize());
        let observer = match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                console::warn!("ResizeObserver unavailable", err);
                return None;
            }
        };
        observer.observe(target);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Keep an open dropdown positioned next to its trigger.
///
/// While `open`, the layout is recomputed on open, on trigger resize, on window resize and on
/// any scroll. A `mousedown` outside both the trigger and the panel emits `on_outside`.
#[hook]
pub(crate) fn use_dropdown_position(
    open: bool,
    trigger: NodeRef,
    panel: NodeRef,
    metrics: OverlayMetrics,
    on_outside: Callback<()>,
) -> DropdownLayout {
    let layout = use_state(DropdownLayout::default);
    let last = use_mut_ref(DropdownLayout::default);
    {
        let layout = layout.clone();
        use_effect_with_deps(
            move |open| {
                let mut listeners = Vec::new();
                let mut watch = None;
                if *open {
                    let recompute: Rc<dyn Fn()> = {
                        let trigger = trigger.clone();
                        let panel = panel.clone();
                        Rc::new(move || {
                            let previous = *last.borrow();
                            let next = reposition_dropdown(
                                previous,
                                measure(&trigger),
                                measure(&panel).map(|rect| rect.size()),
                                viewport(),
                                metrics,
                            );
                            if next != previous {
                                *last.borrow_mut() = next;
                                layout.set(next);
                            }
                        })
                    };
                    recompute();

                    listeners.push(EventListener::new(&window(), "resize", {
                        let recompute = Rc::clone(&recompute);
                        move |_| recompute()
                    }));
                    listeners.push(on_any_scroll({
                        let recompute = Rc::clone(&recompute);
                        move |_| recompute()
                    }));
                    listeners.push(EventListener::new(&document(), "mousedown", {
                        let trigger = trigger.clone();
                        let panel = panel.clone();
                        move |event| {
                            if !event_within(event, &trigger) && !event_within(event, &panel) {
                                on_outside.emit(());
                            }
                        }
                    }));
                    watch = trigger
                        .cast::<Element>()
                        .and_then(|element| ResizeWatch::observe(&element, recompute));
                }
                move || {
                    drop(listeners);
                    drop(watch);
                }
            },
            open,
        );
    }
    *layout
}

/// Shared slot for a timer owned by a component.
pub(crate) type TimerSlot = Rc<RefCell<Option<gloo_timers::callback::Timeout>>>;
