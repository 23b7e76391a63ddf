use std::rc::Rc;

use metronique_test_support::timers::{TimerHandle, VirtualTimers};
use metronique_ui::core::config::UiConfig;
use metronique_ui::core::geometry::Rect;
use metronique_ui::core::lifecycle::HoverIntent;
use metronique_ui::core::placement::Placement;
use metronique_ui::features::tooltip::state::{TooltipAction, TooltipRequest, TooltipState};
use yew::Reducible;

/// Drives the tooltip handle the way a bound target does, with a virtual clock.
struct Tooltip {
    hover_delay_ms: u64,
    timers: VirtualTimers<&'static str>,
    intent: HoverIntent<TimerHandle<&'static str>>,
    state: Rc<TooltipState>,
}

impl Tooltip {
    fn new() -> Self {
        Self {
            hover_delay_ms: u64::from(UiConfig::default().overlay.hover_delay_ms),
            timers: VirtualTimers::new(),
            intent: HoverIntent::default(),
            state: Rc::new(TooltipState::default()),
        }
    }

    fn enter(&mut self, content: &'static str) {
        self.intent
            .arm(self.timers.schedule(self.hover_delay_ms, content));
    }

    fn hide(&mut self) {
        self.intent.cancel();
        self.state = Rc::clone(&self.state).reduce(TooltipAction::Hide);
    }

    fn advance(&mut self, by_ms: u64) {
        for content in self.timers.advance(by_ms) {
            let _fired = self.intent.take();
            self.state = Rc::clone(&self.state).reduce(TooltipAction::Show(TooltipRequest {
                content: content.to_string(),
                anchor: Rect::from_origin(100.0, 100.0, 60.0, 24.0),
                placement: Placement::Top,
                class: String::new(),
            }));
        }
    }
}

#[test]
fn hover_shows_after_the_delay() {
    let mut tooltip = Tooltip::new();
    tooltip.enter("Save");

    tooltip.advance(499);
    assert!(!tooltip.state.visible);

    tooltip.advance(1);
    assert!(tooltip.state.visible);
    assert_eq!(tooltip.state.content, "Save");
    assert!(!tooltip.intent.is_pending());
}

#[test]
fn unmounting_during_the_delay_cancels_the_pending_show() {
    let mut tooltip = Tooltip::new();
    tooltip.enter("Delete");
    tooltip.advance(200);
    assert_eq!(tooltip.timers.pending(), 1);

    tooltip.hide();
    assert_eq!(tooltip.timers.pending(), 0);

    tooltip.advance(1_000);
    assert!(!tooltip.state.visible);
}

#[test]
fn unmounting_a_shown_target_hides_the_bubble() {
    let mut tooltip = Tooltip::new();
    tooltip.enter("Archive");
    tooltip.advance(500);
    assert!(tooltip.state.visible);

    tooltip.hide();
    assert!(!tooltip.state.visible);
    assert_eq!(tooltip.timers.pending(), 0);
}

#[test]
fn entering_another_target_replaces_the_pending_intent() {
    let mut tooltip = Tooltip::new();
    tooltip.enter("first");
    tooltip.advance(300);
    tooltip.enter("second");
    assert_eq!(tooltip.timers.pending(), 1);

    tooltip.advance(200);
    assert!(!tooltip.state.visible);
    tooltip.advance(300);
    assert_eq!(tooltip.state.content, "second");
}
