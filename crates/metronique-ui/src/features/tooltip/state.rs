//! Tooltip descriptor and reducer.

use std::rc::Rc;

use yew::Reducible;

use crate::core::geometry::Rect;
use crate::core::placement::Placement;

/// What to show and where.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRequest {
    /// Text content.
    pub content: String,
    /// Target rect measured when the hover intent fired.
    pub anchor: Rect,
    /// Requested placement.
    pub placement: Placement,
    /// Extra classes for the bubble.
    pub class: String,
}

/// Reducer actions for [`TooltipState`].
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipAction {
    /// Show a descriptor, replacing any current one.
    Show(TooltipRequest),
    /// Hide, keeping the last content for the exit transition.
    Hide,
}

/// Singleton tooltip descriptor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    /// Whether the bubble is shown.
    pub visible: bool,
    /// Text content.
    pub content: String,
    /// Target rect.
    pub anchor: Option<Rect>,
    /// Requested placement.
    pub placement: Placement,
    /// Extra classes.
    pub class: String,
}

impl Reducible for TooltipState {
    type Action = TooltipAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TooltipAction::Show(request) if request.content.is_empty() => {
                tracing::debug!("ignoring tooltip without content");
                self
            }
            TooltipAction::Show(request) => Rc::new(Self {
                visible: true,
                content: request.content,
                anchor: Some(request.anchor),
                placement: request.placement,
                class: request.class,
            }),
            TooltipAction::Hide if !self.visible => self,
            TooltipAction::Hide => Rc::new(Self {
                visible: false,
                ..(*self).clone()
            }),
        }
    }
}
