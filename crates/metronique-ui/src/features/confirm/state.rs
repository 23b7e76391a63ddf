//! Confirmation dialog state and reducer.

use std::rc::Rc;

use yew::{Callback, Reducible};

use crate::core::tone::ConfirmKind;

/// Default dialog title.
pub const DEFAULT_TITLE: &str = "Confirm Action";
/// Default dialog message.
pub const DEFAULT_MESSAGE: &str = "Are you sure you want to proceed?";
/// Default confirm button label.
pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
/// Default cancel button label.
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";
/// Confirm button label while loading.
pub const LOADING_LABEL: &str = "Processing...";

/// Parameters of a confirmation request. Empty text fields keep the previous dialog's text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfirmRequest {
    /// Dialog title.
    pub title: Option<String>,
    /// Dialog body.
    pub message: Option<String>,
    /// Confirm button label.
    pub confirm_label: Option<String>,
    /// Cancel button label.
    pub cancel_label: Option<String>,
    /// Visual intent.
    pub kind: Option<ConfirmKind>,
    /// Invoked on confirm.
    pub on_confirm: Option<Callback<()>>,
    /// Invoked on cancel, before the dialog closes.
    pub on_cancel: Option<Callback<()>>,
}

impl ConfirmRequest {
    /// Request with a title and message.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Set the visual intent.
    #[must_use]
    pub const fn kind(mut self, kind: ConfirmKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the button labels.
    #[must_use]
    pub fn labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = Some(confirm.into());
        self.cancel_label = Some(cancel.into());
        self
    }

    /// Set the confirm callback.
    #[must_use]
    pub fn on_confirm(mut self, callback: Callback<()>) -> Self {
        self.on_confirm = Some(callback);
        self
    }

    /// Set the cancel callback.
    #[must_use]
    pub fn on_cancel(mut self, callback: Callback<()>) -> Self {
        self.on_cancel = Some(callback);
        self
    }
}

/// Reducer actions for [`ConfirmState`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfirmAction {
    /// Open (or replace) the dialog.
    Request(ConfirmRequest),
    /// Toggle the loading indicator.
    SetLoading(bool),
    /// Close the dialog.
    Close,
}

/// The dialog as rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmState {
    /// Whether the dialog is shown.
    pub open: bool,
    /// Title.
    pub title: String,
    /// Body.
    pub message: String,
    /// Confirm button label.
    pub confirm_label: String,
    /// Cancel button label.
    pub cancel_label: String,
    /// Visual intent.
    pub kind: ConfirmKind,
    /// Whether the confirm action is in flight.
    pub loading: bool,
    on_confirm: Option<Callback<()>>,
    on_cancel: Option<Callback<()>>,
}

impl Default for ConfirmState {
    fn default() -> Self {
        Self {
            open: false,
            title: DEFAULT_TITLE.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
            kind: ConfirmKind::Default,
            loading: false,
            on_confirm: None,
            on_cancel: None,
        }
    }
}

fn keep_or_replace(current: &mut String, next: Option<String>) {
    if let Some(next) = next.filter(|value| !value.is_empty()) {
        *current = next;
    }
}

impl ConfirmState {
    fn apply_request(&mut self, request: ConfirmRequest) {
        if self.open {
            tracing::debug!(title = %self.title, "confirmation replaced before resolving");
        }
        keep_or_replace(&mut self.title, request.title);
        keep_or_replace(&mut self.message, request.message);
        keep_or_replace(&mut self.confirm_label, request.confirm_label);
        keep_or_replace(&mut self.cancel_label, request.cancel_label);
        if let Some(kind) = request.kind {
            self.kind = kind;
        }
        self.on_confirm = request.on_confirm;
        self.on_cancel = request.on_cancel;
        self.open = true;
        self.loading = false;
    }

    /// Invoke the confirm callback. The dialog stays open.
    pub fn confirm(&self) {
        if !self.open {
            return;
        }
        if let Some(callback) = &self.on_confirm {
            callback.emit(());
        }
    }

    /// Invoke the cancel callback. Returns `true` when the caller should close the dialog;
    /// cancellation is ignored while loading.
    pub fn cancel(&self) -> bool {
        if !self.open || self.loading {
            return false;
        }
        if let Some(callback) = &self.on_cancel {
            callback.emit(());
        }
        true
    }

    /// Label for the confirm button, accounting for loading.
    #[must_use]
    pub fn confirm_button_label(&self) -> &str {
        if self.loading {
            LOADING_LABEL
        } else {
            &self.confirm_label
        }
    }
}

impl Reducible for ConfirmState {
    type Action = ConfirmAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ConfirmAction::Request(request) => next.apply_request(request),
            ConfirmAction::SetLoading(loading) => next.loading = loading,
            ConfirmAction::Close => {
                next.open = false;
                next.loading = false;
            }
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, Callback::from(move |()| handle.set(handle.get() + 1)))
    }

    #[test]
    fn request_keeps_previous_text_for_empty_fields() {
        let state = Rc::new(ConfirmState::default());
        let state = state.reduce(ConfirmAction::Request(ConfirmRequest {
            title: Some("Delete file?".to_string()),
            message: Some(String::new()),
            kind: Some(ConfirmKind::Danger),
            ..ConfirmRequest::default()
        }));
        assert!(state.open);
        assert_eq!(state.title, "Delete file?");
        assert_eq!(state.message, DEFAULT_MESSAGE);
        assert_eq!(state.kind, ConfirmKind::Danger);

        let state = state.reduce(ConfirmAction::Close);
        let state = state.reduce(ConfirmAction::Request(ConfirmRequest::default()));
        assert_eq!(state.title, "Delete file?");
        assert_eq!(state.kind, ConfirmKind::Danger);
    }

    #[test]
    fn second_request_replaces_callbacks() {
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();
        let state = Rc::new(ConfirmState::default())
            .reduce(ConfirmAction::Request(
                ConfirmRequest::new("A", "a").on_confirm(first_cb),
            ))
            .reduce(ConfirmAction::Request(
                ConfirmRequest::new("B", "b").on_confirm(second_cb),
            ));
        state.confirm();
        assert_eq!((first.get(), second.get()), (0, 1));
        assert_eq!(state.title, "B");
    }

    #[test]
    fn confirm_does_not_close_and_cancel_is_blocked_while_loading() {
        let (cancelled, cancel_cb) = counter();
        let state = Rc::new(ConfirmState::default())
            .reduce(ConfirmAction::Request(
                ConfirmRequest::new("Save", "Save changes?").on_cancel(cancel_cb),
            ))
            .reduce(ConfirmAction::SetLoading(true));
        state.confirm();
        assert!(state.open);
        assert_eq!(state.confirm_button_label(), LOADING_LABEL);
        assert!(!state.cancel());
        assert_eq!(cancelled.get(), 0);

        let state = state.reduce(ConfirmAction::SetLoading(false));
        assert!(state.cancel());
        assert_eq!(cancelled.get(), 1);
        let state = state.reduce(ConfirmAction::Close);
        assert!(!state.open);
    }

    #[test]
    fn request_resets_loading() {
        let state = Rc::new(ConfirmState::default())
            .reduce(ConfirmAction::Request(ConfirmRequest::new("A", "a")))
            .reduce(ConfirmAction::SetLoading(true))
            .reduce(ConfirmAction::Request(ConfirmRequest::new("B", "b")));
        assert!(!state.loading);
        assert_eq!(state.confirm_button_label(), DEFAULT_CONFIRM_LABEL);
    }
}
