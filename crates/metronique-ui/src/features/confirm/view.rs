//! Modal confirmation dialog.

use yew::prelude::*;

use crate::app::context::use_confirm;

/// Renders the pending confirmation, if any.
#[function_component(ConfirmHost)]
pub(crate) fn confirm_host() -> Html {
    let confirm = use_confirm();
    let state = confirm.state();
    if !state.open {
        return html! {};
    }
    let style = state.kind.style();

    let on_backdrop = {
        let confirm = confirm.clone();
        Callback::from(move |_: MouseEvent| confirm.cancel())
    };
    let on_cancel = {
        let confirm = confirm.clone();
        Callback::from(move |_: MouseEvent| confirm.cancel())
    };
    let on_confirm = {
        let confirm = confirm.clone();
        Callback::from(move |_: MouseEvent| confirm.confirm())
    };
    let on_keydown = {
        let confirm = confirm.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                confirm.cancel();
            }
        })
    };

    html! {
        <div class="confirm-layer fixed inset-0 z-50 flex items-center justify-center" onkeydown={on_keydown}>
            <div class="confirm-backdrop absolute inset-0 bg-black/50" onclick={on_backdrop} />
            <div
                class="confirm-dialog relative w-full max-w-md rounded-xl bg-white p-6 shadow-xl"
                role="alertdialog"
                aria-modal="true"
                data-kind={state.kind.as_str()}
            >
                <div class="flex items-start gap-4">
                    <div class={classes!("confirm-icon", "flex", "h-12", "w-12", "items-center", "justify-center", "rounded-full", style.icon_surface)}>
                        <span class={classes!("text-2xl", style.icon_tone)} aria-hidden="true">{ style.glyph }</span>
                    </div>
                    <div class="flex-1">
                        <h3 class="text-lg font-semibold text-gray-900">{ state.title.clone() }</h3>
                        <p class="mt-2 text-sm text-gray-600">{ state.message.clone() }</p>
                    </div>
                </div>
                <div class="mt-6 flex justify-end gap-3">
                    <button
                        type="button"
                        class="rounded-lg border border-gray-300 px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:opacity-50"
                        disabled={state.loading}
                        onclick={on_cancel}
                    >
                        { state.cancel_label.clone() }
                    </button>
                    <button
                        type="button"
                        class={classes!("rounded-lg", "px-4", "py-2", "text-sm", "font-medium", "text-white", "disabled:opacity-50", style.confirm_button)}
                        disabled={state.loading}
                        aria-busy={state.loading.to_string()}
                        onclick={on_confirm}
                    >
                        if state.loading {
                            <span class="confirm-spinner mr-2 inline-block animate-spin" aria-hidden="true">{ "⟳" }</span>
                        }
                        { state.confirm_button_label().to_string() }
                    </button>
                </div>
            </div>
        </div>
    }
}
