/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<String>,
    pub children: Children,
}

/// Full-screen overlay with a centered content panel.
///
/// Clicking the backdrop closes the modal. Clicks inside the panel stop
/// propagation so they never reach the backdrop handler.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-panel" onclick={on_panel_click}>
                <div class="modal-header">
                    if let Some(title) = &props.title {
                        <h2 class="modal-title">{title}</h2>
                    }
                    <button
                        class="modal-close"
                        onclick={props.on_close.reform(|_| ())}
                    >
                        {"✕"}
                    </button>
                </div>
                <div class="modal-body">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

/// Blocking browser alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking browser confirmation dialog. Returns false when the dialog
/// cannot be shown, so callers treat that as a cancel.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
