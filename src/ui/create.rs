/// Create URL dialog

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::api;
use crate::link_data::LinkRecord;
use crate::operations;
use crate::ui::components::{alert, Modal};

#[derive(Clone, PartialEq)]
enum CreateState {
    Editing,
    Submitting,
    Success(String), // composed short URL
}

#[derive(Properties, PartialEq)]
pub struct CreateUrlModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Invoked with the server's record after a successful create.
    pub on_created: Callback<LinkRecord>,
}

#[function_component(CreateUrlModal)]
pub fn create_url_modal(props: &CreateUrlModalProps) -> Html {
    let state = use_state(|| CreateState::Editing);
    let redirect_url = use_state(String::new);
    let discord_webhook = use_state(String::new);
    let file_input = use_node_ref();
    let session = use_mut_ref(|| 0u32);

    // Reset to a blank editing form on every closed→open transition.
    // Bumping the session drops completions from the previous session.
    {
        let state = state.clone();
        let redirect_url = redirect_url.clone();
        let discord_webhook = discord_webhook.clone();
        let session = session.clone();

        use_effect_with(props.open, move |open| {
            *session.borrow_mut() += 1;
            if *open {
                state.set(CreateState::Editing);
                redirect_url.set(String::new());
                discord_webhook.set(String::new());
            }
            || ()
        });
    }

    let on_redirect_input = {
        let redirect_url = redirect_url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                redirect_url.set(input.value());
            }
        })
    };

    let on_webhook_input = {
        let discord_webhook = discord_webhook.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                discord_webhook.set(input.value());
            }
        })
    };

    // Submit handler
    let on_submit = {
        let state = state.clone();
        let redirect_url = redirect_url.clone();
        let discord_webhook = discord_webhook.clone();
        let file_input = file_input.clone();
        let session = session.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if matches!(*state, CreateState::Submitting) {
                return;
            }
            if !operations::form_is_complete(&redirect_url, &discord_webhook) {
                return;
            }

            let file = file_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            state.set(CreateState::Submitting);

            let state = state.clone();
            let redirect_field = redirect_url.clone();
            let webhook_field = discord_webhook.clone();
            let file_input = file_input.clone();
            let on_created = on_created.clone();
            let session = session.clone();
            let my_session = *session.borrow();
            let redirect = (*redirect_field).clone();
            let webhook = (*webhook_field).clone();

            spawn_local(async move {
                match api::create_link(&redirect, &webhook, file).await {
                    Ok(record) => {
                        if *session.borrow() != my_session {
                            log::info!("Dropping create response for a closed dialog");
                            return;
                        }

                        let display_url =
                            operations::short_url(&api::site_origin(), &record.short_code);
                        state.set(CreateState::Success(display_url));

                        // Blank the form so the next open starts fresh; the
                        // file control is cleared at the DOM level.
                        redirect_field.set(String::new());
                        webhook_field.set(String::new());
                        if let Some(input) = file_input.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }

                        on_created.emit(record);
                    }
                    Err(e) => {
                        if *session.borrow() != my_session {
                            return;
                        }
                        log::error!("Failed to create short URL: {}", e);
                        alert(&format!("Failed to create short URL: {}", e));
                        state.set(CreateState::Editing);
                    }
                }
            });
        })
    };

    let submitting = matches!(*state, CreateState::Submitting);

    html! {
        <Modal open={props.open} on_close={props.on_close.clone()} title={"Create URL".to_string()}>
            if let CreateState::Success(url) = &*state {
                <Alert r#type={AlertType::Success} title={"Short URL created"} inline={true}>
                    <p class="success-url">{url.clone()}</p>
                </Alert>
            }

            <form class="create-form" onsubmit={on_submit}>
                <label class="form-label" for="redirect-url">{"Redirect URL"}</label>
                <input
                    id="redirect-url"
                    type="url"
                    required={true}
                    placeholder="https://example.com"
                    value={(*redirect_url).clone()}
                    oninput={on_redirect_input}
                    class="form-input"
                />

                <label class="form-label" for="discord-webhook">{"Discord webhook URL"}</label>
                <input
                    id="discord-webhook"
                    type="url"
                    required={true}
                    placeholder="https://discord.com/api/webhooks/..."
                    value={(*discord_webhook).clone()}
                    oninput={on_webhook_input}
                    class="form-input"
                />

                <label class="form-label" for="custom-html">{"Custom page (optional)"}</label>
                <input
                    id="custom-html"
                    type="file"
                    accept=".html"
                    ref={file_input.clone()}
                    class="form-input"
                />

                <button
                    type="submit"
                    class="pf-v5-c-button pf-m-primary pf-m-block"
                    disabled={submitting}
                >
                    {if submitting { "Creating..." } else { "Create short URL" }}
                </button>
            </form>
        </Modal>
    }
}
