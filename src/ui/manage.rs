/// Manage URLs dialog

use yew::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::api;
use crate::link_data::LinkRecord;
use crate::operations;
use crate::ui::components::{alert, confirm, Modal};

#[derive(Clone, PartialEq)]
enum ViewState {
    Loading,
    Idle,
}

#[derive(Properties, PartialEq)]
pub struct ManageUrlsModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ManageUrlsModal)]
pub fn manage_urls_modal(props: &ManageUrlsModalProps) -> Html {
    let state = use_state(|| ViewState::Loading);
    let links = use_state(Vec::<LinkRecord>::new);
    let session = use_mut_ref(|| 0u32);

    // Refetch the full list on every closed→open transition. Fetch
    // failures are logged only; the dialog keeps its last snapshot.
    {
        let state = state.clone();
        let links = links.clone();
        let session = session.clone();

        use_effect_with(props.open, move |open| {
            *session.borrow_mut() += 1;
            if *open {
                state.set(ViewState::Loading);
                let my_session = *session.borrow();

                spawn_local(async move {
                    match api::fetch_links().await {
                        Ok(records) => {
                            if *session.borrow() != my_session {
                                return;
                            }
                            links.set(records);
                            state.set(ViewState::Idle);
                        }
                        Err(e) => {
                            if *session.borrow() != my_session {
                                return;
                            }
                            log::error!("Failed to load short URLs: {}", e);
                            state.set(ViewState::Idle);
                        }
                    }
                });
            }
            || ()
        });
    }

    // Delete handler, gated behind a confirmation prompt
    let on_delete = {
        let links = links.clone();
        let session = session.clone();

        Callback::from(move |short_code: String| {
            if !confirm(&format!(
                "Delete /{}? Its visitors will see a 404 from now on.",
                short_code
            )) {
                return;
            }

            let links = links.clone();
            let session = session.clone();
            let my_session = *session.borrow();

            spawn_local(async move {
                match api::delete_link(&short_code).await {
                    Ok(()) => {
                        if *session.borrow() != my_session {
                            return;
                        }
                        let mut remaining = (*links).clone();
                        operations::remove_by_code(&mut remaining, &short_code);
                        links.set(remaining);
                    }
                    Err(e) => {
                        if *session.borrow() != my_session {
                            return;
                        }
                        log::error!("Failed to delete {}: {}", short_code, e);
                        alert(&format!("Failed to delete short URL: {}", e));
                    }
                }
            });
        })
    };

    let origin = api::site_origin();

    html! {
        <Modal open={props.open} on_close={props.on_close.clone()} title={"Manage URLs".to_string()}>
            {match &*state {
                ViewState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Loading short URLs..."}</p>
                    </div>
                },
                ViewState::Idle => html! {
                    if links.is_empty() {
                        <div class="empty-state">
                            <p>{"No short URLs yet."}</p>
                            <p class="empty-state-hint">{"Use Create URL to add your first link."}</p>
                        </div>
                    } else {
                        <div class="links-list">
                            {for links.iter().map(|record| html! {
                                <LinkRow
                                    key={record.short_code.clone()}
                                    record={record.clone()}
                                    origin={origin.clone()}
                                    on_delete={on_delete.clone()}
                                />
                            })}
                        </div>
                    }
                },
            }}
        </Modal>
    }
}

// Single row in the links list
#[derive(Properties, PartialEq)]
struct LinkRowProps {
    record: LinkRecord,
    origin: String,
    on_delete: Callback<String>,
}

#[function_component(LinkRow)]
fn link_row(props: &LinkRowProps) -> Html {
    let record = &props.record;
    let display_url = operations::short_url(&props.origin, &record.short_code);

    html! {
        <div class="link-row">
            <div class="link-content">
                <a class="link-short" href={display_url.clone()} target="_blank">
                    {display_url.clone()}
                </a>
                <p class="link-target">
                    {"Redirects to "}{&record.redirect_url}
                </p>
                <p class="link-meta">
                    {format!(
                        "{} clicks • created {}",
                        record.click_count,
                        format_created_at(&record.created_at)
                    )}
                </p>
            </div>
            <div class="link-actions">
                <Button
                    onclick={props.on_delete.reform({
                        let short_code = record.short_code.clone();
                        move |_| short_code.clone()
                    })}
                    variant={ButtonVariant::Danger}
                >
                    {"🗑️ Delete"}
                </Button>
            </div>
        </div>
    }
}

/// Localized date for a server timestamp.
fn format_created_at(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
}
