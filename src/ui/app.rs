/// Landing page with the create/manage entry points

use yew::prelude::*;
use patternfly_yew::prelude::*;
use crate::link_data::LinkRecord;
use crate::ui::create::CreateUrlModal;
use crate::ui::manage::ManageUrlsModal;

#[function_component(App)]
pub fn app() -> Html {
    // The two dialogs are independent; nothing forces exclusivity.
    let create_open = use_state(|| false);
    let manage_open = use_state(|| false);

    let open_create = {
        let create_open = create_open.clone();
        Callback::from(move |_| create_open.set(true))
    };
    let close_create = {
        let create_open = create_open.clone();
        Callback::from(move |_| create_open.set(false))
    };

    let open_manage = {
        let manage_open = manage_open.clone();
        Callback::from(move |_| manage_open.set(true))
    };
    let close_manage = {
        let manage_open = manage_open.clone();
        Callback::from(move |_| manage_open.set(false))
    };

    // The manage list refetches on open, so a fresh record shows up there
    // without any cross-modal signaling.
    let on_created = Callback::from(|record: LinkRecord| {
        log::info!("Created short URL {}", record.short_code);
    });

    html! {
        <div class="landing">
            <header class="hero">
                <h1 class="hero-title">{"NOVAURL"}</h1>
                <p class="hero-subtitle">
                    {"Short links with Discord notifications on every visit."}
                </p>
                <div class="hero-actions">
                    <Button onclick={open_create} variant={ButtonVariant::Primary}>
                        {"Create URL"}
                    </Button>
                    <Button onclick={open_manage} variant={ButtonVariant::Secondary}>
                        {"Manage URLs"}
                    </Button>
                </div>
            </header>

            <section class="features">
                <div class="feature-card">
                    <h3 class="feature-title">{"Instant short links"}</h3>
                    <p class="feature-text">
                        {"Paste a destination and get a share-ready link on this domain."}
                    </p>
                </div>
                <div class="feature-card">
                    <h3 class="feature-title">{"Discord notifications"}</h3>
                    <p class="feature-text">
                        {"Every visit posts the visitor details to your webhook."}
                    </p>
                </div>
                <div class="feature-card">
                    <h3 class="feature-title">{"Click analytics"}</h3>
                    <p class="feature-text">
                        {"Visits are counted per link and shown in the manage view."}
                    </p>
                </div>
                <div class="feature-card">
                    <h3 class="feature-title">{"Custom landing pages"}</h3>
                    <p class="feature-text">
                        {"Upload an HTML page to show while the redirect happens."}
                    </p>
                </div>
            </section>

            <CreateUrlModal
                open={*create_open}
                on_close={close_create}
                on_created={on_created}
            />
            <ManageUrlsModal
                open={*manage_open}
                on_close={close_manage}
            />

            <p class="footer-landing">
                {"NOVAURL v0.1.0"}
            </p>
        </div>
    }
}
