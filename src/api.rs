/// REST client for the NOVAURL backend (`/api` routes)
use crate::link_data::LinkRecord;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, RequestInit, Response};

const API_BASE: &str = "/api";

/// Origin the console is served from. Short links share it, so it is
/// the prefix of every display URL.
pub fn site_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window object available".to_string())
}

/// Issue a request and check the status. Transport failures and non-2xx
/// responses both come back as the same error string.
async fn fetch(url: &str, init: &RequestInit) -> Result<Response, String> {
    let promise = window()?.fetch_with_str_and_init(url, init);

    let response = JsFuture::from(promise)
        .await
        .map_err(|e| format!("Request failed: {:?}", e))?;

    let response: Response = response
        .dyn_into()
        .map_err(|e| format!("Unexpected fetch result: {:?}", e))?;

    if response.ok() {
        Ok(response)
    } else {
        Err(format!("Server returned {}", response.status()))
    }
}

async fn json_body(response: Response) -> Result<JsValue, String> {
    let promise = response
        .json()
        .map_err(|e| format!("Failed to read response body: {:?}", e))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| format!("Failed to read response body: {:?}", e))
}

/// Create a short URL from the multipart form the backend expects:
/// `redirect_url`, `discord_webhook`, and an optional `custom_html` page.
pub async fn create_link(
    redirect_url: &str,
    discord_webhook: &str,
    custom_html: Option<File>,
) -> Result<LinkRecord, String> {
    let form = FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form.append_with_str("redirect_url", redirect_url)
        .map_err(|e| format!("Failed to build form data: {:?}", e))?;
    form.append_with_str("discord_webhook", discord_webhook)
        .map_err(|e| format!("Failed to build form data: {:?}", e))?;

    if let Some(file) = custom_html {
        form.append_with_blob_and_filename("custom_html", &file, &file.name())
            .map_err(|e| format!("Failed to attach custom page: {:?}", e))?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);

    let response = fetch(&format!("{}/urls", API_BASE), &init).await?;
    let body = json_body(response).await?;

    serde_wasm_bindgen::from_value(body)
        .map_err(|e| format!("Failed to parse link record: {:?}", e))
}

/// Fetch the full list of links for the manage view.
pub async fn fetch_links() -> Result<Vec<LinkRecord>, String> {
    let init = RequestInit::new();
    init.set_method("GET");

    let response = fetch(&format!("{}/urls", API_BASE), &init).await?;
    let body = json_body(response).await?;

    serde_wasm_bindgen::from_value(body)
        .map_err(|e| format!("Failed to parse link list: {:?}", e))
}

/// Delete a link by its short code. Any 2xx counts as success.
pub async fn delete_link(short_code: &str) -> Result<(), String> {
    let init = RequestInit::new();
    init.set_method("DELETE");

    fetch(&format!("{}/urls/{}", API_BASE, short_code), &init).await?;
    Ok(())
}
