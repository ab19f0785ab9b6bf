//! Network fetching for the users collection.
//!
//! Uses the browser Fetch API directly. There is no timeout and no retry:
//! one request, one outcome.

use js_sys::JsString;
use userboard_core::{FetchError, User, UserSource, parse_users};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::dom;

/// [`UserSource`] backed by a `GET` to a fixed URL.
#[cfg_attr(feature = "mock", allow(dead_code))]
#[derive(Clone, Debug)]
pub struct HttpUserSource {
    url: String,
}

#[cfg_attr(feature = "mock", allow(dead_code))]
impl HttpUserSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let text = fetch_text(&self.url).await?;
        parse_users(&text)
    }
}

/// Best-effort description of a thrown JS value.
fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .dyn_ref::<JsString>()
        .map(String::from)
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Fetch text from a URL using the Fetch API.
///
/// A rejected fetch promise means no response arrived and maps to
/// [`FetchError::NoResponse`]. Statuses are checked before the body is read.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window =
        dom::window().ok_or_else(|| FetchError::Request("Browser window not available".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::Request(describe_js_error(&e)))?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| FetchError::NoResponse)?;

    let resp: Response = result
        .dyn_into()
        .map_err(|_| FetchError::Request("Invalid response object".to_string()))?;

    FetchError::check_status(resp.status(), &resp.status_text())?;

    let body = resp
        .text()
        .map_err(|e| FetchError::Request(describe_js_error(&e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Request(describe_js_error(&e)))?;

    text.as_string()
        .ok_or_else(|| FetchError::Request("Response body is not text".to_string()))
}
