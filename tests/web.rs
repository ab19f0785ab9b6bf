//! Browser tests for the mounted app.
//!
//! Run with `wasm-pack test --headless --firefox -- --features mock`.

#![cfg(target_arch = "wasm32")]

use js_sys::Promise;
use leptos::prelude::*;
use userboard::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_container() -> HtmlElement {
    let container = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document().body().unwrap().append_child(&container).unwrap();
    container
}

/// Let spawned tasks and reactive effects run.
async fn settle() {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 20)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn shows_loading_before_response() {
    let container = mount_container();
    let _handle = mount_to(container.clone(), App);

    assert_eq!(container.text_content().unwrap_or_default(), "Loading...");
    assert!(container.query_selector("table").unwrap().is_none());
}

#[cfg(feature = "mock")]
#[wasm_bindgen_test]
async fn fixture_rows_and_address_hover() {
    let container = mount_container();
    let _handle = mount_to(container.clone(), App);
    settle().await;

    let rows = container.query_selector_all("tbody tr").unwrap();
    assert_eq!(rows.length(), 3);

    let link = container.query_selector("tbody a").unwrap().unwrap();
    assert_eq!(link.get_attribute("href").as_deref(), Some("https://hildegard.org"));
    assert_eq!(link.text_content().as_deref(), Some("hildegard.org"));

    let address_cell = container
        .query_selector("tbody tr td:nth-of-type(6)")
        .unwrap()
        .unwrap();
    assert!(!address_cell.text_content().unwrap_or_default().contains("City:"));

    let enter = web_sys::MouseEvent::new("mouseenter").unwrap();
    address_cell.dispatch_event(&enter).unwrap();
    settle().await;
    let text = address_cell.text_content().unwrap_or_default();
    assert!(text.contains("City:"));
    assert!(text.contains("Gwenborough"));

    let leave = web_sys::MouseEvent::new("mouseleave").unwrap();
    address_cell.dispatch_event(&leave).unwrap();
    settle().await;
    assert!(!address_cell.text_content().unwrap_or_default().contains("City:"));
}

#[cfg(feature = "mock")]
#[wasm_bindgen_test]
async fn company_hover_is_independent_of_address() {
    let container = mount_container();
    let _handle = mount_to(container.clone(), App);
    settle().await;

    let cells = container.query_selector_all("tbody tr td:nth-of-type(6)").unwrap();
    let first_address = cells.item(0).unwrap().unchecked_into::<web_sys::Element>();
    let companies = container.query_selector_all("tbody tr td:nth-of-type(7)").unwrap();
    let second_company = companies.item(1).unwrap().unchecked_into::<web_sys::Element>();
    assert!(second_company.text_content().unwrap_or_default().contains("Deckow-Crist"));

    first_address
        .dispatch_event(&web_sys::MouseEvent::new("mouseenter").unwrap())
        .unwrap();
    second_company
        .dispatch_event(&web_sys::MouseEvent::new("mouseenter").unwrap())
        .unwrap();
    settle().await;
    assert!(first_address.text_content().unwrap_or_default().contains("City:"));
    let text = second_company.text_content().unwrap_or_default();
    assert!(text.contains("Proactive didactic contingency"));
    assert!(text.contains("synergize scalable supply-chains"));

    // Leaving the company cell must not close the address panel.
    second_company
        .dispatch_event(&web_sys::MouseEvent::new("mouseleave").unwrap())
        .unwrap();
    settle().await;
    assert!(!second_company.text_content().unwrap_or_default().contains("Proactive"));
    assert!(first_address.text_content().unwrap_or_default().contains("City:"));
}

#[wasm_bindgen_test]
async fn unmount_before_response_leaves_nothing_behind() {
    let container = mount_container();
    let handle = mount_to(container.clone(), App);
    drop(handle);
    settle().await;

    assert!(container.query_selector("table").unwrap().is_none());
    assert!(container.text_content().unwrap_or_default().is_empty());
}
