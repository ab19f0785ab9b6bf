use leptos::prelude::*;
use userboard::{App, ROOT_ELEMENT_ID};
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id(ROOT_ELEMENT_ID)
        .expect("Failed to find #root element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
