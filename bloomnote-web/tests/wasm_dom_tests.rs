#![cfg(target_arch = "wasm32")]

use bloomnote_web::dom;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn set_document_title_updates_the_document() {
    dom::set_document_title(bloomnote_web::PAGE_TITLE);
    let doc = web_sys::window()
        .and_then(|win| win.document())
        .expect("document should exist in browser tests");
    assert_eq!(doc.title(), bloomnote_web::PAGE_TITLE);
}

#[wasm_bindgen_test]
fn local_storage_is_available_in_browser_tests() {
    assert!(dom::local_storage().is_some());
}
