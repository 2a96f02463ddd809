//! Checks that need a browser: the local clock and the JS random source.
#![cfg(target_arch = "wasm32")]

use frontend::components::common_toast::{Toast, ToastType};
use shared::registration::{is_open, registration_label, today};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_registration_window_uses_browser_clock() {
    let now = today();
    assert!(is_open(now));
    assert!(!is_open(now.pred_opt().unwrap()));
    assert_eq!(registration_label(now), "Open");
}

#[wasm_bindgen_test]
fn test_toast_ids_are_random() {
    let a = Toast::new("One", ToastType::Info);
    let b = Toast::new("Two", ToastType::Info);
    assert_ne!(a.id, b.id);
}
