//! Small wrappers over browser APIs.

use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// Native confirmation dialog; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// First file selected in an `<input type="file">` change event.
pub fn selected_file(ev: &leptos::ev::Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
