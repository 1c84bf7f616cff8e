//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM. It reads the optional page configuration and
//! mounts the App component to the document body.

use leptos::prelude::*;
use taskpad_ui::{App, dom};

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    let config = dom::load_config(dom::CONFIG_ELEMENT_ID);
    dom::log(&format!("Mounting {}", config.title));

    mount_to_body(move || {
        view! {
            <App config=config.clone() />
        }
    })
}
