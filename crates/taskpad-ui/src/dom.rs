//! `web-sys` glue: the `<input>` adapter, console logging, and page config

use taskpad_core::InputField;
use web_sys::HtmlInputElement;

use crate::config::UiConfig;
use crate::error::{Result, UiError};

/// Id of the optional `<script type="application/json">` holding a `UiConfig`
pub const CONFIG_ELEMENT_ID: &str = "taskpad-config";

/// The task `<input>` element seen as an `InputField`
#[derive(Debug, Clone)]
pub struct DomInput(HtmlInputElement);

impl DomInput {
    #[must_use]
    pub const fn new(element: HtmlInputElement) -> Self {
        Self(element)
    }
}

impl InputField for DomInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn clear(&mut self) {
        self.0.set_value("");
    }
}

/// Log to the browser console
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Warn in the browser console
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Log a UI error as a console warning
pub fn warn_error(error: &UiError) {
    warn(&format!("Taskpad: {error}"));
}

/// Read the page config from the element with `element_id`.
///
/// A page without the element gets the defaults. A malformed config is
/// reported to the console and the defaults are used.
#[must_use]
pub fn load_config(element_id: &str) -> UiConfig {
    match read_config(element_id) {
        Ok(Some(config)) => config,
        Ok(None) => UiConfig::default(),
        Err(e) => {
            warn_error(&e);
            UiConfig::default()
        }
    }
}

fn read_config(element_id: &str) -> Result<Option<UiConfig>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| UiError::element_missing("document"))?;

    document
        .get_element_by_id(element_id)
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty())
        .map(|text| UiConfig::from_json(&text))
        .transpose()
}
