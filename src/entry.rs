//! WASM entry points.
//!
//! The module mounts itself on load. Hosts that load it some other way can
//! use [`PageWiring`]; both go through the same page-wide markers, so the
//! clock and the widgets bind once per document no matter how many times
//! either path runs.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::UiConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::dom::{self, BrowserHost};
use crate::page::Page;

/// Read the optional JSON config embedded in the page.
fn page_config(document: &Document) -> UiConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
        return UiConfig::default();
    };
    UiConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
        UiConfig::default()
    })
}

/// Install logging and mount the page once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger not installed: {err}");
    }

    let Some(host) = BrowserHost::new() else {
        log::warn!("no document; page widgets not mounted");
        return;
    };
    let document = host.document().clone();
    let page = Rc::new(RefCell::new(Page::new(host, page_config(&document))));

    if document.ready_state() == "loading" {
        let on_ready = Rc::clone(&page);
        let bound = dom::listen(&document, "DOMContentLoaded", move |_| {
            on_ready.borrow_mut().mount();
        });
        if let Err(err) = bound {
            log::warn!("{err}; mounting immediately");
            page.borrow_mut().mount();
        }
    } else {
        page.borrow_mut().mount();
    }
}

/// Manual wiring for hosts that load the module themselves.
#[wasm_bindgen]
pub struct PageWiring {
    page: Page<BrowserHost>,
}

#[wasm_bindgen]
impl PageWiring {
    /// Build from an optional JSON config.
    ///
    /// # Errors
    ///
    /// Rejects malformed or out-of-range config, and fails outside a browser
    /// window.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PageWiring, JsValue> {
        let config = match config_json {
            Some(raw) => UiConfig::from_json(&raw).map_err(|err| JsValue::from_str(&err.to_string()))?,
            None => UiConfig::default(),
        };
        let host = BrowserHost::new().ok_or_else(|| JsValue::from_str("no browser document"))?;
        Ok(Self { page: Page::new(host, config) })
    }

    /// Bind the page. Returns whether anything new was bound; `false` when
    /// the document is already wired, by this object or by the auto-start.
    pub fn mount(&mut self) -> bool {
        self.page.mount().any()
    }
}
