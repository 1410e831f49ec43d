use std::cell::RefCell;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use yew::Callback;

mod config;
mod dom;
mod duration;
mod state;
mod util;

use config::{CONFIG_ATTRIBUTE, RouterConfig};
use dom::{ClickRouter, ThumbnailClick, on_content_ready};
use state::Lifecycle;
use util::{clog, cwarn};

thread_local! {
    static ROUTER: RefCell<Lifecycle<ClickRouter>> = RefCell::new(Lifecycle::default());
}

/// `formatTimestamp("00:01:23.456") === "1m 23s"` for page scripts.
#[wasm_bindgen(js_name = formatTimestamp)]
pub fn format_timestamp(timestamp: &str) -> String {
    duration::format_timestamp(timestamp)
}

#[wasm_bindgen(js_name = formatTimestamps)]
pub fn format_timestamps(timestamps: Vec<String>) -> Vec<String> {
    duration::format_timestamps(&timestamps)
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn install() -> Result<(), JsValue> {
    let doc = document()?;
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let root = doc
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;
    let raw = body.get_attribute(CONFIG_ATTRIBUTE);
    let (config, err) = RouterConfig::from_optional_json(raw.as_deref());
    if let Some(e) = err {
        clog(&format!("fish-view: ignoring {CONFIG_ATTRIBUTE}: {e}"));
    }
    // Detail view for a fish is not built yet; thumbnail hits stop here.
    let on_thumbnail = Callback::from(|_click: ThumbnailClick| ());
    let attached = ROUTER.with(|slot| {
        slot.borrow_mut()
            .install(|| ClickRouter::attach(body, root, config, on_thumbnail))
    })?;
    if attached {
        clog("fish-view: click router attached");
    }
    Ok(())
}

/// Removes the page-wide click listener, if one is attached.
#[wasm_bindgen(js_name = detachFishView)]
pub fn uninstall() {
    let router = ROUTER.with(|slot| slot.borrow_mut().uninstall());
    if let Some(router) = router {
        router.detach();
        clog("fish-view: click router detached");
    }
}

fn main() {
    let ready = document().and_then(|doc| {
        on_content_ready(&doc, || {
            if let Err(e) = install() {
                cwarn("fish-view: could not attach click router", &e);
            }
        })
    });
    if let Err(e) = ready {
        cwarn("fish-view: startup failed", &e);
    }
}
