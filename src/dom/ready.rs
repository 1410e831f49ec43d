use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, EventTarget};

/// Runs `f` once the document's structure has loaded. If that already
/// happened (script loaded late or deferred), `f` runs right away.
pub fn on_content_ready<F>(document: &Document, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    run_once_on(document, "DOMContentLoaded", f)
}

/// Registers `f` for the first `event` fired on `target` only.
pub fn run_once_on<F>(target: &EventTarget, event: &str, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    // once_into_js frees itself after the single call
    let cb = Closure::once_into_js(f);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.unchecked_ref(),
        &opts,
    )
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let f = {
            let hits = hits.clone();
            move || hits.set(hits.get() + 1)
        };
        (hits, f)
    }

    #[wasm_bindgen_test]
    fn loaded_document_runs_immediately() {
        let doc = document();
        assert_ne!(doc.ready_state(), "loading");
        let (hits, f) = counter();
        on_content_ready(&doc, f).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn pending_listener_fires_only_once() {
        let el = document().create_element("div").unwrap();
        let (hits, f) = counter();
        run_once_on(&el, "DOMContentLoaded", f).unwrap();
        assert_eq!(hits.get(), 0);
        for _ in 0..2 {
            let ev = Event::new("DOMContentLoaded").unwrap();
            el.dispatch_event(&ev).unwrap();
        }
        assert_eq!(hits.get(), 1);
    }
}
