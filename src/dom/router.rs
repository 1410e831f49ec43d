use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, MouseEvent, Node};
use yew::Callback;

use super::node::{DomNode, find_enclosing, find_marked_ancestor};
use crate::config::RouterConfig;

/// What a thumbnail click would hand to the fish detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThumbnailClick {
    pub src: Option<String>,
    /// Id attribute of the enclosing row, if the thumbnail sits in one.
    pub fish_id: Option<String>,
}

pub fn resolve_thumbnail_click<N: DomNode + Clone>(
    img: &N,
    root: &N,
    config: &RouterConfig,
) -> ThumbnailClick {
    let fish_id = find_enclosing(img, root, &config.row_tag)
        .and_then(|row| row.attribute(&config.row_id_attribute));
    ThumbnailClick {
        src: img.attribute(&config.image_src_attribute),
        fish_id,
    }
}

/// Handles one delegated click. Returns whether a thumbnail was hit.
pub fn route_click<N: DomNode + Clone>(
    target: &N,
    root: &N,
    config: &RouterConfig,
    on_thumbnail: &Callback<ThumbnailClick>,
) -> bool {
    match find_marked_ancestor(target, root, &config.marker_class) {
        Some(img) => {
            on_thumbnail.emit(resolve_thumbnail_click(&img, root, config));
            true
        }
        None => false,
    }
}

// Clicks on text land on a Text node; use its parent element then.
fn event_element(e: &MouseEvent) -> Option<Element> {
    let target = e.target()?;
    match target.dyn_into::<Element>() {
        Ok(el) => Some(el),
        Err(other) => other.dyn_into::<Node>().ok()?.parent_element(),
    }
}

/// A single `click` listener on the page body. Dropping the handle (or
/// calling [`ClickRouter::detach`]) removes the listener.
pub struct ClickRouter {
    body: HtmlElement,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl ClickRouter {
    /// Listens on `body`; the thumbnail search climbs up to `root`
    /// (normally `<html>`) inclusive.
    pub fn attach(
        body: HtmlElement,
        root: Element,
        config: RouterConfig,
        on_thumbnail: Callback<ThumbnailClick>,
    ) -> Result<Self, JsValue> {
        let listener = Closure::wrap(Box::new(move |e: MouseEvent| {
            if let Some(target) = event_element(&e) {
                route_click(&target, &root, &config, &on_thumbnail);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        body.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        Ok(Self { body, listener })
    }

    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for ClickRouter {
    fn drop(&mut self) {
        let _ = self
            .body
            .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
    }
}
