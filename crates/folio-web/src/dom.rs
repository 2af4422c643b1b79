use folio_core::ElementRect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

fn collect<T: JsCast>(list: Result<web::NodeList, JsValue>) -> Vec<T> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// All elements under the document matching `selector`; empty on no match or
/// on an invalid selector.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    collect(document.query_selector_all(selector))
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    collect(root.query_selector_all(selector))
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn element_rect(el: &web::Element) -> ElementRect {
    let r = el.get_bounding_client_rect();
    ElementRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

#[inline]
pub fn inner_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn inner_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn media_matches(window: &web::Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(mql)) if mql.matches())
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn remove_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Register a listener for the lifetime of the page.
pub fn on_event(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `handler` once the page has loaded, immediately if it already has.
pub fn on_load(
    window: &web::Window,
    document: &web::Document,
    mut handler: impl FnMut() + 'static,
) {
    if document.ready_state() == "complete" {
        handler();
    } else {
        on_event(window, "load", move |_| handler());
    }
}

pub fn on_mouse(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Create an intersection observer whose callback receives each entry.
pub fn intersection_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();
    Ok(observer)
}
