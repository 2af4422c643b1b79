#![cfg(target_arch = "wasm32")]
use folio_core::constants::classes;
use folio_core::DecorConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod counter;
mod dom;
mod motion;
mod nav;
mod pointer;
mod reveal;
mod scroll;
mod style;

type Wire = fn(&web::Window, &web::Document, &DecorConfig) -> anyhow::Result<usize>;

// Every effect is wired independently; one failing leaves the rest running.
const FEATURES: &[(&str, Wire)] = &[
    ("reveal", reveal::wire),
    ("scroll", scroll::wire),
    ("header", nav::wire_header),
    ("glow", pointer::wire_glow),
    ("anchors", nav::wire_anchors),
    ("mobile-nav", nav::wire_mobile),
    ("tilt", pointer::wire_tilt),
    ("pills", motion::wire_pills),
    ("counters", counter::wire),
    ("reduced-motion", motion::wire_reduced_motion),
];

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    if let Some(root) = document.document_element() {
        dom::add_class(&root, classes::JS);
    }

    let config = DecorConfig::default();
    config.validate()?;

    for (name, wire) in FEATURES {
        match wire(&window, &document, &config) {
            Ok(n) => log::info!("[{}] wired {} element(s)", name, n),
            Err(e) => log::error!("[{}] {:?}", name, e),
        }
    }
    log::info!("portfolio effects initialized");
    Ok(())
}
