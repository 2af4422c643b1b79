use crate::dom;
use crate::style;
use folio_core::constants::{classes, props, selectors};
use folio_core::{DecorConfig, ParallaxLayer, ScrollController, ScrollSample, SectionBounds};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ScrollTargets {
    sections: Vec<web::HtmlElement>,
    layers: Vec<web::HtmlElement>,
}

fn run_frame(controller: &RefCell<ScrollController>, targets: &ScrollTargets) {
    let Some(window) = web::window() else {
        return;
    };
    let sample = ScrollSample {
        scroll_y: dom::scroll_y(&window),
        viewport_height: dom::inner_height(&window),
    };
    let bounds: Vec<SectionBounds> = targets
        .sections
        .iter()
        .map(|s| {
            let r = s.get_bounding_client_rect();
            SectionBounds {
                top: r.top(),
                height: r.height(),
            }
        })
        .collect();

    let update = controller.borrow_mut().frame(sample, &bounds);
    for i in update.newly_active {
        if let Some(section) = targets.sections.get(i) {
            dom::add_class(section, classes::ACTIVE);
        }
    }
    for (el, offset) in targets.layers.iter().zip(&update.offsets) {
        dom::set_style(el, props::TRANSFORM, &style::translate_y(*offset));
    }
}

/// Section progress and parallax, recomputed at most once per animation
/// frame however many scroll events arrive.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    config: &DecorConfig,
) -> anyhow::Result<usize> {
    let sections = dom::query_all(document, selectors::SCROLL_FADE);

    let mut layers = Vec::new();
    let mut layer_els = Vec::new();
    for shape in dom::query_all(document, selectors::SHAPE) {
        let speed = shape
            .get_attribute(props::SPEED_ATTR)
            .map(|attr| js_sys::parse_float(&attr));
        layers.push(ParallaxLayer::shape(speed, config));
        layer_els.push(shape);
    }
    for (i, orb) in dom::query_all(document, selectors::ORB)
        .into_iter()
        .enumerate()
    {
        layers.push(ParallaxLayer::orb(i, config));
        layer_els.push(orb);
    }

    let count = sections.len() + layer_els.len();
    let controller = Rc::new(RefCell::new(ScrollController::new(
        sections.len(),
        layers,
        config,
    )));
    let targets = Rc::new(ScrollTargets {
        sections,
        layers: layer_els,
    });

    let frame = {
        let controller = controller.clone();
        let targets = targets.clone();
        Rc::new(Closure::wrap(
            Box::new(move || run_frame(&controller, &targets)) as Box<dyn FnMut()>
        ))
    };

    {
        let controller = controller.clone();
        let targets = targets.clone();
        dom::on_event(window, "scroll", move |_| {
            if !controller.borrow_mut().on_scroll() {
                return;
            }
            let callback: &JsValue = (*frame).as_ref();
            let scheduled = web::window()
                .is_some_and(|w| w.request_animation_frame(callback.unchecked_ref()).is_ok());
            if !scheduled {
                // no frame will arrive to clear the guard
                run_frame(&controller, &targets);
            }
        });
    }

    dom::on_load(window, document, move || run_frame(&controller, &targets));
    Ok(count)
}
