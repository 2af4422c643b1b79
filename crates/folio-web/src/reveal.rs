use crate::dom;
use folio_core::constants::{classes, selectors};
use folio_core::{DecorConfig, RevealSet};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct RevealState {
    elements: Vec<web::Element>,
    set: RevealSet,
}

impl RevealState {
    fn index_of(&self, el: &web::Element) -> Option<usize> {
        self.elements.iter().position(|e| e == el)
    }

    fn mark(&mut self, el: &web::Element) {
        let newly = match self.index_of(el) {
            Some(i) => self.set.mark(i),
            None => true,
        };
        if newly {
            dom::add_class(el, classes::VISIBLE);
        }
    }
}

/// Fade `.scroll-fade` and `.reveal` elements in the first time they scroll
/// into view; hero content is revealed as soon as the page has loaded.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    config: &DecorConfig,
) -> anyhow::Result<usize> {
    let mut elements: Vec<web::Element> = Vec::new();
    for el in dom::query_all(document, selectors::SCROLL_FADE) {
        dom::add_class(&el, classes::FADE_IN);
        elements.push(el.into());
    }
    for el in dom::query_all(document, selectors::REVEAL) {
        let el: web::Element = el.into();
        if !elements.contains(&el) {
            elements.push(el);
        }
    }
    let count = elements.len();
    let state = Rc::new(RefCell::new(RevealState {
        set: RevealSet::new(count),
        elements,
    }));

    let st = state.clone();
    let observer = dom::intersection_observer(
        config.reveal_threshold,
        Some(config.reveal_root_margin),
        move |entry, observer| {
            let target = entry.target();
            let mut st = st.borrow_mut();
            let Some(i) = st.index_of(&target) else {
                return;
            };
            if st.set.observe(i, entry.is_intersecting()) {
                dom::add_class(&target, classes::VISIBLE);
                observer.unobserve(&target);
            }
        },
    )?;
    for el in &state.borrow().elements {
        observer.observe(el);
    }

    let doc = document.clone();
    dom::on_load(window, document, move || {
        let mut st = state.borrow_mut();
        for hero in dom::query_all(&doc, selectors::HERO_FADE) {
            st.mark(&hero);
        }
    });
    Ok(count)
}
