use crate::dom;
use folio_core::constants::{classes, selectors};
use folio_core::{
    anchor_action, anchor_scroll_top, AnchorAction, DecorConfig, HeaderState, MobileNav,
    NavChange, NavEvent,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn smooth_scroll_to(window: &web::Window, top: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Same-page links glide to their target, leaving room for the sticky header.
pub fn wire_anchors(
    _window: &web::Window,
    document: &web::Document,
    config: &DecorConfig,
) -> anyhow::Result<usize> {
    let anchors = dom::query_all(document, selectors::ANCHOR);
    let header_offset = config.header_offset_px;
    for anchor in &anchors {
        let el = anchor.clone();
        let doc = document.clone();
        dom::on_event(anchor, "click", move |ev| {
            let Some(href) = el.get_attribute("href") else {
                return;
            };
            let AnchorAction::ScrollTo { selector } = anchor_action(&href) else {
                return;
            };
            ev.prevent_default();
            let Some(target) = dom::query_one(&doc, selector) else {
                return;
            };
            if let Some(w) = web::window() {
                let top = anchor_scroll_top(target.offset_top() as f64, header_offset);
                smooth_scroll_to(&w, top);
            }
        });
    }
    Ok(anchors.len())
}

/// The header picks up a `scrolled` look once the page leaves the top.
pub fn wire_header(
    window: &web::Window,
    document: &web::Document,
    config: &DecorConfig,
) -> anyhow::Result<usize> {
    let Some(nav) = dom::query_one(document, selectors::NAV) else {
        return Ok(0);
    };
    let threshold = config.scrolled_threshold_px;
    let state = Rc::new(RefCell::new(HeaderState::default()));
    let apply = move |w: &web::Window| {
        if let Some(scrolled) = state.borrow_mut().update(dom::scroll_y(w), threshold) {
            _ = nav.class_list().toggle_with_force(classes::SCROLLED, scrolled);
        }
    };
    apply(window);
    dom::on_event(window, "scroll", move |_| {
        if let Some(w) = web::window() {
            apply(&w);
        }
    });
    Ok(1)
}

struct MobileMenu {
    nav: web::HtmlElement,
    toggle: web::HtmlElement,
    state: RefCell<MobileNav>,
}

impl MobileMenu {
    fn dispatch(&self, event: NavEvent) {
        let Some(change) = self.state.borrow_mut().handle(event) else {
            return;
        };
        self.apply(change);
    }

    fn apply(&self, change: NavChange) {
        _ = self
            .nav
            .class_list()
            .toggle_with_force(classes::NAV_OPEN, change.is_open());
        _ = self.toggle.set_attribute("aria-expanded", change.aria_expanded());
        _ = self.toggle.set_attribute("aria-label", change.aria_label());
        if let NavChange::Closed { focus_toggle: true } = change {
            _ = self.toggle.focus();
        }
    }
}

/// Collapsible menu for narrow viewports. Needs the header, its toggle
/// button and the links container; without them the menu stays inert.
pub fn wire_mobile(
    window: &web::Window,
    document: &web::Document,
    config: &DecorConfig,
) -> anyhow::Result<usize> {
    let (Some(nav), Some(toggle), Some(links)) = (
        dom::query_one(document, selectors::NAV),
        dom::query_one(document, selectors::NAV_TOGGLE),
        dom::query_one(document, selectors::NAV_LINKS),
    ) else {
        log::info!("[nav] no mobile menu on this page");
        return Ok(0);
    };

    let menu = Rc::new(MobileMenu {
        nav,
        toggle: toggle.clone(),
        state: RefCell::new(MobileNav::new(config.mobile_breakpoint_px)),
    });

    let m = menu.clone();
    dom::on_event(&toggle, "click", move |_| m.dispatch(NavEvent::ToggleClick));

    let menu_links = dom::query_all_in(&links, selectors::NAV_LINK);
    for link in &menu_links {
        let m = menu.clone();
        dom::on_event(link, "click", move |_| m.dispatch(NavEvent::LinkClick));
    }

    let m = menu.clone();
    dom::on_event(document, "click", move |ev| {
        if !m.state.borrow().is_open() {
            return;
        }
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Node>().ok())
            .is_some_and(|node| m.nav.contains(Some(&node)));
        if inside {
            return;
        }
        if let Some(w) = web::window() {
            m.dispatch(NavEvent::OutsideClick {
                viewport_width: dom::inner_width(&w),
            });
        }
    });

    let m = menu.clone();
    dom::on_event(document, "keydown", move |ev| {
        let is_escape = ev
            .dyn_ref::<web::KeyboardEvent>()
            .is_some_and(|k| k.key() == "Escape");
        if is_escape {
            m.dispatch(NavEvent::Escape);
        }
    });

    let m = menu;
    dom::on_event(window, "resize", move |_| {
        if let Some(w) = web::window() {
            m.dispatch(NavEvent::Resize {
                viewport_width: dom::inner_width(&w),
            });
        }
    });

    Ok(1 + menu_links.len())
}
