use crate::dom;
use crate::style;
use folio_core::constants::{props, selectors};
use folio_core::{card_tilt, glow_position, DecorConfig};
use glam::DVec2;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Buttons track the pointer with a glow centred under it.
pub fn wire_glow(
    _window: &web::Window,
    document: &web::Document,
    _config: &DecorConfig,
) -> anyhow::Result<usize> {
    let buttons = dom::query_all(document, selectors::BUTTON);
    for button in &buttons {
        let el = button.clone();
        dom::on_mouse(button, "mousemove", move |ev| {
            let pos = glow_position(&dom::element_rect(&el), client_pos(&ev));
            dom::set_style(&el, props::GLOW_X, &style::px(pos.x));
            dom::set_style(&el, props::GLOW_Y, &style::px(pos.y));
        });

        let el = button.clone();
        dom::on_mouse(button, "mouseleave", move |_| {
            dom::remove_style(&el, props::GLOW_X);
            dom::remove_style(&el, props::GLOW_Y);
        });
    }
    Ok(buttons.len())
}

/// Project cards lean toward the pointer.
pub fn wire_tilt(
    _window: &web::Window,
    document: &web::Document,
    config: &DecorConfig,
) -> anyhow::Result<usize> {
    let cards = dom::query_all(document, selectors::PROJECT_CARD);
    let tilt_cfg = config.tilt;
    for card in &cards {
        let el = card.clone();
        dom::on_mouse(card, "mousemove", move |ev| {
            let tilt = card_tilt(&dom::element_rect(&el), client_pos(&ev), &tilt_cfg);
            let transform = style::tilt_transform(
                tilt.rotate_x,
                tilt.rotate_y,
                tilt_cfg.perspective_px,
                tilt_cfg.shift_px,
            );
            dom::set_style(&el, props::TRANSFORM, &transform);
        });

        let el = card.clone();
        dom::on_mouse(card, "mouseleave", move |_| {
            dom::set_style(&el, props::TRANSFORM, "");
        });
    }
    Ok(cards.len())
}
