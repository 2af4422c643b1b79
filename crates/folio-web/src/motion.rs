use crate::dom;
use crate::style;
use folio_core::constants::{media, props, selectors};
use folio_core::motion::{animation_duration_override, pill_delay_sec};
use folio_core::DecorConfig;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pills in each group animate in one after another on hover.
pub fn wire_pills(
    _window: &web::Window,
    document: &web::Document,
    config: &DecorConfig,
) -> anyhow::Result<usize> {
    let mut count = 0;
    for group in dom::query_all(document, selectors::TECH_PILLS) {
        for (i, pill) in dom::query_all_in(&group, selectors::PILL).iter().enumerate() {
            let delay = style::seconds(pill_delay_sec(i, config.pill_stagger_sec));
            dom::set_style(pill, props::TRANSITION_DELAY, &delay);
            count += 1;
        }
    }
    Ok(count)
}

/// Zero the global animation duration for users who prefer reduced motion.
pub fn wire_reduced_motion(
    window: &web::Window,
    document: &web::Document,
    _config: &DecorConfig,
) -> anyhow::Result<usize> {
    let reduced = dom::media_matches(window, media::REDUCED_MOTION);
    let Some(duration) = animation_duration_override(reduced) else {
        return Ok(0);
    };
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::set_style(&root, props::ANIMATION_DURATION, duration);
    log::info!("[motion] reduced motion requested");
    Ok(1)
}
