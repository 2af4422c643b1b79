//! Parallax speeds and scroll-progress math.

use crate::config::DecorConfig;

/// Which family a parallax element belongs to; each resolves its speed
/// differently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerKind {
    /// Floating shape; speed read from its `data-speed` attribute.
    Shape,
    /// Background orb; speed derived from its position among the orbs.
    Orb,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub kind: LayerKind,
    pub speed: f64,
}

impl ParallaxLayer {
    pub fn shape(parsed_speed: Option<f64>, config: &DecorConfig) -> Self {
        Self {
            kind: LayerKind::Shape,
            speed: shape_speed(parsed_speed, config.shape_default_speed),
        }
    }

    pub fn orb(index: usize, config: &DecorConfig) -> Self {
        Self {
            kind: LayerKind::Orb,
            speed: orb_speed(index, config.orb_base_speed, config.orb_speed_step),
        }
    }

    #[inline]
    pub fn offset(&self, scroll_y: f64) -> f64 {
        parallax_offset(scroll_y, self.speed)
    }
}

/// Resolve a shape's speed from its parsed `data-speed` value. A missing
/// attribute, NaN, infinities and zero fall back to `default`.
pub fn shape_speed(parsed: Option<f64>, default: f64) -> f64 {
    match parsed {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => default,
    }
}

#[inline]
pub fn orb_speed(index: usize, base: f64, step: f64) -> f64 {
    base + index as f64 * step
}

#[inline]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// How far an element has travelled through the viewport, in `[0, 1]`.
///
/// 0 while the element is still below the fold, 1 once it has fully left
/// through the top.
pub fn scroll_progress(viewport_height: f64, rect_top: f64, rect_height: f64) -> f64 {
    let span = viewport_height + rect_height;
    if span <= 0.0 {
        return 0.0;
    }
    let p = (viewport_height - rect_top) / span;
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
