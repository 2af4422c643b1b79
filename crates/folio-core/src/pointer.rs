use crate::config::TiltConfig;
use glam::DVec2;

/// Client-space bounding box of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Pointer position relative to the element's top-left corner.
#[inline]
pub fn local_offset(rect: &ElementRect, client: DVec2) -> DVec2 {
    client - DVec2::new(rect.left, rect.top)
}

/// Glow origin for a button; same as the local offset, kept separate so the
/// two effects can diverge.
#[inline]
pub fn glow_position(rect: &ElementRect, client: DVec2) -> DVec2 {
    local_offset(rect, client)
}

/// Card rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Pointer below center tips the card back (positive X rotation); pointer
/// right of center turns it right (negative Y rotation).
pub fn tilt_angles(rect: &ElementRect, client: DVec2, divisor: f64) -> Tilt {
    let local = local_offset(rect, client);
    let center = rect.center();
    Tilt {
        rotate_x: (local.y - center.y) / divisor,
        rotate_y: (center.x - local.x) / divisor,
    }
}

#[inline]
pub fn card_tilt(rect: &ElementRect, client: DVec2, config: &TiltConfig) -> Tilt {
    tilt_angles(rect, client, config.divisor)
}
