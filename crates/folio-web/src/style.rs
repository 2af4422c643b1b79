// Inline style values written by the effects. Kept free of browser types so
// the host-side tests can include this file directly.

// Negative zero would otherwise print as "-0".
#[inline]
fn clean(v: f64) -> f64 {
    v + 0.0
}

#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", clean(v))
}

#[inline]
pub fn seconds(v: f64) -> String {
    format!("{}s", clean(v))
}

#[inline]
pub fn translate_y(offset_px: f64) -> String {
    format!("translateY({})", px(offset_px))
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64, perspective_px: f64, shift_px: f64) -> String {
    format!(
        "perspective({}) rotateX({}deg) rotateY({}deg) translateX({})",
        px(perspective_px),
        clean(rotate_x),
        clean(rotate_y),
        px(shift_px)
    )
}
