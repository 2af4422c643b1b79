/// Value for the root `--animation-duration` property, if it must be
/// overridden for users who asked for less motion.
#[inline]
pub fn animation_duration_override(prefers_reduced_motion: bool) -> Option<&'static str> {
    prefers_reduced_motion.then_some("0s")
}

/// Transition delay, in seconds, for the pill at `index` within its group.
#[inline]
pub fn pill_delay_sec(index: usize, stagger_sec: f64) -> f64 {
    index as f64 * stagger_sec
}
