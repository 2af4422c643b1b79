//! Runtime configuration for the decoration layer.
//!
//! Defaults come straight from [`crate::constants`]; the web front-end builds
//! one [`DecorConfig`], validates it once at startup and hands copies to each
//! feature as it is wired.

use crate::constants::*;
use crate::error::DecorError;

#[derive(Clone, Debug, PartialEq)]
pub struct DecorConfig {
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub active_progress_threshold: f64,
    pub shape_default_speed: f64,
    pub orb_base_speed: f64,
    pub orb_speed_step: f64,
    pub header_offset_px: f64,
    pub scrolled_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
    pub tilt: TiltConfig,
    pub counter: CounterConfig,
    pub pill_stagger_sec: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub divisor: f64,
    pub perspective_px: f64,
    pub shift_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterConfig {
    pub threshold: f64,
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            divisor: TILT_DIVISOR,
            perspective_px: TILT_PERSPECTIVE_PX,
            shift_px: TILT_SHIFT_PX,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            threshold: COUNTER_THRESHOLD,
            duration_ms: COUNTER_DURATION_MS,
            tick_ms: COUNTER_TICK_MS,
        }
    }
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN,
            active_progress_threshold: ACTIVE_PROGRESS_THRESHOLD,
            shape_default_speed: SHAPE_DEFAULT_SPEED,
            orb_base_speed: ORB_BASE_SPEED,
            orb_speed_step: ORB_SPEED_STEP,
            header_offset_px: HEADER_OFFSET_PX,
            scrolled_threshold_px: SCROLLED_THRESHOLD_PX,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            tilt: TiltConfig::default(),
            counter: CounterConfig::default(),
            pill_stagger_sec: PILL_STAGGER_SEC,
        }
    }
}

impl DecorConfig {
    /// Reject tunables that would produce NaN offsets or a zero-length timer.
    pub fn validate(&self) -> Result<(), DecorError> {
        check_ratio("reveal_threshold", self.reveal_threshold)?;
        check_ratio("active_progress_threshold", self.active_progress_threshold)?;
        check_ratio("counter.threshold", self.counter.threshold)?;

        check_length("shape_default_speed", self.shape_default_speed)?;
        check_length("orb_base_speed", self.orb_base_speed)?;
        check_length("orb_speed_step", self.orb_speed_step)?;
        check_length("header_offset_px", self.header_offset_px)?;
        check_length("scrolled_threshold_px", self.scrolled_threshold_px)?;
        check_length("mobile_breakpoint_px", self.mobile_breakpoint_px)?;
        check_length("pill_stagger_sec", self.pill_stagger_sec)?;
        check_length("tilt.perspective_px", self.tilt.perspective_px)?;

        if !(self.tilt.divisor.is_finite() && self.tilt.divisor > 0.0) {
            return Err(DecorError::InvalidTiltDivisor(self.tilt.divisor));
        }
        if self.counter.tick_ms == 0 {
            return Err(DecorError::ZeroTickPeriod);
        }
        if self.counter.duration_ms < self.counter.tick_ms {
            return Err(DecorError::DurationShorterThanTick {
                duration_ms: self.counter.duration_ms,
                tick_ms: self.counter.tick_ms,
            });
        }
        Ok(())
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), DecorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DecorError::RatioOutOfRange { name, value })
    }
}

fn check_length(name: &'static str, value: f64) -> Result<(), DecorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DecorError::InvalidLength { name, value })
    }
}
