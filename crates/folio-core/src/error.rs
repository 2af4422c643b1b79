use thiserror::Error;

/// Configuration problems detected before any effect is wired.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecorError {
    #[error("{name} must be within [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },
    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidLength { name: &'static str, value: f64 },
    #[error("tilt divisor must be positive, got {0}")]
    InvalidTiltDivisor(f64),
    #[error("counter tick period must be non-zero")]
    ZeroTickPeriod,
    #[error("counter duration {duration_ms}ms is shorter than one tick of {tick_ms}ms")]
    DurationShorterThanTick { duration_ms: u32, tick_ms: u32 },
}
