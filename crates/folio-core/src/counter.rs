//! Stat counter: counts a displayed integer up to its target once.

use crate::config::CounterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterState {
    Idle,
    Running,
    Done,
}

/// What the display should show after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTick {
    pub display: u64,
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct Counter {
    target: u64,
    step: f64,
    current: f64,
    state: CounterState,
}

impl Counter {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = duration_ms as f64 / tick_ms.max(1) as f64;
        Self {
            target,
            step: target as f64 / ticks,
            current: 0.0,
            state: CounterState::Idle,
        }
    }

    pub fn with_config(target: u64, config: &CounterConfig) -> Self {
        Self::new(target, config.duration_ms, config.tick_ms)
    }

    /// Build a counter from the value node's text. `None` when the text holds
    /// no digits or only zeros, in which case the stat is left alone.
    pub fn from_text(text: &str, config: &CounterConfig) -> Option<Self> {
        parse_target(text).map(|t| Self::with_config(t, config))
    }

    /// idle -> running. Only the first call wins; later intersections are
    /// ignored so a second interval can never be started.
    pub fn start(&mut self) -> bool {
        if self.state != CounterState::Idle {
            return false;
        }
        self.state = CounterState::Running;
        log::debug!("[counter] start target={} step={:.3}", self.target, self.step);
        true
    }

    /// Advance one timer period. Returns `None` unless running.
    pub fn tick(&mut self) -> Option<CounterTick> {
        if self.state != CounterState::Running {
            return None;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.state = CounterState::Done;
            log::debug!("[counter] done at {}", self.target);
            return Some(CounterTick {
                display: self.target,
                finished: true,
            });
        }
        Some(CounterTick {
            display: self.current.floor() as u64,
            finished: false,
        })
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn current(&self) -> f64 {
        self.current
    }
}

/// Strip every non-digit and read what is left ("1,200+" -> 1200).
pub fn parse_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(v) => Some(v),
    }
}
