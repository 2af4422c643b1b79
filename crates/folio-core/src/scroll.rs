//! Frame-coalesced scroll state: section progress and parallax offsets.
//!
//! The browser fires `scroll` far more often than it paints. [`FrameGate`]
//! folds every burst into a single pending frame, and
//! [`ScrollController::frame`] does all the per-frame work from one scroll
//! sample.

use crate::config::DecorConfig;
use crate::parallax::{scroll_progress, ParallaxLayer};

/// At most one scheduled frame at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Called for every scroll event. Returns `true` when the caller must
    /// request an animation frame; `false` when one is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called at the end of the frame's work.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Snapshot of the host's scroll/viewport state for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

/// Vertical bounds of a progress section as reported by its client rect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

/// Result of one frame: which sections just became active, and the offset of
/// every parallax layer, in layer order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    pub newly_active: Vec<usize>,
    pub offsets: Vec<f64>,
}

pub struct ScrollController {
    gate: FrameGate,
    active: Vec<bool>,
    layers: Vec<ParallaxLayer>,
    active_threshold: f64,
    frames_run: u64,
}

impl ScrollController {
    pub fn new(section_count: usize, layers: Vec<ParallaxLayer>, config: &DecorConfig) -> Self {
        Self {
            gate: FrameGate::default(),
            active: vec![false; section_count],
            layers,
            active_threshold: config.active_progress_threshold,
            frames_run: 0,
        }
    }

    /// Scroll event entry point; see [`FrameGate::request`].
    pub fn on_scroll(&mut self) -> bool {
        self.gate.request()
    }

    /// Run the frame's work. `sections` must be in the order the sections
    /// were gathered; extra or missing bounds are ignored.
    pub fn frame(&mut self, sample: ScrollSample, sections: &[SectionBounds]) -> FrameUpdate {
        let mut newly_active = Vec::new();
        for (i, (flag, bounds)) in self.active.iter_mut().zip(sections).enumerate() {
            if *flag {
                continue;
            }
            let progress = scroll_progress(sample.viewport_height, bounds.top, bounds.height);
            if progress > self.active_threshold {
                *flag = true;
                newly_active.push(i);
            }
        }

        let offsets = self
            .layers
            .iter()
            .map(|l| l.offset(sample.scroll_y))
            .collect();

        self.frames_run += 1;
        self.gate.complete();
        FrameUpdate {
            newly_active,
            offsets,
        }
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn is_frame_pending(&self) -> bool {
        self.gate.is_pending()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }
}

/// Header "scrolled" state.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderState {
    scrolled: bool,
}

impl HeaderState {
    /// Returns `Some(new_state)` when the `scrolled` marker has to change.
    pub fn update(&mut self, scroll_y: f64, threshold: f64) -> Option<bool> {
        let scrolled = scroll_y > threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}
