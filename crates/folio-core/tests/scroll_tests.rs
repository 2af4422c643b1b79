// Host-side tests for frame coalescing, section progress and parallax.

use folio_core::*;

fn controller(sections: usize) -> ScrollController {
    let config = DecorConfig::default();
    let layers = vec![
        ParallaxLayer::shape(Some(0.5), &config),
        ParallaxLayer::shape(None, &config),
        ParallaxLayer::orb(0, &config),
        ParallaxLayer::orb(2, &config),
    ];
    ScrollController::new(sections, layers, &config)
}

fn sample(scroll_y: f64) -> ScrollSample {
    ScrollSample {
        scroll_y,
        viewport_height: 800.0,
    }
}

#[test]
fn burst_of_scroll_events_requests_one_frame() {
    let mut c = controller(0);
    let requested = (0..25).filter(|_| c.on_scroll()).count();
    assert_eq!(requested, 1);
    assert!(c.is_frame_pending());

    c.frame(sample(120.0), &[]);
    assert!(!c.is_frame_pending());
    assert_eq!(c.frames_run(), 1);

    // the next burst gets its own frame
    assert!(c.on_scroll());
    assert!(!c.on_scroll());
}

#[test]
fn frame_gate_clears_only_on_complete() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(gate.is_pending());
    gate.complete();
    assert!(!gate.is_pending());
    assert!(gate.request());
}

#[test]
fn offsets_are_scroll_times_speed() {
    let mut c = controller(0);
    let update = c.frame(sample(400.0), &[]);
    assert_eq!(
        update.offsets,
        vec![400.0 * 0.5, 400.0 * 0.3, 400.0 * 0.1, 400.0 * (0.1 + 2.0 * 0.05)]
    );
}

#[test]
fn offsets_are_idempotent_per_scroll_position() {
    let mut c = controller(0);
    let first = c.frame(sample(333.3), &[]).offsets;
    c.frame(sample(10.0), &[]);
    let again = c.frame(sample(333.3), &[]).offsets;
    assert_eq!(first, again);
}

#[test]
fn zero_scroll_means_zero_offset() {
    let mut c = controller(0);
    assert!(c.frame(sample(0.0), &[]).offsets.iter().all(|o| *o == 0.0));
}

#[test]
fn section_becomes_active_once_past_threshold() {
    let mut c = controller(2);
    // below the fold: progress 0
    let below = SectionBounds {
        top: 900.0,
        height: 200.0,
    };
    // (800 - 650) / (800 + 200) = 0.15
    let entering = SectionBounds {
        top: 650.0,
        height: 200.0,
    };

    let u = c.frame(sample(0.0), &[below, below]);
    assert!(u.newly_active.is_empty());

    let u = c.frame(sample(0.0), &[entering, below]);
    assert_eq!(u.newly_active, vec![0]);
    assert!(c.is_active(0));
    assert!(!c.is_active(1));
}

#[test]
fn active_marker_is_never_removed() {
    let mut c = controller(1);
    let visible = SectionBounds {
        top: 100.0,
        height: 200.0,
    };
    let gone = SectionBounds {
        top: 5000.0,
        height: 200.0,
    };
    assert_eq!(c.frame(sample(0.0), &[visible]).newly_active, vec![0]);
    // scrolled back up past it; still active and not reported again
    assert!(c.frame(sample(0.0), &[gone]).newly_active.is_empty());
    assert!(c.is_active(0));
    assert!(c.frame(sample(0.0), &[visible]).newly_active.is_empty());
}

#[test]
fn progress_at_exact_threshold_does_not_activate() {
    let mut c = controller(1);
    // (800 - 700) / (800 + 200) = 0.1 exactly
    let at = SectionBounds {
        top: 700.0,
        height: 200.0,
    };
    assert!(c.frame(sample(0.0), &[at]).newly_active.is_empty());
}

#[test]
fn progress_is_clamped() {
    assert_eq!(scroll_progress(800.0, 2000.0, 100.0), 0.0);
    assert_eq!(scroll_progress(800.0, -5000.0, 100.0), 1.0);
    assert!((scroll_progress(800.0, 400.0, 200.0) - 0.4).abs() < 1e-12);
    assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn missing_section_bounds_are_ignored() {
    let mut c = controller(3);
    let visible = SectionBounds {
        top: 0.0,
        height: 100.0,
    };
    let u = c.frame(sample(0.0), &[visible]);
    assert_eq!(u.newly_active, vec![0]);
    assert!(!c.is_active(2));
}

#[test]
fn header_state_reports_only_changes() {
    let mut h = HeaderState::default();
    assert_eq!(h.update(10.0, 50.0), None);
    assert_eq!(h.update(50.0, 50.0), None);
    assert_eq!(h.update(51.0, 50.0), Some(true));
    assert_eq!(h.update(300.0, 50.0), None);
    assert!(h.is_scrolled());
    assert_eq!(h.update(0.0, 50.0), Some(false));
    assert!(!h.is_scrolled());
}
