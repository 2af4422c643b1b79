// Host-side tests for anchor scrolling and the mobile menu.

use folio_core::*;

fn opened() -> MobileNav {
    let mut nav = MobileNav::new(900.0);
    assert_eq!(nav.handle(NavEvent::ToggleClick), Some(NavChange::Opened));
    nav
}

#[test]
fn bare_hash_is_ignored() {
    assert_eq!(anchor_action("#"), AnchorAction::Ignore);
}

#[test]
fn fragment_scrolls_to_target() {
    assert_eq!(
        anchor_action("#projects"),
        AnchorAction::ScrollTo {
            selector: "#projects"
        }
    );
    assert_eq!(anchor_scroll_top(1280.0, 80.0), 1200.0);
    assert_eq!(anchor_scroll_top(40.0, 80.0), -40.0);
}

#[test]
fn toggle_flips_state() {
    let mut nav = opened();
    assert!(nav.is_open());
    assert_eq!(
        nav.handle(NavEvent::ToggleClick),
        Some(NavChange::Closed {
            focus_toggle: false
        })
    );
    assert!(!nav.is_open());
}

#[test]
fn outside_click_closes_on_narrow_viewport() {
    let mut nav = opened();
    let change = nav.handle(NavEvent::OutsideClick {
        viewport_width: 900.0,
    });
    assert_eq!(
        change,
        Some(NavChange::Closed {
            focus_toggle: false
        })
    );
    assert!(!nav.is_open());
}

#[test]
fn outside_click_ignored_on_wide_viewport() {
    let mut nav = opened();
    assert_eq!(
        nav.handle(NavEvent::OutsideClick {
            viewport_width: 1200.0
        }),
        None
    );
    assert!(nav.is_open());
}

#[test]
fn escape_closes_and_refocuses_toggle() {
    let mut nav = opened();
    let change = nav.handle(NavEvent::Escape).unwrap();
    assert_eq!(change, NavChange::Closed { focus_toggle: true });
    assert_eq!(change.aria_expanded(), "false");
    assert_eq!(change.aria_label(), LABEL_OPEN);
    assert!(!nav.is_open());
}

#[test]
fn resize_past_breakpoint_closes() {
    let mut nav = opened();
    assert_eq!(
        nav.handle(NavEvent::Resize {
            viewport_width: 900.0
        }),
        None
    );
    assert!(nav.is_open());
    assert!(nav
        .handle(NavEvent::Resize {
            viewport_width: 901.0
        })
        .is_some());
    assert!(!nav.is_open());
}

#[test]
fn link_click_closes() {
    let mut nav = opened();
    assert!(nav.handle(NavEvent::LinkClick).is_some());
    assert!(!nav.is_open());
}

#[test]
fn closing_events_do_nothing_when_closed() {
    let mut nav = MobileNav::new(900.0);
    assert_eq!(nav.handle(NavEvent::LinkClick), None);
    assert_eq!(
        nav.handle(NavEvent::OutsideClick {
            viewport_width: 300.0
        }),
        None
    );
    assert_eq!(
        nav.handle(NavEvent::Resize {
            viewport_width: 1400.0
        }),
        None
    );
}

#[test]
fn escape_on_closed_menu_still_refocuses_toggle() {
    let mut nav = MobileNav::new(900.0);
    let change = nav.handle(NavEvent::Escape);
    assert_eq!(change, Some(NavChange::Closed { focus_toggle: true }));
    assert_eq!(change.map(|c| c.aria_label()), Some(LABEL_OPEN));
    assert!(!nav.is_open());
}

#[test]
fn open_change_sets_close_label() {
    assert_eq!(NavChange::Opened.aria_expanded(), "true");
    assert_eq!(NavChange::Opened.aria_label(), LABEL_CLOSE);
    let closed = NavChange::Closed {
        focus_toggle: false,
    };
    assert_eq!(closed.aria_expanded(), "false");
    assert_eq!(closed.aria_label(), LABEL_OPEN);
}
