// Host-side tests for one-way reveal flags.

use folio_core::RevealSet;

#[test]
fn first_intersection_marks_visible() {
    let mut set = RevealSet::new(3);
    assert!(!set.observe(1, false));
    assert!(set.observe(1, true));
    assert!(set.is_visible(1));
    assert!(!set.is_visible(0));
    assert_eq!(set.visible_count(), 1);
}

#[test]
fn visibility_is_monotonic() {
    let mut set = RevealSet::new(2);
    assert!(set.observe(0, true));
    // later samples never report a second transition or clear the flag
    assert!(!set.observe(0, false));
    assert!(!set.observe(0, true));
    assert!(set.is_visible(0));
}

#[test]
fn forced_mark_counts_once() {
    let mut set = RevealSet::new(1);
    assert!(set.mark(0));
    assert!(!set.observe(0, true));
    assert!(!set.mark(0));
}

#[test]
fn empty_set_is_a_no_op() {
    let mut set = RevealSet::new(0);
    assert!(set.is_empty());
    assert!(!set.observe(0, true));
    assert!(!set.mark(5));
    assert!(!set.is_visible(0));
}
