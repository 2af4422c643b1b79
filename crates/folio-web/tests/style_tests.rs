// Host-side tests for inline style formatting.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn whole_numbers_print_without_fraction() {
    assert_eq!(px(30.0), "30px");
    assert_eq!(translate_y(120.0), "translateY(120px)");
}

#[test]
fn fractional_offsets_keep_precision() {
    assert_eq!(translate_y(12.5), "translateY(12.5px)");
    assert_eq!(translate_y(-7.25), "translateY(-7.25px)");
}

#[test]
fn pointer_offsets_print_shortest_form() {
    // rect.left = 10.3, clientX = 130
    assert_eq!(px(130.0 - 10.3), "119.7px");
    assert_eq!(
        tilt_transform(0.086, -0.5, 1000.0, 16.0),
        "perspective(1000px) rotateX(0.086deg) rotateY(-0.5deg) translateX(16px)"
    );
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(px(-0.0), "0px");
    assert_eq!(seconds(-0.0), "0s");
}

#[test]
fn seconds_suffix() {
    assert_eq!(seconds(0.0), "0s");
    assert_eq!(seconds(0.5), "0.5s");
}

#[test]
fn tilt_transform_layout() {
    assert_eq!(
        tilt_transform(-1.0, 2.0, 1000.0, 16.0),
        "perspective(1000px) rotateX(-1deg) rotateY(2deg) translateX(16px)"
    );
    assert_eq!(
        tilt_transform(0.0, -0.0, 1000.0, 16.0),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) translateX(16px)"
    );
}
