//! # Tests for Config Constants
//!
//! Unit tests verifying the geometry conventions the generator relies on.

use crate::constants::*;

// =============================================================================
// POCKET TESTS
// =============================================================================

#[test]
fn test_corner_radius_divisor_positive() {
    assert!(CORNER_RADIUS_DIVISOR > 0.0, "divisor must be positive");
}

#[test]
fn test_corner_radius_is_fifth_of_width() {
    // Rounded pocket floors always use radius = width / 5
    assert_eq!(30.0 / CORNER_RADIUS_DIVISOR, 6.0);
    assert_eq!(10.0 / CORNER_RADIUS_DIVISOR, 2.0);
}

// =============================================================================
// MAGNET TESTS
// =============================================================================

#[test]
fn test_magnet_inset_centers_hole_in_wall() {
    // A 4 mm wall puts the magnet center 2 mm from the outer face
    let wall = 4.0;
    assert_eq!(wall / MAGNET_EDGE_INSET_DIVISOR, 2.0);
}

#[test]
fn test_magnet_top_clearance_positive() {
    assert!(
        MAGNET_TOP_CLEARANCE > 0.0,
        "magnets must stay recessed under the top face"
    );
}

#[test]
fn test_magnet_top_clearance_is_thin_cap() {
    // The cap is a cosmetic layer, not a structural one
    assert!(MAGNET_TOP_CLEARANCE <= 2.0);
}

#[test]
fn test_magnet_segments_fine_enough() {
    // Magnet fit needs a much finer circle than OpenSCAD's defaults
    assert!(MAGNET_SEGMENTS >= 64);
}

// =============================================================================
// ATTRIBUTION TESTS
// =============================================================================

#[test]
fn test_generator_name_not_empty() {
    assert!(!GENERATOR_NAME.is_empty());
}

#[test]
fn test_generator_name_comment_safe() {
    // The name lands inside a line comment, so it must stay single-line
    assert!(!GENERATOR_NAME.contains('\n'));
}
