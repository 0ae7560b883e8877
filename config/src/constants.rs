//! # Geometry Conventions
//!
//! Centralized constants for the box generator. The shapes the generator
//! emits follow a handful of conventions (pocket floor rounding, magnet hole
//! placement, facet resolution) that are fixed by the generator itself rather
//! than derived from the box specification, so they are named here.
//!
//! ## Categories
//!
//! - **Pockets**: rounded-floor shape conventions
//! - **Magnets**: corner hole placement and resolution
//! - **Attribution**: generator identity echoed in script headers

// =============================================================================
// POCKET CONSTANTS
// =============================================================================

/// Divisor deriving a rounded pocket floor's corner radius from its width.
///
/// A curved-floor pocket rounds its bottom with cylinders of radius
/// `width / CORNER_RADIUS_DIVISOR`. One fifth of the width curves enough for
/// small printed parts to tip out while leaving most of the floor flat.
///
/// # Example
///
/// ```rust
/// use config::constants::CORNER_RADIUS_DIVISOR;
///
/// let pocket_width = 30.0;
/// let radius = pocket_width / CORNER_RADIUS_DIVISOR;
/// assert_eq!(radius, 6.0);
/// ```
pub const CORNER_RADIUS_DIVISOR: f64 = 5.0;

// =============================================================================
// MAGNET CONSTANTS
// =============================================================================

/// Divisor deriving a magnet hole's corner inset from the wall thickness.
///
/// Magnet cylinders sit centered `wall / MAGNET_EDGE_INSET_DIVISOR` away from
/// each outer corner, i.e. in the middle of the wall. The inset ignores the
/// magnet diameter; callers that care about the hole clipping the outer face
/// keep `magnets_diameter` below the wall thickness.
///
/// # Example
///
/// ```rust
/// use config::constants::MAGNET_EDGE_INSET_DIVISOR;
///
/// let wall = 4.0;
/// let inset = wall / MAGNET_EDGE_INSET_DIVISOR;
/// assert_eq!(inset, 2.0);
/// ```
pub const MAGNET_EDGE_INSET_DIVISOR: f64 = 2.0;

/// Material left between a magnet pocket and the box's top face.
///
/// Magnet holes start at `external_z - magnets_height + MAGNET_TOP_CLEARANCE`
/// so an inserted magnet ends up recessed under a thin printed cap instead of
/// breaking through the top surface.
///
/// # Example
///
/// ```rust
/// use config::constants::MAGNET_TOP_CLEARANCE;
///
/// let external_z = 10.0;
/// let magnets_height = 3.0;
/// let hole_base = external_z - magnets_height + MAGNET_TOP_CLEARANCE;
/// assert_eq!(hole_base, 8.0);
/// ```
pub const MAGNET_TOP_CLEARANCE: f64 = 1.0;

/// Facet count (`$fn`) for magnet hole cylinders.
///
/// Magnet pockets need a close diameter fit, so they render much finer than
/// OpenSCAD's angular defaults would give.
pub const MAGNET_SEGMENTS: u32 = 100;

// =============================================================================
// ATTRIBUTION CONSTANTS
// =============================================================================

/// Name echoed in the emitted script's attribution comment.
pub const GENERATOR_NAME: &str = "boxgen";
