//! # Boxgen Layout
//!
//! Layout engine for multi-compartment storage boxes. Given a nested
//! specification of compartment sizes, it derives every pocket position, the
//! enclosing box's outer dimensions, and the script that carves the pockets
//! (and optional magnet holes) out of a solid block.
//!
//! ## Architecture
//!
//! ```text
//! BoxSpec → RowDigger (row extents, pockets)
//!         → BoxGenerator (row placement, magnets, document)
//!         → boxgen-scad (ScadNode tree → OpenSCAD text)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use boxgen_layout::{generate, BoxSpec, CompartmentSpec, Row};
//!
//! let compartments = vec![CompartmentSpec::new(10.0, 10.0, 5.0, false).unwrap()];
//! let rows = vec![Row::new(compartments).unwrap()];
//! let spec = BoxSpec::new(2.0, 2.0, 1.0, rows, 0.0, 0.0).unwrap();
//!
//! let script = generate(&spec).unwrap();
//! assert!(script.contains("difference() {"));
//! ```

pub mod digger;
pub mod error;
pub mod generator;
pub mod spec;

// Re-export public API
pub use digger::{Pocket, PocketShape, RowDigger};
pub use error::SpecError;
pub use generator::{BoxGenerator, MagnetHole, PlacedRow};
pub use spec::{BoxSpec, CompartmentSpec, Row};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Generate the complete script for one box specification.
///
/// This is the main entry point for the generator.
///
/// ## Parameters
///
/// - `spec`: the validated (or to-be-validated) box specification
///
/// ## Returns
///
/// `Result<String, SpecError>` - the full script text on success
///
/// ## Example
///
/// ```rust
/// use boxgen_layout::{generate, BoxSpec, CompartmentSpec, Row};
///
/// let compartments = vec![CompartmentSpec::new(10.0, 10.0, 5.0, false).unwrap()];
/// let rows = vec![Row::new(compartments).unwrap()];
/// let spec = BoxSpec::new(2.0, 2.0, 1.0, rows, 0.0, 0.0).unwrap();
/// let script = generate(&spec).unwrap();
/// ```
pub fn generate(spec: &BoxSpec) -> Result<String, SpecError> {
    BoxGenerator::new(spec).to_script()
}
