//! # Boxgen SCAD
//!
//! Typed geometry tree and OpenSCAD script writer.
//!
//! ## Architecture
//!
//! ```text
//! BoxSpec → boxgen-layout (ScadNode tree) → boxgen-scad writer → OpenSCAD text
//! ```
//!
//! ## Example
//!
//! ```rust
//! use boxgen_scad::{write_node, ScadNode};
//! use glam::DVec3;
//!
//! let node = ScadNode::Cube {
//!     size: DVec3::new(10.0, 10.0, 5.0),
//! };
//! assert_eq!(write_node(&node), "cube([10, 10, 5]);\n");
//! ```

pub mod node;
pub mod writer;

// Re-export public API
pub use node::{BooleanOp, Document, ScadNode};
pub use writer::{write_document, write_node, ROUNDED_CUBE_MODULE_NAME};
