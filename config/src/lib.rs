//! # Config Crate
//!
//! Centralized geometry conventions for the box generator pipeline.
//! Every magic number of the emitted geometry lives here so that the layout
//! and emission crates stay declarative and a convention can be changed in
//! exactly one place.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CORNER_RADIUS_DIVISOR, MAGNET_TOP_CLEARANCE};
//!
//! // Rounded pocket floors use a radius of one fifth of the pocket width
//! let width = 25.0;
//! let radius = width / CORNER_RADIUS_DIVISOR;
//! assert_eq!(radius, 5.0);
//!
//! // Magnet pockets stop short of the top face by a thin capping layer
//! assert!(MAGNET_TOP_CLEARANCE > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every convention defined once, used everywhere
//! - **Documented Rationale**: each constant records where its value comes from
//! - **Implicit Millimeters**: lengths follow the emitted script's unit
//!   convention and carry no unit suffix

pub mod constants;

#[cfg(test)]
mod tests;
