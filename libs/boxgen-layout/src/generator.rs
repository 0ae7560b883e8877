//! # Box Generator
//!
//! Composes rows into the full box: outer dimensions, row placement, optional
//! corner magnet holes, and the final script document.
//!
//! The emitted solid is one boolean difference: the outer block minus every
//! pocket minus every magnet hole.

use boxgen_scad::{write_document, BooleanOp, Document, ScadNode};
use config::constants::{
    GENERATOR_NAME, MAGNET_EDGE_INSET_DIVISOR, MAGNET_SEGMENTS, MAGNET_TOP_CLEARANCE,
};
use glam::DVec3;

use crate::digger::{Pocket, RowDigger};
use crate::error::SpecError;
use crate::spec::BoxSpec;

// =============================================================================
// PLACED ROW
// =============================================================================

/// One row positioned within the box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRow {
    /// Offset of the row origin from the box origin.
    pub offset: DVec3,
    /// The row's pockets, still row-relative.
    pub pockets: Vec<Pocket>,
}

// =============================================================================
// MAGNET HOLE
// =============================================================================

/// One magnet hole cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnetHole {
    /// Center of the cylinder base.
    pub position: DVec3,
    /// Cylinder height.
    pub height: f64,
    /// Cylinder diameter.
    pub diameter: f64,
}

impl MagnetHole {
    /// Lower to a translated cylinder node with a fine facet count.
    pub fn to_node(&self) -> ScadNode {
        ScadNode::Translate {
            offset: self.position,
            child: Box::new(ScadNode::Cylinder {
                height: self.height,
                diameter: self.diameter,
                segments: Some(MAGNET_SEGMENTS),
            }),
        }
    }
}

// =============================================================================
// BOX GENERATOR
// =============================================================================

/// Computes the complete box geometry for one specification.
///
/// Every method is a pure function of the borrowed spec; nothing is cached
/// between calls.
#[derive(Debug, Clone)]
pub struct BoxGenerator<'a> {
    spec: &'a BoxSpec,
}

impl<'a> BoxGenerator<'a> {
    /// Create a generator borrowing the given spec.
    pub fn new(spec: &'a BoxSpec) -> Self {
        Self { spec }
    }

    /// Extents of the cavity block enclosing every row.
    ///
    /// Rows sit side by side along x with a separation gap between
    /// neighbors; y and z take the deepest and tallest row. The settings
    /// are checked on this first read, so specs built without
    /// [`BoxSpec::new`] surface `InvalidSetting` before any geometry is
    /// derived.
    pub fn internal_dimensions(&self) -> Result<DVec3, SpecError> {
        self.spec.validate_settings()?;
        if self.spec.rows.is_empty() {
            return Err(SpecError::EmptyCollection("rows".to_string()));
        }
        let mut internal = DVec3::ZERO;
        for row in &self.spec.rows {
            let extents = RowDigger::new(row, self.spec.compartments_separation).extents()?;
            internal.x += extents.x;
            internal.y = internal.y.max(extents.y);
            internal.z = internal.z.max(extents.z);
        }
        internal.x += self.spec.compartments_separation * (self.spec.rows.len() - 1) as f64;
        Ok(internal)
    }

    /// Outer dimensions: walls wrap x and y, the floor sits under z.
    ///
    /// The box is open-topped, so no wall is added above the cavity.
    pub fn outer_dimensions(&self) -> Result<DVec3, SpecError> {
        let internal = self.internal_dimensions()?;
        Ok(DVec3::new(
            internal.x + 2.0 * self.spec.external_walls,
            internal.y + 2.0 * self.spec.external_walls,
            internal.z + self.spec.floor,
        ))
    }

    /// Rows placed left to right along x, each flush with the top plane.
    ///
    /// Row `k` starts after the wall plus every earlier row and gap; its z
    /// offset lifts the whole row so its pockets open at the box's top,
    /// mirroring the per-compartment alignment inside each row.
    pub fn layout(&self) -> Result<Vec<PlacedRow>, SpecError> {
        let outer = self.outer_dimensions()?;
        let mut placed = Vec::with_capacity(self.spec.rows.len());
        let mut x_shift = self.spec.external_walls;
        for row in &self.spec.rows {
            let digger = RowDigger::new(row, self.spec.compartments_separation);
            let extents = digger.extents()?;
            placed.push(PlacedRow {
                offset: DVec3::new(x_shift, self.spec.external_walls, outer.z - extents.z),
                pockets: digger.pockets()?,
            });
            x_shift += extents.x + self.spec.compartments_separation;
        }
        Ok(placed)
    }

    /// The four corner magnet holes, or none when magnets are disabled.
    ///
    /// Holes are centered half a wall in from each corner and stop one
    /// capping layer short of the top face, leaving inserted magnets
    /// recessed under a thin printed skin.
    pub fn magnet_holes(&self) -> Result<Vec<MagnetHole>, SpecError> {
        if !self.spec.magnets_enabled() {
            return Ok(Vec::new());
        }
        let outer = self.outer_dimensions()?;
        let inset = self.spec.external_walls / MAGNET_EDGE_INSET_DIVISOR;
        let z = outer.z - self.spec.magnets_height + MAGNET_TOP_CLEARANCE;
        let corners = [
            (inset, inset),
            (outer.x - inset, inset),
            (inset, outer.y - inset),
            (outer.x - inset, outer.y - inset),
        ];
        Ok(corners
            .into_iter()
            .map(|(x, y)| MagnetHole {
                position: DVec3::new(x, y, z),
                height: self.spec.magnets_height,
                diameter: self.spec.magnets_diameter,
            })
            .collect())
    }

    /// Advisory notes about settings that produce risky geometry.
    ///
    /// Magnet holes keep their half-wall corner inset whatever the diameter,
    /// so a hole wider than the wall breaks through its faces; the placement
    /// is kept as-is and flagged here instead of rejected.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.spec.magnets_enabled() && self.spec.magnets_diameter >= self.spec.external_walls {
            warnings.push(format!(
                "magnet holes of diameter {} do not fit within walls of thickness {}",
                self.spec.magnets_diameter, self.spec.external_walls
            ));
        }
        warnings
    }

    /// Assemble the full document.
    ///
    /// The header echoes the generator name and the settings serialized as
    /// JSON; the root is one difference of the outer block, every pocket
    /// across every row, and every magnet hole.
    pub fn to_document(&self) -> Result<Document, SpecError> {
        self.spec.validate()?;
        let outer = self.outer_dimensions()?;
        let mut children = vec![ScadNode::Cube { size: outer }];
        for row in self.layout()? {
            for pocket in &row.pockets {
                children.push(pocket.to_node_at(row.offset));
            }
        }
        for hole in self.magnet_holes()? {
            children.push(hole.to_node());
        }
        let settings = serde_json::to_string(self.spec)
            .map_err(|e| SpecError::SettingsEncoding(e.to_string()))?;
        Ok(Document::with_comments(
            vec![
                format!("Generated by {}", GENERATOR_NAME),
                format!("Settings: {}", settings),
            ],
            ScadNode::Boolean {
                op: BooleanOp::Difference,
                children,
            },
        ))
    }

    /// Render the final script text.
    pub fn to_script(&self) -> Result<String, SpecError> {
        Ok(write_document(&self.to_document()?))
    }
}

// =============================================================================
// TESTS
// =============================================================================
