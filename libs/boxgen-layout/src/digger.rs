//! # Row Digger
//!
//! Lays out one row of compartments: the row's bounding extents plus one
//! positioned pocket per compartment, stacked along y.
//!
//! Pockets share a flush-top alignment: every pocket's opening lies on the
//! row's top plane, so shorter compartments start deeper instead of floating.

use boxgen_scad::ScadNode;
use config::constants::CORNER_RADIUS_DIVISOR;
use glam::DVec3;

use crate::error::SpecError;
use crate::spec::{CompartmentSpec, Row};

// =============================================================================
// POCKET SHAPE
// =============================================================================

/// The solid carved out for one compartment.
#[derive(Debug, Clone, PartialEq)]
pub enum PocketShape {
    /// Plain rectangular prism.
    Flat {
        /// Pocket extents as [width, depth, height].
        size: DVec3,
    },
    /// Solid with a rounded floor, built from the rounded-cube helper.
    Rounded {
        /// Pocket extents as [width, depth, height].
        size: DVec3,
        /// Floor rounding radius.
        radius: f64,
    },
}

impl PocketShape {
    /// Derive the pocket shape for one compartment.
    ///
    /// Curved floors round with a radius of one fifth of the pocket width.
    pub fn for_compartment(c: &CompartmentSpec) -> Self {
        let size = DVec3::new(c.width, c.depth, c.height);
        if c.curved_floor {
            Self::Rounded {
                size,
                radius: c.width / CORNER_RADIUS_DIVISOR,
            }
        } else {
            Self::Flat { size }
        }
    }

    /// Lower this shape to a geometry node at the origin.
    ///
    /// The rounded shape starts as a helper slab lying on its back, with the
    /// pocket height doubled so the rounding covers only the lower half. It
    /// is then rotated upright about x and mirrored along y, which leaves the
    /// curvature at the pocket floor instead of a side wall.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([w, d, h]);
    /// mirror([0, 1, 0]) rotate([90, 0, 0]) roundedcube(w, h * 2, d, w / 5);
    /// ```
    pub fn to_node(&self) -> ScadNode {
        match self {
            PocketShape::Flat { size } => ScadNode::Cube { size: *size },
            PocketShape::Rounded { size, radius } => ScadNode::Mirror {
                normal: DVec3::new(0.0, 1.0, 0.0),
                child: Box::new(ScadNode::Rotate {
                    angles: DVec3::new(90.0, 0.0, 0.0),
                    child: Box::new(ScadNode::RoundedCube {
                        size: DVec3::new(size.x, size.z * 2.0, size.y),
                        radius: *radius,
                    }),
                }),
            },
        }
    }
}

// =============================================================================
// POCKET
// =============================================================================

/// One pocket positioned within its row.
#[derive(Debug, Clone, PartialEq)]
pub struct Pocket {
    /// Offset from the row origin.
    pub offset: DVec3,
    /// Shape to carve.
    pub shape: PocketShape,
}

impl Pocket {
    /// Lower to a translated geometry node, offset from the given base.
    pub fn to_node_at(&self, base: DVec3) -> ScadNode {
        ScadNode::Translate {
            offset: base + self.offset,
            child: Box::new(self.shape.to_node()),
        }
    }
}

// =============================================================================
// ROW DIGGER
// =============================================================================

/// Lays out one row of compartments.
#[derive(Debug, Clone)]
pub struct RowDigger<'a> {
    row: &'a Row,
    separation: f64,
}

impl<'a> RowDigger<'a> {
    /// Create a digger for one row with the given inter-compartment gap.
    pub fn new(row: &'a Row, separation: f64) -> Self {
        Self { row, separation }
    }

    /// Bounding extents of the row.
    ///
    /// Width and height are the maxima over the compartments; depth is the
    /// sum of compartment depths plus a separation gap between neighbors.
    /// Errors on an empty row or a non-positive compartment extent.
    pub fn extents(&self) -> Result<DVec3, SpecError> {
        self.row.validate()?;
        let compartments = &self.row.compartments;
        let width = compartments.iter().map(|c| c.width).fold(0.0, f64::max);
        let depth = compartments.iter().map(|c| c.depth).sum::<f64>()
            + self.separation * (compartments.len() - 1) as f64;
        let height = compartments.iter().map(|c| c.height).fold(0.0, f64::max);
        Ok(DVec3::new(width, depth, height))
    }

    /// Positioned pockets, one per compartment, in y order.
    ///
    /// Compartment `i` sits at the cumulative depth of its predecessors plus
    /// the gaps between them; its z offset lifts it flush with the row's top
    /// plane.
    pub fn pockets(&self) -> Result<Vec<Pocket>, SpecError> {
        let extents = self.extents()?;
        let mut pockets = Vec::with_capacity(self.row.compartments.len());
        let mut y_shift = 0.0;
        for compartment in &self.row.compartments {
            pockets.push(Pocket {
                offset: DVec3::new(0.0, y_shift, extents.z - compartment.height),
                shape: PocketShape::for_compartment(compartment),
            });
            y_shift += compartment.depth + self.separation;
        }
        Ok(pockets)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn compartment(width: f64, depth: f64, height: f64, curved_floor: bool) -> CompartmentSpec {
        CompartmentSpec {
            width,
            depth,
            height,
            curved_floor,
        }
    }

    #[test]
    fn test_extents_single_compartment() {
        let row = Row::new(vec![compartment(10.0, 10.0, 5.0, false)]).unwrap();
        let extents = RowDigger::new(&row, 2.0).extents().unwrap();
        assert_eq!(extents, DVec3::new(10.0, 10.0, 5.0));
    }

    #[test]
    fn test_extents_mixed_compartments() {
        let row = Row::new(vec![
            compartment(10.0, 10.0, 5.0, false),
            compartment(14.0, 8.0, 3.0, false),
            compartment(6.0, 6.0, 7.0, false),
        ])
        .unwrap();
        let extents = RowDigger::new(&row, 2.0).extents().unwrap();
        // Width and height are maxima, depth sums with two gaps
        assert_eq!(extents.x, 14.0);
        assert_eq!(extents.y, 10.0 + 8.0 + 6.0 + 2.0 * 2.0);
        assert_eq!(extents.z, 7.0);
    }

    #[test]
    fn test_extents_empty_row_errors() {
        let row = Row {
            compartments: Vec::new(),
        };
        assert!(matches!(
            RowDigger::new(&row, 2.0).extents(),
            Err(SpecError::EmptyCollection(_))
        ));
    }

    #[test]
    fn test_extents_surface_bad_dimensions() {
        let row = Row {
            compartments: vec![compartment(10.0, -1.0, 5.0, false)],
        };
        assert!(matches!(
            RowDigger::new(&row, 2.0).extents(),
            Err(SpecError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_pockets_stack_along_y() {
        let row = Row::new(vec![
            compartment(10.0, 10.0, 5.0, false),
            compartment(10.0, 8.0, 5.0, false),
            compartment(10.0, 6.0, 5.0, false),
        ])
        .unwrap();
        let pockets = RowDigger::new(&row, 2.0).pockets().unwrap();
        assert_eq!(pockets.len(), 3);
        assert_eq!(pockets[0].offset.y, 0.0);
        assert_eq!(pockets[1].offset.y, 12.0);
        assert_eq!(pockets[2].offset.y, 22.0);
        // x stays at the row origin
        assert!(pockets.iter().all(|p| p.offset.x == 0.0));
    }

    #[test]
    fn test_pockets_align_flush_with_row_top() {
        let row = Row::new(vec![
            compartment(10.0, 10.0, 5.0, false),
            compartment(10.0, 8.0, 3.0, false),
        ])
        .unwrap();
        let digger = RowDigger::new(&row, 2.0);
        let extents = digger.extents().unwrap();
        for (pocket, compartment) in digger.pockets().unwrap().iter().zip(&row.compartments) {
            assert_eq!(pocket.offset.z + compartment.height, extents.z);
        }
    }

    #[test]
    fn test_flat_pocket_lowers_to_cube() {
        let shape = PocketShape::for_compartment(&compartment(10.0, 10.0, 5.0, false));
        match shape.to_node() {
            ScadNode::Cube { size } => assert_eq!(size, DVec3::new(10.0, 10.0, 5.0)),
            other => panic!("Expected Cube, got {:?}", other),
        }
    }

    #[test]
    fn test_curved_pocket_lowers_to_mirrored_helper_call() {
        let shape = PocketShape::for_compartment(&compartment(10.0, 8.0, 3.0, true));
        let node = shape.to_node();
        match &node {
            ScadNode::Mirror { normal, .. } => {
                assert_eq!(*normal, DVec3::new(0.0, 1.0, 0.0));
            }
            other => panic!("Expected Mirror, got {:?}", other),
        }
        // The slab lies on its back: height doubled on y, depth on z
        match node.leaf() {
            ScadNode::RoundedCube { size, radius } => {
                assert_eq!(*size, DVec3::new(10.0, 6.0, 8.0));
                assert_eq!(*radius, 2.0);
            }
            other => panic!("Expected RoundedCube, got {:?}", other),
        }
    }

    #[test]
    fn test_curved_radius_scales_with_width() {
        let shape = PocketShape::for_compartment(&compartment(25.0, 10.0, 5.0, true));
        match shape {
            PocketShape::Rounded { radius, .. } => assert_eq!(radius, 5.0),
            other => panic!("Expected Rounded, got {:?}", other),
        }
    }

    #[test]
    fn test_pocket_to_node_at_adds_base_offset() {
        let pocket = Pocket {
            offset: DVec3::new(0.0, 12.0, 2.0),
            shape: PocketShape::Flat {
                size: DVec3::new(10.0, 8.0, 3.0),
            },
        };
        match pocket.to_node_at(DVec3::new(2.0, 2.0, 1.0)) {
            ScadNode::Translate { offset, .. } => {
                assert_eq!(offset, DVec3::new(2.0, 14.0, 3.0));
            }
            other => panic!("Expected Translate, got {:?}", other),
        }
    }
}
