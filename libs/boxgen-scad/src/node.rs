//! # SCAD Node Types
//!
//! Geometry nodes for the scripts the generator emits.
//!
//! Every value is a concrete number, so building a tree cannot fail; the
//! writer renders these nodes to text without further interpretation.

use glam::DVec3;

// =============================================================================
// DOCUMENT
// =============================================================================

/// A complete script: header comments plus a root geometry node.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Header comment lines, stored without the leading `//`.
    pub comments: Vec<String>,
    /// Root geometry node.
    pub root: ScadNode,
}

impl Document {
    /// Create a document with no header comments.
    pub fn new(root: ScadNode) -> Self {
        Self {
            comments: Vec::new(),
            root,
        }
    }

    /// Create a document with header comments.
    pub fn with_comments(comments: Vec<String>, root: ScadNode) -> Self {
        Self { comments, root }
    }
}

// =============================================================================
// SCAD NODE
// =============================================================================

/// A node in the emitted geometry tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ScadNode {
    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Cube anchored at the origin.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([x, y, z]);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: DVec3,
    },

    /// Cylinder anchored at the origin, rising along z.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h, d = 5);
    /// cylinder(h, d = 5, $fn = 100);
    /// ```
    Cylinder {
        /// Height.
        height: f64,
        /// Diameter.
        diameter: f64,
        /// Facet count (`$fn`); the renderer's default applies when absent.
        segments: Option<u32>,
    },

    /// Call to the shared rounded-cube helper module.
    ///
    /// The helper hulls four vertical corner cylinders into a slab with
    /// rounded vertical edges; the writer declares it once per document.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// roundedcube(x, y, z, r);
    /// ```
    RoundedCube {
        /// Size as [x, y, z].
        size: DVec3,
        /// Corner radius.
        radius: f64,
    },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Translation.
    Translate {
        /// Translation vector.
        offset: DVec3,
        /// Child geometry.
        child: Box<ScadNode>,
    },

    /// Rotation, angles in degrees per axis.
    Rotate {
        /// Rotation angles [x, y, z].
        angles: DVec3,
        /// Child geometry.
        child: Box<ScadNode>,
    },

    /// Mirror across the plane through the origin with the given normal.
    Mirror {
        /// Mirror plane normal.
        normal: DVec3,
        /// Child geometry.
        child: Box<ScadNode>,
    },

    // =========================================================================
    // COMBINATIONS
    // =========================================================================

    /// Boolean operation on children.
    Boolean {
        /// Which boolean to apply.
        op: BooleanOp,
        /// Child geometries.
        children: Vec<ScadNode>,
    },

    /// Convex hull of children.
    Hull {
        /// Child geometries.
        children: Vec<ScadNode>,
    },
}

impl ScadNode {
    /// Returns the number of direct child nodes.
    pub fn child_count(&self) -> usize {
        match self {
            ScadNode::Cube { .. } | ScadNode::Cylinder { .. } | ScadNode::RoundedCube { .. } => 0,
            ScadNode::Translate { .. } | ScadNode::Rotate { .. } | ScadNode::Mirror { .. } => 1,
            ScadNode::Boolean { children, .. } | ScadNode::Hull { children } => children.len(),
        }
    }

    /// Returns the innermost node of a transform chain.
    ///
    /// For primitives and block nodes this is the node itself.
    pub fn leaf(&self) -> &ScadNode {
        match self {
            ScadNode::Translate { child, .. }
            | ScadNode::Rotate { child, .. }
            | ScadNode::Mirror { child, .. } => child.leaf(),
            other => other,
        }
    }
}

// =============================================================================
// BOOLEAN OP
// =============================================================================

/// Boolean operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    /// Combine all children into one shape
    Union,
    /// Subtract subsequent children from the first
    Difference,
    /// Keep only the overlapping volume
    Intersection,
}

impl BooleanOp {
    /// The script keyword for this operation.
    pub fn keyword(self) -> &'static str {
        match self {
            BooleanOp::Union => "union",
            BooleanOp::Difference => "difference",
            BooleanOp::Intersection => "intersection",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_count_primitive() {
        let node = ScadNode::Cube {
            size: DVec3::splat(10.0),
        };
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_child_count_transform() {
        let node = ScadNode::Translate {
            offset: DVec3::new(1.0, 2.0, 3.0),
            child: Box::new(ScadNode::Cube {
                size: DVec3::splat(5.0),
            }),
        };
        assert_eq!(node.child_count(), 1);
    }

    #[test]
    fn test_child_count_boolean() {
        let node = ScadNode::Boolean {
            op: BooleanOp::Difference,
            children: vec![
                ScadNode::Cube {
                    size: DVec3::splat(10.0),
                },
                ScadNode::Cube {
                    size: DVec3::splat(5.0),
                },
            ],
        };
        assert_eq!(node.child_count(), 2);
    }

    #[test]
    fn test_leaf_unwraps_transform_chain() {
        let node = ScadNode::Mirror {
            normal: DVec3::new(0.0, 1.0, 0.0),
            child: Box::new(ScadNode::Rotate {
                angles: DVec3::new(90.0, 0.0, 0.0),
                child: Box::new(ScadNode::RoundedCube {
                    size: DVec3::new(10.0, 6.0, 8.0),
                    radius: 2.0,
                }),
            }),
        };
        match node.leaf() {
            ScadNode::RoundedCube { radius, .. } => assert_eq!(*radius, 2.0),
            other => panic!("Expected RoundedCube, got {:?}", other),
        }
    }

    #[test]
    fn test_boolean_keywords() {
        assert_eq!(BooleanOp::Union.keyword(), "union");
        assert_eq!(BooleanOp::Difference.keyword(), "difference");
        assert_eq!(BooleanOp::Intersection.keyword(), "intersection");
    }

    #[test]
    fn test_document_new_has_no_comments() {
        let doc = Document::new(ScadNode::Cube {
            size: DVec3::splat(1.0),
        });
        assert!(doc.comments.is_empty());
    }
}
