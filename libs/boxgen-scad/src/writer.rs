//! # Script Writer
//!
//! Renders a [`ScadNode`] tree to OpenSCAD source text. Transform chains stay
//! on one line; boolean and hull blocks open a brace and indent their
//! children.

use crate::node::{Document, ScadNode};

/// Name of the helper module declared once per document for rounded pockets.
pub const ROUNDED_CUBE_MODULE_NAME: &str = "roundedcube";

/// Indentation unit for block children.
const INDENT: &str = "  ";

/// Declaration of the rounded-cube helper: a hull of four vertical cylinders
/// at the inset corners of the footprint, giving a slab whose vertical edges
/// are rounded with the requested radius.
const ROUNDED_CUBE_MODULE: &str = "\
module roundedcube(xdim, ydim, zdim, rdim) {
  hull() {
    translate([rdim, rdim, 0]) cylinder(h = zdim, r = rdim);
    translate([xdim - rdim, rdim, 0]) cylinder(h = zdim, r = rdim);
    translate([rdim, ydim - rdim, 0]) cylinder(h = zdim, r = rdim);
    translate([xdim - rdim, ydim - rdim, 0]) cylinder(h = zdim, r = rdim);
  }
}
";

/// Render a complete document: header comments, the rounded-cube helper
/// declaration, then the root node.
///
/// The helper is declared exactly once whether or not any node calls it, so
/// the output is self-contained for every input tree.
pub fn write_document(doc: &Document) -> String {
    let mut out = String::new();
    for comment in &doc.comments {
        out.push_str("// ");
        out.push_str(comment);
        out.push('\n');
    }
    if !doc.comments.is_empty() {
        out.push('\n');
    }
    out.push_str(ROUNDED_CUBE_MODULE);
    out.push('\n');
    push_node(&mut out, &doc.root, 0);
    out
}

/// Render a single node as a statement line (with trailing newline).
pub fn write_node(node: &ScadNode) -> String {
    let mut out = String::new();
    push_node(&mut out, node, 0);
    out
}

fn push_node(out: &mut String, node: &ScadNode, depth: usize) {
    push_indent(out, depth);
    push_inline(out, node, depth);
    out.push('\n');
}

fn push_inline(out: &mut String, node: &ScadNode, depth: usize) {
    match node {
        ScadNode::Cube { size } => {
            out.push_str(&format!("cube({});", format_vector(*size)));
        }
        ScadNode::Cylinder {
            height,
            diameter,
            segments,
        } => match segments {
            Some(n) => out.push_str(&format!(
                "cylinder({}, d = {}, $fn = {});",
                format_number(*height),
                format_number(*diameter),
                n
            )),
            None => out.push_str(&format!(
                "cylinder({}, d = {});",
                format_number(*height),
                format_number(*diameter)
            )),
        },
        ScadNode::RoundedCube { size, radius } => {
            out.push_str(&format!(
                "{}({}, {}, {}, {});",
                ROUNDED_CUBE_MODULE_NAME,
                format_number(size.x),
                format_number(size.y),
                format_number(size.z),
                format_number(*radius)
            ));
        }
        ScadNode::Translate { offset, child } => {
            out.push_str(&format!("translate({}) ", format_vector(*offset)));
            push_inline(out, child, depth);
        }
        ScadNode::Rotate { angles, child } => {
            out.push_str(&format!("rotate({}) ", format_vector(*angles)));
            push_inline(out, child, depth);
        }
        ScadNode::Mirror { normal, child } => {
            out.push_str(&format!("mirror({}) ", format_vector(*normal)));
            push_inline(out, child, depth);
        }
        ScadNode::Boolean { op, children } => {
            out.push_str(op.keyword());
            out.push_str("() {\n");
            for child in children {
                push_node(out, child, depth + 1);
            }
            push_indent(out, depth);
            out.push('}');
        }
        ScadNode::Hull { children } => {
            out.push_str("hull() {\n");
            for child in children {
                push_node(out, child, depth + 1);
            }
            push_indent(out, depth);
            out.push('}');
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn format_number(value: f64) -> String {
    // Display drops the fractional part of whole values ("14", not "14.0")
    format!("{}", value)
}

fn format_vector(v: glam::DVec3) -> String {
    format!(
        "[{}, {}, {}]",
        format_number(v.x),
        format_number(v.y),
        format_number(v.z)
    )
}

// =============================================================================
// TESTS
// =============================================================================
