//! # Box Specification
//!
//! Input model for the generator. A [`BoxSpec`] nests rows of compartments;
//! every recognized setting is an explicit field, so malformed input fails at
//! construction (or deserialization) instead of on first access.
//!
//! All lengths are millimeters by the emitted script's convention.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

// =============================================================================
// COMPARTMENT
// =============================================================================

/// One pocket to carve out of the box.
///
/// Extents follow the box axes: `width` along x, `depth` along y, `height`
/// along z. A curved floor swaps the flat pocket bottom for a rounded one,
/// which eases removal of small printed parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompartmentSpec {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub depth: f64,
    /// Extent along z.
    pub height: f64,
    /// Whether the pocket floor is rounded instead of flat.
    #[serde(default)]
    pub curved_floor: bool,
}

impl CompartmentSpec {
    /// Create a compartment, validating that every extent is positive.
    pub fn new(width: f64, depth: f64, height: f64, curved_floor: bool) -> Result<Self, SpecError> {
        let spec = Self {
            width,
            depth,
            height,
            curved_floor,
        };
        spec.validate("compartment")?;
        Ok(spec)
    }

    /// Check that every extent is strictly positive.
    ///
    /// `path` names the compartment in error messages, e.g. `rows[1][0]`.
    pub(crate) fn validate(&self, path: &str) -> Result<(), SpecError> {
        let extents = [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
        ];
        for (name, value) in extents {
            // Negated so a NaN extent fails too
            if !(value > 0.0) {
                return Err(SpecError::InvalidDimension(format!(
                    "{}.{} = {}",
                    path, name, value
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// ROW
// =============================================================================

/// An ordered run of compartments, laid out consecutively along y.
///
/// Serializes transparently as a plain array of compartments, so a settings
/// file nests arrays two deep: rows, then compartments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    /// The row's compartments, in y order.
    pub compartments: Vec<CompartmentSpec>,
}

impl Row {
    /// Create a row, validating it eagerly.
    pub fn new(compartments: Vec<CompartmentSpec>) -> Result<Self, SpecError> {
        let row = Self { compartments };
        row.validate()?;
        Ok(row)
    }

    /// Check that the row is non-empty and every compartment well-formed.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.compartments.is_empty() {
            return Err(SpecError::EmptyCollection("row".to_string()));
        }
        for (i, compartment) in self.compartments.iter().enumerate() {
            compartment.validate(&format!("row[{}]", i))?;
        }
        Ok(())
    }
}

// =============================================================================
// BOX SPEC
// =============================================================================

/// The full generator input.
///
/// Rows are laid out consecutively along x; `compartments_separation` is the
/// shared gap both between rows and between compartments within a row. The
/// box is open-topped: walls wrap x and y, the floor sits under z, and
/// nothing is added above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxSpec {
    /// Outer wall thickness on x and y.
    pub external_walls: f64,
    /// Gap between neighboring compartments and between neighboring rows.
    pub compartments_separation: f64,
    /// Floor thickness under the deepest pocket.
    pub floor: f64,
    /// Rows of compartments, in x order.
    pub rows: Vec<Row>,
    /// Magnet hole height; zero or absent disables magnets.
    #[serde(default)]
    pub magnets_height: f64,
    /// Magnet hole diameter; zero or absent disables magnets.
    #[serde(default)]
    pub magnets_diameter: f64,
}

impl BoxSpec {
    /// Create a spec, validating every setting and compartment eagerly.
    pub fn new(
        external_walls: f64,
        compartments_separation: f64,
        floor: f64,
        rows: Vec<Row>,
        magnets_height: f64,
        magnets_diameter: f64,
    ) -> Result<Self, SpecError> {
        let spec = Self {
            external_walls,
            compartments_separation,
            floor,
            rows,
            magnets_height,
            magnets_diameter,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Validate the whole spec tree.
    ///
    /// Thicknesses and gaps must be non-negative, `rows` and every row must
    /// be non-empty, and every compartment extent must be positive. Magnet
    /// settings are not range-checked; any non-positive value just disables
    /// magnets.
    pub fn validate(&self) -> Result<(), SpecError> {
        self.validate_settings()?;
        if self.rows.is_empty() {
            return Err(SpecError::EmptyCollection("rows".to_string()));
        }
        for (k, row) in self.rows.iter().enumerate() {
            if row.compartments.is_empty() {
                return Err(SpecError::EmptyCollection(format!("rows[{}]", k)));
            }
            for (i, compartment) in row.compartments.iter().enumerate() {
                compartment.validate(&format!("rows[{}][{}]", k, i))?;
            }
        }
        Ok(())
    }

    /// Check that thicknesses and gaps are non-negative.
    ///
    /// Deserialization bypasses [`BoxSpec::new`], so the generator calls
    /// this when it first reads the settings to derive dimensions.
    pub(crate) fn validate_settings(&self) -> Result<(), SpecError> {
        let settings = [
            ("external_walls", self.external_walls),
            ("compartments_separation", self.compartments_separation),
            ("floor", self.floor),
        ];
        for (name, value) in settings {
            // Negated so a NaN setting fails too
            if !(value >= 0.0) {
                return Err(SpecError::InvalidSetting(format!("{} = {}", name, value)));
            }
        }
        Ok(())
    }

    /// Magnets are emitted iff both height and diameter are positive.
    pub fn magnets_enabled(&self) -> bool {
        self.magnets_height > 0.0 && self.magnets_diameter > 0.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
