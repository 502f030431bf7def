//! Furniture category - household objects with an assembly flag and frame material.

use crate::{
    core::validation,
    entities::household_object::{HouseholdItem, HouseholdObject, NewHouseholdObject},
    errors::Result,
};
use serde::Deserialize;

/// Accepted frame materials, compared case-insensitively.
pub const FRAME_MATERIALS: [&str; 2] = ["wood", "metal"];

/// Unvalidated input for a [`Furniture`] item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFurniture {
    /// Common household attributes
    #[serde(flatten)]
    pub base: NewHouseholdObject,
    /// Whether the buyer has to assemble the piece
    #[serde(default)]
    pub assembly_required: bool,
    /// Optional frame material, "wood" or "metal"
    pub frame_material: Option<String>,
}

/// A validated piece of furniture.
#[derive(Debug, Clone, PartialEq)]
pub struct Furniture {
    base: HouseholdObject,
    assembly_required: bool,
    frame_material: Option<String>,
}

impl Furniture {
    /// Validates the base attributes first, then the frame material.
    ///
    /// # Errors
    /// Any base validation error, or `InvalidValue` when a frame material other
    /// than wood or metal is given.
    pub fn new(input: NewFurniture) -> Result<Self> {
        let base = HouseholdObject::new(input.base)?;
        let frame_material =
            validation::optional_one_of("frame material", input.frame_material, &FRAME_MATERIALS)?;

        Ok(Self {
            base,
            assembly_required: input.assembly_required,
            frame_material,
        })
    }
}

/// Category contract for furniture and its specializations.
pub trait FurnitureItem: HouseholdItem {
    /// The embedded furniture attributes.
    fn furniture(&self) -> &Furniture;

    /// Whether the buyer has to assemble the piece.
    fn is_assembly_required(&self) -> bool {
        self.furniture().assembly_required
    }

    /// `None` when the material was not specified.
    fn frame_material(&self) -> Option<&str> {
        self.furniture().frame_material.as_deref()
    }
}

impl HouseholdItem for Furniture {
    fn household_object(&self) -> &HouseholdObject {
        &self.base
    }

    fn type_name(&self) -> &'static str {
        "Furniture"
    }
}

impl FurnitureItem for Furniture {
    fn furniture(&self) -> &Furniture {
        self
    }
}
