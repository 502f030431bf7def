//! Coffee table - furniture with a shape, leg count, storage and extension flags.

use crate::{
    core::validation,
    entities::{
        furniture::{Furniture, FurnitureItem, NewFurniture},
        household_object::{HouseholdItem, HouseholdObject},
    },
    errors::Result,
};
use serde::Deserialize;
use std::ops::RangeInclusive;

/// Accepted table top shapes, compared case-insensitively.
pub const TABLE_SHAPES: [&str; 4] = ["circle", "square", "rectangle", "other"];
/// Allowed number of legs, inclusive.
pub const LEG_COUNT_RANGE: RangeInclusive<i32> = 1..=4;

/// Unvalidated input for a [`CoffeeTable`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCoffeeTable {
    /// Furniture and common household attributes
    #[serde(flatten)]
    pub furniture: NewFurniture,
    /// Whether the table has a drawer or shelf underneath
    #[serde(default)]
    pub has_storage: bool,
    /// Optional shape: circle, square, rectangle or other
    pub table_shape: Option<String>,
    /// Number of legs, 1 to 4
    pub leg_count: i32,
    /// Whether the top can be extended
    #[serde(default)]
    pub extendable: bool,
}

/// A validated coffee table.
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeTable {
    furniture: Furniture,
    has_storage: bool,
    table_shape: Option<String>,
    leg_count: i32,
    extendable: bool,
}

impl CoffeeTable {
    /// Validates the furniture attributes, then the table shape and leg count.
    ///
    /// # Errors
    /// Any furniture validation error, `InvalidValue` for an unknown shape or a
    /// leg count outside 1..=4.
    pub fn new(input: NewCoffeeTable) -> Result<Self> {
        let furniture = Furniture::new(input.furniture)?;
        let table_shape = validation::optional_one_of("table shape", input.table_shape, &TABLE_SHAPES)?;
        let leg_count = validation::in_range("leg count", input.leg_count, LEG_COUNT_RANGE)?;

        Ok(Self {
            furniture,
            has_storage: input.has_storage,
            table_shape,
            leg_count,
            extendable: input.extendable,
        })
    }

    /// Whether the table has built-in storage.
    pub fn has_storage(&self) -> bool {
        self.has_storage
    }

    /// `None` when the shape was not specified.
    pub fn table_shape(&self) -> Option<&str> {
        self.table_shape.as_deref()
    }

    /// Number of legs.
    pub fn leg_count(&self) -> i32 {
        self.leg_count
    }

    /// Whether the top can be extended.
    pub fn is_extendable(&self) -> bool {
        self.extendable
    }
}

impl HouseholdItem for CoffeeTable {
    fn household_object(&self) -> &HouseholdObject {
        self.furniture.household_object()
    }

    fn type_name(&self) -> &'static str {
        "Coffee Table"
    }
}

impl FurnitureItem for CoffeeTable {
    fn furniture(&self) -> &Furniture {
        &self.furniture
    }
}
