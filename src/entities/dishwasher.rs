//! Dishwasher - electronics with a cabinet width, rack count and install type.

use crate::{
    core::validation,
    entities::{
        electronics::{Electronics, ElectronicsItem, NewElectronics},
        household_object::{HouseholdItem, HouseholdObject},
    },
    errors::Result,
};
use serde::Deserialize;
use std::ops::RangeInclusive;

/// Allowed cabinet width in inches, inclusive.
pub const WIDTH_INCHES_RANGE: RangeInclusive<i32> = 24..=42;
/// Allowed number of racks, inclusive.
pub const RACK_COUNT_RANGE: RangeInclusive<i32> = 2..=3;
/// Accepted install types, compared case-insensitively.
pub const DISHWASHER_TYPES: [&str; 2] = ["builtin", "portable"];

/// Unvalidated input for a [`Dishwasher`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewDishwasher {
    /// Electronics and common household attributes
    #[serde(flatten)]
    pub electronics: NewElectronics,
    /// Cabinet width in inches, 24 to 42
    pub width_inches: i32,
    /// Number of racks, 2 or 3
    pub rack_count: i32,
    /// Required: "builtin" or "portable"
    pub dishwasher_type: Option<String>,
}

/// A validated dishwasher.
#[derive(Debug, Clone, PartialEq)]
pub struct Dishwasher {
    electronics: Electronics,
    width_inches: i32,
    rack_count: i32,
    dishwasher_type: String,
}

impl Dishwasher {
    /// Validates the electronics attributes, then width, rack count and type.
    ///
    /// Unlike the optional enumerations elsewhere, the dishwasher type must be
    /// present.
    ///
    /// # Errors
    /// Any electronics validation error, `InvalidValue` for an out of range
    /// width or rack count or an unknown type, `MissingValue` when the type is absent.
    pub fn new(input: NewDishwasher) -> Result<Self> {
        let electronics = Electronics::new(input.electronics)?;
        let width_inches =
            validation::in_range("dishwasher width", input.width_inches, WIDTH_INCHES_RANGE)?;
        let rack_count = validation::in_range("number of racks", input.rack_count, RACK_COUNT_RANGE)?;
        let dishwasher_type =
            validation::required_one_of("dishwasher type", input.dishwasher_type, &DISHWASHER_TYPES)?;

        Ok(Self {
            electronics,
            width_inches,
            rack_count,
            dishwasher_type,
        })
    }

    /// Cabinet width in inches.
    pub fn width_inches(&self) -> i32 {
        self.width_inches
    }

    /// Number of racks.
    pub fn rack_count(&self) -> i32 {
        self.rack_count
    }

    /// Install type as given, e.g. `"builtin"`.
    pub fn dishwasher_type(&self) -> &str {
        &self.dishwasher_type
    }
}

impl HouseholdItem for Dishwasher {
    fn household_object(&self) -> &HouseholdObject {
        self.electronics.household_object()
    }

    fn type_name(&self) -> &'static str {
        "Dishwasher"
    }
}

impl ElectronicsItem for Dishwasher {
    fn electronics(&self) -> &Electronics {
        &self.electronics
    }
}
