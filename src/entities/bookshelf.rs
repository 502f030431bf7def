//! Bookshelf - furniture with a shelf count and shelf wood.

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

/// Allowed number of shelves, inclusive.
pub const SHELF_COUNT_RANGE: RangeInclusive<i32> = 1..=8;
/// Accepted shelf woods, compared case-insensitively.
pub const SHELF_MATERIALS: [&str; 3] = ["oak", "chestnut", "mahogany"];

/// Unvalidated input for a [`Bookshelf`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBookshelf {
    /// Furniture and common household attributes
    #[serde(flatten)]
    pub furniture: NewFurniture,
    /// Number of shelves, 1 to 8
    pub shelf_count: i32,
    /// Optional shelf wood: oak, chestnut or mahogany
    pub shelf_material: Option<String>,
}

/// A validated bookshelf.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookshelf {
    furniture: Furniture,
    shelf_count: i32,
    shelf_material: Option<String>,
}

impl Bookshelf {
    /// # Errors
    /// Any furniture validation error, then `InvalidValue` for a shelf count
    /// outside 1..=8 or a shelf material other than oak, chestnut or mahogany.
    pub fn new(input: NewBookshelf) -> Result<Self> {
        let furniture = Furniture::new(input.furniture)?;
        let shelf_count = validation::in_range("shelf count", input.shelf_count, SHELF_COUNT_RANGE)?;
        let shelf_material =
            validation::optional_one_of("shelf material", input.shelf_material, &SHELF_MATERIALS)?;

        Ok(Self {
            furniture,
            shelf_count,
            shelf_material,
        })
    }

    /// Number of shelves.
    pub fn shelf_count(&self) -> i32 {
        self.shelf_count
    }

    /// `None` when the shelf wood was not specified.
    pub fn shelf_material(&self) -> Option<&str> {
        self.shelf_material.as_deref()
    }
}

impl HouseholdItem for Bookshelf {
    fn household_object(&self) -> &HouseholdObject {
        self.furniture.household_object()
    }

    fn type_name(&self) -> &'static str {
        "Bookshelf"
    }
}

impl FurnitureItem for Bookshelf {
    fn furniture(&self) -> &Furniture {
        &self.furniture
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{
        errors::Error,
        test_utils::{assert_accepted_or_invalid, new_bookshelf},
    };
    use rstest::rstest;

    #[test]
    fn test_sample_bookshelf() {
        let bookshelf = Bookshelf::new(new_bookshelf("Bookshelf1")).unwrap();

        assert_eq!(bookshelf.name(), "Bookshelf1");
        assert_eq!(bookshelf.brand(), "Brand1");
        assert_eq!(bookshelf.price_cad(), 100.0);
        assert_eq!(bookshelf.color(), "Brown");
        assert!(!bookshelf.is_electric());
        assert!(bookshelf.is_assembly_required());
        assert_eq!(bookshelf.frame_material(), Some("Wood"));
        assert_eq!(bookshelf.shelf_count(), 5);
        assert_eq!(bookshelf.shelf_material(), Some("Oak"));
        assert_eq!(bookshelf.type_name(), "Bookshelf");
    }

    #[rstest]
    #[case(1, true)]
    #[case(8, true)]
    #[case(0, false)]
    #[case(9, false)]
    fn test_shelf_count_bounds(#[case] shelf_count: i32, #[case] accepted: bool) {
        let mut input = new_bookshelf("Bookshelf1");
        input.shelf_count = shelf_count;
        assert_accepted_or_invalid(Bookshelf::new(input), accepted, "shelf count");
    }

    #[rstest]
    #[case(Some("OAK"), true)]
    #[case(Some("Chestnut"), true)]
    #[case(Some("mahogany"), true)]
    #[case(None, true)]
    #[case(Some("pine"), false)]
    #[case(Some("mahog"), false)]
    fn test_shelf_materials(#[case] material: Option<&str>, #[case] accepted: bool) {
        let mut input = new_bookshelf("Bookshelf1");
        input.shelf_material = material.map(str::to_string);
        assert_accepted_or_invalid(Bookshelf::new(input), accepted, "shelf material");
    }

    #[test]
    fn test_frame_material_checked_before_shelves() {
        let mut input = new_bookshelf("Bookshelf1");
        input.furniture.frame_material = Some("other".to_string());
        input.shelf_count = 0;

        assert!(matches!(
            Bookshelf::new(input).unwrap_err(),
            Error::InvalidValue {
                field: "frame material",
                ..
            }
        ));
    }
}
