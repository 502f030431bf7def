//! Household object - the base entity every catalog item is built on.
//!
//! A `HouseholdObject` carries the attributes shared by all items (name, brand,
//! price, color and whether it runs on electricity). Category and leaf entities
//! embed one and expose it through the [`HouseholdItem`] trait, which is also the
//! contract the storage uses to list items of different kinds side by side.

use crate::{
    core::validation,
    errors::Result,
};
use serde::Deserialize;
use std::fmt;

/// Unvalidated input for a [`HouseholdObject`].
///
/// String fields are optional so that an absent value can be reported as
/// missing rather than invalid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewHouseholdObject {
    /// Display name of the item, 2 to 30 characters
    pub name: Option<String>,
    /// Brand or manufacturer, 2 to 30 characters
    pub brand: Option<String>,
    /// Price in Canadian dollars, must be greater than zero
    pub price: f64,
    /// Color description, 2 to 30 characters
    pub color: Option<String>,
    /// Whether the item is electrically powered
    #[serde(default)]
    pub electric: bool,
}

/// Validated common attributes of a household item.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseholdObject {
    name: String,
    brand: String,
    price_cad: f64,
    color: String,
    electric: bool,
}

impl HouseholdObject {
    /// Validates the input and builds the base entity.
    ///
    /// Fields are checked in the order name, brand, price, color; the first
    /// violation is returned.
    ///
    /// # Errors
    /// `MissingValue` when name, brand or color is absent, `InvalidValue` when a
    /// string is outside 2..=30 characters or the price is not strictly positive.
    pub fn new(input: NewHouseholdObject) -> Result<Self> {
        let name = validation::required_text("item name", input.name)?;
        let brand = validation::required_text("item brand", input.brand)?;
        let price_cad = validation::positive("price", input.price)?;
        let color = validation::required_text("item color", input.color)?;

        Ok(Self {
            name,
            brand,
            price_cad,
            color,
            electric: input.electric,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Brand or manufacturer.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Price in Canadian dollars.
    pub fn price_cad(&self) -> f64 {
        self.price_cad
    }

    /// Color description.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Whether the item is electrically powered.
    pub fn is_electric(&self) -> bool {
        self.electric
    }
}

/// The contract shared by every catalog entity.
///
/// Each implementor hardcodes its own display label in [`type_name`](Self::type_name);
/// the common accessors are provided on top of [`household_object`](Self::household_object).
pub trait HouseholdItem: fmt::Debug {
    /// The embedded base attributes.
    fn household_object(&self) -> &HouseholdObject;

    /// Display label for this kind of item, e.g. `"Coffee Table"`.
    fn type_name(&self) -> &'static str;

    /// Display name of the item.
    fn name(&self) -> &str {
        self.household_object().name()
    }

    /// Brand of the item.
    fn brand(&self) -> &str {
        self.household_object().brand()
    }

    /// Price in Canadian dollars.
    fn price_cad(&self) -> f64 {
        self.household_object().price_cad()
    }

    /// Color of the item.
    fn color(&self) -> &str {
        self.household_object().color()
    }

    /// Whether the item is electrically powered.
    fn is_electric(&self) -> bool {
        self.household_object().is_electric()
    }
}

impl HouseholdItem for HouseholdObject {
    fn household_object(&self) -> &HouseholdObject {
        self
    }

    fn type_name(&self) -> &'static str {
        "Home Object"
    }
}
