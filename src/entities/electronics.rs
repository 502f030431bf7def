//! Electronics category - household objects with voltage, connectivity and power source.

use crate::{
    core::validation,
    entities::household_object::{HouseholdItem, HouseholdObject, NewHouseholdObject},
    errors::Result,
};
use serde::Deserialize;
use std::ops::RangeInclusive;

/// Allowed supply voltage, inclusive.
pub const VOLTAGE_RANGE: RangeInclusive<i32> = 0..=250;
/// Accepted connectivity values, compared case-insensitively.
pub const CONNECTIVITY: [&str; 3] = ["bluetooth", "wifi", "n/a"];
/// Accepted power sources, compared case-insensitively.
pub const POWER_SOURCES: [&str; 3] = ["ac", "battery", "other"];

/// Unvalidated input for an [`Electronics`] item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewElectronics {
    /// Common household attributes
    #[serde(flatten)]
    pub base: NewHouseholdObject,
    /// Operating voltage in volts
    pub voltage: i32,
    /// Optional connectivity: bluetooth, wifi or n/a
    pub connectivity: Option<String>,
    /// Optional power source: ac, battery or other
    pub power_source: Option<String>,
}

/// A validated electronic appliance.
#[derive(Debug, Clone, PartialEq)]
pub struct Electronics {
    base: HouseholdObject,
    voltage: i32,
    connectivity: Option<String>,
    power_source: Option<String>,
}

impl Electronics {
    /// Validates base attributes, then voltage, connectivity and power source.
    ///
    /// # Errors
    /// Any base validation error, or `InvalidValue` for a voltage outside
    /// 0..=250 or an unknown connectivity or power source.
    pub fn new(input: NewElectronics) -> Result<Self> {
        let base = HouseholdObject::new(input.base)?;
        let voltage = validation::in_range("voltage", input.voltage, VOLTAGE_RANGE)?;
        let connectivity =
            validation::optional_one_of("connectivity", input.connectivity, &CONNECTIVITY)?;
        let power_source =
            validation::optional_one_of("power source", input.power_source, &POWER_SOURCES)?;

        Ok(Self {
            base,
            voltage,
            connectivity,
            power_source,
        })
    }
}

/// Category contract for electronics and its specializations.
pub trait ElectronicsItem: HouseholdItem {
    /// The embedded electronics attributes.
    fn electronics(&self) -> &Electronics;

    /// Operating voltage in volts.
    fn voltage(&self) -> i32 {
        self.electronics().voltage
    }

    /// `None` when connectivity was not specified.
    fn connectivity(&self) -> Option<&str> {
        self.electronics().connectivity.as_deref()
    }

    /// `None` when the power source was not specified.
    fn power_source(&self) -> Option<&str> {
        self.electronics().power_source.as_deref()
    }
}

impl HouseholdItem for Electronics {
    fn household_object(&self) -> &HouseholdObject {
        &self.base
    }

    fn type_name(&self) -> &'static str {
        "Electronics"
    }
}

impl ElectronicsItem for Electronics {
    fn electronics(&self) -> &Electronics {
        self
    }
}
