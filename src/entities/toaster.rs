//! Toaster - electronics with a bagel timer and defrost option.

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

/// Allowed bagel setting in minutes, inclusive.
pub const TOAST_BAGEL_MINUTES_RANGE: RangeInclusive<i32> = 1..=10;

/// Unvalidated input for a [`Toaster`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewToaster {
    /// Electronics and common household attributes
    #[serde(flatten)]
    pub electronics: NewElectronics,
    /// Bagel toasting time in minutes, 1 to 10
    pub toast_bagel_minutes: i32,
    /// Whether the toaster can defrost
    #[serde(default)]
    pub has_defrost_function: bool,
}

/// A validated toaster.
#[derive(Debug, Clone, PartialEq)]
pub struct Toaster {
    electronics: Electronics,
    toast_bagel_minutes: i32,
    has_defrost_function: bool,
}

impl Toaster {
    /// # Errors
    /// Any electronics validation error, or `InvalidValue` when the bagel
    /// minutes are outside 1..=10.
    pub fn new(input: NewToaster) -> Result<Self> {
        let electronics = Electronics::new(input.electronics)?;
        let toast_bagel_minutes = validation::in_range(
            "minutes for toasting bagels",
            input.toast_bagel_minutes,
            TOAST_BAGEL_MINUTES_RANGE,
        )?;

        Ok(Self {
            electronics,
            toast_bagel_minutes,
            has_defrost_function: input.has_defrost_function,
        })
    }

    /// Bagel toasting time in minutes.
    pub fn toast_bagel_minutes(&self) -> i32 {
        self.toast_bagel_minutes
    }

    /// Whether the toaster can defrost.
    pub fn has_defrost_function(&self) -> bool {
        self.has_defrost_function
    }
}

impl HouseholdItem for Toaster {
    fn household_object(&self) -> &HouseholdObject {
        self.electronics.household_object()
    }

    fn type_name(&self) -> &'static str {
        "Toaster"
    }
}

impl ElectronicsItem for Toaster {
    fn electronics(&self) -> &Electronics {
        &self.electronics
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        errors::Error,
        test_utils::{assert_accepted_or_invalid, new_toaster},
    };
    use rstest::rstest;

    #[test]
    fn test_sample_toaster() {
        let toaster = Toaster::new(new_toaster("Toaster1")).unwrap();

        assert_eq!(toaster.toast_bagel_minutes(), 3);
        assert!(toaster.has_defrost_function());
        assert_eq!(toaster.connectivity(), Some("Bluetooth"));
        assert!(toaster.is_electric());
        assert_eq!(toaster.type_name(), "Toaster");
    }

    #[rstest]
    #[case(1, true)]
    #[case(10, true)]
    #[case(0, false)]
    #[case(11, false)]
    fn test_bagel_minutes_bounds(#[case] minutes: i32, #[case] accepted: bool) {
        let mut input = new_toaster("Toaster1");
        input.toast_bagel_minutes = minutes;
        assert_accepted_or_invalid(Toaster::new(input), accepted, "minutes for toasting bagels");
    }

    #[test]
    fn test_electronics_errors_win() {
        let mut input = new_toaster("Toaster1");
        input.electronics.power_source = Some("gas".to_string());
        input.toast_bagel_minutes = 0;

        assert!(matches!(
            Toaster::new(input).unwrap_err(),
            Error::InvalidValue {
                field: "power source",
                ..
            }
        ));
    }
}
