//! Television - electronics with screen size, resolution and refresh rate.

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

/// Allowed diagonal in inches, inclusive.
pub const SCREEN_SIZE_RANGE: RangeInclusive<f64> = 19.0..=300.0;
/// Allowed refresh rate in hertz, inclusive.
pub const REFRESH_RATE_RANGE: RangeInclusive<i32> = 30..=600;
/// Accepted resolutions, compared case-insensitively.
pub const RESOLUTIONS: [&str; 2] = ["1080p", "4k"];

/// Unvalidated input for a [`Television`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTelevision {
    /// Electronics and common household attributes
    #[serde(flatten)]
    pub electronics: NewElectronics,
    /// Screen diagonal in inches, 19 to 300
    pub screen_size_inches: f64,
    /// Required: "1080p" or "4k"
    pub resolution: Option<String>,
    /// Refresh rate in hertz, 30 to 600
    pub refresh_rate_hz: i32,
    /// Whether the set runs apps
    #[serde(default)]
    pub smart_tv: bool,
}

/// A validated television.
#[derive(Debug, Clone, PartialEq)]
pub struct Television {
    electronics: Electronics,
    screen_size_inches: f64,
    resolution: String,
    refresh_rate_hz: i32,
    smart_tv: bool,
}

impl Television {
    /// # Errors
    /// Any electronics validation error, then `InvalidValue` for a screen size
    /// outside 19..=300 inches, an unknown resolution or a refresh rate outside
    /// 30..=600 Hz. A missing resolution is a `MissingValue`.
    pub fn new(input: NewTelevision) -> Result<Self> {
        let electronics = Electronics::new(input.electronics)?;
        let screen_size_inches =
            validation::in_range_f64("screen size", input.screen_size_inches, SCREEN_SIZE_RANGE)?;
        let resolution = validation::required_one_of("resolution", input.resolution, &RESOLUTIONS)?;
        let refresh_rate_hz =
            validation::in_range("refresh rate", input.refresh_rate_hz, REFRESH_RATE_RANGE)?;

        Ok(Self {
            electronics,
            screen_size_inches,
            resolution,
            refresh_rate_hz,
            smart_tv: input.smart_tv,
        })
    }

    /// Screen diagonal in inches.
    pub fn screen_size_inches(&self) -> f64 {
        self.screen_size_inches
    }

    /// Resolution as given, e.g. `"4k"`.
    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    /// Refresh rate in hertz.
    pub fn refresh_rate_hz(&self) -> i32 {
        self.refresh_rate_hz
    }

    /// Whether this is a smart TV.
    pub fn is_smart_tv(&self) -> bool {
        self.smart_tv
    }
}

impl HouseholdItem for Television {
    fn household_object(&self) -> &HouseholdObject {
        self.electronics.household_object()
    }

    fn type_name(&self) -> &'static str {
        "Television"
    }
}

impl ElectronicsItem for Television {
    fn electronics(&self) -> &Electronics {
        &self.electronics
    }
}
