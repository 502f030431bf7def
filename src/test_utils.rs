//! Shared test utilities for the household inventory.
//!
//! This module provides valid construction inputs for every entity, so each test
//! only has to change the one field it is exercising.

use crate::{
    core::storage::Storage,
    entities::{
        Bookshelf, CoffeeTable, Dishwasher, NewBookshelf, NewCoffeeTable, NewDishwasher,
        NewElectronics, NewFurniture, NewHouseholdObject, NewTelevision, NewToaster, Television,
        Toaster,
    },
    errors::{Error, Result},
};
use std::{fmt::Debug, rc::Rc};

/// Valid base attributes with the given name.
///
/// # Defaults
/// * brand: "Brand1"
/// * price: 100.0
/// * color: "Brown"
/// * electric: false
pub fn new_household_object(name: &str) -> NewHouseholdObject {
    NewHouseholdObject {
        name: Some(name.to_string()),
        brand: Some("Brand1".to_string()),
        price: 100.0,
        color: Some("Brown".to_string()),
        electric: false,
    }
}

/// Valid furniture input: assembly required, wooden frame.
pub fn new_furniture(name: &str) -> NewFurniture {
    NewFurniture {
        base: new_household_object(name),
        assembly_required: true,
        frame_material: Some("Wood".to_string()),
    }
}

/// Valid electronics input: 120 V, WiFi, AC powered.
pub fn new_electronics(name: &str) -> NewElectronics {
    NewElectronics {
        base: NewHouseholdObject {
            brand: Some("Brand3".to_string()),
            price: 500.0,
            color: Some("White".to_string()),
            electric: true,
            ..new_household_object(name)
        },
        voltage: 120,
        connectivity: Some("WiFi".to_string()),
        power_source: Some("AC".to_string()),
    }
}

/// The sample bookshelf: five oak shelves on a wooden frame.
pub fn new_bookshelf(name: &str) -> NewBookshelf {
    NewBookshelf {
        furniture: new_furniture(name),
        shelf_count: 5,
        shelf_material: Some("Oak".to_string()),
    }
}

/// The sample coffee table: black, metal frame, four legs, rectangular with storage.
pub fn new_coffee_table(name: &str) -> NewCoffeeTable {
    NewCoffeeTable {
        furniture: NewFurniture {
            base: NewHouseholdObject {
                brand: Some("Brand2".to_string()),
                price: 150.0,
                color: Some("Black".to_string()),
                ..new_household_object(name)
            },
            assembly_required: true,
            frame_material: Some("Metal".to_string()),
        },
        has_storage: true,
        table_shape: Some("Rectangle".to_string()),
        leg_count: 4,
        extendable: false,
    }
}

/// The sample dishwasher: 30 inches wide, three racks, built in.
pub fn new_dishwasher(name: &str) -> NewDishwasher {
    NewDishwasher {
        electronics: new_electronics(name),
        width_inches: 30,
        rack_count: 3,
        dishwasher_type: Some("builtin".to_string()),
    }
}

/// The sample television: 50 inch 4k smart TV at 120 Hz on 240 V.
pub fn new_television(name: &str) -> NewTelevision {
    let mut electronics = new_electronics(name);
    electronics.base.brand = Some("Brand4".to_string());
    electronics.base.price = 1000.0;
    electronics.base.color = Some("Black".to_string());
    electronics.voltage = 240;

    NewTelevision {
        electronics,
        screen_size_inches: 50.0,
        resolution: Some("4k".to_string()),
        refresh_rate_hz: 120,
        smart_tv: true,
    }
}

/// The sample toaster: bluetooth, three minute bagel setting with defrost.
pub fn new_toaster(name: &str) -> NewToaster {
    let mut electronics = new_electronics(name);
    electronics.base.brand = Some("Brand5".to_string());
    electronics.base.price = 50.0;
    electronics.base.color = Some("Silver".to_string());
    electronics.connectivity = Some("Bluetooth".to_string());

    NewToaster {
        electronics,
        toast_bagel_minutes: 3,
        has_defrost_function: true,
    }
}

/// Builds the five sample items and stores them in the order
/// bookshelf, dishwasher, coffee table, television, toaster.
pub fn sample_storage() -> Result<Storage> {
    let mut storage = Storage::new();
    storage.add_item(Rc::new(Bookshelf::new(new_bookshelf("Bookshelf1"))?));
    storage.add_item(Rc::new(Dishwasher::new(new_dishwasher("Dishwasher1"))?));
    storage.add_item(Rc::new(CoffeeTable::new(new_coffee_table("CoffeeTable1"))?));
    storage.add_item(Rc::new(Television::new(new_television("Television1"))?));
    storage.add_item(Rc::new(Toaster::new(new_toaster("Toaster1"))?));
    Ok(storage)
}

/// Asserts that `result` succeeded when `accepted`, and otherwise failed with
/// `InvalidValue` on `expected_field`.
#[allow(clippy::panic)]
pub fn assert_accepted_or_invalid<T: Debug>(
    result: Result<T>,
    accepted: bool,
    expected_field: &str,
) {
    match result {
        Ok(_) if accepted => {}
        Err(Error::InvalidValue { field, .. }) if !accepted => assert_eq!(field, expected_field),
        other => panic!(
            "expected {} for {expected_field}, got {other:?}",
            if accepted { "success" } else { "InvalidValue" }
        ),
    }
}
