//! Entity module - Contains the household catalog entities.
//! Every entity is validated once at construction and immutable afterwards.
//! The base object is embedded by the furniture and electronics categories,
//! which are in turn embedded by the concrete leaf items.

pub mod bookshelf;
pub mod coffee_table;
pub mod dishwasher;
pub mod electronics;
pub mod furniture;
pub mod household_object;
pub mod television;
pub mod toaster;

pub use bookshelf::{Bookshelf, NewBookshelf};
pub use coffee_table::{CoffeeTable, NewCoffeeTable};
pub use dishwasher::{Dishwasher, NewDishwasher};
pub use electronics::{Electronics, ElectronicsItem, NewElectronics};
pub use furniture::{Furniture, FurnitureItem, NewFurniture};
pub use household_object::{HouseholdItem, HouseholdObject, NewHouseholdObject};
pub use television::{NewTelevision, Television};
pub use toaster::{NewToaster, Toaster};
