//! Inventory seeding from a TOML file
//!
//! An inventory file lists items as `[[items]]` tables. Each table names its
//! entity with `kind` and carries that entity's fields flat, for example:
//!
//! ```toml
//! [[items]]
//! kind = "bookshelf"
//! name = "Bookshelf1"
//! brand = "Brand1"
//! price = 100.0
//! color = "Brown"
//! assembly_required = true
//! frame_material = "Wood"
//! shelf_count = 5
//! shelf_material = "Oak"
//! ```
//!
//! Parsing only checks the shape of the file; every item still goes through its
//! entity constructor when the storage is built.
//!
//! A value that cannot be represented by the field's type at all, such as
//! `voltage = 5000000000` (outside `i32`) or `shelf_count = "five"`, is rejected
//! while parsing and reported as `Error::Config`, not as the entity's
//! `InvalidValue`.

use crate::{
    core::storage::{ItemRef, Storage},
    entities::{
        Bookshelf, CoffeeTable, Dishwasher, NewBookshelf, NewCoffeeTable, NewDishwasher,
        NewTelevision, NewToaster, Television, Toaster,
    },
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{path::Path, rc::Rc};
use tracing::{debug, info};

/// Environment variable naming the inventory file.
pub const CONFIG_PATH_ENV: &str = "HOUSEHOLD_INVENTORY_CONFIG";
/// Inventory file used when the environment variable is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing an entire inventory file
#[derive(Debug, Deserialize)]
pub struct InventoryConfig {
    /// Items to place in storage, in file order
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// One inventory entry, tagged by `kind`
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemConfig {
    /// A bookshelf (`kind = "bookshelf"`)
    Bookshelf(NewBookshelf),
    /// A coffee table (`kind = "coffee_table"`)
    CoffeeTable(NewCoffeeTable),
    /// A dishwasher (`kind = "dishwasher"`)
    Dishwasher(NewDishwasher),
    /// A television (`kind = "television"`)
    Television(NewTelevision),
    /// A toaster (`kind = "toaster"`)
    Toaster(NewToaster),
}

impl ItemConfig {
    /// Runs the matching entity constructor.
    ///
    /// # Errors
    /// The entity's validation error.
    pub fn build(self) -> Result<ItemRef> {
        let item: ItemRef = match self {
            Self::Bookshelf(input) => Rc::new(Bookshelf::new(input)?),
            Self::CoffeeTable(input) => Rc::new(CoffeeTable::new(input)?),
            Self::Dishwasher(input) => Rc::new(Dishwasher::new(input)?),
            Self::Television(input) => Rc::new(Television::new(input)?),
            Self::Toaster(input) => Rc::new(Toaster::new(input)?),
        };
        Ok(item)
    }
}

impl InventoryConfig {
    /// Validates every item in file order and collects them into a [`Storage`].
    ///
    /// # Errors
    /// Stops at the first item that fails validation and returns its error.
    pub fn into_storage(self) -> Result<Storage> {
        let mut storage = Storage::new();
        for (position, item) in self.items.into_iter().enumerate() {
            let item = item
                .build()
                .inspect_err(|e| debug!(position, error = %e, "inventory item rejected"))?;
            storage.add_item(item);
        }
        info!(count = storage.number_of_items(), "seeded inventory storage");
        Ok(storage)
    }
}

/// Parses an inventory from TOML text.
///
/// # Errors
/// Returns `Error::Config` when the text is not a valid inventory document.
pub fn parse_config(contents: &str) -> Result<InventoryConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse inventory TOML: {e}"),
    })
}

/// Loads an inventory from a TOML file
///
/// # Arguments
/// * `path` - Path to the inventory file
///
/// # Errors
/// Returns `Error::Config` if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - An item has an unknown `kind` or a field of the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<InventoryConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load inventory from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read inventory file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Resolves the inventory path from `HOUSEHOLD_INVENTORY_CONFIG`, loading a
/// `.env` file first if one exists, and falling back to `./config.toml`.
pub fn config_path() -> String {
    dotenvy::dotenv().ok();
    resolve_config_path(std::env::var(CONFIG_PATH_ENV).ok())
}

/// Picks the configured path, or [`DEFAULT_CONFIG_PATH`] when none is set.
pub fn resolve_config_path(configured: Option<String>) -> String {
    configured.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Loads the inventory from the location given by [`config_path`].
///
/// # Errors
/// See [`load_config`].
pub fn load_default_config() -> Result<InventoryConfig> {
    load_config(config_path())
}
