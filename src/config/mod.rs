/// Inventory seeding from a TOML file
pub mod inventory;

/// Tracing subscriber initialization
pub mod logging;
