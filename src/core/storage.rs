//! Storage - the in-memory inventory of household items.
//!
//! Items are kept as shared `Rc<dyn HouseholdItem>` handles in insertion order.
//! The storage never validates anything itself: an entity that exists has already
//! passed its constructor. Removal is by identity, so two equal-looking items
//! built separately are still distinct entries.

use crate::entities::HouseholdItem;
use std::{
    io::{self, Write},
    rc::Rc,
};
use tracing::debug;

/// Shared handle to any catalog entity.
pub type ItemRef = Rc<dyn HouseholdItem>;

/// Insertion-ordered collection of household items. Duplicates are allowed.
#[derive(Debug, Default)]
pub struct Storage {
    items: Vec<ItemRef>,
}

impl Storage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item at the end.
    pub fn add_item(&mut self, item: ItemRef) {
        debug!(name = item.name(), kind = item.type_name(), "adding item to storage");
        self.items.push(item);
    }

    /// Removes the first stored handle that points at the same entity as `item`.
    ///
    /// Returns `false` and leaves the storage untouched when the item is not stored.
    pub fn remove_item<T: HouseholdItem + ?Sized>(&mut self, item: &Rc<T>) -> bool {
        let target = Rc::as_ptr(item);
        let Some(index) = self
            .items
            .iter()
            .position(|stored| std::ptr::addr_eq(Rc::as_ptr(stored), target))
        else {
            debug!(name = item.name(), "item not in storage, nothing removed");
            return false;
        };

        let removed = self.items.remove(index);
        debug!(name = removed.name(), index, "removed item from storage");
        true
    }

    /// Number of stored handles, duplicates included.
    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    /// `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the stored handles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.items.iter()
    }

    /// One display line per item, in insertion order.
    pub fn display_lines(&self) -> Vec<String> {
        self.items.iter().map(|item| display_line(&**item)).collect()
    }

    /// Writes every display line to `out`, each terminated by a newline.
    ///
    /// # Errors
    /// Returns any error raised by the writer.
    pub fn write_items<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.display_lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Prints every item to standard output.
    pub fn display_items(&self) {
        for line in self.display_lines() {
            println!("{line}");
        }
    }

    /// The inventory count line printed after the item listing.
    pub fn summary_line(&self) -> String {
        format!(
            "Number of household items in the inventory/storage: {}",
            self.number_of_items()
        )
    }
}

/// Renders a single item as `Household Object Name: <name>, Household Object Type: <type>`.
pub fn display_line(item: &dyn HouseholdItem) -> String {
    format!(
        "Household Object Name: {}, Household Object Type: {}",
        item.name(),
        item.type_name()
    )
}
