use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{INVENTORY_CAPACITY, INVENTORY_NEARLY_FULL};
use crate::items::Item;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("inventory full ({capacity} items)")]
pub struct InventoryFull {
    pub capacity: usize,
    /// The item that did not fit, handed back to the caller.
    pub item: Item,
}

/// Capacity-bounded ordered item list plus potion counters.
///
/// Potions are counted rather than stored as items so they never consume an
/// inventory slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub health_potions: u32,
    #[serde(default)]
    pub mana_potions: u32,
    #[serde(default)]
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity(&self) -> usize {
        INVENTORY_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn free_slots(&self) -> usize {
        INVENTORY_CAPACITY.saturating_sub(self.items.len())
    }

    pub fn is_nearly_full(&self) -> bool {
        self.items.len() >= INVENTORY_NEARLY_FULL
    }

    pub fn add(&mut self, item: Item) -> Result<(), InventoryFull> {
        if self.free_slots() == 0 {
            return Err(InventoryFull {
                capacity: INVENTORY_CAPACITY,
                item,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Adds items in order until the inventory is full. Returns the items that
    /// did not fit, in their original order.
    pub fn add_all(&mut self, items: Vec<Item>) -> Vec<Item> {
        let room = self.free_slots();
        let mut items = items;
        let leftover = if items.len() > room {
            items.split_off(room)
        } else {
            Vec::new()
        };
        self.items.extend(items);
        leftover
    }

    /// Inserts at `index`, clamped to the end. Fails when full.
    pub fn insert(&mut self, index: usize, item: Item) -> Result<(), InventoryFull> {
        if self.free_slots() == 0 {
            return Err(InventoryFull {
                capacity: INVENTORY_CAPACITY,
                item,
            });
        }
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        Ok(())
    }

    /// Returns an item that was just taken out, at `index` clamped to the
    /// end. Skips the capacity check: a bag loaded over capacity must not
    /// lose what it already held.
    pub(crate) fn put_back(&mut self, index: usize, item: Item) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    pub fn remove(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes the first item with the given name.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.name == name)?;
        self.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn count_by_name(&self, name: &str) -> usize {
        self.items.iter().filter(|item| item.name == name).count()
    }

    /// Indices of items that can go into an equipment slot.
    pub fn equippable_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_equippable())
            .map(|(i, _)| i)
            .collect()
    }
}
