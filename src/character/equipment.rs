use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::items::{EquipmentSlot, Item};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquipError {
    /// Resources, potions and specials have no slot.
    #[error("{} cannot be equipped", .item.name)]
    NotEquippable { item: Item },

    #[error("{} is reserved for the {required} class", .item.name)]
    WrongClass { item: Item, required: String },
}

impl EquipError {
    /// The item the failed equip was attempted with.
    pub fn into_item(self) -> Item {
        match self {
            EquipError::NotEquippable { item } => item,
            EquipError::WrongClass { item, .. } => item,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<Item>,
    #[serde(default)]
    pub helmet: Option<Item>,
    #[serde(default)]
    pub chest: Option<Item>,
    #[serde(default)]
    pub legs: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Helmet => self.helmet.as_ref(),
            EquipmentSlot::Chest => self.chest.as_ref(),
            EquipmentSlot::Legs => self.legs.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Helmet => &mut self.helmet,
            EquipmentSlot::Chest => &mut self.chest,
            EquipmentSlot::Legs => &mut self.legs,
        }
    }

    /// Puts `item` into its slot and hands back whatever was there before.
    ///
    /// On error the item is carried inside the error, so nothing is lost.
    pub fn equip(&mut self, item: Item, class_name: &str) -> Result<Option<Item>, EquipError> {
        let Some(slot) = item.slot() else {
            return Err(EquipError::NotEquippable { item });
        };
        if !item.usable_by(class_name) {
            let required = item.required_class.clone().unwrap_or_default();
            return Err(EquipError::WrongClass { item, required });
        }
        Ok(self.slot_mut(slot).replace(item))
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [&self.weapon, &self.helmet, &self.chest, &self.legs]
            .into_iter()
            .filter_map(|item| item.as_ref())
    }

    /// Extra spell damage from the equipped weapon.
    pub fn attack_bonus(&self) -> u32 {
        self.weapon.as_ref().map_or(0, |w| w.attack)
    }

    /// Sum of helmet, chest and legs defense.
    pub fn defense_bonus(&self) -> u32 {
        [&self.helmet, &self.chest, &self.legs]
            .into_iter()
            .filter_map(|item| item.as_ref())
            .map(|item| item.defense)
            .sum()
    }
}
