//! Player character: class data, bag, gear, the saved record and its storage.

pub mod classes;
pub mod equipment;
pub mod inventory;
pub mod manager;
pub mod record;

pub use classes::{available_classes, lookup_class, lookup_spell, Class, Spell};
pub use equipment::{EquipError, Equipment};
pub use inventory::{Inventory, InventoryFull};
pub use manager::{
    sanitize_name, validate_name, CharacterInfo, CharacterManager, MemoryStore, RecordStore,
};
pub use record::{CharacterRecord, EquipFromInventoryError, PotionError, StatChoice, TurnIn};
