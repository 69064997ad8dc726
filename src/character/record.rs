//! The durable per-character aggregate.

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::constants::{
    GRID_SIZE, LEVEL_UP_STAT_BONUS, POTION_RESTORE_AMOUNT, SAVE_VERSION, STARTING_GOLD,
    STARTING_LEVEL, XP_PER_LEVEL,
};
use crate::items::Item;
use crate::quests::{QuestLog, QuestReward, QuestTemplate};
use crate::world::{Position, SnapshotStore};

use super::classes::{lookup_class, Spell};
use super::equipment::{EquipError, Equipment};
use super::inventory::Inventory;

/// Stat raised on level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatChoice {
    MaxHp,
    MaxMana,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PotionError {
    #[error("no health potion left")]
    NoHealthPotion,
    #[error("no mana potion left")]
    NoManaPotion,
    #[error("health is already full")]
    HealthFull,
    #[error("mana is already full")]
    ManaFull,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquipFromInventoryError {
    #[error("no item in inventory slot {0}")]
    NoSuchItem(usize),
    #[error("no room in the bag for the gear it would replace")]
    BagFull,
    #[error(transparent)]
    Equip(#[from] EquipError),
}

/// Everything a turn-in paid, plus the level reached if the experience
/// triggered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnIn {
    pub reward: QuestReward,
    pub level_up: Option<u32>,
}

type Grid<T> = [[T; GRID_SIZE]; GRID_SIZE];

fn default_id() -> Uuid {
    Uuid::new_v4()
}

fn default_class() -> String {
    "Warrior".to_string()
}

fn default_level() -> u32 {
    STARTING_LEVEL
}

fn default_gold() -> u32 {
    STARTING_GOLD
}

fn default_discovered() -> Grid<bool> {
    let mut grid = Grid::<bool>::default();
    let hub = Position::hub();
    grid[hub.y()][hub.x()] = true;
    grid
}

fn default_version() -> u32 {
    SAVE_VERSION
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default = "default_id")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_class")]
    pub class: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub hp_max: u32,
    #[serde(default)]
    pub mana: u32,
    #[serde(default)]
    pub mana_max: u32,
    #[serde(default)]
    pub experience: u32,
    /// Absent in old saves: those characters get the starting stipend.
    #[serde(default = "default_gold")]
    pub gold: u32,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub quests: QuestLog,
    #[serde(default)]
    pub position: Position,
    #[serde(default = "default_discovered")]
    pub discovered: Grid<bool>,
    #[serde(default)]
    pub snapshots: SnapshotStore,
    /// Legacy mirror: zone has no resources left. Indexed `[y][x]`.
    #[serde(default)]
    pub resources_harvested: Grid<bool>,
    /// Legacy mirror: zone has no enemies left. Indexed `[y][x]`.
    #[serde(default)]
    pub monsters_defeated: Grid<bool>,
    #[serde(default)]
    pub intro_done: bool,
    #[serde(default)]
    pub last_save_time: i64,
    #[serde(default = "default_version")]
    pub version: u32,
}

impl CharacterRecord {
    /// New level-1 character at full health in Astrab. `None` for an unknown class.
    pub fn new(name: &str, class_name: &str) -> Option<Self> {
        let class = lookup_class(class_name)?;
        Some(Self {
            id: default_id(),
            name: name.to_string(),
            class: class.name,
            level: STARTING_LEVEL,
            hp: class.hp_max,
            hp_max: class.hp_max,
            mana: class.mana_max,
            mana_max: class.mana_max,
            experience: 0,
            gold: STARTING_GOLD,
            equipment: Equipment::new(),
            inventory: Inventory::new(),
            quests: QuestLog::new(),
            position: Position::hub(),
            discovered: default_discovered(),
            snapshots: SnapshotStore::new(),
            resources_harvested: Grid::<bool>::default(),
            monsters_defeated: Grid::<bool>::default(),
            intro_done: false,
            last_save_time: 0,
            version: SAVE_VERSION,
        })
    }

    /// Repairs values a partial save may have left inconsistent: zero maxima
    /// fall back to the class, current values are clamped, the hub stays
    /// discovered.
    pub fn normalize(&mut self) {
        if let Some(class) = lookup_class(&self.class) {
            self.class = class.name;
            if self.hp_max == 0 {
                self.hp_max = class.hp_max;
                self.hp = class.hp_max;
            }
            if self.mana_max == 0 {
                self.mana_max = class.mana_max;
                self.mana = class.mana_max;
            }
        }
        self.level = self.level.max(STARTING_LEVEL);
        self.hp = self.hp.min(self.hp_max);
        self.mana = self.mana.min(self.mana_max);
        self.discover(Position::hub());
    }

    pub fn spells(&self) -> Vec<Spell> {
        lookup_class(&self.class)
            .map(|class| class.spells)
            .unwrap_or_default()
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn attack_bonus(&self) -> u32 {
        self.equipment.attack_bonus()
    }

    pub fn defense_bonus(&self) -> u32 {
        self.equipment.defense_bonus()
    }

    /// Raises hp by up to `amount`, capped at the maximum. Returns the gain.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.hp_max);
        self.hp - before
    }

    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let before = self.mana;
        self.mana = self.mana.saturating_add(amount).min(self.mana_max);
        self.mana - before
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.level * XP_PER_LEVEL
    }

    /// Adds experience and levels up at most once. `choose` picks the stat
    /// to raise and is only called on a level-up. Returns the new level.
    pub fn gain_experience(
        &mut self,
        amount: u32,
        choose: impl FnOnce(&CharacterRecord) -> StatChoice,
    ) -> Option<u32> {
        self.experience = self.experience.saturating_add(amount);
        if self.experience < self.experience_to_next_level() {
            return None;
        }
        let choice = choose(self);
        self.level_up(choice);
        Some(self.level)
    }

    fn level_up(&mut self, choice: StatChoice) {
        self.level += 1;
        self.experience = 0;
        match choice {
            StatChoice::MaxHp => self.hp_max += LEVEL_UP_STAT_BONUS,
            StatChoice::MaxMana => self.mana_max += LEVEL_UP_STAT_BONUS,
        }
        self.hp = self.hp_max;
        self.mana = self.mana_max;
        info!(
            "{} reached level {} ({:?})",
            self.name, self.level, choice
        );
    }

    pub fn use_health_potion(&mut self) -> Result<u32, PotionError> {
        if self.inventory.health_potions == 0 {
            return Err(PotionError::NoHealthPotion);
        }
        if self.hp >= self.hp_max {
            return Err(PotionError::HealthFull);
        }
        self.inventory.health_potions -= 1;
        Ok(self.heal(POTION_RESTORE_AMOUNT))
    }

    pub fn use_mana_potion(&mut self) -> Result<u32, PotionError> {
        if self.inventory.mana_potions == 0 {
            return Err(PotionError::NoManaPotion);
        }
        if self.mana >= self.mana_max {
            return Err(PotionError::ManaFull);
        }
        self.inventory.mana_potions -= 1;
        Ok(self.restore_mana(POTION_RESTORE_AMOUNT))
    }

    /// Equips the inventory item at `index`. The displaced item goes to the
    /// end of the inventory. On failure the item is put back where it was.
    pub fn equip_from_inventory(
        &mut self,
        index: usize,
    ) -> Result<Option<String>, EquipFromInventoryError> {
        let item = self
            .inventory
            .remove(index)
            .ok_or(EquipFromInventoryError::NoSuchItem(index))?;
        match self.equipment.equip(item, &self.class) {
            Ok(None) => Ok(None),
            Ok(Some(previous)) => {
                let name = previous.name.clone();
                match self.inventory.add(previous) {
                    Ok(()) => Ok(Some(name)),
                    Err(full) => {
                        self.undo_equip(index, full.item);
                        Err(EquipFromInventoryError::BagFull)
                    }
                }
            }
            Err(err) => {
                self.inventory.put_back(index, err.clone().into_item());
                Err(err.into())
            }
        }
    }

    // Puts `previous` back in its slot and the item it displaces back at
    // `index` in the bag.
    fn undo_equip(&mut self, index: usize, previous: Item) {
        match self.equipment.equip(previous, &self.class) {
            Ok(Some(item)) => self.inventory.put_back(index, item),
            Ok(None) => {}
            Err(err) => {
                let end = self.inventory.len();
                self.inventory.put_back(end, err.into_item());
            }
        }
    }

    /// Back on your feet in Astrab with full HP and mana. Zones keep whatever
    /// was taken from them.
    pub fn revive_at_hub(&mut self) {
        self.hp = self.hp_max;
        self.mana = self.mana_max;
        self.position = Position::hub();
    }

    pub fn discover(&mut self, pos: Position) {
        self.discovered[pos.y()][pos.x()] = true;
    }

    pub fn is_discovered(&self, x: usize, y: usize) -> bool {
        self.discovered
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.iter().flatten().filter(|d| **d).count()
    }

    pub fn accept_quest(&mut self, template: &QuestTemplate) -> bool {
        self.quests.accept(template)
    }

    /// Turns in a completed quest and pays its rewards. `None` if the quest
    /// is not ready or was already paid.
    pub fn turn_in_quest(
        &mut self,
        name: &str,
        choose: impl FnOnce(&CharacterRecord) -> StatChoice,
    ) -> Option<TurnIn> {
        let reward = self.quests.turn_in(name)?;
        self.gold = self.gold.saturating_add(reward.gold);
        self.inventory.health_potions += reward.health_potions;
        self.inventory.mana_potions += reward.mana_potions;
        let level_up = self.gain_experience(reward.experience, choose);
        info!("{} turned in {}", self.name, name);
        Some(TurnIn { reward, level_up })
    }
}
