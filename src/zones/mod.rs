//! The 5x5 world layout and per-zone generation.

pub mod data;
pub mod generation;
pub mod types;

pub use data::{enemy_template, EnemyTemplate, ANGRY_CAT, HUB_NAME};
pub use generation::{generate, ZoneSeed};
pub use types::{Biome, Npc, NpcRole, Zone};
