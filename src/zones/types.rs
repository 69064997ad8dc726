use crate::combat::Enemy;
use crate::items::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    Hub,
    Road,
    Plain,
    Forest,
    Mine,
    River,
}

impl Biome {
    /// Wild biomes get seeded resources and enemies.
    pub fn is_wild(&self) -> bool {
        matches!(
            self,
            Biome::Plain | Biome::Forest | Biome::Mine | Biome::River
        )
    }

    /// Single-letter symbol for the map legend.
    pub fn symbol(&self) -> char {
        match self {
            Biome::Hub => 'A',
            Biome::Road => '+',
            Biome::Plain => 'P',
            Biome::Forest => 'F',
            Biome::Mine => 'M',
            Biome::River => 'R',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpcRole {
    Vendor,
    Smith,
    Banker,
    Guard,
    QuestGiver,
}

impl NpcRole {
    /// Hub services that are not run by this engine.
    pub fn is_service(&self) -> bool {
        matches!(self, NpcRole::Vendor | NpcRole::Smith | NpcRole::Banker)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    pub name: String,
    pub dialogue: String,
    pub role: NpcRole,
    /// Name of the quest template this NPC hands out.
    pub quest: Option<String>,
}

/// Runtime contents of one grid cell. Rebuilt every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub name: String,
    pub description: String,
    pub biome: Biome,
    pub resources: Vec<Item>,
    pub enemies: Vec<Enemy>,
    pub npcs: Vec<Npc>,
    pub visited: bool,
}

impl Zone {
    pub fn resource_names(&self) -> Vec<String> {
        self.resources.iter().map(|r| r.name.clone()).collect()
    }

    pub fn has_enemies(&self) -> bool {
        !self.enemies.is_empty()
    }

    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    pub fn npc(&self, name: &str) -> Option<&Npc> {
        self.npcs.iter().find(|npc| npc.name == name)
    }
}
