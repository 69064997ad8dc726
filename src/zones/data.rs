//! Static world tables: biome layout, enemy templates and NPC rosters.

use super::types::{Biome, NpcRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub hp: u32,
    pub attack: u32,
}

pub const MOUTMOUT: EnemyTemplate = EnemyTemplate {
    name: "Moutmout",
    hp: 80,
    attack: 25,
};
pub const SIGN_FLIPPER: EnemyTemplate = EnemyTemplate {
    name: "Sign Flipper",
    hp: 150,
    attack: 40,
};
pub const FOAMWING: EnemyTemplate = EnemyTemplate {
    name: "Foamwing",
    hp: 100,
    attack: 30,
};
pub const KAIRIS: EnemyTemplate = EnemyTemplate {
    name: "Kairis",
    hp: 110,
    attack: 35,
};
pub const HIJACOB_CRAB: EnemyTemplate = EnemyTemplate {
    name: "Hijacob Crab",
    hp: 90,
    attack: 20,
};
pub const MOUMOULE: EnemyTemplate = EnemyTemplate {
    name: "Moumoule",
    hp: 250,
    attack: 15,
};

/// Tutorial opponent, never placed on the grid.
pub const ANGRY_CAT: EnemyTemplate = EnemyTemplate {
    name: "Angry Cat",
    hp: 50,
    attack: 20,
};

const ENEMY_TEMPLATES: &[EnemyTemplate] = &[
    MOUTMOUT,
    SIGN_FLIPPER,
    FOAMWING,
    KAIRIS,
    HIJACOB_CRAB,
    MOUMOULE,
    ANGRY_CAT,
];

pub fn enemy_template(name: &str) -> Option<EnemyTemplate> {
    ENEMY_TEMPLATES.iter().copied().find(|t| t.name == name)
}

pub const HUB_NAME: &str = "Astrab";

// Row = y, column = x.
const BIOMES: [[Biome; 5]; 5] = [
    [Biome::Mine, Biome::Mine, Biome::Road, Biome::Plain, Biome::Plain],
    [Biome::Mine, Biome::Mine, Biome::Road, Biome::Plain, Biome::Plain],
    [Biome::Road, Biome::Road, Biome::Hub, Biome::Road, Biome::Road],
    [Biome::Forest, Biome::Forest, Biome::Road, Biome::River, Biome::River],
    [Biome::Forest, Biome::Forest, Biome::Road, Biome::River, Biome::River],
];

pub fn biome_at(x: usize, y: usize) -> Option<Biome> {
    BIOMES.get(y).and_then(|row| row.get(x)).copied()
}

/// Display name and description for each biome.
pub fn biome_text(biome: Biome) -> (&'static str, &'static str) {
    match biome {
        Biome::Hub => (
            HUB_NAME,
            "Astrab, capital of the realm. Merchants, smiths and adventurers crowd \
             its paved streets around the Great Forge, the Central Market and the Royal Bank.",
        ),
        Biome::Road => ("Road", "A crossroads. Every clever fool passes through here."),
        Biome::Plain => ("Plain", "Open fields overrun by wandering flocks."),
        Biome::Forest => ("Forest", "Dense woods, loud with wings and foam."),
        Biome::Mine => ("Mine", "The miners fled when the Kairis moved in."),
        Biome::River => ("River", "Shallow water and a lot of crabs."),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NpcDef {
    pub name: &'static str,
    pub dialogue: &'static str,
    pub role: NpcRole,
    pub quest: Option<&'static str>,
}

pub const HUB_NPCS: &[NpcDef] = &[
    NpcDef {
        name: "Karim the Merchant",
        dialogue: "Welcome to my shop! Everything an adventurer could need.",
        role: NpcRole::Vendor,
        quest: None,
    },
    NpcDef {
        name: "Hassan the Smith",
        dialogue: "My forge is at your service.",
        role: NpcRole::Smith,
        quest: None,
    },
    NpcDef {
        name: "Salomon the Banker",
        dialogue: "The Royal Bank keeps your valuables safe.",
        role: NpcRole::Banker,
        quest: None,
    },
    NpcDef {
        name: "Royal Guard",
        dialogue: "Astrab is the safest city in the realm, adventurer.",
        role: NpcRole::Guard,
        quest: None,
    },
];

// (x, y, giver)
const QUEST_GIVERS: &[(usize, usize, NpcDef)] = &[
    (
        3,
        3,
        NpcDef {
            name: "Gura",
            dialogue: "Those crabs dance all night. I can't take it anymore!",
            role: NpcRole::QuestGiver,
            quest: Some("River Cleanup"),
        },
    ),
    (
        3,
        1,
        NpcDef {
            name: "Marine",
            dialogue: "The fields are overrun. Go restore some order!",
            role: NpcRole::QuestGiver,
            quest: Some("Field Raid"),
        },
    ),
    (
        1,
        1,
        NpcDef {
            name: "Fillian",
            dialogue: "The Kairis took my mines and chased my miners off. Stop them!",
            role: NpcRole::QuestGiver,
            quest: Some("Kairis Crackdown"),
        },
    ),
    (
        1,
        3,
        NpcDef {
            name: "Shxtou",
            dialogue: "I'm sick of the Foamwings. Please thin them out!",
            role: NpcRole::QuestGiver,
            quest: Some("Forest Cleanup"),
        },
    ),
];

pub fn quest_giver_at(x: usize, y: usize) -> Option<NpcDef> {
    QUEST_GIVERS
        .iter()
        .find(|(gx, gy, _)| *gx == x && *gy == y)
        .map(|(_, _, def)| *def)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biome_table_corners() {
        assert_eq!(biome_at(0, 0), Some(Biome::Mine));
        assert_eq!(biome_at(4, 0), Some(Biome::Plain));
        assert_eq!(biome_at(0, 4), Some(Biome::Forest));
        assert_eq!(biome_at(4, 4), Some(Biome::River));
        assert_eq!(biome_at(2, 2), Some(Biome::Hub));
        assert_eq!(biome_at(5, 0), None);
        assert_eq!(biome_at(0, 5), None);
    }

    #[test]
    fn test_roads_form_a_cross() {
        for i in 0..5 {
            if i != 2 {
                assert_eq!(biome_at(2, i), Some(Biome::Road));
                assert_eq!(biome_at(i, 2), Some(Biome::Road));
            }
        }
    }

    #[test]
    fn test_quest_givers_stand_in_wild_cells() {
        for (x, y, def) in QUEST_GIVERS {
            assert!(biome_at(*x, *y).unwrap().is_wild(), "{} misplaced", def.name);
            assert!(def.quest.is_some());
        }
        assert!(quest_giver_at(2, 2).is_none());
        assert_eq!(quest_giver_at(1, 1).unwrap().name, "Fillian");
    }

    #[test]
    fn test_enemy_template_lookup() {
        assert_eq!(enemy_template("Kairis"), Some(KAIRIS));
        assert_eq!(enemy_template("Moumoule").unwrap().hp, 250);
        assert!(enemy_template("Dragon").is_none());
    }

    #[test]
    fn test_hub_roster_roles() {
        let roles: Vec<_> = HUB_NPCS.iter().map(|n| n.role).collect();
        assert_eq!(
            roles,
            vec![NpcRole::Vendor, NpcRole::Smith, NpcRole::Banker, NpcRole::Guard]
        );
    }
}
