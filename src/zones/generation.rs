//! Deterministic zone population.
//!
//! Every zone is a pure function of its coordinate: the same position always
//! yields the same resources, enemies and NPCs. Variation between cells of the
//! same biome comes from [`ZoneSeed`], which is derived from the coordinate and
//! passed explicitly.

use crate::combat::Enemy;
use crate::constants::{
    SEED_MODULUS, SEED_XY_PRIME, SEED_X_PRIME, SEED_Y_PRIME, VARIANT_ENEMIES_MIN,
    VARIANT_ENEMIES_SPAN, VARIANT_RESOURCES_MIN, VARIANT_RESOURCES_SPAN,
};
use crate::items::{lookup_item, Item, IRON, MINNOW, WHEAT, WILD_LETTUCE, WOOD};
use crate::world::Position;

use super::data::{
    biome_at, biome_text, quest_giver_at, EnemyTemplate, NpcDef, FOAMWING, HIJACOB_CRAB,
    HUB_NPCS, KAIRIS, MOUMOULE, MOUTMOUT, SIGN_FLIPPER,
};
use super::types::{Biome, Npc, Zone};

/// Coordinate-derived variation value in `[0, 1000)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSeed(pub u32);

impl ZoneSeed {
    pub fn for_position(pos: Position) -> Self {
        let x = pos.x() as u32;
        let y = pos.y() as u32;
        ZoneSeed((x * SEED_X_PRIME + y * SEED_Y_PRIME + x * y * SEED_XY_PRIME) % SEED_MODULUS)
    }

    pub fn resource_count(&self) -> u32 {
        VARIANT_RESOURCES_MIN + self.0 % VARIANT_RESOURCES_SPAN
    }

    pub fn enemy_count(&self) -> u32 {
        VARIANT_ENEMIES_MIN + self.0 % VARIANT_ENEMIES_SPAN
    }

    /// `base + (seed * mult) % span`, a percentage.
    fn percent(&self, base: u32, mult: u32, span: u32) -> u32 {
        base + (self.0 * mult) % span
    }
}

/// Splits `total` into a primary share of `pct` percent (floored) and the rest.
fn split(total: u32, pct: u32) -> (u32, u32) {
    let primary = total * pct / 100;
    (primary, total - primary)
}

fn items(name: &str, count: u32) -> impl Iterator<Item = Item> + '_ {
    (0..count).map(move |_| lookup_item(name))
}

fn enemies(template: EnemyTemplate, count: u32) -> impl Iterator<Item = Enemy> {
    (0..count).map(move |_| Enemy::from_template(template))
}

fn wild_content(biome: Biome, seed: ZoneSeed) -> (Vec<Item>, Vec<Enemy>) {
    let resource_total = seed.resource_count();
    let enemy_total = seed.enemy_count();

    match biome {
        Biome::Plain => {
            let (wheat, lettuce) = split(resource_total, seed.percent(40, 7, 30));
            let (moutmout, flippers) = split(enemy_total, seed.percent(30, 11, 40));
            (
                items(WHEAT, wheat).chain(items(WILD_LETTUCE, lettuce)).collect(),
                enemies(MOUTMOUT, moutmout)
                    .chain(enemies(SIGN_FLIPPER, flippers))
                    .collect(),
            )
        }
        Biome::Forest => {
            let (wood, lettuce) = split(resource_total, seed.percent(60, 13, 30));
            (
                items(WOOD, wood).chain(items(WILD_LETTUCE, lettuce)).collect(),
                enemies(FOAMWING, enemy_total).collect(),
            )
        }
        Biome::Mine => (
            items(IRON, resource_total).collect(),
            enemies(KAIRIS, enemy_total).collect(),
        ),
        Biome::River => {
            let (crabs, moumoules) = split(enemy_total, seed.percent(40, 17, 40));
            (
                items(MINNOW, resource_total).collect(),
                enemies(HIJACOB_CRAB, crabs)
                    .chain(enemies(MOUMOULE, moumoules))
                    .collect(),
            )
        }
        Biome::Hub | Biome::Road => (Vec::new(), Vec::new()),
    }
}

fn npc_from_def(def: &NpcDef) -> Npc {
    Npc {
        name: def.name.to_string(),
        dialogue: def.dialogue.to_string(),
        role: def.role,
        quest: def.quest.map(str::to_string),
    }
}

/// Builds the freshly generated zone for `pos`.
pub fn generate(pos: Position) -> Zone {
    let (x, y) = (pos.x(), pos.y());
    // Position is always in range, so the table always has an entry.
    let biome = biome_at(x, y).unwrap_or(Biome::Road);
    let (name, description) = biome_text(biome);

    let (resources, enemies) = if biome.is_wild() {
        wild_content(biome, ZoneSeed::for_position(pos))
    } else {
        (Vec::new(), Vec::new())
    };

    let mut npcs: Vec<Npc> = match biome {
        Biome::Hub => HUB_NPCS.iter().map(npc_from_def).collect(),
        _ => Vec::new(),
    };
    if let Some(giver) = quest_giver_at(x, y) {
        npcs.push(npc_from_def(&giver));
    }

    Zone {
        name: name.to_string(),
        description: description.to_string(),
        biome,
        resources,
        enemies,
        npcs,
        visited: biome == Biome::Hub,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_seed_formula() {
        assert_eq!(ZoneSeed::for_position(pos(0, 0)).0, 0);
        // 3*17 + 1*23 + 3*11 = 107
        assert_eq!(ZoneSeed::for_position(pos(3, 1)).0, 107);
        // 4*17 + 4*23 + 16*11 = 336
        assert_eq!(ZoneSeed::for_position(pos(4, 4)).0, 336);
    }

    #[test]
    fn test_split_floors_primary() {
        assert_eq!(split(17, 47), (7, 10));
        assert_eq!(split(3, 30), (0, 3));
        assert_eq!(split(20, 50), (10, 10));
    }

    #[test]
    fn test_hub_is_visited_town() {
        let hub = generate(pos(2, 2));
        assert_eq!(hub.name, "Astrab");
        assert!(hub.visited);
        assert!(hub.resources.is_empty());
        assert!(hub.enemies.is_empty());
        assert_eq!(hub.npcs.len(), 4);
    }

    #[test]
    fn test_roads_are_empty() {
        for (x, y) in [(2, 0), (2, 1), (2, 3), (2, 4), (0, 2), (1, 2), (3, 2), (4, 2)] {
            let zone = generate(pos(x, y));
            assert_eq!(zone.biome, Biome::Road);
            assert!(zone.resources.is_empty());
            assert!(zone.enemies.is_empty());
            assert!(zone.npcs.is_empty());
            assert!(!zone.visited);
        }
    }

    #[test]
    fn test_mine_at_origin() {
        // seed 0: 10 iron, 3 Kairis
        let mine = generate(pos(0, 0));
        assert_eq!(mine.biome, Biome::Mine);
        assert_eq!(mine.resources.len(), 10);
        assert!(mine.resources.iter().all(|r| r.name == IRON));
        assert_eq!(mine.enemies.len(), 3);
        assert!(mine.enemies.iter().all(|e| e.name == "Kairis" && e.hp == 110));
    }

    #[test]
    fn test_plain_split() {
        // seed 107: resources 10 + 107 % 11 = 18, wheat pct 40 + 749 % 30 = 69 -> 12 wheat
        // enemies 3 + 107 % 3 = 5, moutmout pct 30 + 1177 % 40 = 47 -> 2 moutmout
        let plain = generate(pos(3, 1));
        assert_eq!(plain.resources.len(), 18);
        assert_eq!(plain.resources.iter().filter(|r| r.name == WHEAT).count(), 12);
        assert_eq!(plain.resources[0].name, WHEAT);
        assert_eq!(plain.resources[17].name, WILD_LETTUCE);
        assert_eq!(plain.enemies.len(), 5);
        assert_eq!(plain.enemies.iter().filter(|e| e.name == "Moutmout").count(), 2);
        assert_eq!(plain.npcs.len(), 1);
        assert_eq!(plain.npcs[0].quest.as_deref(), Some("Field Raid"));
    }

    #[test]
    fn test_wild_counts_in_range() {
        for y in 0..5 {
            for x in 0..5 {
                let zone = generate(pos(x, y));
                if zone.biome.is_wild() {
                    assert!((10..=20).contains(&zone.resources.len()));
                    assert!((3..=5).contains(&zone.enemies.len()));
                }
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(generate(pos(x, y)), generate(pos(x, y)));
            }
        }
    }
}
