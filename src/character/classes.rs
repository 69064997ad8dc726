//! Playable classes and their spell books.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub damage: u32,
    pub mana_cost: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub hp_max: u32,
    pub mana_max: u32,
    #[serde(default)]
    pub spells: Vec<Spell>,
}

// (name, damage, mana cost)
const SPELLS: &[(&str, u32, u32)] = &[
    ("Fireball", 30, 20),
    ("Explosion", 25, 15),
    ("Low Blow", 25, 15),
    ("Trickery", 25, 15),
    ("Smash", 20, 10),
    ("Shatter", 25, 15),
];

const DEFAULT_SPELL_DAMAGE: u32 = 25;
const DEFAULT_SPELL_COST: u32 = 15;

// (name, hp max, mana max, spells)
const CLASSES: &[(&str, u32, u32, [&str; 2])] = &[
    ("Warrior", 130, 70, ["Smash", "Shatter"]),
    ("Mage", 70, 130, ["Fireball", "Explosion"]),
    ("Rogue", 100, 100, ["Low Blow", "Trickery"]),
];

/// Looks up a spell by name. Unknown spells get middling default stats.
pub fn lookup_spell(name: &str) -> Spell {
    let (damage, mana_cost) = SPELLS
        .iter()
        .find(|(spell, _, _)| *spell == name)
        .map(|&(_, damage, cost)| (damage, cost))
        .unwrap_or((DEFAULT_SPELL_DAMAGE, DEFAULT_SPELL_COST));
    Spell {
        name: name.to_string(),
        damage,
        mana_cost,
    }
}

pub fn lookup_class(name: &str) -> Option<Class> {
    CLASSES
        .iter()
        .find(|(class, ..)| class.eq_ignore_ascii_case(name))
        .map(|&(class, hp_max, mana_max, spells)| Class {
            name: class.to_string(),
            hp_max,
            mana_max,
            spells: spells.iter().map(|s| lookup_spell(s)).collect(),
        })
}

pub fn available_classes() -> Vec<Class> {
    CLASSES
        .iter()
        .filter_map(|(name, ..)| lookup_class(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_spell() {
        let fireball = lookup_spell("Fireball");
        assert_eq!(fireball.damage, 30);
        assert_eq!(fireball.mana_cost, 20);
    }

    #[test]
    fn test_unknown_spell_defaults() {
        let spell = lookup_spell("Sneeze");
        assert_eq!(spell.name, "Sneeze");
        assert_eq!(spell.damage, DEFAULT_SPELL_DAMAGE);
        assert_eq!(spell.mana_cost, DEFAULT_SPELL_COST);
    }

    #[test]
    fn test_lookup_class_case_insensitive() {
        let mage = lookup_class("mage").unwrap();
        assert_eq!(mage.name, "Mage");
        assert_eq!(mage.hp_max, 70);
        assert_eq!(mage.mana_max, 130);
        assert_eq!(mage.spells.len(), 2);
        assert_eq!(mage.spells[0].name, "Fireball");
    }

    #[test]
    fn test_unknown_class() {
        assert!(lookup_class("Bard").is_none());
    }

    #[test]
    fn test_available_classes() {
        let names: Vec<_> = available_classes().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Warrior", "Mage", "Rogue"]);
    }
}
