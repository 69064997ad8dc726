//! Static item definitions, looked up by name.
//!
//! Zone snapshots store resources by name only, so this table is what turns a
//! saved name back into a full [`Item`].

use super::types::{Item, ItemKind};

pub const WOOD: &str = "Wood";
pub const IRON: &str = "Iron";
pub const WHEAT: &str = "Wheat";
pub const WILD_LETTUCE: &str = "Wild Lettuce";
pub const MINNOW: &str = "Minnow";

struct ItemDef {
    name: &'static str,
    kind: ItemKind,
    weight: u32,
    effect: &'static str,
    value: u32,
    attack: u32,
    defense: u32,
    required_class: Option<&'static str>,
}

const fn resource(name: &'static str, weight: u32, value: u32, effect: &'static str) -> ItemDef {
    ItemDef {
        name,
        kind: ItemKind::Resource,
        weight,
        effect,
        value,
        attack: 0,
        defense: 0,
        required_class: None,
    }
}

const fn armor(
    name: &'static str,
    kind: ItemKind,
    weight: u32,
    value: u32,
    defense: u32,
    effect: &'static str,
) -> ItemDef {
    ItemDef {
        name,
        kind,
        weight,
        effect,
        value,
        attack: 0,
        defense,
        required_class: None,
    }
}

const fn weapon(
    name: &'static str,
    class: &'static str,
    weight: u32,
    value: u32,
    attack: u32,
    effect: &'static str,
) -> ItemDef {
    ItemDef {
        name,
        kind: ItemKind::Weapon,
        weight,
        effect,
        value,
        attack,
        defense: 0,
        required_class: Some(class),
    }
}

const ITEMS: &[ItemDef] = &[
    // Resources
    resource(WOOD, 10, 5, "Chewing on it hurts your teeth"),
    resource(IRON, 15, 10, "Not the best material for a bed"),
    resource(WHEAT, 2, 3, "Grain from the northern fields"),
    resource(WILD_LETTUCE, 1, 8, "Bitter, but it keeps you going"),
    resource(MINNOW, 2, 12, "Slippery little river fish"),
    // Helmets
    armor("Leather Helmet", ItemKind::Helmet, 5, 150, 5, "Soft leather head guard"),
    armor("Iron Helmet", ItemKind::Helmet, 8, 300, 10, "Sturdy iron head guard"),
    // Chest pieces
    armor("Leather Chest", ItemKind::Chest, 12, 150, 5, "Soft leather vest"),
    armor("Iron Chest", ItemKind::Chest, 20, 300, 10, "Sturdy iron breastplate"),
    // Leg guards
    armor("Leather Legs", ItemKind::Legs, 8, 150, 5, "Soft leather greaves"),
    armor("Iron Legs", ItemKind::Legs, 15, 300, 10, "Sturdy iron greaves"),
    // Basic weapons
    weapon("Simple Staff", "Mage", 8, 250, 10, "A plain wooden staff"),
    weapon("Simple Sword", "Warrior", 12, 250, 10, "A plain iron sword"),
    weapon("Simple Dagger", "Rogue", 6, 250, 10, "A plain sharp dagger"),
    // Expert weapons
    weapon("Expert Staff", "Mage", 15, 500, 20, "A staff humming with power"),
    weapon("Expert Sword", "Warrior", 20, 500, 20, "A finely forged blade"),
    weapon("Expert Dagger", "Rogue", 10, 500, 20, "A poisoned dagger"),
    // Potions
    ItemDef {
        name: "Health Potion",
        kind: ItemKind::Potion,
        weight: 2,
        effect: "Restores 50 HP",
        value: 50,
        attack: 0,
        defense: 0,
        required_class: None,
    },
    ItemDef {
        name: "Mana Potion",
        kind: ItemKind::Potion,
        weight: 2,
        effect: "Restores 50 mana",
        value: 50,
        attack: 0,
        defense: 0,
        required_class: None,
    },
];

impl ItemDef {
    fn to_item(&self) -> Item {
        Item {
            name: self.name.to_string(),
            kind: self.kind,
            weight: self.weight,
            effect: self.effect.to_string(),
            value: self.value,
            attack: self.attack,
            defense: self.defense,
            required_class: self.required_class.map(str::to_string),
        }
    }
}

/// Looks up an item by name. Unknown names yield a generic special item so a
/// save referencing a retired item still loads.
pub fn lookup_item(name: &str) -> Item {
    match ITEMS.iter().find(|def| def.name == name) {
        Some(def) => def.to_item(),
        None => Item {
            name: name.to_string(),
            kind: ItemKind::Special,
            weight: 10,
            effect: "A mysterious object".to_string(),
            value: 10,
            attack: 0,
            defense: 0,
            required_class: None,
        },
    }
}

/// Returns true if `name` is a known catalog entry.
pub fn is_known_item(name: &str) -> bool {
    ITEMS.iter().any(|def| def.name == name)
}
