use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Helmet,
    Chest,
    Legs,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 4] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Helmet,
            EquipmentSlot::Chest,
            EquipmentSlot::Legs,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Helmet => "Helmet",
            EquipmentSlot::Chest => "Chest",
            EquipmentSlot::Legs => "Legs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Resource,
    Weapon,
    Helmet,
    Chest,
    Legs,
    Potion,
    Special,
}

impl ItemKind {
    /// The equipment slot this kind of item occupies, if any.
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemKind::Weapon => Some(EquipmentSlot::Weapon),
            ItemKind::Helmet => Some(EquipmentSlot::Helmet),
            ItemKind::Chest => Some(EquipmentSlot::Chest),
            ItemKind::Legs => Some(EquipmentSlot::Legs),
            ItemKind::Resource | ItemKind::Potion | ItemKind::Special => None,
        }
    }

    pub fn is_armor(&self) -> bool {
        matches!(self, ItemKind::Helmet | ItemKind::Chest | ItemKind::Legs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub value: u32,
    /// Attack bonus granted while equipped as a weapon.
    #[serde(default)]
    pub attack: u32,
    /// Defense bonus granted while equipped as armor.
    #[serde(default)]
    pub defense: u32,
    /// Class allowed to equip this item. `None` means any class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_class: Option<String>,
}

impl Item {
    pub fn slot(&self) -> Option<EquipmentSlot> {
        self.kind.slot()
    }

    pub fn is_equippable(&self) -> bool {
        self.slot().is_some()
    }

    pub fn usable_by(&self, class_name: &str) -> bool {
        self.required_class
            .as_deref()
            .map_or(true, |required| required == class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword(required_class: Option<&str>) -> Item {
        Item {
            name: "Sword".to_string(),
            kind: ItemKind::Weapon,
            weight: 12,
            effect: String::new(),
            value: 250,
            attack: 10,
            defense: 0,
            required_class: required_class.map(str::to_string),
        }
    }

    #[test]
    fn test_kind_slots() {
        assert_eq!(ItemKind::Weapon.slot(), Some(EquipmentSlot::Weapon));
        assert_eq!(ItemKind::Helmet.slot(), Some(EquipmentSlot::Helmet));
        assert_eq!(ItemKind::Chest.slot(), Some(EquipmentSlot::Chest));
        assert_eq!(ItemKind::Legs.slot(), Some(EquipmentSlot::Legs));
        assert_eq!(ItemKind::Resource.slot(), None);
        assert_eq!(ItemKind::Potion.slot(), None);
        assert_eq!(ItemKind::Special.slot(), None);
    }

    #[test]
    fn test_armor_kinds() {
        assert!(ItemKind::Helmet.is_armor());
        assert!(ItemKind::Legs.is_armor());
        assert!(!ItemKind::Weapon.is_armor());
        assert!(!ItemKind::Resource.is_armor());
    }

    #[test]
    fn test_usable_by_class() {
        assert!(sword(None).usable_by("Mage"));
        assert!(sword(Some("Warrior")).usable_by("Warrior"));
        assert!(!sword(Some("Warrior")).usable_by("Mage"));
    }

    #[test]
    fn test_item_json_omits_missing_class() {
        let json = serde_json::to_string(&sword(None)).unwrap();
        assert!(!json.contains("required_class"));
        assert!(json.contains("\"kind\":\"weapon\""));
    }
}
