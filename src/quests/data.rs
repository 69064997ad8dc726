//! Quest templates handed out by NPCs, keyed by giver name.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestTemplate {
    pub name: &'static str,
    pub giver: &'static str,
    pub description: &'static str,
    /// (enemy name, kills required)
    pub objectives: &'static [(&'static str, u32)],
    pub gold: u32,
    pub health_potions: u32,
    pub mana_potions: u32,
    pub reward_label: &'static str,
}

const COMBAT_REWARD_LABEL: &str = "300 gold, 3 health potions, 3 mana potions";

pub const QUEST_TEMPLATES: &[QuestTemplate] = &[
    QuestTemplate {
        name: "River Cleanup",
        giver: "Gura",
        description: "Drive the crabs and moumoules out of the river.",
        objectives: &[("Hijacob Crab", 5), ("Moumoule", 3)],
        gold: 300,
        health_potions: 3,
        mana_potions: 3,
        reward_label: COMBAT_REWARD_LABEL,
    },
    QuestTemplate {
        name: "Field Raid",
        giver: "Marine",
        description: "Clear the fields of Moutmouts and Sign Flippers.",
        objectives: &[("Moutmout", 5), ("Sign Flipper", 3)],
        gold: 300,
        health_potions: 3,
        mana_potions: 3,
        reward_label: COMBAT_REWARD_LABEL,
    },
    QuestTemplate {
        name: "Kairis Crackdown",
        giver: "Fillian",
        description: "Take the mines back from the Kairis.",
        objectives: &[("Kairis", 8)],
        gold: 300,
        health_potions: 3,
        mana_potions: 3,
        reward_label: COMBAT_REWARD_LABEL,
    },
    QuestTemplate {
        name: "Forest Cleanup",
        giver: "Shxtou",
        description: "Thin out the Foamwings in the forest.",
        objectives: &[("Foamwing", 8)],
        gold: 300,
        health_potions: 3,
        mana_potions: 3,
        reward_label: COMBAT_REWARD_LABEL,
    },
];

pub const TUTORIAL_GUIDE: &str = "Mathiouw";

/// First-run quest. No objectives: it is completed by hand once the
/// tutorial fight is won.
pub const TUTORIAL_QUEST: QuestTemplate = QuestTemplate {
    name: "Taming the Cat",
    giver: TUTORIAL_GUIDE,
    description: "Show the guide you can handle an angry cat.",
    objectives: &[],
    gold: 0,
    health_potions: 1,
    mana_potions: 0,
    reward_label: "1 health potion",
};

pub fn template_for_giver(giver: &str) -> Option<&'static QuestTemplate> {
    QUEST_TEMPLATES.iter().find(|t| t.giver == giver)
}

pub fn quest_template(name: &str) -> Option<&'static QuestTemplate> {
    QUEST_TEMPLATES
        .iter()
        .chain(std::iter::once(&TUTORIAL_QUEST))
        .find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_giver() {
        let template = template_for_giver("Fillian").unwrap();
        assert_eq!(template.name, "Kairis Crackdown");
        assert_eq!(template.objectives, &[("Kairis", 8)]);
        assert!(template_for_giver("Royal Guard").is_none());
    }

    #[test]
    fn test_combat_quests_share_rewards() {
        for template in QUEST_TEMPLATES {
            assert_eq!(template.gold, 300);
            assert_eq!(template.health_potions, 3);
            assert_eq!(template.mana_potions, 3);
            assert!(!template.objectives.is_empty());
        }
    }

    #[test]
    fn test_lookup_by_name_includes_tutorial() {
        assert_eq!(quest_template("Taming the Cat"), Some(&TUTORIAL_QUEST));
        assert_eq!(quest_template("Field Raid").unwrap().giver, "Marine");
        assert!(quest_template("Missing").is_none());
    }
}
