use serde::{Deserialize, Serialize};

use crate::constants::{QUEST_XP_SIMPLE, QUEST_XP_WITH_OBJECTIVES};

use super::data::QuestTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub enemy_name: String,
    pub required: u32,
    #[serde(default)]
    pub current: u32,
}

impl Objective {
    pub fn is_met(&self) -> bool {
        self.current >= self.required
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub name: String,
    #[serde(default)]
    pub giver: String,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub turned_in: bool,
    #[serde(default)]
    pub gold_reward: u32,
    #[serde(default)]
    pub potion_reward: u32,
    #[serde(default)]
    pub mana_potion_reward: u32,
    #[serde(default)]
    pub reward_label: String,
}

impl Quest {
    pub fn from_template(template: &QuestTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            giver: template.giver.to_string(),
            objectives: template
                .objectives
                .iter()
                .map(|&(enemy, required)| Objective {
                    enemy_name: enemy.to_string(),
                    required,
                    current: 0,
                })
                .collect(),
            completed: false,
            turned_in: false,
            gold_reward: template.gold,
            potion_reward: template.health_potions,
            mana_potion_reward: template.mana_potions,
            reward_label: template.reward_label.to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed && !self.turned_in
    }

    pub fn is_ready(&self) -> bool {
        self.completed && !self.turned_in
    }

    fn all_objectives_met(&self) -> bool {
        !self.objectives.is_empty() && self.objectives.iter().all(Objective::is_met)
    }

    /// Flat experience paid on turn-in.
    pub fn experience_reward(&self) -> u32 {
        if self.objectives.is_empty() {
            QUEST_XP_SIMPLE
        } else {
            QUEST_XP_WITH_OBJECTIVES
        }
    }
}

/// A counter that moved because of a kill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestProgress {
    pub quest: String,
    pub enemy_name: String,
    pub current: u32,
    pub required: u32,
    /// True when this kill completed the whole quest.
    pub quest_completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestReward {
    pub gold: u32,
    pub health_potions: u32,
    pub mana_potions: u32,
    pub experience: u32,
}

/// The player's quests, in the order they were accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestLog {
    quests: Vec<Quest>,
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn get(&self, name: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.name == name)
    }

    /// True if a quest with this name is held and not yet turned in.
    pub fn holds(&self, name: &str) -> bool {
        self.quests.iter().any(|q| q.name == name && !q.turned_in)
    }

    pub fn was_turned_in(&self, name: &str) -> bool {
        self.quests.iter().any(|q| q.name == name && q.turned_in)
    }

    /// Adds a quest built from `template`. Returns false if it is already held.
    pub fn accept(&mut self, template: &QuestTemplate) -> bool {
        if self.holds(template.name) {
            return false;
        }
        self.quests.push(Quest::from_template(template));
        true
    }

    /// Advances every matching objective of every active quest.
    pub fn record_kill(&mut self, enemy_name: &str) -> Vec<QuestProgress> {
        let mut progress = Vec::new();
        for quest in self.quests.iter_mut().filter(|q| q.is_active()) {
            let mut moved = Vec::new();
            for objective in quest
                .objectives
                .iter_mut()
                .filter(|o| o.enemy_name == enemy_name && !o.is_met())
            {
                objective.current += 1;
                moved.push((objective.current, objective.required));
            }
            if moved.is_empty() {
                continue;
            }
            if quest.all_objectives_met() {
                quest.completed = true;
            }
            progress.extend(moved.into_iter().map(|(current, required)| QuestProgress {
                quest: quest.name.clone(),
                enemy_name: enemy_name.to_string(),
                current,
                required,
                quest_completed: quest.completed,
            }));
        }
        progress
    }

    /// Marks an objective-less quest as completed. Quests with objectives only
    /// complete through kills.
    pub fn complete(&mut self, name: &str) -> bool {
        match self
            .quests
            .iter_mut()
            .find(|q| q.name == name && q.is_active() && q.objectives.is_empty())
        {
            Some(quest) => {
                quest.completed = true;
                true
            }
            None => false,
        }
    }

    /// Closes a completed quest and returns what it pays. A quest is only ever
    /// paid once: later calls return `None`.
    pub fn turn_in(&mut self, name: &str) -> Option<QuestReward> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.name == name && q.is_ready())?;
        quest.turned_in = true;
        Some(QuestReward {
            gold: quest.gold_reward,
            health_potions: quest.potion_reward,
            mana_potions: quest.mana_potion_reward,
            experience: quest.experience_reward(),
        })
    }

    /// Names of quests from `giver` that are waiting to be turned in.
    pub fn ready_for(&self, giver: &str) -> Vec<String> {
        self.quests
            .iter()
            .filter(|q| q.giver == giver && q.is_ready())
            .map(|q| q.name.clone())
            .collect()
    }

    pub fn active(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.is_active())
    }
}
