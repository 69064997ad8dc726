//! Kill-count quests and the NPC quest table.

pub mod data;
pub mod tracker;

pub use data::{quest_template, template_for_giver, QuestTemplate, TUTORIAL_GUIDE, TUTORIAL_QUEST};
pub use tracker::{Objective, Quest, QuestLog, QuestProgress, QuestReward};
