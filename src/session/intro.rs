//! First-session tutorial with Mathiouw and the angry cat.

use log::info;

use crate::character::CharacterRecord;
use crate::combat::Enemy;
use crate::constants::MAX_ZONE_ACTIONS;
use crate::quests::{TUTORIAL_GUIDE, TUTORIAL_QUEST};
use crate::zones::ANGRY_CAT;

use super::encounter::{choose_level_stat, run_encounter, EncounterOutcome};
use super::presenter::Presenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialOutcome {
    Completed,
    Defeated,
    /// Fled or drawn.
    Unfinished,
}

fn say<P: Presenter>(presenter: &mut P, line: &str) {
    presenter.show(&format!("{}: {}", TUTORIAL_GUIDE, line));
}

fn greet<P: Presenter>(presenter: &mut P) {
    let options = vec![
        "Who are you?".to_string(),
        "Where am I?".to_string(),
        "I'm ready!".to_string(),
    ];
    for _ in 0..MAX_ZONE_ACTIONS {
        match presenter.choose("Mathiouw looks at you kindly.", &options) {
            1 => {
                say(presenter, "I am Mathiouw, shepherd of young souls.");
                say(presenter, "I will be your guide for the start of your journey.");
            }
            2 => {
                say(presenter, "That takes a while to explain, and it will come later.");
                say(presenter, "Make yourself at home for now.");
            }
            _ => break,
        }
    }
    say(presenter, "Perfect. Let's start with the basics of combat.");
}

/// Runs the tutorial once. `intro_done` is set whatever happens, and a
/// beaten player is put back on their feet.
pub fn run_tutorial<P: Presenter>(presenter: &mut P, record: &mut CharacterRecord) -> TutorialOutcome {
    presenter.show("You wake up in Astrab. A calm figure is waiting for you.");
    greet(presenter);

    presenter.show(&format!(
        "Quest offered: {}. {} Reward: {}",
        TUTORIAL_QUEST.name, TUTORIAL_QUEST.description, TUTORIAL_QUEST.reward_label
    ));
    let options = vec!["Accept the quest".to_string(), "Decline".to_string()];
    let accepted =
        presenter.choose("Will you help?", &options) == 1 && record.accept_quest(&TUTORIAL_QUEST);

    say(
        presenter,
        &format!(
            "Go on {}, show me how a real {} handles this angry cat.",
            record.name, record.class
        ),
    );
    let result = run_encounter(presenter, record, Enemy::from_template(ANGRY_CAT));

    let outcome = match result.outcome {
        EncounterOutcome::Victory(_) => {
            if accepted {
                record.quests.complete(TUTORIAL_QUEST.name);
                if let Some(paid) =
                    record.turn_in_quest(TUTORIAL_QUEST.name, |rec| choose_level_stat(presenter, rec))
                {
                    presenter.show(&format!(
                        "Quest {} turned in: {} health potion(s), {} XP.",
                        TUTORIAL_QUEST.name, paid.reward.health_potions, paid.reward.experience
                    ));
                    if let Some(level) = paid.level_up {
                        presenter.show(&format!("You reached level {}!", level));
                    }
                }
            } else {
                record.inventory.health_potions += 1;
                presenter.show("The cat drops a health potion. You pick it up.");
            }
            say(presenter, "Well done. The world is yours to explore.");
            TutorialOutcome::Completed
        }
        EncounterOutcome::Defeat => {
            say(presenter, "Even a cat can be a fierce opponent. Rest, and try the wild.");
            record.revive_at_hub();
            TutorialOutcome::Defeated
        }
        EncounterOutcome::Fled | EncounterOutcome::Draw => {
            say(presenter, "We'll call that a lesson learned.");
            TutorialOutcome::Unfinished
        }
    };

    record.intro_done = true;
    info!("{} finished the tutorial: {:?}", record.name, outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::presenter::ScriptedPresenter;

    #[test]
    fn test_tutorial_accepted_pays_quest() {
        // Ask both questions, get ready, accept, then two Smashes and a
        // Shatter for 65 damage on the 50 HP cat.
        let mut presenter = ScriptedPresenter::new([
            "who", "where", "ready", "accept", "smash", "smash", "shatter",
        ]);
        let mut record = CharacterRecord::new("Hero", "Warrior").unwrap();
        let outcome = run_tutorial(&mut presenter, &mut record);

        assert_eq!(outcome, TutorialOutcome::Completed);
        assert!(record.intro_done);
        assert!(record.quests.was_turned_in(TUTORIAL_QUEST.name));
        assert_eq!(record.inventory.health_potions, 1);
        // Cat kill (25 + 30) plus the simple quest (50).
        assert_eq!(record.level, 2);
        assert_eq!(record.experience, 0);
        assert!(presenter.transcript().contains("shepherd of young souls"));
    }

    #[test]
    fn test_tutorial_declined_drops_potion() {
        let mut presenter =
            ScriptedPresenter::new(["ready", "decline", "smash", "smash", "shatter"]);
        let mut record = CharacterRecord::new("Hero", "Warrior").unwrap();
        let outcome = run_tutorial(&mut presenter, &mut record);

        assert_eq!(outcome, TutorialOutcome::Completed);
        assert!(!record.quests.holds(TUTORIAL_QUEST.name));
        assert_eq!(record.inventory.health_potions, 1);
        assert_eq!(record.experience, 55);
        assert_eq!(record.level, 1);
    }

    #[test]
    fn test_tutorial_flee_still_marks_done() {
        let mut presenter = ScriptedPresenter::new(["ready", "accept", "flee"]);
        let mut record = CharacterRecord::new("Hero", "Warrior").unwrap();
        let outcome = run_tutorial(&mut presenter, &mut record);

        assert_eq!(outcome, TutorialOutcome::Unfinished);
        assert!(record.intro_done);
        assert!(record.quests.holds(TUTORIAL_QUEST.name));
        assert!(!record.quests.was_turned_in(TUTORIAL_QUEST.name));
    }

    #[test]
    fn test_tutorial_defeat_revives() {
        // Explosion leaves the cat at 25 HP and its 20 damage finishes us.
        let mut presenter = ScriptedPresenter::new(["ready", "decline", "explosion"]);
        let mut record = CharacterRecord::new("Hero", "Mage").unwrap();
        record.hp = 1;
        let outcome = run_tutorial(&mut presenter, &mut record);

        assert_eq!(outcome, TutorialOutcome::Defeated);
        assert!(record.intro_done);
        assert_eq!(record.hp, record.hp_max);
        assert!(record.position.is_hub());
    }
}
