//! Drives one fight through a [`Presenter`].

use log::info;

use crate::character::{CharacterRecord, StatChoice};
use crate::combat::{
    award_victory, ActionRejected, CombatAction, CombatEvent, CombatResolver, CombatStatus,
    Enemy, VictoryReward,
};
use crate::constants::{LEVEL_UP_STAT_BONUS, MAX_COMBAT_PROMPTS};

use super::presenter::Presenter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncounterOutcome {
    Victory(VictoryReward),
    Defeat,
    Fled,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterResult {
    pub outcome: EncounterOutcome,
    /// The enemy, if it is still alive and should go back to its zone.
    pub survivor: Option<Enemy>,
}

/// Asks which stat a level-up should raise.
pub fn choose_level_stat<P: Presenter>(presenter: &mut P, record: &CharacterRecord) -> StatChoice {
    let options = vec![
        format!(
            "+{} max HP ({} -> {})",
            LEVEL_UP_STAT_BONUS,
            record.hp_max,
            record.hp_max + LEVEL_UP_STAT_BONUS
        ),
        format!(
            "+{} max mana ({} -> {})",
            LEVEL_UP_STAT_BONUS,
            record.mana_max,
            record.mana_max + LEVEL_UP_STAT_BONUS
        ),
    ];
    match presenter.choose("Level up! Pick a stat to raise:", &options) {
        2 => StatChoice::MaxMana,
        _ => StatChoice::MaxHp,
    }
}

fn action_options(record: &CharacterRecord) -> (Vec<String>, Vec<CombatAction>) {
    let mut options = Vec::new();
    let mut actions = Vec::new();
    for (i, spell) in record.spells().iter().enumerate() {
        options.push(format!(
            "{} ({} dmg, {} mana)",
            spell.name, spell.damage, spell.mana_cost
        ));
        actions.push(CombatAction::CastSpell(i));
    }
    options.push(format!(
        "Health potion ({} left)",
        record.inventory.health_potions
    ));
    actions.push(CombatAction::HealthPotion);
    options.push(format!("Mana potion ({} left)", record.inventory.mana_potions));
    actions.push(CombatAction::ManaPotion);
    options.push("Flee".to_string());
    actions.push(CombatAction::Flee);
    (options, actions)
}

fn describe(event: &CombatEvent, enemy_name: &str) -> String {
    match event {
        CombatEvent::SpellCast {
            spell,
            damage,
            weapon_bonus,
            ..
        } if *weapon_bonus > 0 => format!(
            "You cast {} for {} damage ({} from your weapon).",
            spell, damage, weapon_bonus
        ),
        CombatEvent::SpellCast { spell, damage, .. } => {
            format!("You cast {} for {} damage.", spell, damage)
        }
        CombatEvent::HealthRestored { amount } => format!("You recover {} HP.", amount),
        CombatEvent::ManaRestored { amount } => format!("You recover {} mana.", amount),
        CombatEvent::PlayerFled => "You flee the fight.".to_string(),
        CombatEvent::EnemyAttack { damage, blocked } if *blocked > 0 => format!(
            "{} hits you for {} damage ({} blocked by armor).",
            enemy_name, damage, blocked
        ),
        CombatEvent::EnemyAttack { damage, .. } => {
            format!("{} hits you for {} damage.", enemy_name, damage)
        }
        CombatEvent::EnemyDefeated => format!("{} is defeated!", enemy_name),
        CombatEvent::PlayerDefeated => "You have been defeated...".to_string(),
        CombatEvent::TurnLimitReached => {
            "The fight drags on too long and ends in a draw.".to_string()
        }
    }
}

fn describe_rejection(reason: &ActionRejected) -> String {
    match reason {
        ActionRejected::NotEnoughMana { spell, needed, available } => format!(
            "Not enough mana for {} (need {}, have {}).",
            spell, needed, available
        ),
        other => format!("You can't do that: {}.", other),
    }
}

/// Runs `enemy` against the player until the fight ends or the prompt
/// budget runs out, which counts as a draw.
pub fn run_encounter<P: Presenter>(
    presenter: &mut P,
    record: &mut CharacterRecord,
    enemy: Enemy,
) -> EncounterResult {
    presenter.show(&format!(
        "A {} attacks! ({} HP, {} attack)",
        enemy.name, enemy.hp, enemy.attack
    ));
    let mut combat = CombatResolver::new(enemy);

    for _ in 0..MAX_COMBAT_PROMPTS {
        if combat.is_over() {
            break;
        }
        presenter.show(&format!(
            "-- Turn {} -- You: {}/{} HP, {}/{} mana | {}: {} HP",
            combat.turns() + 1,
            record.hp,
            record.hp_max,
            record.mana,
            record.mana_max,
            combat.enemy().name,
            combat.enemy().hp
        ));
        let (options, actions) = action_options(record);
        let choice = presenter.choose("Your action:", &options);
        let action = actions[choice.saturating_sub(1).min(actions.len() - 1)];

        match combat.apply(action, record) {
            Ok(report) => {
                let enemy_name = combat.enemy().name.clone();
                for event in &report.events {
                    presenter.show(&describe(event, &enemy_name));
                }
            }
            Err(reason) => presenter.show(&describe_rejection(&reason)),
        }
    }

    if !combat.is_over() {
        combat.force_draw();
        presenter.show("Neither of you gives in. The fight is called off.");
    }

    let status = combat.status();
    let enemy = combat.enemy().clone();
    let survivor = combat.into_survivor();
    info!("fight vs {} ended: {:?}", enemy.name, status);

    let outcome = match status {
        CombatStatus::EnemyDefeated => {
            let reward = award_victory(record, &enemy, |rec| choose_level_stat(presenter, rec));
            presenter.show(&format!("You gain {} XP.", reward.experience));
            for progress in &reward.quest_progress {
                presenter.show(&format!(
                    "Quest {}: {} {}/{}",
                    progress.quest, progress.enemy_name, progress.current, progress.required
                ));
                if progress.quest_completed {
                    presenter.show(&format!(
                        "Quest {} complete! Return to its giver for your reward.",
                        progress.quest
                    ));
                }
            }
            if let Some(level) = reward.level_up {
                presenter.show(&format!("You reached level {}!", level));
            }
            EncounterOutcome::Victory(reward)
        }
        CombatStatus::PlayerDefeated => EncounterOutcome::Defeat,
        CombatStatus::PlayerFled => EncounterOutcome::Fled,
        CombatStatus::TurnLimitReached | CombatStatus::Active => EncounterOutcome::Draw,
    };

    presenter.pause();
    EncounterResult { outcome, survivor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::presenter::ScriptedPresenter;

    #[test]
    fn test_victory_scripted() {
        let mut presenter = ScriptedPresenter::new(["smash", "smash"]);
        let mut record = CharacterRecord::new("Hero", "Warrior").unwrap();
        let result = run_encounter(&mut presenter, &mut record, Enemy::new("Rat", 40, 5));
        assert!(matches!(result.outcome, EncounterOutcome::Victory(ref r) if r.experience == 32));
        assert!(result.survivor.is_none());
        assert_eq!(record.hp, 125);
        assert_eq!(record.experience, 32);
        assert_eq!(presenter.pauses, 1);
    }

    #[test]
    fn test_rejected_actions_reprompt() {
        // No potions: both potion picks are refused, then flee.
        let mut presenter = ScriptedPresenter::new(["health potion", "mana potion", "flee"]);
        let mut record = CharacterRecord::new("Hero", "Warrior").unwrap();
        let result = run_encounter(&mut presenter, &mut record, Enemy::new("Rat", 40, 5));
        assert_eq!(result.outcome, EncounterOutcome::Fled);
        assert_eq!(result.survivor, Some(Enemy::new("Rat", 40, 5)));
        assert_eq!(record.hp, 130);
        assert_eq!(presenter.prompts.len(), 3);
    }

    #[test]
    fn test_prompt_budget_forces_draw() {
        // Answers run out, so every prompt picks option 1 (Smash). With zero
        // mana each one is refused and no turn is ever spent.
        let mut presenter = ScriptedPresenter::new(Vec::<String>::new());
        let mut record = CharacterRecord::new("Hero", "Warrior").unwrap();
        record.mana = 0;
        let result = run_encounter(&mut presenter, &mut record, Enemy::new("Wall", 999, 1));
        assert_eq!(result.outcome, EncounterOutcome::Draw);
        assert_eq!(presenter.prompts.len() as u32, MAX_COMBAT_PROMPTS);
        assert_eq!(record.hp, 130);
        assert!(result.survivor.is_some());
    }

    #[test]
    fn test_level_up_prompt_picks_mana() {
        let mut presenter = ScriptedPresenter::new(["smash", "max mana"]);
        let mut record = CharacterRecord::new("Hero", "Warrior").unwrap();
        record.experience = 90;
        let result = run_encounter(&mut presenter, &mut record, Enemy::new("Rat", 10, 5));
        assert!(matches!(
            result.outcome,
            EncounterOutcome::Victory(VictoryReward { level_up: Some(2), .. })
        ));
        assert_eq!(record.mana_max, 80);
        assert_eq!(record.mana, 80);
    }
}
