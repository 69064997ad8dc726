//! Integration test: turn-based combat through the public API
//!
//! Walks the reference fight turn by turn (100 HP / 50 mana hero, a
//! 20 damage spell, a 50 HP enemy hitting for 15), then checks the reward
//! pipeline: experience, quest counters and the level-up choice.

use acarnam::character::{CharacterRecord, StatChoice};
use acarnam::combat::{award_victory, CombatAction, CombatResolver, CombatStatus, Enemy};
use acarnam::quests::template_for_giver;

fn scenario_hero() -> CharacterRecord {
    let mut rec = CharacterRecord::new("Scenario", "Warrior").unwrap();
    rec.hp = 100;
    rec.hp_max = 100;
    rec.mana = 50;
    rec.mana_max = 50;
    rec
}

// =============================================================================
// Reference fight
// =============================================================================

#[test]
fn test_reference_fight_turn_by_turn() {
    let mut hero = scenario_hero();
    let quest = template_for_giver("Fillian").unwrap();
    assert!(hero.accept_quest(quest));

    let mut combat = CombatResolver::new(Enemy::new("Kairis", 50, 15));

    let turn1 = combat.apply(CombatAction::CastSpell(0), &mut hero).unwrap();
    assert_eq!(turn1.enemy_hp, 30);
    assert_eq!(turn1.player_hp, 85);
    assert_eq!(hero.mana, 40);
    assert_eq!(turn1.status, CombatStatus::Active);

    let turn2 = combat.apply(CombatAction::CastSpell(0), &mut hero).unwrap();
    assert_eq!(turn2.enemy_hp, 10);
    assert_eq!(turn2.player_hp, 70);
    assert_eq!(hero.mana, 30);

    let turn3 = combat.apply(CombatAction::CastSpell(0), &mut hero).unwrap();
    assert_eq!(turn3.status, CombatStatus::EnemyDefeated);
    assert_eq!(turn3.enemy_hp, 0);
    // Killing blow: no retaliation.
    assert_eq!(hero.hp, 70);

    let enemy = combat.enemy().clone();
    assert!(combat.into_survivor().is_none());

    let reward = award_victory(&mut hero, &enemy, |_| StatChoice::MaxHp);
    assert_eq!(reward.experience, 47);
    assert_eq!(hero.experience, 47);
    assert_eq!(reward.level_up, None);
    assert_eq!(reward.quest_progress.len(), 1);
    assert_eq!(reward.quest_progress[0].current, 1);
    assert_eq!(hero.quests.get("Kairis Crackdown").unwrap().objectives[0].current, 1);
}

#[test]
fn test_flee_keeps_enemy_intact() {
    let mut hero = scenario_hero();
    let mut combat = CombatResolver::new(Enemy::new("Kairis", 50, 15));
    combat.apply(CombatAction::CastSpell(0), &mut hero).unwrap();
    let report = combat.apply(CombatAction::Flee, &mut hero).unwrap();

    assert_eq!(report.status, CombatStatus::PlayerFled);
    assert_eq!(hero.hp, 85);
    assert_eq!(combat.into_survivor(), Some(Enemy::new("Kairis", 30, 15)));
}

#[test]
fn test_rejected_action_does_not_spend_a_turn() {
    let mut hero = scenario_hero();
    hero.mana = 5;
    let mut combat = CombatResolver::new(Enemy::new("Kairis", 50, 15));
    assert!(combat.apply(CombatAction::CastSpell(0), &mut hero).is_err());
    assert!(combat.apply(CombatAction::HealthPotion, &mut hero).is_err());
    assert_eq!(combat.turns(), 0);
    assert_eq!(hero.hp, 100);
    assert_eq!(combat.enemy().hp, 50);
}

// =============================================================================
// Leveling through combat
// =============================================================================

#[test]
fn test_victory_at_threshold_levels_once() {
    let mut hero = scenario_hero();
    hero.experience = 60;
    hero.hp = 12;
    let enemy = Enemy::new("Kairis", 0, 15);

    let reward = award_victory(&mut hero, &enemy, |rec| {
        assert_eq!(rec.level, 1);
        StatChoice::MaxMana
    });
    assert_eq!(reward.level_up, Some(2));
    assert_eq!(hero.level, 2);
    assert_eq!(hero.experience, 0);
    assert_eq!(hero.mana_max, 60);
    assert_eq!((hero.hp, hero.mana), (100, 60));
}
