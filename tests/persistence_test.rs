//! Integration test: character files on disk
//!
//! Saves a session through `CharacterManager`, reloads it, and checks that
//! progress (zone snapshots, quests, gold stipend rules) survives the JSON
//! file format.

use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};

use acarnam::character::{CharacterManager, CharacterRecord, RecordStore, StatChoice};
use acarnam::errors::PersistenceError;
use acarnam::quests::{template_for_giver, TUTORIAL_QUEST};
use acarnam::session::{ExplorationSession, ScriptedPresenter, SessionEnd};
use acarnam::world::{Position, WorldGrid};

static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_manager() -> CharacterManager {
    let n = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "acarnam-persistence-{}-{}",
        std::process::id(),
        n
    ));
    CharacterManager::with_dir(dir).unwrap()
}

fn cleanup(manager: CharacterManager) {
    fs::remove_dir_all(manager.save_dir()).ok();
}

// =============================================================================
// Session through the file store
// =============================================================================

#[test]
fn test_session_progress_survives_reload() {
    let mut manager = temp_manager();
    let mut hero = CharacterRecord::new("Miner", "Mage").unwrap();
    hero.intro_done = true;
    let mine = Position::new(0, 0).unwrap();
    hero.position = mine;
    hero.discover(mine);

    let mut presenter =
        ScriptedPresenter::new(["explore", "harvest", "kairis", "fireball", "flee", "return", "save"]);
    let summary = ExplorationSession::new(&mut presenter, &mut manager, hero, 50).run();
    assert_eq!(summary.end, SessionEnd::Quit);

    let loaded = manager.load("Miner").unwrap();
    assert_eq!(loaded, summary.record);
    assert_eq!(loaded.inventory.count_by_name("Iron"), 10);

    let grid = WorldGrid::restore(&loaded);
    let zone = grid.zone(mine);
    assert!(zone.resources.is_empty());
    assert_eq!(zone.enemies.len(), 3);
    // Fireball for 30 on a 110 HP Kairis, then fled.
    assert_eq!(zone.enemies[0].hp, 80);
    assert_eq!(grid.position(), mine);
    cleanup(manager);
}

#[test]
fn test_missing_character_is_not_found() {
    let manager = temp_manager();
    assert!(matches!(
        manager.load("Nobody"),
        Err(PersistenceError::NotFound(_))
    ));
    cleanup(manager);
}

// =============================================================================
// Gold stipend
// =============================================================================

#[test]
fn test_gold_stipend_only_when_absent() {
    let manager = temp_manager();
    fs::write(
        manager.save_dir().join("broke.json"),
        r#"{"name": "Broke", "class": "Rogue", "gold": 0}"#,
    )
    .unwrap();
    fs::write(
        manager.save_dir().join("old.json"),
        r#"{"name": "Old", "class": "Rogue"}"#,
    )
    .unwrap();

    assert_eq!(manager.load_character("Broke").unwrap().gold, 0);
    assert_eq!(manager.load_character("Old").unwrap().gold, 100);
    cleanup(manager);
}

// =============================================================================
// Quests across saves
// =============================================================================

#[test]
fn test_turned_in_quest_is_not_paid_after_reload() {
    let manager = temp_manager();
    let mut hero = CharacterRecord::new("Quester", "Warrior").unwrap();
    hero.accept_quest(template_for_giver("Fillian").unwrap());
    for _ in 0..8 {
        hero.quests.record_kill("Kairis");
    }
    let paid = hero.turn_in_quest("Kairis Crackdown", |_| StatChoice::MaxHp).unwrap();
    assert_eq!(paid.reward.gold, 300);
    assert_eq!(paid.reward.experience, 100);
    assert_eq!(hero.gold, 400);

    manager.save_character(&hero).unwrap();
    let mut loaded = manager.load_character("Quester").unwrap();
    assert!(loaded.quests.was_turned_in("Kairis Crackdown"));
    assert!(loaded.turn_in_quest("Kairis Crackdown", |_| StatChoice::MaxHp).is_none());
    assert_eq!(loaded.gold, 400);
    assert_eq!(loaded.level, 2);
    cleanup(manager);
}

#[test]
fn test_simple_quest_pays_fifty_experience() {
    let mut hero = CharacterRecord::new("Kitten", "Rogue").unwrap();
    assert!(hero.accept_quest(&TUTORIAL_QUEST));
    assert!(hero.turn_in_quest(TUTORIAL_QUEST.name, |_| StatChoice::MaxHp).is_none());
    assert!(hero.quests.complete(TUTORIAL_QUEST.name));

    let paid = hero.turn_in_quest(TUTORIAL_QUEST.name, |_| StatChoice::MaxHp).unwrap();
    assert_eq!(paid.reward.experience, 50);
    assert_eq!(paid.reward.health_potions, 1);
    assert_eq!(hero.experience, 50);
    assert!(hero.turn_in_quest(TUTORIAL_QUEST.name, |_| StatChoice::MaxHp).is_none());
}
