//! The main exploration loop: travel, zone actions, status and saving.

use chrono::Utc;
use log::{debug, info, warn};

use crate::character::{CharacterRecord, RecordStore};
use crate::constants::{
    MAX_INVENTORY_ACTIONS, MAX_SESSION_ACTIONS, MAX_STATUS_ACTIONS, MAX_ZONE_ACTIONS, ZONE_COUNT,
};
use crate::quests::template_for_giver;
use crate::world::{commit_zone, harvest, Direction, WorldGrid};
use crate::zones::{Npc, NpcRole};

use super::encounter::{choose_level_stat, run_encounter, EncounterOutcome};
use super::intro::run_tutorial;
use super::presenter::Presenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Died,
    ActionLimit,
}

#[derive(Debug)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub actions: u32,
    pub record: CharacterRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoneAction {
    Harvest,
    Fight(usize),
    Talk(usize),
    Leave,
}

pub struct ExplorationSession<'a, P, S> {
    presenter: &'a mut P,
    store: &'a mut S,
    record: CharacterRecord,
    grid: WorldGrid,
    autosave_every: u32,
    actions: u32,
}

impl<'a, P: Presenter, S: RecordStore> ExplorationSession<'a, P, S> {
    pub fn new(
        presenter: &'a mut P,
        store: &'a mut S,
        record: CharacterRecord,
        autosave_every: u32,
    ) -> Self {
        let grid = WorldGrid::restore(&record);
        Self {
            presenter,
            store,
            record,
            grid,
            autosave_every: autosave_every.max(1),
            actions: 0,
        }
    }

    pub fn record(&self) -> &CharacterRecord {
        &self.record
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn run(mut self) -> SessionSummary {
        if !self.record.intro_done {
            run_tutorial(&mut *self.presenter, &mut self.record);
            self.checkpoint("tutorial");
        }

        self.presenter.show(&format!(
            "Welcome back to Acarnam, {}. You have discovered {} of {} zones.",
            self.record.name,
            self.record.discovered_count(),
            ZONE_COUNT
        ));

        let mut end = SessionEnd::ActionLimit;
        while self.actions < MAX_SESSION_ACTIONS {
            self.actions += 1;
            let flow = self.main_menu();
            if !self.record.is_alive() {
                end = SessionEnd::Died;
                break;
            }
            if flow == Flow::Quit {
                end = SessionEnd::Quit;
                break;
            }
            if self.actions % self.autosave_every == 0 {
                self.presenter.show("Autosaving...");
                self.checkpoint("autosave");
            }
        }

        match end {
            SessionEnd::Died => {
                self.presenter
                    .show("You wake up in Astrab, bruised but alive. The adventure ends here for today.");
                self.record.revive_at_hub();
            }
            SessionEnd::ActionLimit => self
                .presenter
                .show("That's enough adventuring for one session. Your progress is saved."),
            SessionEnd::Quit => {}
        }
        self.checkpoint("session end");
        info!(
            "session for {} ended after {} actions: {:?}",
            self.record.name, self.actions, end
        );

        SessionSummary {
            end,
            actions: self.actions,
            record: self.record,
        }
    }

    /// Saves the record. A failure is reported and logged, never fatal: the
    /// in-memory state is kept for the next attempt.
    fn checkpoint(&mut self, reason: &str) -> bool {
        self.record.last_save_time = Utc::now().timestamp();
        match self.store.save(&self.record) {
            Ok(()) => {
                debug!("checkpoint ({}) saved", reason);
                true
            }
            Err(e) => {
                warn!("checkpoint ({}) failed: {}", reason, e);
                self.presenter.show(&format!(
                    "Could not save your progress ({}). It will be retried later.",
                    e
                ));
                false
            }
        }
    }

    fn main_menu(&mut self) -> Flow {
        let zone_name = self.grid.current_zone().name.clone();
        let options = vec![
            format!("Explore {}", zone_name),
            "Travel".to_string(),
            "View map".to_string(),
            "Character status".to_string(),
            "Save and quit".to_string(),
        ];
        let prompt = format!("You are in {} {}.", zone_name, self.grid.position());
        match self.presenter.choose(&prompt, &options) {
            1 => self.zone_menu(),
            2 => self.travel(),
            3 => self.show_map(),
            4 => self.status_menu(),
            _ => return Flow::Quit,
        }
        Flow::Continue
    }

    fn show_map(&mut self) {
        for line in self.grid.map_lines(&self.record) {
            self.presenter.show(&line);
        }
        self.presenter
            .show("A = Astrab, + = road, P = plain, F = forest, M = mine, R = river, ? = unknown");
    }

    fn travel(&mut self) {
        let directions: Vec<Direction> = Direction::all()
            .into_iter()
            .filter(|d| self.grid.can_move(*d))
            .collect();
        let mut options: Vec<String> = directions.iter().map(|d| d.name().to_string()).collect();
        options.push("Stay here".to_string());

        let choice = self.presenter.choose("Which way?", &options);
        let Some(direction) = directions.get(choice.saturating_sub(1)).copied() else {
            return;
        };
        if let Some(pos) = self.grid.move_player(direction, &mut self.record) {
            let zone = self.grid.current_zone();
            self.presenter
                .show(&format!("You head {} and arrive at {} {}.", direction.name(), zone.name, pos));
            self.presenter.show(&zone.description);
        }
    }

    fn zone_actions(&self) -> (Vec<String>, Vec<ZoneAction>) {
        let zone = self.grid.current_zone();
        let mut options = Vec::new();
        let mut actions = Vec::new();

        if zone.has_resources() {
            options.push(format!("Harvest resources ({} left)", zone.resources.len()));
            actions.push(ZoneAction::Harvest);
        }
        for (i, enemy) in zone.enemies.iter().enumerate() {
            options.push(format!(
                "Fight {} ({} HP, {} attack)",
                enemy.name, enemy.hp, enemy.attack
            ));
            actions.push(ZoneAction::Fight(i));
        }
        for (i, npc) in zone.npcs.iter().enumerate() {
            options.push(format!("Talk to {}", npc.name));
            actions.push(ZoneAction::Talk(i));
        }
        options.push("Return".to_string());
        actions.push(ZoneAction::Leave);
        (options, actions)
    }

    fn zone_menu(&mut self) {
        let zone = self.grid.current_zone();
        self.presenter.show(&format!("== {} ==", zone.name));
        self.presenter.show(&zone.description);
        if !zone.has_resources() && !zone.has_enemies() && zone.npcs.is_empty() {
            self.presenter.show("There is nothing left to do here.");
        }

        for _ in 0..MAX_ZONE_ACTIONS {
            let (options, actions) = self.zone_actions();
            let choice = self.presenter.choose("What do you do?", &options);
            match actions[choice.saturating_sub(1).min(actions.len() - 1)] {
                ZoneAction::Harvest => self.harvest(),
                ZoneAction::Fight(index) => {
                    self.fight(index);
                    if !self.record.is_alive() {
                        return;
                    }
                }
                ZoneAction::Talk(index) => self.talk(index),
                ZoneAction::Leave => return,
            }
        }
        self.presenter.show("You have lingered here long enough.");
    }

    fn harvest(&mut self) {
        let pos = self.grid.position();
        let report = harvest(self.grid.current_zone_mut(), &mut self.record.inventory);
        for (name, count) in &report.gathered {
            self.presenter.show(&format!("You gather {} x {}.", count, name));
        }
        if report.left_behind > 0 {
            self.presenter.show(&format!(
                "Your bag is full. {} resources stay behind.",
                report.left_behind
            ));
        }
        commit_zone(&mut self.record, pos, self.grid.zone(pos));
        self.checkpoint("harvest");
    }

    fn fight(&mut self, index: usize) {
        let pos = self.grid.position();
        let zone = self.grid.current_zone_mut();
        if index >= zone.enemies.len() {
            return;
        }
        let enemy = zone.enemies.remove(index);

        let result = run_encounter(&mut *self.presenter, &mut self.record, enemy);
        if let Some(survivor) = result.survivor {
            let enemies = &mut self.grid.current_zone_mut().enemies;
            let slot = index.min(enemies.len());
            enemies.insert(slot, survivor);
        }
        match result.outcome {
            EncounterOutcome::Victory(_) => {
                self.presenter.show("It won't trouble this zone again.")
            }
            EncounterOutcome::Defeat => self.presenter.show("Everything goes dark..."),
            EncounterOutcome::Fled => self.presenter.show("You got away."),
            EncounterOutcome::Draw => self.presenter.show("You both walk away."),
        }

        commit_zone(&mut self.record, pos, self.grid.zone(pos));
        self.checkpoint("combat");
    }

    fn talk(&mut self, index: usize) {
        let Some(npc) = self.grid.current_zone().npcs.get(index).cloned() else {
            return;
        };
        self.presenter.show(&format!("{}: \"{}\"", npc.name, npc.dialogue));

        if npc.role.is_service() {
            self.presenter.show("The counter is closed for now.");
            return;
        }
        if npc.role == NpcRole::QuestGiver {
            self.quest_dialogue(&npc);
        }
    }

    fn quest_dialogue(&mut self, npc: &Npc) {
        let ready = self.record.quests.ready_for(&npc.name);
        if !ready.is_empty() {
            for quest in ready {
                let presenter = &mut *self.presenter;
                let Some(paid) = self
                    .record
                    .turn_in_quest(&quest, |rec| choose_level_stat(presenter, rec))
                else {
                    continue;
                };
                self.presenter.show(&format!(
                    "Quest {} turned in: {} gold, {} health potions, {} mana potions, {} XP.",
                    quest,
                    paid.reward.gold,
                    paid.reward.health_potions,
                    paid.reward.mana_potions,
                    paid.reward.experience
                ));
                if let Some(level) = paid.level_up {
                    self.presenter.show(&format!("You reached level {}!", level));
                }
            }
            self.checkpoint("quest turn-in");
            return;
        }

        let Some(template) = template_for_giver(&npc.name) else {
            return;
        };
        let held = self
            .record
            .quests
            .quests()
            .iter()
            .find(|q| q.name == template.name && !q.turned_in);
        if let Some(quest) = held {
            let progress: Vec<String> = quest
                .objectives
                .iter()
                .map(|o| format!("{} {}/{}", o.enemy_name, o.current, o.required))
                .collect();
            self.presenter.show(&format!(
                "Quest {} in progress: {}",
                quest.name,
                progress.join(", ")
            ));
            return;
        }

        self.presenter
            .show(&format!("Quest offered: {}. {}", template.name, template.description));
        self.presenter.show(&format!("Reward: {}", template.reward_label));
        let options = vec!["Accept the quest".to_string(), "Decline".to_string()];
        if self.presenter.choose("Will you help?", &options) == 1
            && self.record.accept_quest(template)
        {
            self.presenter
                .show(&format!("Quest {} added to your journal.", template.name));
        }
    }

    fn show_status(&mut self) {
        let r = &self.record;
        let mut lines = vec![
            format!("{} the {}, level {}", r.name, r.class, r.level),
            format!(
                "HP {}/{}  Mana {}/{}  XP {}/{}",
                r.hp,
                r.hp_max,
                r.mana,
                r.mana_max,
                r.experience,
                r.experience_to_next_level()
            ),
            format!(
                "Gold {}  Health potions {}  Mana potions {}",
                r.gold, r.inventory.health_potions, r.inventory.mana_potions
            ),
            format!(
                "Weapon bonus +{}  Armor {}  Bag {}/{}",
                r.attack_bonus(),
                r.defense_bonus(),
                r.inventory.len(),
                r.inventory.capacity()
            ),
            format!("Zones discovered {}/{}", r.discovered_count(), ZONE_COUNT),
        ];
        for quest in r.quests.active() {
            lines.push(format!("Quest: {} (from {})", quest.name, quest.giver));
        }
        for line in lines {
            self.presenter.show(&line);
        }
    }

    fn status_menu(&mut self) {
        for _ in 0..MAX_STATUS_ACTIONS {
            self.show_status();
            let options = vec![
                "Drink a health potion".to_string(),
                "Drink a mana potion".to_string(),
                "Inventory and equipment".to_string(),
                "Back".to_string(),
            ];
            match self.presenter.choose("Status", &options) {
                1 => match self.record.use_health_potion() {
                    Ok(gained) => self.presenter.show(&format!("You recover {} HP.", gained)),
                    Err(e) => self.presenter.show(&format!("You can't: {}.", e)),
                },
                2 => match self.record.use_mana_potion() {
                    Ok(gained) => self.presenter.show(&format!("You recover {} mana.", gained)),
                    Err(e) => self.presenter.show(&format!("You can't: {}.", e)),
                },
                3 => self.inventory_menu(),
                _ => return,
            }
        }
    }

    fn inventory_menu(&mut self) {
        for _ in 0..MAX_INVENTORY_ACTIONS {
            let inventory = &self.record.inventory;
            if inventory.is_nearly_full() {
                self.presenter.show("Your bag is nearly full.");
            }
            let mut seen: Vec<&str> = Vec::new();
            for item in inventory.items() {
                if !seen.contains(&item.name.as_str()) {
                    seen.push(&item.name);
                }
            }
            let summary: Vec<String> = seen
                .iter()
                .map(|name| format!("{} x{}", name, inventory.count_by_name(name)))
                .collect();
            let summary = if summary.is_empty() {
                "Your bag is empty.".to_string()
            } else {
                summary.join(", ")
            };
            self.presenter.show(&summary);

            let slots = self.record.inventory.equippable_indices();
            let mut options: Vec<String> = slots
                .iter()
                .filter_map(|&i| self.record.inventory.get(i))
                .map(|item| format!("Equip {}", item.name))
                .collect();
            options.push("Back".to_string());

            let choice = self.presenter.choose("Inventory", &options);
            let Some(&index) = slots.get(choice.saturating_sub(1)) else {
                return;
            };
            match self.record.equip_from_inventory(index) {
                Ok(Some(previous)) => self
                    .presenter
                    .show(&format!("Equipped. {} goes back in your bag.", previous)),
                Ok(None) => self.presenter.show("Equipped."),
                Err(e) => self.presenter.show(&format!("You can't: {}.", e)),
            }
        }
    }
}
