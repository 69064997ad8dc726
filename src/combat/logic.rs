use log::debug;

use crate::character::{CharacterRecord, StatChoice};
use crate::constants::{
    KILL_XP_ATTACK_FACTOR, KILL_XP_BASE, KILL_XP_DIVISOR, MAX_COMBAT_TURNS, MIN_ENEMY_DAMAGE,
    POTION_RESTORE_AMOUNT,
};
use crate::quests::QuestProgress;

use super::types::{ActionRejected, CombatAction, CombatEvent, CombatStatus, Enemy, TurnReport};

/// Experience for defeating `enemy`. Scales with attack, not hp.
pub fn kill_xp(enemy: &Enemy) -> u32 {
    KILL_XP_BASE + enemy.attack * KILL_XP_ATTACK_FACTOR / KILL_XP_DIVISOR
}

/// Damage an enemy deals through `defense` points of armor.
pub fn enemy_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense).max(MIN_ENEMY_DAMAGE)
}

/// One player-versus-enemy encounter. Owns the enemy for its duration.
#[derive(Debug, Clone)]
pub struct CombatResolver {
    enemy: Enemy,
    status: CombatStatus,
    turns: u32,
}

impl CombatResolver {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            status: CombatStatus::Active,
            turns: 0,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn status(&self) -> CombatStatus {
        self.status
    }

    /// Number of accepted actions so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Resolves one player action followed, if the fight goes on, by the
    /// enemy's counterattack.
    pub fn apply(
        &mut self,
        action: CombatAction,
        player: &mut CharacterRecord,
    ) -> Result<TurnReport, ActionRejected> {
        if self.is_over() {
            return Err(ActionRejected::CombatOver);
        }

        let mut events = vec![self.player_action(action, player)?];
        self.turns += 1;

        if action == CombatAction::Flee {
            self.status = CombatStatus::PlayerFled;
        } else if !self.enemy.is_alive() {
            self.status = CombatStatus::EnemyDefeated;
            events.push(CombatEvent::EnemyDefeated);
        } else {
            let defense = player.defense_bonus();
            let damage = enemy_damage(self.enemy.attack, defense);
            player.hp = player.hp.saturating_sub(damage);
            events.push(CombatEvent::EnemyAttack {
                damage,
                blocked: self.enemy.attack.min(defense),
            });
            if player.hp == 0 {
                self.status = CombatStatus::PlayerDefeated;
                events.push(CombatEvent::PlayerDefeated);
            }
        }

        if self.status == CombatStatus::Active && self.turns >= MAX_COMBAT_TURNS {
            self.status = CombatStatus::TurnLimitReached;
            events.push(CombatEvent::TurnLimitReached);
        }

        debug!(
            "combat turn {} vs {}: enemy hp {}, player hp {}, status {:?}",
            self.turns, self.enemy.name, self.enemy.hp, player.hp, self.status
        );

        Ok(TurnReport {
            turn: self.turns,
            events,
            status: self.status,
            enemy_hp: self.enemy.hp,
            player_hp: player.hp,
        })
    }

    /// Validates and applies the player's half of a turn. Nothing is changed
    /// when the action is rejected.
    fn player_action(
        &mut self,
        action: CombatAction,
        player: &mut CharacterRecord,
    ) -> Result<CombatEvent, ActionRejected> {
        match action {
            CombatAction::CastSpell(index) => {
                let spell = player
                    .spells()
                    .into_iter()
                    .nth(index)
                    .ok_or(ActionRejected::UnknownSpell(index))?;
                if player.mana < spell.mana_cost {
                    return Err(ActionRejected::NotEnoughMana {
                        spell: spell.name,
                        needed: spell.mana_cost,
                        available: player.mana,
                    });
                }
                player.mana -= spell.mana_cost;
                let weapon_bonus = player.attack_bonus();
                let damage = spell.damage + weapon_bonus;
                self.enemy.take_damage(damage);
                Ok(CombatEvent::SpellCast {
                    spell: spell.name,
                    damage,
                    weapon_bonus,
                    mana_spent: spell.mana_cost,
                })
            }
            CombatAction::HealthPotion => {
                if player.inventory.health_potions == 0 {
                    return Err(ActionRejected::NoHealthPotion);
                }
                player.inventory.health_potions -= 1;
                let amount = player.heal(POTION_RESTORE_AMOUNT);
                Ok(CombatEvent::HealthRestored { amount })
            }
            CombatAction::ManaPotion => {
                if player.inventory.mana_potions == 0 {
                    return Err(ActionRejected::NoManaPotion);
                }
                player.inventory.mana_potions -= 1;
                let amount = player.restore_mana(POTION_RESTORE_AMOUNT);
                Ok(CombatEvent::ManaRestored { amount })
            }
            CombatAction::Flee => Ok(CombatEvent::PlayerFled),
        }
    }

    /// Ends an unfinished fight as a draw.
    pub fn force_draw(&mut self) {
        if self.status == CombatStatus::Active {
            self.status = CombatStatus::TurnLimitReached;
        }
    }

    /// Hands the enemy back if it is still standing.
    pub fn into_survivor(self) -> Option<Enemy> {
        match self.status {
            CombatStatus::EnemyDefeated => None,
            _ => Some(self.enemy),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictoryReward {
    pub experience: u32,
    pub quest_progress: Vec<QuestProgress>,
    /// New level, if the experience was enough for one.
    pub level_up: Option<u32>,
}

/// Pays out a won fight: quest counters first, then experience and the
/// level check.
pub fn award_victory(
    player: &mut CharacterRecord,
    enemy: &Enemy,
    choose: impl FnOnce(&CharacterRecord) -> StatChoice,
) -> VictoryReward {
    let quest_progress = player.quests.record_kill(&enemy.name);
    let experience = kill_xp(enemy);
    let level_up = player.gain_experience(experience, choose);
    VictoryReward {
        experience,
        quest_progress,
        level_up,
    }
}
