use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::zones::EnemyTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub hp: u32,
    pub attack: u32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, hp: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
        }
    }

    pub fn from_template(template: EnemyTemplate) -> Self {
        Self::new(template.name, template.hp, template.attack)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatStatus {
    Active,
    PlayerFled,
    EnemyDefeated,
    PlayerDefeated,
    /// Turn cap reached. Ends as a draw with no reward.
    TurnLimitReached,
}

impl CombatStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, CombatStatus::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    /// Index into the player's spell list.
    CastSpell(usize),
    HealthPotion,
    ManaPotion,
    Flee,
}

/// Why an action was refused. A refused action does not use up the turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionRejected {
    #[error("no spell in slot {0}")]
    UnknownSpell(usize),

    #[error("not enough mana for {spell} ({available}/{needed})")]
    NotEnoughMana {
        spell: String,
        needed: u32,
        available: u32,
    },

    #[error("no health potion left")]
    NoHealthPotion,

    #[error("no mana potion left")]
    NoManaPotion,

    #[error("the fight is already over")]
    CombatOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    SpellCast {
        spell: String,
        damage: u32,
        /// Share of `damage` contributed by the weapon.
        weapon_bonus: u32,
        mana_spent: u32,
    },
    HealthRestored {
        amount: u32,
    },
    ManaRestored {
        amount: u32,
    },
    PlayerFled,
    EnemyAttack {
        damage: u32,
        /// Armor subtracted from the raw attack.
        blocked: u32,
    },
    EnemyDefeated,
    PlayerDefeated,
    TurnLimitReached,
}

/// Outcome of one accepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u32,
    pub events: Vec<CombatEvent>,
    pub status: CombatStatus,
    pub enemy_hp: u32,
    pub player_hp: u32,
}
