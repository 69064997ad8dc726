// World layout
pub const GRID_SIZE: usize = 5;
pub const ZONE_COUNT: usize = GRID_SIZE * GRID_SIZE;
pub const HUB_X: usize = 2;
pub const HUB_Y: usize = 2;

// Zone generation
pub const VARIANT_RESOURCES_MIN: u32 = 10;
pub const VARIANT_RESOURCES_SPAN: u32 = 11; // 10..=20
pub const VARIANT_ENEMIES_MIN: u32 = 3;
pub const VARIANT_ENEMIES_SPAN: u32 = 3; // 3..=5
pub const SEED_X_PRIME: u32 = 17;
pub const SEED_Y_PRIME: u32 = 23;
pub const SEED_XY_PRIME: u32 = 11;
pub const SEED_MODULUS: u32 = 1000;

// Character creation
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_GOLD: u32 = 100;
pub const INVENTORY_CAPACITY: usize = 100;
pub const INVENTORY_NEARLY_FULL: usize = 90;

// Potions
pub const POTION_RESTORE_AMOUNT: u32 = 50;

// Combat
pub const MAX_COMBAT_TURNS: u32 = 100;
pub const MAX_COMBAT_PROMPTS: u32 = MAX_COMBAT_TURNS * 4;
pub const MIN_ENEMY_DAMAGE: u32 = 1;
pub const KILL_XP_BASE: u32 = 25;
pub const KILL_XP_ATTACK_FACTOR: u32 = 3;
pub const KILL_XP_DIVISOR: u32 = 2;

// XP and leveling
pub const XP_PER_LEVEL: u32 = 100;
pub const LEVEL_UP_STAT_BONUS: u32 = 10;

// Quests
pub const QUEST_XP_WITH_OBJECTIVES: u32 = 100;
pub const QUEST_XP_SIMPLE: u32 = 50;

// Session loop guards
pub const MAX_SESSION_ACTIONS: u32 = 1000;
pub const MAX_ZONE_ACTIONS: u32 = 50;
pub const MAX_STATUS_ACTIONS: u32 = 20;
pub const MAX_INVENTORY_ACTIONS: u32 = 30;
pub const MAX_INPUT_ATTEMPTS: u32 = 5;
pub const DEFAULT_AUTOSAVE_EVERY: u32 = 50;

// Save system
pub const SAVE_VERSION: u32 = 1;
pub const SAVE_DIR_NAME: &str = ".acarnam";
pub const MAX_NAME_LEN: usize = 16;
