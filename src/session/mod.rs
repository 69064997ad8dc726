//! Everything the player interacts with: prompts, fights, the tutorial and
//! the exploration loop.

pub mod encounter;
pub mod exploration;
pub mod intro;
pub mod presenter;

pub use encounter::{choose_level_stat, run_encounter, EncounterOutcome, EncounterResult};
pub use exploration::{ExplorationSession, SessionEnd, SessionSummary};
pub use intro::{run_tutorial, TutorialOutcome};
pub use presenter::{parse_choice, Presenter, ScriptedPresenter, TerminalPresenter};
