//! Runtime world grid and its reconciliation with saved zone snapshots.

pub mod grid;
pub mod harvest;
pub mod position;
pub mod snapshot;

pub use grid::WorldGrid;
pub use harvest::{harvest, HarvestReport};
pub use position::{Direction, Position};
pub use snapshot::{commit, commit_zone, hydrate, SnapshotStore, ZoneSnapshot};
