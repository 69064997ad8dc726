//! Durable per-zone depletion state.
//!
//! The runtime grid is regenerated from scratch every session. Whatever the
//! player has harvested or killed is remembered here, inside the character
//! record, and laid back over the fresh grid by [`hydrate`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::character::CharacterRecord;
use crate::combat::Enemy;
use crate::constants::GRID_SIZE;
use crate::items::lookup_item;
use crate::zones::Zone;

use super::grid::WorldGrid;
use super::position::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSnapshot {
    #[serde(default)]
    pub visited: bool,
    #[serde(default)]
    pub remaining_resources: Vec<String>,
    #[serde(default)]
    pub remaining_enemies: Vec<Enemy>,
}

/// One snapshot per grid cell, indexed `[y][x]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotStore {
    zones: [[ZoneSnapshot; GRID_SIZE]; GRID_SIZE],
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> &ZoneSnapshot {
        &self.zones[pos.y()][pos.x()]
    }

    pub fn get_xy(&self, x: usize, y: usize) -> Option<&ZoneSnapshot> {
        self.zones.get(y).and_then(|row| row.get(x))
    }

    fn set(&mut self, pos: Position, snapshot: ZoneSnapshot) {
        self.zones[pos.y()][pos.x()] = snapshot;
    }

    pub fn visited_count(&self) -> usize {
        self.zones.iter().flatten().filter(|s| s.visited).count()
    }
}

/// Records what is left at `pos`. Overwrites any earlier snapshot and keeps
/// the legacy per-zone flags in step with it.
pub fn commit(
    record: &mut CharacterRecord,
    pos: Position,
    remaining_resources: Vec<String>,
    remaining_enemies: Vec<Enemy>,
) {
    let (x, y) = (pos.x(), pos.y());
    record.resources_harvested[y][x] = remaining_resources.is_empty();
    record.monsters_defeated[y][x] = remaining_enemies.is_empty();
    debug!(
        "commit zone {}: {} resources, {} enemies",
        pos,
        remaining_resources.len(),
        remaining_enemies.len()
    );
    record.snapshots.set(
        pos,
        ZoneSnapshot {
            visited: true,
            remaining_resources,
            remaining_enemies,
        },
    );
}

/// Snapshots the runtime contents of `zone`.
pub fn commit_zone(record: &mut CharacterRecord, pos: Position, zone: &Zone) {
    commit(record, pos, zone.resource_names(), zone.enemies.clone());
}

/// Lays the saved snapshots over a freshly generated grid.
///
/// A visited snapshot replaces the zone's resources and enemies outright. For
/// an unvisited snapshot, saves that only carry the legacy flags still clear
/// the matching generated list.
pub fn hydrate(grid: &mut WorldGrid, record: &CharacterRecord) {
    for pos in Position::all() {
        let snapshot = record.snapshots.get(pos);
        let (x, y) = (pos.x(), pos.y());
        let zone = grid.zone_mut(pos);
        if snapshot.visited {
            zone.resources = snapshot
                .remaining_resources
                .iter()
                .map(|name| lookup_item(name))
                .collect();
            zone.enemies = snapshot.remaining_enemies.clone();
            zone.visited = true;
        } else {
            if record.resources_harvested[y][x] {
                zone.resources.clear();
            }
            if record.monsters_defeated[y][x] {
                zone.enemies.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{IRON, WOOD};

    fn record() -> CharacterRecord {
        CharacterRecord::new("Snap", "Rogue").unwrap()
    }

    #[test]
    fn test_commit_sets_visited_and_mirrors() {
        let mut rec = record();
        let pos = Position::new(0, 0).unwrap();
        commit(&mut rec, pos, vec![], vec![Enemy::new("Kairis", 40, 35)]);
        let snap = rec.snapshots.get(pos);
        assert!(snap.visited);
        assert!(rec.resources_harvested[0][0]);
        assert!(!rec.monsters_defeated[0][0]);

        commit(&mut rec, pos, vec![IRON.to_string()], vec![]);
        assert!(!rec.resources_harvested[0][0]);
        assert!(rec.monsters_defeated[0][0]);
        assert_eq!(rec.snapshots.get(pos).remaining_resources, vec![IRON]);
    }

    #[test]
    fn test_hydrate_replaces_visited_zone() {
        let mut rec = record();
        let pos = Position::new(1, 3).unwrap();
        commit(
            &mut rec,
            pos,
            vec![WOOD.to_string(), WOOD.to_string()],
            vec![Enemy::new("Foamwing", 12, 30)],
        );
        let mut grid = WorldGrid::generate();
        hydrate(&mut grid, &rec);
        let zone = grid.zone(pos);
        assert_eq!(zone.resource_names(), vec![WOOD, WOOD]);
        assert_eq!(zone.enemies, vec![Enemy::new("Foamwing", 12, 30)]);
        assert!(zone.visited);
    }

    #[test]
    fn test_hydrate_leaves_unvisited_zone_generated() {
        let rec = record();
        let mut grid = WorldGrid::generate();
        let fresh = WorldGrid::generate();
        hydrate(&mut grid, &rec);
        for pos in Position::all() {
            assert_eq!(grid.zone(pos), fresh.zone(pos));
        }
    }

    #[test]
    fn test_legacy_flags_clear_unvisited_lists() {
        let mut rec = record();
        rec.resources_harvested[0][4] = true;
        let mut grid = WorldGrid::generate();
        hydrate(&mut grid, &rec);
        let zone = grid.zone(Position::new(4, 0).unwrap());
        assert!(zone.resources.is_empty());
        assert!(zone.has_enemies());
    }

    #[test]
    fn test_snapshot_wins_over_legacy_flag() {
        let mut rec = record();
        let pos = Position::new(4, 0).unwrap();
        commit(&mut rec, pos, vec![IRON.to_string()], vec![]);
        // A stale flag that disagrees with the snapshot.
        rec.resources_harvested[0][4] = true;
        let mut grid = WorldGrid::generate();
        hydrate(&mut grid, &rec);
        assert_eq!(grid.zone(pos).resource_names(), vec![IRON]);
    }

    #[test]
    fn test_store_serializes_as_grid() {
        let store = SnapshotStore::new();
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json.as_array().unwrap().len(), GRID_SIZE);
        let back: SnapshotStore = serde_json::from_value(json).unwrap();
        assert_eq!(back, store);
        assert_eq!(back.visited_count(), 0);
        assert!(back.get_xy(5, 0).is_none());
    }
}
