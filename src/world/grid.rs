use crate::character::CharacterRecord;
use crate::constants::GRID_SIZE;
use crate::zones::{generate, Zone};

use super::position::{Direction, Position};
use super::snapshot::hydrate;

/// The session's 5x5 world plus where the player stands.
#[derive(Debug, Clone)]
pub struct WorldGrid {
    // Row-major, index = y * GRID_SIZE + x.
    zones: Vec<Zone>,
    position: Position,
}

impl WorldGrid {
    /// Fresh grid straight from the generator, player at the hub.
    pub fn generate() -> Self {
        Self {
            zones: Position::all().map(generate).collect(),
            position: Position::hub(),
        }
    }

    /// Rebuilds the grid a saved character left behind.
    pub fn restore(record: &CharacterRecord) -> Self {
        let mut grid = Self::generate();
        grid.position = record.position;
        for pos in Position::all() {
            if record.is_discovered(pos.x(), pos.y()) {
                grid.zone_mut(pos).visited = true;
            }
        }
        hydrate(&mut grid, record);
        grid
    }

    fn index(pos: Position) -> usize {
        pos.y() * GRID_SIZE + pos.x()
    }

    pub fn zone(&self, pos: Position) -> &Zone {
        &self.zones[Self::index(pos)]
    }

    pub fn zone_mut(&mut self, pos: Position) -> &mut Zone {
        &mut self.zones[Self::index(pos)]
    }

    pub fn zone_at(&self, x: i32, y: i32) -> Option<&Zone> {
        Position::new(x, y).map(|pos| self.zone(pos))
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn current_zone(&self) -> &Zone {
        self.zone(self.position)
    }

    pub fn current_zone_mut(&mut self) -> &mut Zone {
        self.zone_mut(self.position)
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        self.position.step(direction).is_some()
    }

    /// Moves the player one cell. Off-grid moves leave everything unchanged
    /// and return `None`.
    pub fn move_player(
        &mut self,
        direction: Direction,
        record: &mut CharacterRecord,
    ) -> Option<Position> {
        let target = self.position.step(direction)?;
        self.position = target;
        self.zone_mut(target).visited = true;
        record.position = target;
        record.discover(target);
        Some(target)
    }

    /// Text map, one line per row. `@` marks the player, `?` an undiscovered cell.
    pub fn map_lines(&self, record: &CharacterRecord) -> Vec<String> {
        (0..GRID_SIZE)
            .map(|y| {
                (0..GRID_SIZE)
                    .map(|x| {
                        if x == self.position.x() && y == self.position.y() {
                            '@'
                        } else if record.is_discovered(x, y) {
                            self.zones[y * GRID_SIZE + x].biome.symbol()
                        } else {
                            '?'
                        }
                    })
                    .map(|c| format!("[{}]", c))
                    .collect::<String>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::Biome;

    #[test]
    fn test_generate_starts_at_hub() {
        let grid = WorldGrid::generate();
        assert!(grid.position().is_hub());
        assert_eq!(grid.current_zone().biome, Biome::Hub);
    }

    #[test]
    fn test_zone_at_bounds() {
        let grid = WorldGrid::generate();
        assert!(grid.zone_at(0, 0).is_some());
        assert!(grid.zone_at(-1, 0).is_none());
        assert!(grid.zone_at(0, 5).is_none());
    }

    #[test]
    fn test_move_updates_record() {
        let mut record = CharacterRecord::new("Walker", "Mage").unwrap();
        let mut grid = WorldGrid::generate();
        let target = grid.move_player(Direction::North, &mut record).unwrap();
        assert_eq!(target, Position::new(2, 1).unwrap());
        assert_eq!(record.position, target);
        assert!(record.is_discovered(2, 1));
        assert!(grid.current_zone().visited);
    }

    #[test]
    fn test_move_off_edge_rejected() {
        let mut record = CharacterRecord::new("Walker", "Mage").unwrap();
        let mut grid = WorldGrid::generate();
        grid.move_player(Direction::North, &mut record);
        grid.move_player(Direction::North, &mut record);
        assert!(!grid.can_move(Direction::North));
        assert!(grid.move_player(Direction::North, &mut record).is_none());
        assert_eq!(record.position, Position::new(2, 0).unwrap());
    }

    #[test]
    fn test_restore_uses_record_position_and_discovery() {
        let mut record = CharacterRecord::new("Walker", "Mage").unwrap();
        let pos = Position::new(4, 4).unwrap();
        record.position = pos;
        record.discover(pos);
        let grid = WorldGrid::restore(&record);
        assert_eq!(grid.position(), pos);
        assert!(grid.zone(pos).visited);
        assert!(!grid.zone(Position::new(0, 0).unwrap()).visited);
    }

    #[test]
    fn test_map_lines() {
        let record = CharacterRecord::new("Walker", "Mage").unwrap();
        let grid = WorldGrid::generate();
        let lines = grid.map_lines(&record);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "[?][?][@][?][?]");
        assert_eq!(lines[0], "[?][?][?][?][?]");
    }
}
