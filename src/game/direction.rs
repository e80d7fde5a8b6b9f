use super::grid::Bounds;
use crate::command::Command;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub(crate) fn from_command(cmd: Command) -> Option<Direction> {
        match cmd {
            Command::Up => Some(Direction::North),
            Command::Right => Some(Direction::East),
            Command::Down => Some(Direction::South),
            Command::Left => Some(Direction::West),
            _ => None,
        }
    }

    /// The unit vector for one step in this direction.  `y` grows downwards.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Return the cell one step from `pos` in this direction, wrapping around
    /// the edges of `bounds`
    pub(crate) fn advance(self, pos: Position, bounds: Bounds) -> Position {
        let (dx, dy) = self.delta();
        bounds.wrap(i32::from(pos.x) + dx, i32::from(pos.y) + dy)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
