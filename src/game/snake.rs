use super::direction::Direction;
use super::grid::Bounds;
use crate::consts;
use ratatui::layout::Position;
use std::collections::{HashSet, VecDeque};

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the cells in the snake, head first.  Never
    /// empty.
    pub(super) body: VecDeque<Position>,

    /// The direction the snake will move in on the next step, if it has been
    /// told to move at all
    pub(super) heading: Option<Direction>,

    /// The direction of the most recent step actually taken
    pub(super) last_step: Option<Direction>,
}

impl Snake {
    /// Create a stationary one-cell snake at `head`
    pub(super) fn new(head: Position) -> Snake {
        Snake {
            body: VecDeque::from([head]),
            heading: None,
            last_step: None,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        *self.body.front().expect("snake body should never be empty")
    }

    /// Return the positions of the cells in the snake, head first
    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub(super) fn occupied(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.heading {
            Some(Direction::North) => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Some(Direction::South) => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Some(Direction::East) => consts::SNAKE_HEAD_EAST_SYMBOL,
            Some(Direction::West) => consts::SNAKE_HEAD_WEST_SYMBOL,
            None => consts::SNAKE_HEAD_IDLE_SYMBOL,
        }
    }

    /// Point the snake in `direction` for its next step.  Turning back onto
    /// the direction of the last step taken is refused, no matter how many
    /// turns have been requested since then.  Returns whether the turn was
    /// accepted.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if self.last_step.map(Direction::reverse) == Some(direction) {
            return false;
        }
        self.heading = Some(direction);
        true
    }

    /// Push a new head one cell forwards in the current heading, wrapping
    /// around `bounds`.  The tail is left in place; call
    /// [`Snake::drop_tail()`] unless the snake is growing.
    pub(super) fn slither(&mut self, bounds: Bounds) -> Position {
        let head = self.head();
        let new_head = match self.heading {
            Some(d) => d.advance(head, bounds),
            None => head,
        };
        self.body.push_front(new_head);
        self.last_step = self.heading;
        new_head
    }

    pub(super) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Test whether the head has run into the rest of the body.  The two
    /// cells right behind the head can never be hit by a single step and are
    /// not considered.
    pub(super) fn bit_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(3).any(|&p| p == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        width: 10,
        height: 10,
    };

    #[test]
    fn idle_snake_stays_put() {
        let mut snake = Snake::new(Position::new(5, 5));
        assert_eq!(snake.slither(BOUNDS), Position::new(5, 5));
        snake.drop_tail();
        assert_eq!(snake.body(), &VecDeque::from([Position::new(5, 5)]));
        assert_eq!(snake.head_symbol(), consts::SNAKE_HEAD_IDLE_SYMBOL);
    }

    #[test]
    fn no_turning_back() {
        let mut snake = Snake::new(Position::new(5, 5));
        assert!(snake.turn(Direction::East));
        let _ = snake.slither(BOUNDS);
        snake.drop_tail();
        assert!(!snake.turn(Direction::West));
        assert_eq!(snake.heading, Some(Direction::East));
        assert!(snake.turn(Direction::North));
        // West is still the reverse of the last step taken, even though the
        // snake is now heading north.
        assert!(!snake.turn(Direction::West));
        assert_eq!(snake.heading, Some(Direction::North));
        assert!(snake.turn(Direction::South));
        assert_eq!(snake.heading, Some(Direction::South));
        let _ = snake.slither(BOUNDS);
        snake.drop_tail();
        assert_eq!(snake.head(), Position::new(6, 6));
        assert!(snake.turn(Direction::West));
    }

    #[test]
    fn any_first_turn() {
        let mut snake = Snake::new(Position::new(5, 5));
        assert!(snake.turn(Direction::West));
        assert!(snake.turn(Direction::East));
        assert_eq!(snake.heading, Some(Direction::East));
    }

    #[test]
    fn bite_past_the_neck() {
        let mut snake = Snake {
            body: VecDeque::from([
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
                Position::new(4, 6),
            ]),
            heading: Some(Direction::West),
            last_step: Some(Direction::West),
        };
        assert!(snake.turn(Direction::South));
        assert_eq!(snake.slither(BOUNDS), Position::new(5, 6));
        snake.drop_tail();
        assert!(snake.bit_itself());
    }

    #[test]
    fn chase_own_tail() {
        let mut snake = Snake {
            body: VecDeque::from([
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
            ]),
            heading: Some(Direction::West),
            last_step: Some(Direction::West),
        };
        assert!(snake.turn(Direction::South));
        let _ = snake.slither(BOUNDS);
        snake.drop_tail();
        assert!(!snake.bit_itself());
        assert_eq!(snake.body().len(), 4);
    }
}
