use super::direction::Direction;
use super::food::place_food;
use super::snake::Snake;
use crate::rules::Rules;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::VecDeque;
use std::time::Duration;

/// A single game from the first move to a win or a loss.  Performs no I/O;
/// the caller decides when ticks happen and what to do with the outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Round {
    rules: Rules,
    snake: Snake,
    food: Position,
    score: u32,
    speed_ms: u32,
    status: GameStatus,
}

impl Round {
    pub(crate) fn new<R: Rng>(rules: Rules, rng: &mut R) -> Round {
        let bounds = rules.bounds();
        let snake = Snake::new(bounds.center());
        let food = place_food(rng, bounds, &snake.occupied());
        Round {
            rules,
            snake,
            food,
            score: 0,
            speed_ms: rules.speed.interval_ms(0),
            status: GameStatus::Playing,
        }
    }

    /// Ask for the snake to move in `direction` on the next tick.  Ignored
    /// if it would send the snake back the way it just came or if the round
    /// is over.
    pub(crate) fn request_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing && !self.snake.turn(direction) {
            log::trace!("Refused to turn {direction:?}");
        }
    }

    /// Move the snake one step and resolve food and collisions
    pub(crate) fn advance<R: Rng>(&mut self, rng: &mut R) -> Tick {
        if self.status.is_over() {
            return Tick {
                ate_food: false,
                status: self.status,
            };
        }
        let head = self.snake.slither(self.rules.bounds());
        let ate_food = head == self.food;
        if ate_food {
            self.eat(rng);
        } else {
            self.snake.drop_tail();
        }
        if self.status == GameStatus::Playing && self.snake.bit_itself() {
            log::debug!("Snake bit itself at {head:?} with score {}", self.score);
            self.status = GameStatus::Lost;
        }
        debug_assert!(
            self.status == GameStatus::Lost || !self.snake.body().contains(&self.food),
            "food should never be placed on the snake"
        );
        Tick {
            ate_food,
            status: self.status,
        }
    }

    fn eat<R: Rng>(&mut self, rng: &mut R) {
        self.score += 1;
        self.food = place_food(rng, self.rules.bounds(), &self.snake.occupied());
        if self.score == self.rules.max_score() {
            log::debug!("Reached maximum score {}", self.score);
            self.status = GameStatus::Won;
        } else {
            self.speed_ms = self.rules.speed.interval_ms(self.score);
            log::debug!("Ate food; score {}, speed {}ms", self.score, self.speed_ms);
        }
    }

    pub(crate) fn rules(&self) -> Rules {
        self.rules
    }

    pub(crate) fn body(&self) -> &VecDeque<Position> {
        self.snake.body()
    }

    pub(crate) fn head(&self) -> Position {
        self.snake.head()
    }

    pub(crate) fn head_symbol(&self) -> char {
        self.snake.head_symbol()
    }

    pub(crate) fn food(&self) -> Position {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn max_score(&self) -> u32 {
        self.rules.max_score()
    }

    pub(crate) fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// Time to wait between now and the next tick
    pub(crate) fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.speed_ms))
    }

    pub(crate) fn status(&self) -> GameStatus {
        self.status
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameStatus {
    Playing,
    Lost,
    Won,
}

impl GameStatus {
    pub(crate) fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

/// What happened during a call to [`Round::advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Tick {
    pub(crate) ate_food: bool,
    pub(crate) status: GameStatus,
}
