mod direction;
mod food;
mod grid;
mod paused;
mod round;
mod snake;
pub(crate) use self::grid::Bounds;
use self::direction::Direction;
use self::paused::{PauseOpt, Paused};
use self::round::{GameStatus, Round};
use crate::app::Screen;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::sound::{SoundEffect, Speaker};
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use std::time::Instant;

/// The game screen: runs rounds back to back, feeding them ticks and
/// direction changes and drawing them
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    round: Round,
    state: GameState,
    config: Config,
    speaker: Speaker,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: Config) -> Self {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: Config, mut rng: R) -> Game<R> {
        let round = Round::new(config.game, &mut rng);
        Game {
            rng,
            round,
            state: GameState::Running,
            speaker: Speaker::new(config.interface),
            config,
            next_tick: None,
        }
    }

    /// Wait for either an input event or the next scheduled tick or restart,
    /// and handle whichever comes first
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        let deadline = match self.state {
            GameState::Running => {
                let when = self
                    .next_tick
                    .unwrap_or_else(|| Instant::now() + self.round.tick_interval());
                self.next_tick = Some(when);
                Some(when)
            }
            GameState::Paused(_) => None,
            GameState::Over { restart_at } => Some(restart_at),
        };
        if let Some(when) = deadline {
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                if self.running() {
                    self.next_tick = None;
                    self.advance();
                } else {
                    self.restart();
                }
                return Ok(None);
            }
        }
        Ok(self.handle_event(read()?))
    }

    fn advance(&mut self) {
        let tick = self.round.advance(&mut self.rng);
        if tick.ate_food {
            self.speaker.play(SoundEffect::FoodEaten);
        }
        match tick.status {
            GameStatus::Playing => (),
            GameStatus::Lost => {
                self.speaker.play(SoundEffect::GameLost);
                self.finish();
            }
            GameStatus::Won => self.finish(),
        }
    }

    fn finish(&mut self) {
        log::info!(
            "Game over: {:?} with score {}/{}",
            self.round.status(),
            self.round.score(),
            self.round.max_score()
        );
        self.state = GameState::Over {
            restart_at: Instant::now() + self.config.interface.restart_delay(),
        };
        self.next_tick = None;
    }

    /// Discard the current round and start a new one
    fn restart(&mut self) {
        log::info!("Starting a new game");
        self.round = Round::new(self.config.game, &mut self.rng);
        self.state = GameState::Running;
        self.next_tick = None;
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => {
                if event == Event::FocusLost {
                    self.pause();
                } else {
                    let cmd = Command::from_key_event(event.as_key_press_event()?)?;
                    if let Some(d) = Direction::from_command(cmd) {
                        self.round.request_direction(d);
                    } else if cmd == Command::Esc {
                        self.pause();
                    } else if cmd == Command::Quit {
                        return Some(Screen::Quit);
                    }
                }
            }
            GameState::Paused(ref mut paused) => {
                let cmd = Command::from_key_event(event.as_key_press_event()?)?;
                match paused.handle_command(cmd)? {
                    PauseOpt::Resume => {
                        log::debug!("Resuming");
                        self.state = GameState::Running;
                        self.next_tick = None;
                    }
                    PauseOpt::Restart => self.restart(),
                    PauseOpt::Quit => return Some(Screen::Quit),
                }
            }
            GameState::Over { .. } => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::R | Command::Enter => self.restart(),
                    Command::Quit | Command::Q => return Some(Screen::Quit),
                    _ => (),
                }
            }
        }
        None
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        log::debug!("Pausing");
        self.state = GameState::Paused(Paused::new());
    }

    /// Split the display area into the score bar, the field's border, and the
    /// two message lines below it
    fn layout(&self, area: Rect) -> [Rect; 4] {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let Size { width, height } = self.round.rules().bounds().size();
        let block_size = Size {
            width: width.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
            height: height.saturating_add(2),
        };
        let block_area = center_rect(block_area, block_size);
        [score_area, block_area, msg1_area, msg2_area]
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, block_area, msg1_area, msg2_area] = self.layout(area);
        Line::styled(
            format!(
                " Score: {}/{}  Speed: {}ms",
                self.round.score(),
                self.round.max_score(),
                self.round.speed_ms()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        DottedBorder.render(block_area, buf);
        let mut field = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            cell_width: consts::CELL_WIDTH,
            buf,
        };
        for &p in self.round.body().iter().skip(1) {
            field.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        field.draw_cell(self.round.food(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.round.status() == GameStatus::Lost {
            field.draw_cell(
                self.round.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            field.draw_cell(
                self.round.head(),
                self.round.head_symbol(),
                consts::SNAKE_STYLE,
            );
        }

        match self.state {
            GameState::Running => (),
            GameState::Paused(paused) => {
                let pause_area = center_rect(
                    get_display_area(area),
                    Size {
                        width: Paused::WIDTH,
                        height: Paused::HEIGHT,
                    },
                );
                paused.render(pause_area, buf);
            }
            GameState::Over { .. } => {
                if self.round.status() == GameStatus::Won {
                    Span::styled(" — YOU WIN! —", consts::WIN_STYLE).render(msg1_area, buf);
                } else {
                    Span::from(" — GAME OVER —").render(msg1_area, buf);
                }
                Line::from_iter([
                    Span::raw(" A new game starts shortly. Restart now ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(") — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

/// A view of a rectangle of a buffer in which each field cell is drawn
/// `cell_width` columns wide
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    cell_width: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let x = self
            .area
            .x
            .checked_add(pos.x.checked_mul(self.cell_width)?)?;
        let y = self.area.y.checked_add(pos.y)?;
        self.buf.cell_mut((x, y))
    }

    fn draw_char(&mut self, pos: Position, symbol: char) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// A border drawn with dotted lines, to show that the snake can pass through
/// it and come out the other side
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let mut canvas = Canvas {
            area,
            cell_width: 1,
            buf,
        };
        canvas.draw_char(Position::ORIGIN, '·');
        canvas.draw_char(Position::new(max_x, 0), '·');
        canvas.draw_char(Position::new(max_x, max_y), '·');
        canvas.draw_char(Position::new(0, max_y), '·');
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯');
            canvas.draw_char(Position::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(max_x, y), '⋮');
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused(Paused),
    /// The round has been won or lost; a new one starts at `restart_at`
    Over { restart_at: Instant },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn quiet_config(cells: u16) -> Config {
        let mut config = Config::default();
        config.game = Rules::default().with_cells(cells).unwrap();
        config.interface.bell = false;
        config
    }

    fn new_game(cells: u16) -> Game<ChaCha12Rng> {
        Game::new_with_rng(quiet_config(cells), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_owned()
    }

    fn field_cell(game: &Game<ChaCha12Rng>, area: Rect, pos: Position) -> (u16, u16) {
        let [_, block_area, _, _] = game.layout(area);
        let field = block_area.inner(Margin::new(1, 1));
        (field.x + pos.x * consts::CELL_WIDTH, field.y + pos.y)
    }

    #[test]
    fn draw_new_game() {
        let game = new_game(16);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        assert_eq!(row(&buffer, 0), " Score: 0/128  Speed: 180ms");
        let [_, block_area, _, _] = game.layout(area);
        assert_eq!(block_area.width, 34);
        assert_eq!(block_area.height, 18);
        assert_eq!(buffer[(block_area.x, block_area.y)].symbol(), "·");
        assert_eq!(buffer[(block_area.x + 1, block_area.y)].symbol(), "⋯");
        assert_eq!(buffer[(block_area.x, block_area.y + 1)].symbol(), "⋮");
        let head = field_cell(&game, area, Position::new(8, 8));
        assert_eq!(buffer[head].symbol(), "@");
        assert_eq!(buffer[head].fg, consts::SNAKE_STYLE.fg.unwrap());
        let food = field_cell(&game, area, game.round.food());
        assert_eq!(buffer[food].symbol(), "●");
        assert_eq!(row(&buffer, 22), "");
    }

    #[test]
    fn steer_and_move() {
        let mut game = new_game(16);
        assert!(game.handle_event(key(KeyCode::Right)).is_none());
        assert!(game.handle_event(key(KeyCode::Char('x'))).is_none());
        game.advance();
        assert!(game.running());
        assert_eq!(game.round.head(), Position::new(9, 8));
        assert!(game.handle_event(key(KeyCode::Left)).is_none());
        assert!(game.handle_event(key(KeyCode::Char('w'))).is_none());
        game.advance();
        assert_eq!(game.round.head(), Position::new(9, 7));
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let head = field_cell(&game, area, Position::new(9, 7));
        assert_eq!(buffer[head].symbol(), "v");
    }

    #[test]
    fn pause_and_resume() {
        let mut game = new_game(16);
        assert!(game.handle_event(key(KeyCode::Esc)).is_none());
        assert!(matches!(game.state, GameState::Paused(_)));
        // Movement keys navigate the menu instead of steering.
        assert!(game.handle_event(key(KeyCode::Up)).is_none());
        assert!(matches!(game.state, GameState::Paused(_)));
        assert!(game.handle_event(key(KeyCode::Esc)).is_none());
        assert!(game.running());
        assert_eq!(game.next_tick, None);
        assert!(game.handle_event(Event::FocusLost).is_none());
        assert!(matches!(game.state, GameState::Paused(_)));
        assert!(matches!(
            game.handle_event(key(KeyCode::Char('q'))),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn restart_from_pause_menu() {
        let mut game = new_game(16);
        assert!(game.handle_event(key(KeyCode::Up)).is_none());
        game.advance();
        assert_ne!(game.round.head(), Position::new(8, 8));
        assert!(game.handle_event(key(KeyCode::Esc)).is_none());
        assert!(game.handle_event(key(KeyCode::Down)).is_none());
        assert!(game.handle_event(key(KeyCode::Enter)).is_none());
        assert!(game.running());
        assert_eq!(game.round.head(), Position::new(8, 8));
        assert_eq!(game.round.body().len(), 1);
    }

    #[test]
    fn game_over_then_restart() {
        let mut game = new_game(16);
        game.finish();
        assert!(matches!(game.state, GameState::Over { .. }));
        // Steering is ignored once the game is over.
        assert!(game.handle_event(key(KeyCode::Right)).is_none());
        assert!(matches!(game.state, GameState::Over { .. }));
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        assert_eq!(row(&buffer, 22), " — GAME OVER —");
        assert_eq!(
            row(&buffer, 23),
            " A new game starts shortly. Restart now (r) — Quit (q)"
        );
        assert!(game.handle_event(key(KeyCode::Char('r'))).is_none());
        assert!(game.running());
        assert_eq!(game.round.score(), 0);
    }

    #[test]
    fn quit_anywhere() {
        let mut game = new_game(16);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(game.handle_event(ctrl_c.clone()), Some(Screen::Quit)));
        game.finish();
        assert!(matches!(game.handle_event(ctrl_c), Some(Screen::Quit)));
    }

    #[test]
    fn largest_field_fits() {
        let game = new_game(Rules::MAX_CELLS);
        let area = Rect::new(0, 0, 80, 24);
        let [score_area, block_area, msg1_area, _] = game.layout(area);
        assert_eq!(block_area.height, Rules::MAX_CELLS + 2);
        assert!(block_area.y > score_area.y);
        assert!(block_area.bottom() <= msg1_area.y);
    }
}
