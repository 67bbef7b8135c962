use super::{
    action::{Action, Direction},
    config::{Difficulty, GameConfig, SnakeColor, SPEED_STEP},
    engine::GameEngine,
    state::{AdvanceOutcome, GameState},
};

/// Which screen the player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// What one tick produced, for the caller to fan out to audio and metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub ate_food: bool,
    pub game_over: bool,
    /// The tick rate changed; the caller's clock should be re-armed
    pub speed_changed: bool,
}

/// One play session: the screen state machine wrapped around the engine
///
/// Holds no terminal or timer state, so the whole machine runs headless.
pub struct Session {
    engine: GameEngine,
    state: GameState,
    screen: Screen,
    /// Current tick rate in ticks/second; rises with the level
    speed: u32,
    queued_turn: Option<Direction>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        let speed = config.difficulty.ticks_per_sec();

        Self {
            engine,
            state,
            screen: Screen::Menu,
            speed,
            queued_turn: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Adopt menu choices; only meaningful on the menu screen
    pub fn set_options(&mut self, color: SnakeColor, difficulty: Difficulty) {
        if self.screen != Screen::Menu {
            return;
        }
        let config = GameConfig {
            color,
            difficulty,
            ..*self.engine.config()
        };
        self.engine = GameEngine::new(config);
        self.state = self.engine.reset();
        self.speed = difficulty.ticks_per_sec();
    }

    /// Start a fresh game from the menu or game-over screen
    ///
    /// A full reinitialization: snake, food, score, level, and speed all
    /// return to their starting values.
    pub fn start(&mut self) {
        if self.screen == Screen::Playing || self.screen == Screen::Paused {
            return;
        }
        self.state = self.engine.reset();
        self.speed = self.engine.config().difficulty.ticks_per_sec();
        self.queued_turn = None;
        self.screen = Screen::Playing;
    }

    /// Escape toggles between playing and paused; ticking stops while paused
    pub fn toggle_pause(&mut self) {
        self.screen = match self.screen {
            Screen::Playing => Screen::Paused,
            Screen::Paused => Screen::Playing,
            other => other,
        };
    }

    /// Return to the menu from the game-over screen
    pub fn to_menu(&mut self) {
        if self.screen == Screen::GameOver {
            self.screen = Screen::Menu;
        }
    }

    /// Queue a turn for the next tick; the last request before a tick wins
    pub fn queue_turn(&mut self, direction: Direction) {
        if self.screen == Screen::Playing {
            self.queued_turn = Some(direction);
        }
    }

    /// Advance the game by one tick
    ///
    /// A no-op unless playing. Applies the queued turn, advances the snake,
    /// and handles food, scoring, level, and speed.
    pub fn tick(&mut self) -> TickReport {
        if self.screen != Screen::Playing {
            return TickReport::default();
        }

        let action = self.queued_turn.take().map(Action::Turn).unwrap_or(Action::Continue);
        let report = self.engine.step(&mut self.state, action);

        if report.outcome == AdvanceOutcome::SelfCollision {
            self.screen = Screen::GameOver;
            return TickReport {
                game_over: true,
                ..TickReport::default()
            };
        }

        if report.leveled_up {
            self.speed += SPEED_STEP;
        }

        TickReport {
            ate_food: report.ate_food,
            game_over: false,
            speed_changed: report.leveled_up,
        }
    }

    /// Mutable state access for tests that stage food placement
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Queue a turn and tick in one call; test helper
    #[cfg(test)]
    fn tick_report(&mut self, direction: Option<Direction>) -> TickReport {
        if let Some(direction) = direction {
            self.queue_turn(direction);
        }
        self.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::{Food, Position};

    fn playing_session() -> Session {
        let mut session = Session::new(GameConfig::default());
        session.start();
        // Park the food away from the default straight path.
        session.state.food = Food {
            position: Position::new(0, 0),
        };
        session
    }

    #[test]
    fn test_starts_on_menu() {
        let session = Session::new(GameConfig::default());
        assert_eq!(session.screen(), Screen::Menu);
    }

    #[test]
    fn test_menu_start_resets_and_plays() {
        let mut session = Session::new(GameConfig::default());
        session.start();

        assert_eq!(session.screen(), Screen::Playing);
        assert_eq!(session.state().snake.len(), 1);
        assert_eq!(session.state().snake.head(), Position::new(20, 15));
        assert_eq!(session.speed(), 15);
    }

    #[test]
    fn test_tick_is_noop_outside_playing() {
        let mut session = Session::new(GameConfig::default());
        let head_before = session.state().snake.head();

        assert_eq!(session.tick(), TickReport::default());
        assert_eq!(session.state().snake.head(), head_before);
    }

    #[test]
    fn test_pause_freezes_ticking() {
        let mut session = playing_session();
        session.tick();
        let frozen = session.state().clone();

        session.toggle_pause();
        assert_eq!(session.screen(), Screen::Paused);
        assert_eq!(session.tick(), TickReport::default());
        assert_eq!(session.state(), &frozen);

        session.toggle_pause();
        assert_eq!(session.screen(), Screen::Playing);
        session.tick();
        assert_ne!(session.state().snake.head(), frozen.snake.head());
    }

    #[test]
    fn test_pause_toggle_ignored_on_menu_and_game_over() {
        let mut session = Session::new(GameConfig::default());
        session.toggle_pause();
        assert_eq!(session.screen(), Screen::Menu);
    }

    #[test]
    fn test_queued_turn_applies_on_tick() {
        let mut session = playing_session();
        session.queue_turn(Direction::Down);
        session.tick();
        assert_eq!(session.state().snake.head(), Position::new(20, 16));
    }

    #[test]
    fn test_turns_ignored_while_paused() {
        let mut session = playing_session();
        session.toggle_pause();
        session.queue_turn(Direction::Down);
        session.toggle_pause();
        session.tick();
        // The turn queued while paused was dropped.
        assert_eq!(session.state().snake.head(), Position::new(21, 15));
    }

    fn eat_pellets(session: &mut Session, count: usize) {
        for _ in 0..count {
            let state = session.state().clone();
            session.state.food = Food {
                position: state.snake.head().wrapped_in_direction(
                    state.snake.direction,
                    state.grid_width,
                    state.grid_height,
                ),
            };
            let report = session.tick();
            assert!(report.ate_food);
        }
    }

    #[test]
    fn test_level_up_raises_speed() {
        let mut session = playing_session();
        let base = session.speed();

        eat_pellets(&mut session, 2); // target length 3: level up
        assert_eq!(session.speed(), base + SPEED_STEP);

        eat_pellets(&mut session, 3); // target length 6: another
        assert_eq!(session.speed(), base + 2 * SPEED_STEP);
    }

    #[test]
    fn test_speed_change_reported() {
        let mut session = playing_session();
        eat_pellets(&mut session, 1);

        session.state.food = Food {
            position: Position::new(session.state().snake.head().x + 1, 15),
        };
        let report = session.tick();
        assert!(report.ate_food);
        assert!(report.speed_changed);
    }

    fn drive_to_game_over(session: &mut Session) {
        eat_pellets(session, 4);
        session.tick_report(Some(Direction::Down));
        session.tick_report(Some(Direction::Left));
        let report = session.tick_report(Some(Direction::Up));
        assert!(report.game_over);
    }

    #[test]
    fn test_self_collision_transitions_to_game_over() {
        let mut session = playing_session();
        drive_to_game_over(&mut session);
        assert_eq!(session.screen(), Screen::GameOver);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut session = playing_session();
        drive_to_game_over(&mut session);
        let base = session.config().difficulty.ticks_per_sec();

        session.start();
        assert_eq!(session.screen(), Screen::Playing);
        assert_eq!(session.state().snake.len(), 1);
        assert_eq!(session.state().snake.score, 0);
        assert_eq!(session.state().snake.level, 1);
        assert_eq!(session.speed(), base);
    }

    #[test]
    fn test_game_over_to_menu() {
        let mut session = playing_session();
        drive_to_game_over(&mut session);
        session.to_menu();
        assert_eq!(session.screen(), Screen::Menu);
    }

    #[test]
    fn test_to_menu_only_from_game_over() {
        let mut session = playing_session();
        session.to_menu();
        assert_eq!(session.screen(), Screen::Playing);
    }

    #[test]
    fn test_set_options_only_on_menu() {
        let mut session = Session::new(GameConfig::default());
        session.set_options(SnakeColor::Red, Difficulty::Expert);
        assert_eq!(session.config().color, SnakeColor::Red);
        assert_eq!(session.speed(), 40);

        session.start();
        session.set_options(SnakeColor::Blue, Difficulty::Easy);
        assert_eq!(session.config().color, SnakeColor::Red);
    }
}
