use super::{
    action::{Action, Direction},
    config::{GameConfig, LENGTH_PER_LEVEL, POINTS_PER_FOOD},
    state::{AdvanceOutcome, Food, GameState, Position, Snake},
};

/// Points awarded for eating food at the given level
pub fn score_for_level(level: u32) -> u32 {
    POINTS_PER_FOOD * level
}

/// What happened during one game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub outcome: AdvanceOutcome,
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the level rose this step (the tick rate should rise with it)
    pub leveled_up: bool,
}

impl StepReport {
    fn advanced(ate_food: bool, leveled_up: bool) -> Self {
        Self {
            outcome: AdvanceOutcome::Continue,
            ate_food,
            leveled_up,
        }
    }

    fn collided() -> Self {
        Self {
            outcome: AdvanceOutcome::SelfCollision,
            ate_food: false,
            leveled_up: false,
        }
    }
}

/// The game engine that applies the per-tick rules
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game: a single-segment snake at grid center facing
    /// right, food somewhere off the snake
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center, Direction::Right);
        let food = Food::spawn(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            snake.occupied(),
        );

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepReport {
        if !state.is_alive {
            return StepReport::collided();
        }

        if let Action::Turn(direction) = action {
            state.snake.request_turn(direction);
        }

        if state.snake.advance(state.grid_width, state.grid_height)
            == AdvanceOutcome::SelfCollision
        {
            state.is_alive = false;
            return StepReport::collided();
        }

        let ate_food = state.snake.head() == state.food.position;
        let mut leveled_up = false;

        if ate_food {
            state.snake.grow(1);
            state.snake.score += score_for_level(state.snake.level);

            if state.snake.target_length % LENGTH_PER_LEVEL == 0 {
                state.snake.level += 1;
                leveled_up = true;
            }

            state.food = Food::spawn(
                &mut self.rng,
                state.grid_width,
                state.grid_height,
                state.snake.occupied(),
            );
        }

        StepReport::advanced(ate_food, leveled_up)
    }
}
