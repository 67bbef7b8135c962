use std::collections::HashSet;

use rand::Rng;

use super::action::Direction;

/// A position on the toroidal game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, wrapping around the grid edges
    pub fn wrapped_by(&self, dx: i32, dy: i32, grid_width: usize, grid_height: usize) -> Self {
        Self {
            x: (self.x + dx).rem_euclid(grid_width as i32),
            y: (self.y + dy).rem_euclid(grid_height as i32),
        }
    }

    /// Move position one cell in a direction, wrapping around the grid edges
    pub fn wrapped_in_direction(
        &self,
        direction: Direction,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        let (dx, dy) = direction.delta();
        self.wrapped_by(dx, dy, grid_width, grid_height)
    }
}

/// Outcome of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The snake moved into a free cell
    Continue,
    /// The snake ran into its own body; state is untouched
    SelfCollision,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    segments: Vec<Position>,
    /// Cells currently covered by the body, for O(1) membership checks
    occupied: HashSet<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Length the body grows toward; the tail stops retracting until reached
    pub target_length: usize,
    pub score: u32,
    pub level: u32,
}

impl Snake {
    /// Create a new single-segment snake at the given position
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            segments: vec![head],
            occupied: HashSet::from([head]),
            direction,
            target_length: 1,
            score: 0,
            level: 1,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Body segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    /// Cells currently covered by the body
    pub fn occupied(&self) -> &HashSet<Position> {
        &self.occupied
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if a position lies on the body, excluding the head
    pub fn collides_with_body(&self, pos: Position) -> bool {
        pos != self.head() && self.occupied.contains(&pos)
    }

    /// Turn the snake; a 180-degree reversal is ignored
    ///
    /// The new direction takes effect on the next call to [`advance`](Self::advance).
    pub fn request_turn(&mut self, new_direction: Direction) {
        if !self.direction.is_opposite(new_direction) {
            self.direction = new_direction;
        }
    }

    /// Raise the target length; growth is realized over the following ticks
    pub fn grow(&mut self, amount: usize) {
        self.target_length += amount;
    }

    /// Move the snake one cell in its current direction
    ///
    /// Returns `SelfCollision` (leaving the body untouched) when the new head
    /// cell is already covered by the body. The tail cell counts as covered
    /// even though it vacates this same tick.
    pub fn advance(&mut self, grid_width: usize, grid_height: usize) -> AdvanceOutcome {
        let new_head = self
            .head()
            .wrapped_in_direction(self.direction, grid_width, grid_height);

        if self.collides_with_body(new_head) {
            return AdvanceOutcome::SelfCollision;
        }

        self.segments.insert(0, new_head);
        self.occupied.insert(new_head);

        if self.segments.len() > self.target_length {
            if let Some(tail) = self.segments.pop() {
                self.occupied.remove(&tail);
            }
        }

        AdvanceOutcome::Continue
    }
}

/// The food pellet; a new value replaces the old one on each consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Spawn food on a uniformly random cell outside `occupied`
    ///
    /// Rejection sampling with no retry cap; the grid is far larger than any
    /// reachable snake length.
    pub fn spawn<R: Rng>(
        rng: &mut R,
        grid_width: usize,
        grid_height: usize,
        occupied: &HashSet<Position>,
    ) -> Self {
        loop {
            let position = Position::new(
                rng.gen_range(0..grid_width) as i32,
                rng.gen_range(0..grid_height) as i32,
            );

            if !occupied.contains(&position) {
                return Self { position };
            }
        }
    }
}

/// Complete state of one game in progress
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid_width: usize,
    pub grid_height: usize,
    pub is_alive: bool,
}

impl GameState {
    pub fn new(snake: Snake, food: Food, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            is_alive: true,
        }
    }
}
