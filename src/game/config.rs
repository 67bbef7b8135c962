use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Grid is fixed at 40x30 cells (an 800x600 window of 20px cells)
pub const GRID_WIDTH: usize = 40;
pub const GRID_HEIGHT: usize = 30;

/// Ticks/second added on every level-up
pub const SPEED_STEP: u32 = 2;

/// Points awarded per food at level 1
pub const POINTS_PER_FOOD: u32 = 10;

/// Every time the target length reaches a multiple of this, the level rises
pub const LENGTH_PER_LEVEL: usize = 3;

/// Difficulty presets, setting the starting tick rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Base tick rate for this difficulty
    pub fn ticks_per_sec(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 25,
            Difficulty::Expert => 40,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];
}

/// Display colors selectable for the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SnakeColor {
    Green,
    Red,
    Blue,
    Yellow,
    Purple,
    Cyan,
}

impl SnakeColor {
    pub fn name(&self) -> &'static str {
        match self {
            SnakeColor::Green => "Green",
            SnakeColor::Red => "Red",
            SnakeColor::Blue => "Blue",
            SnakeColor::Yellow => "Yellow",
            SnakeColor::Purple => "Purple",
            SnakeColor::Cyan => "Cyan",
        }
    }

    pub const ALL: [SnakeColor; 6] = [
        SnakeColor::Green,
        SnakeColor::Red,
        SnakeColor::Blue,
        SnakeColor::Yellow,
        SnakeColor::Purple,
        SnakeColor::Cyan,
    ];
}

/// Configuration for one game
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub difficulty: Difficulty,
    pub color: SnakeColor,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            difficulty: Difficulty::Medium,
            color: SnakeColor::Green,
        }
    }
}

impl GameConfig {
    pub fn new(difficulty: Difficulty, color: SnakeColor) -> Self {
        Self {
            difficulty,
            color,
            ..Default::default()
        }
    }
}
