use crate::game::{Difficulty, SnakeColor};

/// Rows of the menu screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Color,
    Difficulty,
}

/// Cursor state for the menu screen: which row is focused and which color
/// and difficulty are currently picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSelection {
    pub row: MenuRow,
    pub color: SnakeColor,
    pub difficulty: Difficulty,
}

impl MenuSelection {
    pub fn new(color: SnakeColor, difficulty: Difficulty) -> Self {
        Self {
            row: MenuRow::Color,
            color,
            difficulty,
        }
    }

    pub fn move_up(&mut self) {
        self.row = MenuRow::Color;
    }

    pub fn move_down(&mut self) {
        self.row = MenuRow::Difficulty;
    }

    /// Cycle the focused row's value backward
    pub fn prev(&mut self) {
        match self.row {
            MenuRow::Color => self.color = cycle(&SnakeColor::ALL, self.color, -1),
            MenuRow::Difficulty => {
                self.difficulty = cycle(&Difficulty::ALL, self.difficulty, -1)
            }
        }
    }

    /// Cycle the focused row's value forward
    pub fn next(&mut self) {
        match self.row {
            MenuRow::Color => self.color = cycle(&SnakeColor::ALL, self.color, 1),
            MenuRow::Difficulty => self.difficulty = cycle(&Difficulty::ALL, self.difficulty, 1),
        }
    }
}

impl Default for MenuSelection {
    fn default() -> Self {
        Self::new(SnakeColor::Green, Difficulty::Medium)
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, step: isize) -> T {
    let index = options
        .iter()
        .position(|&option| option == current)
        .unwrap_or(0) as isize;
    let len = options.len() as isize;
    options[(index + step).rem_euclid(len) as usize]
}
