use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Screen};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Turn the snake (playing only)
    Turn(Direction),
    /// Toggle the pause state
    TogglePause,
    /// Start or restart a game (menu and game-over screens)
    Start,
    /// Return to the menu (game-over screen)
    ToMenu,
    /// Move the menu cursor between rows
    MenuUp,
    MenuDown,
    /// Cycle the value under the menu cursor
    MenuPrev,
    MenuNext,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to an action; the same key can mean different things
    /// on different screens
    pub fn handle_key_event(&self, key: KeyEvent, screen: Screen) -> KeyAction {
        // Ctrl+C quits everywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Playing => self.handle_playing_key(key.code),
            Screen::Paused => self.handle_paused_key(key.code),
            Screen::GameOver => self.handle_game_over_key(key.code),
        }
    }

    fn handle_menu_key(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::MenuUp,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::MenuDown,
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::MenuPrev,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::MenuNext,
            KeyCode::Enter => KeyAction::Start,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_playing_key(&self, code: KeyCode) -> KeyAction {
        match code {
            // Movement - arrow keys
            KeyCode::Up => KeyAction::Turn(Direction::Up),
            KeyCode::Down => KeyAction::Turn(Direction::Down),
            KeyCode::Left => KeyAction::Turn(Direction::Left),
            KeyCode::Right => KeyAction::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Turn(Direction::Right),

            KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::TogglePause,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    fn handle_paused_key(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::TogglePause,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_game_over_key(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => KeyAction::Start,
            KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::ToMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
