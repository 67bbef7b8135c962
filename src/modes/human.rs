use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::{AudioEvent, AudioSink};
use crate::game::{Difficulty, GameConfig, Screen, Session, SnakeColor};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::modes::{MenuSelection, TickClock};
use crate::render::Renderer;

/// Interactive keyboard-driven play
pub struct HumanMode {
    session: Session,
    menu: MenuSelection,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: Box<dyn AudioSink>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(color: SnakeColor, difficulty: Difficulty, audio: Box<dyn AudioSink>) -> Self {
        Self {
            session: Session::new(GameConfig::new(difficulty, color)),
            menu: MenuSelection::new(color, difficulty),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game ticks at the difficulty's rate; level-ups raise it.
        let mut tick_clock = TickClock::new(self.session.speed());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_clock.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session, &self.menu, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // Keep the clock in step with the session's speed, whether it
            // changed through a level-up or a restart.
            tick_clock.set_rate(self.session.speed());

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key, self.session.screen());
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => self.session.queue_turn(direction),
            KeyAction::TogglePause => self.session.toggle_pause(),
            KeyAction::Start => self.start_game(),
            KeyAction::ToMenu => self.session.to_menu(),
            KeyAction::MenuUp => self.menu.move_up(),
            KeyAction::MenuDown => self.menu.move_down(),
            KeyAction::MenuPrev => self.menu.prev(),
            KeyAction::MenuNext => self.menu.next(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn start_game(&mut self) {
        if self.session.screen() == Screen::Menu {
            self.session.set_options(self.menu.color, self.menu.difficulty);
        }
        self.session.start();
        self.metrics.on_game_start();
    }

    fn update_game(&mut self) {
        let report = self.session.tick();

        if report.ate_food {
            self.audio.play(AudioEvent::Food);
        }

        if report.game_over {
            self.audio.play(AudioEvent::GameOver);
            let snake = &self.session.state().snake;
            self.metrics.on_game_over(snake.score, snake.level);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
