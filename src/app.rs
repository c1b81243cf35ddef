use color_eyre::Result;
use ratatui::{Terminal, backend::Backend};
use std::time::Instant;

use crate::audio::{AudioSink, Clip};
use crate::clock::Clock;
use crate::game::{Game, GameEvent};
use crate::input::{InputAction, InputRouter, InputSource};
use crate::renderer::{GameRenderer, RenderView};

/// The main application which wires the game to its collaborators
pub struct App {
    running: bool,
    game: Game,
    frame_count: u64,
    /// The theme plays once, after the first frame is on screen
    theme_played: bool,
    /// internal components
    router: InputRouter,
    input: Box<dyn InputSource>,
    renderer: GameRenderer,
    audio: Box<dyn AudioSink>,
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(
        game: Game,
        input: Box<dyn InputSource>,
        audio: Box<dyn AudioSink>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let renderer = GameRenderer::new(game.settings());
        Self {
            running: true,
            game,
            frame_count: 0,
            theme_played: false,
            router: InputRouter::new(),
            input,
            renderer,
            audio,
            clock,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.running {
            self.step(terminal)?;
            self.clock.tick();
        }
        log::info!("quitting after {} frames", self.frame_count);
        Ok(())
    }

    /// One frame: input, update, render
    pub fn step<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        // Input stays queued while the post-hit pause is running
        if !self.game.is_paused() {
            let events = self.input.poll_events()?;
            let actions = self.router.route_all(&events);
            self.process_actions(&actions);
        }

        let events = self.game.tick(Instant::now());
        self.log_events(&events);
        self.frame_count += 1;

        let snapshot = self.game.snapshot();
        terminal.draw(|frame| {
            let view = RenderView {
                snapshot: &snapshot,
                frame_count: self.frame_count,
            };
            self.renderer.render(frame, &view);
        })?;

        if !self.theme_played {
            self.theme_played = true;
            self.audio.play_blocking(Clip::Theme);
        }

        Ok(())
    }

    /// Process input actions and update game state accordingly
    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::MoveLeft(moving) => {
                    self.game.set_moving_left(*moving);
                }
                InputAction::MoveRight(moving) => {
                    self.game.set_moving_right(*moving);
                }
                InputAction::Fire => {
                    if self.game.fire().is_some() {
                        self.audio.play_once(Clip::Firing);
                    }
                }
            }
        }
    }

    fn log_events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::ShipHit { ships_left } => {
                    log::info!("frame {}: ship hit, {} ships left", self.frame_count, ships_left)
                }
                GameEvent::GameOver => log::info!("frame {}: game over", self.frame_count),
                GameEvent::FleetRespawned { aliens } => {
                    log::info!("frame {}: new fleet of {} aliens", self.frame_count, aliens)
                }
                other => log::debug!("frame {}: {:?}", self.frame_count, other),
            }
        }
    }
}
