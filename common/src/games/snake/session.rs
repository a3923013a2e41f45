use crate::games::SessionRng;
use crate::log;
use super::engine::{EngineConfig, SimulationEngine};
use super::settings::{Settings, SettingsStore};
use super::snapshot::{StepResult, WorldSnapshot};
use super::types::{DeathReason, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Start,
    OpenSettings,
    Back,
    Quit,
    ToggleWalls,
    SpeedUp,
    SpeedDown,
    Restart,
    ToMenu,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStateKind {
    MainMenu,
    Settings,
    Playing,
    GameOver,
}

enum SessionState {
    MainMenu,
    Settings,
    Playing {
        engine: Box<SimulationEngine>,
        pending_direction: Option<Direction>,
    },
    GameOver {
        reason: DeathReason,
        final_snapshot: WorldSnapshot,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Handled,
    Ignored,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Continue(WorldSnapshot),
    GameOver {
        reason: DeathReason,
        snapshot: WorldSnapshot,
    },
}

/// Menu, settings and game-over flow around the simulation.
///
/// Owns the persisted [`Settings`] and creates a fresh [`SimulationEngine`]
/// for every game; the engine is dropped when the game ends or is abandoned.
pub struct SessionController<S: SettingsStore> {
    store: S,
    settings: Settings,
    state: SessionState,
    rng: SessionRng,
}

impl<S: SettingsStore> SessionController<S> {
    pub fn new(store: S, rng: SessionRng) -> Self {
        let settings = store.load_settings();
        log!(
            "Settings loaded: walls {}, speed {}, high score {}",
            if settings.walls_enabled { "on" } else { "off" },
            settings.speed,
            settings.high_score
        );
        Self {
            store,
            settings,
            state: SessionState::MainMenu,
            rng,
        }
    }

    pub fn state(&self) -> SessionStateKind {
        match self.state {
            SessionState::MainMenu => SessionStateKind::MainMenu,
            SessionState::Settings => SessionStateKind::Settings,
            SessionState::Playing { .. } => SessionStateKind::Playing,
            SessionState::GameOver { .. } => SessionStateKind::GameOver,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ticks per second the shell should drive `tick` at right now.
    pub fn tick_rate(&self) -> u32 {
        match &self.state {
            SessionState::Playing { engine, .. } => engine.speed(),
            _ => self.settings.speed,
        }
    }

    /// Current picture of the game: the live world while playing, the final one after game over.
    pub fn snapshot(&self) -> Option<WorldSnapshot> {
        match &self.state {
            SessionState::Playing { engine, .. } => Some(engine.snapshot()),
            SessionState::GameOver { final_snapshot, .. } => Some(final_snapshot.clone()),
            SessionState::MainMenu | SessionState::Settings => None,
        }
    }

    pub fn game_over_reason(&self) -> Option<DeathReason> {
        match self.state {
            SessionState::GameOver { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Buffers a turn for the next tick. Only the latest turn before a tick counts.
    pub fn handle_direction(&mut self, direction: Direction) -> CommandOutcome {
        match &mut self.state {
            SessionState::Playing {
                pending_direction, ..
            } => {
                *pending_direction = Some(direction);
                CommandOutcome::Handled
            }
            _ => CommandOutcome::Ignored,
        }
    }

    pub fn handle_menu_command(&mut self, command: MenuCommand) -> CommandOutcome {
        if command == MenuCommand::Quit {
            self.persist_settings();
            return CommandOutcome::Quit;
        }

        match (self.state(), command) {
            (SessionStateKind::MainMenu, MenuCommand::Start)
            | (SessionStateKind::GameOver, MenuCommand::Restart) => {
                self.start_game();
            }
            (SessionStateKind::MainMenu, MenuCommand::OpenSettings) => {
                self.state = SessionState::Settings;
            }
            (SessionStateKind::Settings, MenuCommand::Back | MenuCommand::Cancel) => {
                self.persist_settings();
                self.state = SessionState::MainMenu;
            }
            (SessionStateKind::Settings, MenuCommand::ToggleWalls) => self.settings.toggle_walls(),
            (SessionStateKind::Settings, MenuCommand::SpeedUp) => self.settings.increase_speed(),
            (SessionStateKind::Settings, MenuCommand::SpeedDown) => self.settings.decrease_speed(),
            (SessionStateKind::Playing, MenuCommand::Cancel)
            | (SessionStateKind::GameOver, MenuCommand::ToMenu) => {
                self.state = SessionState::MainMenu;
            }
            _ => return CommandOutcome::Ignored,
        }

        CommandOutcome::Handled
    }

    /// Advances the running game by one step. Returns `None` outside of `Playing`.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        let SessionState::Playing {
            engine,
            pending_direction,
        } = &mut self.state
        else {
            return None;
        };

        match engine.step(pending_direction.take()) {
            StepResult::Continue { snapshot, events } => {
                if events.new_high_score {
                    self.settings.high_score = snapshot.stats.high_score;
                    self.persist_settings();
                }
                Some(TickOutcome::Continue(snapshot))
            }
            StepResult::GameOver { reason, snapshot } => {
                self.state = SessionState::GameOver {
                    reason,
                    final_snapshot: snapshot.clone(),
                };
                Some(TickOutcome::GameOver { reason, snapshot })
            }
        }
    }

    fn start_game(&mut self) {
        let engine = SimulationEngine::new(EngineConfig::from_settings(&self.settings), self.rng.fork());
        self.state = SessionState::Playing {
            engine: Box::new(engine),
            pending_direction: None,
        };
    }

    fn persist_settings(&self) {
        match self.store.save_settings(&self.settings) {
            Ok(()) => log!("Settings saved"),
            Err(e) => log!("Failed to save settings: {}", e),
        }
    }
}
