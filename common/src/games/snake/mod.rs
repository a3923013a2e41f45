pub mod constants;
mod engine;
mod power_up;
mod session;
mod settings;
mod snake;
mod snapshot;
mod spawn;
mod types;

pub use engine::{EngineConfig, SimulationEngine};
pub use power_up::{PowerUp, PowerUpEffect, PowerUpKind};
pub use session::{CommandOutcome, MenuCommand, SessionController, SessionStateKind, TickOutcome};
pub use settings::{Settings, SettingsStore};
pub use snake::Snake;
pub use snapshot::{GameStats, PowerUpView, StepEvents, StepResult, WorldSnapshot};
pub use spawn::{maybe_spawn_power_up, spawn_food};
pub use types::{DeathReason, Direction, FieldSize, Point};
