use super::power_up::PowerUpKind;
use super::types::{DeathReason, Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub speed: u32,
    pub high_score: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerUpView {
    pub position: Point,
    pub kind: PowerUpKind,
}

/// Read-only picture of the world after a tick, handed to the shell for drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub snake_cells: Vec<Point>,
    pub direction: Direction,
    pub food: Point,
    pub power_up: Option<PowerUpView>,
    pub active_effect: Option<PowerUpKind>,
    pub walls_enabled: bool,
    pub stats: GameStats,
}

/// What happened during a single `Continue` step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub ate_food: bool,
    /// The score beat the stored high score; the high score should be persisted.
    pub new_high_score: bool,
    pub leveled_up: bool,
    pub power_up_spawned: bool,
    pub power_up_picked: Option<PowerUpKind>,
    pub power_up_expired: bool,
    pub effect_expired: Option<PowerUpKind>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    Continue {
        snapshot: WorldSnapshot,
        events: StepEvents,
    },
    GameOver {
        reason: DeathReason,
        snapshot: WorldSnapshot,
    },
}

impl StepResult {
    pub fn is_game_over(&self) -> bool {
        matches!(self, StepResult::GameOver { .. })
    }

    pub fn snapshot(&self) -> &WorldSnapshot {
        match self {
            StepResult::Continue { snapshot, .. } | StepResult::GameOver { snapshot, .. } => snapshot,
        }
    }
}
