use crate::debug_log;
use crate::games::SessionRng;
use super::constants::{POWER_UP_LIFETIME, POWER_UP_SPAWN_CHANCE};
use super::power_up::{PowerUp, PowerUpKind};
use super::snake::Snake;
use super::types::{FieldSize, Point};

fn free_cells(field: &FieldSize, snake: &Snake, blocked: Option<Point>) -> Vec<Point> {
    field
        .cells()
        .filter(|cell| Some(*cell) != blocked && !snake.occupies(*cell))
        .collect()
}

/// Picks a cell uniformly among those not covered by the snake or the active power-up.
///
/// Returns `None` only when the snake fills every free cell.
pub fn spawn_food(
    field: &FieldSize,
    snake: &Snake,
    power_up: Option<&PowerUp>,
    rng: &mut SessionRng,
) -> Option<Point> {
    let candidates = free_cells(field, snake, power_up.map(|p| p.position));
    let food = rng.pick(&candidates).copied();
    if let Some(pos) = food {
        debug_log!("Food spawned at ({}, {})", pos.x, pos.y);
    }
    food
}

/// Rolls the spawn chance once and, on success, places a power-up of a random kind
/// on a free cell that is neither snake nor food.
pub fn maybe_spawn_power_up(
    field: &FieldSize,
    snake: &Snake,
    food: Point,
    rng: &mut SessionRng,
) -> Option<PowerUp> {
    if !rng.chance(POWER_UP_SPAWN_CHANCE) {
        return None;
    }

    let candidates = free_cells(field, snake, Some(food));
    let position = *rng.pick(&candidates)?;
    let kind = *rng.pick(&PowerUpKind::ALL)?;

    debug_log!("{:?} power-up spawned at ({}, {})", kind, position.x, position.y);

    Some(PowerUp {
        position,
        kind,
        remaining_ticks: POWER_UP_LIFETIME,
    })
}
