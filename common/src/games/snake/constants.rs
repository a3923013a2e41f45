use super::types::FieldSize;

pub const AREA_WIDTH: i32 = 640;
pub const AREA_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;

pub const GRID_WIDTH: i32 = AREA_WIDTH / CELL_SIZE;
pub const GRID_HEIGHT: i32 = AREA_HEIGHT / CELL_SIZE;

pub const MIN_SPEED: u32 = 5;
pub const MAX_SPEED: u32 = 20;
pub const DEFAULT_SPEED: u32 = 10;

/// Ticks an unclaimed power-up stays on the field.
pub const POWER_UP_LIFETIME: u32 = 200;
/// Ticks a picked-up effect stays active.
pub const POWER_UP_EFFECT_DURATION: u32 = 300;
pub const POWER_UP_SPAWN_CHANCE: f64 = 0.1;
pub const SPEED_BOOST: u32 = 2;

pub const POINTS_PER_LEVEL: u32 = 5;

pub fn default_field_size() -> FieldSize {
    FieldSize::new(GRID_WIDTH, GRID_HEIGHT)
}

pub fn clamp_speed(speed: u32) -> u32 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}
