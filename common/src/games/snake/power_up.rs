use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Speed,
    Invincibility,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::Speed, PowerUpKind::Invincibility];
}

/// Pickup lying on the field, vanishes when `remaining_ticks` runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerUp {
    pub position: Point,
    pub kind: PowerUpKind,
    pub remaining_ticks: u32,
}

/// Modifier applied to the snake after a pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerUpEffect {
    pub kind: PowerUpKind,
    pub remaining_ticks: u32,
}

/// Counts a timer down by one tick; returns `true` once it has run out.
pub(crate) fn tick_down(remaining_ticks: &mut u32) -> bool {
    *remaining_ticks = remaining_ticks.saturating_sub(1);
    *remaining_ticks == 0
}
