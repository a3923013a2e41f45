use crate::games::SessionRng;
use crate::{debug_log, log};
use super::constants::{
    clamp_speed, default_field_size, DEFAULT_SPEED, MAX_SPEED, POINTS_PER_LEVEL,
    POWER_UP_EFFECT_DURATION, SPEED_BOOST,
};
use super::power_up::{tick_down, PowerUp, PowerUpEffect, PowerUpKind};
use super::settings::Settings;
use super::snake::Snake;
use super::snapshot::{GameStats, PowerUpView, StepEvents, StepResult, WorldSnapshot};
use super::spawn::{maybe_spawn_power_up, spawn_food};
use super::types::{DeathReason, Direction, FieldSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub field_size: FieldSize,
    pub walls_enabled: bool,
    pub start_speed: u32,
    pub high_score: u32,
}

impl EngineConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            field_size: default_field_size(),
            walls_enabled: settings.walls_enabled,
            start_speed: settings.speed,
            high_score: settings.high_score,
        }
    }
}

/// One game from start to game over.
///
/// All state is private and only changes inside [`SimulationEngine::step`];
/// the outside world sees it through [`WorldSnapshot`]s. Once a step returned
/// `GameOver` the engine is terminated and every further step repeats that result.
pub struct SimulationEngine {
    field_size: FieldSize,
    walls_enabled: bool,
    snake: Snake,
    food: Point,
    power_up: Option<PowerUp>,
    effect: Option<PowerUpEffect>,
    speed_boosted: bool,
    score: u32,
    level: u32,
    speed: u32,
    high_score: u32,
    tick: u64,
    death_reason: Option<DeathReason>,
    rng: SessionRng,
}

impl SimulationEngine {
    pub fn new(config: EngineConfig, mut rng: SessionRng) -> Self {
        let start = config.field_size.center();
        let snake = Snake::new(start, Direction::Right);
        // A field with a single cell has nowhere else to put the food.
        let food = spawn_food(&config.field_size, &snake, None, &mut rng).unwrap_or(start);

        log!(
            "New game on {}x{} field, walls {}, speed {}, seed {}",
            config.field_size.width,
            config.field_size.height,
            if config.walls_enabled { "on" } else { "off" },
            clamp_speed(config.start_speed),
            rng.seed()
        );

        Self {
            field_size: config.field_size,
            walls_enabled: config.walls_enabled,
            snake,
            food,
            power_up: None,
            effect: None,
            speed_boosted: false,
            score: 0,
            level: 1,
            speed: clamp_speed(config.start_speed),
            high_score: config.high_score,
            tick: 0,
            death_reason: None,
            rng,
        }
    }

    pub fn step(&mut self, pending_direction: Option<Direction>) -> StepResult {
        if let Some(reason) = self.death_reason {
            return StepResult::GameOver {
                reason,
                snapshot: self.snapshot(),
            };
        }

        let direction = match pending_direction {
            Some(direction) if !direction.is_opposite(&self.snake.direction) => direction,
            _ => self.snake.direction,
        };

        // A fatal move leaves the snake and its heading untouched.
        let new_head = match self.next_head(direction) {
            Ok(head) => head,
            Err(reason) => return self.terminate(reason),
        };
        self.snake.direction = direction;

        let mut events = StepEvents::default();
        let power_up_existed = self.power_up.is_some();

        self.snake.push_head(new_head);

        if new_head == self.food {
            self.eat_food(&mut events);
        } else {
            self.snake.pop_tail();
        }

        let mut picked_now = false;
        if let Some(power_up) = self.power_up
            && power_up.position == new_head
        {
            self.activate_power_up(power_up);
            events.power_up_picked = Some(power_up.kind);
            picked_now = true;
        }

        // Timers start counting on the tick after the pickup or effect appeared.
        if power_up_existed {
            let expired = match self.power_up.as_mut() {
                Some(power_up) => tick_down(&mut power_up.remaining_ticks),
                None => false,
            };
            if expired {
                debug_log!("Power-up vanished unclaimed");
                self.power_up = None;
                events.power_up_expired = true;
            }
        }

        if !picked_now {
            let expired = match self.effect.as_mut() {
                Some(effect) => tick_down(&mut effect.remaining_ticks).then_some(effect.kind),
                None => None,
            };
            if let Some(kind) = expired {
                self.expire_effect(kind);
                events.effect_expired = Some(kind);
            }
        }

        self.tick += 1;

        StepResult::Continue {
            snapshot: self.snapshot(),
            events,
        }
    }

    fn next_head(&self, direction: Direction) -> Result<Point, DeathReason> {
        let invincible = self.is_invincible();
        let moved = self.snake.head().moved(direction);

        let new_head = if self.walls_enabled && !invincible {
            if self.field_size.is_out_of_bounds(moved) {
                return Err(DeathReason::WallCollision);
            }
            moved
        } else {
            self.field_size.wrap(moved)
        };

        if !invincible && self.snake.occupies(new_head) {
            return Err(DeathReason::SelfCollision);
        }

        Ok(new_head)
    }

    fn eat_food(&mut self, events: &mut StepEvents) {
        events.ate_food = true;
        self.score += 1;

        if self.score > self.high_score {
            debug_log!("New high score: {}", self.score);
            self.high_score = self.score;
            events.new_high_score = true;
        }

        let power_up = self.power_up.as_ref();
        if let Some(food) = spawn_food(&self.field_size, &self.snake, power_up, &mut self.rng) {
            self.food = food;
        }

        events.leveled_up = self.increase_difficulty();

        if self.power_up.is_none() {
            self.power_up = maybe_spawn_power_up(&self.field_size, &self.snake, self.food, &mut self.rng);
            events.power_up_spawned = self.power_up.is_some();
        }
    }

    fn increase_difficulty(&mut self) -> bool {
        if self.score % POINTS_PER_LEVEL != 0 {
            return false;
        }
        self.level += 1;
        self.speed = (self.speed + 1).min(MAX_SPEED);
        log!("Level {} reached, speed {}", self.level, self.speed);
        true
    }

    fn activate_power_up(&mut self, power_up: PowerUp) {
        debug_log!("{:?} power-up picked up", power_up.kind);
        self.effect = Some(PowerUpEffect {
            kind: power_up.kind,
            remaining_ticks: POWER_UP_EFFECT_DURATION,
        });
        if power_up.kind == PowerUpKind::Speed {
            self.speed = (self.speed + SPEED_BOOST).min(MAX_SPEED);
            self.speed_boosted = true;
        }
        self.power_up = None;
    }

    fn expire_effect(&mut self, kind: PowerUpKind) {
        debug_log!("{:?} effect expired", kind);
        self.effect = None;
        if self.speed_boosted {
            self.speed = DEFAULT_SPEED;
            self.speed_boosted = false;
        }
    }

    fn terminate(&mut self, reason: DeathReason) -> StepResult {
        self.death_reason = Some(reason);
        log!(
            "Game over after {} ticks: {:?}, score {}, level {}",
            self.tick,
            reason,
            self.score,
            self.level
        );
        StepResult::GameOver {
            reason,
            snapshot: self.snapshot(),
        }
    }

    fn is_invincible(&self) -> bool {
        matches!(
            self.effect,
            Some(PowerUpEffect {
                kind: PowerUpKind::Invincibility,
                ..
            })
        )
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            snake_cells: self.snake.segments().copied().collect(),
            direction: self.snake.direction,
            food: self.food,
            power_up: self.power_up.map(|p| PowerUpView {
                position: p.position,
                kind: p.kind,
            }),
            active_effect: self.effect.map(|e| e.kind),
            walls_enabled: self.walls_enabled,
            stats: self.stats(),
        }
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            score: self.score,
            level: self.level,
            speed: self.speed,
            high_score: self.high_score,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn is_terminated(&self) -> bool {
        self.death_reason.is_some()
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, segments: &[Point], direction: Direction) {
        self.snake = Snake::from_segments(segments, direction).unwrap();
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_power_up(&mut self, power_up: Option<PowerUp>) {
        self.power_up = power_up;
    }

    #[cfg(test)]
    pub(crate) fn set_effect(&mut self, kind: PowerUpKind) {
        self.effect = Some(PowerUpEffect {
            kind,
            remaining_ticks: POWER_UP_EFFECT_DURATION,
        });
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
