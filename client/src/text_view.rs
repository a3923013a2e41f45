use common::games::snake::{
    DeathReason, FieldSize, Point, PowerUpKind, SessionStateKind, Settings, WorldSnapshot,
};

const HEAD: char = '@';
const BODY: char = 'o';
const FOOD: char = '*';
const EMPTY: char = ' ';

fn power_up_char(kind: PowerUpKind) -> char {
    match kind {
        PowerUpKind::Speed => 'S',
        PowerUpKind::Invincibility => 'I',
    }
}

fn hud_line(snapshot: &WorldSnapshot) -> String {
    let stats = &snapshot.stats;
    let effect = match snapshot.active_effect {
        Some(PowerUpKind::Speed) => "  [speed boost]",
        Some(PowerUpKind::Invincibility) => "  [invincible]",
        None => "",
    };
    format!(
        "Score: {}  Level: {}  High Score: {}  Speed: {}{}",
        stats.score, stats.level, stats.high_score, stats.speed, effect
    )
}

pub fn render_frame(field: &FieldSize, snapshot: &WorldSnapshot) -> String {
    let width = field.width.max(0) as usize;
    let height = field.height.max(0) as usize;
    let mut grid = vec![vec![EMPTY; width]; height];

    let mut put = |point: Point, c: char| {
        if field.contains(point) {
            grid[point.y as usize][point.x as usize] = c;
        }
    };

    put(snapshot.food, FOOD);
    if let Some(power_up) = snapshot.power_up {
        put(power_up.position, power_up_char(power_up.kind));
    }
    for segment in snapshot.snake_cells.iter().skip(1) {
        put(*segment, BODY);
    }
    if let Some(head) = snapshot.snake_cells.first() {
        put(*head, HEAD);
    }

    let (edge, side) = if snapshot.walls_enabled { ('#', '#') } else { ('.', ' ') };
    let border: String = std::iter::repeat_n(edge, width + 2).collect();

    let mut out = String::new();
    out.push_str(&hud_line(snapshot));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in grid {
        out.push(side);
        out.extend(row);
        out.push(side);
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}

pub fn render_screen(state: SessionStateKind, settings: &Settings) -> String {
    match state {
        SessionStateKind::MainMenu => format!(
            "=== Snake Xenzia ===\n  start     - Start Game\n  settings  - Settings\n  quit      - Quit\nHigh Score: {}\n",
            settings.high_score
        ),
        SessionStateKind::Settings => format!(
            "=== Settings ===\n  walls     - Walls: {}\n  + / -     - Speed: {}\n  back      - Back\n",
            if settings.walls_enabled { "On" } else { "Off" },
            settings.speed
        ),
        SessionStateKind::Playing => {
            "Steer with w/a/s/d, esc returns to the menu\n".to_string()
        }
        SessionStateKind::GameOver => {
            "  restart   - Play Again\n  menu      - Main Menu\n".to_string()
        }
    }
}

pub fn render_game_over(reason: DeathReason, snapshot: &WorldSnapshot) -> String {
    let cause = match reason {
        DeathReason::WallCollision => "hit the wall",
        DeathReason::SelfCollision => "bit its own tail",
    };
    format!(
        "=== Game Over ===\nThe snake {}.\nFinal score: {} (level {}), high score: {}\n",
        cause, snapshot.stats.score, snapshot.stats.level, snapshot.stats.high_score
    )
}
