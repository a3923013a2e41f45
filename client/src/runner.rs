use std::io::BufRead;
use std::time::Duration;

use common::games::snake::constants::default_field_size;
use common::games::snake::{
    CommandOutcome, MenuCommand, SessionController, SettingsStore, TickOutcome,
};
use common::log;
use tokio::sync::mpsc;
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::state::{parse_command, ClientCommand};
use crate::text_view::{render_frame, render_game_over, render_screen};

fn create_timer(tick_rate: u32) -> Interval {
    let period = Duration::from_millis(1000 / u64::from(tick_rate.max(1)));
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

/// Forwards parsed stdin lines until stdin closes.
///
/// Runs on a plain thread: a blocking stdin read cannot be cancelled and would
/// otherwise hold up runtime shutdown.
pub fn spawn_input_thread(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            };
            match parse_command(&line) {
                Some(command) => {
                    if command_tx.send(command).is_err() {
                        break;
                    }
                }
                None => log!("Unknown command: {}", line.trim()),
            }
        }
    });
}

fn show_screen<S: SettingsStore>(session: &SessionController<S>) {
    print!("{}", render_screen(session.state(), session.settings()));
}

/// Drives the session: one `tick` per timer period, commands applied between ticks.
pub async fn run_session<S: SettingsStore>(
    mut session: SessionController<S>,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let field = default_field_size();
    let mut tick_rate = session.tick_rate();
    let mut timer = create_timer(tick_rate);

    show_screen(&session);

    loop {
        tokio::select! {
            _ = timer.tick() => {
                match session.tick() {
                    Some(TickOutcome::Continue(snapshot)) => {
                        print!("{}", render_frame(&field, &snapshot));
                    }
                    Some(TickOutcome::GameOver { reason, snapshot }) => {
                        print!("{}", render_frame(&field, &snapshot));
                        print!("{}", render_game_over(reason, &snapshot));
                        show_screen(&session);
                    }
                    None => {}
                }
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    session.handle_menu_command(MenuCommand::Quit);
                    break;
                };
                let outcome = match command {
                    ClientCommand::Turn(direction) => session.handle_direction(direction),
                    ClientCommand::Menu(menu_command) => {
                        let outcome = session.handle_menu_command(menu_command);
                        if outcome == CommandOutcome::Handled {
                            show_screen(&session);
                        }
                        outcome
                    }
                };
                if outcome == CommandOutcome::Quit {
                    break;
                }
            }
        }

        if session.tick_rate() != tick_rate {
            tick_rate = session.tick_rate();
            timer = create_timer(tick_rate);
        }
    }

    log!("Goodbye");
}
