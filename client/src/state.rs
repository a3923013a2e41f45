use common::games::snake::{Direction, MenuCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Turn(Direction),
    Menu(MenuCommand),
}

/// Maps one line typed by the player to a command. Case and surrounding whitespace are ignored.
pub fn parse_command(line: &str) -> Option<ClientCommand> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => ClientCommand::Turn(Direction::Up),
        "s" | "down" => ClientCommand::Turn(Direction::Down),
        "a" | "left" => ClientCommand::Turn(Direction::Left),
        "d" | "right" => ClientCommand::Turn(Direction::Right),
        "start" | "play" => ClientCommand::Menu(MenuCommand::Start),
        "settings" => ClientCommand::Menu(MenuCommand::OpenSettings),
        "back" => ClientCommand::Menu(MenuCommand::Back),
        "quit" | "q" | "exit" => ClientCommand::Menu(MenuCommand::Quit),
        "walls" => ClientCommand::Menu(MenuCommand::ToggleWalls),
        "+" | "faster" => ClientCommand::Menu(MenuCommand::SpeedUp),
        "-" | "slower" => ClientCommand::Menu(MenuCommand::SpeedDown),
        "restart" | "r" => ClientCommand::Menu(MenuCommand::Restart),
        "menu" => ClientCommand::Menu(MenuCommand::ToMenu),
        "esc" | "cancel" => ClientCommand::Menu(MenuCommand::Cancel),
        _ => return None,
    };
    Some(command)
}
