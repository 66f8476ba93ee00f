use crossterm::event::KeyCode;

use crate::app::{App, Screen};
use crate::command::Command;

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('l') => app.show_env_logs = !app.show_env_logs,
        // Skip ahead without waiting for the probes.
        KeyCode::Enter => app.screen = Screen::Main,
        _ => {}
    }
    Vec::new()
}
