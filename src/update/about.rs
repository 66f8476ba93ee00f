use crossterm::event::KeyCode;

use crate::app::{App, Modal};
use crate::command::Command;
use crate::links;

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            app.modal = Modal::None;
            Vec::new()
        }
        KeyCode::Char('g') => vec![Command::OpenUrl {
            url: links::REPO_URL.to_string(),
        }],
        KeyCode::Char('b') => vec![Command::OpenUrl {
            url: links::ISSUES_URL.to_string(),
        }],
        _ => Vec::new(),
    }
}
