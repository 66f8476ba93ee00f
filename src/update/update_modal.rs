use crossterm::event::KeyCode;

use crate::app::{App, Modal};
use crate::command::Command;
use crate::links::RELEASES_URL;

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.modal = Modal::None;
            Vec::new()
        }
        KeyCode::Enter | KeyCode::Char('d') => {
            let has_update = matches!(&app.update_result, Some(Ok(r)) if r.has_update);
            if has_update {
                app.modal = Modal::None;
                vec![Command::OpenUrl {
                    url: RELEASES_URL.to_string(),
                }]
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}
