use crossterm::event::KeyCode;

use crate::app::{App, Modal, RecoverState};
use crate::command::Command;

pub fn handle_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Enter if app.recover_state == RecoverState::Idle => {
            app.recover_state = RecoverState::Recovering;
            app.recover_logs.clear();
            app.recover_notice = None;
            vec![Command::Recover]
        }
        // The modal cannot be dismissed while deletion is in progress.
        KeyCode::Esc | KeyCode::Char('q') if app.recover_state != RecoverState::Recovering => {
            app.modal = Modal::None;
            Vec::new()
        }
        _ => Vec::new(),
    }
}
