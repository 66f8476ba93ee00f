use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::SaveIntent;
use crate::app::{App, Modal};
use crate::command::Command;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        if code == KeyCode::Char('s') {
            return save(app);
        }
        return Vec::new();
    }

    if app.manager_renaming {
        return handle_rename_input(app, code);
    }

    match code {
        KeyCode::Esc => {
            // Discard the scratch list.
            app.modal = Modal::None;
            Vec::new()
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let last = app.temp_projects.len().saturating_sub(1);
            app.manager_selected = (app.manager_selected + 1).min(last);
            Vec::new()
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.manager_selected = app.manager_selected.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Char('a') => {
            app.add_temp_project();
            Vec::new()
        }
        KeyCode::Char('d') => {
            app.delete_selected_temp_project();
            Vec::new()
        }
        KeyCode::Enter => {
            if let Some(project) = app.temp_projects.get(app.manager_selected) {
                app.cursor = project.name.chars().count();
                app.manager_renaming = true;
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_rename_input(app: &mut App, code: KeyCode) -> Vec<Command> {
    match code {
        KeyCode::Enter | KeyCode::Esc => app.manager_renaming = false,
        KeyCode::Left => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Right => {
            let len = app
                .temp_projects
                .get(app.manager_selected)
                .map(|p| p.name.chars().count())
                .unwrap_or(0);
            app.cursor = (app.cursor + 1).min(len);
        }
        KeyCode::Backspace => app.manager_backspace(),
        KeyCode::Char(c) => app.manager_insert(c),
        _ => {}
    }
    Vec::new()
}

fn save(app: &mut App) -> Vec<Command> {
    app.manager_renaming = false;
    match app.apply_manager_save() {
        Some(config) => {
            app.modal = Modal::None;
            vec![Command::SaveConfig {
                config,
                intent: SaveIntent::Silent,
            }]
        }
        // Validation message stays visible in the modal.
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;
    use crate::i18n::Lang;

    fn app() -> App {
        let mut app = App::new(Lang::En);
        app.home_dir = "/home/user".to_string();
        app.config = Some(AppConfig::default_with_home("/home/user"));
        app.open_project_manager();
        app
    }

    #[test]
    fn rename_mode_captures_plain_keys() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.manager_renaming);

        // 'a' edits the name instead of adding a project.
        handle_input(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(app.temp_projects.len(), 1);
        assert_eq!(app.temp_projects[0].name, "Project 1a");

        handle_input(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(!app.manager_renaming);
    }

    #[test]
    fn escape_discards_scratch_changes() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(app.temp_projects.len(), 2);

        handle_input(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.config.as_ref().unwrap().projects.len(), 1);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.manager_selected, 0);
        handle_input(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        handle_input(&mut app, KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(app.manager_selected, 0);
    }
}
