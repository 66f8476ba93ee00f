//! The update layer: pure handlers that take an [`Action`], mutate the
//! [`App`] and return the side effects to run as [`Command`]s.

mod about;
mod actions;
mod loading;
mod main_view;
mod path;
mod projects;
mod recover;
mod settings;
mod update_modal;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::Action;
use crate::app::{App, Modal, Screen};
use crate::command::Command;

pub fn update(app: &mut App, action: Action) -> Vec<Command> {
    match action {
        Action::Input { code, modifiers } => {
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
                return Vec::new();
            }
            match app.modal {
                Modal::ModelSettings => settings::handle_input(app, code, modifiers),
                Modal::ProjectManager => projects::handle_input(app, code, modifiers),
                Modal::Recover => recover::handle_input(app, code),
                Modal::UpdateCheck => update_modal::handle_input(app, code),
                Modal::About => about::handle_input(app, code),
                Modal::EditPath => path::handle_input(app, code, modifiers),
                Modal::None => match app.screen {
                    Screen::Loading => loading::handle_input(app, code),
                    Screen::Main => main_view::handle_input(app, code),
                },
            }
        }
        Action::Tick => {
            app.tick(Instant::now());
            Vec::new()
        }
        other => actions::handle(app, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SaveIntent;
    use crate::app::{RecoverState, StatusKind};
    use crate::domain::config::AppConfig;
    use crate::i18n::Lang;

    fn press(app: &mut App, code: KeyCode) -> Vec<Command> {
        update(
            app,
            Action::Input {
                code,
                modifiers: KeyModifiers::NONE,
            },
        )
    }

    fn ctrl(app: &mut App, c: char) -> Vec<Command> {
        update(
            app,
            Action::Input {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::CONTROL,
            },
        )
    }

    fn ready_app() -> App {
        let mut app = App::new(Lang::En);
        app.home_dir = "/home/user".to_string();
        app.screen = Screen::Main;
        let mut config = AppConfig::default_with_home("/home/user");
        config.models[0].api_key = "key".to_string();
        app.config = Some(config);
        app
    }

    #[test]
    fn switching_to_configured_model_saves() {
        let mut app = ready_app();
        app.model_cursor = 0;
        let commands = press(&mut app, KeyCode::Enter);

        match commands.as_slice() {
            [Command::SaveConfig { config, intent }] => {
                assert_eq!(*intent, SaveIntent::Switch);
                assert_eq!(config.current_model, "GLM");
            }
            other => panic!("expected a save, got {:?}", other),
        }
    }

    #[test]
    fn switching_to_unconfigured_model_opens_settings() {
        let mut app = ready_app();
        let kimi = app.config.as_ref().unwrap().model_index("kimi").unwrap();
        app.model_cursor = kimi;

        let commands = press(&mut app, KeyCode::Enter);
        assert!(commands.is_empty());
        assert_eq!(app.modal, Modal::ModelSettings);
        assert_eq!(app.active_tab, kimi);
        assert_eq!(app.config.as_ref().unwrap().current_model, "GLM");
        assert!(matches!(&app.status, Some(s) if s.kind == StatusKind::Error));
    }

    #[test]
    fn launch_guard_blocks_blank_project_path() {
        let mut app = ready_app();
        app.config.as_mut().unwrap().projects[0].path = "   ".to_string();

        let commands = press(&mut app, KeyCode::Char(' '));
        assert!(commands.is_empty());
        assert!(matches!(&app.status, Some(s) if s.kind == StatusKind::Error));
    }

    #[test]
    fn launch_forwards_project_yolo_flag() {
        let mut app = ready_app();
        app.config.as_mut().unwrap().projects[0].yolo_mode = true;

        let commands = press(&mut app, KeyCode::Char(' '));
        match commands.as_slice() {
            [Command::Launch { yolo_mode, path }] => {
                assert!(*yolo_mode);
                assert_eq!(path, "/home/user");
            }
            other => panic!("expected a launch, got {:?}", other),
        }
    }

    #[test]
    fn yolo_toggle_saves_silently() {
        let mut app = ready_app();
        let commands = press(&mut app, KeyCode::Char('y'));

        match commands.as_slice() {
            [Command::SaveConfig { config, intent }] => {
                assert_eq!(*intent, SaveIntent::Silent);
                assert!(config.projects[0].yolo_mode);
            }
            other => panic!("expected a save, got {:?}", other),
        }
    }

    #[test]
    fn settings_save_then_success_closes_after_delay() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.modal, Modal::ModelSettings);

        let commands = ctrl(&mut app, 's');
        assert!(matches!(
            commands.as_slice(),
            [Command::SaveConfig {
                intent: SaveIntent::Settings,
                ..
            }]
        ));

        update(
            &mut app,
            Action::ConfigSaved {
                intent: SaveIntent::Settings,
                result: Ok(()),
            },
        );
        assert!(app.settings_close_at.is_some());
        assert_eq!(app.modal, Modal::ModelSettings);

        app.tick(Instant::now() + crate::app::SETTINGS_CLOSE_DELAY);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn recover_runs_only_from_idle() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.modal, Modal::Recover);
        assert_eq!(app.recover_state, RecoverState::Idle);

        let commands = press(&mut app, KeyCode::Enter);
        assert!(matches!(commands.as_slice(), [Command::Recover]));
        assert_eq!(app.recover_state, RecoverState::Recovering);

        // Enter is inert while running, and Esc cannot close the modal.
        assert!(press(&mut app, KeyCode::Enter).is_empty());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, Modal::Recover);

        update(&mut app, Action::RecoverLog("step".to_string()));
        update(&mut app, Action::RecoverFinished(Ok(())));
        assert_eq!(app.recover_state, RecoverState::Success);
        assert_eq!(app.recover_logs.last().map(String::as_str), Some("DONE!"));
        assert!(app.recover_notice.is_some());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn recover_failure_is_logged() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Enter);

        update(&mut app, Action::RecoverFinished(Err("denied".to_string())));
        assert_eq!(app.recover_state, RecoverState::Error);
        assert_eq!(
            app.recover_logs.last().map(String::as_str),
            Some("Error: denied")
        );
    }

    #[test]
    fn project_manager_save_discards_on_validation_error() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('a'));
        app.temp_projects[1].name = "Project 1".to_string();

        let commands = ctrl(&mut app, 's');
        assert!(commands.is_empty());
        assert_eq!(app.modal, Modal::ProjectManager);
        assert!(!app.manager_status.is_empty());
        assert_eq!(app.config.as_ref().unwrap().projects.len(), 1);
    }

    #[test]
    fn project_manager_save_commits_and_closes() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('a'));

        let commands = ctrl(&mut app, 's');
        match commands.as_slice() {
            [Command::SaveConfig { config, intent }] => {
                assert_eq!(*intent, SaveIntent::Silent);
                assert_eq!(config.projects.len(), 2);
            }
            other => panic!("expected a save, got {:?}", other),
        }
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn project_cycle_wraps_and_saves() {
        let mut app = ready_app();
        {
            let config = app.config.as_mut().unwrap();
            config.projects.push(crate::domain::config::ProjectConfig::new(
                "Project 2",
                "/work",
            ));
        }

        let commands = press(&mut app, KeyCode::Tab);
        match commands.as_slice() {
            [Command::SaveConfig { config, .. }] => {
                assert_eq!(config.current_project, config.projects[1].id);
            }
            other => panic!("expected a save, got {:?}", other),
        }

        // Wrap back around.
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.config.as_ref().unwrap().current_project,
            app.config.as_ref().unwrap().projects[0].id
        );
    }

    #[test]
    fn clipboard_text_is_routed_by_modal() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('s'));
        update(&mut app, Action::ClipboardText(Ok("sk-pasted".to_string())));
        assert_eq!(app.settings_field_value(), "sk-pasted");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.modal, Modal::EditPath);
        update(&mut app, Action::ClipboardText(Ok("/pasted/dir".to_string())));
        assert_eq!(app.path_buffer, "/pasted/dir");
    }

    #[test]
    fn path_editor_commit_saves_new_path() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('c'));
        app.path_buffer = "/work/site".to_string();

        let commands = press(&mut app, KeyCode::Enter);
        match commands.as_slice() {
            [Command::SaveConfig { config, intent }] => {
                assert_eq!(*intent, SaveIntent::Silent);
                assert_eq!(config.projects[0].path, "/work/site");
            }
            other => panic!("expected a save, got {:?}", other),
        }
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn path_editor_empty_submission_keeps_old_path() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('c'));
        app.path_buffer = "   ".to_string();

        let commands = press(&mut app, KeyCode::Enter);
        assert!(commands.is_empty());
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.config.as_ref().unwrap().projects[0].path, "/home/user");
    }

    #[test]
    fn env_failure_expands_the_log_panel() {
        let mut app = App::new(Lang::En);
        update(&mut app, Action::EnvLog("Checking Git installation...".to_string()));
        assert!(!app.show_env_logs);
        update(&mut app, Action::EnvLog("Git not found. Please install it first.".to_string()));
        assert!(app.show_env_logs);

        update(&mut app, Action::EnvCheckDone);
        assert_eq!(app.screen, Screen::Main);
    }

    #[test]
    fn loaded_config_without_keys_opens_settings() {
        let mut app = App::new(Lang::En);
        app.screen = Screen::Main;
        let config = AppConfig::default_with_home("/home/user");
        update(&mut app, Action::ConfigLoaded(Ok(config)));
        assert_eq!(app.modal, Modal::ModelSettings);
    }

    #[test]
    fn config_push_does_not_close_open_modal() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('p'));

        update(
            &mut app,
            Action::ConfigChanged(AppConfig::default_with_home("/home/user")),
        );
        assert_eq!(app.modal, Modal::ProjectManager);
    }
}
