pub mod about;
pub mod header;
pub mod launch_panel;
pub mod loading;
pub mod model_switcher;
pub mod projects;
pub mod recover;
pub mod settings;
pub mod update;
pub mod util;
