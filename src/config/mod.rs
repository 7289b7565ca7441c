//! User configuration

pub mod settings;

pub use settings::{
    GeneratorSettings, SettingsError,
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
};
