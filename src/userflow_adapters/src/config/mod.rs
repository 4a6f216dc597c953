pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    ApplicationSettings, BasicAuthSettings, ServiceSettings, SettingsError, config_key,
};
