pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::TomlConfig;
pub use domain::{nothing, print, Complex};
pub use utils::error::{InspectError, Result};
