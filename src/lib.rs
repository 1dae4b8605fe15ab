mod config;
mod error;
mod social;

use std::sync::OnceLock;

pub use crate::config::{Config, LogoConfig, SiteConfig};
pub use crate::error::ConfigError;
pub use crate::social::{SocialLink, SocialPlatform, UnknownPlatform, active_socials};

/// Config shipped with the build.
pub const BUNDLED_CONFIG: &str = include_str!("../site.toml");

static SNAPSHOT: OnceLock<Config> = OnceLock::new();

/// Parse and validate the bundled config.
pub fn load_config() -> Result<Config, ConfigError> {
    Config::from_toml_str(BUNDLED_CONFIG)
}

/// Process-wide snapshot of the bundled config, loaded on first use.
pub fn bundled() -> Result<&'static Config, ConfigError> {
    if let Some(config) = SNAPSHOT.get() {
        return Ok(config);
    }
    let config = load_config()?;
    Ok(SNAPSHOT.get_or_init(|| config))
}
