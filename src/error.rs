use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required field is missing, mistyped or out of range
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// `SOCIALS[index].name` is not a supported platform
    #[error("Unknown social platform `{name}` at SOCIALS[{index}]")]
    UnknownSocialPlatform { index: usize, name: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error
    },

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error)
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Invalid(e.to_string().trim_end().to_string())
    }
}
