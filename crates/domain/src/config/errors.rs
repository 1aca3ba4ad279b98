/// Failures while locating, parsing, checking or writing `stubzone.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {0}: {1}")]
    FileRead(String, String),

    #[error("cannot write config file {0}: {1}")]
    FileWrite(String, String),

    #[error("invalid config TOML: {0}")]
    Parse(String),

    #[error("cannot serialize config: {0}")]
    Serialize(String),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
