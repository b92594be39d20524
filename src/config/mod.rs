//! Key-value persistence and runtime settings.
//!
//! Persisted values are best-effort caches: every reader in this crate
//! falls back to a default when a key is absent or unparseable.
//!
//! ```rust,no_run
//! use neuria::config::{ConfigProvider, FileConfigProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileConfigProvider::new("state.json".into());
//! store.set_raw("ai_hub_lang", "en").await?;
//! assert_eq!(store.get_raw("ai_hub_lang").await?.as_deref(), Some("en"));
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod file;
pub mod memory;
pub mod provider;
pub mod settings;

pub use env::EnvConfigProvider;
pub use file::FileConfigProvider;
pub use memory::MemoryConfigProvider;
pub use provider::{ConfigProvider, ConfigProviderExt};
pub use settings::{DEFAULT_BASE_URL, DEFAULT_DISCOVERY_MODEL, DEFAULT_IMAGE_MODEL, Settings};

use thiserror::Error;

/// Errors that can occur in configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Key not found
    #[error("Key not found: {key}")]
    NotFound {
        /// The key that was not found
        key: String,
    },

    /// Invalid configuration value
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The key with invalid value
        key: String,
        /// Error message
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),

    /// Provider error
    #[error("Provider error: {message}")]
    Provider {
        /// Error message
        message: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
