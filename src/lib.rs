//! # neuria
//!
//! Curated AI tool directory: a static catalog with client-side filtering,
//! plus web-grounded discovery of further tools through the Gemini API.
//!
//! ## Filtering the catalog
//!
//! ```rust
//! use neuria::catalog::{Catalog, CatalogFilter, CategorySelection, PriceSelection};
//!
//! let catalog = Catalog::builtin();
//! let filter = CatalogFilter::new("chat", CategorySelection::All, PriceSelection::All);
//! let view = filter.view(catalog);
//! assert!(!view.is_grouped());
//! ```
//!
//! ## Discovering tools
//!
//! ```rust,no_run
//! use neuria::{CategorySelection, Discoverer, GeminiDiscoverer, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), neuria::Error> {
//!     let settings = Settings::from_env().await?;
//!     let discoverer = GeminiDiscoverer::from_settings(&settings)?;
//!     let result = discoverer.discover("video editing", CategorySelection::All).await;
//!     for tool in &result.tools {
//!         println!("{} - {}", tool.name, tool.url);
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod client;
pub mod config;
pub mod discovery;
pub mod logo;
pub mod session;
pub mod types;

pub use catalog::{
    Catalog, CatalogFilter, CatalogView, Category, CategoryGroup, CategorySelection, Language,
    PriceSelection, PricingTier, ToolRecord,
};
pub use client::{Client, ClientBuilder};
pub use config::{
    ConfigError, ConfigProvider, ConfigProviderExt, EnvConfigProvider, FileConfigProvider,
    MemoryConfigProvider, Settings,
};
pub use discovery::{
    DiscoveredTool, DiscoveryPolicy, DiscoveryRequest, DiscoveryResult, Discoverer,
    GeminiDiscoverer, GroundingSource,
};
pub use logo::{GeminiLogoGenerator, LogoCache, LogoGenerator, LogoImage};
pub use session::{DiscoveryTicket, Hub, HubState, Profile, TrialStatus};

/// Error type for neuria operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// API returned an error response.
    #[error("API error (HTTP {status}): {message}", status = status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".into()))]
    Api {
        message: String,
        status: Option<u16>,
        error_type: Option<String>,
    },

    /// Network connectivity or request failed.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Response did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or invalid.
    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),

    /// Input values are invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected credentials (401, 403)
    Authorization,
    /// Configuration, parsing, or input errors
    Configuration,
    /// Network or server-side errors that may succeed when invoked again
    Transient,
    /// Internal errors (IO, JSON, unexpected states)
    Internal,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Api {
                status: Some(401 | 403),
                ..
            } => ErrorCategory::Authorization,

            Error::Config(_) | Error::Parse(_) | Error::Env(_) | Error::InvalidRequest(_) => {
                ErrorCategory::Configuration
            }

            Error::Network(_) => ErrorCategory::Transient,
            Error::Api {
                status: Some(429 | 500..=599),
                ..
            } => ErrorCategory::Transient,

            Error::Io(_) | Error::Json(_) | Error::Api { .. } => ErrorCategory::Internal,
        }
    }

    /// Informational only; nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Transient
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound { key } => {
                Error::Config(format!("Key not found: {}", key))
            }
            config::ConfigError::InvalidValue { key, message } => {
                Error::Config(format!("Invalid value for {}: {}", key, message))
            }
            config::ConfigError::Serialization(e) => Error::Json(e),
            config::ConfigError::Io(e) => Error::Io(e),
            config::ConfigError::Env(e) => Error::Env(e),
            config::ConfigError::Provider { message } => Error::Config(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Api {
            message: "API key not valid".to_string(),
            status: Some(400),
            error_type: Some("INVALID_ARGUMENT".to_string()),
        };
        assert!(err.to_string().contains("HTTP 400"));
        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_error_categories() {
        let server = Error::Api {
            message: "Internal".into(),
            status: Some(503),
            error_type: None,
        };
        assert!(server.is_retryable());

        let denied = Error::Api {
            message: "Forbidden".into(),
            status: Some(403),
            error_type: None,
        };
        assert_eq!(denied.category(), ErrorCategory::Authorization);

        assert!(!Error::Parse("bad".into()).is_retryable());
        assert_eq!(
            Error::Config("missing key".into()).category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: Error = config::ConfigError::NotFound {
            key: "api.key".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
