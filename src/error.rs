//! Errors for the fallible edges of the crate.
//!
//! The pipeline itself never fails: bad page numbers are clamped and empty
//! pages are a normal result. Only loading and validating [`ListSettings`]
//! can go wrong.
//!
//! [`ListSettings`]: crate::settings::ListSettings

use std::path::PathBuf;

use thiserror::Error;

/// Settings loading and validation errors.
#[derive(Debug, Error)]
pub enum ListError {
    /// The settings file could not be read.
    #[error("failed to read settings file `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings text is not valid TOML for [`crate::ListSettings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// `page_size` must be at least 1.
    #[error("page_size must be at least 1")]
    InvalidPageSize,

    /// A delay or timeout that must be non-zero was zero.
    #[error("{name} must be greater than zero")]
    InvalidDelay { name: &'static str },
}

pub type ListResult<T> = Result<T, ListError>;
