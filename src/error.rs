//! Top-level conversion error.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::input::{
    DiscoveryError,
    ParseError,
};
use crate::output::WriteError;

/// Every failure aborts the run; nothing is retried.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to discover locale files in '{}': {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: DiscoveryError,
    },

    #[error("Failed to load '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },
}
