// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while loading a catalog or reading configuration.
//!
//! Search itself never fails: an unparseable payload degrades to an empty
//! catalog, and the error is kept around only so the host can log it or
//! decide to retry.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The payload was present but is not a JSON array of catalog entries.
    #[error("invalid catalog payload: {0}")]
    Parse(String),

    /// The payload could not be read from its backing store.
    #[error("failed to read catalog: {0}")]
    Io(String),

    /// A configuration value was present but unusable.
    #[error("invalid option {name}: {value}")]
    InvalidOption { name: &'static str, value: String },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}
