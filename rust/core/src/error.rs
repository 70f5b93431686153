// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for container decoding.

use crate::types::FixtureKind;
use thiserror::Error;

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a floor-plan container
#[derive(Error, Debug)]
pub enum Error {
    /// The container could not be parsed as the expected nested record,
    /// or the mandatory boundary field is missing or malformed.
    #[error("Invalid container format: {0}")]
    Format(String),

    /// A flat fixture array has a length that is not a multiple of the
    /// 6-value row width (id, x, y, width, height, orientation).
    #[error("{kind} array length {len} is not a multiple of 6")]
    FixtureShape { kind: FixtureKind, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format(err.to_string())
    }
}
