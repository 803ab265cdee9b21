// Dweve ccbenchmark - Benchmark Result Aggregation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error type and exit codes of the command-line interface.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    /// Command completed.
    pub const SUCCESS: u8 = 0;
    /// No command given; usage was printed.
    pub const NO_ACTION: u8 = 1;
    /// The working directory does not exist.
    pub const INVALID_WORKDIR: u8 = 2;
    /// No benchmark matched.
    pub const NO_BENCHMARKS_FOUND: u8 = 3;
    /// The benchmark pattern is not a valid regular expression.
    pub const INVALID_REGEX: u8 = 4;
    /// The working directory has no settings file.
    pub const NO_LOCAL_SETTINGS: u8 = 5;
    /// Any other failure.
    pub const FAILURE: u8 = 6;
}

/// Errors reported by CLI commands.
///
/// # Examples
///
/// ```
/// use ccbenchmark_cli::error::{exit_code, CliError};
///
/// let err = CliError::NoBenchmarksFound { pattern: "BM_.*".into() };
/// assert_eq!(err.exit_code(), exit_code::NO_BENCHMARKS_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum CliError {
    /// The working directory is missing or not a directory.
    #[error("Invalid working directory: {}", .0.display())]
    InvalidWorkingDirectory(PathBuf),

    /// No loaded benchmark matched the pattern.
    #[error("No benchmarks found matching '{pattern}'")]
    NoBenchmarksFound {
        /// The pattern.
        pattern: String,
    },

    /// The pattern does not compile.
    #[error("Invalid regex '{pattern}': {message}")]
    InvalidRegex {
        /// The pattern.
        pattern: String,
        /// Compiler message.
        message: String,
    },

    /// There is no settings file.
    #[error("No local settings found at {}", .0.display())]
    NoLocalSettings(PathBuf),

    /// Loading, configuration or running failed.
    #[error(transparent)]
    Benchmark(ccbenchmark::Error),

    /// Output could not be serialized.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidWorkingDirectory(_) => exit_code::INVALID_WORKDIR,
            CliError::NoBenchmarksFound { .. } => exit_code::NO_BENCHMARKS_FOUND,
            CliError::InvalidRegex { .. } => exit_code::INVALID_REGEX,
            CliError::NoLocalSettings(_) => exit_code::NO_LOCAL_SETTINGS,
            CliError::Benchmark(_) | CliError::Json(_) => exit_code::FAILURE,
        }
    }
}

impl From<ccbenchmark::Error> for CliError {
    fn from(err: ccbenchmark::Error) -> Self {
        match err {
            ccbenchmark::Error::SettingsNotFound(path) => CliError::NoLocalSettings(path),
            other => CliError::Benchmark(other),
        }
    }
}
