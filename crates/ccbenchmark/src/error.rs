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

//! Error types for loading, configuring and running benchmarks.

use ccbenchmark_core::DataError;
use ccbenchmark_frameworks::FrameworkError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for ccbenchmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the loader, the settings reader and the runner.
///
/// Problems with individual result files are not errors: those files are
/// logged and skipped.
///
/// # Examples
///
/// ```
/// use ccbenchmark::Error;
/// use std::path::PathBuf;
///
/// let err = Error::SettingsNotFound(PathBuf::from(".ccbenchmark/settings.yaml"));
/// assert_eq!(
///     err.to_string(),
///     "No local settings found at .ccbenchmark/settings.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Framework lookup or execution failed.
    #[error(transparent)]
    Framework(#[from] FrameworkError),

    /// The loaded dataset is inconsistent.
    #[error(transparent)]
    Data(#[from] DataError),

    /// File system operation failed.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// Path involved.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The settings file exists but is not valid.
    #[error("Invalid settings in '{}': {message}", path.display())]
    Settings {
        /// Settings file.
        path: PathBuf,
        /// What is wrong.
        message: String,
    },

    /// There is no settings file.
    #[error("No local settings found at {}", .0.display())]
    SettingsNotFound(PathBuf),

    /// A runnable glob pattern is malformed.
    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern {
        /// The pattern.
        pattern: String,
        /// Parser message.
        message: String,
    },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a settings error.
    pub fn settings(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Settings {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
