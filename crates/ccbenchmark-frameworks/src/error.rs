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

//! Error types for benchmark frameworks.

use ccbenchmark_core::DataError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for framework operations.
pub type Result<T> = std::result::Result<T, FrameworkError>;

/// Errors raised while resolving, running or parsing a benchmark framework.
///
/// Record-level variants ([`MissingField`](Self::MissingField),
/// [`InvalidField`](Self::InvalidField),
/// [`UnknownAggregate`](Self::UnknownAggregate)) never escape a parser: the
/// record is logged and dropped. File-level variants are returned from
/// [`Framework::parse`](crate::Framework::parse) and the caller skips the
/// file.
///
/// # Examples
///
/// ```
/// use ccbenchmark_frameworks::{FrameworkError, OutputFormat};
///
/// let err = FrameworkError::UnsupportedFormat {
///     framework: "python.pyperf".to_string(),
///     format: "csv".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Framework 'python.pyperf' does not support output format 'csv'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum FrameworkError {
    /// No framework registered under this name.
    #[error("Unknown framework: '{0}'")]
    UnknownFramework(String),

    /// The framework cannot produce or read this format.
    #[error("Framework '{framework}' does not support output format '{format}'")]
    UnsupportedFormat {
        /// Framework name.
        framework: String,
        /// Requested format.
        format: String,
    },

    /// A format name that is not `json`, `csv` or `console`.
    #[error("Unknown output format: '{0}'")]
    UnknownOutputFormat(String),

    /// A record lacks a required field.
    #[error("Missing '{key}'")]
    MissingField {
        /// Field or column name.
        key: String,
    },

    /// A field is present but cannot be interpreted.
    #[error("Invalid value for '{key}': '{value}'")]
    InvalidField {
        /// Field or column name.
        key: String,
        /// The offending value.
        value: String,
    },

    /// An aggregate kind that maps to no metric slot.
    #[error("Unknown aggregate_name: '{0}'")]
    UnknownAggregate(String),

    /// A file lacks its required top-level structure.
    #[error("Malformed file {}: {message}", path.display())]
    MalformedFile {
        /// File being parsed.
        path: PathBuf,
        /// What was missing.
        message: String,
    },

    /// Value-level error from the data model, such as an unknown time unit.
    #[error(transparent)]
    Data(#[from] DataError),

    /// I/O error while reading a file or launching a benchmark.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FrameworkError {
    /// Create a missing field error.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingField { key: key.into() }
    }

    /// Create an invalid field error.
    pub fn invalid(key: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidField {
            key: key.into(),
            value: value.to_string(),
        }
    }

    /// Create a malformed file error.
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MalformedFile {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors() {
        assert_eq!(FrameworkError::missing("cpu_time").to_string(), "Missing 'cpu_time'");
        assert_eq!(
            FrameworkError::invalid("real_time", "fast").to_string(),
            "Invalid value for 'real_time': 'fast'"
        );
    }

    #[test]
    fn test_data_error_is_transparent() {
        let err: FrameworkError = DataError::UnknownTimeUnit("h".into()).into();
        assert_eq!(err.to_string(), "Unknown time unit: 'h'");
    }
}
