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

//! Error types for the benchmark data model.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for data model operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised by the benchmark data model.
///
/// Out-of-range indices are not represented here: they break the
/// ingestion contract and panic instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataError {
    /// A time unit string that is not one of `ns`, `us`, `ms`, `s`, `%`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccbenchmark_core::DataError;
    ///
    /// let err = DataError::UnknownTimeUnit("h".to_string());
    /// assert_eq!(err.to_string(), "Unknown time unit: 'h'");
    /// ```
    #[error("Unknown time unit: '{0}'")]
    UnknownTimeUnit(String),

    /// A benchmark row failed post-ingestion validation.
    #[error("Malformed benchmark '{name}' ({}): {reason}", path.display())]
    MalformedBenchmark {
        /// Benchmark name.
        name: String,
        /// Executable path the row belongs to.
        path: PathBuf,
        /// Which invariant was violated.
        reason: String,
    },
}

impl DataError {
    /// Create a malformed benchmark error.
    pub fn malformed(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedBenchmark {
            name: name.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }
}
