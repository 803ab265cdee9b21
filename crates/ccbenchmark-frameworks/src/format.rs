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

//! Benchmark output formats.

use crate::error::FrameworkError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// File format a benchmark writes its results in.
///
/// The format name doubles as the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON report.
    Json,
    /// CSV report.
    Csv,
    /// Human-readable console table.
    Console,
}

impl OutputFormat {
    /// Every format.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Console];

    /// Returns the format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Console => "console",
        }
    }

    /// Returns the file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Detects the format from a file's extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccbenchmark_frameworks::OutputFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(OutputFormat::from_path(Path::new("out/bench.csv")), Some(OutputFormat::Csv));
    /// assert_eq!(OutputFormat::from_path(Path::new("out/bench.txt")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "console" => Ok(OutputFormat::Console),
            _ => Err(FrameworkError::UnknownOutputFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("console".parse::<OutputFormat>().unwrap(), OutputFormat::Console);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(FrameworkError::UnknownOutputFormat(f)) if f == "yaml"
        ));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a/_iter_v1/bench.json")),
            Some(OutputFormat::Json)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("bench.console")),
            Some(OutputFormat::Console)
        );
        assert_eq!(OutputFormat::from_path(Path::new("bench")), None);
    }

    #[test]
    fn test_extension_matches_name() {
        for format in OutputFormat::ALL {
            assert_eq!(format.extension(), format.to_string());
        }
    }
}
