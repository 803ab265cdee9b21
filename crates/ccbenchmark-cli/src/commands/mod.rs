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

//! CLI command implementations

mod compare;
mod run;
mod table;
mod tree;

pub use compare::compare;
pub use run::run;
pub use table::render_table;
pub use tree::{filter_tree, tree};

use crate::error::CliError;
use ccbenchmark::{BenchmarkData, ConfiguredFramework, FrameworkRegistry, LocalSettings};
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Checks the working directory and binds its settings to the built-in
/// frameworks.
///
/// # Errors
///
/// Returns [`CliError::InvalidWorkingDirectory`] if `working_dir` is not a
/// directory, [`CliError::NoLocalSettings`] if it has no settings file, and
/// [`CliError::Benchmark`] for invalid settings.
pub fn configure(working_dir: &Path) -> Result<Vec<ConfiguredFramework>, CliError> {
    if !working_dir.is_dir() {
        return Err(CliError::InvalidWorkingDirectory(working_dir.to_path_buf()));
    }
    let settings = LocalSettings::load(working_dir)?;
    let frameworks = settings.resolve(&FrameworkRegistry::default())?;
    debug!("Configured {} frameworks", frameworks.len());
    Ok(frameworks)
}

/// Compiles a benchmark selection pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex, CliError> {
    Regex::new(pattern).map_err(|err| CliError::InvalidRegex {
        pattern: pattern.to_string(),
        message: err.to_string(),
    })
}

/// Rows whose `path/name` label matches, in row order.
pub fn select(data: &BenchmarkData, matcher: &Regex) -> Vec<usize> {
    (0..data.len())
        .filter(|&row| matcher.is_match(&data.label(row)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccbenchmark::{BenchmarkTime, TimeUnit};

    #[test]
    fn test_compile_pattern_error() {
        let err = compile_pattern("(").unwrap_err();
        assert!(matches!(err, CliError::InvalidRegex { .. }));
    }

    #[test]
    fn test_select_matches_labels() {
        let mut data = BenchmarkData::new(vec!["recent".into()]);
        let t = BenchmarkTime::new(1.0, TimeUnit::Ns);
        for (path, name) in [("sort", "BM_Sort"), ("hash", "BM_Hash"), ("hash", "BM_Crc")] {
            let row = data.register_or_get(Path::new(path), name);
            data.write(row, 0, 0, t, t);
        }

        assert_eq!(select(&data, &compile_pattern("^hash/").unwrap()), vec![1, 2]);
        assert_eq!(select(&data, &compile_pattern("Sort").unwrap()), vec![0]);
        assert!(select(&data, &compile_pattern("nothing").unwrap()).is_empty());
    }

    #[test]
    fn test_configure_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = configure(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, CliError::InvalidWorkingDirectory(_)));
    }
}
