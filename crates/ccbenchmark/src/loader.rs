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

//! Builds a [`BenchmarkData`] from iteration directories.
//!
//! Files are parsed in parallel. Rows are then registered and cells written
//! on the calling thread in discovery order, so row indices do not depend
//! on scheduling.

use crate::discovery::{discover_iterations, IterationDir, IterationNames};
use crate::error::Result;
use crate::settings::ConfiguredFramework;
use ccbenchmark_core::BenchmarkData;
use ccbenchmark_frameworks::{Framework, ParseResult};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One result file queued for parsing.
struct ResultFile<'a> {
    path: PathBuf,
    benchmark_path: PathBuf,
    iteration_index: usize,
    framework: &'a dyn Framework,
}

/// Logical executable path of a result file: the directory above the
/// iteration directory joined with the file name up to its first dot.
///
/// # Examples
///
/// ```
/// use ccbenchmark::benchmark_path;
/// use std::path::Path;
///
/// assert_eq!(
///     benchmark_path(Path::new("out/sort/_iter_v1/bench_sort.json")),
///     Path::new("out/sort/bench_sort")
/// );
/// ```
pub fn benchmark_path(file: &Path) -> PathBuf {
    let stem = file
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = stem.split('.').next().unwrap_or_default();
    let parent = file
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));
    parent.join(stem)
}

fn list_files<'a>(iteration: &'a IterationDir, iteration_index: usize) -> Vec<ResultFile<'a>> {
    let entries = match std::fs::read_dir(&iteration.path) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Skipping iteration {}: {}", iteration.path.display(), err);
            return Vec::new();
        }
    };
    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(err) => {
                warn!("Skipping entry in {}: {}", iteration.path.display(), err);
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        files.push(ResultFile {
            benchmark_path: benchmark_path(&path),
            path,
            iteration_index,
            framework: iteration.framework.as_ref(),
        });
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn parse_file(file: &ResultFile<'_>) -> Vec<ParseResult> {
    let handle = match File::open(&file.path) {
        Ok(handle) => handle,
        Err(err) => {
            warn!("Skipping {}: {}", file.path.display(), err);
            return Vec::new();
        }
    };
    match file
        .framework
        .parse(Box::new(BufReader::new(handle)), &file.path)
    {
        Ok(results) => results.collect(),
        Err(err) => {
            warn!("Skipping {}: {}", file.path.display(), err);
            Vec::new()
        }
    }
}

/// Loads every result file of the given iterations.
///
/// `iterations` must be ordered oldest first and `names` must contain every
/// iteration name. The returned dataset is validated, normalized and has
/// its executable paths shortened.
///
/// # Errors
///
/// Returns an error if a benchmark row ends up without data. Iteration
/// directories that cannot be listed are logged and skipped.
///
/// # Panics
///
/// Panics if an iteration's name is missing from `names`.
pub fn load_benchmark_data(iterations: &[IterationDir], names: &IterationNames) -> Result<BenchmarkData> {
    let mut files = Vec::new();
    for iteration in iterations {
        let Some(index) = names.get(&iteration.name) else {
            panic!("iteration '{}' is missing from the name index", iteration.name);
        };
        files.extend(list_files(iteration, index));
    }
    debug!("Parsing {} result files", files.len());

    let parsed: Vec<Vec<ParseResult>> = files.par_iter().map(parse_file).collect();

    let mut data = BenchmarkData::new(names.names().to_vec());
    for (file, results) in files.iter().zip(parsed) {
        for result in results {
            let row = data.register_or_get(&file.benchmark_path, &result.name);
            data.write(
                row,
                result.metric_index(),
                file.iteration_index,
                result.real_time,
                result.cpu_time,
            );
        }
    }

    data.finalize()?;
    info!(
        "Loaded {} benchmarks across {} iterations",
        data.len(),
        names.len()
    );
    Ok(data)
}

/// Discovers and loads the results of every configured framework.
pub fn load_configured(frameworks: &[ConfiguredFramework]) -> Result<BenchmarkData> {
    let roots: Vec<(PathBuf, Arc<dyn Framework>)> = frameworks
        .iter()
        .map(|f| (f.settings.output_dir.clone(), Arc::clone(&f.framework)))
        .collect();
    let iterations = discover_iterations(&roots);
    let names = IterationNames::from_iterations(&iterations);
    load_benchmark_data(&iterations, &names)
}
