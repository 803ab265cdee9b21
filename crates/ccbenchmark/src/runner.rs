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

//! Runs benchmark executables into iteration directories.

use crate::discovery::{ITERATION_PREFIX, RECENT_ITERATION};
use crate::error::{Error, Result};
use crate::settings::ConfiguredFramework;
use ccbenchmark_core::strip_common_paths;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Result of one benchmark execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Executable or script that was run.
    pub runnable: PathBuf,
    /// Result file it was asked to write.
    pub output: PathBuf,
    /// Process exit code, `-1` if killed by a signal.
    pub exit_code: i32,
}

impl RunOutcome {
    /// Returns true if the benchmark exited with code 0.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Expands glob patterns into the files they match, in pattern order.
///
/// # Errors
///
/// Returns [`Error::Pattern`] for a malformed pattern.
pub fn expand_runnables(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut runnables = Vec::new();
    for pattern in patterns {
        let matches = glob::glob(pattern).map_err(|err| Error::Pattern {
            pattern: pattern.clone(),
            message: err.to_string(),
        })?;
        for entry in matches {
            match entry {
                Ok(path) if path.is_file() => runnables.push(path),
                Ok(_) => {}
                Err(err) => warn!("Skipping unreadable match of '{}': {}", pattern, err),
            }
        }
    }
    Ok(runnables)
}

/// Removes files in `dir` that share `file_name`'s stem but not its
/// extension, so one iteration never holds two formats of a benchmark.
pub fn remove_similar_files(dir: &Path, file_name: &Path) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.file_stem() != file_name.file_stem() {
            continue;
        }
        if path.extension().is_none() || path.extension() == file_name.extension() {
            continue;
        }
        debug!("Removing stale result {}", path.display());
        fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
    }
    Ok(())
}

fn copy_to_recent(output: &Path, file_name: &Path) -> Result<()> {
    let Some(iteration_parent) = output.parent().and_then(Path::parent) else {
        return Ok(());
    };
    let recent_dir = iteration_parent.join(format!("{}{}", ITERATION_PREFIX, RECENT_ITERATION));
    fs::create_dir_all(&recent_dir).map_err(|e| Error::io(&recent_dir, e))?;

    let destination = recent_dir.join(file_name);
    fs::copy(output, &destination).map_err(|e| Error::io(output, e))?;
    remove_similar_files(&recent_dir, file_name)?;

    // the copy keeps the source mtime; refresh it so the recent iteration sorts last
    fs::File::options()
        .write(true)
        .open(&destination)
        .and_then(|file| file.set_modified(SystemTime::now()))
        .map_err(|e| Error::io(&destination, e))?;
    debug!("Copied result to recent: {}", destination.display());
    Ok(())
}

/// Runs every runnable of a configured framework as iteration `tag`.
///
/// Each runnable writes `<output_dir>/<path>/_iter_<tag>/<stem>.<format>`,
/// where `<path>` is the runnable's directory with the prefix shared by all
/// runnables removed. Unless `tag` is `recent`, the result is also copied to
/// the sibling `_iter_recent` directory. A non-zero exit code is logged and
/// the remaining benchmarks still run.
///
/// # Errors
///
/// Returns an error if a pattern is malformed, a benchmark cannot be
/// started, or the output directories cannot be written.
pub fn run_benchmarks(configured: &ConfiguredFramework, tag: &str) -> Result<Vec<RunOutcome>> {
    let settings = &configured.settings;
    let runnables = expand_runnables(&settings.benchmark_runnables)?;
    if runnables.is_empty() {
        warn!("No benchmark runnables found for {}", settings.framework_name);
        return Ok(Vec::new());
    }

    let stripped = strip_common_paths(&runnables);
    let extension = settings.output_format.extension();
    let mut outcomes = Vec::with_capacity(runnables.len());

    for (runnable, short_path) in runnables.iter().zip(&stripped) {
        let output_dir = settings
            .output_dir
            .join(short_path.parent().unwrap_or_else(|| Path::new("")))
            .join(format!("{}{}", ITERATION_PREFIX, tag));
        fs::create_dir_all(&output_dir).map_err(|e| Error::io(&output_dir, e))?;

        let benchmark_name = runnable
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = PathBuf::from(format!("{}.{}", benchmark_name, extension));
        let output = output_dir.join(&file_name);

        info!("Running benchmark: {}", benchmark_name);
        let exit_code = configured
            .framework
            .run(runnable, &output, settings.output_format)?;
        remove_similar_files(&output_dir, &file_name)?;

        if exit_code == 0 {
            info!("{}: OK", benchmark_name);
        } else {
            warn!("{}: Exited with code: {}", benchmark_name, exit_code);
        }

        if tag != RECENT_ITERATION {
            if output.is_file() {
                copy_to_recent(&output, &file_name)?;
            } else {
                warn!("{}: no result written, not copied to recent", benchmark_name);
            }
        }

        outcomes.push(RunOutcome {
            runnable: runnable.clone(),
            output,
            exit_code,
        });
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_runnables_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bench_a"), "").unwrap();
        fs::write(dir.path().join("bench_b"), "").unwrap();
        fs::create_dir(dir.path().join("bench_dir")).unwrap();

        let pattern = dir.path().join("bench_*").to_string_lossy().into_owned();
        let runnables = expand_runnables(&[pattern]).unwrap();
        assert_eq!(
            runnables,
            vec![dir.path().join("bench_a"), dir.path().join("bench_b")]
        );
    }

    #[test]
    fn test_expand_runnables_bad_pattern() {
        let err = expand_runnables(&["bench/[".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Pattern { .. }));
    }

    #[test]
    fn test_remove_similar_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["bench.json", "bench.csv", "bench.console", "other.csv", "bench"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        remove_similar_files(dir.path(), Path::new("bench.json")).unwrap();

        assert!(dir.path().join("bench.json").exists());
        assert!(!dir.path().join("bench.csv").exists());
        assert!(!dir.path().join("bench.console").exists());
        assert!(dir.path().join("other.csv").exists());
        assert!(dir.path().join("bench").exists());
    }
}
