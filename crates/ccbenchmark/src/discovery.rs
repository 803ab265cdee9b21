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

//! Iteration directory discovery.
//!
//! Results of one iteration live in a directory named `_iter_<name>`
//! somewhere below a framework's output directory:
//!
//! ```text
//! benchmark_results/cpp/
//! ├── sort/
//! │   ├── _iter_baseline/bench_sort.json
//! │   └── _iter_recent/bench_sort.json
//! └── hash/
//!     └── _iter_recent/bench_hash.json
//! ```

use ccbenchmark_frameworks::Framework;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Directory name prefix marking an iteration.
pub const ITERATION_PREFIX: &str = "_iter_";

/// Iteration name the runner always refreshes.
pub const RECENT_ITERATION: &str = "recent";

/// One discovered iteration directory and the framework that reads it.
#[derive(Clone)]
pub struct IterationDir {
    /// Directory path.
    pub path: PathBuf,
    /// Iteration name, the directory name without [`ITERATION_PREFIX`].
    pub name: String,
    /// Framework of the output tree the directory was found in.
    pub framework: Arc<dyn Framework>,
    /// Newest modification time of any file below the directory.
    pub modified: SystemTime,
}

impl std::fmt::Debug for IterationDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterationDir")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("framework", &self.framework.name())
            .field("modified", &self.modified)
            .finish()
    }
}

/// Returns the iteration name of a directory, if it is an iteration
/// directory.
pub fn iteration_name(dir: &Path) -> Option<&str> {
    dir.file_name()?.to_str()?.strip_prefix(ITERATION_PREFIX)
}

fn latest_modification(dir: &Path) -> SystemTime {
    let newest = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok()?.modified().ok())
        .max();
    newest
        .or_else(|| std::fs::metadata(dir).ok()?.modified().ok())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Finds every iteration directory below the given output roots, oldest
/// first.
///
/// A directory counts once it directly contains a file. Order is by the
/// newest file modification time inside each directory, ties broken by
/// path. Unreadable roots are logged and skipped.
pub fn discover_iterations(roots: &[(PathBuf, Arc<dyn Framework>)]) -> Vec<IterationDir> {
    let mut seen = HashSet::new();
    let mut iterations = Vec::new();

    for (root, framework) in roots {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable path below {}: {}", root.display(), err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(dir) = entry.path().parent() else {
                continue;
            };
            let Some(name) = iteration_name(dir) else {
                continue;
            };
            if !seen.insert(dir.to_path_buf()) {
                continue;
            }

            debug!("Found iteration '{}' at {}", name, dir.display());
            iterations.push(IterationDir {
                path: dir.to_path_buf(),
                name: name.to_string(),
                framework: Arc::clone(framework),
                modified: latest_modification(dir),
            });
        }
    }

    iterations.sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.path.cmp(&b.path)));
    iterations
}

/// Iteration names in chronological order, deduplicated across output
/// trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IterationNames {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl IterationNames {
    /// Collects the names of discovered iterations; the first occurrence of a
    /// name fixes its position.
    pub fn from_iterations(iterations: &[IterationDir]) -> Self {
        let mut names = Self::default();
        for iteration in iterations {
            names.insert(&iteration.name);
        }
        names
    }

    fn insert(&mut self, name: &str) -> usize {
        if let Some(&index) = self.index.get(name) {
            return index;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), index);
        index
    }

    /// Column index of an iteration name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Names, oldest first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of distinct iterations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no iteration was found.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccbenchmark_frameworks::GoogleBenchmark;
    use std::fs;
    use std::time::Duration;

    fn touch(path: &Path, age_secs: u64) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "{}").unwrap();
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
            .unwrap();
    }

    fn google() -> Arc<dyn Framework> {
        Arc::new(GoogleBenchmark)
    }

    #[test]
    fn test_iteration_name() {
        assert_eq!(iteration_name(Path::new("out/_iter_v1")), Some("v1"));
        assert_eq!(iteration_name(Path::new("out/_iter_")), Some(""));
        assert_eq!(iteration_name(Path::new("out/iter_v1")), None);
    }

    #[test]
    fn test_discovery_orders_by_modification() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        touch(&root.join("sort/_iter_new/bench.json"), 10);
        touch(&root.join("sort/_iter_old/bench.json"), 1000);
        touch(&root.join("sort/_iter_mid/bench.json"), 500);
        fs::create_dir_all(root.join("sort/_iter_empty")).unwrap();
        touch(&root.join("sort/not_an_iteration/bench.json"), 1);

        let iterations = discover_iterations(&[(root, google())]);
        let names: Vec<_> = iterations.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["old", "mid", "new"]);
    }

    #[test]
    fn test_names_are_deduplicated_across_trees() {
        let dir = tempfile::tempdir().unwrap();
        let cpp = dir.path().join("cpp");
        let py = dir.path().join("py");
        touch(&cpp.join("a/_iter_v1/bench.json"), 300);
        touch(&py.join("_iter_v1/bench.json"), 200);
        touch(&cpp.join("a/_iter_v2/bench.json"), 100);

        let iterations = discover_iterations(&[(cpp, google()), (py, google())]);
        assert_eq!(iterations.len(), 3);

        let names = IterationNames::from_iterations(&iterations);
        assert_eq!(names.names(), &["v1", "v2"]);
        assert_eq!(names.get("v2"), Some(1));
        assert_eq!(names.get("v3"), None);
    }

    #[test]
    fn test_missing_root_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let iterations = discover_iterations(&[(dir.path().join("nope"), google())]);
        assert!(iterations.is_empty());
    }
}
