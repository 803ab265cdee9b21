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

//! Executable path shortening and the benchmark hierarchy.

use crate::data::BenchmarkData;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

/// Removes the leading path components shared by every path.
///
/// Stripping stops at the first component on which any two paths disagree,
/// and never consumes the last component of the shortest path. The result
/// is independent of input order and stripping it again changes nothing.
///
/// # Examples
///
/// ```
/// use ccbenchmark_core::strip_common_paths;
/// use std::path::PathBuf;
///
/// let paths = vec![PathBuf::from("/a/b/x"), PathBuf::from("/a/b/y")];
/// assert_eq!(
///     strip_common_paths(&paths),
///     vec![PathBuf::from("x"), PathBuf::from("y")]
/// );
/// assert_eq!(
///     strip_common_paths(&[PathBuf::from("/a/b/x")]),
///     vec![PathBuf::from("x")]
/// );
/// ```
pub fn strip_common_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        warn!("No paths to strip");
        return Vec::new();
    }

    let split: Vec<Vec<Component<'_>>> = paths.iter().map(|p| p.components().collect()).collect();
    let max_depth = split
        .iter()
        .map(Vec::len)
        .min()
        .unwrap_or(0)
        .saturating_sub(1);

    let mut depth = 0;
    while depth < max_depth && split.iter().all(|parts| parts[depth] == split[0][depth]) {
        depth += 1;
    }

    split
        .iter()
        .map(|parts| parts[depth..].iter().collect())
        .collect()
}

/// A node of the benchmark hierarchy.
///
/// Serializes as nested objects keyed by path segment, with benchmark names
/// mapping to their row index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathTree {
    /// A benchmark row.
    Benchmark(usize),
    /// A path segment.
    Node(BTreeMap<String, PathTree>),
}

impl PathTree {
    /// Row index if this is a leaf.
    pub fn as_benchmark(&self) -> Option<usize> {
        match self {
            PathTree::Benchmark(index) => Some(*index),
            PathTree::Node(_) => None,
        }
    }

    /// Child by segment name.
    pub fn get(&self, key: &str) -> Option<&PathTree> {
        match self {
            PathTree::Benchmark(_) => None,
            PathTree::Node(children) => children.get(key),
        }
    }
}

fn segment_name(component: &Component<'_>) -> String {
    component.as_os_str().to_string_lossy().into_owned()
}

fn insert(root: &mut BTreeMap<String, PathTree>, path: &Path, name: &str, row: usize) {
    let mut current = root;
    for component in path.components() {
        let key = segment_name(&component);
        let node = current
            .entry(key)
            .or_insert_with(|| PathTree::Node(BTreeMap::new()));
        current = match node {
            PathTree::Node(children) => children,
            PathTree::Benchmark(existing) => {
                warn!(
                    "Benchmark {} shadows path segment of {}/{}, not listed",
                    existing,
                    path.display(),
                    name
                );
                return;
            }
        };
    }
    current.insert(name.to_string(), PathTree::Benchmark(row));
}

impl BenchmarkData {
    /// Replaces every row's executable path by its shortest distinguishing
    /// suffix; see [`strip_common_paths`].
    pub fn strip_common_paths(&mut self) {
        if self.is_empty() {
            return;
        }
        let paths: Vec<PathBuf> = self
            .benchmarks()
            .iter()
            .map(|b| b.executable_path.clone())
            .collect();
        let stripped = strip_common_paths(&paths);
        for (iterations, path) in self.benchmarks_mut().iter_mut().zip(stripped) {
            iterations.executable_path = path;
        }
    }

    /// Builds the path hierarchy: segments of each row's executable path,
    /// then the benchmark name, mapping to the row index.
    pub fn data_to_dict(&self) -> BTreeMap<String, PathTree> {
        let mut root = BTreeMap::new();
        for (row, (iterations, name)) in self
            .benchmarks()
            .iter()
            .zip(self.benchmark_names())
            .enumerate()
        {
            insert(&mut root, &iterations.executable_path, name, row);
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{BenchmarkTime, TimeUnit};

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_strip_shared_prefix() {
        assert_eq!(
            strip_common_paths(&paths(&["/a/b/x", "/a/b/y"])),
            paths(&["x", "y"])
        );
        assert_eq!(
            strip_common_paths(&paths(&["out/sort/bench", "out/hash/bench"])),
            paths(&["sort/bench", "hash/bench"])
        );
    }

    #[test]
    fn test_strip_never_empties_shortest() {
        assert_eq!(strip_common_paths(&paths(&["/a/b/x"])), paths(&["x"]));
        assert_eq!(
            strip_common_paths(&paths(&["a/b", "a/b/c"])),
            paths(&["b", "b/c"])
        );
        assert_eq!(
            strip_common_paths(&paths(&["a/b", "a/b"])),
            paths(&["b", "b"])
        );
    }

    #[test]
    fn test_strip_no_common_prefix() {
        let input = paths(&["x/1", "y/1"]);
        assert_eq!(strip_common_paths(&input), input);
    }

    #[test]
    fn test_strip_is_idempotent() {
        let once = strip_common_paths(&paths(&["/a/b/x/1", "/a/b/y/2", "/a/b/y/3"]));
        assert_eq!(strip_common_paths(&once), once);
    }

    #[test]
    fn test_strip_empty_input() {
        assert!(strip_common_paths(&[]).is_empty());
    }

    fn dataset() -> BenchmarkData {
        let mut data = BenchmarkData::new(vec!["recent".into()]);
        let t = BenchmarkTime::new(1.0, TimeUnit::Ns);
        for (path, name) in [
            ("/w/out/sort", "BM_Sort"),
            ("/w/out/sort", "BM_Merge"),
            ("/w/out/hash", "BM_Sort"),
        ] {
            let row = data.register_or_get(Path::new(path), name);
            data.write(row, 0, 0, t, t);
        }
        data
    }

    #[test]
    fn test_data_strip_common_paths() {
        let mut data = dataset();
        data.strip_common_paths();
        let stripped: Vec<_> = data
            .benchmarks()
            .iter()
            .map(|b| b.executable_path.clone())
            .collect();
        assert_eq!(stripped, paths(&["sort", "sort", "hash"]));
    }

    #[test]
    fn test_data_to_dict() {
        let mut data = dataset();
        data.strip_common_paths();
        let tree = data.data_to_dict();

        let sort = &tree["sort"];
        assert_eq!(sort.get("BM_Sort").and_then(PathTree::as_benchmark), Some(0));
        assert_eq!(sort.get("BM_Merge").and_then(PathTree::as_benchmark), Some(1));
        assert_eq!(tree["hash"].get("BM_Sort").and_then(PathTree::as_benchmark), Some(2));

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["sort"]["BM_Merge"], 1);
    }
}
