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

//! Tree command - prints the benchmark hierarchy

use super::{compile_pattern, configure};
use crate::error::CliError;
use ccbenchmark::{load_configured, BenchmarkData, PathTree};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

fn prune(tree: PathTree, keep: &dyn Fn(usize) -> bool) -> Option<PathTree> {
    match tree {
        PathTree::Benchmark(row) => keep(row).then_some(PathTree::Benchmark(row)),
        PathTree::Node(children) => {
            let children: BTreeMap<_, _> = children
                .into_iter()
                .filter_map(|(key, child)| Some((key, prune(child, keep)?)))
                .collect();
            (!children.is_empty()).then_some(PathTree::Node(children))
        }
    }
}

/// Path hierarchy of the rows whose `path/name` label matches; branches
/// left without benchmarks are removed.
pub fn filter_tree(data: &BenchmarkData, matcher: &Regex) -> BTreeMap<String, PathTree> {
    let keep = |row: usize| matcher.is_match(&data.label(row));
    data.data_to_dict()
        .into_iter()
        .filter_map(|(key, child)| Some((key, prune(child, &keep)?)))
        .collect()
}

/// Prints the hierarchy of matching benchmarks as pretty JSON, leaves
/// holding row indices.
///
/// # Errors
///
/// Returns `Err` if the configuration is unusable, the pattern is invalid
/// or nothing matches.
pub fn tree(working_dir: &Path, pattern: &str) -> Result<(), CliError> {
    let frameworks = configure(working_dir)?;
    let matcher = compile_pattern(pattern)?;
    let data = load_configured(&frameworks)?;

    let hierarchy = filter_tree(&data, &matcher);
    if hierarchy.is_empty() {
        return Err(CliError::NoBenchmarksFound {
            pattern: pattern.to_string(),
        });
    }
    println!("{}", serde_json::to_string_pretty(&hierarchy)?);
    Ok(())
}
