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

//! String tables for a presentation layer.
//!
//! A selection of one row is shown as that benchmark's history (one table
//! row per iteration). A selection of several rows is shown as a snapshot
//! (one table row per benchmark, its most recent iteration). Each metric
//! contributes its value column followed by one delta column per active
//! comparison.

use crate::data::{BenchmarkData, BenchmarkSegment};
use crate::time::TimeType;

const NOT_AVAILABLE: &str = "N/A";

impl BenchmarkData {
    fn displayed_segments(&self, selected: &[usize]) -> Vec<&[BenchmarkSegment]> {
        match selected {
            [] => Vec::new(),
            [row] => self.benchmarks()[*row]
                .times
                .iter()
                .map(Vec::as_slice)
                .collect(),
            rows => rows
                .iter()
                .map(|&row| self.benchmarks()[row].recent())
                .collect(),
        }
    }

    /// Number of delta columns per metric for a selection (at least one).
    pub fn comparison_depth(&self, selected: &[usize]) -> usize {
        self.displayed_segments(selected)
            .into_iter()
            .flatten()
            .map(|segment| {
                segment
                    .real_time_comparisons
                    .len()
                    .max(segment.cpu_time_comparisons.len())
            })
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Column headers for a selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccbenchmark_core::{BenchmarkData, BenchmarkTime, TimeUnit};
    /// use std::path::Path;
    ///
    /// let mut data = BenchmarkData::new(vec!["recent".into()]);
    /// let row = data.register_or_get(Path::new("bin"), "BM_A");
    /// let t = BenchmarkTime::new(1.0, TimeUnit::Ns);
    /// data.write(row, 0, 0, t, t);
    ///
    /// let columns = data.get_columns(&[row]);
    /// assert_eq!(&columns[..4], &["Time", "ΔTime", "μ", "Δμ"]);
    /// ```
    pub fn get_columns(&self, selected: &[usize]) -> Vec<String> {
        if selected.is_empty() {
            return Vec::new();
        }
        let depth = self.comparison_depth(selected);
        self.metric_names()
            .iter()
            .flat_map(|metric| {
                std::iter::once(metric.label().to_string())
                    .chain(std::iter::repeat(format!("Δ{}", metric.label())).take(depth))
            })
            .collect()
    }

    /// Row headers for a selection: iteration names for a single
    /// benchmark, benchmark names otherwise.
    pub fn get_rows(&self, selected: &[usize]) -> Vec<String> {
        match selected {
            [] => Vec::new(),
            [_] => self.iteration_names().to_vec(),
            rows => rows
                .iter()
                .map(|&row| self.benchmark_names()[row].clone())
                .collect(),
        }
    }

    /// Formatted cells for a selection on one axis.
    ///
    /// The outer vector follows [`get_rows`](Self::get_rows), the inner one
    /// follows [`get_columns`](Self::get_columns). Missing comparisons are
    /// padded with `N/A`.
    ///
    /// # Panics
    ///
    /// Panics if a selected index is out of range.
    pub fn column_to_str_matrix(&self, selected: &[usize], time_type: TimeType) -> Vec<Vec<String>> {
        if selected.is_empty() {
            return Vec::new();
        }
        self.assert_selection(selected);
        let depth = self.comparison_depth(selected);

        self.displayed_segments(selected)
            .into_iter()
            .map(|segments| {
                let mut row = Vec::with_capacity(segments.len() * (depth + 1));
                for segment in segments {
                    row.push(segment.time(time_type).to_string());
                    let comparisons = segment.comparisons(time_type);
                    row.extend(comparisons.iter().map(ToString::to_string));
                    row.extend(
                        std::iter::repeat(NOT_AVAILABLE.to_string())
                            .take(depth.saturating_sub(comparisons.len())),
                    );
                }
                row
            })
            .collect()
    }
}
