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

//! The benchmark matrix: benchmark × iteration × metric.
//!
//! [`BenchmarkData`] is the single mutable store the loader writes into.
//! Rows are created lazily the first time an `(executable_path, name)` pair
//! is seen and are pre-sized to every known iteration and metric slot, so
//! later files only ever overwrite cells.

use crate::error::{DataError, Result};
use crate::metrics::MetricName;
use crate::time::{BenchmarkTime, TimeType};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One (benchmark, iteration, metric) cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkSegment {
    /// Wall-clock measurement.
    pub real_time: BenchmarkTime,
    /// Deltas computed for `real_time` by the active comparison views.
    pub real_time_comparisons: Vec<BenchmarkTime>,
    /// CPU-time measurement.
    pub cpu_time: BenchmarkTime,
    /// Deltas computed for `cpu_time` by the active comparison views.
    pub cpu_time_comparisons: Vec<BenchmarkTime>,
}

impl BenchmarkSegment {
    /// Measurement on one axis.
    pub fn time(&self, time_type: TimeType) -> BenchmarkTime {
        match time_type {
            TimeType::Real => self.real_time,
            TimeType::Cpu => self.cpu_time,
        }
    }

    /// Mutable measurement on one axis.
    pub fn time_mut(&mut self, time_type: TimeType) -> &mut BenchmarkTime {
        match time_type {
            TimeType::Real => &mut self.real_time,
            TimeType::Cpu => &mut self.cpu_time,
        }
    }

    /// Comparisons on one axis.
    pub fn comparisons(&self, time_type: TimeType) -> &[BenchmarkTime] {
        match time_type {
            TimeType::Real => &self.real_time_comparisons,
            TimeType::Cpu => &self.cpu_time_comparisons,
        }
    }

    /// Mutable comparisons on one axis.
    pub fn comparisons_mut(&mut self, time_type: TimeType) -> &mut Vec<BenchmarkTime> {
        match time_type {
            TimeType::Real => &mut self.real_time_comparisons,
            TimeType::Cpu => &mut self.cpu_time_comparisons,
        }
    }

    /// Returns true if either axis holds a measurement.
    pub fn has_data(&self) -> bool {
        !self.real_time.is_absent() || !self.cpu_time.is_absent()
    }
}

/// One benchmark row: every iteration's metric cells.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkIterations {
    /// Cells indexed `[iteration][metric]`.
    pub times: Vec<Vec<BenchmarkSegment>>,
    /// Path of the executable that produced this benchmark.
    pub executable_path: PathBuf,
    recent_index: Option<usize>,
}

impl BenchmarkIterations {
    fn new(iteration_count: usize, metric_count: usize, executable_path: PathBuf) -> Self {
        Self {
            times: vec![vec![BenchmarkSegment::default(); metric_count]; iteration_count],
            executable_path,
            recent_index: None,
        }
    }

    /// Highest iteration index holding at least one measurement.
    pub fn recent_index(&self) -> Option<usize> {
        self.recent_index
    }

    /// Metric cells of the most recent iteration with data.
    ///
    /// # Panics
    ///
    /// Panics if the row has no data at all. Loaded datasets are validated
    /// against that state before they are handed out.
    pub fn recent(&self) -> &[BenchmarkSegment] {
        let index = self.expect_recent();
        &self.times[index]
    }

    /// Mutable metric cells of the most recent iteration with data.
    ///
    /// # Panics
    ///
    /// Panics if the row has no data at all.
    pub fn recent_mut(&mut self) -> &mut [BenchmarkSegment] {
        let index = self.expect_recent();
        &mut self.times[index]
    }

    fn expect_recent(&self) -> usize {
        match self.recent_index {
            Some(index) => index,
            None => panic!(
                "benchmark row for '{}' has no measurements",
                self.executable_path.display()
            ),
        }
    }

    /// Number of iteration columns.
    pub fn iteration_count(&self) -> usize {
        self.times.len()
    }

    /// Number of metric slots.
    pub fn metric_count(&self) -> usize {
        self.times.first().map_or(0, Vec::len)
    }

    /// Iterates all cells of the row.
    pub fn segments_mut(&mut self) -> impl Iterator<Item = &mut BenchmarkSegment> {
        self.times.iter_mut().flatten()
    }
}

/// The complete dataset.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkData {
    benchmark_names: Vec<String>,
    iteration_names: Vec<String>,
    benchmarks: Vec<BenchmarkIterations>,
    metric_names: Vec<MetricName>,
    benchmark_index: HashMap<(PathBuf, String), usize>,
}

impl BenchmarkData {
    /// Creates an empty dataset for a known, chronologically ordered set of
    /// iterations.
    pub fn new(iteration_names: Vec<String>) -> Self {
        Self {
            benchmark_names: Vec::new(),
            iteration_names,
            benchmarks: Vec::new(),
            metric_names: MetricName::ALL.to_vec(),
            benchmark_index: HashMap::new(),
        }
    }

    /// Benchmark names, index-parallel to [`benchmarks`](Self::benchmarks).
    pub fn benchmark_names(&self) -> &[String] {
        &self.benchmark_names
    }

    /// Iteration names, oldest first.
    pub fn iteration_names(&self) -> &[String] {
        &self.iteration_names
    }

    /// Benchmark rows.
    pub fn benchmarks(&self) -> &[BenchmarkIterations] {
        &self.benchmarks
    }

    /// Mutable benchmark rows.
    pub fn benchmarks_mut(&mut self) -> &mut [BenchmarkIterations] {
        &mut self.benchmarks
    }

    /// Metric slots, in column order.
    pub fn metric_names(&self) -> &[MetricName] {
        &self.metric_names
    }

    /// Number of benchmark rows.
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Returns true if no benchmark was ingested.
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// Display label of a row: `executable_path/name`.
    pub fn label(&self, row: usize) -> String {
        self.benchmarks[row]
            .executable_path
            .join(&self.benchmark_names[row])
            .display()
            .to_string()
    }

    /// Resolves the row for `(executable_path, name)`, allocating an empty
    /// row on first sight.
    ///
    /// The same name under two executables is two rows; the same pair seen
    /// again in a later iteration is the same row.
    pub fn register_or_get(&mut self, executable_path: &Path, name: &str) -> usize {
        let key = (executable_path.to_path_buf(), name.to_string());
        if let Some(&index) = self.benchmark_index.get(&key) {
            return index;
        }

        let index = self.benchmarks.len();
        debug!(
            "New benchmark row {}: {} in {}",
            index,
            name,
            executable_path.display()
        );
        self.benchmarks.push(BenchmarkIterations::new(
            self.iteration_names.len(),
            self.metric_names.len(),
            key.0.clone(),
        ));
        self.benchmark_names.push(key.1.clone());
        self.benchmark_index.insert(key, index);
        index
    }

    /// Overwrites one cell.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range; index ranges are fixed before any
    /// file is parsed, so this is a pipeline bug rather than bad input.
    pub fn write(
        &mut self,
        row: usize,
        metric_index: usize,
        iteration_index: usize,
        real_time: BenchmarkTime,
        cpu_time: BenchmarkTime,
    ) {
        assert!(
            row < self.benchmarks.len(),
            "benchmark index out of bounds: {} >= {}",
            row,
            self.benchmarks.len()
        );
        let iterations = &mut self.benchmarks[row];
        assert!(
            iteration_index < iterations.iteration_count(),
            "iteration index out of bounds: {} >= {}",
            iteration_index,
            iterations.iteration_count()
        );
        assert!(
            metric_index < iterations.metric_count(),
            "metric index out of bounds: {} >= {}",
            metric_index,
            iterations.metric_count()
        );

        let segment = &mut iterations.times[iteration_index][metric_index];
        segment.real_time = real_time;
        segment.cpu_time = cpu_time;

        if segment.has_data() {
            iterations.recent_index = iterations.recent_index.max(Some(iteration_index));
        }
    }

    /// Most recent iteration index with data for a row.
    ///
    /// # Panics
    ///
    /// Panics if the row has no data; see [`validate`](Self::validate).
    pub fn recent(&self, row: usize) -> usize {
        self.benchmarks[row].expect_recent()
    }

    /// Checks that every row has an executable path and that its most recent
    /// iteration holds at least one measurement.
    pub fn validate(&self) -> Result<()> {
        for (name, iterations) in self.benchmark_names.iter().zip(&self.benchmarks) {
            if iterations.executable_path.as_os_str().is_empty() {
                return Err(DataError::malformed(
                    name,
                    &iterations.executable_path,
                    "missing executable path",
                ));
            }
            let Some(recent) = iterations.recent_index else {
                return Err(DataError::malformed(
                    name,
                    &iterations.executable_path,
                    "no measurements in any iteration",
                ));
            };
            if !iterations.times[recent].iter().any(BenchmarkSegment::has_data) {
                return Err(DataError::malformed(
                    name,
                    &iterations.executable_path,
                    format!("most recent iteration {} holds no measurements", recent),
                ));
            }
        }
        Ok(())
    }

    /// Validates, then runs the unit normalizer and the path resolver.
    ///
    /// Must only be called once ingestion is complete.
    pub fn finalize(&mut self) -> Result<()> {
        self.validate()?;
        self.establish_common_time_unit();
        self.strip_common_paths();
        Ok(())
    }
}
