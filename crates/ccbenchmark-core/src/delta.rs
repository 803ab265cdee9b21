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

//! Percentage-change computation between measurements.
//!
//! Two views are supported: iteration over iteration for every row
//! ([`BenchmarkData::compare_neighboring_iterations`]) and a snapshot of
//! several rows against a baseline row
//! ([`BenchmarkData::compare_recent_iterations`]). Results land in each
//! cell's comparison list for the chosen axis.

use crate::data::BenchmarkData;
use crate::time::{BenchmarkTime, TimeType, TimeUnit};

/// Applies `op` to two measurements once both are usable.
///
/// Returns an absent time if either side is absent or holds the zero
/// substitute. Otherwise `other` is converted into `base`'s unit first.
pub fn compare<F>(other: &BenchmarkTime, base: &BenchmarkTime, op: F) -> BenchmarkTime
where
    F: FnOnce(&BenchmarkTime, &BenchmarkTime) -> BenchmarkTime,
{
    if other.is_absent() || base.is_absent() {
        return BenchmarkTime::absent();
    }
    if other.is_zero_substitute() || base.is_zero_substitute() {
        return BenchmarkTime::absent();
    }
    let Some(unit) = base.unit() else {
        return BenchmarkTime::absent();
    };
    op(&other.convert(unit), base)
}

/// Relative change of `other` over `base`, in percent.
///
/// Computed in log space as `expm1(ln(other) - ln(base)) * 100`.
///
/// # Examples
///
/// ```
/// use ccbenchmark_core::{compute_delta_percentage, BenchmarkTime, TimeUnit};
///
/// let base = BenchmarkTime::new(100.0, TimeUnit::Ns);
/// let other = BenchmarkTime::new(0.15, TimeUnit::Us);
/// let delta = compute_delta_percentage(&other, &base);
/// assert_eq!(delta.unit(), Some(TimeUnit::Percentage));
/// assert!((delta.value().unwrap() - 50.0).abs() < 1e-9);
/// ```
pub fn compute_delta_percentage(other: &BenchmarkTime, base: &BenchmarkTime) -> BenchmarkTime {
    compare(other, base, |other, base| match (other.value(), base.value()) {
        (Some(o), Some(b)) => {
            BenchmarkTime::new((o.ln() - b.ln()).exp_m1() * 100.0, TimeUnit::Percentage)
        }
        _ => BenchmarkTime::absent(),
    })
}

impl BenchmarkData {
    /// Clears every comparison on one axis.
    pub fn reset(&mut self, time_type: TimeType) {
        for iterations in self.benchmarks_mut() {
            for segment in iterations.segments_mut() {
                segment.comparisons_mut(time_type).clear();
            }
        }
    }

    /// Iteration-over-iteration change for every row.
    ///
    /// Each cell gets exactly one comparison: its value against the last
    /// available value of the same metric in an earlier iteration. The
    /// first available value of a metric, and every absent cell, gets an
    /// absent comparison. An absent cell does not break the chain: the
    /// next available value is compared against the last available one.
    pub fn compare_neighboring_iterations(&mut self, time_type: TimeType) {
        self.reset(time_type);
        for iterations in self.benchmarks_mut() {
            let metric_count = iterations.metric_count();
            for metric in 0..metric_count {
                let mut previous = BenchmarkTime::absent();
                for row in iterations.times.iter_mut() {
                    let segment = &mut row[metric];
                    let current = segment.time(time_type);
                    let delta = compute_delta_percentage(&current, &previous);
                    segment.comparisons_mut(time_type).push(delta);
                    if !current.is_absent() {
                        previous = current;
                    }
                }
            }
        }
    }

    /// Compares the most recent iteration of each selected row against the
    /// most recent iteration of the first selected row.
    ///
    /// The baseline row itself gets no comparison.
    ///
    /// # Panics
    ///
    /// Panics if `selected` is empty, names a row outside the dataset, or
    /// names a row without data.
    pub fn compare_recent_iterations(&mut self, selected: &[usize], time_type: TimeType) {
        self.assert_selection(selected);
        self.reset(time_type);

        let base: Vec<BenchmarkTime> = self.benchmarks()[selected[0]]
            .recent()
            .iter()
            .map(|segment| segment.time(time_type))
            .collect();

        for &row in &selected[1..] {
            let recent = self.benchmarks_mut()[row].recent_mut();
            for (segment, base_time) in recent.iter_mut().zip(&base) {
                let delta = compute_delta_percentage(&segment.time(time_type), base_time);
                segment.comparisons_mut(time_type).push(delta);
            }
        }
    }

    /// Computes the comparison view matching a selection: a single row is
    /// shown as a time series, several rows as a snapshot against the
    /// first one.
    pub fn compare_selection(&mut self, selected: &[usize], time_type: TimeType) {
        self.assert_selection(selected);
        if selected.len() == 1 {
            self.compare_neighboring_iterations(time_type);
        } else {
            self.compare_recent_iterations(selected, time_type);
        }
    }

    pub(crate) fn assert_selection(&self, selected: &[usize]) {
        assert!(!selected.is_empty(), "selection must not be empty");
        for &row in selected {
            assert!(
                row < self.len(),
                "selected benchmark index out of bounds: {} >= {}",
                row,
                self.len()
            );
        }
    }
}
