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

//! Per-row display unit selection.

use crate::data::BenchmarkData;
use crate::time::{BenchmarkTime, TimeType, TimeUnit};
use tracing::debug;

/// Picks the display unit for a magnitude given in nanoseconds.
///
/// Bucket boundaries are closed on the low end: `[0, 10^3)` is `ns`,
/// `[10^3, 10^6)` is `us`, `[10^6, 10^9)` is `ms` and everything above is `s`.
///
/// # Examples
///
/// ```
/// use ccbenchmark_core::{unit_for_nanoseconds, TimeUnit};
///
/// assert_eq!(unit_for_nanoseconds(999.0), TimeUnit::Ns);
/// assert_eq!(unit_for_nanoseconds(1_000.0), TimeUnit::Us);
/// ```
pub fn unit_for_nanoseconds(max_ns: f64) -> TimeUnit {
    let exponent = max_ns.log10();
    if exponent < 3.0 {
        TimeUnit::Ns
    } else if exponent < 6.0 {
        TimeUnit::Us
    } else if exponent < 9.0 {
        TimeUnit::Ms
    } else {
        TimeUnit::S
    }
}

fn as_nanoseconds(time: &BenchmarkTime) -> Option<f64> {
    let unit = time.unit()?;
    if unit.is_percentage() {
        return None;
    }
    time.convert(TimeUnit::Ns).value().filter(|v| *v > 0.0)
}

impl BenchmarkData {
    /// Rescales every row so all of its values on each axis share one unit.
    ///
    /// The unit is chosen from the row's most recent iteration only; rows
    /// without any duration on that iteration are left untouched.
    pub fn establish_common_time_unit(&mut self) {
        let names = self.benchmark_names().to_vec();
        for time_type in TimeType::ALL {
            for (name, iterations) in names.iter().zip(self.benchmarks_mut()) {
                let Some(recent) = iterations.recent_index() else {
                    continue;
                };

                let max_ns = iterations.times[recent]
                    .iter()
                    .flat_map(|segment| {
                        std::iter::once(segment.time(time_type))
                            .chain(segment.comparisons(time_type).iter().copied())
                    })
                    .filter_map(|time| as_nanoseconds(&time))
                    .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))));

                let Some(max_ns) = max_ns else {
                    continue;
                };
                let unit = unit_for_nanoseconds(max_ns);
                debug!("{} ({}): displaying in {}", name, time_type.as_str(), unit);

                for segment in iterations.segments_mut() {
                    let time = segment.time_mut(time_type);
                    *time = time.convert(unit);
                }
            }
        }
    }
}
