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

//! Canonical metric slots.

use std::fmt;

/// The fixed, ordered set of metric columns carried by every benchmark row.
///
/// The discriminant is the column index. A parser fills only the slots its
/// tool reports; the others stay absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum MetricName {
    /// Single-sample time.
    Time = 0,
    /// Arithmetic mean over repetitions.
    Mean = 1,
    /// Standard deviation over repetitions.
    Stddev = 2,
    /// Median over repetitions.
    Median = 3,
    /// Median absolute deviation.
    Mad = 4,
    /// Fastest repetition.
    Min = 5,
    /// Slowest repetition.
    Max = 6,
    /// Coefficient of variation, in percent.
    Cv = 7,
}

impl MetricName {
    /// Number of metric slots.
    pub const COUNT: usize = 8;

    /// All slots in column order.
    pub const ALL: [MetricName; Self::COUNT] = [
        MetricName::Time,
        MetricName::Mean,
        MetricName::Stddev,
        MetricName::Median,
        MetricName::Mad,
        MetricName::Min,
        MetricName::Max,
        MetricName::Cv,
    ];

    /// Column index of this slot.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Slot at a column index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short column label.
    pub fn label(self) -> &'static str {
        match self {
            MetricName::Time => "Time",
            MetricName::Mean => "μ",
            MetricName::Stddev => "Stddev",
            MetricName::Median => "Med",
            MetricName::Mad => "Mad",
            MetricName::Min => "Min",
            MetricName::Max => "Max",
            MetricName::Cv => "CV",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_positional() {
        for (i, metric) in MetricName::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
            assert_eq!(MetricName::from_index(i), Some(*metric));
        }
        assert_eq!(MetricName::from_index(MetricName::COUNT), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MetricName::Mean.label(), "μ");
        assert_eq!(MetricName::Median.to_string(), "Med");
        assert_eq!(MetricName::Cv.to_string(), "CV");
    }
}
