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

//! Parser output records.

use crate::error::{FrameworkError, Result};
use ccbenchmark_core::{BenchmarkTime, MetricName, TimeUnit};

/// One measurement decoded from a result file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Wall-clock time.
    pub real_time: BenchmarkTime,
    /// CPU time.
    pub cpu_time: BenchmarkTime,
    /// Logical benchmark name, aggregate suffix removed.
    pub name: String,
    /// Metric slot the measurement belongs to.
    pub metric: MetricName,
}

impl ParseResult {
    /// Creates a record.
    pub fn new(
        name: impl Into<String>,
        metric: MetricName,
        real_time: BenchmarkTime,
        cpu_time: BenchmarkTime,
    ) -> Self {
        Self {
            real_time,
            cpu_time,
            name: name.into(),
            metric,
        }
    }

    /// Column index of the metric slot.
    pub fn metric_index(&self) -> usize {
        self.metric.index()
    }
}

/// Maps an aggregate name to its metric slot; no aggregate means a single
/// sample.
///
/// # Errors
///
/// Returns [`FrameworkError::UnknownAggregate`] for any other name.
pub fn metric_for_aggregate(aggregate: Option<&str>) -> Result<MetricName> {
    match aggregate {
        None => Ok(MetricName::Time),
        Some("mean") => Ok(MetricName::Mean),
        Some("median") => Ok(MetricName::Median),
        Some("stddev") => Ok(MetricName::Stddev),
        Some("cv") => Ok(MetricName::Cv),
        Some(other) => Err(FrameworkError::UnknownAggregate(other.to_string())),
    }
}

/// Builds a record from raw values.
///
/// A coefficient of variation is stored in percent regardless of the
/// declared unit; when `cv_is_ratio` is set its values are rescaled ×100
/// first.
pub(crate) fn build_result(
    name: impl Into<String>,
    real_time: f64,
    cpu_time: f64,
    time_unit: &str,
    aggregate: Option<&str>,
    cv_is_ratio: bool,
) -> Result<ParseResult> {
    let metric = metric_for_aggregate(aggregate)?;
    if metric == MetricName::Cv {
        let scale = if cv_is_ratio { 100.0 } else { 1.0 };
        return Ok(ParseResult::new(
            name,
            metric,
            BenchmarkTime::new(real_time * scale, TimeUnit::Percentage),
            BenchmarkTime::new(cpu_time * scale, TimeUnit::Percentage),
        ));
    }

    let unit: TimeUnit = time_unit.parse()?;
    Ok(ParseResult::new(
        name,
        metric,
        BenchmarkTime::new(real_time, unit),
        BenchmarkTime::new(cpu_time, unit),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_for_aggregate() {
        assert_eq!(metric_for_aggregate(None).unwrap(), MetricName::Time);
        assert_eq!(metric_for_aggregate(Some("mean")).unwrap(), MetricName::Mean);
        assert_eq!(metric_for_aggregate(Some("median")).unwrap(), MetricName::Median);
        assert_eq!(metric_for_aggregate(Some("stddev")).unwrap(), MetricName::Stddev);
        assert_eq!(metric_for_aggregate(Some("cv")).unwrap(), MetricName::Cv);
        assert!(matches!(
            metric_for_aggregate(Some("p99")),
            Err(FrameworkError::UnknownAggregate(a)) if a == "p99"
        ));
    }

    #[test]
    fn test_cv_ratio_is_rescaled() {
        let result = build_result("BM_A", 0.05, 0.04, "ns", Some("cv"), true).unwrap();
        assert_eq!(result.metric, MetricName::Cv);
        assert_eq!(result.real_time.unit(), Some(TimeUnit::Percentage));
        assert!((result.real_time.value().unwrap() - 5.0).abs() < 1e-12);
        assert!((result.cpu_time.value().unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_cv_percent_is_kept() {
        let result = build_result("BM_A", 1.5, 1.5, "%", Some("cv"), false).unwrap();
        assert_eq!(result.real_time.value(), Some(1.5));
        assert_eq!(result.real_time.unit(), Some(TimeUnit::Percentage));
    }

    #[test]
    fn test_unknown_unit_is_error() {
        let err = build_result("BM_A", 1.0, 1.0, "h", None, true).unwrap_err();
        assert!(matches!(err, FrameworkError::Data(_)));
    }
}
