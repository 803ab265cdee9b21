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

//! pyperf (Python) support.
//!
//! pyperf writes raw per-run samples in seconds; the parser pools the
//! values of all runs of a benchmark and derives its statistics.

use crate::error::{FrameworkError, Result};
use crate::fields::json_field;
use crate::format::OutputFormat;
use crate::framework::{detect_format, run_command, Framework, ParseResults};
use crate::parse_result::ParseResult;
use ccbenchmark_core::{BenchmarkTime, MetricName, TimeUnit};
use serde_json::Value;
use std::io::BufRead;
use std::path::Path;
use std::process::Command;
use tracing::warn;

/// The pyperf framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pyperf;

impl Pyperf {
    /// Registry key.
    pub const NAME: &'static str = "python.pyperf";
}

/// Median, mean and population standard deviation of `values`.
///
/// The median is the upper middle element for an even count.
fn statistics(values: &mut [f64]) -> Option<(f64, f64, f64)> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let n = values.len() as f64;
    let median = values[values.len() / 2];
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((median, mean, variance.sqrt()))
}

fn benchmark_name<'v>(entry: &'v Value, file_metadata: Option<&'v Value>) -> Result<&'v str> {
    entry
        .pointer("/metadata/name")
        .or_else(|| file_metadata.and_then(|m| m.get("name")))
        .and_then(Value::as_str)
        .ok_or_else(|| FrameworkError::missing("metadata.name"))
}

fn pooled_values(entry: &Value) -> Result<Vec<f64>> {
    let runs = json_field(entry, "runs")?
        .as_array()
        .ok_or_else(|| FrameworkError::invalid("runs", "not an array"))?;

    let mut values = Vec::new();
    // warmup-only runs carry no "values"
    for run in runs.iter().filter_map(|run| run.get("values")) {
        let samples = run
            .as_array()
            .ok_or_else(|| FrameworkError::invalid("values", run))?;
        for sample in samples {
            values.push(
                sample
                    .as_f64()
                    .ok_or_else(|| FrameworkError::invalid("values", sample))?,
            );
        }
    }
    Ok(values)
}

fn parse_entry(entry: &Value, file_metadata: Option<&Value>) -> Result<Vec<ParseResult>> {
    let name = benchmark_name(entry, file_metadata)?;
    let mut values = pooled_values(entry)?;
    let (median, mean, stddev) =
        statistics(&mut values).ok_or_else(|| FrameworkError::missing("runs.values"))?;

    let seconds = |value| BenchmarkTime::new(value, TimeUnit::S);
    Ok(vec![
        ParseResult::new(name, MetricName::Median, seconds(median), BenchmarkTime::absent()),
        ParseResult::new(name, MetricName::Mean, seconds(mean), BenchmarkTime::absent()),
        ParseResult::new(name, MetricName::Stddev, seconds(stddev), BenchmarkTime::absent()),
    ])
}

impl Framework for Pyperf {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn supported_formats(&self) -> &'static [OutputFormat] {
        &[OutputFormat::Json]
    }

    fn parse<'a>(
        &'a self,
        reader: Box<dyn BufRead + 'a>,
        path: &'a Path,
    ) -> Result<ParseResults<'a>> {
        detect_format(self, path)?;
        let mut document: Value = serde_json::from_reader(reader)?;

        let file_metadata = document.get_mut("metadata").map(Value::take);
        let entries = match document.get_mut("benchmarks").map(Value::take) {
            Some(Value::Array(entries)) => entries,
            _ => return Err(FrameworkError::malformed(path, "missing 'benchmarks' array")),
        };

        Ok(Box::new(entries.into_iter().flat_map(move |entry| {
            match parse_entry(&entry, file_metadata.as_ref()) {
                Ok(results) => results,
                Err(err) => {
                    warn!("{}: skipping benchmark: {}", path.display(), err);
                    Vec::new()
                }
            }
        })))
    }

    fn run(&self, runnable: &Path, output: &Path, _format: OutputFormat) -> Result<i32> {
        // pyperf refuses to overwrite an existing result file
        match std::fs::remove_file(output) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        run_command(
            Command::new("python3")
                .arg(runnable)
                .arg(format!("-o={}", output.display()))
                .arg("--quiet"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(json: &str) -> Result<Vec<ParseResult>> {
        let results = Pyperf.parse(Box::new(json.as_bytes()), Path::new("bench.json"))?;
        Ok(results.collect())
    }

    #[test]
    fn test_statistics() {
        let mut values = vec![4.0, 1.0, 3.0, 2.0];
        let (median, mean, stddev) = statistics(&mut values).unwrap();
        assert_eq!(median, 3.0);
        assert_eq!(mean, 2.5);
        assert!((stddev - 1.25f64.sqrt()).abs() < 1e-12);
        assert!(statistics(&mut []).is_none());
    }

    #[test]
    fn test_parse_pools_runs() {
        let results = parse_str(
            r#"{"benchmarks": [{
                "metadata": {"name": "json_dumps"},
                "runs": [
                    {"warmups": [[1, 0.5]]},
                    {"values": [0.001, 0.003]},
                    {"values": [0.002]}
                ]
            }]}"#,
        )
        .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.name == "json_dumps"));
        assert!(results.iter().all(|r| r.cpu_time.is_absent()));
        assert_eq!(results[0].metric, MetricName::Median);
        assert_eq!(results[0].real_time.value(), Some(0.002));
        assert_eq!(results[0].real_time.unit(), Some(TimeUnit::S));
        assert_eq!(results[1].metric, MetricName::Mean);
        assert!((results[1].real_time.value().unwrap() - 0.002).abs() < 1e-15);
        assert_eq!(results[2].metric, MetricName::Stddev);
    }

    #[test]
    fn test_name_from_file_metadata() {
        let results = parse_str(
            r#"{"metadata": {"name": "telco"},
                "benchmarks": [{"runs": [{"values": [1.0]}]}]}"#,
        )
        .unwrap();
        assert_eq!(results[0].name, "telco");
    }

    #[test]
    fn test_benchmark_without_values_is_skipped() {
        let results = parse_str(
            r#"{"benchmarks": [
                {"metadata": {"name": "empty"}, "runs": [{"warmups": [[1, 0.5]]}]},
                {"metadata": {"name": "ok"}, "runs": [{"values": [1.0]}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.name == "ok"));
    }

    #[test]
    fn test_only_json_is_supported() {
        assert!(Pyperf.supports(OutputFormat::Json));
        assert!(!Pyperf.supports(OutputFormat::Csv));
        let err = Pyperf
            .parse(Box::new("".as_bytes()), Path::new("bench.csv"))
            .err()
            .unwrap();
        assert!(matches!(err, FrameworkError::UnsupportedFormat { .. }));
    }
}
