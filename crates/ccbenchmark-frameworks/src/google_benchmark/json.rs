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

//! `--benchmark_out_format=json` reports.

use crate::error::{FrameworkError, Result};
use crate::fields::{json_i64, json_f64, json_str};
use crate::framework::ParseResults;
use crate::parse_result::{build_result, ParseResult};
use serde_json::Value;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, warn};

pub(super) fn parse<'a>(reader: Box<dyn BufRead + 'a>, path: &'a Path) -> Result<ParseResults<'a>> {
    let mut document: Value = serde_json::from_reader(reader)?;

    if let Some(executable) = document.pointer("/context/executable").and_then(Value::as_str) {
        debug!("{}: produced by {}", path.display(), executable);
    }

    let entries = match document.get_mut("benchmarks").map(Value::take) {
        Some(Value::Array(entries)) => entries,
        _ => return Err(FrameworkError::malformed(path, "missing 'benchmarks' array")),
    };

    Ok(Box::new(entries.into_iter().filter_map(move |entry| {
        match parse_entry(&entry) {
            Ok(result) => result,
            Err(err) => {
                warn!("{}: skipping entry: {}", path.display(), err);
                None
            }
        }
    })))
}

fn parse_entry(entry: &Value) -> Result<Option<ParseResult>> {
    let name = json_str(entry, "run_name")?;
    let real_time = json_f64(entry, "real_time")?;
    let cpu_time = json_f64(entry, "cpu_time")?;
    let time_unit = json_str(entry, "time_unit")?;
    let repetitions = json_i64(entry, "repetitions")?;
    let run_type = json_str(entry, "run_type")?;
    let aggregate = entry.get("aggregate_name").and_then(Value::as_str);

    // repeated runs are represented by their aggregates
    if repetitions > 1 && run_type == "iteration" {
        return Ok(None);
    }
    if run_type == "aggregate" && aggregate.is_none() {
        return Err(FrameworkError::missing("aggregate_name"));
    }

    build_result(name, real_time, cpu_time, time_unit, aggregate, true).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccbenchmark_core::{MetricName, TimeUnit};

    fn parse_str(json: &str) -> Result<Vec<ParseResult>> {
        let path = Path::new("bench.json");
        let results = parse(Box::new(json.as_bytes()), path)?;
        Ok(results.collect())
    }

    #[test]
    fn test_single_runs() {
        let results = parse_str(
            r#"{
                "context": {"executable": "./bench_sort"},
                "benchmarks": [
                    {"name": "BM_Sort/64", "run_name": "BM_Sort/64", "run_type": "iteration",
                     "repetitions": 1, "real_time": 120.5, "cpu_time": 119.0, "time_unit": "ns"},
                    {"name": "BM_Sort/512", "run_name": "BM_Sort/512", "run_type": "iteration",
                     "repetitions": 1, "real_time": 2.5, "cpu_time": 2.4, "time_unit": "us"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "BM_Sort/64");
        assert_eq!(results[0].metric, MetricName::Time);
        assert_eq!(results[0].real_time.value(), Some(120.5));
        assert_eq!(results[1].cpu_time.unit(), Some(TimeUnit::Us));
    }

    #[test]
    fn test_aggregates_replace_repetitions() {
        let results = parse_str(
            r#"{"benchmarks": [
                {"run_name": "BM_A", "run_type": "iteration", "repetitions": 3,
                 "real_time": 10.0, "cpu_time": 10.0, "time_unit": "ns"},
                {"run_name": "BM_A", "run_type": "aggregate", "aggregate_name": "mean",
                 "repetitions": 3, "real_time": 11.0, "cpu_time": 10.5, "time_unit": "ns"},
                {"run_name": "BM_A", "run_type": "aggregate", "aggregate_name": "cv",
                 "repetitions": 3, "real_time": 0.05, "cpu_time": 0.05, "time_unit": "ns"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].metric, MetricName::Mean);
        assert_eq!(results[1].metric, MetricName::Cv);
        assert_eq!(results[1].real_time.unit(), Some(TimeUnit::Percentage));
        assert!((results[1].real_time.value().unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let results = parse_str(
            r#"{"benchmarks": [
                {"run_name": "BM_NoTime", "run_type": "iteration", "repetitions": 1,
                 "cpu_time": 1.0, "time_unit": "ns"},
                {"run_name": "BM_Agg", "run_type": "aggregate", "repetitions": 2,
                 "real_time": 1.0, "cpu_time": 1.0, "time_unit": "ns"},
                {"run_name": "BM_P99", "run_type": "aggregate", "aggregate_name": "p99",
                 "repetitions": 2, "real_time": 1.0, "cpu_time": 1.0, "time_unit": "ns"},
                {"run_name": "BM_Hours", "run_type": "iteration", "repetitions": 1,
                 "real_time": 1.0, "cpu_time": 1.0, "time_unit": "h"},
                {"run_name": "BM_Ok", "run_type": "iteration", "repetitions": 1,
                 "real_time": 1.0, "cpu_time": 1.0, "time_unit": "ms"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "BM_Ok");
    }

    #[test]
    fn test_missing_benchmarks_array() {
        let err = parse_str(r#"{"context": {}}"#).unwrap_err();
        assert!(matches!(err, FrameworkError::MalformedFile { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_str("{ not json").unwrap_err();
        assert!(matches!(err, FrameworkError::Json(_)));
    }
}
