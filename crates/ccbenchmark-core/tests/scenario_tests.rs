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

//! End-to-end scenarios over the finished matrix.

use ccbenchmark_core::{BenchmarkData, BenchmarkTime, MetricName, TimeType, TimeUnit};
use std::path::Path;

fn ns(value: f64) -> BenchmarkTime {
    BenchmarkTime::new(value, TimeUnit::Ns)
}

fn assert_pct(time: BenchmarkTime, expected: f64) {
    assert_eq!(time.unit(), Some(TimeUnit::Percentage), "{:?}", time);
    let value = time.value().unwrap();
    assert!((value - expected).abs() < 1e-9, "{} != {}", value, expected);
}

#[test]
fn test_two_iterations_single_sample() {
    let mut data = BenchmarkData::new(vec!["first".into(), "second".into()]);
    let row = data.register_or_get(Path::new("/work/out/bench_sort"), "BM_Sort");
    data.write(row, MetricName::Time.index(), 0, ns(100.0), ns(100.0));
    data.write(row, MetricName::Time.index(), 1, ns(150.0), ns(150.0));
    data.finalize().unwrap();

    for time_type in [TimeType::Real, TimeType::Cpu] {
        data.compare_selection(&[row], time_type);
        let times = &data.benchmarks()[row].times;
        let time = MetricName::Time.index();
        assert!(times[0][time].comparisons(time_type)[0].is_absent());
        assert_pct(times[1][time].comparisons(time_type)[0], 50.0);
    }
}

#[test]
fn test_baseline_asymmetry() {
    let mut data = BenchmarkData::new(vec!["recent".into()]);
    let a = data.register_or_get(Path::new("bench"), "A");
    let b = data.register_or_get(Path::new("bench"), "B");
    data.write(a, 0, 0, ns(100.0), ns(100.0));
    data.write(b, 0, 0, ns(200.0), ns(200.0));
    data.finalize().unwrap();

    data.compare_selection(&[a, b], TimeType::Real);
    assert_pct(data.benchmarks()[b].recent()[0].real_time_comparisons[0], 100.0);

    data.compare_selection(&[b, a], TimeType::Real);
    assert_pct(data.benchmarks()[a].recent()[0].real_time_comparisons[0], -50.0);
    assert!(data.benchmarks()[b].recent()[0].real_time_comparisons.is_empty());
}

#[test]
fn test_unit_bucket_boundaries() {
    let cases = [
        (999.0, TimeUnit::Ns),
        (1_000.0, TimeUnit::Us),
        (999_999.0, TimeUnit::Us),
        (1_000_000.0, TimeUnit::Ms),
        (999_999_999.0, TimeUnit::Ms),
        (1_000_000_000.0, TimeUnit::S),
    ];

    let mut data = BenchmarkData::new(vec!["recent".into()]);
    for (i, (value, _)) in cases.iter().enumerate() {
        let row = data.register_or_get(Path::new("bench"), &format!("BM_{}", i));
        data.write(row, 0, 0, ns(*value), ns(*value));
    }
    data.finalize().unwrap();

    for (row, (_, unit)) in cases.iter().enumerate() {
        let recent = &data.benchmarks()[row].recent()[0];
        assert_eq!(recent.real_time.unit(), Some(*unit), "row {}", row);
        assert_eq!(recent.cpu_time.unit(), Some(*unit), "row {}", row);
    }
}

#[test]
fn test_zero_measurement_is_not_compared() {
    let mut data = BenchmarkData::new(vec!["first".into(), "second".into()]);
    let row = data.register_or_get(Path::new("bench"), "BM_Noop");
    data.write(row, 0, 0, ns(0.0), ns(0.0));
    data.write(row, 0, 1, ns(10.0), ns(10.0));
    data.finalize().unwrap();

    data.compare_selection(&[row], TimeType::Real);
    let matrix = data.column_to_str_matrix(&[row], TimeType::Real);
    assert_eq!(matrix[0][0], "0.00 ns");
    assert_eq!(matrix[1][0], "10.00 ns");
    assert_eq!(matrix[1][1], "N/A");
}

#[test]
fn test_zero_survives_unit_normalization() {
    let seconds = |value| BenchmarkTime::new(value, TimeUnit::S);
    let median = MetricName::Median.index();
    let stddev = MetricName::Stddev.index();

    let mut data = BenchmarkData::new(vec!["v1".into(), "v2".into()]);
    let row = data.register_or_get(Path::new("bench_json"), "dumps");
    data.write(row, median, 0, seconds(2e-3), BenchmarkTime::absent());
    data.write(row, median, 1, seconds(2e-3), BenchmarkTime::absent());
    data.write(row, stddev, 0, seconds(1e-5), BenchmarkTime::absent());
    data.write(row, stddev, 1, seconds(0.0), BenchmarkTime::absent());
    data.finalize().unwrap();

    let zero = data.benchmarks()[row].times[1][stddev].real_time;
    assert_eq!(zero.unit(), Some(TimeUnit::Ms));
    assert!(zero.is_zero_substitute());

    data.compare_selection(&[row], TimeType::Real);
    let times = &data.benchmarks()[row].times;
    assert!(times[1][stddev].real_time_comparisons[0].is_absent());
    assert_pct(times[1][median].real_time_comparisons[0], 0.0);
}

#[test]
fn test_path_boundary_single_executable() {
    let mut data = BenchmarkData::new(vec!["recent".into()]);
    let row = data.register_or_get(Path::new("/a/b/x"), "BM_A");
    data.write(row, 0, 0, ns(1.0), ns(1.0));
    data.finalize().unwrap();

    assert_eq!(data.benchmarks()[row].executable_path, Path::new("x"));
    assert_eq!(data.label(row), Path::new("x/BM_A").display().to_string());
}

#[test]
fn test_finalize_rejects_row_without_data() {
    let mut data = BenchmarkData::new(vec!["recent".into()]);
    data.register_or_get(Path::new("bench"), "BM_Empty");
    let err = data.finalize().unwrap_err();
    assert!(err.to_string().contains("BM_Empty"));
}
