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

//! Benchmark framework support for ccbenchmark.
//!
//! A [`Framework`] knows how to run one kind of benchmark executable and how
//! to decode the result files it writes into [`ParseResult`] records.
//! Frameworks are looked up by name in a [`FrameworkRegistry`].
//!
//! # Supported frameworks
//!
//! | Name | Formats |
//! |---|---|
//! | `cpp.google_benchmark` | `json`, `csv`, `console` |
//! | `python.pyperf` | `json` |
//!
//! # Examples
//!
//! ```
//! use ccbenchmark_core::MetricName;
//! use ccbenchmark_frameworks::{FrameworkRegistry, OutputFormat};
//! use std::path::Path;
//!
//! let registry = FrameworkRegistry::default();
//! let framework = registry.resolve("cpp.google_benchmark", OutputFormat::Json).unwrap();
//!
//! let report = r#"{"benchmarks": [{"run_name": "BM_Sort", "run_type": "iteration",
//!     "repetitions": 1, "real_time": 120.0, "cpu_time": 118.0, "time_unit": "ns"}]}"#;
//! let results: Vec<_> = framework
//!     .parse(Box::new(report.as_bytes()), Path::new("bench_sort.json"))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(results[0].name, "BM_Sort");
//! assert_eq!(results[0].metric, MetricName::Time);
//! ```

mod error;
mod fields;
mod format;
mod framework;
mod google_benchmark;
mod parse_result;
mod pyperf;

pub use error::{FrameworkError, Result};
pub use format::OutputFormat;
pub use framework::{Framework, FrameworkRegistry, ParseResults};
pub use google_benchmark::GoogleBenchmark;
pub use parse_result::{metric_for_aggregate, ParseResult};
pub use pyperf::Pyperf;
