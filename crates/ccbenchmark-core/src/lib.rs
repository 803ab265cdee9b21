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

//! Benchmark matrix, unit normalization and delta computation.
//!
//! This crate holds the data model shared by every ccbenchmark front end.
//! Parsers feed measurements into a [`BenchmarkData`] matrix (benchmark ×
//! iteration × metric); the matrix then picks a display unit per benchmark,
//! shortens executable paths, and computes percentage changes either
//! iteration over iteration or against a baseline benchmark.
//!
//! # Features
//!
//! - **Explicit units**: every [`BenchmarkTime`] carries its [`TimeUnit`];
//!   absent measurements stay distinct from zero
//! - **Log-space deltas**: [`compute_delta_percentage`] stays stable across
//!   many orders of magnitude
//! - **Presentation accessors**: string tables for a UI or a terminal
//!
//! # Examples
//!
//! ```
//! use ccbenchmark_core::{BenchmarkData, BenchmarkTime, MetricName, TimeType, TimeUnit};
//! use std::path::Path;
//!
//! let mut data = BenchmarkData::new(vec!["v1".into(), "v2".into()]);
//! let row = data.register_or_get(Path::new("build/bench_sort"), "BM_Sort");
//! let before = BenchmarkTime::new(100.0, TimeUnit::Ns);
//! let after = BenchmarkTime::new(150.0, TimeUnit::Ns);
//! data.write(row, MetricName::Time.index(), 0, before, before);
//! data.write(row, MetricName::Time.index(), 1, after, after);
//! data.finalize().unwrap();
//!
//! data.compare_selection(&[row], TimeType::Real);
//! let matrix = data.column_to_str_matrix(&[row], TimeType::Real);
//! assert_eq!(matrix[1][1], "50.00 %");
//! ```

mod data;
mod delta;
mod error;
mod metrics;
mod normalize;
mod paths;
mod present;
mod time;

pub use data::{BenchmarkData, BenchmarkIterations, BenchmarkSegment};
pub use delta::{compare, compute_delta_percentage};
pub use error::{DataError, Result};
pub use metrics::MetricName;
pub use normalize::unit_for_nanoseconds;
pub use paths::{strip_common_paths, PathTree};
pub use time::{BenchmarkTime, TimeType, TimeUnit, ZERO_SUBSTITUTE};
