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

//! ccbenchmark - run benchmarks and compare their results across iterations.
//!
//! This crate ties the data model ([`ccbenchmark_core`]) and the framework
//! parsers ([`ccbenchmark_frameworks`]) together: it reads the project
//! settings, runs benchmark executables into tagged iteration directories,
//! discovers those directories again and loads every result file into one
//! [`BenchmarkData`] matrix.
//!
//! # Examples
//!
//! ```no_run
//! use ccbenchmark::{load_configured, FrameworkRegistry, LocalSettings, TimeType};
//! use std::path::Path;
//!
//! let settings = LocalSettings::load(Path::new(".")).unwrap();
//! let frameworks = settings.resolve(&FrameworkRegistry::default()).unwrap();
//! let mut data = load_configured(&frameworks).unwrap();
//!
//! data.compare_selection(&[0], TimeType::Real);
//! for (row, cells) in data
//!     .get_rows(&[0])
//!     .iter()
//!     .zip(data.column_to_str_matrix(&[0], TimeType::Real))
//! {
//!     println!("{}: {}", row, cells.join(" | "));
//! }
//! ```

mod discovery;
mod error;
mod loader;
mod runner;
mod settings;

pub use discovery::{
    discover_iterations, iteration_name, IterationDir, IterationNames, ITERATION_PREFIX,
    RECENT_ITERATION,
};
pub use error::{Error, Result};
pub use loader::{benchmark_path, load_benchmark_data, load_configured};
pub use runner::{expand_runnables, remove_similar_files, run_benchmarks, RunOutcome};
pub use settings::{ConfiguredFramework, FrameworkSettings, LocalSettings, SETTINGS_DIR, SETTINGS_FILE};

pub use ccbenchmark_core::{
    compute_delta_percentage, strip_common_paths, BenchmarkData, BenchmarkIterations,
    BenchmarkSegment, BenchmarkTime, DataError, MetricName, PathTree, TimeType, TimeUnit,
};
pub use ccbenchmark_frameworks::{
    Framework, FrameworkError, FrameworkRegistry, GoogleBenchmark, OutputFormat, ParseResult,
    Pyperf,
};
