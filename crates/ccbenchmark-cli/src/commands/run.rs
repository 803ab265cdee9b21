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

//! Run command - executes configured benchmarks into an iteration

use super::configure;
use crate::error::CliError;
use ccbenchmark::run_benchmarks;
use colored::Colorize;
use std::path::Path;

/// Runs every configured framework's benchmarks as iteration `iteration`.
///
/// A benchmark exiting with a non-zero code is reported but does not fail
/// the command.
///
/// # Errors
///
/// Returns `Err` if the configuration is unusable or a benchmark cannot be
/// started.
pub fn run(working_dir: &Path, iteration: &str) -> Result<(), CliError> {
    let frameworks = configure(working_dir)?;

    let mut succeeded = 0;
    let mut failed = 0;
    for configured in &frameworks {
        for outcome in run_benchmarks(configured, iteration)? {
            if outcome.is_success() {
                succeeded += 1;
            } else {
                failed += 1;
            }
        }
    }

    eprintln!(
        "{} {}  {} {}",
        "Succeeded:".green().bold(),
        succeeded,
        "Failed:".red().bold(),
        failed
    );
    Ok(())
}
