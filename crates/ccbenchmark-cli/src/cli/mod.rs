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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use ccbenchmark::RECENT_ITERATION;
use clap::{Args, Subcommand};
use std::path::Path;

/// Pattern matching every benchmark.
pub const MATCH_ALL: &str = ".*";

/// Arguments shared by `compare` and `run-and-compare`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CompareArgs {
    /// Regular expression selecting benchmarks by `path/name`
    #[arg(value_name = "PATTERN", default_value = MATCH_ALL)]
    pub pattern: String,

    /// Compare cpu time instead of real time
    #[arg(long)]
    pub cpu: bool,

    /// Compare all matches against the first one instead of showing each
    /// benchmark's history
    #[arg(short, long)]
    pub baseline: bool,

    /// Keep columns that have no data
    #[arg(long)]
    pub show_empty: bool,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configured benchmarks
    ///
    /// Results are stored as iteration ITERATION and, for any other name
    /// than `recent`, copied to the `recent` iteration as well.
    #[command(visible_alias = "r")]
    Run {
        /// Iteration name
        #[arg(value_name = "ITERATION", default_value = RECENT_ITERATION)]
        iteration: String,
    },

    /// Compare stored results across iterations
    #[command(visible_alias = "c")]
    Compare(CompareArgs),

    /// Run the configured benchmarks, then compare
    #[command(visible_alias = "rac")]
    RunAndCompare {
        /// Iteration name
        #[arg(value_name = "ITERATION", default_value = RECENT_ITERATION)]
        iteration: String,

        #[command(flatten)]
        compare: CompareArgs,
    },

    /// Print the benchmark hierarchy as JSON
    Tree {
        /// Regular expression selecting benchmarks by `path/name`
        #[arg(value_name = "PATTERN", default_value = MATCH_ALL)]
        pattern: String,
    },
}

impl Commands {
    /// Execute the command inside `working_dir`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the working directory or its settings are unusable,
    /// the pattern is invalid or matches nothing, or a benchmark run fails to
    /// start.
    pub fn execute(self, working_dir: &Path) -> Result<(), CliError> {
        match self {
            Commands::Run { iteration } => commands::run(working_dir, &iteration),
            Commands::Compare(args) => commands::compare(working_dir, &args),
            Commands::RunAndCompare { iteration, compare } => {
                commands::run(working_dir, &iteration)?;
                commands::compare(working_dir, &compare)
            }
            Commands::Tree { pattern } => commands::tree(working_dir, &pattern),
        }
    }
}
