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

//! Compare command - prints delta tables of stored iterations

use super::{compile_pattern, configure, render_table, select};
use crate::cli::CompareArgs;
use crate::error::CliError;
use ccbenchmark::{load_configured, TimeType};
use colored::Colorize;
use std::path::Path;

/// Loads every stored iteration and prints comparison tables for the
/// benchmarks matching `args.pattern`.
///
/// Without `--baseline` each match gets its own table of iteration-over-
/// iteration changes. With `--baseline` one table compares the most recent
/// result of every match against the first match.
///
/// # Errors
///
/// Returns `Err` if the configuration is unusable, the pattern is invalid,
/// nothing matches, or the stored results are inconsistent.
pub fn compare(working_dir: &Path, args: &CompareArgs) -> Result<(), CliError> {
    let frameworks = configure(working_dir)?;
    let matcher = compile_pattern(&args.pattern)?;
    let mut data = load_configured(&frameworks)?;

    let selected = select(&data, &matcher);
    if selected.is_empty() {
        return Err(CliError::NoBenchmarksFound {
            pattern: args.pattern.clone(),
        });
    }

    let time_type = if args.cpu { TimeType::Cpu } else { TimeType::Real };
    println!("Comparing {}", time_type.as_str().bold());

    if args.baseline {
        data.compare_selection(&selected, time_type);
        println!();
        println!("Baseline: {}", data.label(selected[0]).as_str().bold());
        print!("{}", render_table(&data, &selected, time_type, args.show_empty));
    } else {
        for &row in &selected {
            data.compare_selection(&[row], time_type);
            println!();
            println!("{}", data.label(row).as_str().bold());
            print!("{}", render_table(&data, &[row], time_type, args.show_empty));
        }
    }
    Ok(())
}
