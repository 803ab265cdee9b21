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

//! ccbenchmark Command Line Interface

use ccbenchmark_cli::cli::Commands;
use ccbenchmark_cli::error::exit_code;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "\
Examples:
  ccbenchmark run
  ccbenchmark run switched_to_array
  ccbenchmark compare
  ccbenchmark compare \".*cache\"
  ccbenchmark compare --baseline \"sort/\"";

/// ccbenchmark - run benchmarks and compare results across iterations
#[derive(Parser)]
#[command(name = "ccbenchmark")]
#[command(author, version, about = "Run benchmarks and compare results across iterations", long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Directory holding .ccbenchmark/settings.yaml
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    working_directory: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let directive = if verbose {
        "ccbenchmark=debug"
    } else {
        "ccbenchmark=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help().ok();
        return ExitCode::from(exit_code::NO_ACTION);
    };

    match command.execute(&cli.working_directory) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
