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

//! Google Benchmark (C++) support.
//!
//! Reads all three report formats the library can write with
//! `--benchmark_out_format`: `json`, `csv` and `console`.

mod console;
mod csv;
mod json;
mod naming;

use crate::error::Result;
use crate::format::OutputFormat;
use crate::framework::{detect_format, run_command, Framework, ParseResults};
use std::io::BufRead;
use std::path::Path;
use std::process::Command;

/// The Google Benchmark framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleBenchmark;

impl GoogleBenchmark {
    /// Registry key.
    pub const NAME: &'static str = "cpp.google_benchmark";
}

impl Framework for GoogleBenchmark {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn supported_formats(&self) -> &'static [OutputFormat] {
        &OutputFormat::ALL
    }

    fn parse<'a>(
        &'a self,
        reader: Box<dyn BufRead + 'a>,
        path: &'a Path,
    ) -> Result<ParseResults<'a>> {
        match detect_format(self, path)? {
            OutputFormat::Json => json::parse(reader, path),
            OutputFormat::Csv => csv::parse(reader, path),
            OutputFormat::Console => console::parse(reader, path),
        }
    }

    fn run(&self, runnable: &Path, output: &Path, format: OutputFormat) -> Result<i32> {
        run_command(
            Command::new(runnable)
                .arg(format!("--benchmark_out={}", output.display()))
                .arg(format!("--benchmark_out_format={}", format))
                .arg("--benchmark_report_aggregates_only=false"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameworkError;

    #[test]
    fn test_supports_every_format() {
        for format in OutputFormat::ALL {
            assert!(GoogleBenchmark.supports(format));
        }
    }

    #[test]
    fn test_parse_dispatches_on_extension() {
        let json = r#"{"benchmarks": [{"run_name": "BM_A", "run_type": "iteration",
            "repetitions": 1, "real_time": 1.0, "cpu_time": 1.0, "time_unit": "ns"}]}"#;
        let results: Vec<_> = GoogleBenchmark
            .parse(Box::new(json.as_bytes()), Path::new("x/bench.json"))
            .unwrap()
            .collect();
        assert_eq!(results.len(), 1);

        let err = GoogleBenchmark
            .parse(Box::new(json.as_bytes()), Path::new("x/bench.txt"))
            .err()
            .unwrap();
        assert!(matches!(err, FrameworkError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_run_missing_executable() {
        let result = GoogleBenchmark.run(
            Path::new("/nonexistent/bench_binary"),
            Path::new("/tmp/out.json"),
            OutputFormat::Json,
        );
        assert!(matches!(result, Err(FrameworkError::Io(_))));
    }
}
