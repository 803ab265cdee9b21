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

//! `--benchmark_out_format=console` reports.
//!
//! The table starts after the second dashed rule:
//!
//! ```text
//! ---------------------------------------------------------
//! Benchmark               Time             CPU   Iterations
//! ---------------------------------------------------------
//! BM_Sort/64            120 ns          119 ns      5833333
//! ```

use super::naming::decode_name;
use crate::error::{FrameworkError, Result};
use crate::fields::text_f64;
use crate::framework::ParseResults;
use crate::parse_result::{build_result, ParseResult};
use std::io::BufRead;
use std::path::Path;
use tracing::warn;

const NAME: usize = 0;
const REAL_TIME: usize = 1;
const TIME_UNIT: usize = 2;
const CPU_TIME: usize = 3;

pub(super) fn parse<'a>(reader: Box<dyn BufRead + 'a>, path: &'a Path) -> Result<ParseResults<'a>> {
    let mut dashed_lines = 0;
    Ok(Box::new(reader.lines().filter_map(move |line| {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("{}: skipping line: {}", path.display(), err);
                return None;
            }
        };
        if dashed_lines < 2 {
            if line.starts_with('-') {
                dashed_lines += 1;
            }
            return None;
        }

        match parse_line(&line) {
            Ok(result) => result,
            Err(err) => {
                warn!("{}: skipping line: {}", path.display(), err);
                None
            }
        }
    })))
}

fn column<'l>(columns: &[&'l str], index: usize, key: &str) -> Result<&'l str> {
    columns
        .get(index)
        .copied()
        .ok_or_else(|| FrameworkError::missing(key))
}

fn parse_line(line: &str) -> Result<Option<ParseResult>> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.is_empty() {
        return Ok(None);
    }

    let raw_name = column(&columns, NAME, "name")?;
    let real_time = text_f64("real_time", column(&columns, REAL_TIME, "real_time")?)?;
    let cpu_time = text_f64("cpu_time", column(&columns, CPU_TIME, "cpu_time")?)?;
    let time_unit = column(&columns, TIME_UNIT, "time_unit")?;

    let Some((name, aggregate)) = decode_name(raw_name)? else {
        return Ok(None);
    };
    // console tables already print the cv in percent
    build_result(name, real_time, cpu_time, time_unit, aggregate, false).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccbenchmark_core::{MetricName, TimeUnit};

    const TABLE: &str = "\
2025-01-01T00:00:00+00:00
Running ./bench_sort
Run on (8 X 3600 MHz CPU s)
------------------------------------------------------------------
Benchmark                        Time             CPU   Iterations
------------------------------------------------------------------
BM_Sort/64                     120 ns          119 ns      5833333
BM_Sort/512                   2.50 us         2.40 us       291667
BM_Hash/repeats:3             10.0 ns         10.0 ns     70000000
BM_Hash/repeats:3             10.2 ns         10.1 ns     70000000
BM_Hash/repeats:3_mean        10.1 ns         10.0 ns            3
BM_Hash/repeats:3_cv          1.52 %          0.98 %             3

";

    fn parse_str(text: &str) -> Vec<ParseResult> {
        let path = Path::new("bench.console");
        parse(Box::new(text.as_bytes()), path).unwrap().collect()
    }

    #[test]
    fn test_table() {
        let results = parse_str(TABLE);
        assert_eq!(results.len(), 4);

        assert_eq!(results[0].name, "BM_Sort/64");
        assert_eq!(results[0].real_time.value(), Some(120.0));
        assert_eq!(results[0].cpu_time.value(), Some(119.0));
        assert_eq!(results[1].real_time.unit(), Some(TimeUnit::Us));

        assert_eq!(results[2].name, "BM_Hash/repeats:3");
        assert_eq!(results[2].metric, MetricName::Mean);
    }

    #[test]
    fn test_cv_is_not_rescaled() {
        let results = parse_str(TABLE);
        let cv = &results[3];
        assert_eq!(cv.metric, MetricName::Cv);
        assert_eq!(cv.real_time.value(), Some(1.52));
        assert_eq!(cv.cpu_time.unit(), Some(TimeUnit::Percentage));
    }

    #[test]
    fn test_nothing_before_second_rule() {
        let text = "BM_A 1 ns 1 ns 1\n-----\nBM_B 1 ns 1 ns 1\n";
        assert!(parse_str(text).is_empty());
    }
}
