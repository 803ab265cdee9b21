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

//! `--benchmark_out_format=csv` reports.

use super::naming::decode_name;
use crate::error::{FrameworkError, Result};
use crate::fields::text_f64;
use crate::framework::ParseResults;
use crate::parse_result::{build_result, ParseResult};
use csv::StringRecord;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use tracing::warn;

/// Rows narrower than this are preamble, not table rows.
const MIN_COLUMNS: usize = 10;

pub(super) fn parse<'a>(reader: Box<dyn BufRead + 'a>, path: &'a Path) -> Result<ParseResults<'a>> {
    let records = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
        .into_records();

    let mut header: Option<HashMap<String, usize>> = None;
    Ok(Box::new(records.filter_map(move |record| {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!("{}: skipping row: {}", path.display(), err);
                return None;
            }
        };
        if record.len() < MIN_COLUMNS {
            return None;
        }
        if header.is_none() {
            header = Some(
                record
                    .iter()
                    .enumerate()
                    .map(|(i, name)| (name.trim().to_string(), i))
                    .collect(),
            );
            return None;
        }
        let columns = header.as_ref()?;

        match parse_row(&record, columns) {
            Ok(result) => result,
            Err(err) => {
                warn!("{}: skipping row: {}", path.display(), err);
                None
            }
        }
    })))
}

fn column<'r>(record: &'r StringRecord, columns: &HashMap<String, usize>, key: &str) -> Result<&'r str> {
    let index = *columns.get(key).ok_or_else(|| FrameworkError::missing(key))?;
    record.get(index).ok_or_else(|| FrameworkError::missing(key))
}

fn parse_row(record: &StringRecord, columns: &HashMap<String, usize>) -> Result<Option<ParseResult>> {
    let raw_name = column(record, columns, "name")?;
    let real_time = text_f64("real_time", column(record, columns, "real_time")?)?;
    let cpu_time = text_f64("cpu_time", column(record, columns, "cpu_time")?)?;
    let time_unit = column(record, columns, "time_unit")?;

    let Some((name, aggregate)) = decode_name(raw_name)? else {
        return Ok(None);
    };
    build_result(name, real_time, cpu_time, time_unit, aggregate, true).map(Some)
}
