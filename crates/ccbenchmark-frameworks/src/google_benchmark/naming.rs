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

//! Benchmark name decoding for the tabular formats.
//!
//! CSV and console output carry no `run_type` column. Repetitions are
//! recognised from a `repeats:N` name segment and aggregates from a
//! trailing `_mean`, `_median`, `_stddev` or `_cv`.

use crate::error::{FrameworkError, Result};

const AGGREGATES: [&str; 4] = ["mean", "median", "stddev", "cv"];

/// Repetition count encoded in `name`, `1` if there is none.
pub(super) fn repeat_count(name: &str) -> Result<u32> {
    for segment in name.split('/') {
        let Some((key, value)) = segment.split_once(':') else {
            continue;
        };
        if key == "repeats" {
            let count = value.split('_').next().unwrap_or(value);
            return count
                .parse()
                .map_err(|_| FrameworkError::invalid("repeats", value));
        }
    }
    Ok(1)
}

/// Splits a raw name into the logical name and its aggregate.
///
/// Returns `None` for the individual repetitions of a repeated benchmark,
/// which are not kept.
pub(super) fn decode_name(raw: &str) -> Result<Option<(&str, Option<&str>)>> {
    if repeat_count(raw)? <= 1 {
        return Ok(Some((raw, None)));
    }
    match raw.rsplit_once('_') {
        Some((name, suffix)) if AGGREGATES.contains(&suffix) => Ok(Some((name, Some(suffix)))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_count() {
        assert_eq!(repeat_count("BM_Sort/64").unwrap(), 1);
        assert_eq!(repeat_count("BM_Sort/64/repeats:5").unwrap(), 5);
        assert_eq!(repeat_count("BM_Sort/repeats:3_mean").unwrap(), 3);
        assert_eq!(repeat_count("BM_Sort/min_time:0.5/repeats:2").unwrap(), 2);
        assert!(repeat_count("BM_Sort/repeats:x").is_err());
    }

    #[test]
    fn test_decode_single_sample() {
        assert_eq!(decode_name("BM_Sort/64").unwrap(), Some(("BM_Sort/64", None)));
        assert_eq!(
            decode_name("BM_Sort_mean").unwrap(),
            Some(("BM_Sort_mean", None))
        );
    }

    #[test]
    fn test_decode_aggregates() {
        assert_eq!(
            decode_name("BM_Sort/repeats:5_mean").unwrap(),
            Some(("BM_Sort/repeats:5", Some("mean")))
        );
        assert_eq!(
            decode_name("BM_Sort/repeats:5_cv").unwrap(),
            Some(("BM_Sort/repeats:5", Some("cv")))
        );
    }

    #[test]
    fn test_decode_skips_repetitions() {
        assert_eq!(decode_name("BM_Sort/repeats:5").unwrap(), None);
        assert_eq!(decode_name("BM_Sort/repeats:5_p99").unwrap(), None);
    }
}
