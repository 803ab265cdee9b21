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

//! Typed field extraction shared by the parsers.
//!
//! Each accessor returns a [`Result`] so a record builder can collect its
//! fields with `?` and the parser can drop the record on the first failure.

use crate::error::{FrameworkError, Result};
use serde_json::Value;

pub(crate) fn json_field<'v>(entry: &'v Value, key: &str) -> Result<&'v Value> {
    entry.get(key).ok_or_else(|| FrameworkError::missing(key))
}

pub(crate) fn json_str<'v>(entry: &'v Value, key: &str) -> Result<&'v str> {
    let value = json_field(entry, key)?;
    value.as_str().ok_or_else(|| FrameworkError::invalid(key, value))
}

pub(crate) fn json_f64(entry: &Value, key: &str) -> Result<f64> {
    let value = json_field(entry, key)?;
    value.as_f64().ok_or_else(|| FrameworkError::invalid(key, value))
}

pub(crate) fn json_i64(entry: &Value, key: &str) -> Result<i64> {
    let value = json_field(entry, key)?;
    value.as_i64().ok_or_else(|| FrameworkError::invalid(key, value))
}

pub(crate) fn text_f64(key: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| FrameworkError::invalid(key, text))
}
