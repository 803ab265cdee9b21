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

//! ccbenchmark command-line interface.
//!
//! # Commands
//!
//! - **run** (`r`): run the configured benchmarks into an iteration
//! - **compare** (`c`): print delta tables of the stored iterations
//! - **run-and-compare** (`rac`): both, in that order
//! - **tree**: print the benchmark hierarchy as JSON
//!
//! Every command works on a working directory (`-w`, default `.`) holding
//! `.ccbenchmark/settings.yaml`.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |---|---|
//! | 0 | success |
//! | 1 | no command given |
//! | 2 | invalid working directory |
//! | 3 | no benchmarks found |
//! | 4 | invalid regex |
//! | 5 | no local settings |
//! | 6 | any other error |

pub mod cli;
pub mod commands;
pub mod error;
