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

//! The framework contract and the framework registry.

use crate::error::{FrameworkError, Result};
use crate::format::OutputFormat;
use crate::google_benchmark::GoogleBenchmark;
use crate::parse_result::ParseResult;
use crate::pyperf::Pyperf;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::sync::Arc;
use tracing::debug;

/// Lazy sequence of records decoded from one file.
pub type ParseResults<'a> = Box<dyn Iterator<Item = ParseResult> + 'a>;

/// A benchmark tool: how to run it and how to read what it writes.
///
/// Implementations are stateless and shared across threads; the loader
/// parses files in parallel.
pub trait Framework: Send + Sync {
    /// Registry key, e.g. `cpp.google_benchmark`.
    fn name(&self) -> &'static str;

    /// Formats this tool can write and this parser can read.
    fn supported_formats(&self) -> &'static [OutputFormat];

    /// Returns true if `format` is one of [`supported_formats`](Self::supported_formats).
    fn supports(&self, format: OutputFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    /// Decodes one result file.
    ///
    /// `path` selects the format by its extension and names the file in
    /// warnings. A malformed record is logged and skipped inside the
    /// returned iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if the whole file is unusable: unsupported
    /// extension, syntax error, or missing top-level structure.
    fn parse<'a>(&'a self, reader: Box<dyn BufRead + 'a>, path: &'a Path)
        -> Result<ParseResults<'a>>;

    /// Runs one benchmark executable, writing its results to `output`.
    ///
    /// Returns the process exit code, `-1` if it was killed by a signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the process could not be started.
    fn run(&self, runnable: &Path, output: &Path, format: OutputFormat) -> Result<i32>;
}

/// Spawns `command`, waits for it and returns its exit code.
pub(crate) fn run_command(command: &mut Command) -> Result<i32> {
    debug!("Executing {:?}", command);
    let status = command.status()?;
    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Returns the format of `path` if `framework` can read it.
pub(crate) fn detect_format(framework: &dyn Framework, path: &Path) -> Result<OutputFormat> {
    let unsupported = || FrameworkError::UnsupportedFormat {
        framework: framework.name().to_string(),
        format: path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    match OutputFormat::from_path(path) {
        Some(format) if framework.supports(format) => Ok(format),
        _ => Err(unsupported()),
    }
}

/// Name-keyed collection of frameworks.
///
/// # Examples
///
/// ```
/// use ccbenchmark_frameworks::{FrameworkRegistry, OutputFormat};
///
/// let registry = FrameworkRegistry::default();
/// assert!(registry.resolve("cpp.google_benchmark", OutputFormat::Console).is_ok());
/// assert!(registry.resolve("python.pyperf", OutputFormat::Csv).is_err());
/// assert!(registry.get("rust.criterion").is_err());
/// ```
#[derive(Clone)]
pub struct FrameworkRegistry {
    frameworks: BTreeMap<&'static str, Arc<dyn Framework>>,
}

impl FrameworkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            frameworks: BTreeMap::new(),
        }
    }

    /// Adds a framework, replacing any previous one with the same name.
    pub fn register(&mut self, framework: Arc<dyn Framework>) {
        self.frameworks.insert(framework.name(), framework);
    }

    /// Builder variant of [`register`](Self::register).
    pub fn with(mut self, framework: Arc<dyn Framework>) -> Self {
        self.register(framework);
        self
    }

    /// Looks up a framework by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Framework>> {
        self.frameworks
            .get(name)
            .cloned()
            .ok_or_else(|| FrameworkError::UnknownFramework(name.to_string()))
    }

    /// Looks up a framework and checks that it supports `format`.
    pub fn resolve(&self, name: &str, format: OutputFormat) -> Result<Arc<dyn Framework>> {
        let framework = self.get(name)?;
        if !framework.supports(format) {
            return Err(FrameworkError::UnsupportedFormat {
                framework: name.to_string(),
                format: format.to_string(),
            });
        }
        Ok(framework)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.frameworks.keys().copied()
    }
}

impl Default for FrameworkRegistry {
    /// Registry with every built-in framework.
    fn default() -> Self {
        Self::new()
            .with(Arc::new(GoogleBenchmark))
            .with(Arc::new(Pyperf))
    }
}

impl std::fmt::Debug for FrameworkRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.frameworks.keys()).finish()
    }
}
