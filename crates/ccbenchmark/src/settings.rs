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

//! Per-project settings in `.ccbenchmark/settings.yaml`.
//!
//! ```yaml
//! cpp.google_benchmark:
//!   benchmark_runnables: ["build/bench/*"]
//!   output_dir: benchmark_results/cpp
//!   output_format: json
//! python.pyperf:
//!   benchmark_runnables: ["bench/*.py"]
//!   output_dir: benchmark_results/python
//!   output_format: json
//! ```
//!
//! Each top-level key names a framework; entries keep their file order.

use crate::error::{Error, Result};
use ccbenchmark_frameworks::{Framework, FrameworkRegistry, OutputFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Directory holding the settings file, relative to the working directory.
pub const SETTINGS_DIR: &str = ".ccbenchmark";

/// Settings file name.
pub const SETTINGS_FILE: &str = "settings.yaml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFrameworkSettings {
    #[serde(default)]
    benchmark_runnables: Vec<String>,
    output_dir: PathBuf,
    output_format: OutputFormat,
}

/// Settings for one framework.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkSettings {
    /// Registry key of the framework.
    pub framework_name: String,
    /// Glob patterns selecting benchmark executables, resolved against the
    /// working directory.
    pub benchmark_runnables: Vec<String>,
    /// Root directory of the iteration directories, resolved against the
    /// working directory.
    pub output_dir: PathBuf,
    /// Format results are written in.
    pub output_format: OutputFormat,
}

/// A framework entry bound to its implementation.
#[derive(Clone)]
pub struct ConfiguredFramework {
    /// The settings entry.
    pub settings: FrameworkSettings,
    /// The framework named by the entry.
    pub framework: Arc<dyn Framework>,
}

impl std::fmt::Debug for ConfiguredFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredFramework")
            .field("settings", &self.settings)
            .field("framework", &self.framework.name())
            .finish()
    }
}

/// All framework entries of a project, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalSettings {
    /// Framework entries.
    pub frameworks: Vec<FrameworkSettings>,
}

impl LocalSettings {
    /// Location of the settings file for a working directory.
    pub fn path(working_dir: &Path) -> PathBuf {
        working_dir.join(SETTINGS_DIR).join(SETTINGS_FILE)
    }

    /// Reads the settings of a working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingsNotFound`] if there is no settings file, and
    /// [`Error::Settings`] if it cannot be parsed.
    pub fn load(working_dir: &Path) -> Result<Self> {
        let path = Self::path(working_dir);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::SettingsNotFound(path));
            }
            Err(err) => return Err(Error::io(&path, err)),
        };
        debug!("Loading settings from {}", path.display());
        Self::from_yaml(&text, working_dir, &path)
    }

    /// Parses settings text; relative paths are resolved against
    /// `working_dir`. `source` only names the file in errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccbenchmark::LocalSettings;
    /// use ccbenchmark_frameworks::OutputFormat;
    /// use std::path::Path;
    ///
    /// let yaml = "cpp.google_benchmark:\n  output_dir: results\n  output_format: csv\n";
    /// let settings = LocalSettings::from_yaml(yaml, Path::new("/project"), Path::new("settings.yaml")).unwrap();
    ///
    /// let entry = &settings.frameworks[0];
    /// assert_eq!(entry.output_dir, Path::new("/project/results"));
    /// assert_eq!(entry.output_format, OutputFormat::Csv);
    /// assert!(entry.benchmark_runnables.is_empty());
    /// ```
    pub fn from_yaml(text: &str, working_dir: &Path, source: &Path) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let mapping: serde_yaml::Mapping = match serde_yaml::from_str(text) {
            Ok(serde_yaml::Value::Null) => serde_yaml::Mapping::new(),
            Ok(serde_yaml::Value::Mapping(mapping)) => mapping,
            Ok(_) => return Err(Error::settings(source, "top level must be a mapping")),
            Err(err) => return Err(Error::settings(source, err)),
        };

        let mut frameworks = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let framework_name = key
                .as_str()
                .ok_or_else(|| Error::settings(source, "framework names must be strings"))?
                .to_string();
            let raw: RawFrameworkSettings = serde_yaml::from_value(value)
                .map_err(|err| Error::settings(source, format!("{}: {}", framework_name, err)))?;

            frameworks.push(FrameworkSettings {
                framework_name,
                benchmark_runnables: raw
                    .benchmark_runnables
                    .iter()
                    .map(|pattern| working_dir.join(pattern).to_string_lossy().into_owned())
                    .collect(),
                output_dir: working_dir.join(raw.output_dir),
                output_format: raw.output_format,
            });
        }
        Ok(Self { frameworks })
    }

    /// Binds every entry to its framework.
    ///
    /// # Errors
    ///
    /// Fails on the first unknown framework name or on a format the
    /// framework does not support.
    pub fn resolve(&self, registry: &FrameworkRegistry) -> Result<Vec<ConfiguredFramework>> {
        self.frameworks
            .iter()
            .map(|settings| -> Result<ConfiguredFramework> {
                let framework = registry.resolve(&settings.framework_name, settings.output_format)?;
                Ok(ConfiguredFramework {
                    settings: settings.clone(),
                    framework,
                })
            })
            .collect()
    }
}
