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

//! Time values with explicit physical units.
//!
//! A [`BenchmarkTime`] is either *available* (a positive finite value with a
//! unit) or *absent*. Absence is distinct from zero: a measured zero is
//! stored as [`ZERO_SUBSTITUTE`] so that every available value stays valid
//! under `ln`/`log10`, while an absent value propagates as `N/A` through
//! conversion and comparison.

use crate::error::DataError;
use std::fmt;
use std::str::FromStr;

/// Stand-in for a measured `0.0`: the smallest positive subnormal `f64`.
pub const ZERO_SUBSTITUTE: f64 = 5e-324;

/// Physical time units plus the synthetic percentage unit used for deltas.
///
/// Variants are ordered by magnitude; `Percentage` sorts last and has no
/// tier, so it is never rescaled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum TimeUnit {
    /// Nanoseconds.
    #[serde(rename = "ns")]
    Ns,
    /// Microseconds.
    #[serde(rename = "us")]
    Us,
    /// Milliseconds.
    #[serde(rename = "ms")]
    Ms,
    /// Seconds.
    #[serde(rename = "s")]
    S,
    /// Relative change or ratio, in percent.
    #[serde(rename = "%")]
    Percentage,
}

impl TimeUnit {
    /// All physical units, smallest first.
    pub const DURATIONS: [TimeUnit; 4] = [TimeUnit::Ns, TimeUnit::Us, TimeUnit::Ms, TimeUnit::S];

    /// Returns the unit as it is written in benchmark output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
            TimeUnit::S => "s",
            TimeUnit::Percentage => "%",
        }
    }

    /// Power of ten relative to nanoseconds, `None` for percentages.
    pub fn tier(&self) -> Option<i32> {
        match self {
            TimeUnit::Ns => Some(0),
            TimeUnit::Us => Some(3),
            TimeUnit::Ms => Some(6),
            TimeUnit::S => Some(9),
            TimeUnit::Percentage => None,
        }
    }

    /// Returns true for the synthetic percentage unit.
    pub fn is_percentage(&self) -> bool {
        matches!(self, TimeUnit::Percentage)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ns" => Ok(TimeUnit::Ns),
            "us" | "µs" | "μs" => Ok(TimeUnit::Us),
            "ms" => Ok(TimeUnit::Ms),
            "s" => Ok(TimeUnit::S),
            "%" => Ok(TimeUnit::Percentage),
            other => Err(DataError::UnknownTimeUnit(other.to_string())),
        }
    }
}

/// Which clock a measurement was taken with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TimeType {
    /// Wall-clock time.
    Real,
    /// CPU time.
    Cpu,
}

impl TimeType {
    /// Both axes, in the order they are normalized.
    pub const ALL: [TimeType; 2] = [TimeType::Cpu, TimeType::Real];

    /// Returns a human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeType::Real => "real time",
            TimeType::Cpu => "cpu time",
        }
    }
}

/// A single measurement: value and unit, or absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BenchmarkTime {
    value: Option<f64>,
    unit: Option<TimeUnit>,
}

impl BenchmarkTime {
    /// Creates an available time.
    ///
    /// `0.0` is replaced by [`ZERO_SUBSTITUTE`]. Non-finite values (`NaN`,
    /// infinities) carry no usable magnitude and yield an absent time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccbenchmark_core::{BenchmarkTime, TimeUnit, ZERO_SUBSTITUTE};
    ///
    /// let t = BenchmarkTime::new(0.0, TimeUnit::Ns);
    /// assert_eq!(t.value(), Some(ZERO_SUBSTITUTE));
    /// assert!(BenchmarkTime::new(f64::NAN, TimeUnit::Ns).is_absent());
    /// ```
    pub fn new(value: f64, unit: TimeUnit) -> Self {
        if !value.is_finite() {
            return Self::absent();
        }
        let value = if value == 0.0 { ZERO_SUBSTITUTE } else { value };
        Self {
            value: Some(value),
            unit: Some(unit),
        }
    }

    /// Creates an absent time (no measurement).
    pub const fn absent() -> Self {
        Self {
            value: None,
            unit: None,
        }
    }

    /// Numeric value, if available.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Unit, if available.
    pub fn unit(&self) -> Option<TimeUnit> {
        self.unit
    }

    /// Returns true if this time carries no measurement.
    pub fn is_absent(&self) -> bool {
        self.value.is_none() || self.unit.is_none()
    }

    /// Returns true if the stored value is the substitute for a measured zero.
    pub fn is_zero_substitute(&self) -> bool {
        self.value == Some(ZERO_SUBSTITUTE)
    }

    /// Converts this time into `unit`.
    ///
    /// The value is scaled by `10^(input_tier - output_tier)`. Absent values
    /// and percentages are returned unchanged, and so is every value when the
    /// target is `%`, which is not a duration. A measured zero stays a
    /// measured zero in every unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccbenchmark_core::{BenchmarkTime, TimeUnit};
    ///
    /// let t = BenchmarkTime::new(2_500.0, TimeUnit::Ns).convert(TimeUnit::Us);
    /// assert_eq!(t.unit(), Some(TimeUnit::Us));
    /// assert!((t.value().unwrap() - 2.5).abs() < 1e-12);
    /// ```
    pub fn convert(&self, unit: TimeUnit) -> BenchmarkTime {
        let (Some(value), Some(current)) = (self.value, self.unit) else {
            return *self;
        };
        let (Some(input_tier), Some(output_tier)) = (current.tier(), unit.tier()) else {
            return *self;
        };
        if input_tier == output_tier {
            return *self;
        }
        if self.is_zero_substitute() {
            return BenchmarkTime {
                value: Some(ZERO_SUBSTITUTE),
                unit: Some(unit),
            };
        }
        BenchmarkTime::new(value * 10f64.powi(input_tier - output_tier), unit)
    }
}

impl fmt::Display for BenchmarkTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value, self.unit) {
            (Some(value), Some(unit)) => write!(f, "{:.2} {}", value, unit),
            _ => f.write_str("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_substitute_is_smallest_positive() {
        assert_eq!(ZERO_SUBSTITUTE.to_bits(), 1);
        assert!(ZERO_SUBSTITUTE > 0.0);
        assert!(ZERO_SUBSTITUTE.ln().is_finite());
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("ns".parse::<TimeUnit>().unwrap(), TimeUnit::Ns);
        assert_eq!("us".parse::<TimeUnit>().unwrap(), TimeUnit::Us);
        assert_eq!("ms".parse::<TimeUnit>().unwrap(), TimeUnit::Ms);
        assert_eq!("s".parse::<TimeUnit>().unwrap(), TimeUnit::S);
        assert_eq!("%".parse::<TimeUnit>().unwrap(), TimeUnit::Percentage);
        assert!(matches!(
            "min".parse::<TimeUnit>(),
            Err(DataError::UnknownTimeUnit(u)) if u == "min"
        ));
    }

    #[test]
    fn test_units_ordered_by_magnitude() {
        assert!(TimeUnit::Ns < TimeUnit::Us);
        assert!(TimeUnit::Us < TimeUnit::Ms);
        assert!(TimeUnit::Ms < TimeUnit::S);
    }

    #[test]
    fn test_convert_down_and_up() {
        let t = BenchmarkTime::new(3.0, TimeUnit::S).convert(TimeUnit::Ms);
        assert_eq!(t.unit(), Some(TimeUnit::Ms));
        assert!((t.value().unwrap() - 3_000.0).abs() < 1e-9);

        let t = BenchmarkTime::new(42.0, TimeUnit::Ns).convert(TimeUnit::S);
        assert!((t.value().unwrap() - 42e-9).abs() < 1e-20);
    }

    #[test]
    fn test_convert_leaves_percentage_untouched() {
        let pct = BenchmarkTime::new(5.0, TimeUnit::Percentage);
        assert_eq!(pct.convert(TimeUnit::Ns), pct);

        let ns = BenchmarkTime::new(5.0, TimeUnit::Ns);
        assert_eq!(ns.convert(TimeUnit::Percentage), ns);
    }

    #[test]
    fn test_convert_absent_stays_absent() {
        assert!(BenchmarkTime::absent().convert(TimeUnit::Ms).is_absent());
    }

    #[test]
    fn test_convert_underflow_keeps_zero_substitute() {
        let t = BenchmarkTime::new(0.0, TimeUnit::Ns).convert(TimeUnit::S);
        assert!(t.is_zero_substitute());
        assert_eq!(t.unit(), Some(TimeUnit::S));
    }

    #[test]
    fn test_convert_to_smaller_unit_keeps_zero_substitute() {
        let t = BenchmarkTime::new(0.0, TimeUnit::S).convert(TimeUnit::Ms);
        assert!(t.is_zero_substitute());
        assert_eq!(t.unit(), Some(TimeUnit::Ms));

        let t = t.convert(TimeUnit::Ns);
        assert!(t.is_zero_substitute());
        assert_eq!(t.unit(), Some(TimeUnit::Ns));
    }

    #[test]
    fn test_display() {
        assert_eq!(BenchmarkTime::new(12.3456, TimeUnit::Ns).to_string(), "12.35 ns");
        assert_eq!(
            BenchmarkTime::new(-50.0, TimeUnit::Percentage).to_string(),
            "-50.00 %"
        );
        assert_eq!(BenchmarkTime::absent().to_string(), "N/A");
    }

    #[test]
    fn test_non_finite_is_absent() {
        assert!(BenchmarkTime::new(f64::INFINITY, TimeUnit::Ms).is_absent());
        assert!(BenchmarkTime::new(f64::NAN, TimeUnit::Ms).is_absent());
    }
}
