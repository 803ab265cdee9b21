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

//! Text tables for the compare command.

use ccbenchmark::{BenchmarkData, MetricName, TimeType};
use colored::{ColoredString, Colorize};

const NOT_AVAILABLE: &str = "N/A";
const DELTA_PREFIX: char = 'Δ';
const NOISY_CV_PERCENT: f64 = 10.0;

fn numeric(cell: &str) -> Option<f64> {
    cell.split_whitespace().next()?.parse().ok()
}

fn paint(header: &str, cell: &str, padded: &str) -> ColoredString {
    let Some(value) = numeric(cell) else {
        return padded.normal();
    };
    if header.starts_with(DELTA_PREFIX) {
        if value > 0.0 {
            padded.red()
        } else if value < 0.0 {
            padded.green()
        } else {
            padded.normal()
        }
    } else if header == MetricName::Cv.label() && value > NOISY_CV_PERCENT {
        padded.red()
    } else {
        padded.normal()
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, target: usize) -> String {
    format!("{}{}", text, " ".repeat(target.saturating_sub(width(text))))
}

/// Renders the comparison table of a selection.
///
/// The selection must already have its deltas computed. Columns where every
/// cell is `N/A` are dropped unless `show_empty` is set. Positive deltas
/// (slower) are red, negative ones green, and a CV above 10 % is red.
///
/// # Panics
///
/// Panics if a selected index is out of range.
pub fn render_table(
    data: &BenchmarkData,
    selected: &[usize],
    time_type: TimeType,
    show_empty: bool,
) -> String {
    let columns = data.get_columns(selected);
    let rows = data.get_rows(selected);
    let cells = data.column_to_str_matrix(selected, time_type);

    let visible: Vec<usize> = (0..columns.len())
        .filter(|&col| show_empty || cells.iter().any(|row| row[col] != NOT_AVAILABLE))
        .collect();

    let corner = if selected.len() == 1 { "Iteration" } else { "Benchmark" };
    let row_width = rows
        .iter()
        .map(String::as_str)
        .map(width)
        .chain([width(corner)])
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = visible
        .iter()
        .map(|&col| {
            cells
                .iter()
                .map(|row| width(&row[col]))
                .chain([width(&columns[col])])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&pad(corner, row_width));
    for (&col, &w) in visible.iter().zip(&widths) {
        out.push_str(" | ");
        out.push_str(&pad(&columns[col], w).as_str().bold().to_string());
    }
    out.push('\n');

    let rule = row_width + widths.iter().map(|w| w + 3).sum::<usize>();
    out.push_str(&"-".repeat(rule));
    out.push('\n');

    for (name, row) in rows.iter().zip(&cells) {
        out.push_str(&pad(name, row_width));
        for (&col, &w) in visible.iter().zip(&widths) {
            out.push_str(" | ");
            let painted = paint(&columns[col], &row[col], &pad(&row[col], w));
            out.push_str(&painted.to_string());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccbenchmark::{BenchmarkTime, TimeUnit};
    use std::path::Path;

    fn ns(value: f64) -> BenchmarkTime {
        BenchmarkTime::new(value, TimeUnit::Ns)
    }

    fn history() -> BenchmarkData {
        let mut data = BenchmarkData::new(vec!["v1".into(), "v2".into()]);
        let row = data.register_or_get(Path::new("bin"), "BM_A");
        data.write(row, MetricName::Time.index(), 0, ns(100.0), ns(100.0));
        data.write(row, MetricName::Time.index(), 1, ns(150.0), ns(100.0));
        data.compare_selection(&[row], TimeType::Real);
        data
    }

    #[test]
    fn test_numeric() {
        assert_eq!(numeric("50.00 %"), Some(50.0));
        assert_eq!(numeric("-3.10 ms"), Some(-3.1));
        assert_eq!(numeric("N/A"), None);
    }

    #[test]
    fn test_empty_columns_hidden() {
        colored::control::set_override(false);
        let table = render_table(&history(), &[0], TimeType::Real, false);
        let header = table.lines().next().unwrap();

        assert!(header.starts_with("Iteration"));
        assert!(header.contains("ΔTime"));
        assert!(!header.contains("Stddev"));
        assert!(table.contains("50.00 %"));
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_show_empty_keeps_all_columns() {
        colored::control::set_override(false);
        let data = history();
        let table = render_table(&data, &[0], TimeType::Real, true);
        let header = table.lines().next().unwrap();
        for column in data.get_columns(&[0]) {
            assert!(header.contains(&column), "missing {}", column);
        }
    }

    #[test]
    fn test_columns_are_aligned() {
        colored::control::set_override(false);
        let table = render_table(&history(), &[0], TimeType::Real, false);
        let separators: Vec<Vec<usize>> = table
            .lines()
            .filter(|line| !line.starts_with('-'))
            .map(|line| {
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| *c == '|')
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect();
        assert!(separators.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
