// Copyright 2025 The pairtab developers
//
// Licensed under the Apache license, version 2.0 (the "license");
// you may not use this file except in compliance with the license.
// You may obtain a copy of the license at
//
//     http://www.apache.org/licenses/license-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the license is distributed on an "as is" basis,
// without warranties or conditions of any kind, either express or implied.
// See the license for the specific language governing permissions and
// limitations under the license.

//! Human-readable support tables.
//!
//! Presentation only, entirely outside the evaluation engine: a generic
//! "align numeric strings by decimal point within a fixed column width"
//! utility plus renderers for the per-model charge and coefficient
//! reference tables.

use crate::data::{ShikData, TeterData};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Blank columns appended to every planned column.
const SUPPORT_SPACING: usize = 4;

/// Note shown in place of a charge that is recomputed at construction.
const COMPOSITION_DEPENDENT: &str = "??? (composition dependent)";

/// Format a number with at least `min_decimals` decimal digits,
/// guaranteeing a decimal point is present (`2` becomes `"2.0"`).
pub fn format_min_dec(value: f64, min_decimals: usize) -> String {
    let mut out = format!("{}", value);
    if !out.contains('.') {
        out.push('.');
    }
    let decimals = out.len() - out.rfind('.').unwrap_or(0) - 1;
    for _ in decimals..min_decimals {
        out.push('0');
    }
    out
}

/// Place `string` in a field of width `size` so that its decimal point
/// lands at column `dec_pos`, padding with spaces on both sides.
pub fn align_by_decimal(string: &str, size: usize, dec_pos: usize) -> String {
    let trimmed = string.trim();
    let left = trimmed.find('.').unwrap_or(trimmed.len());
    let mut out = " ".repeat(dec_pos.saturating_sub(left));
    out.push_str(trimmed);
    while out.len() < size {
        out.push(' ');
    }
    out
}

/// Column geometry for decimal-aligned output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Column {
    width: usize,
    dec_pos: usize,
}

/// Plan a column wide enough for a heading and a set of pre-formatted
/// numbers, with the decimal position centered as far as the widest
/// whole and fractional parts allow.
fn plan_column(heading: &str, formatted: &[String]) -> Column {
    let mut width = heading.len();
    let mut max_left = 1;
    let mut max_right = 1;
    for value in formatted {
        let value = value.trim();
        width = width.max(value.len());
        if let Some((whole, decimals)) = value.split_once('.') {
            max_left = max_left.max(whole.len());
            max_right = max_right.max(decimals.len());
        }
    }
    width = width.max(max_left + max_right + 1);
    let dec_pos = ((width as f64 / 2.0).round() as usize).clamp(max_left, width - max_right - 1);
    Column {
        width: width + SUPPORT_SPACING,
        dec_pos,
    }
}

/// Render the ATOM/CHARGE table. NaN charges are shown as composition
/// dependent rather than as a number.
fn charge_table(charges: &BTreeMap<String, f64>) -> String {
    let atom_width = charges
        .keys()
        .map(|atom| atom.len())
        .chain(["ATOM".len()])
        .max()
        .unwrap_or(0)
        + SUPPORT_SPACING;
    let formatted: Vec<String> = charges
        .values()
        .filter(|charge| !charge.is_nan())
        .map(|charge| format_min_dec(*charge, 1))
        .collect();
    let column = plan_column("CHARGE", &formatted);

    let mut out = format!("\t{:<atom_width$}{:<width$}\n", "ATOM", "CHARGE", width = column.width);
    for (atom, charge) in charges {
        let cell = if charge.is_nan() {
            format!("{:<width$}", COMPOSITION_DEPENDENT, width = column.width)
        } else {
            align_by_decimal(&format_min_dec(*charge, 1), column.width, column.dec_pos)
        };
        out.push_str(&format!("\t{:<atom_width$}{}\n", atom, cell.trim_end()));
    }
    out
}

/// Render the PAIR/coefficients table with one decimal-aligned column
/// per coefficient.
fn coefficient_table(headings: &[&str], rows: &BTreeMap<String, Vec<f64>>) -> String {
    let pair_width = rows
        .keys()
        .map(|pair| pair.len())
        .chain(["PAIR".len()])
        .max()
        .unwrap_or(0)
        + SUPPORT_SPACING;

    let columns: Vec<Column> = headings
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            let formatted: Vec<String> = rows
                .values()
                .map(|coeffs| format_min_dec(coeffs[i], 1))
                .collect();
            plan_column(heading, &formatted)
        })
        .collect();

    let header = headings
        .iter()
        .zip(&columns)
        .map(|(heading, column)| format!("{:^width$}", heading, width = column.width))
        .join("");
    let mut out = format!("\t{:<pair_width$}{}\n", "PAIR", header.trim_end());

    for (pair, coeffs) in rows {
        let cells = coeffs
            .iter()
            .zip(&columns)
            .map(|(value, column)| {
                align_by_decimal(&format_min_dec(*value, 1), column.width, column.dec_pos)
            })
            .join("");
        out.push_str(&format!("\t{:<pair_width$}{}\n", pair, cells.trim_end()));
    }
    out
}

/// Supported elements, charges, and pairwise coefficients for SHIK.
pub fn shik_support(data: &ShikData) -> String {
    let rows = data
        .coefficients
        .iter()
        .map(|(pair, coeffs)| (pair.clone(), coeffs.to_vec()))
        .collect();
    format!(
        "SUPPORTED ELEMENTS AND THEIR CHARGES:\n\n{}\nPAIRWISE COEFFICIENTS:\n\n{}",
        charge_table(&data.charges),
        coefficient_table(&ShikData::HEADINGS, &rows),
    )
}

/// Supported elements, charges, and pairwise coefficients for Teter.
pub fn teter_support(data: &TeterData) -> String {
    let rows = data
        .coefficients
        .iter()
        .map(|(pair, coeffs)| (pair.clone(), coeffs.to_vec()))
        .collect();
    format!(
        "SUPPORTED ELEMENTS AND THEIR CHARGES:\n\n{}\nPAIRWISE COEFFICIENTS:\n\n{}",
        charge_table(&data.charges),
        coefficient_table(&TeterData::HEADINGS, &rows),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_min_dec_pads_integers() {
        assert_eq!(format_min_dec(2.0, 1), "2.0");
        assert_eq!(format_min_dec(-1.0, 2), "-1.00");
        assert_eq!(format_min_dec(0.5497, 1), "0.5497");
    }

    #[test]
    fn test_align_by_decimal_positions_point() {
        let aligned = align_by_decimal("1.5", 8, 3);
        assert_eq!(aligned.len(), 8);
        assert_eq!(aligned.find('.'), Some(3));

        let aligned = align_by_decimal("-12.25", 10, 3);
        assert_eq!(aligned.find('.'), Some(3));
        assert_eq!(aligned.len(), 10);
    }

    #[test]
    fn test_plan_column_fits_widest_parts() {
        let formatted: Vec<String> = [1234.5, -0.25, 2.0]
            .iter()
            .map(|v| format_min_dec(*v, 1))
            .collect();
        let column = plan_column("A", &formatted);
        // Every value aligned with the planned geometry stays in bounds
        for value in &formatted {
            let cell = align_by_decimal(value, column.width, column.dec_pos);
            assert_eq!(cell.len(), column.width);
            assert_eq!(cell.find('.'), Some(column.dec_pos));
        }
    }

    #[test]
    fn test_columns_align_across_rows() {
        let rows = BTreeMap::from([
            ("Na-O".to_string(), vec![4383.7555, 22.0]),
            ("Si-O".to_string(), vec![13702.905, 20.0]),
        ]);
        let table = coefficient_table(&["A", "B"], &rows);
        let lines: Vec<&str> = table.lines().skip(1).collect();
        let positions: Vec<Option<usize>> = lines.iter().map(|line| line.find('.')).collect();
        assert_eq!(positions[0], positions[1]);
    }

    #[test]
    fn test_shik_support_flags_oxygen() {
        let table = shik_support(&crate::data::ShikData::published());
        assert!(table.contains("??? (composition dependent)"));
        assert!(table.contains("PAIRWISE COEFFICIENTS"));
    }
}
