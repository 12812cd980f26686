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

//! Built-in reference data for the ionic models.
//!
//! Supported-species sets, per-species charges and per-pair coefficient
//! rows, plus the column headings used by the support-table printer.
//! The tables are injected into the models at construction time, so any
//! synthetic [`ShikData`]/[`TeterData`] value works equally well; the
//! constructors here carry the published parameterizations.

use crate::twobody::shik::ShikCoefficients;
use crate::twobody::teter::TeterCoefficients;
use std::collections::BTreeMap;

/// Reference data for the SHIK ionic model.
///
/// Charges are fractional (units of e). The oxygen charge is composition
/// dependent and stored as NaN; [`crate::twobody::ShikIonic`] recomputes
/// it from electroneutrality whenever oxygen is present. Coefficient
/// rows are stored under both pair orderings.
#[derive(Debug, Clone)]
pub struct ShikData {
    pub charges: BTreeMap<String, f64>,
    pub coefficients: BTreeMap<String, ShikCoefficients>,
}

impl ShikData {
    /// Coefficient column headings for the support table.
    pub const HEADINGS: [&'static str; 4] = ["A", "B", "C", "D"];

    /// The published SHIK-2018 family parameterization
    /// (short range in eV with separations in Å).
    pub fn published() -> Self {
        let charges = [
            ("Si", 1.7755),
            ("Al", 1.3313),
            ("Na", 0.5497),
            ("K", 0.6849),
            ("Li", 0.5727),
            ("Ca", 1.0994),
            ("O", f64::NAN), // composition dependent
        ];
        let rows: [(&str, &str, ShikCoefficients); 7] = [
            ("Si", "O", ShikCoefficients::new(23107.85, 5.0986, 139.6950, 66.0)),
            ("O", "O", ShikCoefficients::new(1120.53, 2.8927, 26.1320, 16800.0)),
            ("Al", "O", ShikCoefficients::new(86057.58, 6.3424, 100.6300, 38.0)),
            ("Na", "O", ShikCoefficients::new(1127566.16, 8.2081, 40.5620, 20.0)),
            ("K", "O", ShikCoefficients::new(2055038.17, 8.4217, 44.0210, 20.0)),
            ("Li", "O", ShikCoefficients::new(659595.31, 8.4233, 26.0070, 20.0)),
            ("Ca", "O", ShikCoefficients::new(155667.70, 7.0383, 42.2570, 20.0)),
        ];
        let mut coefficients = BTreeMap::new();
        for (first, second, coeffs) in rows {
            coefficients.insert(format!("{}-{}", first, second), coeffs);
            coefficients.insert(format!("{}-{}", second, first), coeffs);
        }
        Self {
            charges: charges
                .into_iter()
                .map(|(symbol, charge)| (symbol.to_string(), charge))
                .collect(),
            coefficients,
        }
    }
}

/// Reference data for the piecewise Teter oxide model.
///
/// Only cation-oxygen rows are defined; orderings are stored as found in
/// the source tables, so lookups must try both `"X-O"` and `"O-X"`.
#[derive(Debug, Clone)]
pub struct TeterData {
    pub charges: BTreeMap<String, f64>,
    pub coefficients: BTreeMap<String, TeterCoefficients>,
}

impl TeterData {
    /// Coefficient column headings for the support table.
    pub const HEADINGS: [&'static str; 7] = ["A", "B", "C", "D", "RHO", "N", "R0"];

    /// The published Teter oxide parameterization with partial charges
    /// at 0.6 of the formal values.
    pub fn published() -> Self {
        let charges = [
            ("Si", 2.4),
            ("Al", 1.8),
            ("B", 1.8),
            ("Na", 0.6),
            ("K", 0.6),
            ("Li", 0.6),
            ("Mg", 1.2),
            ("Ca", 1.2),
            ("O", -1.2),
        ];
        let rows: [(&str, TeterCoefficients); 9] = [
            ("Si-O", TeterCoefficients::new(13702.905, 20.0, 54.681, 1.0, 0.193817, 12.0, 1.20)),
            ("Al-O", TeterCoefficients::new(12201.417, 18.0, 31.997, 1.0, 0.195628, 12.0, 1.15)),
            ("B-O", TeterCoefficients::new(206941.81, 15.0, 35.018, 1.0, 0.124000, 12.0, 1.00)),
            ("Na-O", TeterCoefficients::new(4383.7555, 22.0, 30.700, 1.0, 0.243838, 12.0, 1.40)),
            ("K-O", TeterCoefficients::new(2284.7845, 25.0, 45.834, 1.0, 0.290000, 12.0, 1.60)),
            ("Li-O", TeterCoefficients::new(41051.938, 16.0, 0.000, 1.0, 0.151160, 12.0, 1.20)),
            ("Mg-O", TeterCoefficients::new(32652.640, 19.0, 27.280, 1.0, 0.178000, 12.0, 1.25)),
            ("O-Ca", TeterCoefficients::new(7747.1834, 21.0, 93.109, 1.0, 0.252623, 12.0, 1.45)),
            ("O-O", TeterCoefficients::new(1844.7458, 12.0, 192.580, 1.0, 0.343645, 12.0, 1.00)),
        ];
        Self {
            charges: charges
                .into_iter()
                .map(|(symbol, charge)| (symbol.to_string(), charge))
                .collect(),
            coefficients: rows
                .into_iter()
                .map(|(pair, coeffs)| (pair.to_string(), coeffs))
                .collect(),
        }
    }
}
