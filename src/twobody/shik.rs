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

//! SHIK ionic potential for silicate systems.
//!
//! Combines a damped Buckingham-type short-range term,
//!
//! $$ u_{sr}(r) = A e^{-Br} - \frac{C}{r^6} + \frac{D}{r^{24}}, $$
//!
//! with Wolf-summed long-range electrostatics,
//!
//! $$ u_{w}(r) = \frac{q_a q_b}{4\pi\varepsilon_0}
//!    \left(\frac{1}{r} - \frac{1}{R_w} + \frac{r - R_w}{R_w^2}\right), $$
//!
//! and a quench factor $e^{-\gamma/(r - R_w)^2}$ that forces both force
//! and potential to decay continuously to zero exactly at the Wolf
//! cutoff $R_w$. Below the short-range cutoff the full sum applies;
//! beyond it only the electrostatic term survives.
//!
//! Species charges come from reference data, except oxygen whose charge
//! is solved from electroneutrality of the requested composition.
//!
//! Reference: Sundararaman et al., J. Chem. Phys. 148, 194504 (2018),
//! <https://doi.org/10.1063/1.5023707>.

use crate::data::ShikData;
use crate::error::Error;
use crate::pair::PairKey;
use crate::species::{balancing_charge, parse_species, Species};
use crate::twobody::PairPotential;
use crate::{Cutoff, Info, VACUUM_PERMITTIVITY};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// The species whose charge balances the composition.
const BALANCING_SPECIES: &str = "O";

/// The ordered coefficient vector (A, B, C, D) for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShikCoefficients {
    /// Repulsion strength, A (eV)
    pub a: f64,
    /// Repulsion steepness, B (1/Å)
    pub b: f64,
    /// Dispersion strength, C (eV·Å⁶)
    pub c: f64,
    /// Hard-core strength, D (eV·Å²⁴)
    pub d: f64,
}

impl ShikCoefficients {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.d]
    }

    /// Short-range potential energy at separation `r`.
    fn potential(&self, r: f64) -> f64 {
        self.a * (-self.b * r).exp() - self.c / r.powi(6) + self.d / r.powi(24)
    }

    /// Derivative-derived short-range term entering the combined force.
    fn force(&self, r: f64) -> f64 {
        -self.a * self.b * (-self.b * r).exp() + 6.0 * self.c / r.powi(7)
            - 24.0 * self.d / r.powi(25)
    }
}

/// Construction input for [`ShikIonic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShikConfig {
    /// Display name of the generated table
    pub table_name: String,
    /// Whether the driver should plot the result
    #[serde(default)]
    pub plot: bool,
    /// Sampling cutoff radius (Å)
    pub cutoff: f64,
    /// Wolf electrostatics cutoff, R_w (Å)
    pub wolf_cutoff: f64,
    /// Short-range/long-range switch radius, R_buck (Å)
    pub buck_cutoff: f64,
    /// Quench strength, γ
    pub gamma: f64,
    /// Number of samples over (0, cutoff]
    pub sample_count: usize,
    /// Requested `"SYMBOL"` or `"SYMBOL:COUNT"` species tokens
    pub species: Vec<String>,
}

/// SHIK ionic model: short-range Buckingham plus Wolf electrostatics,
/// quenched to zero at the Wolf cutoff.
#[derive(Debug, Clone)]
pub struct ShikIonic {
    name: String,
    plot: bool,
    cutoff: f64,
    wolf_cutoff: f64,
    buck_cutoff: f64,
    gamma: f64,
    sample_count: usize,
    species: Vec<Species>,
    charges: BTreeMap<String, f64>,
    coefficients: BTreeMap<PairKey, ShikCoefficients>,
}

impl ShikIonic {
    /// Build the model from the requested composition and reference
    /// data. Unsupported species are fatal; duplicate species entries
    /// warn and keep contributing their stoichiometric weight; pairs
    /// absent from the reference data are skipped with a warning.
    pub fn new(config: ShikConfig, data: &ShikData) -> Result<Self, Error> {
        for cutoff in [config.cutoff, config.wolf_cutoff, config.buck_cutoff] {
            if !(cutoff > 0.0) {
                return Err(Error::BadCutoff(cutoff));
            }
        }
        if config.sample_count == 0 {
            return Err(Error::BadSampleCount);
        }

        let species = parse_species(&config.species)?;
        for sp in &species {
            if !data.charges.contains_key(&sp.symbol) {
                return Err(Error::UnsupportedSpecies(sp.symbol.clone()));
            }
        }

        let mut charges: BTreeMap<String, f64> = species
            .iter()
            .filter_map(|sp| {
                data.charges
                    .get(&sp.symbol)
                    .map(|charge| (sp.symbol.clone(), *charge))
            })
            .collect();
        if let Some(oxygen_charge) = balancing_charge(&species, &data.charges, BALANCING_SPECIES)? {
            charges.insert(BALANCING_SPECIES.to_string(), oxygen_charge);
        }
        log::info!(
            "charges: {}",
            species
                .iter()
                .map(|sp| sp.symbol.as_str())
                .unique()
                .map(|symbol| format!("{}: {}", symbol, charges[symbol]))
                .join(", ")
        );

        let mut coefficients = BTreeMap::new();
        let mut visited: Vec<&str> = Vec::new();
        for first in &species {
            if visited.contains(&first.symbol.as_str()) {
                log::warn!(
                    "duplicate entry for species {} will be counted towards the total",
                    first.symbol
                );
                continue;
            }
            visited.push(&first.symbol);
            for second in &species {
                let pair = PairKey::new(&first.symbol, &second.symbol);
                match data.coefficients.get(pair.as_str()) {
                    Some(coeffs) => {
                        coefficients.insert(pair, *coeffs);
                    }
                    None => {
                        log::warn!("the {} interaction is not defined by this potential", pair)
                    }
                }
            }
        }

        Ok(Self {
            name: config.table_name,
            plot: config.plot,
            cutoff: config.cutoff,
            wolf_cutoff: config.wolf_cutoff,
            buck_cutoff: config.buck_cutoff,
            gamma: config.gamma,
            sample_count: config.sample_count,
            species,
            charges,
            coefficients,
        })
    }

    /// Resolved charge of a species, oxygen included.
    pub fn charge(&self, symbol: &str) -> Option<f64> {
        self.charges.get(symbol).copied()
    }

    /// Quench factor forcing zero at the Wolf cutoff. Defined as
    /// exactly zero at `r == wolf_cutoff` rather than the analytic
    /// limit, which avoids the 0/0 in the exponent.
    pub fn smooth(&self, r: f64) -> f64 {
        if r == self.wolf_cutoff {
            0.0
        } else {
            (-self.gamma / (r - self.wolf_cutoff).powi(2)).exp()
        }
    }

    fn wolf_potential(&self, charge_product: f64, r: f64) -> f64 {
        charge_product / (4.0 * PI * VACUUM_PERMITTIVITY)
            * (1.0 / r - 1.0 / self.wolf_cutoff
                + (r - self.wolf_cutoff) / self.wolf_cutoff.powi(2))
    }

    fn wolf_force(&self, charge_product: f64, r: f64) -> f64 {
        charge_product / (4.0 * PI * VACUUM_PERMITTIVITY)
            * (-1.0 / r.powi(2) + 1.0 / self.wolf_cutoff.powi(2))
    }

    fn lookup(&self, pair: &PairKey) -> Result<(ShikCoefficients, f64), Error> {
        let coeffs = self
            .coefficients
            .get(pair)
            .ok_or_else(|| Error::UndefinedPair(pair.to_string()))?;
        let (first, second) = pair.species();
        let charge_product = self.charge(first).zip(self.charge(second)).map(|(a, b)| a * b);
        let charge_product =
            charge_product.ok_or_else(|| Error::UndefinedPair(pair.to_string()))?;
        Ok((*coeffs, charge_product))
    }
}

impl Cutoff for ShikIonic {
    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl PairPotential for ShikIonic {
    fn potential(&self, pair: &PairKey, r: f64) -> Result<f64, Error> {
        let (coeffs, charge_product) = self.lookup(pair)?;
        let wolf = self.wolf_potential(charge_product, r);
        let combined = if r < self.buck_cutoff {
            coeffs.potential(r) + wolf
        } else {
            wolf
        };
        Ok(combined * self.smooth(r))
    }

    fn force(&self, pair: &PairKey, r: f64) -> Result<f64, Error> {
        let (coeffs, charge_product) = self.lookup(pair)?;
        let wolf = self.wolf_force(charge_product, r);
        let combined = if r < self.buck_cutoff {
            coeffs.force(r) + wolf
        } else {
            wolf
        };
        Ok(-combined * self.smooth(r))
    }

    fn pairs(&self) -> Vec<PairKey> {
        self.coefficients.keys().cloned().collect()
    }

    fn sample_count(&self) -> usize {
        self.sample_count
    }

    fn species(&self) -> &[Species] {
        &self.species
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn plot(&self) -> bool {
        self.plot
    }
}

impl Info for ShikIonic {
    fn short_name(&self) -> Option<&'static str> {
        Some("shik")
    }
    fn long_name(&self) -> Option<&'static str> {
        Some("SHIK ionic potential with Wolf electrostatics")
    }
    fn citation(&self) -> Option<&'static str> {
        Some("https://doi.org/10.1063/1.5023707")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn synthetic_data() -> ShikData {
        let charges = BTreeMap::from([
            ("Si".to_string(), 2.0),
            ("Na".to_string(), 1.0),
            ("O".to_string(), f64::NAN),
        ]);
        let mut coefficients = BTreeMap::new();
        for pair in ["Si-O", "O-Si"] {
            coefficients.insert(pair.to_string(), ShikCoefficients::new(1000.0, 4.0, 50.0, 10.0));
        }
        for pair in ["Na-O", "O-Na"] {
            coefficients.insert(pair.to_string(), ShikCoefficients::new(500.0, 5.0, 20.0, 5.0));
        }
        coefficients.insert("O-O".to_string(), ShikCoefficients::new(800.0, 3.0, 30.0, 100.0));
        ShikData {
            charges,
            coefficients,
        }
    }

    fn config(species: &[&str]) -> ShikConfig {
        ShikConfig {
            table_name: "shik".to_string(),
            plot: false,
            cutoff: 10.0,
            wolf_cutoff: 10.0,
            buck_cutoff: 6.0,
            gamma: 0.2,
            sample_count: 1000,
            species: species.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn model(species: &[&str]) -> ShikIonic {
        ShikIonic::new(config(species), &synthetic_data()).unwrap()
    }

    #[test]
    fn test_smooth_is_zero_at_wolf_cutoff() {
        let model = model(&["Si", "O:2"]);
        assert_eq!(model.smooth(10.0), 0.0);
        assert!(model.smooth(9.999) > 0.0);
        // the whole potential vanishes there too
        let pair = PairKey::new("Si", "O");
        assert_eq!(model.potential(&pair, 10.0).unwrap(), 0.0);
        assert_eq!(model.force(&pair, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_oxygen_charge_balances_composition() {
        // Na2O . SiO2: q_O = -(2*1 + 1*2)/3
        let model = model(&["Na:2", "Si", "O:3"]);
        let q_o = model.charge("O").unwrap();
        assert_relative_eq!(q_o, -4.0 / 3.0);
        let total: f64 = model
            .species()
            .iter()
            .map(|sp| model.charge(&sp.symbol).unwrap() * f64::from(sp.stoichiometry))
            .sum();
        assert_relative_eq!(total, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_potential_formula_below_buck_cutoff() {
        let model = model(&["Si", "O:2"]);
        let pair = PairKey::new("Si", "O");
        let q_o = -1.0; // 2.0 / 2 oxygens, sign flipped
        let (r, r_w, gamma) = (2.0f64, 10.0f64, 0.2f64);
        let buck = 1000.0 * (-4.0 * r).exp() - 50.0 / r.powi(6) + 10.0 / r.powi(24);
        let wolf = (2.0 * q_o) / (4.0 * PI * VACUUM_PERMITTIVITY)
            * (1.0 / r - 1.0 / r_w + (r - r_w) / r_w.powi(2));
        let smooth = (-gamma / (r - r_w).powi(2)).exp();
        assert_relative_eq!(
            model.potential(&pair, r).unwrap(),
            (buck + wolf) * smooth,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_force_formula_below_buck_cutoff() {
        let model = model(&["Si", "O:2"]);
        let pair = PairKey::new("Si", "O");
        let (r, r_w, gamma) = (2.0f64, 10.0f64, 0.2f64);
        let buck =
            -1000.0 * 4.0 * (-4.0 * r).exp() + 6.0 * 50.0 / r.powi(7) - 24.0 * 10.0 / r.powi(25);
        let wolf = -2.0 / (4.0 * PI * VACUUM_PERMITTIVITY) * (-1.0 / r.powi(2) + 1.0 / r_w.powi(2));
        let smooth = (-gamma / (r - r_w).powi(2)).exp();
        assert_relative_eq!(
            model.force(&pair, r).unwrap(),
            -(buck + wolf) * smooth,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_only_wolf_beyond_buck_cutoff() {
        let model = model(&["Si", "O:2"]);
        let pair = PairKey::new("Si", "O");
        let (r, r_w, gamma) = (6.0f64, 10.0f64, 0.2f64); // r == buck cutoff: long-range side
        let wolf = -2.0 / (4.0 * PI * VACUUM_PERMITTIVITY)
            * (1.0 / r - 1.0 / r_w + (r - r_w) / r_w.powi(2));
        let smooth = (-gamma / (r - r_w).powi(2)).exp();
        assert_relative_eq!(
            model.potential(&pair, r).unwrap(),
            wolf * smooth,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_only_wolf_force_beyond_buck_cutoff() {
        let model = model(&["Si", "O:2"]);
        let pair = PairKey::new("Si", "O");
        let (r, r_w, gamma) = (7.0f64, 10.0f64, 0.2f64);
        let wolf = -2.0 / (4.0 * PI * VACUUM_PERMITTIVITY) * (-1.0 / r.powi(2) + 1.0 / r_w.powi(2));
        let smooth = (-gamma / (r - r_w).powi(2)).exp();
        assert_relative_eq!(
            model.force(&pair, r).unwrap(),
            -wolf * smooth,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_formulas_across_grid() {
        // both branches of potential and force over (0, cutoff]
        let model = model(&["Si", "O:2"]);
        let pair = PairKey::new("Si", "O");
        let (r_w, r_b, gamma) = (10.0f64, 6.0f64, 0.2f64);
        for i in 1..100 {
            let r = 0.1 * i as f64;
            let buck = 1000.0 * (-4.0 * r).exp() - 50.0 / r.powi(6) + 10.0 / r.powi(24);
            let buck_force = -1000.0 * 4.0 * (-4.0 * r).exp() + 6.0 * 50.0 / r.powi(7)
                - 24.0 * 10.0 / r.powi(25);
            let prefactor = -2.0 / (4.0 * PI * VACUUM_PERMITTIVITY);
            let wolf = prefactor * (1.0 / r - 1.0 / r_w + (r - r_w) / r_w.powi(2));
            let wolf_force = prefactor * (-1.0 / r.powi(2) + 1.0 / r_w.powi(2));
            let smooth = (-gamma / (r - r_w).powi(2)).exp();
            let (expected_pot, expected_force) = if r < r_b {
                ((buck + wolf) * smooth, -(buck_force + wolf_force) * smooth)
            } else {
                (wolf * smooth, -wolf_force * smooth)
            };
            assert_relative_eq!(
                model.potential(&pair, r).unwrap(),
                expected_pot,
                max_relative = 1e-9
            );
            assert_relative_eq!(
                model.force(&pair, r).unwrap(),
                expected_force,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_buck_cutoff_jump_equals_short_range_term() {
        // The switch drops the Buckingham term without blending, so the
        // discontinuity is exactly buck(r)·smooth(r); document it here
        let model = model(&["Si", "O:2"]);
        let pair = PairKey::new("Si", "O");
        let eps = 1e-9;
        let below = model.potential(&pair, 6.0 - eps).unwrap();
        let above = model.potential(&pair, 6.0).unwrap();
        let r = 6.0f64;
        let buck = 1000.0 * (-4.0 * r).exp() - 50.0 / r.powi(6) + 10.0 / r.powi(24);
        let smooth = model.smooth(r);
        assert_relative_eq!(below - above, buck * smooth, max_relative = 1e-4);
    }

    #[test]
    fn test_missing_pairs_are_skipped_not_fatal() {
        // Si-Si has no reference row: warned and skipped
        let model = model(&["Si", "O:2"]);
        let pairs = model.pairs();
        assert!(pairs.contains(&PairKey::new("Si", "O")));
        assert!(pairs.contains(&PairKey::new("O", "Si")));
        assert!(pairs.contains(&PairKey::new("O", "O")));
        assert!(!pairs.contains(&PairKey::new("Si", "Si")));
    }

    #[test]
    fn test_duplicate_species_warn_but_keep_pair_set() {
        let deduplicated = model(&["Si", "O:2"]);
        let duplicated = model(&["Si", "O", "O"]);
        assert_eq!(deduplicated.pairs(), duplicated.pairs());
        // both compositions resolve the same oxygen charge
        assert_relative_eq!(
            deduplicated.charge("O").unwrap(),
            duplicated.charge("O").unwrap()
        );
    }

    #[test]
    fn test_unsupported_species_is_fatal() {
        let err = ShikIonic::new(config(&["Si", "Xx", "O"]), &synthetic_data()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSpecies(_)));
    }

    #[test]
    fn test_malformed_species_is_fatal() {
        let err = ShikIonic::new(config(&["Si:1:2", "O"]), &synthetic_data()).unwrap_err();
        assert!(matches!(err, Error::MalformedSpecies(_)));
    }

    #[test]
    fn test_undefined_pair_is_internal_error() {
        let model = model(&["Si", "O:2"]);
        let err = model.force(&PairKey::new("Si", "Si"), 2.0).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_metadata_idempotent() {
        let model = model(&["Si", "O:2"]);
        assert_eq!(model.pairs(), model.pairs());
        assert_eq!(model.cutoff(), 10.0);
        assert_eq!(model.sample_count(), 1000);
        assert_eq!(model.name(), "shik");
    }
}
