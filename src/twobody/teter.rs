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

//! Piecewise Teter potential for oxide systems.
//!
//! Covers cation-oxygen pairs only. Inside the crossover radius $r_0$
//! a steep power-law patch applies, outside it a plain Buckingham form:
//!
//! $$ u(r) = \begin{cases}
//!    B r^{-n} + D r^2 & r \le r_0 \\\\
//!    A e^{-r/\rho} - C r^{-6} & r > r_0
//! \end{cases} $$
//!
//! The crossover is a hard switch with no enforced continuity; the jump
//! is inherited from the reference formulation and is preserved as-is.
//! Coulombic terms are not included and must be added by the caller.

use crate::data::TeterData;
use crate::error::Error;
use crate::pair::PairKey;
use crate::species::{parse_species, Species};
use crate::twobody::PairPotential;
use crate::{Cutoff, Info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Advisory shown alongside generated tables.
const ADVISORY: &str = "only oxygen-cation interactions are specified by Teter; \
use Coulombic interactions for the rest";

/// The ordered coefficient vector (A, B, C, D, ρ, n, r₀) for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeterCoefficients {
    /// Long-range repulsion strength, A
    pub a: f64,
    /// Short-range patch strength, B
    pub b: f64,
    /// Dispersion strength, C
    pub c: f64,
    /// Short-range quadratic strength, D
    pub d: f64,
    /// Long-range repulsion range, ρ
    pub rho: f64,
    /// Short-range patch exponent, n
    pub n: f64,
    /// Crossover radius, r₀ (inclusive on the short-range side)
    pub r0: f64,
}

impl TeterCoefficients {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, rho: f64, n: f64, r0: f64) -> Self {
        Self {
            a,
            b,
            c,
            d,
            rho,
            n,
            r0,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.d, self.rho, self.n, self.r0]
    }

    /// Potential energy at separation `r`.
    pub fn potential(&self, r: f64) -> f64 {
        if r <= self.r0 {
            self.b * r.powf(-self.n) + self.d * r.powi(2)
        } else {
            self.a * (-r / self.rho).exp() - self.c * r.powi(-6)
        }
    }

    /// Force at separation `r`, the negative derivative of
    /// [`potential`](Self::potential) on each branch.
    pub fn force(&self, r: f64) -> f64 {
        if r <= self.r0 {
            self.b * self.n * r.powf(-self.n - 1.0) - 2.0 * self.d * r
        } else {
            self.a / self.rho * (-r / self.rho).exp() - 6.0 * self.c * r.powi(-7)
        }
    }
}

/// Construction input for [`TeterOxide`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeterConfig {
    /// Display name of the generated table
    pub table_name: String,
    /// Whether the driver should plot the result
    #[serde(default)]
    pub plot: bool,
    /// Cutoff radius (Å)
    pub cutoff: f64,
    /// Number of samples over (0, cutoff]
    pub sample_count: usize,
    /// Requested species tokens
    pub species: Vec<String>,
}

/// Piecewise Teter oxide model, restricted to cation-oxygen pairs.
#[derive(Debug, Clone)]
pub struct TeterOxide {
    name: String,
    plot: bool,
    cutoff: f64,
    sample_count: usize,
    species: Vec<Species>,
    charges: BTreeMap<String, f64>,
    coefficients: BTreeMap<PairKey, TeterCoefficients>,
}

impl TeterOxide {
    /// Build the model from the requested species and reference data.
    /// Each species is resolved against both `"X-O"` and `"O-X"`; when
    /// both orderings exist the latter wins, matching the reference
    /// formulation. Species without an oxygen pairing and duplicate
    /// resolved pairs are dropped with a warning.
    pub fn new(config: TeterConfig, data: &TeterData) -> Result<Self, Error> {
        if !(config.cutoff > 0.0) {
            return Err(Error::BadCutoff(config.cutoff));
        }
        if config.sample_count == 0 {
            return Err(Error::BadSampleCount);
        }

        let species = parse_species(&config.species)?;
        let mut coefficients = BTreeMap::new();
        for sp in &species {
            let mut resolved: Option<(PairKey, TeterCoefficients)> = None;
            for attempt in [
                PairKey::new(&sp.symbol, "O"),
                PairKey::new("O", &sp.symbol),
            ] {
                if let Some(coeffs) = data.coefficients.get(attempt.as_str()) {
                    resolved = Some((attempt, *coeffs));
                }
            }
            match resolved {
                None => log::warn!("unsupported atom {} will be ignored", sp.symbol),
                Some((pair, _)) if coefficients.contains_key(&pair) => {
                    log::warn!("duplicate entry for atom {} will be ignored", sp.symbol)
                }
                Some((pair, coeffs)) => {
                    coefficients.insert(pair, coeffs);
                }
            }
        }

        let charges: BTreeMap<String, f64> = species
            .iter()
            .filter_map(|sp| {
                data.charges
                    .get(&sp.symbol)
                    .map(|charge| (sp.symbol.clone(), *charge))
            })
            .collect();
        for (symbol, charge) in &charges {
            log::info!("charge {}: {}", symbol, charge);
        }

        Ok(Self {
            name: config.table_name,
            plot: config.plot,
            cutoff: config.cutoff,
            sample_count: config.sample_count,
            species,
            charges,
            coefficients,
        })
    }

    /// Reference charge of a listed species, if defined.
    pub fn charge(&self, symbol: &str) -> Option<f64> {
        self.charges.get(symbol).copied()
    }

    /// Emit the coverage note: only cation-oxygen interactions are
    /// tabulated, Coulombic terms must be added separately by the
    /// caller. Informational only, no state change.
    pub fn advisory(&self) -> &'static str {
        log::info!("{}", ADVISORY);
        ADVISORY
    }

    fn lookup(&self, pair: &PairKey) -> Result<&TeterCoefficients, Error> {
        self.coefficients
            .get(pair)
            .ok_or_else(|| Error::UndefinedPair(pair.to_string()))
    }
}

impl Cutoff for TeterOxide {
    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl PairPotential for TeterOxide {
    fn potential(&self, pair: &PairKey, r: f64) -> Result<f64, Error> {
        Ok(self.lookup(pair)?.potential(r))
    }

    fn force(&self, pair: &PairKey, r: f64) -> Result<f64, Error> {
        Ok(self.lookup(pair)?.force(r))
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

impl Info for TeterOxide {
    fn short_name(&self) -> Option<&'static str> {
        Some("teter")
    }
    fn long_name(&self) -> Option<&'static str> {
        Some("Piecewise Teter oxide potential")
    }
    fn citation(&self) -> Option<&'static str> {
        Some("https://doi.org/10.1016/j.jnoncrysol.2004.08.264")
    }
}
