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

//! Extended damped Buckingham potential.
//!
//! The classic exponential-repulsion + dispersion form, extended with a
//! damping factor on the $C/r^6$ term and a $D/r^{12}$ hard core:
//!
//! $$ u(r) = A e^{-r/\rho} - \frac{C}{r^6}\left(1 - e^{-r_p^6}\right) + \frac{D}{r^{12}} $$
//!
//! with the reduced distance $r_p = r / (43\rho)$. The force is the
//! negative analytic derivative, positive for repulsion:
//!
//! $$ f(r) = \frac{A}{\rho} e^{-r/\rho} - \frac{6C}{r^7}\left(1 - e^{-r_p^6}\right)
//!           + \frac{6C}{43^6\rho^6 r} e^{-r_p^6} + \frac{12D}{r^{13}} $$

use crate::error::Error;
use crate::pair::PairKey;
use crate::species::Species;
use crate::twobody::PairPotential;
use crate::{Cutoff, Info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Crossover scale multiplier in the damping term, `rp = r / (43ρ)`.
const DAMPING_SCALE: f64 = 43.0;

/// The ordered coefficient vector (A, ρ, C, D) for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuckinghamCoefficients {
    /// Repulsion strength, A
    pub a: f64,
    /// Repulsion range, ρ
    pub rho: f64,
    /// Dispersion strength, C
    pub c: f64,
    /// Hard-core strength, D
    pub d: f64,
}

impl BuckinghamCoefficients {
    pub const fn new(a: f64, rho: f64, c: f64, d: f64) -> Self {
        Self { a, rho, c, d }
    }

    /// ρ with the degeneracy guard applied: if A, ρ, and C are all
    /// exactly zero, ρ is treated as 1 so the exponential term cannot
    /// divide by zero. A numeric-stability patch, not a physical
    /// default.
    fn effective_rho(&self) -> f64 {
        if self.a == 0.0 && self.c == 0.0 && self.rho == 0.0 {
            1.0
        } else {
            self.rho
        }
    }

    /// Potential energy at separation `r`.
    ///
    /// The near-cancelling `1 - exp(-rp⁶)` factor is evaluated through
    /// `exp_m1`, which stays accurate around the crossover scale `43ρ`.
    pub fn potential(&self, r: f64) -> f64 {
        let rho = self.effective_rho();
        let rp6 = (r / (DAMPING_SCALE * rho)).powi(6);
        let damping = -f64::exp_m1(-rp6); // 1 - exp(-rp⁶)
        self.a * (-r / rho).exp() - self.c / r.powi(6) * damping + self.d / r.powi(12)
    }

    /// Force at separation `r`, the negative derivative of
    /// [`potential`](Self::potential).
    pub fn force(&self, r: f64) -> f64 {
        let rho = self.effective_rho();
        let crossover = DAMPING_SCALE * rho;
        let rp6 = (r / crossover).powi(6);
        let damping = -f64::exp_m1(-rp6);
        self.a / rho * (-r / rho).exp() - 6.0 * self.c * r.powi(-7) * damping
            + 6.0 * self.c / crossover.powi(6) * (-rp6).exp() / r
            + 12.0 * self.d * r.powi(-13)
    }
}

/// Supplies the four Buckingham coefficients for a pair.
///
/// Decouples the model from any particular input mechanism: an
/// interactive driver can back this with per-coefficient prompts, a
/// batch driver with a file, tests with a closure.
pub trait CoefficientSource {
    fn coefficients(&mut self, pair: &PairKey) -> Result<BuckinghamCoefficients, Error>;
}

impl<F> CoefficientSource for F
where
    F: FnMut(&PairKey) -> Result<BuckinghamCoefficients, Error>,
{
    fn coefficients(&mut self, pair: &PairKey) -> Result<BuckinghamCoefficients, Error> {
        self(pair)
    }
}

/// Parse one textual coefficient value, for prompt- or file-backed
/// [`CoefficientSource`] implementations.
pub fn parse_coefficient(pair: &PairKey, name: &'static str, value: &str) -> Result<f64, Error> {
    value.trim().parse().map_err(|_| Error::BadCoefficient {
        pair: pair.to_string(),
        name,
        value: value.trim().to_string(),
    })
}

/// Construction input for [`BuckinghamExtended`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuckinghamConfig {
    /// Display name of the generated table
    pub table_name: String,
    /// Whether the driver should plot the result
    #[serde(default)]
    pub plot: bool,
    /// Cutoff radius (Å)
    pub cutoff: f64,
    /// Number of samples over (0, cutoff]
    pub sample_count: usize,
    /// Requested `"A-B"` pair tokens
    pub pairs: Vec<String>,
}

/// Extended damped Buckingham model with per-pair coefficients drawn
/// from an injected [`CoefficientSource`].
#[derive(Debug, Clone)]
pub struct BuckinghamExtended {
    name: String,
    plot: bool,
    cutoff: f64,
    sample_count: usize,
    species: Vec<Species>,
    coefficients: BTreeMap<PairKey, BuckinghamCoefficients>,
}

impl BuckinghamExtended {
    /// Build the model, asking `source` for the coefficients of each
    /// requested pair. Malformed pair tokens and unparsable coefficients
    /// abort construction; a pair supplied twice warns and keeps the
    /// coefficients supplied last.
    pub fn new(
        config: BuckinghamConfig,
        source: &mut dyn CoefficientSource,
    ) -> Result<Self, Error> {
        if !(config.cutoff > 0.0) {
            return Err(Error::BadCutoff(config.cutoff));
        }
        if config.sample_count == 0 {
            return Err(Error::BadSampleCount);
        }

        let mut species: Vec<Species> = Vec::new();
        let mut coefficients = BTreeMap::new();
        for token in &config.pairs {
            let pair: PairKey = token.parse()?;
            let (first, second) = pair.species();
            for symbol in [first, second] {
                if !species.iter().any(|sp| sp.symbol == symbol) {
                    species.push(Species::new(symbol, 1));
                }
            }
            if coefficients.contains_key(&pair) {
                log::warn!("duplicate entry for pair {} will replace the earlier coefficients", pair);
            }
            let coeffs = source.coefficients(&pair)?;
            coefficients.insert(pair, coeffs);
        }

        Ok(Self {
            name: config.table_name,
            plot: config.plot,
            cutoff: config.cutoff,
            sample_count: config.sample_count,
            species,
            coefficients,
        })
    }

    fn lookup(&self, pair: &PairKey) -> Result<&BuckinghamCoefficients, Error> {
        self.coefficients
            .get(pair)
            .ok_or_else(|| Error::UndefinedPair(pair.to_string()))
    }
}

impl Cutoff for BuckinghamExtended {
    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl PairPotential for BuckinghamExtended {
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

impl Info for BuckinghamExtended {
    fn short_name(&self) -> Option<&'static str> {
        Some("buck-ext")
    }
    fn long_name(&self) -> Option<&'static str> {
        Some("Extended damped Buckingham potential")
    }
    fn citation(&self) -> Option<&'static str> {
        Some("https://en.wikipedia.org/wiki/Buckingham_potential")
    }
}
