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

//! ## Twobody interaction models
//!
//! The uniform contract every tabulated model implements, plus the three
//! concrete models. Models are constructed once, validated eagerly, and
//! never mutated afterwards; evaluation is a pure function of the pair
//! identifier and separation, safe to call concurrently.

use crate::error::Error;
use crate::pair::PairKey;
use crate::species::Species;
use crate::Cutoff;

pub mod buckingham;
pub mod shik;
pub mod teter;

pub use self::buckingham::{
    BuckinghamCoefficients, BuckinghamConfig, BuckinghamExtended, CoefficientSource,
};
pub use self::shik::{ShikCoefficients, ShikConfig, ShikIonic};
pub use self::teter::{TeterCoefficients, TeterConfig, TeterOxide};

/// Contract shared by all tabulated pair-potential models.
///
/// A driver enumerates [`pairs`](PairPotential::pairs), then samples
/// [`potential`](PairPotential::potential) and
/// [`force`](PairPotential::force) across a range of separations bounded
/// by [`Cutoff::cutoff`]. Evaluating a pair that is not in the table is a
/// caller bug and fails with [`Error::UndefinedPair`]; metadata accessors
/// never fail once construction succeeded.
pub trait PairPotential: Cutoff {
    /// Potential energy at separation `r` for the given pair.
    fn potential(&self, pair: &PairKey, r: f64) -> Result<f64, Error>;

    /// Force magnitude at separation `r` for the given pair, positive
    /// for repulsive interactions.
    fn force(&self, pair: &PairKey, r: f64) -> Result<f64, Error>;

    /// Pairs for which coefficients are defined.
    fn pairs(&self) -> Vec<PairKey>;

    /// Number of samples the driver should take over (0, cutoff].
    fn sample_count(&self) -> usize;

    /// The requested species, in input order.
    fn species(&self) -> &[Species];

    /// Display name of the generated table.
    fn name(&self) -> &str;

    /// Whether the driver should plot the sampled table.
    fn plot(&self) -> bool {
        false
    }
}

/// Enum over all twobody model variants.
///
/// Lets a driver hold any model as a single concrete type while
/// dispatching the [`PairPotential`] contract.
#[derive(Debug, Clone)]
pub enum TwobodyPotential {
    /// Extended damped Buckingham with user-supplied coefficients
    BuckinghamExtended(BuckinghamExtended),
    /// Ionic short+long-range model with Wolf electrostatics
    ShikIonic(ShikIonic),
    /// Piecewise oxide model for cation-oxygen pairs
    TeterOxide(TeterOxide),
}

impl Cutoff for TwobodyPotential {
    fn cutoff(&self) -> f64 {
        match self {
            Self::BuckinghamExtended(model) => model.cutoff(),
            Self::ShikIonic(model) => model.cutoff(),
            Self::TeterOxide(model) => model.cutoff(),
        }
    }
}

impl PairPotential for TwobodyPotential {
    fn potential(&self, pair: &PairKey, r: f64) -> Result<f64, Error> {
        match self {
            Self::BuckinghamExtended(model) => model.potential(pair, r),
            Self::ShikIonic(model) => model.potential(pair, r),
            Self::TeterOxide(model) => model.potential(pair, r),
        }
    }

    fn force(&self, pair: &PairKey, r: f64) -> Result<f64, Error> {
        match self {
            Self::BuckinghamExtended(model) => model.force(pair, r),
            Self::ShikIonic(model) => model.force(pair, r),
            Self::TeterOxide(model) => model.force(pair, r),
        }
    }

    fn pairs(&self) -> Vec<PairKey> {
        match self {
            Self::BuckinghamExtended(model) => model.pairs(),
            Self::ShikIonic(model) => model.pairs(),
            Self::TeterOxide(model) => model.pairs(),
        }
    }

    fn sample_count(&self) -> usize {
        match self {
            Self::BuckinghamExtended(model) => model.sample_count(),
            Self::ShikIonic(model) => model.sample_count(),
            Self::TeterOxide(model) => model.sample_count(),
        }
    }

    fn species(&self) -> &[Species] {
        match self {
            Self::BuckinghamExtended(model) => model.species(),
            Self::ShikIonic(model) => model.species(),
            Self::TeterOxide(model) => model.species(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::BuckinghamExtended(model) => model.name(),
            Self::ShikIonic(model) => model.name(),
            Self::TeterOxide(model) => model.name(),
        }
    }

    fn plot(&self) -> bool {
        match self {
            Self::BuckinghamExtended(model) => model.plot(),
            Self::ShikIonic(model) => model.plot(),
            Self::TeterOxide(model) => model.plot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TeterData;

    #[test]
    fn test_enum_dispatch() {
        let config = TeterConfig {
            table_name: "teter".to_string(),
            plot: true,
            cutoff: 8.0,
            sample_count: 500,
            species: vec!["Si".to_string(), "O".to_string()],
        };
        let model = TeterOxide::new(config, &TeterData::published()).unwrap();
        let expected_pairs = model.pairs();
        let boxed = TwobodyPotential::TeterOxide(model);
        assert_eq!(boxed.pairs(), expected_pairs);
        assert_eq!(boxed.cutoff(), 8.0);
        assert_eq!(boxed.sample_count(), 500);
        assert_eq!(boxed.name(), "teter");
        assert!(boxed.plot());
    }
}
