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

//! Atomic species and stoichiometry.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// An atomic species with its stoichiometric coefficient within the
/// reference formula unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// Atomic symbol, e.g. `"Si"`
    pub symbol: String,
    /// Count within the formula unit (defaults to 1)
    pub stoichiometry: u32,
}

impl Species {
    pub fn new(symbol: &str, stoichiometry: u32) -> Self {
        Self {
            symbol: symbol.to_string(),
            stoichiometry,
        }
    }
}

impl FromStr for Species {
    type Err = Error;

    /// Parse a `"SYMBOL"` or `"SYMBOL:COUNT"` token. The count must be a
    /// positive integer.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let parts: Vec<&str> = token.split(':').collect();
        match parts.as_slice() {
            [symbol] if !symbol.is_empty() => Ok(Self::new(symbol, 1)),
            [symbol, count] if !symbol.is_empty() => {
                let stoichiometry: u32 = count
                    .parse()
                    .map_err(|_| Error::BadStoichiometry(token.to_string()))?;
                if stoichiometry == 0 {
                    return Err(Error::BadStoichiometry(token.to_string()));
                }
                Ok(Self::new(symbol, stoichiometry))
            }
            _ => Err(Error::MalformedSpecies(token.to_string())),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stoichiometry == 1 {
            f.write_str(&self.symbol)
        } else {
            write!(f, "{}:{}", self.symbol, self.stoichiometry)
        }
    }
}

/// Parse a list of species tokens, preserving order and duplicates.
pub fn parse_species(tokens: &[String]) -> Result<Vec<Species>, Error> {
    tokens.iter().map(|token| token.parse()).collect()
}

/// Solve electroneutrality for the `target` species.
///
/// Returns the charge that makes the stoichiometry-weighted sum of all
/// species charges vanish, i.e. `q` such that
/// `Σ qᵢ·nᵢ + q·n_target = 0`. Duplicate entries contribute their own
/// stoichiometric weight. `None` if the target species is absent.
pub fn balancing_charge(
    species: &[Species],
    charges: &BTreeMap<String, f64>,
    target: &str,
) -> Result<Option<f64>, Error> {
    let mut target_count: u32 = 0;
    let mut total_charge = 0.0;
    for sp in species {
        if sp.symbol == target {
            target_count += sp.stoichiometry;
        } else {
            let charge = charges
                .get(&sp.symbol)
                .ok_or_else(|| Error::UnsupportedSpecies(sp.symbol.clone()))?;
            total_charge += charge * f64::from(sp.stoichiometry);
        }
    }
    if target_count == 0 {
        return Ok(None);
    }
    Ok(Some(-total_charge / f64::from(target_count)))
}
