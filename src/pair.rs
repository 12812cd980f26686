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

//! Canonical pair identifiers.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical identifier for a pair of atomic species, e.g. `"Si-O"`.
///
/// Order matters only at creation: models whose reference data is
/// asymmetric look a pair up under both orderings before giving up.
///
/// # Examples
/// ~~~
/// use pairtab::PairKey;
/// let pair: PairKey = " Si - O ".parse().unwrap();
/// assert_eq!(pair.as_str(), "Si-O");
/// assert_eq!(pair.species(), ("Si", "O"));
/// assert!("Si-O-H".parse::<PairKey>().is_err());
/// ~~~
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    /// Join two species symbols into a pair key. The symbols are taken
    /// as-is; use [`FromStr`] to validate a user-supplied token.
    pub fn new(first: &str, second: &str) -> Self {
        Self(format!("{}-{}", first, second))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two species symbols, in creation order.
    pub fn species(&self) -> (&str, &str) {
        self.0.split_once('-').unwrap_or((self.0.as_str(), ""))
    }
}

impl FromStr for PairKey {
    type Err = Error;

    /// Parse a `"A-B"` token, stripping all whitespace. Exactly two
    /// non-empty species symbols are required.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let stripped: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        let parts: Vec<&str> = stripped.split('-').collect();
        match parts.as_slice() {
            [first, second] if !first.is_empty() && !second.is_empty() => {
                Ok(Self::new(first, second))
            }
            _ => Err(Error::MalformedPair(token.to_string())),
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
