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

//! # Pairtab
//!
//! A library for generating tabulated interatomic pair-force and
//! pair-potential curves for molecular dynamics simulations.
//!
//! Each interaction model implements the [`twobody::PairPotential`]
//! contract: given a pair identifier and a separation it evaluates the
//! closed-form potential energy and force, and it reports the metadata
//! (cutoff, sample count, species, defined pairs) a sampler needs to
//! drive the table generation. Three models are provided:
//!
//! - [`twobody::BuckinghamExtended`] — extended damped Buckingham form
//!   with interactively- or programmatically-supplied coefficients,
//! - [`twobody::ShikIonic`] — short-range Buckingham plus Wolf-summed
//!   electrostatics, quenched to zero at the Wolf cutoff,
//! - [`twobody::TeterOxide`] — piecewise oxide form for cation-oxygen
//!   pairs.
//!
//! Reference coefficient tables live in [`data`] and are injected at
//! model construction, so the evaluation engine can equally run against
//! synthetic data sets.

#[cfg(test)]
extern crate approx;

pub mod data;
pub mod error;
pub mod pair;
pub mod species;
pub mod support;
pub mod twobody;

pub use error::Error;
pub use pair::PairKey;
pub use species::Species;

use physical_constants::{ELECTRON_VOLT, ELEMENTARY_CHARGE, VACUUM_ELECTRIC_PERMITTIVITY};

/// Vacuum permittivity, ε₀, in e²/(eV·Å).
///
/// The electrostatic working units of the ionic models: charges in units
/// of the elementary charge, separations in ångström, energies in
/// electron volts. The familiar Coulomb prefactor follows directly:
///
/// Examples:
/// ```
/// use std::f64::consts::PI;
/// use pairtab::VACUUM_PERMITTIVITY;
/// let prefactor = 1.0 / (4.0 * PI * VACUUM_PERMITTIVITY); // eV·Å per e²
/// assert!((prefactor - 14.399645).abs() < 1e-5);
/// ```
pub const VACUUM_PERMITTIVITY: f64 =
    VACUUM_ELECTRIC_PERMITTIVITY * ELECTRON_VOLT * 1e-10 / (ELEMENTARY_CHARGE * ELEMENTARY_CHARGE);

/// Defines a cutoff distance
pub trait Cutoff {
    /// Squared cutoff distance
    fn cutoff_squared(&self) -> f64 {
        self.cutoff().powi(2)
    }

    /// Cutoff distance
    fn cutoff(&self) -> f64;
}

/// Static information about an interaction model
pub trait Info {
    /// Short name, preferably without spaces
    fn short_name(&self) -> Option<&'static str> {
        None
    }
    /// Longer, descriptive name
    fn long_name(&self) -> Option<&'static str> {
        None
    }
    /// Citation, DOI, or URL describing the model
    fn citation(&self) -> Option<&'static str> {
        None
    }
}
