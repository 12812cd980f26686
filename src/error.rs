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

//! Error types for model construction and evaluation.
//!
//! Two classes share the enum: fatal configuration errors, raised while a
//! model is being constructed from user input, and the internal
//! consistency error [`Error::UndefinedPair`], raised when evaluation is
//! requested for a pair that was never listed by the model. The latter
//! indicates a caller bug, not bad input, and can be told apart with
//! [`Error::is_internal`].

use thiserror::Error;

/// Errors raised by model construction and evaluation.
#[derive(Debug, Error)]
pub enum Error {
    /// A pair token did not contain exactly two species symbols.
    #[error("malformed pair '{0}': expected exactly two atomic species joined by '-'")]
    MalformedPair(String),

    /// A species token was not of the form `SYMBOL` or `SYMBOL:COUNT`.
    #[error("malformed species entry '{0}': expected SYMBOL or SYMBOL:COUNT")]
    MalformedSpecies(String),

    /// A stoichiometric coefficient was missing, zero, or not an integer.
    #[error("stoichiometric coefficient in '{0}' must be a positive integer")]
    BadStoichiometry(String),

    /// A requested species is not in the supported set of the chosen model.
    #[error("unsupported species '{0}'")]
    UnsupportedSpecies(String),

    /// A supplied coefficient could not be parsed as a number.
    #[error("coefficient {name} for pair '{pair}' is not a number: '{value}'")]
    BadCoefficient {
        pair: String,
        name: &'static str,
        value: String,
    },

    /// The cutoff radius must be a positive real.
    #[error("cutoff radius must be positive, got {0}")]
    BadCutoff(f64),

    /// The sample count must be a positive integer.
    #[error("sample count must be positive")]
    BadSampleCount,

    /// Evaluation was requested for a pair absent from the coefficient
    /// table. Callers should only request pairs returned by
    /// `PairPotential::pairs`.
    #[error("inconsistent pair assignment: '{0}' is not defined by this potential")]
    UndefinedPair(String),
}

impl Error {
    /// True if the error indicates an internal caller bug rather than a
    /// configuration that cannot be satisfied.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::UndefinedPair(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert!(Error::UndefinedPair("Si-O".into()).is_internal());
        assert!(!Error::MalformedPair("Si-O-H".into()).is_internal());
        assert!(!Error::UnsupportedSpecies("Xx".into()).is_internal());
    }

    #[test]
    fn test_display() {
        let err = Error::BadCoefficient {
            pair: "Si-O".into(),
            name: "rho",
            value: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "coefficient rho for pair 'Si-O' is not a number: 'abc'"
        );
    }
}
