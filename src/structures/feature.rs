/*!
(The representation of) a feature.

Features drive combination: every operator inspects only the *outermost* feature of an expression, so the order of a feature sequence encodes the derivational order of the grammar.

A category is an opaque string tag (e.g. "d", "v", "c").
Category comparison is by exact string equality.
*/

use serde::{Deserialize, Serialize};

/// A category tag.
pub type Category = String;

/// A feature, one of the three kinds which drive combination.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Feature {
    /// Licenses an expression carrying a matching [Licensee](Feature::Licensee).
    Licensor(Category),

    /// Requires licensing by a matching [Licensor](Feature::Licensor).
    Licensee(Category),

    /// Drives optional modification, consumed at spellout.
    Adjunct(Category),
}

impl Feature {
    /// A licensor of `category`.
    pub fn licensor(category: &str) -> Self {
        Feature::Licensor(category.to_owned())
    }

    /// A licensee of `category`.
    pub fn licensee(category: &str) -> Self {
        Feature::Licensee(category.to_owned())
    }

    /// An adjunct of `category`.
    pub fn adjunct(category: &str) -> Self {
        Feature::Adjunct(category.to_owned())
    }

    /// The category of the feature, of whichever kind.
    pub fn category(&self) -> &str {
        match self {
            Feature::Licensor(c) | Feature::Licensee(c) | Feature::Adjunct(c) => c,
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::Licensor(c) => write!(f, "+{c}"),
            Feature::Licensee(c) => write!(f, "-{c}"),
            Feature::Adjunct(c) => write!(f, "~{c}"),
        }
    }
}
