/*!
The lexicon --- an immutable set of lexical items together with the categories which terminate a derivation.

Lookup is by exact phonological match, including items keyed by the empty string (phonologically-null elements, available at every parse rather than at a token position).

The lexicon also records which categories spell out as clausal, verbal, or nominal heads.
Category tags themselves stay opaque strings; the classification is part of the grammar data, not of the calculus.
*/

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::structures::{
    feature::{Category, Feature},
    formula::Formula,
};

/// A lexical item: a token, an ordered feature sequence, and a formula.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct LexicalItem {
    /// The phonological form of the item; empty for null elements.
    pub token: String,

    /// The feature sequence, outermost first.
    pub features: Vec<Feature>,

    /// The meaning of the item.
    pub meaning: Formula,
}

impl LexicalItem {
    pub fn new(token: &str, features: Vec<Feature>, meaning: Formula) -> Self {
        LexicalItem {
            token: token.to_owned(),
            features,
            meaning,
        }
    }
}

/// A grammar: lexical items, start symbols, and the spellout classification of categories.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Lexicon {
    /// The lexical items.
    pub items: Vec<LexicalItem>,

    /// Categories which terminate a derivation.
    pub start: BTreeSet<Category>,

    /// Categories spelled out as clause heads.
    pub clausal: BTreeSet<Category>,

    /// Categories spelled out as verbal heads.
    pub verbal: BTreeSet<Category>,

    /// Categories spelled out as nominal (non-clausal, non-verbal) heads.
    pub nominal: BTreeSet<Category>,
}

impl Lexicon {
    /// Every item whose phonological form equals `token` exactly.
    pub fn lookup<'l>(&'l self, token: &'l str) -> impl Iterator<Item = &'l LexicalItem> {
        self.items.iter().filter(move |item| item.token == token)
    }

    /// Every phonologically-null item.
    pub fn nulls(&self) -> impl Iterator<Item = &LexicalItem> {
        self.items.iter().filter(|item| item.token.is_empty())
    }

    /// Whether `category` terminates a derivation.
    pub fn is_start(&self, category: &str) -> bool {
        self.start.contains(category)
    }

    /// Whether `category` is eligible for spellout at all.
    pub fn spells_out(&self, category: &str) -> bool {
        self.clausal.contains(category)
            || self.verbal.contains(category)
            || self.nominal.contains(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact() {
        let lexicon = Lexicon {
            items: vec![
                LexicalItem::new("alice", vec![Feature::licensee("d")], Formula::constant("alice")),
                LexicalItem::new(
                    "alice.NOM",
                    vec![Feature::licensee("d"), Feature::licensee("nom")],
                    Formula::constant("alice"),
                ),
                LexicalItem::new("", vec![Feature::licensee("c")], Formula::constant("nil")),
            ],
            ..Lexicon::default()
        };

        assert_eq!(lexicon.lookup("alice").count(), 1);
        assert_eq!(lexicon.lookup("alice.NOM").count(), 1);
        assert_eq!(lexicon.lookup("Alice").count(), 0);

        // The empty token is a valid lookup, matching null elements only.
        assert_eq!(lexicon.lookup("").count(), 1);
        assert_eq!(lexicon.nulls().count(), 1);
    }
}
