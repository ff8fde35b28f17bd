/*!
(The representation of) an expression --- the unit of derivation.

An expression bundles a phonological string, an ordered feature sequence, the arguments it has discharged, the child expressions attached to it, and its formula.

Children are attached by [insertion](crate::procedures::insert) and consumed by [merge](crate::procedures::merge): a child removed by a final merge is recorded as an [Argument], while a child matched non-finally stays attached and moves on with its remaining features.
When a merged child is removed, its own children are spliced into the host, so movers stay reachable at every layer of the derivation.
*/

use serde::{Deserialize, Serialize};

use crate::structures::{
    feature::{Category, Feature},
    formula::Formula,
    lexicon::LexicalItem,
};

/// The token recorded for an argument discharged in specifier position.
///
/// Specifier meanings contribute semantically, not phonologically.
pub const PLACEHOLDER: &str = "";

/// Whether an expression is a bare lexical insertion or the result of a merge.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ExpressionKind {
    Lexical,
    Derived,
}

/// A discharged complement or specifier, kept for spellout.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Argument {
    /// The phonology of the argument, or [PLACEHOLDER].
    pub token: String,

    /// The category under which the argument was discharged.
    pub category: Category,

    /// The meaning contributed by the argument.
    pub meaning: Formula,
}

/// An expression.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Expression {
    /// The phonological string.
    pub phon: String,

    /// Lexical or derived.
    pub kind: ExpressionKind,

    /// The feature sequence, outermost first.
    pub features: Vec<Feature>,

    /// Arguments discharged so far, in merge order.
    pub arguments: Vec<Argument>,

    /// Attached child expressions.
    pub children: Vec<Expression>,

    /// The meaning of the expression.
    pub meaning: Formula,
}

impl Expression {
    /// A fresh lexical expression for the given item.
    pub fn lexical(item: &LexicalItem) -> Self {
        Expression {
            phon: item.token.clone(),
            kind: ExpressionKind::Lexical,
            features: item.features.clone(),
            arguments: Vec::default(),
            children: Vec::default(),
            meaning: item.meaning.clone(),
        }
    }

    /// The outermost feature, if any.
    pub fn outer(&self) -> Option<&Feature> {
        self.features.first()
    }

    /// The indices of children whose outermost feature is a licensee of `category`.
    pub fn licensee_children(&self, category: &str) -> Vec<usize> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| match child.outer() {
                Some(Feature::Licensee(c)) if c == category => Some(index),
                _ => None,
            })
            .collect()
    }

    /// Whether the outermost feature of the expression is an adjunct feature.
    pub fn is_adjunct(&self) -> bool {
        matches!(self.outer(), Some(Feature::Adjunct(_)))
    }

    /// Whether a spellout pass still has material to assemble.
    pub fn needs_spellout(&self) -> bool {
        !self.arguments.is_empty() || self.children.iter().any(Expression::is_adjunct)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" [", self.phon)?;
        for (index, feature) in self.features.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{feature}")?;
        }
        write!(f, "] : {}", self.meaning)
    }
}
