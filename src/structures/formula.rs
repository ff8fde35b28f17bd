/*!
The logical-form algebra.

Formulas are restricted to monadic predicates plus a fixed set of combinators: this is not a general first-order language.
Events are related to their participants only through the two fixed dyadic theta relations, "internal" and "external", reached via [Int](Formula::Int) and [Ext](Formula::Ext).

# Quantification

Scope is detected structurally, not through an explicit marker.
A formula is *quantificational* iff, walking its rightmost spine through [Conjunction](Formula::Conjunction) nodes, the final node is a [Quantifier](Formula::Quantifier) tag.
A quantified determiner phrase therefore takes the shape:

```text
int_i(restrictor) & quantifier
```

where `i` is a globally fresh negative index minted at spellout.
The index is the binding site for restricted quantification: [merge_nonfinal](crate::procedures::merge) substitutes `Variable(i)` for the phrase at its theta position, and the [evaluator](crate::semantics::eval) extends the assignment with `i` while walking the restricted domain.
*/

use serde::{Deserialize, Serialize};

/// A variable or theta index.
///
/// Pronoun indices are positive and supplied by the lexicon; theta indices are negative and minted fresh by the context, so the two never collide.
pub type Index = i64;

/// The two quantifier kinds.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum QuantifierKind {
    Exists,
    Forall,
}

/// A formula of the restricted logical-form algebra.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Formula {
    /// A monadic predicate or proper name.
    Constant(String),

    /// A variable, resolved through the model assignment.
    Variable(Index),

    /// The internal theta role of an event.
    Int(Box<Formula>),

    /// A theta-role placeholder awaiting variable binding.
    IndexedInternal(Box<Formula>, Index),

    /// The external theta role of an event.
    Ext(Box<Formula>),

    /// Conjunction of two formulas at the same value.
    Conjunction(Box<Formula>, Box<Formula>),

    /// Existential closure over events.
    Closure(Box<Formula>),

    /// A quantifier tag, positioned by the structural scope convention.
    Quantifier(QuantifierKind),
}

impl Formula {
    /// A constant with the given name.
    pub fn constant(name: &str) -> Self {
        Formula::Constant(name.to_owned())
    }

    /// The conjunction of `left` and `right`.
    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Formula::Conjunction(Box::new(left), Box::new(right))
    }

    /// Whether the rightmost spine of the formula, through conjunction nodes, terminates in a quantifier tag.
    pub fn is_quantificational(&self) -> bool {
        match self {
            Formula::Quantifier(_) => true,
            Formula::Conjunction(_, right) => right.is_quantificational(),
            _ => false,
        }
    }

    /// The index of the rightmost [IndexedInternal](Formula::IndexedInternal) node, if any.
    ///
    /// For a quantified phrase this is the binding index of its quantifier.
    pub fn theta_index(&self) -> Option<Index> {
        match self {
            Formula::IndexedInternal(_, index) => Some(*index),

            Formula::Conjunction(left, right) => right.theta_index().or_else(|| left.theta_index()),

            Formula::Int(inner) | Formula::Ext(inner) | Formula::Closure(inner) => {
                inner.theta_index()
            }

            _ => None,
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Constant(name) => write!(f, "{name}"),
            Formula::Variable(index) => write!(f, "x_{index}"),
            Formula::Int(inner) => write!(f, "int({inner})"),
            Formula::IndexedInternal(inner, index) => write!(f, "int_{index}({inner})"),
            Formula::Ext(inner) => write!(f, "ext({inner})"),
            Formula::Conjunction(left, right) => write!(f, "{left} & {right}"),
            Formula::Closure(inner) => write!(f, "<{inner}>"),
            Formula::Quantifier(QuantifierKind::Exists) => write!(f, "some"),
            Formula::Quantifier(QuantifierKind::Forall) => write!(f, "every"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn girl_phrase(index: Index) -> Formula {
        Formula::conjunction(
            Formula::IndexedInternal(Box::new(Formula::constant("girl")), index),
            Formula::Quantifier(QuantifierKind::Exists),
        )
    }

    #[test]
    fn quantificational_spine() {
        assert!(Formula::Quantifier(QuantifierKind::Forall).is_quantificational());
        assert!(girl_phrase(-1).is_quantificational());

        // The tag must terminate the spine, not merely occur.
        let tag_left = Formula::conjunction(
            Formula::Quantifier(QuantifierKind::Exists),
            Formula::constant("girl"),
        );
        assert!(!tag_left.is_quantificational());
        assert!(!Formula::constant("girl").is_quantificational());
    }

    #[test]
    fn theta_index_extraction() {
        assert_eq!(girl_phrase(-7).theta_index(), Some(-7));
        assert_eq!(Formula::constant("girl").theta_index(), None);
    }

    #[test]
    fn presentation() {
        let phrase = girl_phrase(-1);
        assert_eq!(phrase.to_string(), "int_-1(girl) & some");

        let closed = Formula::Closure(Box::new(Formula::Ext(Box::new(Formula::Variable(2)))));
        assert_eq!(closed.to_string(), "<ext(x_2)>");
    }
}
