//! Key structures, such as features, formulas, and expressions.
//!
//! # Overview
//!
//! - A [feature](feature) is a typed tag on an expression controlling what it may combine with.
//! - A [formula](formula) is a logical form from a restricted algebra of monadic predicates and a fixed set of combinators.
//! - A [lexicon](lexicon) pairs phonological tokens with feature sequences and formulas.
//! - An [expression](expression) is the unit of derivation: a phonological string together with features, discharged arguments, attached children, and a formula.
//!
//! Derivations over expressions are stored in the [chart](crate::db), and formulas are interpreted by the [evaluator](crate::semantics::eval).

pub mod expression;
pub mod feature;
pub mod formula;
pub mod lexicon;
