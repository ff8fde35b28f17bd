//! Model-theoretic evaluation of logical forms.
//!
//! A [Model](model::Model) fixes the entities and events of a situation together with predicate extensions and a variable assignment; [eval] checks a [Formula](crate::structures::formula::Formula) against it.

pub mod eval;
pub mod model;

pub use eval::eval;
pub use model::Model;
