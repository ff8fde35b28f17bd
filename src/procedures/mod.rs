//! The combination operators and the parse procedure.
//!
//! Each operator is a *partial* function over expressions: it either returns a fresh expression or signals inapplicability with [None](Option::None).
//! Inapplicability is not an error --- the engine simply tries the next operator or the next chart pairing.
//!
//! The engine applies operators in a fixed priority order:
//! [insert_adjunct](crate::context::Context::insert_adjunct),
//! [spellout](crate::context::Context::spellout),
//! [merge_comp](crate::context::Context::merge_comp),
//! [merge_spec](crate::context::Context::merge_spec),
//! [merge_nonfinal](crate::context::Context::merge_nonfinal),
//! [insert](crate::context::Context::insert),
//! and keeps only the first application that succeeds for each agenda item.
//! This is a greedy, single-path derivation strategy, not exhaustive ambiguity enumeration: a valid parse reachable only through a different local choice may be missed.

pub mod insert;
pub mod merge;
pub mod parse;
pub mod spellout;
