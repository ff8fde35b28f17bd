//! Error types used in the library.
//!
//! - Inapplicability of a combination operator is *not* an error, and is signalled with [None](Option::None) by the operators themselves.
//! - Ordinary parse failure is *not* an error, and is signalled with [None](Option::None) by [parse](crate::context::Context::parse).
//! - The errors here indicate internal invariant violations --- a malformed formula which a correct combination-operator implementation never produces.
//!   These abort the current operation, and during testing should be treated as bugs, never as "no result".

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Eval(EvalError),
}

/// Noted errors during evaluation of a formula against a model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvalError {
    /// A variable was queried at true or false rather than against a specific entity.
    BareVariable,

    /// A variable was queried against an entity with no assignment for its index.
    UnboundVariable,

    /// Quantifier evaluation was invoked on a restrictor which carries no theta index.
    NonIndexedRestrictor,

    /// A theta-role placeholder was reached outside the quantified-conjunction pattern.
    ///
    /// The combination-operator contracts guarantee this is unreachable from an accepted derivation.
    StrayThetaIndex,
}

impl From<EvalError> for ErrorKind {
    fn from(e: EvalError) -> Self {
        ErrorKind::Eval(e)
    }
}
