//! Failure taxonomy for the fallible term operations.
//!
//! Reduction and type checking never recover internally: every failure
//! propagates unchanged to the caller, and there are no partial results.

use thiserror::Error;

/// Raised by `beta_reduce` when no reduction step is available.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReduceError {
    /// The term is already in normal form; carries its rendering.
    #[error("Reduction on normal form: {0}")]
    NormalForm(String),
}

/// Raised by `type_check` when a term is ill-typed under the given context.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// A variable name is absent from the typing context.
    #[error("Undeclared variable: '{0}'")]
    UndeclaredVariable(String),

    /// The function position of an application has a non-arrow type;
    /// carries that type's rendering.
    #[error("Type error: '{0}' is not a function.")]
    NotAFunction(String),

    /// An argument's type rendering differs from the arrow's domain rendering.
    #[error("Type mismatch: expecting domain '{expected}', got '{found}'")]
    DomainMismatch { expected: String, found: String },

    /// Generic type-checking failure with a free-form message.
    #[error("{0}")]
    Mismatch(String),
}
