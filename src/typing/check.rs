//! Type checking - recursive descent over a term tree.
//!
//! `check` evaluates ONE term under a context, returning its type or the
//! first failure. Checking and reduction are independent passes: an ill-typed
//! term may still reduce.

use crate::debug_trace;
use crate::error::TypeError;
use crate::term::Term;
use crate::typing::context::Context;
use crate::typing::Type;

// ============================================================================
// Core API - single term checking
// ============================================================================

/// Check a single term under `ctx` → its type, or the first failure.
pub fn check(term: &Term, ctx: &Context) -> Result<Type, TypeError> {
    match term {
        // Γ(x) = τ  ⊢  x : τ
        Term::Variable { name, .. } => match ctx.lookup(name) {
            Some(ty) => Ok(ty.clone()),
            None => Err(TypeError::UndeclaredVariable(name.clone())),
        },

        // Γ[x:τ₁] ⊢ body : τ₂  ⊢  λx:τ₁. body : τ₁ -> τ₂
        Term::Abstraction {
            param,
            param_ty,
            body,
        } => {
            let extended = ctx.extend(param.clone(), param_ty.clone());
            let body_ty = check(body, &extended)?;
            debug_trace!("check", "λ{} : {} -> {}", param, param_ty, body_ty);
            Ok(Type::function(param_ty.clone(), body_ty))
        }

        // Γ ⊢ f : τ₁ -> τ₂, Γ ⊢ a : τ₁  ⊢  (f) (a) : τ₂
        Term::Application { function, argument } => {
            let function_ty = check(function, ctx)?;
            match function_ty {
                Type::Base(name) => Err(TypeError::NotAFunction(name)),
                Type::Function { domain, codomain } => {
                    let argument_ty = check(argument, ctx)?;
                    // Base types are interchangeable exactly when their
                    // renderings match, so the domain comparison is textual.
                    if argument_ty.to_string() != domain.to_string() {
                        return Err(TypeError::DomainMismatch {
                            expected: domain.to_string(),
                            found: argument_ty.to_string(),
                        });
                    }
                    debug_trace!("check", "({}) ({}) : {}", function, argument, codomain);
                    Ok(*codomain)
                }
            }
        }
    }
}

impl Term {
    /// Method form of [`check`].
    pub fn type_check(&self, ctx: &Context) -> Result<Type, TypeError> {
        check(self, ctx)
    }
}
