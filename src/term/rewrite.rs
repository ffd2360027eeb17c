//! Term rewriting primitives: substitution and alpha-conversion.
//!
//! Substitution is capture-avoiding: replacing `target` inside `λx. body`
//! must not let a free `x` in the replacement become bound. When that would
//! happen the binder is first renamed to a fresh primed name, then the
//! substitution proceeds into the renamed body.

use crate::debug_trace;
use crate::term::Term;

impl Term {
    /// Substitute every free occurrence of `target` with a copy of `value`,
    /// returning the rewritten tree. `value` is borrowed, never consumed.
    pub fn substitute(&self, target: &str, value: &Term) -> Term {
        match self {
            // x{v/x} = v,  y{v/x} = y
            Term::Variable { name, .. } => {
                if name == target {
                    value.clone()
                } else {
                    self.clone()
                }
            }

            Term::Abstraction {
                param,
                param_ty,
                body,
            } => {
                // The binder shadows the target, stop
                if param == target {
                    return self.clone();
                }

                // Free-variable capture: a free `param` in the replacement
                // would become bound. Rename the binder first.
                if value.has_free(param) && body.has_free(target) {
                    let fresh = fresh_name(param, &[body.as_ref(), value]);
                    debug_trace!("rewrite", "capture of '{}', renaming to '{}'", param, fresh);
                    let fresh_var = Term::var_typed(fresh.clone(), param_ty.clone());
                    let renamed = body.substitute(param, &fresh_var);
                    return Term::Abstraction {
                        param: fresh,
                        param_ty: param_ty.clone(),
                        body: Box::new(renamed.substitute(target, value)),
                    };
                }

                // Everything's nice
                Term::Abstraction {
                    param: param.clone(),
                    param_ty: param_ty.clone(),
                    body: Box::new(body.substitute(target, value)),
                }
            }

            // (f a){v/x} = (f{v/x}) (a{v/x})
            Term::Application { function, argument } => Term::app(
                function.substitute(target, value),
                argument.substitute(target, value),
            ),
        }
    }

    /// Alpha-conversion.
    ///
    /// On an abstraction this renames the binder and all of its bound
    /// occurrences consistently: the body is rewritten by substituting the
    /// old binder name with a fresh variable named `new_name`, so free
    /// variables and shadowed inner binders are untouched.
    ///
    /// On a variable or application this is the structural primitive that
    /// renames the leaves uniformly; it carries no binder identity of its
    /// own, so it is only meaningful when the caller tracks which binder is
    /// being renamed.
    pub fn alpha_convert(&self, new_name: &str) -> Term {
        match self {
            Term::Variable { ty, .. } => Term::var_typed(new_name, ty.clone()),

            Term::Abstraction {
                param,
                param_ty,
                body,
            } => {
                let new_var = Term::var_typed(new_name, param_ty.clone());
                let new_body = body.substitute(param, &new_var);
                Term::Abstraction {
                    param: new_name.to_string(),
                    param_ty: param_ty.clone(),
                    body: Box::new(new_body),
                }
            }

            Term::Application { function, argument } => Term::app(
                function.alpha_convert(new_name),
                argument.alpha_convert(new_name),
            ),
        }
    }
}

/// Generate a name based on `base` that is free in none of `avoid`,
/// by appending primes until the candidate is unused. Deterministic and
/// purely local: no counter survives the call.
fn fresh_name(base: &str, avoid: &[&Term]) -> String {
    let mut candidate = format!("{}'", base);
    while avoid.iter().any(|term| term.has_free(&candidate)) {
        candidate.push('\'');
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_name_appends_primes_until_unused() {
        let body = Term::app(Term::var("x'"), Term::var("x''"));
        let value = Term::var("y");
        assert_eq!(fresh_name("x", &[&body, &value]), "x'''");
    }

    #[test]
    fn fresh_name_first_prime_when_free() {
        let body = Term::var("x");
        let value = Term::var("y");
        assert_eq!(fresh_name("x", &[&body, &value]), "x'");
    }
}
